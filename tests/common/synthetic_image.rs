use quickshift_segmentation::image::MultiChannelImage;

/// Single-channel image with every pixel set to `value`.
pub fn uniform_image(width: usize, height: usize, value: f32) -> MultiChannelImage {
    let mut img = MultiChannelImage::new(width, height, 1);
    img.data.fill(value);
    img
}

/// Single-channel image split into a left half of `left` and a right half of
/// `right` at `width / 2`.
pub fn half_split_image(width: usize, height: usize, left: f32, right: f32) -> MultiChannelImage {
    let mut img = MultiChannelImage::new(width, height, 1);
    for y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { left } else { right };
            img.set(x, y, 0, v);
        }
    }
    img
}

/// Deterministic low-amplitude texture, useful when a run should produce more
/// than a handful of segments.
pub fn textured_image(width: usize, height: usize) -> MultiChannelImage {
    let mut img = MultiChannelImage::new(width, height, 1);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 7 + y * 13) % 5) as f32 * 3.0;
            img.set(x, y, 0, v);
        }
    }
    img
}
