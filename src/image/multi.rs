//! Owned multi-channel f32 image in row-major, channel-interleaved layout.
//!
//! All samples for a pixel are contiguous; rows are `w * channels` elements
//! apart. Access goes through explicit strided indexing into the owned
//! buffer, never through raw pointer arithmetic.

/// Owned `width × height × channels` float image.
#[derive(Clone, Debug)]
pub struct MultiChannelImage {
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
    /// Samples per pixel
    pub channels: usize,
    /// Backing storage: row-major, channels interleaved per pixel
    pub data: Vec<f32>,
}

impl MultiChannelImage {
    /// Construct a zero-initialized image of size `w × h × channels`.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            data: vec![0.0; w * h * channels],
        }
    }

    /// Wrap an interleaved sample buffer. Returns `None` when the buffer
    /// length disagrees with `w * h * channels`.
    pub fn from_vec(w: usize, h: usize, channels: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == w * h * channels).then_some(Self {
            w,
            h,
            channels,
            data,
        })
    }

    /// Interleave per-channel planes into one image. Returns `None` when no
    /// planes are given or any plane length disagrees with `w * h`.
    pub fn from_planes(w: usize, h: usize, planes: &[Vec<f32>]) -> Option<Self> {
        if planes.is_empty() || planes.iter().any(|p| p.len() != w * h) {
            return None;
        }
        let channels = planes.len();
        let mut data = Vec::with_capacity(w * h * channels);
        for i in 0..w * h {
            for plane in planes {
                data.push(plane[i]);
            }
        }
        Some(Self {
            w,
            h,
            channels,
            data,
        })
    }

    #[inline]
    /// Linear index of the first sample of pixel (x, y).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * self.channels
    }

    #[inline]
    /// All samples of pixel (x, y) as a slice of length `channels`.
    pub fn pixel(&self, x: usize, y: usize) -> &[f32] {
        let base = self.idx(x, y);
        &self.data[base..base + self.channels]
    }

    #[inline]
    /// Sample `ch` of pixel (x, y).
    pub fn get(&self, x: usize, y: usize, ch: usize) -> f32 {
        self.data[self.idx(x, y) + ch]
    }

    #[inline]
    /// Set sample `ch` of pixel (x, y).
    pub fn set(&mut self, x: usize, y: usize, ch: usize, v: f32) {
        let i = self.idx(x, y) + ch;
        self.data[i] = v;
    }

    /// Copy of the image with every sample multiplied by `ratio`.
    ///
    /// Used to rebalance color similarity against spatial proximity without
    /// touching the caller's buffer.
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            w: self.w,
            h: self.h,
            channels: self.channels,
            data: self
                .data
                .iter()
                .map(|&v| (f64::from(v) * ratio) as f32)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(MultiChannelImage::from_vec(2, 2, 3, vec![0.0; 11]).is_none());
        assert!(MultiChannelImage::from_vec(2, 2, 3, vec![0.0; 12]).is_some());
    }

    #[test]
    fn from_planes_interleaves_channels() {
        let planes = vec![vec![1.0, 2.0], vec![10.0, 20.0]];
        let img = MultiChannelImage::from_planes(2, 1, &planes).unwrap();
        assert_eq!(img.channels, 2);
        assert_eq!(img.pixel(0, 0), &[1.0, 10.0]);
        assert_eq!(img.pixel(1, 0), &[2.0, 20.0]);
    }

    #[test]
    fn from_planes_rejects_malformed_planes() {
        let planes = vec![vec![1.0, 2.0], vec![10.0, 20.0]];
        assert!(MultiChannelImage::from_planes(2, 2, &planes).is_none());
        assert!(MultiChannelImage::from_planes(2, 1, &[]).is_none());
    }

    #[test]
    fn interleaved_indexing_round_trips() {
        let mut img = MultiChannelImage::new(3, 2, 2);
        img.set(2, 1, 1, 7.5);
        assert_eq!(img.get(2, 1, 1), 7.5);
        assert_eq!(img.pixel(2, 1), &[0.0, 7.5]);
    }
}
