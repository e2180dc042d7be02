//! Kernel density estimation over a clipped color-spatial window.
//!
//! For every pixel the estimator sums a Gaussian kernel over the neighbors in
//! a square window of radius `⌊2σ⌋/2`, clipped to the image bounds (no
//! padding, no wraparound). The kernel argument is the joint distance:
//! squared per-channel color difference plus squared spatial offset.
//!
//! [`perturb_density`] optionally adds tiny seedable noise to the finished
//! field so that equal-density pixels acquire an almost-sure strict order
//! before linking. The noise source is constructed explicitly; nothing reads
//! ambient global RNG state. Densities and distances are f64 throughout: the
//! noise sits five orders of magnitude below the kernel sums and must not be
//! rounded away when added.
//!
//! Complexity: O(W·H·w²·C); per-pixel sums only read the immutable image, so
//! rows are computed in parallel under the `parallel` feature.

use crate::image::{FloatMap, MultiChannelImage};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scale of the tie-breaking noise added by [`perturb_density`].
///
/// Small enough to never reorder pixels whose kernel sums genuinely differ.
pub const PERTURBATION_SCALE: f64 = 1e-5;

/// Half-width of the clipped square window for bandwidth `sigma`.
///
/// The full window spans `⌊2σ⌋` pixels; neighbor offsets run over
/// `[-w/2, w/2]` with integer division.
#[inline]
pub fn window_radius(sigma: f64) -> usize {
    (2.0 * sigma) as usize / 2
}

/// Joint color-spatial squared distance between pixels (x, y) and (nx, ny):
/// sum of squared per-channel differences plus `dx² + dy²`.
#[inline]
pub fn color_spatial_distance(
    image: &MultiChannelImage,
    x: usize,
    y: usize,
    nx: usize,
    ny: usize,
) -> f64 {
    let a = image.pixel(x, y);
    let b = image.pixel(nx, ny);
    let mut dist = 0.0f64;
    for (pa, pb) in a.iter().zip(b.iter()) {
        let diff = f64::from(*pa) - f64::from(*pb);
        dist += diff * diff;
    }
    let dx = nx as f64 - x as f64;
    let dy = ny as f64 - y as f64;
    dist + dx * dx + dy * dy
}

fn density_row(image: &MultiChannelImage, sigma: f64, radius: usize, y: usize, out: &mut [f64]) {
    let y0 = y.saturating_sub(radius);
    let y1 = (y + radius).min(image.h - 1);
    for (x, out_px) in out.iter_mut().enumerate() {
        let x0 = x.saturating_sub(radius);
        let x1 = (x + radius).min(image.w - 1);
        // Self term (dx = dy = 0) contributes exp(0) = 1.
        let mut sum = 0.0f64;
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                sum += (-color_spatial_distance(image, x, y, nx, ny) / sigma).exp();
            }
        }
        *out_px = sum;
    }
}

/// Estimate the per-pixel density of `image` with bandwidth `sigma`.
pub fn estimate_density(image: &MultiChannelImage, sigma: f64) -> FloatMap {
    let radius = window_radius(sigma);
    let mut field = FloatMap::new(image.w, image.h);
    fill_density(image, sigma, radius, &mut field);
    debug!(
        "density: estimated {}x{} field (radius={}, sigma={:.3})",
        image.w, image.h, radius, sigma
    );
    field
}

#[cfg(not(feature = "parallel"))]
fn fill_density(image: &MultiChannelImage, sigma: f64, radius: usize, field: &mut FloatMap) {
    for y in 0..image.h {
        density_row(image, sigma, radius, y, field.row_mut(y));
    }
}

#[cfg(feature = "parallel")]
fn fill_density(image: &MultiChannelImage, sigma: f64, radius: usize, field: &mut FloatMap) {
    use rayon::prelude::*;

    let w = image.w.max(1);
    field
        .data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| density_row(image, sigma, radius, y, row));
}

/// Add independent small-scale noise to every density entry.
///
/// `seed` pins the noise for reproducible runs; `None` draws a fresh seed
/// from OS entropy.
pub fn perturb_density(field: &mut FloatMap, seed: Option<u64>) {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    for v in &mut field.data {
        *v += rng.gen::<f64>() * PERTURBATION_SCALE;
    }
}
