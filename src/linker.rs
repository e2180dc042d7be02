//! Nearest-higher-density linking.
//!
//! Each pixel scans the same clipped window the density estimator used and,
//! among neighbors ranked strictly higher, picks the one at minimal
//! color-spatial distance. Distance ties are broken deterministically by scan
//! order: the window is walked row-major and only a strictly smaller distance
//! replaces the current best, so the first minimum wins.
//!
//! Ranking is lexicographic: a neighbor is higher when its density is
//! strictly greater, or when the densities are exactly equal and its flat
//! index is smaller. This is a strict total order over the pixels, so the
//! parent graph is acyclic even on an unperturbed field with exact density
//! ties; with perturbation applied the index fallback never fires.
//!
//! A pixel with no qualifying neighbor (a density maximum, or one whose
//! higher-ranked neighbors all fall outside the clipped window) keeps itself
//! as parent and an infinite link distance. Infinity is load-bearing: it is
//! what keeps the threshold cutter from ever confusing such a pixel with one
//! whose nearest higher-density neighbor sits at distance zero.

use crate::density::{color_spatial_distance, window_radius};
use crate::image::{FloatMap, IndexMap, MultiChannelImage};
use log::debug;

/// Parent pointers and link distances produced by [`link_neighbors`].
#[derive(Clone, Debug)]
pub struct Linkage {
    /// Per-pixel parent: a higher-ranked in-window neighbor, or self.
    pub parents: IndexMap,
    /// Distance to the chosen parent; `f64::INFINITY` when parent is self.
    pub distances: FloatMap,
}

#[inline]
fn outranks(density_q: f64, q: usize, density_p: f64, p: usize) -> bool {
    density_q > density_p || (density_q == density_p && q < p)
}

fn link_row(
    image: &MultiChannelImage,
    density: &FloatMap,
    radius: usize,
    y: usize,
    parent_row: &mut [usize],
    dist_row: &mut [f64],
) {
    let y0 = y.saturating_sub(radius);
    let y1 = (y + radius).min(image.h - 1);
    for x in 0..image.w {
        let x0 = x.saturating_sub(radius);
        let x1 = (x + radius).min(image.w - 1);
        let own_idx = y * image.w + x;
        let own = density.get(x, y);
        let mut best_dist = f64::INFINITY;
        let mut best: Option<usize> = None;
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                let neighbor_idx = ny * image.w + nx;
                // the self term falls out here: a pixel never outranks itself
                if !outranks(density.get(nx, ny), neighbor_idx, own, own_idx) {
                    continue;
                }
                let d = color_spatial_distance(image, x, y, nx, ny);
                if d < best_dist {
                    best_dist = d;
                    best = Some(neighbor_idx);
                }
            }
        }
        if let Some(parent) = best {
            parent_row[x] = parent;
            dist_row[x] = best_dist;
        }
    }
}

/// Link every pixel to its closest higher-ranked in-window neighbor.
///
/// `density` must be the completed (and, if desired, perturbed) field for
/// `image`; linking never starts on a partially filled field.
pub fn link_neighbors(image: &MultiChannelImage, density: &FloatMap, sigma: f64) -> Linkage {
    let radius = window_radius(sigma);
    let mut parents = IndexMap::identity(image.w, image.h);
    let mut distances = FloatMap::filled(image.w, image.h, f64::INFINITY);
    fill_links(image, density, radius, &mut parents, &mut distances);

    let roots = distances.data.iter().filter(|d| d.is_infinite()).count();
    debug!(
        "linker: {}x{} linked (radius={}, local maxima={})",
        image.w, image.h, radius, roots
    );
    Linkage { parents, distances }
}

#[cfg(not(feature = "parallel"))]
fn fill_links(
    image: &MultiChannelImage,
    density: &FloatMap,
    radius: usize,
    parents: &mut IndexMap,
    distances: &mut FloatMap,
) {
    for y in 0..image.h {
        let start = y * image.w;
        let end = start + image.w;
        link_row(
            image,
            density,
            radius,
            y,
            &mut parents.data[start..end],
            &mut distances.data[start..end],
        );
    }
}

#[cfg(feature = "parallel")]
fn fill_links(
    image: &MultiChannelImage,
    density: &FloatMap,
    radius: usize,
    parents: &mut IndexMap,
    distances: &mut FloatMap,
) {
    use rayon::prelude::*;

    let w = image.w.max(1);
    parents
        .data
        .par_chunks_mut(w)
        .zip(distances.data.par_chunks_mut(w))
        .enumerate()
        .for_each(|(y, (parent_row, dist_row))| {
            link_row(image, density, radius, y, parent_row, dist_row)
        });
}
