//! End-to-end segmentation pipeline.
//!
//! [`segment`] validates its inputs up front, then runs the four stages in
//! dependency order: density estimation (plus perturbation), linking,
//! cutting, flattening. Each stage consumes only completed outputs of the
//! previous one, so the barrier between density and linking required for
//! parallel execution is structural.
//!
//! Typical usage:
//! ```no_run
//! use quickshift_segmentation::{segment, QuickshiftParams};
//! use quickshift_segmentation::image::MultiChannelImage;
//!
//! # fn example(image: MultiChannelImage) -> Result<(), quickshift_segmentation::SegmentError> {
//! let params = QuickshiftParams {
//!     sigma: 5.0,
//!     tau: 10.0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let result = segment(&image, &params)?;
//! println!("{} segments in {:.3} ms", result.num_segments, result.latency_ms);
//! # Ok(())
//! # }
//! ```

use super::params::QuickshiftParams;
use crate::density::{estimate_density, perturb_density};
use crate::error::SegmentError;
use crate::forest::{count_segments, cut_links, flatten_forest};
use crate::image::{IndexMap, MultiChannelImage};
use crate::linker::link_neighbors;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Final segmentation of one image.
#[derive(Clone, Debug, Serialize)]
pub struct Segmentation {
    /// Per-pixel flat index of the segment root.
    pub labels: IndexMap,
    /// Pre-cut parent hierarchy, present when
    /// [`QuickshiftParams::return_tree`] is set.
    pub tree: Option<IndexMap>,
    /// Number of distinct labels.
    pub num_segments: usize,
    /// End-to-end wall time in milliseconds.
    pub latency_ms: f64,
    /// Per-stage timings and counters.
    pub diagnostics: SegmentationDiagnostics,
}

/// Per-stage timing and counter breakdown for one run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SegmentationDiagnostics {
    pub density_ms: f64,
    pub link_ms: f64,
    pub cut_ms: f64,
    pub flatten_ms: f64,
    /// Pointer-doubling iterations until the fixed point.
    pub flatten_iterations: usize,
    /// Links severed by the cutoff (excluding pixels already self-parented).
    pub links_cut: usize,
}

/// Segment `image` with the quickshift pipeline.
///
/// Fails fast with [`SegmentError`] before any stage runs; past validation
/// the pipeline cannot fail. The image itself is never mutated.
pub fn segment(
    image: &MultiChannelImage,
    params: &QuickshiftParams,
) -> Result<Segmentation, SegmentError> {
    validate(image, params)?;
    let total_start = Instant::now();

    let scaled;
    let input = if params.ratio != 1.0 {
        scaled = image.scaled(params.ratio);
        &scaled
    } else {
        image
    };

    let density_start = Instant::now();
    let mut density = estimate_density(input, params.sigma);
    if params.seed.is_some() {
        perturb_density(&mut density, params.seed);
    }
    let density_ms = density_start.elapsed().as_secs_f64() * 1000.0;

    let link_start = Instant::now();
    let mut linkage = link_neighbors(input, &density, params.sigma);
    let link_ms = link_start.elapsed().as_secs_f64() * 1000.0;

    let tree = params.return_tree.then(|| linkage.parents.clone());

    let cut_start = Instant::now();
    let links_cut = cut_links(&mut linkage.parents, &linkage.distances, params.tau);
    let cut_ms = cut_start.elapsed().as_secs_f64() * 1000.0;

    let flatten_start = Instant::now();
    let outcome = flatten_forest(&linkage.parents);
    let flatten_ms = flatten_start.elapsed().as_secs_f64() * 1000.0;

    let num_segments = count_segments(&outcome.labels);
    let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "quickshift: {}x{}x{} -> {} segments in {:.3} ms \
         (density={:.3} link={:.3} cut={:.3} flatten={:.3})",
        image.w, image.h, image.channels, num_segments, latency_ms, density_ms, link_ms, cut_ms,
        flatten_ms
    );

    Ok(Segmentation {
        labels: outcome.labels,
        tree,
        num_segments,
        latency_ms,
        diagnostics: SegmentationDiagnostics {
            density_ms,
            link_ms,
            cut_ms,
            flatten_ms,
            flatten_iterations: outcome.iterations,
            links_cut,
        },
    })
}

fn validate(image: &MultiChannelImage, params: &QuickshiftParams) -> Result<(), SegmentError> {
    if params.sigma.is_nan() || params.sigma < 1.0 {
        return Err(SegmentError::InvalidParameter {
            sigma: params.sigma,
        });
    }
    let expected = image.w * image.h * image.channels;
    if image.w == 0 || image.h == 0 || image.channels == 0 || image.data.len() != expected {
        return Err(SegmentError::ShapeMismatch {
            width: image.w,
            height: image.h,
            channels: image.channels,
            buffer_len: image.data.len(),
        });
    }
    Ok(())
}
