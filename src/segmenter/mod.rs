//! Quickshift segmenter orchestrating the four-stage pipeline.
//!
//! Overview
//! - Estimates a per-pixel kernel density over a clipped color-spatial
//!   window, optionally perturbing it with seeded noise to break ties.
//! - Links each pixel to its closest strictly-higher-density in-window
//!   neighbor, recording parent pointers and link distances.
//! - Severs links longer than the cutoff, turning pixels into tree roots.
//! - Flattens the resulting forest by pointer doubling into per-pixel root
//!   labels.
//!
//! Modules
//! - [`params`] – configuration for the pipeline and the demo binary.
//! - `pipeline` – validation, stage orchestration, timing and the
//!   [`Segmentation`] result.
//!
//! The stage functions themselves live in [`crate::density`],
//! [`crate::linker`] and [`crate::forest`] and are public for callers that
//! want to drive individual stages.

pub mod params;
mod pipeline;

pub use params::QuickshiftParams;
pub use pipeline::{segment, Segmentation, SegmentationDiagnostics};
