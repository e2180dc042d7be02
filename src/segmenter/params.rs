//! Parameter types configuring the quickshift pipeline.
//!
//! Defaults follow common practice for oversegmentation of natural images in
//! 8-bit color ranges; for tuning, start with `sigma` (segment granularity
//! via window size) and `tau` (willingness to merge across weak links).

/// Pipeline-wide parameters for [`crate::segment`].
#[derive(Clone, Debug)]
pub struct QuickshiftParams {
    /// Kernel bandwidth (>= 1). Controls both the density window radius
    /// `⌊2σ⌋/2` and the kernel weighting.
    pub sigma: f64,
    /// Maximum allowed link distance; longer links are severed and their
    /// pixels become tree roots.
    pub tau: f64,
    /// Multiplier applied to channel values before distance computations,
    /// trading color similarity against spatial proximity. `1.0` leaves the
    /// samples untouched.
    pub ratio: f64,
    /// When set, the result carries the full pre-cut parent hierarchy.
    pub return_tree: bool,
    /// Tie-break policy. `Some(seed)` perturbs the density field with seeded
    /// noise, randomizing the order of equal-density pixels reproducibly.
    /// `None` skips the perturbation; exact density ties then fall back to
    /// the linker's deterministic index order, making the output a pure
    /// function of the image and parameters.
    pub seed: Option<u64>,
}

impl Default for QuickshiftParams {
    fn default() -> Self {
        Self {
            sigma: 5.0,
            tau: 10.0,
            ratio: 1.0,
            return_tree: false,
            seed: None,
        }
    }
}
