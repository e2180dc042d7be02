#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod image;
pub mod segmenter;

// Stage modules – public so callers can drive individual stages, but the
// pipeline in `segmenter` is the supported entry point.
pub mod density;
pub mod forest;
pub mod linker;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::SegmentError;
pub use crate::segmenter::{segment, QuickshiftParams, Segmentation, SegmentationDiagnostics};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{FloatMap, IndexMap, MultiChannelImage};
    pub use crate::{segment, QuickshiftParams, SegmentError, Segmentation};
}
