//! Error types reported by the segmentation entry points.
//!
//! Both variants are detected eagerly, before any stage runs; once validation
//! passes the pipeline cannot fail (all window accesses are bounds-clipped and
//! flattening is guaranteed to terminate).

/// Reasons why a segmentation request is rejected up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentError {
    /// The kernel bandwidth is below the supported minimum of 1.
    InvalidParameter { sigma: f64 },
    /// The image is zero-sized in some dimension, or its backing buffer does
    /// not hold exactly `width * height * channels` samples.
    ShapeMismatch {
        width: usize,
        height: usize,
        channels: usize,
        buffer_len: usize,
    },
}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentError::InvalidParameter { sigma } => {
                write!(f, "kernel bandwidth sigma must be >= 1 (got {sigma})")
            }
            SegmentError::ShapeMismatch {
                width,
                height,
                channels,
                buffer_len,
            } => write!(
                f,
                "invalid image shape {width}x{height}x{channels} (buffer length {buffer_len})"
            ),
        }
    }
}

impl std::error::Error for SegmentError {}
