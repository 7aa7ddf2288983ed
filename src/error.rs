//! Error type shared by the image, convolution and bridge layers.
//!
//! The filtering core itself degrades gracefully on empty inputs; errors are
//! reserved for malformed shapes (kernels, strides, channel counts) and for
//! the I/O bridge.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Kernel height or width is zero or even, so no centre element exists.
    #[error("kernel must have odd, non-zero dimensions (got {rows}x{cols})")]
    InvalidKernelShape { rows: usize, cols: usize },

    /// Number of weights does not match `rows * cols`.
    #[error("kernel expects {expected} weights, got {actual}")]
    KernelSizeMismatch { expected: usize, actual: usize },

    /// Channel count outside {1, 3, 4}.
    #[error("unsupported channel count {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),

    #[error("row stride {stride} is smaller than width * channels = {min}")]
    InvalidStride { stride: usize, min: usize },

    #[error("pixel buffer holds {actual} bytes, layout needs {needed}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Packed data whose length is not exactly `w * h * channels`.
    #[error("packed buffer must hold exactly {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Byte offsets for the given shape do not fit in `usize`.
    #[error("image layout {w}x{h} with stride {stride} overflows the address space")]
    LayoutOverflow { w: usize, h: usize, stride: usize },

    /// Raised by the format bridge only; the core never sees such data.
    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
