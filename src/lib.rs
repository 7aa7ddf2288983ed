#![doc = include_str!("../README.md")]

// Public modules
pub mod conv;
pub mod error;
pub mod halftone;
pub mod image;

// Tooling support for the demo binaries.
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::conv::{convolve, ConvOptions, Kernel};
pub use crate::error::{Error, Result};
pub use crate::halftone::{render, render_diagonal, render_orthogonal, ScreenAngle};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use halftone_conv::prelude::*;
///
/// let (w, h) = (4usize, 3usize);
/// let gray = vec![128u8; w * h];
/// let img = ImageU8::packed(w, h, Channels::Gray, &gray).unwrap();
///
/// let sharp = convolve(img, &Kernel::sharpen(), ConvOptions::default()).unwrap();
/// assert_eq!((sharp.w, sharp.h), (w, h));
///
/// let dots = render(img, ScreenAngle::Diagonal).unwrap();
/// assert_eq!((dots.w, dots.h), (w * 12, h * 12));
/// ```
pub mod prelude {
    pub use crate::image::{Channels, ImageBufU8, ImageU8, ImageView};
    pub use crate::{convolve, render, ConvOptions, Kernel, ScreenAngle};
}
