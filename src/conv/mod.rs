//! Direct sliding-window 2D convolution over 8-bit images.
//!
//! The kernel is applied as a correlation (no flip): output `(y, x)` is
//! `Σ src(y + a, x + b) · k(a + rows/2, b + cols/2)` for `a, b` spanning the
//! kernel half-sizes, accumulated in `i64` per channel and saturated to
//! `[0, 255]`. Weights may be any `i32`; sums stay exact in `i64`.
//!
//! Border handling:
//! - `pad = true`: the source is extended with zero samples by the kernel
//!   half-size on each side, so the output has the source dimensions and
//!   every pixel is filtered.
//! - `pad = false`: only pixels whose whole footprint lies inside the source
//!   are filtered, in place at their own coordinates. The outer band of
//!   `rows/2` rows and `cols/2` columns is copied from the source unchanged.
//!
//! The result is always a fresh buffer; the source is never written.

pub mod kernel;
pub mod options;
pub mod reference;


pub use kernel::Kernel;
pub use options::ConvOptions;

use crate::error::Result;
use crate::image::border::{pad_constant, Margins};
use crate::image::color::to_gray;
use crate::image::{Channels, ImageBufU8, ImageU8, ImageView};
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Filter `src` with `kernel`. See the module docs for border semantics.
///
/// An empty source is returned unchanged (as an owned copy).
pub fn convolve(src: ImageU8<'_>, kernel: &Kernel, options: ConvOptions) -> Result<ImageBufU8> {
    src.validate()?;
    if src.is_empty() {
        debug!("convolve: empty source {}x{}, returned unchanged", src.w, src.h);
        return Ok(ImageBufU8::from_view(&src));
    }
    let start = Instant::now();

    let gray;
    let src = if options.grayscale && src.channels != Channels::Gray {
        gray = to_gray(&src);
        gray.as_view()
    } else {
        src
    };

    let (ay, ax) = kernel.anchor();
    let padded;
    let (input, mut out) = if options.pad {
        padded = pad_constant(&src, Margins::symmetric(ay, ax), 0);
        (
            padded.as_view(),
            ImageBufU8::new(src.w, src.h, src.channels),
        )
    } else {
        (src, ImageBufU8::from_view(&src))
    };

    // Output rows/cols that receive a filtered value: with padding all of
    // them, otherwise the interior starting at the anchor.
    let (y_lo, x_lo) = if options.pad { (0, 0) } else { (ay, ax) };
    let valid_rows = input.h.saturating_sub(2 * ay);
    let valid_cols = input.w.saturating_sub(2 * ax);

    let window = RowWindow {
        input: &input,
        kernel,
        x_lo,
        valid_cols,
    };
    let filter = |(y, dst): (usize, &mut [u8])| {
        if y >= y_lo && y < y_lo + valid_rows {
            window.filter_row(y - y_lo + ay, dst);
        }
    };
    let stride = out.stride;
    #[cfg(feature = "parallel")]
    out.data.par_chunks_mut(stride).enumerate().for_each(filter);
    #[cfg(not(feature = "parallel"))]
    out.data.chunks_mut(stride).enumerate().for_each(filter);

    debug!(
        "convolve: {}x{}x{} kernel={}x{} pad={} filtered={}x{} in {:.3} ms",
        src.w,
        src.h,
        src.channels.count(),
        kernel.rows(),
        kernel.cols(),
        options.pad,
        valid_cols,
        valid_rows,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(out)
}

/// Per-row accumulation state shared by all workers.
struct RowWindow<'a> {
    input: &'a ImageU8<'a>,
    kernel: &'a Kernel,
    /// First output column receiving a filtered value.
    x_lo: usize,
    valid_cols: usize,
}

impl RowWindow<'_> {
    /// Fill `dst[x_lo..x_lo + valid_cols]` for the kernel centred on input row `iy`.
    fn filter_row(&self, iy: usize, dst: &mut [u8]) {
        let cn = self.input.channels.count();
        let top = iy - self.kernel.anchor().0;
        // Output column `x_lo + i` is centred on input column `i + cols / 2`,
        // so its footprint starts at input column `i`.
        for i in 0..self.valid_cols {
            let mut acc = [0i64; 4];
            for kr in 0..self.kernel.rows() {
                let src_row = self.input.row(top + kr);
                for (kc, &w) in self.kernel.row(kr).iter().enumerate() {
                    if w == 0 {
                        continue;
                    }
                    let base = (i + kc) * cn;
                    for (c, a) in acc.iter_mut().enumerate().take(cn) {
                        *a += src_row[base + c] as i64 * w as i64;
                    }
                }
            }
            let x = self.x_lo + i;
            let px = &mut dst[x * cn..(x + 1) * cn];
            for (d, a) in px.iter_mut().zip(acc) {
                *d = a.clamp(0, 255) as u8;
            }
        }
    }
}
