//! Independent zero-border correlation used to cross-check `convolve`.
//!
//! Each output sample is computed by direct lookup; taps that fall outside
//! the image read as zero. No padded copy is built and nothing runs in
//! parallel, so agreement with the padded fast path is a meaningful check.
use super::Kernel;
use crate::error::Result;
use crate::image::{ImageBufU8, ImageU8};

/// Zero-border correlation of `src` with `kernel`, saturated to `[0, 255]`.
///
/// Matches `convolve` with `pad = true` and `grayscale = false` exactly.
pub fn correlate_zero_border(src: ImageU8<'_>, kernel: &Kernel) -> Result<ImageBufU8> {
    src.validate()?;
    let cn = src.channels.count();
    let (ay, ax) = kernel.anchor();
    let mut out = ImageBufU8::new(src.w, src.h, src.channels);
    for y in 0..src.h {
        for x in 0..src.w {
            for c in 0..cn {
                let mut acc = 0i64;
                for kr in 0..kernel.rows() {
                    let Some(sy) = (y + kr).checked_sub(ay).filter(|&sy| sy < src.h) else {
                        continue;
                    };
                    for kc in 0..kernel.cols() {
                        let Some(sx) = (x + kc).checked_sub(ax).filter(|&sx| sx < src.w) else {
                            continue;
                        };
                        acc += src.get(sx, sy, c) as i64 * kernel.at(kr, kc) as i64;
                    }
                }
                out.set(x, y, c, acc.clamp(0, 255) as u8);
            }
        }
    }
    Ok(out)
}
