//! Grayscale conversion and per-sample comparison.
//!
//! Luma uses the Rec.601 weights `0.299 R + 0.587 G + 0.114 B` in 14-bit
//! fixed point with round-half-up, so white stays 255 and black stays 0.
//! Alpha is ignored.
use super::buf::ImageBufU8;
use super::u8::{Channels, ImageU8};
use super::{ImageView, ImageViewMut};

const LUMA_SHIFT: u32 = 14;
const LUMA_B: u32 = 1868;
const LUMA_G: u32 = 9617;
const LUMA_R: u32 = 4899;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Luma of one blue-first pixel.
#[inline]
pub fn luma_bgr(b: u8, g: u8, r: u8) -> u8 {
    ((b as u32 * LUMA_B + g as u32 * LUMA_G + r as u32 * LUMA_R + LUMA_ROUND) >> LUMA_SHIFT) as u8
}

/// Reduce a BGR/BGRA image to one luma channel. Gray input is copied as is.
pub fn to_gray(src: &ImageU8<'_>) -> ImageBufU8 {
    if src.channels == Channels::Gray {
        return ImageBufU8::from_view(src);
    }
    let cn = src.channels.count();
    let mut out = ImageBufU8::new(src.w, src.h, Channels::Gray);
    for y in 0..src.h {
        let row = src.row(y);
        for (px, d) in row.chunks_exact(cn).zip(out.row_mut(y)) {
            *d = luma_bgr(px[0], px[1], px[2]);
        }
    }
    out
}

/// Largest absolute per-sample difference, or `None` when the shapes differ.
pub fn max_abs_diff(a: &ImageU8<'_>, b: &ImageU8<'_>) -> Option<u8> {
    if a.w != b.w || a.h != b.h || a.channels != b.channels {
        return None;
    }
    let mut max = 0u8;
    for y in 0..a.h {
        for (&pa, &pb) in a.row(y).iter().zip(b.row(y)) {
            max = max.max(pa.abs_diff(pb));
        }
    }
    Some(max)
}
