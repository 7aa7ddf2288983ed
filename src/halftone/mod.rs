//! Ordered-dither halftone screens at 0° and 45°.
//!
//! Every source pixel becomes a `TILE × TILE` block of black (0) or white
//! (255) pixels. For output pixel `(i, j)` the source sample is
//! `(i / TILE, j / TILE)`; its intensity is rescaled to the threshold cell's
//! level range and compared against the cell entry selected by `(i, j)`.
//! The cell repeats over the whole output independently of the tile grid,
//! so neighbouring tiles continue the same screen.

pub mod matrix;

pub use matrix::{ThresholdMatrix, DIAGONAL, ORTHOGONAL};

use crate::error::Result;
use crate::image::color::to_gray;
use crate::image::{Channels, ImageBufU8, ImageU8, ImageView, ImageViewMut};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Output pixels per source pixel along each axis.
pub const TILE: usize = 12;

pub const BLACK: u8 = 0;
pub const WHITE: u8 = 255;

/// Screen orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenAngle {
    /// 0°: the 12×12 cell tiles the output directly.
    #[default]
    Orthogonal,
    /// 45°: the 8×16 cell, shifted by 8 columns on every other band of 8 rows.
    Diagonal,
}

impl ScreenAngle {
    pub fn matrix(self) -> &'static ThresholdMatrix {
        match self {
            Self::Orthogonal => &ORTHOGONAL,
            Self::Diagonal => &DIAGONAL,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Self::Orthogonal => 0,
            Self::Diagonal => 45,
        }
    }

    /// Threshold cell row used by output row `i`.
    #[inline]
    pub fn cell_row(self, i: usize) -> usize {
        i % self.matrix().rows()
    }

    /// Threshold cell column used by output pixel `(i, j)`.
    #[inline]
    pub fn cell_col(self, i: usize, j: usize) -> usize {
        let m = self.matrix();
        match self {
            Self::Orthogonal => j % m.cols(),
            Self::Diagonal => (j + self.band_shift(i)) % m.cols(),
        }
    }

    /// Column shift applied to output row `i`: zero on even bands of
    /// `rows` output rows, `rows` on odd bands (diagonal screen only).
    #[inline]
    pub fn band_shift(self, i: usize) -> usize {
        match self {
            Self::Orthogonal => 0,
            Self::Diagonal => {
                let rows = self.matrix().rows();
                if (i / rows) % 2 == 0 {
                    0
                } else {
                    rows
                }
            }
        }
    }
}

/// Render `src` as a binary halftone of size `(w * TILE) × (h * TILE)`.
///
/// BGR/BGRA input is reduced to luma first. An empty source yields an empty
/// result.
pub fn render(src: ImageU8<'_>, angle: ScreenAngle) -> Result<ImageBufU8> {
    src.validate()?;
    let (out_w, out_h) = (src.w * TILE, src.h * TILE);
    if src.is_empty() {
        return Ok(ImageBufU8::new(out_w, out_h, Channels::Gray));
    }
    let start = Instant::now();

    let gray;
    let src = if src.channels == Channels::Gray {
        src
    } else {
        gray = to_gray(&src);
        gray.as_view()
    };

    let m = angle.matrix();
    let mut out = ImageBufU8::new(out_w, out_h, Channels::Gray);
    let levels = level_map(&src, m);
    let screen_row = |(i, dst): (usize, &mut [u8])| {
        let levels = levels.row(i / TILE);
        let k = angle.cell_row(i);
        let thresholds = m.row(k);
        let shift = angle.band_shift(i);
        for (j, d) in dst.iter_mut().enumerate() {
            let level = levels[j / TILE];
            let threshold = thresholds[(j + shift) % m.cols()];
            *d = if level < threshold { BLACK } else { WHITE };
        }
    };
    #[cfg(feature = "parallel")]
    out.data.par_chunks_mut(out_w).enumerate().for_each(screen_row);
    #[cfg(not(feature = "parallel"))]
    out.data.chunks_mut(out_w).enumerate().for_each(screen_row);

    debug!(
        "halftone: {}x{} at {}° -> {}x{} in {:.3} ms",
        src.w,
        src.h,
        angle.degrees(),
        out_w,
        out_h,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(out)
}

/// Rescale every sample of a gray image to `m`'s level range.
fn level_map(src: &ImageU8<'_>, m: &ThresholdMatrix) -> ImageBufU8 {
    let mut levels = ImageBufU8::new(src.w, src.h, Channels::Gray);
    for y in 0..src.h {
        for (l, &v) in levels.row_mut(y).iter_mut().zip(src.row(y)) {
            *l = m.level(v);
        }
    }
    levels
}

/// 0° screen.
pub fn render_orthogonal(src: ImageU8<'_>) -> Result<ImageBufU8> {
    render(src, ScreenAngle::Orthogonal)
}

/// 45° screen.
pub fn render_diagonal(src: ImageU8<'_>) -> Result<ImageBufU8> {
    render(src, ScreenAngle::Diagonal)
}
