//! Constant-value border extension.
use super::buf::ImageBufU8;
use super::u8::ImageU8;
use super::{ImageView, ImageViewMut};

/// Margins added around an image, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Margins {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Margins {
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

/// Copy `src` into the centre of a larger buffer whose margins hold `value`
/// in every channel.
pub fn pad_constant(src: &ImageU8<'_>, margins: Margins, value: u8) -> ImageBufU8 {
    let w = src.w + margins.left + margins.right;
    let h = src.h + margins.top + margins.bottom;
    let mut out = ImageBufU8::filled(w, h, src.channels, value);
    let cn = src.channels.count();
    let x0 = margins.left * cn;
    for y in 0..src.h {
        let row = src.row(y);
        out.row_mut(y + margins.top)[x0..x0 + row.len()].copy_from_slice(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Channels;

    #[test]
    fn zero_border_surrounds_source() {
        let data = [5u8, 6, 7, 8];
        let src = ImageU8::packed(2, 2, Channels::Gray, &data).unwrap();
        let padded = pad_constant(&src, Margins::symmetric(1, 2), 0);
        assert_eq!((padded.w, padded.h), (6, 4));
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0, 0, 0,
            0, 0, 5, 6, 0, 0,
            0, 0, 7, 8, 0, 0,
            0, 0, 0, 0, 0, 0,
        ];
        assert_eq!(padded.data, expected);
    }

    #[test]
    fn multi_channel_border_fills_every_channel() {
        let data = [1u8, 2, 3];
        let src = ImageU8::packed(1, 1, Channels::Bgr, &data).unwrap();
        let padded = pad_constant(&src, Margins::symmetric(0, 1), 9);
        assert_eq!(padded.data, vec![9, 9, 9, 1, 2, 3, 9, 9, 9]);
    }
}
