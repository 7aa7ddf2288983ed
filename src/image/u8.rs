use crate::error::{Error, Result};

/// Interleaved sample layout of an 8-bit image.
///
/// Multi-channel data is blue-first: `Bgr` for 3 channels and `Bgra` for 4
/// (the in-memory order of a little-endian ARGB32 word).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channels {
    Gray = 1,
    Bgr = 3,
    Bgra = 4,
}

impl Channels {
    #[inline]
    pub const fn count(self) -> usize {
        self as usize
    }

    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Bgr),
            4 => Ok(Self::Bgra),
            n => Err(Error::UnsupportedChannels(n)),
        }
    }
}

/// Borrowed 8-bit view with explicit row stride (in bytes).
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub channels: Channels,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Build a view, checking the stride and buffer length against the layout.
    pub fn new(
        w: usize,
        h: usize,
        channels: Channels,
        stride: usize,
        data: &'a [u8],
    ) -> Result<Self> {
        let view = Self {
            w,
            h,
            channels,
            stride,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// Tightly packed view (`stride == w * channels`).
    pub fn packed(w: usize, h: usize, channels: Channels, data: &'a [u8]) -> Result<Self> {
        let stride = w
            .checked_mul(channels.count())
            .ok_or(Error::LayoutOverflow { w, h, stride: 0 })?;
        Self::new(w, h, channels, stride, data)
    }

    /// Check `stride >= w * channels` and that `data` covers every row.
    pub fn validate(&self) -> Result<()> {
        let overflow = Error::LayoutOverflow {
            w: self.w,
            h: self.h,
            stride: self.stride,
        };
        let Some(min) = self.w.checked_mul(self.channels.count()) else {
            return Err(overflow);
        };
        if self.stride < min {
            return Err(Error::InvalidStride {
                stride: self.stride,
                min,
            });
        }
        let Some(needed) = required_len(self.h, self.stride, min) else {
            return Err(overflow);
        };
        if self.data.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[y * self.stride + x * self.channels.count() + c]
    }
}

/// Bytes spanned by `h` rows of `row_len` samples spaced `stride` apart,
/// or `None` on overflow.
#[inline]
fn required_len(h: usize, stride: usize, row_len: usize) -> Option<usize> {
    match h {
        0 => Some(0),
        _ => (h - 1).checked_mul(stride)?.checked_add(row_len),
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Sample = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels.count()
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels.count()]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        let len = self.w * self.channels.count();
        (self.stride == len).then(|| &self.data[..len * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn padded_stride_rows_skip_alignment_bytes() {
        // 2x2 BGR with 8-byte rows (2 bytes of padding).
        let data = [
            1, 2, 3, 4, 5, 6, 0xAA, 0xAA, //
            7, 8, 9, 10, 11, 12, 0xAA, 0xAA,
        ];
        let img = ImageU8::new(2, 2, Channels::Bgr, 8, &data).unwrap();
        assert_eq!(img.row(1), &[7, 8, 9, 10, 11, 12]);
        assert_eq!(img.get(1, 1, 2), 12);
        assert!(!img.is_contiguous());
        assert!(img.as_slice().is_none());
    }

    #[test]
    fn last_row_does_not_need_trailing_padding() {
        let data = [0u8; 8 + 6];
        assert!(ImageU8::new(2, 2, Channels::Bgr, 8, &data).is_ok());
    }

    #[test]
    fn rejects_short_stride_and_short_buffer() {
        let data = [0u8; 16];
        assert!(matches!(
            ImageU8::new(4, 2, Channels::Bgr, 6, &data),
            Err(Error::InvalidStride { stride: 6, min: 12 })
        ));
        assert!(matches!(
            ImageU8::packed(4, 2, Channels::Bgr, &data),
            Err(Error::BufferTooSmall {
                needed: 24,
                actual: 16
            })
        ));
    }

    #[test]
    fn huge_dimensions_are_rejected_without_wrapping() {
        let data = [0u8; 16];
        // w * 4 wraps to a small value in release arithmetic.
        let wide = ImageU8 {
            w: usize::MAX / 4 + 2,
            h: 1,
            channels: Channels::Bgra,
            stride: 16,
            data: &data,
        };
        assert!(matches!(wide.validate(), Err(Error::LayoutOverflow { .. })));

        // (h - 1) * stride wraps.
        let tall = ImageU8 {
            w: 1,
            h: usize::MAX / 2,
            channels: Channels::Gray,
            stride: 4,
            data: &data,
        };
        assert!(matches!(tall.validate(), Err(Error::LayoutOverflow { .. })));

        assert!(matches!(
            ImageU8::packed(usize::MAX / 2, 1, Channels::Bgr, &data),
            Err(Error::LayoutOverflow { .. })
        ));
    }

    #[test]
    fn channel_counts() {
        assert_eq!(Channels::from_count(4).unwrap(), Channels::Bgra);
        assert!(matches!(
            Channels::from_count(2),
            Err(Error::UnsupportedChannels(2))
        ));
    }
}
