//! Owned 8-bit image in row-major interleaved layout (`stride == w * channels`).
//!
//! Every operation in the crate returns one of these; inputs are never
//! mutated.
use super::u8::{Channels, ImageU8};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBufU8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    pub channels: Channels,
    /// Bytes between consecutive rows (equals `w * channels`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl ImageBufU8 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize, channels: Channels) -> Self {
        Self::filled(w, h, channels, 0)
    }

    pub fn filled(w: usize, h: usize, channels: Channels, value: u8) -> Self {
        let stride = w * channels.count();
        Self {
            w,
            h,
            channels,
            stride,
            data: vec![value; stride * h],
        }
    }

    /// Wrap tightly packed bytes.
    pub fn from_raw(w: usize, h: usize, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let overflow = || Error::LayoutOverflow { w, h, stride: 0 };
        let stride = w.checked_mul(channels.count()).ok_or_else(overflow)?;
        let expected = stride.checked_mul(h).ok_or_else(overflow)?;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            channels,
            stride,
            data,
        })
    }

    /// Copy a (possibly strided) view into a packed owned buffer.
    pub fn from_view(view: &ImageU8<'_>) -> Self {
        let row_len = view.w * view.channels.count();
        let mut data = Vec::with_capacity(row_len * view.h);
        for y in 0..view.h {
            let start = y * view.stride;
            data.extend_from_slice(&view.data[start..start + row_len]);
        }
        Self {
            w: view.w,
            h: view.h,
            channels: view.channels,
            stride: row_len,
            data,
        }
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            channels: self.channels,
            stride: self.stride,
            data: &self.data,
        }
    }

    #[inline]
    /// Convert (x, y, channel) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize, c: usize) -> usize {
        y * self.stride + x * self.channels.count() + c
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[self.idx(x, y, c)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: usize, v: u8) {
        let i = self.idx(x, y, c);
        self.data[i] = v;
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl crate::image::traits::ImageView for ImageBufU8 {
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
        &self.data[start..start + self.stride]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl crate::image::traits::ImageViewMut for ImageBufU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.stride;
        &mut self.data[start..end]
    }
}
