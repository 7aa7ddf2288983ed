//! Bridge between the `image` crate and the canonical buffer, plus JSON output.
//!
//! - `from_dynamic` / `to_dynamic`: swap RGB(A) ⇄ BGR(A) so multi-channel
//!   data reaching the filters is always blue-first.
//! - `load_image` / `save_image`: decode or encode via the file extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Only 8-bit gray, RGB and RGBA are accepted; anything else is
//! `UnsupportedPixelFormat`.
use super::{Channels, ImageBufU8};
use crate::error::{Error, Result};
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Convert a decoded image into the canonical blue-first layout.
pub fn from_dynamic(img: DynamicImage) -> Result<ImageBufU8> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    match img {
        DynamicImage::ImageLuma8(buf) => ImageBufU8::from_raw(w, h, Channels::Gray, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => {
            let mut data = buf.into_raw();
            swap_red_blue(&mut data, 3);
            ImageBufU8::from_raw(w, h, Channels::Bgr, data)
        }
        DynamicImage::ImageRgba8(buf) => {
            let mut data = buf.into_raw();
            swap_red_blue(&mut data, 4);
            ImageBufU8::from_raw(w, h, Channels::Bgra, data)
        }
        other => Err(Error::UnsupportedPixelFormat(format!("{:?}", other.color()))),
    }
}

/// Convert a canonical buffer back to RGB(A) order for encoding.
pub fn to_dynamic(img: &ImageBufU8) -> Result<DynamicImage> {
    let (w, h) = (img.w as u32, img.h as u32);
    let mut data = img.data.clone();
    let dynamic = match img.channels {
        Channels::Gray => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        Channels::Bgr => {
            swap_red_blue(&mut data, 3);
            RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8)
        }
        Channels::Bgra => {
            swap_red_blue(&mut data, 4);
            RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8)
        }
    };
    dynamic.ok_or(Error::LengthMismatch {
        expected: img.w * img.h * img.channels.count(),
        actual: img.data.len(),
    })
}

fn swap_red_blue(data: &mut [u8], cn: usize) {
    for px in data.chunks_exact_mut(cn) {
        px.swap(0, 2);
    }
}

/// Load an image from disk into the canonical layout.
pub fn load_image(path: &Path) -> Result<ImageBufU8> {
    from_dynamic(image::open(path)?)
}

/// Save a canonical buffer; the format follows the file extension.
pub fn save_image(img: &ImageBufU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    to_dynamic(img)?.save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
