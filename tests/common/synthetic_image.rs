use halftone_conv::image::{Channels, ImageBufU8};

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> ImageBufU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = ImageBufU8::new(width, height, Channels::Gray);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img.set(x, y, 0, val);
        }
    }
    img
}

/// Horizontal 0..=255 ramp replicated into every channel.
pub fn ramp_u8(width: usize, height: usize, channels: Channels) -> ImageBufU8 {
    assert!(width > 1, "ramp needs at least two columns");
    let mut img = ImageBufU8::new(width, height, channels);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            for c in 0..channels.count() {
                img.set(x, y, c, v);
            }
        }
    }
    img
}

/// Copy `img` into rows of `stride` bytes, filling the gap with `fill`.
pub fn with_stride(img: &ImageBufU8, stride: usize, fill: u8) -> Vec<u8> {
    assert!(stride >= img.stride);
    let mut data = vec![fill; stride * img.h];
    for y in 0..img.h {
        let src = &img.data[y * img.stride..(y + 1) * img.stride];
        data[y * stride..y * stride + img.stride].copy_from_slice(src);
    }
    data
}
