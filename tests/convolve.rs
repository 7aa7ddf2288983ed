mod common;

use common::synthetic_image::{checkerboard_u8, ramp_u8, with_stride};
use halftone_conv::conv::reference::correlate_zero_border;
use halftone_conv::image::color::{max_abs_diff, to_gray};
use halftone_conv::image::{Channels, ImageU8};
use halftone_conv::{convolve, ConvOptions, Error, Kernel};

#[test]
fn identity_round_trip_for_gray_and_bgr() {
    let opts = ConvOptions::default().with_padding(false);
    let k = Kernel::identity(1).unwrap();
    for channels in [Channels::Gray, Channels::Bgr] {
        let src = ramp_u8(17, 9, channels);
        let out = convolve(src.as_view(), &k, opts).unwrap();
        assert_eq!(out, src, "{channels:?}");
    }
}

#[test]
fn aligned_stride_input_gives_packed_output() {
    let src = ramp_u8(5, 4, Channels::Bgr);
    // 15 bytes per row padded to 16.
    let data = with_stride(&src, 16, 0xEE);
    let view = ImageU8::new(5, 4, Channels::Bgr, 16, &data).unwrap();
    let out = convolve(view, &Kernel::sobel_x(), ConvOptions::default()).unwrap();
    let expected = convolve(src.as_view(), &Kernel::sobel_x(), ConvOptions::default()).unwrap();
    assert_eq!(out, expected);
    assert_eq!(out.stride, 15);
}

#[test]
fn padded_blur_keeps_shape_for_3_5_7() {
    let src = checkerboard_u8(40, 30, 5);
    for size in [3, 5, 7] {
        let out = convolve(src.as_view(), &Kernel::ones(size).unwrap(), ConvOptions::default())
            .unwrap();
        assert_eq!((out.w, out.h), (40, 30), "size {size}");
    }
}

#[test]
fn sobel_on_flat_region_is_zero_and_saturates_on_edges() {
    let src = checkerboard_u8(32, 32, 8);
    let out = convolve(src.as_view(), &Kernel::sobel_x(), ConvOptions::default()).unwrap();
    // Interior of a cell: flat.
    assert_eq!(out.get(4, 4, 0), 0);
    // Dark-to-bright step at x = 8 in the first cell row: 4 * (220 - 32) > 255.
    assert_eq!(out.get(8, 4, 0), 255);
    // Bright-to-dark step at x = 16: negative response clamps to zero.
    assert_eq!(out.get(16, 4, 0), 0);
}

#[test]
fn padded_result_matches_reference_for_color_and_gray() {
    let k = Kernel::from_rows(&[
        [0, 1, 0, -1, 0],
        [1, 2, 0, -2, -1],
        [0, 1, 1, -1, 0],
        [1, 2, 0, -2, -1],
        [0, 1, 0, -1, 0],
    ])
    .unwrap();
    for channels in [Channels::Gray, Channels::Bgr, Channels::Bgra] {
        let src = ramp_u8(23, 11, channels);
        let fast = convolve(src.as_view(), &k, ConvOptions::default()).unwrap();
        let slow = correlate_zero_border(src.as_view(), &k).unwrap();
        assert_eq!(max_abs_diff(&fast.as_view(), &slow.as_view()), Some(0));
    }
}

#[test]
fn grayscale_request_reduces_channels() {
    let src = ramp_u8(8, 8, Channels::Bgra);
    let opts = ConvOptions::default().with_grayscale(true);
    let out = convolve(src.as_view(), &Kernel::identity(3).unwrap(), opts).unwrap();
    assert_eq!(out.channels, Channels::Gray);
    assert_eq!(out, to_gray(&src.as_view()));
}

#[test]
fn even_kernel_is_rejected_before_filtering() {
    let err = Kernel::new(2, 3, vec![0; 6]).unwrap_err();
    assert!(matches!(err, Error::InvalidKernelShape { rows: 2, cols: 3 }));
    assert!(err.to_string().contains("2x3"));
}
