use halftone_conv::diagnostics::white_fraction;
use halftone_conv::image::{Channels, ImageBufU8};
use halftone_conv::{convolve, render, ConvOptions, Kernel, ScreenAngle};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> halftone_conv::Result<()> {
    // Demo stub: horizontal BGR ramp, sharpened, then screened at both angles.
    let (w, h) = (64usize, 48usize);
    let mut ramp = ImageBufU8::new(w, h, Channels::Bgr);
    for y in 0..h {
        for x in 0..w {
            let v = (x * 255 / (w - 1)) as u8;
            for c in 0..3 {
                ramp.set(x, y, c, v);
            }
        }
    }

    let sharp = convolve(
        ramp.as_view(),
        &Kernel::sharpen(),
        ConvOptions::default().with_grayscale(true),
    )?;
    println!("sharpened: {}x{} ({} ch)", sharp.w, sharp.h, sharp.channels.count());

    for angle in [ScreenAngle::Orthogonal, ScreenAngle::Diagonal] {
        let screened = render(sharp.as_view(), angle)?;
        println!(
            "{}°: {}x{} white={:.3}",
            angle.degrees(),
            screened.w,
            screened.h,
            white_fraction(&screened)
        );
    }
    Ok(())
}
