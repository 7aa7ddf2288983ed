use halftone_conv::config::convolve;
use halftone_conv::conv::{self, reference};
use halftone_conv::diagnostics::{ConvolveReport, InputDescriptor, TimingBreakdown};
use halftone_conv::image::color::{max_abs_diff, to_gray};
use halftone_conv::image::io::{load_image, save_image, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = convolve::load_config(Path::new(&config_path))?;
    let kernel = config.kernel.resolve()?;

    let mut timings = TimingBreakdown::default();
    let source = timings
        .time("load", || load_image(&config.input))
        .map_err(|e| format!("Failed to open {}: {e}", config.input.display()))?;
    let view = source.as_view();

    let filtered = timings
        .time("convolve", || conv::convolve(view, &kernel, config.options))
        .map_err(|e| e.to_string())?;

    let reference_max_diff = if config.compare_reference {
        let reference_input = if config.options.grayscale {
            to_gray(&view)
        } else {
            source.clone()
        };
        let expected = timings
            .time("reference", || {
                reference::correlate_zero_border(reference_input.as_view(), &kernel)
            })
            .map_err(|e| e.to_string())?;
        if !config.options.pad {
            eprintln!("Note: reference assumes zero padding; border samples will differ");
        }
        max_abs_diff(&filtered.as_view(), &expected.as_view())
    } else {
        None
    };

    timings
        .time("save", || save_image(&filtered, &config.output.image))
        .map_err(|e| format!("Failed to save {}: {e}", config.output.image.display()))?;

    let report = ConvolveReport {
        input: InputDescriptor::from_view(&view),
        output: InputDescriptor::from_view(&filtered.as_view()),
        kernel,
        options: config.options,
        reference_max_diff,
        timings,
    };

    println!(
        "Filtered {}x{} ({} ch) with {}x{} kernel in {:.3} ms -> {}",
        report.input.width,
        report.input.height,
        report.input.channels,
        report.kernel.rows(),
        report.kernel.cols(),
        report.timings.total_ms,
        config.output.image.display()
    );
    if let Some(diff) = report.reference_max_diff {
        println!("Reference comparison: max |diff| = {diff}");
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: convolve_demo <config.json>".to_string()
}
