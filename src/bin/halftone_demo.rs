use halftone_conv::config::halftone;
use halftone_conv::diagnostics::{white_fraction, HalftoneReport, InputDescriptor, TimingBreakdown};
use halftone_conv::halftone::render;
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
    let config = halftone::load_config(Path::new(&config_path))?;

    let mut timings = TimingBreakdown::default();
    let source = timings
        .time("load", || load_image(&config.input))
        .map_err(|e| format!("Failed to open {}: {e}", config.input.display()))?;
    let screened = timings
        .time("render", || render(source.as_view(), config.angle))
        .map_err(|e| e.to_string())?;
    timings
        .time("save", || save_image(&screened, &config.output.image))
        .map_err(|e| format!("Failed to save {}: {e}", config.output.image.display()))?;

    let report = HalftoneReport {
        input: InputDescriptor::from_view(&source.as_view()),
        output: InputDescriptor::from_view(&screened.as_view()),
        angle: config.angle,
        degrees: config.angle.degrees(),
        white_fraction: white_fraction(&screened),
        timings,
    };

    println!(
        "Screened {}x{} at {}° -> {}x{} (white {:.1}%) in {:.3} ms",
        report.input.width,
        report.input.height,
        report.degrees,
        report.output.width,
        report.output.height,
        report.white_fraction * 100.0,
        report.timings.total_ms
    );
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: halftone_demo <config.json>".to_string()
}
