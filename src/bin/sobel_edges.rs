use serde::Serialize;
use sobel_bands::config::load_config;
use sobel_bands::diagnostics::FilterReport;
use sobel_bands::image::io::{read_pgm, write_json_file, write_pgm};
use sobel_bands::SobelFilter;
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
    let config = load_config(Path::new(&config_path))?;

    let gray = read_pgm(&config.input).map_err(|e| e.to_string())?;
    let filter = SobelFilter::new(config.filter);
    let (edges, report) = filter
        .run_with_report(gray.as_view())
        .map_err(|e| format!("Sobel filter failed on {}: {e}", config.input.display()))?;

    write_pgm(&edges, &config.output.image).map_err(|e| e.to_string())?;
    if let Some(path) = &config.output.report_json {
        let summary = EdgeRunSummary {
            input: config.input.display().to_string(),
            output: config.output.image.display().to_string(),
            report: &report,
        };
        write_json_file(path, &summary)?;
        println!("Saved run report to {}", path.display());
    }

    println!(
        "Saved {}x{} edge image to {} ({} workers, {:.3} ms)",
        report.input.width,
        report.input.height,
        config.output.image.display(),
        report.workers,
        report.timings.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: sobel_edges <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeRunSummary<'a> {
    input: String,
    output: String,
    report: &'a FilterReport,
}
