use serde_json::Value;
use std::env;
use std::fs;
use tabloid::{GeneratorConfig, Report, ReportError, ReportGenerator};

/// A simple CLI to generate a PDF report from a JSON data file.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Renders a JSON report description into a PDF document.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/report.json> <path/to/output.pdf> [path/to/config.json]",
            program_name(&args)
        );
        std::process::exit(2);
    }

    if let Err(e) = run(&args[1], &args[2], args.get(3).map(String::as_str)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// The invoked name, falling back to the crate name when the OS passes none.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("tabloid", String::as_str)
}

fn run(input_path: &str, output_path: &str, config_path: Option<&str>) -> Result<(), ReportError> {
    let config = match config_path {
        Some(path) => {
            println!("Loading configuration from {}", path);
            GeneratorConfig::from_file(path)?
        }
        None => GeneratorConfig::default(),
    };

    println!("Loading report from {}", input_path);
    let data: Value = serde_json::from_str(&fs::read_to_string(input_path)?)?;
    let report = Report::from_value_with_policy(&data, config.on_section_error)?;

    let generator = ReportGenerator::builder()
        .with_config(config)
        .with_creation_date(chrono::Utc::now())
        .build()?;

    println!("Generating PDF to {}...", output_path);
    generator.generate_to_file(&report, output_path)?;
    println!("Successfully generated {}", output_path);
    Ok(())
}
