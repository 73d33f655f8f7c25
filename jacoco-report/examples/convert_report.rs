//! Standalone report conversion tool
//!
//! Converts a JaCoCo CSV coverage report into a compact HTML table and
//! prints what was converted.
//!
//! Usage:
//!   cargo run --example convert_report -- <jacocoTestReport.csv> <output_table.html> [title]

use jacoco_report::{ConvertConfig, Converter};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <report.csv> <output.html> [title]", args[0]);
        eprintln!("\nExample:");
        eprintln!(
            "  {} build/reports/jacoco/test/jacocoTestReport.csv coverage.html",
            args[0]
        );
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = PathBuf::from(&args[2]);

    let mut config = ConvertConfig::new();
    if let Some(title) = args.get(3) {
        config = config.with_title(title.clone());
    }

    println!("=== JaCoCo Report Converter ===");
    println!("Input: {:?}", input);
    println!("Output: {:?}", output);
    println!();

    let summary = Converter::with_config(config).convert(&input, &output)?;

    println!("Rows converted: {}", summary.rows_converted);
    if summary.rows_skipped > 0 {
        println!("Rows skipped: {}", summary.rows_skipped);
    }
    println!("Total branch coverage: {}", summary.total_branch_coverage);

    Ok(())
}
