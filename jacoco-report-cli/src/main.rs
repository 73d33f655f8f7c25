//! JaCoCo Report CLI Application
//!
//! Command-line interface for the jacoco-report library. It adds:
//! - Input/output path handling with JaCoCo's default locations
//! - Optional TOML configuration with flag overrides
//! - Logging setup driven by -v/-q
//! - A distinct exit code per failure kind for build scripting

use anyhow::Result;
use clap::Parser;
use jacoco_report::{ConvertConfig, ConvertError, ConvertSummary, Converter, MalformedRowPolicy};
use std::path::{Path, PathBuf};

mod config;

/// Default report location used by the Gradle JaCoCo plugin
const DEFAULT_INPUT: &str = "build/reports/jacoco/test/jacocoTestReport.csv";

/// Default output location, next to the report
const DEFAULT_OUTPUT: &str = "build/reports/jacoco/test/output_table.html";

/// JaCoCo Report Converter - coverage CSV to HTML table
#[derive(Parser, Debug)]
#[command(name = "jacoco-report-cli")]
#[command(about = "Convert a JaCoCo CSV coverage report into an HTML table", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the JaCoCo CSV report
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path the HTML document is written to
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Title of the generated HTML document
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Percentages below this value (0-100 scale) are styled red
    #[arg(long, value_name = "PCT")]
    threshold: Option<f64>,

    /// Skip malformed data rows instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("JaCoCo Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using converter library v{}", jacoco_report::VERSION);

    // Start from the config file (if any), then apply flag overrides
    let file_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            Some(config::load_config(path)?)
        }
        None => None,
    };

    let (input, output, convert_config) = resolve_settings(&args, file_config);
    log::debug!("Input: {:?}, output: {:?}", input, output);

    let converter = Converter::with_config(convert_config);
    match converter.convert(&input, &output) {
        Ok(summary) => {
            if !args.quiet {
                print_summary(&output, &summary);
            }
            Ok(())
        }
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(exit_code(&err));
        }
    }
}

/// Merge defaults, config-file values and command-line flags
///
/// Precedence, lowest to highest: built-in defaults, config file, flags.
fn resolve_settings(
    args: &Args,
    file: Option<config::AppConfig>,
) -> (PathBuf, PathBuf, ConvertConfig) {
    let (paths, mut convert) = match file {
        Some(app) => (app.paths, app.convert),
        None => (config::PathsConfig::default(), ConvertConfig::new()),
    };

    let input = args
        .input
        .clone()
        .or(paths.input)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = args
        .output
        .clone()
        .or(paths.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if let Some(title) = &args.title {
        convert = convert.with_title(title.clone());
    }
    if let Some(threshold) = args.threshold {
        convert = convert.with_red_threshold(threshold);
    }
    if args.skip_malformed {
        convert = convert.with_malformed_rows(MalformedRowPolicy::Skip);
    }

    (input, output, convert)
}

/// Map each failure kind to a distinct exit code for build scripts
fn exit_code(err: &ConvertError) -> i32 {
    match err {
        ConvertError::NotFound(_) => 2,
        ConvertError::EmptyInput(_) => 3,
        ConvertError::Read(_) => 4,
        ConvertError::Write(_) => 5,
    }
}

fn print_summary(output: &Path, summary: &ConvertSummary) {
    println!("✓ Report written to {:?}", output);
    println!("  Rows converted: {}", summary.rows_converted);
    if summary.rows_skipped > 0 {
        println!("  Rows skipped:   {}", summary.rows_skipped);
    }
    println!("  Total branch coverage: {}", summary.total_branch_coverage);
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
