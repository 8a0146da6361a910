// This is the entry point for the CLI application.
// It parses command-line arguments, sets up logging and converts every collection in the input directory.

use std::process;
use clap::Parser;
use postman_curl::cli::{Args, LogFormat};
use postman_curl::{convert_directory, BatchOptions, TracingSink};
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn configure_logging(args: &Args) {
    // RUST_LOG directives take precedence over the verbosity flags
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(args).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match args.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    configure_logging(&args);

    let options = BatchOptions {
        input_ext: args.input_ext.clone(),
        output_ext: args.output_ext.clone(),
    };

    let report = match convert_directory(&args.input_dir, &args.output_dir, &options, Some(&TracingSink)) {
        Ok(report) => report,
        Err(err) => {
            error!("Aborting conversion of {}: {}", args.input_dir.display(), err);
            process::exit(1);
        }
    };

    if args.fail_on_error && !report.is_success() {
        process::exit(1);
    }
}
