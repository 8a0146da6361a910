use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[clap(
    name = "postman-curl",
    about = "Convert exported Postman collections into files of cURL commands",
    version
)]
pub struct Args {
    /// Directory containing the exported collections
    #[clap(short, long, value_name = "DIRECTORY", env = "POSTMAN_CURL_INPUT_DIR", default_value = "postman")]
    pub input_dir: PathBuf,

    /// Directory the generated command files are written to
    #[clap(short, long, value_name = "DIRECTORY", env = "POSTMAN_CURL_OUTPUT_DIR", default_value = "generated")]
    pub output_dir: PathBuf,

    /// Extension of the collection files to convert
    #[clap(long, value_name = "EXT", default_value = "json")]
    pub input_ext: String,

    /// Extension given to generated command files
    #[clap(long, value_name = "EXT", default_value = "txt")]
    pub output_ext: String,

    /// Exit with a failure status if any collection could not be converted
    #[clap(long)]
    pub fail_on_error: bool,

    /// More logging, can be repeated
    #[clap(short, long, parse(from_occurrences), conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[clap(short, long)]
    pub quiet: bool,

    /// Log output format
    #[clap(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl From<&Args> for LevelFilter {
    fn from(args: &Args) -> Self {
        if args.quiet {
            LevelFilter::ERROR
        } else if args.verbose == 0 {
            LevelFilter::INFO
        } else if args.verbose == 1 {
            LevelFilter::DEBUG
        } else {
            LevelFilter::TRACE
        }
    }
}
