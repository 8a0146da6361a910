pub mod cli;
pub mod collection;
pub mod convert;
pub mod batch;
pub mod utils;

// Re-export frequently used items for easier access
pub use collection::{parse_collection_file, Collection};
pub use convert::{process_collection, render_request, substitute, walk_items, VariableStore};
pub use batch::{convert_directory, convert_file, BatchOptions, ConversionReport, ProgressSink, TracingSink};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parser error: {0}")]
    ParserError(#[from] collection::ParseError),

    #[error("Conversion error: {0}")]
    ConvertError(#[from] convert::ConvertError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
