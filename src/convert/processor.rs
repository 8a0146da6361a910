use thiserror::Error;
use tracing::debug;

use super::{walk_items, VariableStore};
use crate::collection::{Collection, ParseError, StructuralError};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert the text of one exported collection into its cURL commands, in traversal order.
///
/// Either every command is returned or none is.
pub fn process_collection(content: &str) -> Result<Vec<String>> {
    let collection = Collection::parse(content)?;
    convert_collection(&collection)
}

/// Render the commands of an already parsed collection
pub fn convert_collection(collection: &Collection) -> Result<Vec<String>> {
    let variables = VariableStore::build(collection)?;
    debug!(
        collection = collection.name().unwrap_or_default(),
        "Loaded {} variable(s)",
        variables.len()
    );

    let items = collection.items()?;
    Ok(walk_items(&items, &variables)?)
}

/// Lay out commands for an output file, each followed by a blank line
pub fn format_commands<S: AsRef<str>>(commands: &[S]) -> String {
    let mut output = String::new();
    for command in commands {
        output.push_str(command.as_ref());
        output.push_str("\n\n");
    }
    output
}
