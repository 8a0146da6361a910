pub mod variables;
pub mod substitute;
pub mod curl;
pub mod walker;
pub mod processor;

pub use variables::VariableStore;
pub use substitute::substitute;
pub use curl::render_request;
pub use walker::walk_items;
pub use processor::{
    convert_collection,
    format_commands,
    process_collection,
    ConvertError,
};
