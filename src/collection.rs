// This file contains the collection module, responsible for reading an exported Postman collection
// and exposing read-only views over its item tree.

pub mod postman;

pub use postman::{
    parse_collection_file,
    Body,
    Collection,
    Example,
    Header,
    Item,
    OriginalRequest,
    ParseError,
    StructuralError,
    Variable,
    Result,
};
