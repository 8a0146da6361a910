// src/collection/postman.rs

use serde_json::{Map, Value, Error as JsonError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while turning raw text into a [`Collection`]
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] JsonError),

    #[error("Collection root is not a JSON object")]
    NotAnObject,

    #[error("Collection has no top-level \"item\" array")]
    MissingItems,
}

/// A required field is absent from, or has the wrong shape in, an otherwise parseable document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("Missing required field \"{field}\" at {location}")]
    MissingField {
        field: &'static str,
        location: String,
    },

    #[error("Field \"{field}\" at {location} is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        location: String,
    },
}

pub type Result<T> = std::result::Result<T, StructuralError>;

/// A parsed Postman collection. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct Collection {
    root: Map<String, Value>,
}

/// A declared collection variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// A node of the item tree.
///
/// A node may be a folder (nested `item` list), a leaf (`response` list), or both.
/// The two branches are read independently.
#[derive(Debug, Clone)]
pub struct Item<'a> {
    fields: &'a Map<String, Value>,
    location: String,
}

/// A recorded example attached to a leaf item
#[derive(Debug, Clone)]
pub struct Example<'a> {
    fields: &'a Map<String, Value>,
    location: String,
}

/// The request stored alongside an example
#[derive(Debug, Clone)]
pub struct OriginalRequest<'a> {
    fields: &'a Map<String, Value>,
    location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body<'a> {
    /// Raw text payload, when the body is in raw mode
    pub raw: Option<&'a str>,
}

/// Parse a Postman collection from a file
pub fn parse_collection_file<P: AsRef<Path>>(path: P) -> std::result::Result<Collection, ParseError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    Collection::parse(&content)
}

impl Collection {
    /// Parse a Postman collection from a string
    pub fn parse(content: &str) -> std::result::Result<Self, ParseError> {
        let root = match serde_json::from_str::<Value>(content)? {
            Value::Object(root) => root,
            _ => return Err(ParseError::NotAnObject),
        };

        match root.get("item") {
            Some(Value::Array(_)) => Ok(Collection { root }),
            _ => Err(ParseError::MissingItems),
        }
    }

    /// Collection name from `info.name`, if the export carries one
    pub fn name(&self) -> Option<&str> {
        self.root
            .get("info")
            .and_then(|info| info.get("name"))
            .and_then(Value::as_str)
    }

    /// The top-level items, in document order
    pub fn items(&self) -> Result<Vec<Item<'_>>> {
        let items = optional_array(&self.root, "item", "")?.unwrap_or(&[]);
        item_views(items, "")
    }

    /// Declared variables, in document order. An absent list yields no variables.
    pub fn variables(&self) -> Result<Vec<Variable<'_>>> {
        let declared = match optional_array(&self.root, "variable", "")? {
            Some(declared) => declared,
            None => return Ok(Vec::new()),
        };

        declared
            .iter()
            .enumerate()
            .map(|(index, variable)| {
                let location = child_location("", "variable", index);
                let fields = expect_object(variable, "variable", &location)?;
                Ok(Variable {
                    key: require_str(fields, "key", &location)?,
                    value: require_str(fields, "value", &location)?,
                })
            })
            .collect()
    }
}

impl<'a> Item<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Dotted path of this item inside the collection, e.g. `item[0].item[2]`
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Nested items when this node is a folder
    pub fn children(&self) -> Result<Option<Vec<Item<'a>>>> {
        match optional_array(self.fields, "item", &self.location)? {
            Some(items) => item_views(items, &self.location).map(Some),
            None => Ok(None),
        }
    }

    /// Recorded examples when this node is a leaf
    pub fn responses(&self) -> Result<Option<Vec<Example<'a>>>> {
        let responses = match optional_array(self.fields, "response", &self.location)? {
            Some(responses) => responses,
            None => return Ok(None),
        };

        responses
            .iter()
            .enumerate()
            .map(|(index, response)| {
                let location = child_location(&self.location, "response", index);
                let fields = expect_object(response, "response", &location)?;
                Ok(Example { fields, location })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

impl<'a> Example<'a> {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn original_request(&self) -> Result<OriginalRequest<'a>> {
        let value = require(self.fields, "originalRequest", &self.location)?;
        let location = field_location(&self.location, "originalRequest");
        let fields = expect_object(value, "originalRequest", &self.location)?;
        Ok(OriginalRequest { fields, location })
    }
}

impl<'a> OriginalRequest<'a> {
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The HTTP method token, verbatim
    pub fn method(&self) -> Result<&'a str> {
        require_str(self.fields, "method", &self.location)
    }

    /// The unsubstituted `url.raw` string
    pub fn raw_url(&self) -> Result<&'a str> {
        let url = require(self.fields, "url", &self.location)?;
        let url = expect_object(url, "url", &self.location)?;
        require_str(url, "raw", &field_location(&self.location, "url"))
    }

    /// Headers in declaration order. Entries without a `key` are skipped.
    pub fn headers(&self) -> Result<Vec<Header<'a>>> {
        let headers = match optional_array(self.fields, "header", &self.location)? {
            Some(headers) => headers,
            None => return Ok(Vec::new()),
        };

        let mut result = Vec::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let location = child_location(&self.location, "header", index);
            let fields = expect_object(header, "header", &location)?;
            if !fields.contains_key("key") {
                continue;
            }

            result.push(Header {
                key: require_str(fields, "key", &location)?,
                value: require_str(fields, "value", &location)?,
            });
        }

        Ok(result)
    }

    /// The request body, if one is declared
    pub fn body(&self) -> Result<Option<Body<'a>>> {
        let body = match self.fields.get("body") {
            Some(body) => expect_object(body, "body", &self.location)?,
            None => return Ok(None),
        };

        let raw = match body.get("raw") {
            Some(_) => Some(require_str(body, "raw", &field_location(&self.location, "body"))?),
            None => None,
        };

        Ok(Some(Body { raw }))
    }
}

fn item_views<'a>(items: &'a [Value], parent: &str) -> Result<Vec<Item<'a>>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let location = child_location(parent, "item", index);
            let fields = expect_object(item, "item", &location)?;
            Ok(Item { fields, location })
        })
        .collect()
}

fn field_location(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

fn child_location(parent: &str, field: &str, index: usize) -> String {
    format!("{}[{}]", field_location(parent, field), index)
}

fn display_location(location: &str) -> String {
    if location.is_empty() {
        "<root>".to_string()
    } else {
        location.to_string()
    }
}

fn require<'a>(fields: &'a Map<String, Value>, field: &'static str, location: &str) -> Result<&'a Value> {
    fields.get(field).ok_or_else(|| StructuralError::MissingField {
        field,
        location: display_location(location),
    })
}

fn require_str<'a>(fields: &'a Map<String, Value>, field: &'static str, location: &str) -> Result<&'a str> {
    require(fields, field, location)?
        .as_str()
        .ok_or_else(|| StructuralError::WrongType {
            field,
            expected: "a string",
            location: display_location(location),
        })
}

fn expect_object<'a>(value: &'a Value, field: &'static str, location: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| StructuralError::WrongType {
        field,
        expected: "an object",
        location: display_location(location),
    })
}

fn optional_array<'a>(fields: &'a Map<String, Value>, field: &'static str, location: &str) -> Result<Option<&'a [Value]>> {
    match fields.get(field) {
        Some(Value::Array(values)) => Ok(Some(values.as_slice())),
        Some(_) => Err(StructuralError::WrongType {
            field,
            expected: "an array",
            location: display_location(location),
        }),
        None => Ok(None),
    }
}
