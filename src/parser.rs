use serde_json::Value;

use crate::components::{Component, FlexContainer, FlexMessage};
use crate::document::FlexDocument;
use crate::error::{FlexError, FlexResult};

const CONTAINER_TYPES: &[&str] = &["bubble", "carousel"];

// ─── Public parse functions ──────────────────────────────────────────────────

/// Parse a Flex document: a `flex` message envelope, a bare bubble or a bare
/// carousel.
///
/// Malformed JSON is reported with its line and column. Nested nodes of an
/// unknown type are not an error; they are kept and skipped at render time.
pub fn parse_document(json: &str) -> FlexResult<FlexDocument> {
    let value: Value = serde_json::from_str(json)?;
    parse_document_value(value)
}

/// Same as [`parse_document`] for an already parsed JSON value
pub fn parse_document_value(value: Value) -> FlexResult<FlexDocument> {
    let kind = top_level_type(&value)?;
    log::debug!("parsing '{kind}' document");

    match kind.as_str() {
        "flex" => {
            let contents = value.get("contents").ok_or(FlexError::MissingType)?;
            let inner = top_level_type(contents)?;
            if !CONTAINER_TYPES.contains(&inner.as_str()) {
                return Err(FlexError::InvalidContainer { kind: inner });
            }
            let message: FlexMessage = serde_json::from_value(value)?;
            Ok(FlexDocument::Message(message))
        }
        k if CONTAINER_TYPES.contains(&k) => {
            let container: FlexContainer = serde_json::from_value(value)?;
            Ok(FlexDocument::Container(container))
        }
        _ => Err(FlexError::InvalidContainer { kind }),
    }
}

/// Parse a single component (box, text, ...). Unknown types parse as
/// [`Component::Unsupported`].
pub fn parse_component(json: &str) -> FlexResult<Component> {
    let value: Value = serde_json::from_str(json)?;
    top_level_type(&value)?;
    Ok(serde_json::from_value(value)?)
}

fn top_level_type(value: &Value) -> FlexResult<String> {
    value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(FlexError::MissingType)
}
