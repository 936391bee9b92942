use serde::ser::Error as SerError;
use serde::{Serialize, Serializer};

use crate::action::tagged_value;
use crate::components::{FlexContainer, FlexMessage};

/// The result of parsing a Flex document
///
/// Input may be a full message envelope or a bare container:
/// - `Message`: `{"type": "flex", "altText": ..., "contents": ...}`
/// - `Container`: a bare bubble or carousel
#[derive(Debug, Clone, PartialEq)]
pub enum FlexDocument {
    Message(FlexMessage),
    Container(FlexContainer),
}

impl FlexDocument {
    /// The renderable container, unwrapping the envelope if present
    pub fn container(&self) -> &FlexContainer {
        match self {
            FlexDocument::Message(m) => &m.contents,
            FlexDocument::Container(c) => c,
        }
    }

    /// Alternative text of the envelope; `None` for a bare container
    pub fn alt_text(&self) -> Option<&str> {
        match self {
            FlexDocument::Message(m) => Some(m.alt_text.as_str()),
            FlexDocument::Container(_) => None,
        }
    }

    /// Top-level `type` as it appears in JSON
    pub fn kind(&self) -> &'static str {
        match self {
            FlexDocument::Message(_) => "flex",
            FlexDocument::Container(FlexContainer::Bubble(_)) => "bubble",
            FlexDocument::Container(FlexContainer::Carousel(_)) => "carousel",
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self, FlexDocument::Message(_))
    }
}

impl Serialize for FlexDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FlexDocument::Message(m) => tagged_value("flex", m)
                .map_err(S::Error::custom)?
                .serialize(serializer),
            FlexDocument::Container(c) => c.serialize(serializer),
        }
    }
}
