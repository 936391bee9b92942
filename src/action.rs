//! Tap/click actions carried by boxes, bubbles, buttons, images and texts.
//!
//! The core never performs an action itself. A rendered element only keeps the
//! action payload; the host binds [`resolve_click`] to its own event system and
//! receives the payload through an [`ActionHandler`].

use serde::de::{DeserializeOwned, Error as DeError};
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A tagged action payload
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Uri(UriAction),
    Message(MessageAction),
    Postback(PostbackAction),
    /// Any other action type, kept verbatim. Never fired.
    Unsupported(Value),
}

/// Opens a URI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_uri: Option<AltUri>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AltUri {
    pub desktop: String,
}

/// Sends a text message as the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// Returns opaque data to the bot server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Action {
    /// The `type` discriminant as it appears in JSON
    pub fn kind(&self) -> &str {
        match self {
            Action::Uri(_) => "uri",
            Action::Message(_) => "message",
            Action::Postback(_) => "postback",
            Action::Unsupported(raw) => raw.get("type").and_then(Value::as_str).unwrap_or(""),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Action::Uri(a) => a.label.as_deref(),
            Action::Message(a) => a.label.as_deref(),
            Action::Postback(a) => a.label.as_deref(),
            Action::Unsupported(raw) => raw.get("label").and_then(Value::as_str),
        }
    }

    /// The target URI when this is a `uri` action
    pub fn uri(&self) -> Option<&str> {
        match self {
            Action::Uri(a) => Some(a.uri.as_str()),
            _ => None,
        }
    }

    /// Whether hosts may be notified about this action
    pub fn is_supported(&self) -> bool {
        !matches!(self, Action::Unsupported(_))
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Puts `"type": tag` in front of the serialized fields of `inner`.
pub(crate) fn tagged_value<T: Serialize>(tag: &str, inner: &T) -> Result<Value, serde_json::Error> {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::String(tag.to_string()));
    if let Value::Object(fields) = serde_json::to_value(inner)? {
        for (key, value) in fields {
            if key != "type" {
                map.insert(key, value);
            }
        }
    }
    Ok(Value::Object(map))
}

/// Deserializes one variant payload out of an already-buffered JSON value.
pub(crate) fn variant_from<T: DeserializeOwned, E: DeError>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
        match kind {
            "uri" => variant_from(value).map(Action::Uri),
            "message" => variant_from(value).map(Action::Message),
            "postback" => variant_from(value).map(Action::Postback),
            _ => Ok(Action::Unsupported(value)),
        }
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = match self {
            Action::Uri(a) => tagged_value("uri", a),
            Action::Message(a) => tagged_value("message", a),
            Action::Postback(a) => tagged_value("postback", a),
            Action::Unsupported(raw) => Ok(raw.clone()),
        }
        .map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

// ─── Click resolution ────────────────────────────────────────────────────────

/// Receives actions fired by clicks on rendered elements.
pub trait ActionHandler {
    fn on_action(&self, action: &Action);
}

impl<F> ActionHandler for F
where
    F: Fn(&Action),
{
    fn on_action(&self, action: &Action) {
        self(action)
    }
}

/// A resolved click: an action bound to the handler that will receive it.
pub struct Click<'a> {
    action: &'a Action,
    handler: &'a dyn ActionHandler,
}

impl<'a> Click<'a> {
    pub fn action(&self) -> &'a Action {
        self.action
    }

    /// Forward the action payload to the handler
    pub fn fire(self) {
        log::debug!("firing {} action", self.action.kind());
        self.handler.on_action(self.action);
    }
}

impl std::fmt::Debug for Click<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Click").field("action", self.action).finish()
    }
}

/// Decide what a click on an element carrying `action` does.
///
/// Returns `None` when there is no action, no handler, or the action type is
/// not one of `uri`, `message`, `postback`.
pub fn resolve_click<'a>(
    action: Option<&'a Action>,
    handler: Option<&'a dyn ActionHandler>,
) -> Option<Click<'a>> {
    let action = action.filter(|a| a.is_supported())?;
    let handler = handler?;
    Some(Click { action, handler })
}
