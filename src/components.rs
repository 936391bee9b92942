use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::action::{tagged_value, variant_from, Action};

/// Any node that can appear inside a box's `contents`.
///
/// The set is closed; a node whose `type` is not one of the ten known kinds is
/// kept verbatim as [`Component::Unsupported`] and skipped by renderers.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Box(FlexBox),
    Button(Button),
    Filler(Filler),
    Icon(Icon),
    Image(Image),
    Separator(Separator),
    Spacer(Spacer),
    Span(Span),
    Text(Text),
    Video(Video),
    Unsupported(Value),
}

impl Component {
    /// The `type` discriminant as it appears in JSON
    pub fn kind(&self) -> &str {
        match self {
            Component::Box(_) => "box",
            Component::Button(_) => "button",
            Component::Filler(_) => "filler",
            Component::Icon(_) => "icon",
            Component::Image(_) => "image",
            Component::Separator(_) => "separator",
            Component::Spacer(_) => "spacer",
            Component::Span(_) => "span",
            Component::Text(_) => "text",
            Component::Video(_) => "video",
            Component::Unsupported(raw) => raw.get("type").and_then(Value::as_str).unwrap_or(""),
        }
    }

    pub fn as_box(&self) -> Option<&FlexBox> {
        match self {
            Component::Box(b) => Some(b),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
        match kind {
            "box" => variant_from(value).map(Component::Box),
            "button" => variant_from(value).map(Component::Button),
            "filler" => variant_from(value).map(Component::Filler),
            "icon" => variant_from(value).map(Component::Icon),
            "image" => variant_from(value).map(Component::Image),
            "separator" => variant_from(value).map(Component::Separator),
            "spacer" => variant_from(value).map(Component::Spacer),
            "span" => variant_from(value).map(Component::Span),
            "text" => variant_from(value).map(Component::Text),
            "video" => variant_from(value).map(Component::Video),
            _ => Ok(Component::Unsupported(value)),
        }
    }
}

impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = match self {
            Component::Box(c) => tagged_value("box", c),
            Component::Button(c) => tagged_value("button", c),
            Component::Filler(c) => tagged_value("filler", c),
            Component::Icon(c) => tagged_value("icon", c),
            Component::Image(c) => tagged_value("image", c),
            Component::Separator(c) => tagged_value("separator", c),
            Component::Spacer(c) => tagged_value("spacer", c),
            Component::Span(c) => tagged_value("span", c),
            Component::Text(c) => tagged_value("text", c),
            Component::Video(c) => tagged_value("video", c),
            Component::Unsupported(raw) => Ok(raw.clone()),
        }
        .map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

// ─── Containers ─────────────────────────────────────────────────────────────

/// The `flex` envelope. Never rendered itself, only unwrapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexMessage {
    #[serde(default)]
    pub alt_text: String,
    pub contents: FlexContainer,
}

/// Top-level renderable: a single bubble or a carousel of bubbles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FlexContainer {
    Bubble(Bubble),
    Carousel(Carousel),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bubble {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "tagged_box")]
    pub header: Option<FlexBox>,
    /// A box or any single leaf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Box<Component>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "tagged_box")]
    pub body: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "tagged_box")]
    pub footer: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<BubbleStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Carousel {
    #[serde(default, serialize_with = "tagged_bubbles")]
    pub contents: Vec<Bubble>,
}

/// Per-section bubble styling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BubbleStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<BlockStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<BlockStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BlockStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<BlockStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_color: Option<String>,
}

fn tagged_box<S: Serializer>(value: &Option<FlexBox>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(b) => tagged_value("box", b)
            .map_err(S::Error::custom)?
            .serialize(serializer),
        None => serializer.serialize_none(),
    }
}

fn tagged_bubbles<S: Serializer>(value: &[Bubble], serializer: S) -> Result<S::Ok, S::Error> {
    let tagged = value
        .iter()
        .map(|b| tagged_value("bubble", b))
        .collect::<Result<Vec<_>, _>>()
        .map_err(S::Error::custom)?;
    tagged.serialize(serializer)
}

// ─── Box ────────────────────────────────────────────────────────────────────

/// Main axis of a box. Unknown tokens read as `vertical`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Horizontal,
    #[default]
    Vertical,
    Baseline,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
            Layout::Baseline => "baseline",
        }
    }

    /// Horizontal and baseline boxes lay children out along a row
    pub fn is_row(self) -> bool {
        !matches!(self, Layout::Vertical)
    }

    pub fn from_token(token: &str) -> Self {
        match token {
            "horizontal" => Layout::Horizontal,
            "vertical" => Layout::Vertical,
            "baseline" => Layout::Baseline,
            other => {
                log::warn!("unknown box layout '{other}', using vertical");
                Layout::default()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(Layout::from_token(&token))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub contents: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_all: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_end: Option<String>,
    #[serde(flatten)]
    pub offsets: Offsets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl FlexBox {
    pub fn layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }
}

/// `position` plus the four offsets. Offsets only apply when `position` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offsets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_end: Option<String>,
}

/// Linear gradient background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub angle: String,
    #[serde(default)]
    pub start_color: String,
    #[serde(default)]
    pub end_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_position: Option<String>,
}

// ─── Leaves ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// `None` when absent; an explicit `""` is kept as given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Span children. Anything that is not a span is ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub offsets: Offsets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl Text {
    /// The text string, empty when absent
    pub fn content(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.contents.iter().filter_map(|c| match c {
            Component::Span(span) => Some(span),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub offsets: Offsets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub offsets: Offsets,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub preview_url: String,
    /// Shown when the video cannot be played
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_content: Option<Box<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(flatten)]
    pub offsets: Offsets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjust_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Separator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_nested_box() {
        let json = r##"{
            "type": "box",
            "layout": "horizontal",
            "contents": [
                {"type": "text", "text": "hi", "flex": 0},
                {"type": "separator", "color": "#ff0000"}
            ]
        }"##;
        let component: Component = serde_json::from_str(json).unwrap();
        let b = component.as_box().unwrap();
        assert_eq!(b.layout(), Layout::Horizontal);
        assert_eq!(b.contents.len(), 2);
        assert!(matches!(&b.contents[0], Component::Text(t) if t.flex == Some(0)));
    }

    #[test]
    fn layout_defaults_to_vertical() {
        let component: Component = serde_json::from_str(r#"{"type":"box","contents":[]}"#).unwrap();
        assert_eq!(component.as_box().unwrap().layout(), Layout::Vertical);
    }

    #[test]
    fn unknown_layout_reads_as_vertical() {
        let component: Component =
            serde_json::from_str(r#"{"type":"box","layout":"grid","contents":[]}"#).unwrap();
        let b = component.as_box().unwrap();
        assert_eq!(b.layout, Some(Layout::Vertical));
        assert_eq!(b.layout(), Layout::Vertical);
    }

    #[test]
    fn unknown_type_is_unsupported() {
        let component: Component = serde_json::from_str(r#"{"type":"hologram","x":1}"#).unwrap();
        assert_eq!(component.kind(), "hologram");
        assert!(matches!(component, Component::Unsupported(_)));
    }

    #[test]
    fn offsets_flatten_into_leaf() {
        let json = r#"{"type":"icon","url":"u","position":"absolute","offsetTop":"4px"}"#;
        let Component::Icon(icon) = serde_json::from_str(json).unwrap() else {
            panic!("expected icon");
        };
        assert_eq!(icon.offsets.position.as_deref(), Some("absolute"));
        assert_eq!(icon.offsets.offset_top.as_deref(), Some("4px"));
    }

    #[test]
    fn text_spans_skip_other_nodes() {
        let json = r#"{"type":"text","contents":[
            {"type":"span","text":"a"},
            {"type":"icon","url":"u"},
            {"type":"span","text":"b"}
        ]}"#;
        let Component::Text(text) = serde_json::from_str(json).unwrap() else {
            panic!("expected text");
        };
        let spans: Vec<&str> = text.spans().map(|s| s.text.as_str()).collect();
        assert_eq!(spans, vec!["a", "b"]);
    }

    #[test]
    fn serializes_with_type_tags() {
        let bubble = Bubble {
            body: Some(FlexBox::default()),
            ..Default::default()
        };
        let carousel = FlexContainer::Carousel(Carousel {
            contents: vec![bubble],
        });
        assert_eq!(
            serde_json::to_string(&carousel).unwrap(),
            r#"{"type":"carousel","contents":[{"type":"bubble","body":{"type":"box","contents":[]}}]}"#
        );
    }
}
