//! Code generator: serializes a Flex tree into `Lf*` component markup.
//!
//! ```text
//! <LfBubble size="kilo">
//!   <LfBox layout="vertical">
//!     <LfText text="Hello" layout="vertical" />
//!   </LfBox>
//! </LfBubble>
//! ```
//!
//! The walk mirrors the renderer through the shared [`Visitor`]. Each node
//! type serializes a fixed whitelist of attributes; children are indented two
//! spaces per level.

use serde::Serialize;
use serde_json::Value;

use crate::components::{
    Bubble, Button, Carousel, Component, Filler, FlexBox, FlexContainer, Icon, Image, Layout,
    Separator, Spacer, Span, Text, Video,
};
use crate::dispatch::{dispatch, Context, Visitor};
use crate::document::FlexDocument;

const BOX_PROPS: &[&str] = &[
    "layout",
    "flex",
    "spacing",
    "margin",
    "paddingAll",
    "paddingTop",
    "paddingBottom",
    "paddingStart",
    "paddingEnd",
    "position",
    "offsetTop",
    "offsetBottom",
    "offsetStart",
    "offsetEnd",
    "backgroundColor",
    "borderColor",
    "borderWidth",
    "cornerRadius",
    "width",
    "maxWidth",
    "height",
    "maxHeight",
    "justifyContent",
    "alignItems",
    "background",
    "action",
];

const TEXT_PROPS: &[&str] = &[
    "text",
    "flex",
    "margin",
    "position",
    "offsetTop",
    "offsetBottom",
    "offsetStart",
    "offsetEnd",
    "size",
    "align",
    "gravity",
    "wrap",
    "maxLines",
    "weight",
    "color",
    "style",
    "decoration",
    "lineSpacing",
    "action",
];

const SPAN_PROPS: &[&str] = &["text", "size", "color", "weight", "style", "decoration"];

const IMAGE_PROPS: &[&str] = &[
    "url",
    "flex",
    "margin",
    "position",
    "offsetTop",
    "offsetBottom",
    "offsetStart",
    "offsetEnd",
    "align",
    "gravity",
    "size",
    "aspectRatio",
    "aspectMode",
    "backgroundColor",
    "action",
];

const ICON_PROPS: &[&str] = &[
    "url",
    "size",
    "aspectRatio",
    "margin",
    "position",
    "offsetTop",
    "offsetBottom",
    "offsetStart",
    "offsetEnd",
];

const BUTTON_PROPS: &[&str] = &[
    "action",
    "flex",
    "margin",
    "position",
    "offsetTop",
    "offsetBottom",
    "offsetStart",
    "offsetEnd",
    "height",
    "style",
    "color",
    "gravity",
    "adjustMode",
];

const VIDEO_PROPS: &[&str] = &["url", "previewUrl", "altContent", "aspectRatio", "action"];
const BUBBLE_PROPS: &[&str] = &["size", "direction", "styles", "action"];

/// Generate markup for a whole document. Messages are unwrapped.
pub fn generate_jsx(document: &FlexDocument) -> String {
    log::debug!("generating markup for {} document", document.kind());
    match document.container() {
        FlexContainer::Bubble(b) => bubble(b, 0),
        FlexContainer::Carousel(c) => carousel(c, 0),
    }
}

/// Generate markup for a single component, wrapped in a vertical box.
pub fn generate_component_jsx(component: &Component) -> String {
    let wrapper = FlexBox {
        layout: Some(Layout::Vertical),
        contents: vec![component.clone()],
        ..Default::default()
    };
    Generator.visit_box(&wrapper, at_level(0))
}

fn at_level(depth: usize) -> Context {
    Context { layout: None, depth }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// One `key=...` pair: strings quoted, numbers and booleans in braces,
/// anything else as JSON in braces
fn prop_pair(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(format!("{key}=\"{}\"", s.replace('"', "&quot;"))),
        Value::Number(n) => Some(format!("{key}={{{n}}}")),
        Value::Bool(b) => Some(format!("{key}={{{b}}}")),
        other => Some(format!("{key}={{{other}}}")),
    }
}

/// Whitelisted props of `node`, each preceded by a space
fn props<T: Serialize>(node: &T, keys: &[&str]) -> String {
    let value = match serde_json::to_value(node) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("cannot serialize node props: {err}");
            return String::new();
        }
    };
    keys.iter()
        .filter_map(|key| prop_pair(key, value.get(key)?))
        .map(|pair| format!(" {pair}"))
        .collect()
}

/// A composite tag around already generated children
fn wrap(level: usize, tag: &str, props: &str, children: &[String]) -> String {
    let pad = indent(level);
    if children.is_empty() {
        return format!("{pad}<{tag}{props}>\n{pad}</{tag}>");
    }
    format!("{pad}<{tag}{props}>\n{}\n{pad}</{tag}>", children.join("\n"))
}

fn leaf(level: usize, tag: &str, props: &str) -> String {
    format!("{}<{tag}{props} />", indent(level))
}

fn bubble(node: &Bubble, level: usize) -> String {
    let child = at_level(level + 1);
    let mut sections = Vec::new();
    if let Some(header) = &node.header {
        sections.push(Generator.visit_box(header, child));
    }
    if let Some(hero) = node.hero.as_deref() {
        sections.push(dispatch(&Generator, hero, child));
    }
    if let Some(body) = &node.body {
        sections.push(Generator.visit_box(body, child));
    }
    if let Some(footer) = &node.footer {
        sections.push(Generator.visit_box(footer, child));
    }
    wrap(level, "LfBubble", &props(node, BUBBLE_PROPS), &sections)
}

fn carousel(node: &Carousel, level: usize) -> String {
    let bubbles: Vec<String> = node.contents.iter().map(|b| bubble(b, level + 1)).collect();
    wrap(level, "LfCarousel", "", &bubbles)
}

struct Generator;

impl Visitor for Generator {
    type Output = String;

    fn visit_box(&self, node: &FlexBox, ctx: Context) -> String {
        // children see the box's own layout, unset when the box leaves it implicit
        let inner = Context {
            layout: node.layout,
            depth: ctx.depth + 1,
        };
        let children: Vec<String> = node
            .contents
            .iter()
            .map(|c| dispatch(self, c, inner))
            .collect();
        wrap(ctx.depth, "LfBox", &props(node, BOX_PROPS), &children)
    }

    fn visit_button(&self, node: &Button, ctx: Context) -> String {
        leaf(ctx.depth, "LfButton", &props(node, BUTTON_PROPS))
    }

    fn visit_filler(&self, node: &Filler, ctx: Context) -> String {
        leaf(ctx.depth, "LfFiller", &props(node, &["flex"]))
    }

    fn visit_icon(&self, node: &Icon, ctx: Context) -> String {
        leaf(ctx.depth, "LfIcon", &props(node, ICON_PROPS))
    }

    fn visit_image(&self, node: &Image, ctx: Context) -> String {
        leaf(ctx.depth, "LfImage", &props(node, IMAGE_PROPS))
    }

    fn visit_separator(&self, node: &Separator, ctx: Context) -> String {
        leaf(ctx.depth, "LfSeparator", &props(node, &["margin", "color"]))
    }

    fn visit_spacer(&self, node: &Spacer, ctx: Context) -> String {
        leaf(ctx.depth, "LfSpacer", &props(node, &["size"]))
    }

    fn visit_span(&self, node: &Span, ctx: Context) -> String {
        leaf(ctx.depth, "LfSpan", &props(node, SPAN_PROPS))
    }

    fn visit_text(&self, node: &Text, ctx: Context) -> String {
        let mut attrs = props(node, TEXT_PROPS);
        if let Some(layout) = ctx.layout {
            attrs.push_str(&format!(" layout=\"{}\"", layout.as_str()));
        }
        let spans: Vec<String> = node
            .spans()
            .map(|s| self.visit_span(s, at_level(ctx.depth + 1)))
            .collect();
        if spans.is_empty() {
            leaf(ctx.depth, "LfText", &attrs)
        } else {
            wrap(ctx.depth, "LfText", &attrs, &spans)
        }
    }

    fn visit_video(&self, node: &Video, ctx: Context) -> String {
        leaf(ctx.depth, "LfVideo", &props(node, VIDEO_PROPS))
    }

    fn visit_unsupported(&self, kind: &str, ctx: Context) -> String {
        format!("{}{{/* Unsupported component: {kind} */}}", indent(ctx.depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_component, parse_document};
    use pretty_assertions::assert_eq;

    #[test]
    fn bubble_with_nested_box() {
        let doc = parse_document(
            r##"{"type":"bubble","size":"kilo","body":{"type":"box","layout":"vertical","contents":[
                {"type":"text","text":"Hello","weight":"bold"},
                {"type":"box","layout":"horizontal","contents":[{"type":"separator","color":"#ccc"}]}
            ]}}"##,
        )
        .unwrap();
        let expected = r##"<LfBubble size="kilo">
  <LfBox layout="vertical">
    <LfText text="Hello" weight="bold" layout="vertical" />
    <LfBox layout="horizontal">
      <LfSeparator color="#ccc" />
    </LfBox>
  </LfBox>
</LfBubble>"##;
        assert_eq!(generate_jsx(&doc), expected);
    }

    #[test]
    fn value_kinds() {
        let component = parse_component(
            r#"{"type":"text","text":"say \"hi\"","flex":0,"wrap":true,"action":{"type":"message","text":"hi"}}"#,
        )
        .unwrap();
        let expected = r#"<LfBox layout="vertical">
  <LfText text="say &quot;hi&quot;" flex={0} wrap={true} action={{"type":"message","text":"hi"}} layout="vertical" />
</LfBox>"#;
        assert_eq!(generate_component_jsx(&component), expected);
    }

    #[test]
    fn text_without_explicit_box_layout() {
        let doc = parse_document(
            r#"{"type":"bubble","body":{"type":"box","contents":[{"type":"text","text":"x"}]}}"#,
        )
        .unwrap();
        assert_eq!(
            generate_jsx(&doc),
            "<LfBubble>\n  <LfBox>\n    <LfText text=\"x\" />\n  </LfBox>\n</LfBubble>"
        );
    }

    #[test]
    fn text_with_spans() {
        let component = parse_component(
            r##"{"type":"text","contents":[{"type":"span","text":"a","color":"#f00"},{"type":"span","text":"b"}]}"##,
        )
        .unwrap();
        let expected = r##"<LfBox layout="vertical">
  <LfText layout="vertical">
    <LfSpan text="a" color="#f00" />
    <LfSpan text="b" />
  </LfText>
</LfBox>"##;
        assert_eq!(generate_component_jsx(&component), expected);
    }

    #[test]
    fn carousel_and_unsupported() {
        let doc = parse_document(
            r#"{"type":"flex","altText":"x","contents":{"type":"carousel","contents":[
                {"type":"bubble","hero":{"type":"image","url":"https://x.test/a.png","aspectRatio":"16:9"}},
                {"type":"bubble","body":{"type":"box","layout":"vertical","contents":[{"type":"sticker"}]}}
            ]}}"#,
        )
        .unwrap();
        let expected = r#"<LfCarousel>
  <LfBubble>
    <LfImage url="https://x.test/a.png" aspectRatio="16:9" />
  </LfBubble>
  <LfBubble>
    <LfBox layout="vertical">
      {/* Unsupported component: sticker */}
    </LfBox>
  </LfBubble>
</LfCarousel>"#;
        assert_eq!(generate_jsx(&doc), expected);
    }

    #[test]
    fn explicit_empty_text_is_kept() {
        let component = parse_component(r#"{"type":"text","text":""}"#).unwrap();
        assert_eq!(
            generate_component_jsx(&component),
            "<LfBox layout=\"vertical\">\n  <LfText text=\"\" layout=\"vertical\" />\n</LfBox>"
        );
    }

    #[test]
    fn empty_box_closes_on_next_line() {
        let component = parse_component(r#"{"type":"box","layout":"baseline","contents":[]}"#).unwrap();
        assert_eq!(
            generate_component_jsx(&component),
            "<LfBox layout=\"vertical\">\n  <LfBox layout=\"baseline\">\n  </LfBox>\n</LfBox>"
        );
    }

    #[test]
    fn child_order_matches_input() {
        let doc = parse_document(
            r#"{"type":"bubble","body":{"type":"box","contents":[
                {"type":"spacer","size":"sm"},{"type":"filler","flex":2},{"type":"icon","url":"u"}
            ]}}"#,
        )
        .unwrap();
        let out = generate_jsx(&doc);
        let tags: Vec<&str> = out
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("<Lf") && l.ends_with("/>"))
            .collect();
        assert_eq!(
            tags,
            vec![
                "<LfSpacer size=\"sm\" />",
                "<LfFiller flex={2} />",
                "<LfIcon url=\"u\" />"
            ]
        );
    }
}
