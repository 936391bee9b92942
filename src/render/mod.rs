//! Tree renderer: turns a parsed document into a [`Node`] tree.
//!
//! Each node resolves its own styles from its attributes and recurses into its
//! children with an immutable [`Context`]. Nothing here can fail; nodes of an
//! unknown type are dropped.

mod bubble;
mod button;
mod carousel;
mod layout_box;
mod media;
mod rules;
mod text;

use crate::components::{
    Bubble, Button, Carousel, Component, Filler, FlexBox, FlexContainer, Icon, Image, Offsets,
    Separator, Spacer, Span, Text, Video,
};
use crate::config::RenderConfig;
use crate::dispatch::{dispatch, Context, Visitor};
use crate::document::FlexDocument;
use crate::node::{Element, Node};
use crate::style;

pub struct Renderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Render a whole document. Messages are unwrapped to their container.
    pub fn render_document(&self, document: &FlexDocument) -> Node {
        log::debug!("rendering {} document", document.kind());
        self.render_container(document.container())
    }

    pub fn render_container(&self, container: &FlexContainer) -> Node {
        let inner = match container {
            FlexContainer::Bubble(b) => self.render_bubble(b),
            FlexContainer::Carousel(c) => self.render_carousel(c),
        };
        Element::div().class("w-full").child(inner).into()
    }

    pub fn render_bubble(&self, bubble: &Bubble) -> Element {
        bubble::render(self, bubble, None)
    }

    pub fn render_carousel(&self, carousel: &Carousel) -> Element {
        carousel::render(self, carousel)
    }

    /// Render a single component outside any box
    pub fn render_component(&self, component: &Component) -> Option<Node> {
        dispatch(self, component, Context::root())
    }

    /// Render `contents` of a box with `ctx` already pointing inside it.
    /// Unsupported nodes are skipped; order is preserved.
    fn render_children(&self, contents: &[Component], ctx: Context) -> Vec<Node> {
        contents
            .iter()
            .filter_map(|child| dispatch(self, child, ctx))
            .collect()
    }
}

/// Flex, margin and offsets: the placement attributes shared by most leaves
fn placed(el: Element, flex: Option<i64>, margin: Option<&str>, offsets: &Offsets) -> Element {
    el.apply(style::flex(flex))
        .apply(style::margin(margin))
        .apply_all(style::offsets(offsets))
}

impl Visitor for Renderer<'_> {
    type Output = Option<Node>;

    fn visit_box(&self, node: &FlexBox, ctx: Context) -> Option<Node> {
        Some(layout_box::render(self, node, ctx).into())
    }

    fn visit_button(&self, node: &Button, _ctx: Context) -> Option<Node> {
        Some(button::render(node).into())
    }

    fn visit_filler(&self, node: &Filler, _ctx: Context) -> Option<Node> {
        Some(rules::filler(node).into())
    }

    fn visit_icon(&self, node: &Icon, _ctx: Context) -> Option<Node> {
        Some(media::icon(node).into())
    }

    fn visit_image(&self, node: &Image, _ctx: Context) -> Option<Node> {
        Some(media::image(node).into())
    }

    fn visit_separator(&self, node: &Separator, ctx: Context) -> Option<Node> {
        Some(rules::separator(self.config, node, ctx).into())
    }

    fn visit_spacer(&self, node: &Spacer, _ctx: Context) -> Option<Node> {
        Some(rules::spacer(node).into())
    }

    fn visit_span(&self, node: &Span, _ctx: Context) -> Option<Node> {
        Some(text::span(node).into())
    }

    fn visit_text(&self, node: &Text, _ctx: Context) -> Option<Node> {
        Some(text::render(node).into())
    }

    fn visit_video(&self, node: &Video, ctx: Context) -> Option<Node> {
        let alt = node
            .alt_content
            .as_deref()
            .and_then(|alt| dispatch(self, alt, ctx.detached()));
        Some(media::video(node, alt).into())
    }

    fn visit_unsupported(&self, kind: &str, ctx: Context) -> Option<Node> {
        log::warn!("skipping unsupported component '{kind}' at depth {}", ctx.depth);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::parser::parse_document;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn render_json(json: &str) -> Element {
        let doc = parse_document(json).unwrap();
        let config = RenderConfig::default();
        match Renderer::new(&config).render_document(&doc) {
            Node::Element(el) => el,
            Node::Text(t) => panic!("unexpected text root {t}"),
        }
    }

    fn bubble_with_body(body: &str) -> String {
        format!(r#"{{"type":"bubble","body":{body}}}"#)
    }

    #[test]
    fn hello_world_box() {
        let root = render_json(&bubble_with_body(
            r#"{"type":"box","layout":"vertical","contents":[{"type":"text","text":"Hello, World!"}]}"#,
        ));
        let boxes = root.find_by_class("lf-box");
        assert_eq!(boxes.len(), 1);
        assert!(boxes[0].has_class("lf-vertical"));
        assert_eq!(boxes[0].child_elements().count(), 1);

        let p = &root.find_by_tag("p")[0];
        assert!(p.has_class("text-[16px]"));
        assert_eq!(p.text_content(), "Hello, World!");
    }

    #[test]
    fn child_count_matches_supported_contents() {
        let root = render_json(&bubble_with_body(
            r#"{"type":"box","layout":"horizontal","contents":[
                {"type":"text","text":"a"},
                {"type":"mystery"},
                {"type":"filler"},
                {"type":"spacer","size":"sm"},
                {"type":"image","url":"https://x.test/a.png"}
            ]}"#,
        ));
        let body_box = root.find_by_class("lf-box")[0];
        assert_eq!(body_box.child_elements().count(), 4);
    }

    #[test]
    fn empty_box_is_empty_container() {
        let root = render_json(&bubble_with_body(r#"{"type":"box","contents":[]}"#));
        let body_box = root.find_by_class("lf-box")[0];
        assert!(body_box.child_nodes().is_empty());
    }

    #[test]
    fn separator_follows_parent_layout() {
        let root = render_json(&bubble_with_body(
            r#"{"type":"box","layout":"vertical","contents":[
                {"type":"box","layout":"horizontal","contents":[{"type":"separator"}]},
                {"type":"separator"}
            ]}"#,
        ));
        let rules = root.find_by_class("lf-separator");
        assert_eq!(rules.len(), 2);

        let vertical_rule = rules[0];
        assert!(vertical_rule.has_class("h-full"));
        assert!(vertical_rule.has_class("w-px"));
        assert!(vertical_rule.has_class("border-l"));

        let horizontal_rule = rules[1];
        assert!(horizontal_rule.has_class("w-full"));
        assert!(horizontal_rule.has_class("h-px"));
        assert!(horizontal_rule.has_class("border-t"));
    }

    #[test]
    fn flex_zero_and_unset_differ() {
        let root = render_json(&bubble_with_body(
            r#"{"type":"box","layout":"horizontal","contents":[
                {"type":"text","text":"a","flex":0},
                {"type":"text","text":"b"},
                {"type":"text","text":"c","flex":2}
            ]}"#,
        ));
        let texts = root.find_by_class("lf-text");
        assert!(texts[0].has_class("flex-none"));
        assert!(!texts[1].has_class("flex-none"));
        assert_eq!(texts[1].get_style("flex"), None);
        assert_eq!(texts[2].get_style("flex"), Some("2 0 0"));
    }

    #[test]
    fn button_placeholder_label_and_click() {
        let root = render_json(&bubble_with_body(
            r#"{"type":"box","contents":[
                {"type":"button","action":{"type":"uri","uri":"https://line.me"}}
            ]}"#,
        ));
        let button = root.find_by_tag("button")[0];
        assert_eq!(button.text_content(), "Button");

        let fired = RefCell::new(None);
        let handler = |a: &Action| *fired.borrow_mut() = Some(a.clone());
        assert!(button.click(&handler));
        let fired = fired.into_inner().unwrap();
        assert_eq!(fired.uri(), Some("https://line.me"));
    }

    #[test]
    fn icon_width_from_aspect_ratio() {
        let root = render_json(&bubble_with_body(
            r#"{"type":"box","layout":"baseline","contents":[
                {"type":"icon","url":"https://x.test/i.png","aspectRatio":"2:1"}
            ]}"#,
        ));
        let glyph = root.find_by_class("lf-icon-glyph")[0];
        assert_eq!(glyph.get_style("width"), Some("2em"));
        assert_eq!(glyph.get_style("height"), Some("1em"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let json = bubble_with_body(
            r#"{"type":"box","spacing":"md","contents":[{"type":"text","text":"x","wrap":true}]}"#,
        );
        let doc = parse_document(&json).unwrap();
        let config = RenderConfig::default();
        let renderer = Renderer::new(&config);
        assert_eq!(renderer.render_document(&doc), renderer.render_document(&doc));
    }
}
