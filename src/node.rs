//! Rendered output tree.
//!
//! Renderers build [`Element`]s with a small builder API; all defaults are
//! explicit at the call site. The tree can be inspected directly or serialized
//! to safe HTML: text and attribute values are escaped and no inline script or
//! event handler is ever written. Actionable elements carry their action as a
//! JSON `data-flex-action` attribute for the host to bind.

use std::fmt::Write;

use crate::action::{resolve_click, Action, ActionHandler};
use crate::class_names;
use crate::style::Resolved;

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["br", "img", "source", "hr"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    class: String,
    styles: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    action: Option<Action>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: String::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    /// Shorthand for `Element::new("div")`
    pub fn div() -> Self {
        Self::new("div")
    }

    // ─── Builder ────────────────────────────────────────────────────────

    /// Merge more classes in; later classes win over earlier conflicting ones.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.class = class_names::merge([self.class.as_str(), classes.as_ref()]);
        self
    }

    /// Set an inline declaration, replacing an earlier value for the same property.
    pub fn style(mut self, prop: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.styles.iter_mut().find(|(p, _)| p == prop) {
            Some(existing) => existing.1 = value,
            None => self.styles.push((prop.to_string(), value)),
        }
        self
    }

    pub fn styles<I>(self, decls: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        decls
            .into_iter()
            .fold(self, |el, (prop, value)| el.style(&prop, value))
    }

    /// Apply one resolved style token
    pub fn apply(self, resolved: Option<Resolved>) -> Self {
        match resolved {
            Some(Resolved::Class(class)) => self.class(class),
            Some(Resolved::Inline(decls)) => self.styles(decls),
            None => self,
        }
    }

    pub fn apply_all(self, resolved: Vec<Resolved>) -> Self {
        resolved.into_iter().fold(self, |el, r| el.apply(Some(r)))
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(nodes);
        self
    }

    /// Make this element a click target for `action`.
    pub fn action(mut self, action: Option<&Action>) -> Self {
        self.action = action.cloned();
        self
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_name(&self) -> &str {
        &self.class
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    pub fn get_style(&self, prop: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn get_action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Simulate a click: forwards the action to `handler` when one resolves.
    /// Returns whether the handler was called.
    pub fn click(&self, handler: &dyn ActionHandler) -> bool {
        match resolve_click(self.action.as_ref(), Some(handler)) {
            Some(click) => {
                click.fire();
                true
            }
            None => false,
        }
    }

    // ─── Traversal ──────────────────────────────────────────────────────

    /// Depth-first, pre-order search including `self`
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if pred(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect(pred, found);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|el| el.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(&|el| el.tag == tag)
    }

    /// Concatenated text of all descendants; `<br>` counts as a newline
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        if self.tag == "br" {
            out.push('\n');
        }
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.push_text(out),
            }
        }
    }

    // ─── HTML ───────────────────────────────────────────────────────────

    pub fn write_html(&self, out: &mut String) -> std::fmt::Result {
        write!(out, "<{}", self.tag)?;
        if !self.class.is_empty() {
            write!(out, " class=\"{}\"", escape_html(&self.class))?;
        }
        if !self.styles.is_empty() {
            let css: String = self
                .styles
                .iter()
                .map(|(p, v)| format!("{p}:{v};"))
                .collect();
            write!(out, " style=\"{}\"", escape_html(&css))?;
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                write!(out, " {name}")?;
            } else {
                write!(out, " {}=\"{}\"", name, escape_html(value))?;
            }
        }
        if let Some(action) = &self.action {
            let json = serde_json::to_string(action).map_err(|_| std::fmt::Error)?;
            write!(out, " data-flex-action=\"{}\"", escape_html(&json))?;
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return Ok(());
        }
        for child in &self.children {
            child.write_html(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn write_html(&self, out: &mut String) -> std::fmt::Result {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(t) => out.write_str(&escape_html(t)),
        }
    }

    /// HTML fragment for this subtree
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Err(err) = self.write_html(&mut out) {
            log::error!("failed to serialize node: {err}");
        }
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MessageAction;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn builder_merges_classes_and_replaces_styles() {
        let el = Element::div()
            .class("flex p-[20px]")
            .class("p-[10px]")
            .style("width", "10px")
            .style("width", "20px")
            .style("max-width", "20px");
        assert_eq!(el.class_name(), "flex p-[10px]");
        assert_eq!(el.get_style("width"), Some("20px"));
        assert_eq!(
            Node::from(el).to_html(),
            r#"<div class="flex p-[10px]" style="width:20px;max-width:20px;"></div>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let el = Element::new("a")
            .attr("href", "https://x.test/?a=1&b=\"2\"")
            .child(Node::text("<script>alert(1)</script>"));
        assert_eq!(
            Node::from(el).to_html(),
            "<a href=\"https://x.test/?a=1&amp;b=&quot;2&quot;\">&lt;script&gt;alert(1)&lt;/script&gt;</a>"
        );
    }

    #[test]
    fn void_elements_and_boolean_attrs() {
        let el = Element::new("video")
            .attr("controls", "")
            .child(Element::new("source").attr("src", "a.mp4"))
            .child(Element::new("br"));
        assert_eq!(
            Node::from(el).to_html(),
            r#"<video controls><source src="a.mp4"><br></video>"#
        );
    }

    #[test]
    fn action_becomes_data_attribute() {
        let action = Action::Message(MessageAction {
            label: None,
            text: "hi".into(),
        });
        let html = Node::from(Element::div().action(Some(&action))).to_html();
        assert_eq!(
            html,
            r#"<div data-flex-action="{&quot;type&quot;:&quot;message&quot;,&quot;text&quot;:&quot;hi&quot;}"></div>"#
        );
    }

    #[test]
    fn click_fires_only_with_action() {
        let calls = Cell::new(0);
        let handler = |_: &Action| calls.set(calls.get() + 1);
        let action = Action::Message(MessageAction {
            label: None,
            text: "hi".into(),
        });

        assert!(!Element::div().click(&handler));
        assert!(Element::div().action(Some(&action)).click(&handler));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn traversal_helpers() {
        let tree = Element::div()
            .class("outer")
            .child(Element::new("p").class("inner").child(Node::text("a")))
            .child(Element::new("br"))
            .child(Element::new("p").class("inner").child(Node::text("b")));
        assert_eq!(tree.find_by_class("inner").len(), 2);
        assert_eq!(tree.find_by_tag("p").len(), 2);
        assert_eq!(tree.text_content(), "a\nb");
    }
}
