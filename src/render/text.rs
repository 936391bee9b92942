use crate::action::Action;
use crate::components::{Span, Text};
use crate::node::{Element, Node};
use crate::style;

use super::placed;

const NOWRAP: &str = "overflow-hidden text-ellipsis whitespace-nowrap";
const WRAP: &str = "break-words whitespace-normal";

pub(super) fn render(node: &Text) -> Element {
    let mut outer = placed(
        Element::div().class("lf-text relative min-w-0"),
        node.flex,
        node.margin.as_deref(),
        &node.offsets,
    );
    if let Some(class) = node.gravity.as_deref().and_then(style::gravity_class) {
        outer = outer.class(class);
    }

    let mut inner = match node.action.as_ref().and_then(Action::uri) {
        Some(uri) => Element::new("a")
            .attr("href", uri)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer"),
        None => Element::new("p"),
    };

    let wraps = node.wrap.unwrap_or(false) || node.max_lines.is_some_and(|n| n > 0);
    inner = inner
        .class("block m-0")
        .class(if wraps { WRAP } else { NOWRAP })
        .apply(Some(style::font_size(node.size.as_deref())));
    inner = decorate(
        inner,
        node.weight.as_deref(),
        node.style.as_deref(),
        node.decoration.as_deref(),
        node.color.as_deref(),
    );
    if let Some(class) = node.align.as_deref().and_then(style::align_class) {
        inner = inner.class(class);
    }
    if let Some(line_height) = style::line_height(node.line_spacing.as_deref()) {
        inner = inner.style("line-height", line_height);
    }
    if let Some(lines) = node.max_lines.filter(|n| *n > 0) {
        inner = inner
            .class("overflow-hidden")
            .style("display", "-webkit-box")
            .style("-webkit-box-orient", "vertical")
            .style("-webkit-line-clamp", lines.to_string());
    }
    if node.action.is_some() {
        inner = inner.class("cursor-pointer").action(node.action.as_ref());
    }

    let has_spans = node.spans().next().is_some();
    if !has_spans || !node.content().is_empty() {
        inner = inner.children(lines(node.content()));
    }
    inner = inner.children(node.spans().map(|s| Node::from(span(s))));

    outer.child(inner)
}

/// A styled run inside a text. Unset attributes inherit from the text.
pub(super) fn span(node: &Span) -> Element {
    let mut el = Element::new("span");
    if node.size.is_some() {
        el = el.apply(Some(style::font_size(node.size.as_deref())));
    }
    decorate(
        el,
        node.weight.as_deref(),
        node.style.as_deref(),
        node.decoration.as_deref(),
        node.color.as_deref(),
    )
    .children(lines(&node.text))
}

fn decorate(
    mut el: Element,
    weight: Option<&str>,
    font_style: Option<&str>,
    decoration: Option<&str>,
    color: Option<&str>,
) -> Element {
    for class in [
        weight.and_then(style::weight_class),
        font_style.and_then(style::font_style_class),
        decoration.and_then(style::decoration_class),
    ]
    .into_iter()
    .flatten()
    {
        el = el.class(class);
    }
    match color {
        Some(color) => el.style("color", color),
        None => el,
    }
}

/// Text nodes with a `<br>` at each newline
fn lines(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(Element::new("br").into());
        }
        if !line.is_empty() {
            nodes.push(Node::text(line));
        }
    }
    nodes
}
