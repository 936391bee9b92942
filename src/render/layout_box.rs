use crate::components::FlexBox;
use crate::dispatch::Context;
use crate::node::Element;
use crate::style;

use super::{placed, Renderer};

const BASE: &str = "lf-box relative min-w-0 max-w-full overflow-hidden";

pub(super) fn render(renderer: &Renderer, node: &FlexBox, ctx: Context) -> Element {
    let layout = node.layout();

    let mut el = placed(
        Element::div().class(BASE).class(style::layout_class(layout)),
        node.flex,
        node.margin.as_deref(),
        &node.offsets,
    )
    .apply(style::spacing(node.spacing.as_deref()))
    .styles(style::padding(
        node.padding_all.as_deref(),
        node.padding_top.as_deref(),
        node.padding_bottom.as_deref(),
        node.padding_start.as_deref(),
        node.padding_end.as_deref(),
    ))
    .apply(style::corner_radius(node.corner_radius.as_deref()))
    .apply(style::border_width(node.border_width.as_deref()));

    if let Some(class) = node.justify_content.as_deref().and_then(style::justify_class) {
        el = el.class(class);
    }
    if let Some(class) = node.align_items.as_deref().and_then(style::align_items_class) {
        el = el.class(class);
    }

    if let Some(color) = &node.background_color {
        el = el.style("background-color", color);
    }
    if let Some(color) = &node.border_color {
        el = el.style("border-color", color);
    }
    if let Some(gradient) = node.background.as_ref().and_then(style::gradient) {
        el = el.style("background", gradient);
    }

    // width caps max-width too; an explicit maxWidth then replaces that cap
    if let Some(width) = &node.width {
        el = el.style("width", width).style("max-width", width);
    }
    if let Some(max_width) = &node.max_width {
        el = el.style("max-width", max_width);
    }
    if let Some(height) = &node.height {
        el = el.style("height", height);
    }
    if let Some(max_height) = &node.max_height {
        el = el.style("max-height", max_height);
    }

    if node.action.is_some() {
        el = el.class("cursor-pointer").action(node.action.as_ref());
    }

    el.children(renderer.render_children(&node.contents, ctx.within(layout)))
}
