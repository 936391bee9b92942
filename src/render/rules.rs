use crate::components::{Filler, Separator, Spacer};
use crate::config::RenderConfig;
use crate::dispatch::Context;
use crate::node::Element;
use crate::style;

/// A one pixel rule across the parent's cross axis: vertical inside
/// horizontal and baseline boxes, horizontal otherwise.
pub(super) fn separator(config: &RenderConfig, node: &Separator, ctx: Context) -> Element {
    let rule = match ctx.layout {
        Some(layout) if layout.is_row() => "h-full w-px border-l",
        _ => "h-px w-full border-t",
    };
    let el = Element::div()
        .class("lf-separator flex-none")
        .class(rule)
        .class(format!("border-[{}]", config.separator_color))
        .apply(style::margin(node.margin.as_deref()));
    match &node.color {
        Some(color) => el.style("border-color", color),
        None => el,
    }
}

pub(super) fn spacer(node: &Spacer) -> Element {
    Element::div()
        .class("lf-spacer flex-none w-px")
        .apply(Some(style::spacer_size(node.size.as_deref())))
}

/// Takes up free space; grows with weight 1 unless `flex` says otherwise.
pub(super) fn filler(node: &Filler) -> Element {
    Element::div()
        .class("lf-filler min-h-0")
        .apply(style::flex(node.flex.or(Some(1))))
}
