use crate::components::Carousel;
use crate::node::Element;

use super::{bubble, Renderer};

/// Horizontal scroll strip of bubbles with a leading inset and a trailing spacer
/// of the same width.
pub(super) fn render(renderer: &Renderer, carousel: &Carousel) -> Element {
    let cfg = &renderer.config().carousel;
    let item = format!("w-[{}] flex-none", cfg.item_width);

    let strip = Element::div()
        .class("flex w-full")
        .class(format!("gap-[{}] pl-[{}]", cfg.gap, cfg.inset))
        .children(
            carousel
                .contents
                .iter()
                .map(|b| bubble::render(renderer, b, Some(item.as_str())).into()),
        )
        .child(
            Element::div()
                .class("lf-carousel-end block h-px flex-none")
                .class(format!("w-[{}]", cfg.inset)),
        );

    Element::div()
        .class("lf-carousel overflow-x-auto overflow-y-hidden lf-scrollbar-hide")
        .child(strip)
}
