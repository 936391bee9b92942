use crate::action::Action;
use crate::components::Button;
use crate::node::{Element, Node};
use crate::style;

use super::placed;

const BASE: &str =
    "relative flex w-full items-center justify-center rounded-[8px] px-[16px] text-[16px]";

/// Label shown when the action has none
const PLACEHOLDER: &str = "Button";

pub(super) fn render(node: &Button) -> Element {
    let mut outer = placed(
        Element::div().class("lf-button relative min-w-0 flex"),
        node.flex,
        node.margin.as_deref(),
        &node.offsets,
    );
    if let Some(class) = node.gravity.as_deref().and_then(style::gravity_class) {
        outer = outer.class(class);
    }

    let appearance = node.style.as_deref();
    let mut button = Element::new("button")
        .attr("type", "button")
        .class(BASE)
        .class(style::button_style_class(appearance))
        .class(style::button_height_class(node.height.as_deref()));

    if let Some(color) = &node.color {
        let prop = match appearance {
            Some("primary" | "secondary") => "background-color",
            _ => "color",
        };
        button = button.style(prop, color);
    }
    if node.adjust_mode.as_deref() == Some("shrink-to-fit") {
        button = button.class("overflow-hidden text-ellipsis whitespace-nowrap");
    }
    if node.action.is_some() {
        button = button.class("cursor-pointer").action(node.action.as_ref());
    }

    let label = node
        .action
        .as_ref()
        .and_then(Action::label)
        .filter(|l| !l.is_empty())
        .unwrap_or(PLACEHOLDER);

    outer.child(button.child(Node::text(label)))
}
