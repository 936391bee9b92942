use crate::components::{BlockStyle, Bubble, Component};
use crate::dispatch::{dispatch, Context, Visitor};
use crate::node::{Element, Node};
use crate::style::{self, Section};

use super::Renderer;

const BASE: &str =
    "lf-bubble relative flex w-full flex-col overflow-hidden rounded-[17px] bg-[#ffffff]";

/// `extra` is merged last, so a carousel can override the bubble's width.
pub(super) fn render(renderer: &Renderer, bubble: &Bubble, extra: Option<&str>) -> Element {
    let size = bubble.size.as_deref();
    let direction = match bubble.direction.as_deref() {
        Some("rtl") => "rtl",
        _ => "ltr",
    };

    let mut root = Element::div()
        .class(BASE)
        .class(style::bubble_width(size))
        .attr("dir", direction);
    if let Some(extra) = extra {
        root = root.class(extra);
    }
    if bubble.action.is_some() {
        root = root.class("cursor-pointer").action(bubble.action.as_ref());
    }

    let has_footer = bubble.footer.is_some();
    let slots: [(Section, Option<Node>); 4] = [
        (
            Section::Header,
            bubble
                .header
                .as_ref()
                .and_then(|b| renderer.visit_box(b, Context::root())),
        ),
        (Section::Hero, bubble.hero.as_deref().and_then(|hero| render_hero(renderer, hero))),
        (
            Section::Body,
            bubble
                .body
                .as_ref()
                .and_then(|b| renderer.visit_box(b, Context::root())),
        ),
        (
            Section::Footer,
            bubble
                .footer
                .as_ref()
                .and_then(|b| renderer.visit_box(b, Context::root())),
        ),
    ];

    let mut first = true;
    for (section, content) in slots {
        let Some(content) = content else {
            continue;
        };
        let block = block_style(bubble, section);

        if !first && block.and_then(|b| b.separator).unwrap_or(false) {
            let color = block
                .and_then(|b| b.separator_color.as_deref())
                .unwrap_or(renderer.config().separator_color.as_str());
            root = root.child(
                Element::div()
                    .class("lf-section-separator h-px w-full flex-none border-t")
                    .style("border-color", color),
            );
        }
        first = false;

        let grow = match section {
            Section::Body => "flex-1",
            _ => "flex-none",
        };
        let mut wrapper = Element::div()
            .class(format!("lf-{} relative min-h-0", section.as_str()))
            .class(grow)
            .class(style::section_padding(size, section, has_footer));
        if let Some(color) = block.and_then(|b| b.background_color.as_deref()) {
            wrapper = wrapper.style("background-color", color);
        }
        root = root.child(wrapper.child(content));
    }

    root
}

/// A box renders as a box; any other hero is a bare leaf outside any layout.
fn render_hero(renderer: &Renderer, hero: &Component) -> Option<Node> {
    match hero {
        Component::Box(b) => renderer.visit_box(b, Context::root()),
        other => dispatch(renderer, other, Context::root().detached()),
    }
}

fn block_style(bubble: &Bubble, section: Section) -> Option<&BlockStyle> {
    let styles = bubble.styles.as_ref()?;
    match section {
        Section::Header => styles.header.as_ref(),
        Section::Hero => styles.hero.as_ref(),
        Section::Body => styles.body.as_ref(),
        Section::Footer => styles.footer.as_ref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use pretty_assertions::assert_eq;

    fn bubble(json: &str) -> Element {
        let bubble: Bubble = serde_json::from_str(json).unwrap();
        let config = RenderConfig::default();
        render(&Renderer::new(&config), &bubble, None)
    }

    const SECTIONS: &str = r#""header":{"type":"box","contents":[]},
        "body":{"type":"box","contents":[]},
        "footer":{"type":"box","contents":[]}"#;

    #[test]
    fn nano_padding() {
        let el = bubble(&format!(r#"{{"size":"nano",{SECTIONS}}}"#));
        assert!(el.has_class("max-w-[120px]"));
        let body = el.find_by_class("lf-body")[0];
        assert!(body.has_class("p-[10px]"));
        assert!(body.has_class("pb-[10px]"));
        assert!(el.find_by_class("lf-header")[0].has_class("p-[10px]"));
    }

    #[test]
    fn mega_padding() {
        let el = bubble(&format!(r#"{{{SECTIONS}}}"#));
        assert!(el.has_class("max-w-[300px]"));
        let header = el.find_by_class("lf-header")[0];
        assert!(header.has_class("p-[20px]"));
        let body = el.find_by_class("lf-body")[0];
        assert!(body.has_class("p-[20px]"));
        assert!(body.has_class("pt-[19px]"));
        assert!(body.has_class("flex-1"));
        assert!(el.find_by_class("lf-footer")[0].has_class("p-[10px]"));
    }

    #[test]
    fn body_without_footer_has_no_extra_bottom_padding() {
        let el = bubble(r#"{"size":"kilo","body":{"type":"box","contents":[]}}"#);
        let body = el.find_by_class("lf-body")[0];
        assert!(body.has_class("p-[13px]"));
        assert!(!body.has_class("pb-[10px]"));
    }

    #[test]
    fn missing_sections_are_omitted() {
        let el = bubble(r#"{"body":{"type":"box","contents":[]}}"#);
        assert_eq!(el.child_elements().count(), 1);
        assert!(el.find_by_class("lf-header").is_empty());
    }

    #[test]
    fn direction_and_section_styles() {
        let el = bubble(
            r##"{"direction":"rtl",
                "header":{"type":"box","contents":[]},
                "body":{"type":"box","contents":[]},
                "styles":{"header":{"backgroundColor":"#00ff00"},
                          "body":{"separator":true,"separatorColor":"#ff0000"}}}"##,
        );
        assert_eq!(el.get_attr("dir"), Some("rtl"));
        assert_eq!(
            el.find_by_class("lf-header")[0].get_style("background-color"),
            Some("#00ff00")
        );
        let rule = el.find_by_class("lf-section-separator");
        assert_eq!(rule.len(), 1);
        assert_eq!(rule[0].get_style("border-color"), Some("#ff0000"));
    }

    #[test]
    fn leaf_hero_renders_outside_layout() {
        let el = bubble(r#"{"hero":{"type":"image","url":"https://x.test/h.png","size":"full"}}"#);
        let hero = el.find_by_class("lf-hero")[0];
        assert!(hero.has_class("flex-none"));
        assert_eq!(hero.find_by_class("lf-image").len(), 1);
    }

    #[test]
    fn bubble_action_makes_click_target() {
        let el = bubble(r#"{"action":{"type":"uri","uri":"https://line.me"},"body":{"type":"box","contents":[]}}"#);
        assert!(el.has_class("cursor-pointer"));
        assert_eq!(el.get_action().and_then(|a| a.uri()), Some("https://line.me"));
    }
}
