use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use line_flex::{
    generate_component_jsx, generate_jsx, parse, parse_component, render, render_html,
    render_with_config, Action, Element, FlexDocument, FlexError, Node, RenderConfig,
};
use pretty_assertions::assert_eq;

fn demo(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

fn root(node: &Node) -> &Element {
    node.as_element().expect("root is an element")
}

fn bubble_with_body(body: &str) -> FlexDocument {
    parse(&format!(r#"{{"type":"bubble","body":{body}}}"#)).unwrap()
}

// ─── Rendering ───────────────────────────────────────────────────────────────

#[test]
fn vertical_box_with_single_text() {
    let doc = bubble_with_body(
        r#"{"type":"box","layout":"vertical","contents":[{"type":"text","text":"Hello, World!"}]}"#,
    );
    let tree = render(&doc);
    let el = root(&tree);

    let boxes = el.find_by_class("lf-box");
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].child_elements().count(), 1);

    let texts = el.find_by_class("lf-text");
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].text_content(), "Hello, World!");

    let p = el.find_by_tag("p")[0];
    assert!(p.has_class("text-[16px]"));
    assert!(!p.has_class("font-bold"));
    assert_eq!(p.get_style("color"), None);
}

#[test]
fn nano_and_mega_section_padding() {
    let sections = r#""header":{"type":"box","contents":[]},"body":{"type":"box","contents":[]}"#;

    let nano = parse(&format!(r#"{{"type":"bubble","size":"nano",{sections}}}"#)).unwrap();
    let tree = render(&nano);
    let el = root(&tree);
    assert!(el.find_by_class("lf-header")[0].has_class("p-[10px]"));
    assert!(el.find_by_class("lf-body")[0].has_class("p-[10px]"));
    assert!(!el.find_by_class("lf-body")[0].has_class("pt-[19px]"));

    let mega = parse(&format!(r#"{{"type":"bubble","size":"mega",{sections}}}"#)).unwrap();
    let tree = render(&mega);
    let el = root(&tree);
    assert!(el.find_by_class("lf-header")[0].has_class("p-[20px]"));
    let body = el.find_by_class("lf-body")[0];
    assert!(body.has_class("p-[20px]"));
    assert!(body.has_class("pt-[19px]"));
}

#[test]
fn separator_orientation_depends_on_enclosing_layout() {
    let tree = render(&parse(&demo("hello_bubble.json")).unwrap());
    let el = root(&tree);
    let rules = el.find_by_class("lf-separator");
    assert_eq!(rules.len(), 2);

    // first sits in the vertical body box, second between two texts in a row
    assert!(rules[0].has_class("w-full"));
    assert!(rules[0].has_class("border-t"));
    assert!(rules[1].has_class("h-full"));
    assert!(rules[1].has_class("border-l"));
}

#[test]
fn unlabeled_uri_button_fires_its_action() {
    let doc = bubble_with_body(
        r#"{"type":"box","contents":[{"type":"button","action":{"type":"uri","uri":"https://example.com/a"}}]}"#,
    );
    let tree = render(&doc);
    let button = root(&tree).find_by_tag("button")[0];
    assert_eq!(button.text_content(), "Button");

    let fired: RefCell<Vec<Action>> = RefCell::new(Vec::new());
    let handler = |action: &Action| fired.borrow_mut().push(action.clone());
    assert!(button.click(&handler));

    let fired = fired.into_inner();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].kind(), "uri");
    assert_eq!(fired[0].uri(), Some("https://example.com/a"));
}

#[test]
fn icon_with_wide_ratio() {
    let doc = bubble_with_body(
        r#"{"type":"box","layout":"baseline","contents":[{"type":"icon","url":"https://example.com/i.png","aspectRatio":"2:1"}]}"#,
    );
    let tree = render(&doc);
    let glyph = root(&tree).find_by_class("lf-icon-glyph")[0];
    assert_eq!(glyph.get_style("width"), Some("2em"));
    assert_eq!(glyph.get_style("height"), Some("1em"));
    assert!(glyph.has_class("bg-contain"));
    assert!(glyph.has_class("bg-center"));
}

#[test]
fn unknown_layout_renders_as_vertical_box() {
    let doc = bubble_with_body(
        r#"{"type":"box","layout":"grid","contents":[{"type":"separator"},{"type":"text","text":"x"}]}"#,
    );
    let tree = render(&doc);
    let el = root(&tree);
    assert!(el.find_by_class("lf-box")[0].has_class("lf-vertical"));
    let rule = el.find_by_class("lf-separator")[0];
    assert!(rule.has_class("w-full"));
    assert!(rule.has_class("border-t"));
}

#[test]
fn unsupported_nodes_are_skipped_in_order() {
    let tree = render(&parse(&demo("unsupported.json")).unwrap());
    let el = root(&tree);
    let body = el.find_by_class("lf-box")[0];

    let texts: Vec<String> = body.child_elements().map(Element::text_content).collect();
    assert_eq!(texts, vec!["before", "after"]);
}

#[test]
fn image_padding_follows_ratio_table() {
    let cases = [
        ("1:1", "100%"),
        ("20:13", "65%"),
        ("16:9", "56.25%"),
        ("3:4", "133.33333%"),
        ("1:3", "300%"),
        ("7:5", "100%"),
    ];
    for (ratio, expected) in cases {
        let doc = bubble_with_body(&format!(
            r#"{{"type":"box","contents":[{{"type":"image","url":"https://example.com/x.png","aspectRatio":"{ratio}"}}]}}"#
        ));
        let tree = render(&doc);
        let frames = root(&tree).find_all(&|e| e.get_style("padding-bottom").is_some());
        assert_eq!(frames.len(), 1, "ratio {ratio}");
        assert_eq!(frames[0].get_style("padding-bottom"), Some(expected), "ratio {ratio}");
    }
}

#[test]
fn flex_zero_is_not_flex_unset() {
    let doc = bubble_with_body(
        r#"{"type":"box","layout":"horizontal","contents":[
            {"type":"text","text":"fixed","flex":0},
            {"type":"text","text":"auto"}
        ]}"#,
    );
    let tree = render(&doc);
    let texts = root(&tree).find_by_class("lf-text");
    assert!(texts[0].has_class("flex-none"));
    assert!(!texts[1].has_class("flex-none"));
    assert_eq!(texts[1].get_style("flex"), None);
}

#[test]
fn rendering_twice_gives_the_same_tree() {
    let doc = parse(&demo("hello_bubble.json")).unwrap();
    assert_eq!(render(&doc), render(&doc));
    assert_eq!(render(&doc).to_html(), render(&doc).to_html());
}

#[test]
fn spans_render_inside_their_text() {
    let tree = render(&parse(&demo("message.json")).unwrap());
    let el = root(&tree);
    let texts = el.find_by_class("lf-text");
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].text_content(), "Order #1024");

    let spans = texts[0].find_by_tag("span");
    assert_eq!(spans.len(), 2);
    assert!(spans[0].has_class("font-bold"));
    assert_eq!(spans[1].get_style("color"), Some("#1db446"));
}

#[test]
fn carousel_uses_configured_strip() {
    let config = RenderConfig::from_yaml_str(&demo("render.yaml")).unwrap();
    let tree = render_with_config(&parse(&demo("carousel.json")).unwrap(), &config);
    let el = root(&tree);

    let bubbles = el.find_by_class("lf-bubble");
    assert_eq!(bubbles.len(), 2);
    for bubble in &bubbles {
        assert!(bubble.has_class("w-[85%]"));
        assert!(bubble.has_class("max-w-[160px]"));
    }
    assert_eq!(el.find_by_class("gap-[12px]").len(), 1);
    assert_eq!(el.find_by_class("lf-carousel-end").len(), 1);

    let notify = el.find_by_tag("button")[0];
    assert_eq!(notify.text_content(), "Notify me");
}

#[test]
fn message_renders_like_its_container() {
    let message = parse(&demo("message.json")).unwrap();
    assert_eq!(message.alt_text(), Some("Order confirmed"));

    let bare = FlexDocument::Container(message.container().clone());
    assert_eq!(render(&message), render(&bare));
}

// ─── Code generation ─────────────────────────────────────────────────────────

#[test]
fn generated_markup_mirrors_structure() {
    let doc = parse(&demo("unsupported.json")).unwrap();
    let expected = r#"<LfBubble>
  <LfBox layout="horizontal">
    <LfText text="before" layout="horizontal" />
    {/* Unsupported component: sticker */}
    <LfText text="after" layout="horizontal" />
  </LfBox>
</LfBubble>"#;
    assert_eq!(generate_jsx(&doc), expected);
}

#[test]
fn generated_markup_for_carousel() {
    let out = generate_jsx(&parse(&demo("carousel.json")).unwrap());
    assert!(out.starts_with("<LfCarousel>\n  <LfBubble size=\"micro\">"));
    assert!(out.ends_with("</LfCarousel>"));
    assert_eq!(out.matches("<LfBubble").count(), 2);
    assert!(out.contains(
        r#"<LfButton action={{"type":"message","label":"Notify me","text":"notify lamp"}} style="secondary" />"#
    ));
}

#[test]
fn single_component_is_wrapped_in_vertical_box() {
    let component = parse_component(r#"{"type":"spacer","size":"xl"}"#).unwrap();
    assert_eq!(
        generate_component_jsx(&component),
        "<LfBox layout=\"vertical\">\n  <LfSpacer size=\"xl\" />\n</LfBox>"
    );
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn malformed_json_reports_position() {
    let err = parse("{\n  \"type\": \"bubble\",\n  \"body\": ]\n}").unwrap_err();
    match err {
        FlexError::Json { line, .. } => assert_eq!(line, 3),
        other => panic!("expected JSON error, got {other:?}"),
    }
}

#[test]
fn wrong_top_level_type_is_rejected() {
    assert_eq!(
        parse(r#"{"type":"box","contents":[]}"#).unwrap_err(),
        FlexError::InvalidContainer { kind: "box".into() }
    );
    assert_eq!(
        parse(r#"{"type":"flex","altText":"x","contents":{"type":"text","text":"x"}}"#).unwrap_err(),
        FlexError::InvalidContainer { kind: "text".into() }
    );
    assert_eq!(parse(r#"{"contents":[]}"#).unwrap_err(), FlexError::MissingType);
}

// ─── Page output ─────────────────────────────────────────────────────────────

#[test]
fn standalone_page_has_css_for_rendered_classes() {
    let config = RenderConfig::from_yaml_str(&demo("render.yaml")).unwrap();
    let page = render_html(&parse(&demo("hello_bubble.json")).unwrap(), &config);

    assert!(page.contains("<title>Flex preview</title>"));
    assert!(page.contains(r".max-w-\[300px\]{max-width:300px;}"));
    assert!(page.contains(r".rounded-\[17px\]{border-radius:17px;}"));
    assert!(page.contains("Miraina Tower"));
    assert!(page.contains(">CALL</button>"));
    assert!(!page.contains("<script"));
}

#[test]
fn config_file_overrides_only_listed_fields() {
    let config = RenderConfig::from_yaml_str(&demo("render.yaml")).unwrap();
    assert_eq!(config.separator_color, "#e0e0e0");
    assert_eq!(config.carousel.item_width, "85%");
    assert_eq!(config.carousel.inset, "7px");
    assert!(config.page.base_styles);

    assert!(matches!(
        RenderConfig::from_yaml_str("carousel: [1, 2]"),
        Err(FlexError::Config(_))
    ));
}
