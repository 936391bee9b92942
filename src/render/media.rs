use crate::components::{Icon, Image, Video};
use crate::node::{Element, Node};
use crate::style;

use super::placed;

const VIDEO_FALLBACK: &str = "Your browser does not support the video tag.";

fn css_url(url: &str) -> String {
    format!("url(\"{}\")", url.replace('"', "%22"))
}

/// Padding-box image: the height comes from a padding-bottom percentage so the
/// aspect ratio holds at any width.
pub(super) fn image(node: &Image) -> Element {
    let justify = match node.align.as_deref() {
        Some("start") => "justify-start",
        Some("end") => "justify-end",
        _ => "justify-center",
    };
    let mut outer = placed(
        Element::div().class("lf-image relative min-w-0 flex overflow-hidden").class(justify),
        node.flex,
        node.margin.as_deref(),
        &node.offsets,
    );
    if let Some(class) = node.gravity.as_deref().and_then(style::gravity_class) {
        outer = outer.class(class);
    }

    let wrapper = Element::div()
        .class("relative max-w-full w-full")
        .apply(Some(style::image_size(node.size.as_deref())));

    let percent = style::aspect_percent(node.aspect_ratio.as_deref());
    let mut frame = match node.action.as_ref().and_then(|a| a.uri()) {
        Some(uri) => Element::new("a")
            .attr("href", uri)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer"),
        None => Element::div(),
    }
    .class("relative block w-full overflow-hidden")
    .style("padding-bottom", format!("{percent}%"));
    if node.action.is_some() {
        frame = frame.class("cursor-pointer").action(node.action.as_ref());
    }

    let fit = match node.aspect_mode.as_deref() {
        Some("cover") => "cover",
        _ => "contain",
    };
    let mut picture = Element::new("span")
        .class("absolute top-0 left-0 block h-full w-full bg-center bg-no-repeat")
        .style("background-image", css_url(&node.url))
        .style("background-size", fit);
    if let Some(color) = &node.background_color {
        picture = picture.style("background-color", color);
    }

    outer.child(wrapper.child(frame.child(picture)))
}

pub(super) fn icon(node: &Icon) -> Element {
    let outer = placed(
        Element::div()
            .class("lf-icon relative inline-block flex-none")
            .apply(Some(style::font_size(node.size.as_deref()))),
        None,
        node.margin.as_deref(),
        &node.offsets,
    );
    let glyph = Element::new("span")
        .class("lf-icon-glyph block bg-contain bg-center bg-no-repeat")
        .style("width", style::icon_width(node.aspect_ratio.as_deref()))
        .style("height", "1em")
        .style("background-image", css_url(&node.url));
    outer.child(glyph)
}

/// `alt` is the already rendered `altContent`, shown where video is unsupported
pub(super) fn video(node: &Video, alt: Option<Node>) -> Element {
    let mut player = Element::new("video")
        .class("block h-full w-full object-cover")
        .attr("controls", "")
        .attr("playsinline", "");
    if !node.preview_url.is_empty() {
        player = player.attr("poster", &node.preview_url);
    }
    for mime in ["video/mp4", "video/ogg", "video/webm"] {
        player = player.child(Element::new("source").attr("src", &node.url).attr("type", mime));
    }
    player = player.child(alt.unwrap_or_else(|| Node::text(VIDEO_FALLBACK)));

    let mut outer = Element::div()
        .class("lf-video relative w-full overflow-hidden")
        .class(style::aspect_class(node.aspect_ratio.as_deref()));
    if node.action.is_some() {
        outer = outer.class("cursor-pointer").action(node.action.as_ref());
    }
    outer.child(player)
}
