//! Style token resolution.
//!
//! Flex attributes are small declarative tokens (`"md"`, `"16:9"`, `"12px"`).
//! Every function here maps a token through a fixed lookup table to either a
//! utility class or a list of inline declarations, never both for the same
//! token. Keywords produce classes; literal lengths produce inline styles.
//! All functions are total: unknown tokens fall back to a documented default
//! or resolve to nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::components::{Background, Layout, Offsets};

/// Result of resolving one style token
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// Space separated utility classes
    Class(String),
    /// Inline `(property, value)` declarations
    Inline(Vec<(String, String)>),
}

impl Resolved {
    fn class(class: impl Into<String>) -> Self {
        Resolved::Class(class.into())
    }

    fn inline(prop: &str, value: impl Into<String>) -> Self {
        Resolved::Inline(vec![(prop.to_string(), value.into())])
    }
}

static LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d+(?:\.\d+)?(?:px|%)$").expect("BUG: invalid LENGTH_RE regex literal")
});

static PX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+(?:\.\d+)?)px$").expect("BUG: invalid PX_RE regex literal")
});

static RATIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?):(\d+(?:\.\d+)?)$").expect("BUG: invalid RATIO_RE regex literal")
});

/// `true` for literal lengths such as `12px`, `-4px` or `50%`
pub fn is_literal(token: &str) -> bool {
    LENGTH_RE.is_match(token)
}

fn px_value(token: &str) -> Option<f64> {
    PX_RE.captures(token)?.get(1)?.as_str().parse().ok()
}

/// `(width, height)` of an aspect ratio token like `16:9`
pub fn parse_ratio(token: &str) -> Option<(f64, f64)> {
    let caps = RATIO_RE.captures(token)?;
    let w: f64 = caps.get(1)?.as_str().parse().ok()?;
    let h: f64 = caps.get(2)?.as_str().parse().ok()?;
    if w > 0.0 && h > 0.0 {
        Some((w, h))
    } else {
        None
    }
}

// ─── Spacing scale (margin, spacing, padding, offsets, corner radius) ──────

/// Keyword spacing scale shared by margin, spacing, padding and corner radius
pub fn spacing_px(keyword: &str) -> Option<&'static str> {
    let px = match keyword {
        "none" => "0px",
        "xs" => "2px",
        "sm" => "4px",
        "md" => "8px",
        "lg" => "12px",
        "xl" => "16px",
        "xxl" => "20px",
        _ => return None,
    };
    Some(px)
}

/// A keyword through the spacing scale, or a literal length as-is
fn spacing_length(token: &str) -> Option<String> {
    if is_literal(token) {
        return Some(token.to_string());
    }
    spacing_px(token).map(str::to_string)
}

/// Margin between a child and its previous sibling.
///
/// The axis depends on the parent's layout, which the child does not know, so
/// both forms only set the `--lf-m` custom property; the parent's layout class
/// turns it into `margin-top` or `margin-inline-start`.
pub fn margin(token: Option<&str>) -> Option<Resolved> {
    let token = token?;
    if is_literal(token) {
        return Some(Resolved::inline("--lf-m", token));
    }
    spacing_px(token).map(|_| Resolved::class(format!("lf-m-{token}")))
}

/// Gap between a box's children
pub fn spacing(token: Option<&str>) -> Option<Resolved> {
    let token = token?;
    if is_literal(token) {
        return Some(Resolved::inline("gap", token));
    }
    spacing_px(token).map(|px| Resolved::class(format!("gap-[{px}]")))
}

/// Four-sided padding. A missing or unknown side falls back to `all`; a side
/// with neither produces no declaration.
pub fn padding(
    all: Option<&str>,
    top: Option<&str>,
    bottom: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<(String, String)> {
    [
        ("padding-top", top),
        ("padding-bottom", bottom),
        ("padding-inline-start", start),
        ("padding-inline-end", end),
    ]
    .into_iter()
    .filter_map(|(prop, side)| {
        let value = side
            .and_then(spacing_length)
            .or_else(|| all.and_then(spacing_length))?;
        Some((prop.to_string(), value))
    })
    .collect()
}

/// Position class plus inset declarations. Nothing is emitted without `position`.
pub fn offsets(offsets: &Offsets) -> Vec<Resolved> {
    let Some(position) = offsets.position.as_deref() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    if let Some(class) = position_class(position) {
        out.push(Resolved::class(class));
    }

    let insets: Vec<(String, String)> = [
        ("top", &offsets.offset_top),
        ("bottom", &offsets.offset_bottom),
        ("inset-inline-start", &offsets.offset_start),
        ("inset-inline-end", &offsets.offset_end),
    ]
    .into_iter()
    .filter_map(|(prop, value)| Some((prop.to_string(), spacing_length(value.as_deref()?)?)))
    .collect();

    if !insets.is_empty() {
        out.push(Resolved::Inline(insets));
    }
    out
}

/// `0` never grows or shrinks; a positive value grows proportionally from a
/// zero basis. Unset or negative values resolve to nothing.
pub fn flex(value: Option<i64>) -> Option<Resolved> {
    match value? {
        0 => Some(Resolved::class("flex-none")),
        n if n > 0 => Some(Resolved::inline("flex", format!("{n} 0 0"))),
        _ => None,
    }
}

pub fn corner_radius(token: Option<&str>) -> Option<Resolved> {
    let token = token?;
    if is_literal(token) {
        return Some(Resolved::inline("border-radius", token));
    }
    spacing_px(token).map(|px| Resolved::class(format!("rounded-[{px}]")))
}

pub fn border_width_px(keyword: &str) -> Option<&'static str> {
    let px = match keyword {
        "none" => "0px",
        "light" => "0.5px",
        "normal" => "1px",
        "medium" => "2px",
        "semi-bold" => "3px",
        "bold" => "4px",
        _ => return None,
    };
    Some(px)
}

pub fn border_width(token: Option<&str>) -> Option<Resolved> {
    let token = token?;
    if is_literal(token) {
        return Some(Resolved::Inline(vec![
            ("border-width".to_string(), token.to_string()),
            ("border-style".to_string(), "solid".to_string()),
        ]));
    }
    border_width_px(token).map(|px| Resolved::class(format!("border-[{px}] border-solid")))
}

// ─── Aspect ratio ───────────────────────────────────────────────────────────

/// Padding-bottom percentage for an image aspect ratio. Unknown ratios are square.
pub fn aspect_percent(ratio: Option<&str>) -> f64 {
    match ratio.unwrap_or("1:1") {
        "1:1" => 100.0,
        "1.51:1" => 66.22517,
        "1.91:1" => 52.35602,
        "20:13" => 65.0,
        "4:3" => 75.0,
        "16:9" => 56.25,
        "2:1" => 50.0,
        "3:1" => 33.33333,
        "3:4" => 133.33333,
        "9:16" => 177.77778,
        "1:2" => 200.0,
        "1:3" => 300.0,
        _ => 100.0,
    }
}

/// Ratio class for elements sized by `aspect-ratio` rather than padding
pub fn aspect_class(ratio: Option<&str>) -> String {
    match ratio.and_then(parse_ratio) {
        Some((w, h)) => format!("aspect-[{w}/{h}]"),
        None => "aspect-[1/1]".to_string(),
    }
}

// ─── Background ─────────────────────────────────────────────────────────────

/// CSS `linear-gradient(...)` for a gradient background; `None` for other types
pub fn gradient(background: &Background) -> Option<String> {
    if background.kind != "linearGradient" {
        return None;
    }
    let mut stops = vec![format!("{} 0%", background.start_color)];
    if let Some(center) = &background.center_color {
        let position = background.center_position.as_deref().unwrap_or("50%");
        stops.push(format!("{center} {position}"));
    }
    stops.push(format!("{} 100%", background.end_color));
    Some(format!("linear-gradient({}, {})", background.angle, stops.join(", ")))
}

// ─── Sizes ──────────────────────────────────────────────────────────────────

pub fn font_size_px(keyword: &str) -> Option<&'static str> {
    let px = match keyword {
        "xxs" => "11px",
        "xs" => "13px",
        "sm" => "14px",
        "md" => "16px",
        "lg" => "19px",
        "xl" => "22px",
        "xxl" => "29px",
        "3xl" => "35px",
        "4xl" => "48px",
        "5xl" => "74px",
        _ => return None,
    };
    Some(px)
}

/// Text, span and icon size. Unknown keywords fall back to `md`.
pub fn font_size(token: Option<&str>) -> Resolved {
    let token = token.unwrap_or("md");
    if is_literal(token) {
        return Resolved::inline("font-size", token);
    }
    let px = font_size_px(token).unwrap_or("16px");
    Resolved::class(format!("text-[{px}]"))
}

/// Icon width in `em`, derived from its aspect ratio. Height is always `1em`.
pub fn icon_width(ratio: Option<&str>) -> String {
    match ratio.and_then(parse_ratio) {
        Some((w, h)) => format!("{}em", w / h),
        None => "1em".to_string(),
    }
}

pub fn image_size(token: Option<&str>) -> Resolved {
    let token = token.unwrap_or("md");
    if is_literal(token) {
        return Resolved::inline("width", token);
    }
    let px = match token {
        "full" => return Resolved::class("w-full"),
        "xxs" => "40px",
        "xs" => "60px",
        "sm" => "80px",
        "md" => "100px",
        "lg" => "120px",
        "xl" => "140px",
        "xxl" => "160px",
        "3xl" => "180px",
        "4xl" => "200px",
        "5xl" => "220px",
        _ => "100px",
    };
    Resolved::class(format!("w-[{px}]"))
}

pub fn spacer_size(token: Option<&str>) -> Resolved {
    let token = token.unwrap_or("md");
    if is_literal(token) {
        return Resolved::inline("height", token);
    }
    let px = match token {
        "xxs" | "xs" => "2px",
        "sm" => "4px",
        "md" => "8px",
        "lg" => "12px",
        "xl" => "16px",
        "xxl" | "3xl" | "4xl" | "5xl" => "20px",
        _ => "8px",
    };
    Resolved::class(format!("h-[{px}]"))
}

/// `line-height` for a text's `lineSpacing` (extra space over the base 15px)
pub fn line_height(token: Option<&str>) -> Option<String> {
    let px = px_value(token?)?;
    Some(format!("{}px", px + 15.0))
}

// ─── Bubble ─────────────────────────────────────────────────────────────────

/// Named bubble sizes; anything else is treated as `mega`
fn bubble_size(size: Option<&str>) -> &str {
    match size {
        Some(s @ ("nano" | "micro" | "deca" | "hecto" | "kilo" | "mega" | "giga")) => s,
        _ => "mega",
    }
}

pub fn bubble_width(size: Option<&str>) -> &'static str {
    match bubble_size(size) {
        "nano" => "max-w-[120px]",
        "micro" => "max-w-[160px]",
        "deca" => "max-w-[220px]",
        "hecto" => "max-w-[241px]",
        "kilo" => "max-w-[260px]",
        "giga" => "max-w-[500px]",
        _ => "max-w-[300px]",
    }
}

/// One of the four fixed bubble slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Hero,
    Body,
    Footer,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::Body => "body",
            Section::Footer => "footer",
        }
    }
}

/// Size-dependent section padding classes.
///
/// The body gets an extra 10px at the bottom when a footer follows it. The hero
/// is never padded.
pub fn section_padding(size: Option<&str>, section: Section, has_footer: bool) -> String {
    let (header, body) = match bubble_size(size) {
        "nano" | "micro" => ("p-[10px]", "p-[10px]"),
        "deca" | "hecto" => ("p-[11px_14px_13px]", "p-[11px_14px_13px]"),
        "kilo" => ("p-[13px]", "p-[13px]"),
        _ => ("p-[20px]", "p-[20px] pt-[19px]"),
    };
    match section {
        Section::Header => header.to_string(),
        Section::Hero => String::new(),
        Section::Body if has_footer => format!("{body} pb-[10px]"),
        Section::Body => body.to_string(),
        Section::Footer => "p-[10px]".to_string(),
    }
}

// ─── Variant classes ────────────────────────────────────────────────────────

pub fn layout_class(layout: Layout) -> &'static str {
    match layout {
        Layout::Vertical => "lf-vertical flex flex-col",
        Layout::Horizontal => "lf-horizontal flex flex-row",
        Layout::Baseline => "lf-baseline flex flex-row items-baseline",
    }
}

pub fn position_class(position: &str) -> Option<&'static str> {
    match position {
        "relative" => Some("relative"),
        "absolute" => Some("absolute"),
        _ => None,
    }
}

pub fn justify_class(value: &str) -> Option<&'static str> {
    match value {
        "flex-start" => Some("justify-start"),
        "center" => Some("justify-center"),
        "flex-end" => Some("justify-end"),
        "space-between" => Some("justify-between"),
        "space-around" => Some("justify-around"),
        "space-evenly" => Some("justify-evenly"),
        _ => None,
    }
}

pub fn align_items_class(value: &str) -> Option<&'static str> {
    match value {
        "flex-start" => Some("items-start"),
        "center" => Some("items-center"),
        "flex-end" => Some("items-end"),
        _ => None,
    }
}

/// Horizontal text/image alignment
pub fn align_class(value: &str) -> Option<&'static str> {
    match value {
        "start" => Some("text-start"),
        "end" => Some("text-end"),
        "center" => Some("text-center"),
        _ => None,
    }
}

/// Cross-axis placement inside a horizontal box
pub fn gravity_class(value: &str) -> Option<&'static str> {
    match value {
        "top" => Some("self-start"),
        "center" => Some("self-center"),
        "bottom" => Some("self-end"),
        _ => None,
    }
}

pub fn weight_class(value: &str) -> Option<&'static str> {
    match value {
        "bold" => Some("font-bold"),
        "regular" => Some("font-normal"),
        _ => None,
    }
}

pub fn font_style_class(value: &str) -> Option<&'static str> {
    match value {
        "italic" => Some("italic"),
        "normal" => Some("not-italic"),
        _ => None,
    }
}

pub fn decoration_class(value: &str) -> Option<&'static str> {
    match value {
        "underline" => Some("underline"),
        "line-through" => Some("line-through"),
        "none" => Some("no-underline"),
        _ => None,
    }
}

/// Button appearance; `link` is the default
pub fn button_style_class(style: Option<&str>) -> &'static str {
    match style {
        Some("primary") => "bg-[#17c950] text-[#ffffff]",
        Some("secondary") => "bg-[#dcdfe5] text-[#111111]",
        _ => "text-[#42659a]",
    }
}

pub fn button_height_class(height: Option<&str>) -> &'static str {
    match height {
        Some("sm") => "h-[40px]",
        _ => "h-[52px]",
    }
}
