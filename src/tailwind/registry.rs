/// A single resolved CSS rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    /// Full CSS selector, e.g. `.flex`, `.w-\[80\%\]`
    pub selector: String,
    /// CSS declarations, e.g. `[("display", "flex")]`
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    fn new(class: &str, props: &[(&str, &str)]) -> Self {
        Self {
            selector: format!(".{}", escape_selector(class)),
            declarations: props
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn dynamic(class: &str, props: Vec<(String, String)>) -> Self {
        Self {
            selector: format!(".{}", escape_selector(class)),
            declarations: props,
        }
    }

    /// Rule for one property with a computed value
    fn single(class: &str, prop: &str, value: String) -> Self {
        Self::dynamic(class, vec![(prop.to_string(), value)])
    }
}

/// Escapes CSS special characters in a class name so it can be used in a selector.
pub fn escape_selector(class: &str) -> String {
    let mut out = String::with_capacity(class.len() + 4);
    for ch in class.chars() {
        match ch {
            '.' | '/' | '[' | ']' | '(' | ')' | '%' | '#' | ':' | '@' | '!' | ',' | '~'
            | '^' | '$' | '&' | '+' | '=' | '<' | '>' | '|' | '\'' | '"' | ';' | '{'
            | '}' | '\\' | '*' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Value inside `prefix-[...]`, with `_` standing for a space
fn arbitrary(class: &str, prefix: &str) -> Option<String> {
    let rest = class.strip_prefix(prefix)?.strip_prefix("-[")?;
    let value = rest.strip_suffix(']')?;
    if value.is_empty() {
        return None;
    }
    Some(value.replace('_', " "))
}

/// Lengths start with a digit, a dot or a minus sign; anything else is a color
fn is_length(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.' || c == '-')
}

// ─── Public resolver ────────────────────────────────────────────────────────

/// Resolves a single utility class string to a CSS rule.
///
/// Returns `None` if the class is not recognised (no rule emitted).
pub fn resolve_class(class: &str) -> Option<CssRule> {
    resolve_display(class)
        .or_else(|| resolve_position(class))
        .or_else(|| resolve_inset(class))
        .or_else(|| resolve_overflow(class))
        .or_else(|| resolve_flex(class))
        .or_else(|| resolve_alignment(class))
        .or_else(|| resolve_spacing(class))
        .or_else(|| resolve_sizing(class))
        .or_else(|| resolve_typography(class))
        .or_else(|| resolve_border(class))
        .or_else(|| resolve_background(class))
        .or_else(|| resolve_misc(class))
}

// ─── Display & position ─────────────────────────────────────────────────────

fn resolve_display(class: &str) -> Option<CssRule> {
    let value = match class {
        "block" => "block",
        "inline-block" => "inline-block",
        "inline" => "inline",
        "flex" => "flex",
        "inline-flex" => "inline-flex",
        "hidden" => "none",
        _ => return None,
    };
    Some(CssRule::new(class, &[("display", value)]))
}

fn resolve_position(class: &str) -> Option<CssRule> {
    let pos = match class {
        "static" => "static",
        "fixed" => "fixed",
        "absolute" => "absolute",
        "relative" => "relative",
        "sticky" => "sticky",
        _ => return None,
    };
    Some(CssRule::new(class, &[("position", pos)]))
}

fn resolve_inset(class: &str) -> Option<CssRule> {
    let (props, rest): (&[&str], &str) = if let Some(v) = class.strip_prefix("inset-") {
        (&["inset"], v)
    } else if let Some(v) = class.strip_prefix("top-") {
        (&["top"], v)
    } else if let Some(v) = class.strip_prefix("bottom-") {
        (&["bottom"], v)
    } else if let Some(v) = class.strip_prefix("left-") {
        (&["left"], v)
    } else if let Some(v) = class.strip_prefix("right-") {
        (&["right"], v)
    } else {
        return None;
    };

    let value = match rest {
        "0" => "0px".to_string(),
        "full" => "100%".to_string(),
        "auto" => "auto".to_string(),
        _ => {
            let inner = rest.strip_prefix('[')?.strip_suffix(']')?;
            inner.replace('_', " ")
        }
    };
    Some(CssRule::dynamic(
        class,
        props.iter().map(|p| (p.to_string(), value.clone())).collect(),
    ))
}

fn resolve_overflow(class: &str) -> Option<CssRule> {
    let (prop, value) = if let Some(v) = class.strip_prefix("overflow-x-") {
        ("overflow-x", v)
    } else if let Some(v) = class.strip_prefix("overflow-y-") {
        ("overflow-y", v)
    } else if let Some(v) = class.strip_prefix("overflow-") {
        ("overflow", v)
    } else {
        return None;
    };
    match value {
        "auto" | "hidden" | "visible" | "scroll" | "clip" => {
            Some(CssRule::new(class, &[(prop, value)]))
        }
        _ => None,
    }
}

// ─── Flexbox ────────────────────────────────────────────────────────────────

fn resolve_flex(class: &str) -> Option<CssRule> {
    let props: &[(&str, &str)] = match class {
        "flex-row" => &[("flex-direction", "row")],
        "flex-col" => &[("flex-direction", "column")],
        "flex-row-reverse" => &[("flex-direction", "row-reverse")],
        "flex-col-reverse" => &[("flex-direction", "column-reverse")],
        "flex-wrap" => &[("flex-wrap", "wrap")],
        "flex-nowrap" => &[("flex-wrap", "nowrap")],
        "flex-none" => &[("flex", "none")],
        "flex-1" => &[("flex", "1 1 0%")],
        "flex-auto" => &[("flex", "1 1 auto")],
        "flex-initial" => &[("flex", "0 1 auto")],
        "grow" => &[("flex-grow", "1")],
        "shrink-0" => &[("flex-shrink", "0")],
        _ => return None,
    };
    Some(CssRule::new(class, props))
}

fn resolve_alignment(class: &str) -> Option<CssRule> {
    let (prop, value) = match class {
        "justify-start" => ("justify-content", "flex-start"),
        "justify-center" => ("justify-content", "center"),
        "justify-end" => ("justify-content", "flex-end"),
        "justify-between" => ("justify-content", "space-between"),
        "justify-around" => ("justify-content", "space-around"),
        "justify-evenly" => ("justify-content", "space-evenly"),
        "items-start" => ("align-items", "flex-start"),
        "items-center" => ("align-items", "center"),
        "items-end" => ("align-items", "flex-end"),
        "items-baseline" => ("align-items", "baseline"),
        "items-stretch" => ("align-items", "stretch"),
        "self-start" => ("align-self", "flex-start"),
        "self-center" => ("align-self", "center"),
        "self-end" => ("align-self", "flex-end"),
        "self-stretch" => ("align-self", "stretch"),
        _ => {
            let value = arbitrary(class, "gap")?;
            return Some(CssRule::single(class, "gap", value));
        }
    };
    Some(CssRule::new(class, &[(prop, value)]))
}

// ─── Spacing ────────────────────────────────────────────────────────────────

/// Padding/margin prefixes and the properties each writes, longest prefix first
const SPACING_PREFIXES: &[(&str, &[&str])] = &[
    ("px", &["padding-left", "padding-right"]),
    ("py", &["padding-top", "padding-bottom"]),
    ("pt", &["padding-top"]),
    ("pb", &["padding-bottom"]),
    ("pl", &["padding-left"]),
    ("pr", &["padding-right"]),
    ("ps", &["padding-inline-start"]),
    ("pe", &["padding-inline-end"]),
    ("p", &["padding"]),
    ("mx", &["margin-left", "margin-right"]),
    ("my", &["margin-top", "margin-bottom"]),
    ("mt", &["margin-top"]),
    ("mb", &["margin-bottom"]),
    ("ml", &["margin-left"]),
    ("mr", &["margin-right"]),
    ("ms", &["margin-inline-start"]),
    ("me", &["margin-inline-end"]),
    ("m", &["margin"]),
];

fn resolve_spacing(class: &str) -> Option<CssRule> {
    for (prefix, props) in SPACING_PREFIXES {
        let Some(rest) = class.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) else {
            continue;
        };
        let value = match rest {
            "0" => "0px".to_string(),
            "px" => "1px".to_string(),
            "auto" if prefix.starts_with('m') => "auto".to_string(),
            _ => arbitrary(class, prefix)?,
        };
        return Some(CssRule::dynamic(
            class,
            props.iter().map(|p| (p.to_string(), value.clone())).collect(),
        ));
    }
    None
}

// ─── Sizing ─────────────────────────────────────────────────────────────────

fn resolve_sizing(class: &str) -> Option<CssRule> {
    // longest prefix first so `min-w-` is not read as `m-`
    let (prefix, prop) = [
        ("min-w", "min-width"),
        ("min-h", "min-height"),
        ("max-w", "max-width"),
        ("max-h", "max-height"),
        ("w", "width"),
        ("h", "height"),
    ]
    .into_iter()
    .find(|(prefix, _)| {
        class
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-'))
    })?;

    let rest = &class[prefix.len() + 1..];
    let value = match rest {
        "0" => "0px".to_string(),
        "px" => "1px".to_string(),
        "full" => "100%".to_string(),
        "auto" => "auto".to_string(),
        "none" => "none".to_string(),
        "screen" if prop.ends_with("width") => "100vw".to_string(),
        "screen" => "100vh".to_string(),
        _ => arbitrary(class, prefix)?,
    };
    Some(CssRule::single(class, prop, value))
}

fn resolve_aspect(class: &str) -> Option<CssRule> {
    let value = match class {
        "aspect-square" => "1 / 1".to_string(),
        "aspect-video" => "16 / 9".to_string(),
        _ => arbitrary(class, "aspect")?.replace('/', " / "),
    };
    Some(CssRule::single(class, "aspect-ratio", value))
}

// ─── Typography ─────────────────────────────────────────────────────────────

fn resolve_typography(class: &str) -> Option<CssRule> {
    let props: &[(&str, &str)] = match class {
        "font-bold" => &[("font-weight", "700")],
        "font-semibold" => &[("font-weight", "600")],
        "font-medium" => &[("font-weight", "500")],
        "font-normal" => &[("font-weight", "400")],
        "italic" => &[("font-style", "italic")],
        "not-italic" => &[("font-style", "normal")],
        "underline" => &[("text-decoration-line", "underline")],
        "line-through" => &[("text-decoration-line", "line-through")],
        "no-underline" => &[("text-decoration-line", "none")],
        "text-start" => &[("text-align", "start")],
        "text-end" => &[("text-align", "end")],
        "text-center" => &[("text-align", "center")],
        "text-left" => &[("text-align", "left")],
        "text-right" => &[("text-align", "right")],
        "text-ellipsis" => &[("text-overflow", "ellipsis")],
        "text-clip" => &[("text-overflow", "clip")],
        "whitespace-normal" => &[("white-space", "normal")],
        "whitespace-nowrap" => &[("white-space", "nowrap")],
        "whitespace-pre-wrap" => &[("white-space", "pre-wrap")],
        "break-words" => &[("overflow-wrap", "break-word")],
        "break-all" => &[("word-break", "break-all")],
        "truncate" => &[
            ("overflow", "hidden"),
            ("text-overflow", "ellipsis"),
            ("white-space", "nowrap"),
        ],
        _ => {
            let value = arbitrary(class, "text")?;
            let prop = if is_length(&value) { "font-size" } else { "color" };
            return Some(CssRule::single(class, prop, value));
        }
    };
    Some(CssRule::new(class, props))
}

// ─── Borders ────────────────────────────────────────────────────────────────

fn resolve_border(class: &str) -> Option<CssRule> {
    let props: &[(&str, &str)] = match class {
        "border" => &[("border-width", "1px")],
        "border-0" => &[("border-width", "0px")],
        "border-t" => &[("border-top-width", "1px")],
        "border-b" => &[("border-bottom-width", "1px")],
        "border-l" => &[("border-left-width", "1px")],
        "border-r" => &[("border-right-width", "1px")],
        "border-solid" => &[("border-style", "solid")],
        "border-dashed" => &[("border-style", "dashed")],
        "border-dotted" => &[("border-style", "dotted")],
        "border-none" => &[("border-style", "none")],
        "rounded-none" => &[("border-radius", "0px")],
        "rounded-full" => &[("border-radius", "9999px")],
        _ => {
            if let Some(value) = arbitrary(class, "rounded") {
                return Some(CssRule::single(class, "border-radius", value));
            }
            let value = arbitrary(class, "border")?;
            let prop = if is_length(&value) {
                "border-width"
            } else {
                "border-color"
            };
            return Some(CssRule::single(class, prop, value));
        }
    };
    Some(CssRule::new(class, props))
}

// ─── Backgrounds ────────────────────────────────────────────────────────────

fn resolve_background(class: &str) -> Option<CssRule> {
    let props: &[(&str, &str)] = match class {
        "bg-center" => &[("background-position", "center")],
        "bg-no-repeat" => &[("background-repeat", "no-repeat")],
        "bg-contain" => &[("background-size", "contain")],
        "bg-cover" => &[("background-size", "cover")],
        "bg-transparent" => &[("background-color", "transparent")],
        _ => {
            let value = arbitrary(class, "bg")?;
            return Some(CssRule::single(class, "background-color", value));
        }
    };
    Some(CssRule::new(class, props))
}

// ─── Misc ───────────────────────────────────────────────────────────────────

fn resolve_misc(class: &str) -> Option<CssRule> {
    let props: &[(&str, &str)] = match class {
        "cursor-pointer" => &[("cursor", "pointer")],
        "cursor-default" => &[("cursor", "default")],
        "object-cover" => &[("object-fit", "cover")],
        "object-contain" => &[("object-fit", "contain")],
        "select-none" => &[("user-select", "none")],
        _ => return resolve_aspect(class),
    };
    Some(CssRule::new(class, props))
}
