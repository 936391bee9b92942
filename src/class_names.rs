//! Utility class merging.
//!
//! [`merge`] folds conditionally-included class fragments into one string.
//! Order is preserved; when two classes set the same property the later one
//! wins and the earlier one is dropped. A shorthand (`p-*`) drops earlier
//! longhands it covers (`pt-*`), while a later longhand keeps the earlier
//! shorthand and simply overrides one side of it.

use std::collections::HashSet;

/// Merge class fragments. Each fragment may hold several space separated
/// classes; empty fragments are skipped.
///
/// ```
/// use line_flex::class_names::merge;
///
/// let base = "p-[20px] text-[16px]";
/// let bold = true;
/// assert_eq!(
///     merge([base, if bold { "font-bold" } else { "" }, "p-[10px]"]),
///     "text-[16px] font-bold p-[10px]"
/// );
/// ```
pub fn merge<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = parts.into_iter().collect();
    let tokens: Vec<&str> = parts
        .iter()
        .flat_map(|p| p.as_ref().split_whitespace())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        let group = conflict_group(token);
        if seen.contains(&group) {
            continue;
        }
        for covered in covered_groups(&group) {
            seen.insert(covered.to_string());
        }
        seen.insert(group);
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// The property group a class writes to. Classes outside every known group
/// conflict only with themselves.
fn conflict_group(class: &str) -> String {
    if let Some(group) = keyword_group(class) {
        return group.to_string();
    }

    if let Some((prefix, value)) = split_arbitrary(class) {
        return match prefix {
            "text" if is_length(value) => "font-size".to_string(),
            "text" => "text-color".to_string(),
            "border" if is_length(value) => "border-width".to_string(),
            "border" => "border-color".to_string(),
            "bg" => "background-color".to_string(),
            _ => prefix.to_string(),
        };
    }

    for prefix in PREFIX_GROUPS {
        if class
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-'))
        {
            return (*prefix).to_string();
        }
    }

    class.to_string()
}

/// Longest prefixes first so `min-w` wins over `m`
const PREFIX_GROUPS: &[&str] = &[
    "overflow-x", "overflow-y", "overflow", "min-w", "min-h", "max-w", "max-h",
    "whitespace", "justify", "items", "self", "rounded", "cursor", "aspect", "gap",
    "px", "py", "pt", "pb", "ps", "pe", "pl", "pr", "p",
    "mx", "my", "mt", "mb", "ms", "me", "ml", "mr", "m",
    "w", "h",
];

fn keyword_group(class: &str) -> Option<&'static str> {
    let group = match class {
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "hidden" => {
            "display"
        }
        "flex-row" | "flex-col" | "flex-row-reverse" | "flex-col-reverse" => "flex-direction",
        "flex-none" | "flex-1" | "flex-auto" | "flex-initial" => "flex",
        "font-bold" | "font-normal" | "font-medium" | "font-semibold" => "font-weight",
        "italic" | "not-italic" => "font-style",
        "underline" | "line-through" | "no-underline" => "text-decoration",
        "text-start" | "text-end" | "text-center" | "text-left" | "text-right" => "text-align",
        "text-ellipsis" | "text-clip" => "text-overflow",
        "break-words" | "break-all" | "break-normal" => "word-break",
        "border-solid" | "border-dashed" | "border-dotted" | "border-none" => "border-style",
        "bg-contain" | "bg-cover" => "background-size",
        "bg-center" => "background-position",
        "bg-no-repeat" => "background-repeat",
        "bg-transparent" => "background-color",
        _ => return None,
    };
    Some(group)
}

/// `("text", "16px")` for `text-[16px]`
fn split_arbitrary(class: &str) -> Option<(&str, &str)> {
    let open = class.find("-[")?;
    let value = class[open + 2..].strip_suffix(']')?;
    Some((&class[..open], value))
}

fn is_length(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.' || c == '-')
}

fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pb", "ps", "pe", "pl", "pr"],
        "px" => &["ps", "pe", "pl", "pr"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mb", "ms", "me", "ml", "mr"],
        "mx" => &["ms", "me", "ml", "mr"],
        "my" => &["mt", "mb"],
        "overflow" => &["overflow-x", "overflow-y"],
        _ => &[],
    }
}
