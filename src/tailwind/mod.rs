//! # Utility CSS engine
//!
//! Scans rendered HTML for `class="..."` attributes, resolves each recognised
//! utility class to its CSS rule, and returns a stylesheet ready to inject
//! into a `<style>` element.
//!
//! ## Covered
//! - **Display & position**: block, flex, hidden, relative, absolute, inset
//! - **Flexbox**: direction, flex-none/1, justify-*, items-*, self-*, gap-[..]
//! - **Spacing**: p-*, px/py/pt/pb/pl/pr/ps/pe-*, m-* with arbitrary values
//! - **Sizing**: w-*, h-*, min-w/h-*, max-w/h-*, aspect-[w/h]
//! - **Typography**: text-[size], text-[color], weight, style, decoration, wrapping
//! - **Borders & backgrounds**: border-[width|color], border-t/l, rounded-[..], bg-[..]
//!
//! Arbitrary values use `[...]` with `_` standing for a space:
//! `p-[11px_14px_13px]` ⇒ `padding: 11px 14px 13px`.

pub mod parser;
pub mod registry;

pub use registry::CssRule;

use std::collections::HashSet;

/// Reset emitted before any utility rule
const PREAMBLE: &str = "*,*::before,*::after{box-sizing:border-box;border-width:0;border-style:solid;}\n";

/// Properties that reset their longhands; their rules are emitted first so a
/// longhand on the same element (`p-[20px] pt-[19px]`) still applies.
const SHORTHANDS: &[&str] = &[
    "padding",
    "margin",
    "flex",
    "border-width",
    "border-color",
    "border-radius",
    "inset",
    "gap",
    "overflow",
    "background",
];

/// Scan `html` for class attributes, resolve every recognised utility class,
/// and return the resulting CSS string.
pub fn generate_css(html: &str) -> String {
    let classes = parser::extract_classes(html);
    let refs: Vec<&str> = classes.iter().map(String::as_str).collect();
    generate_css_for_classes(&refs)
}

/// Resolve an explicit slice of class names to CSS.
///
/// Deduplicates classes and skips any that are not recognised.
pub fn generate_css_for_classes(classes: &[&str]) -> String {
    let mut seen = HashSet::new();
    let mut rules: Vec<CssRule> = Vec::new();

    for &class in classes {
        if seen.insert(class) {
            match registry::resolve_class(class) {
                Some(rule) => rules.push(rule),
                None => log::trace!("no utility rule for '{class}'"),
            }
        }
    }

    // stable: rules keep first-seen order within each rank
    rules.sort_by_key(rank);
    render_css(&rules)
}

fn rank(rule: &CssRule) -> u8 {
    let is_shorthand = rule
        .declarations
        .first()
        .is_some_and(|(prop, _)| SHORTHANDS.contains(&prop.as_str()));
    if is_shorthand {
        0
    } else {
        1
    }
}

fn render_css(rules: &[CssRule]) -> String {
    if rules.is_empty() {
        return String::new();
    }

    let mut css = String::from(PREAMBLE);
    for rule in rules {
        css.push_str(&rule.selector);
        css.push('{');
        for (prop, val) in &rule.declarations {
            css.push_str(prop);
            css.push(':');
            css.push_str(val);
            css.push(';');
        }
        css.push_str("}\n");
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_pipeline() {
        let html = r##"<div class="flex flex-col p-[20px] bg-[#ffffff] text-[16px] w-full"></div>"##;
        let css = generate_css(html);

        assert!(css.starts_with(PREAMBLE));
        assert!(css.contains(".flex{display:flex;}"));
        assert!(css.contains(".flex-col{flex-direction:column;}"));
        assert!(css.contains(r".p-\[20px\]{padding:20px;}"));
        assert!(css.contains(r".bg-\[\#ffffff\]{background-color:#ffffff;}"));
        assert!(css.contains(r".text-\[16px\]{font-size:16px;}"));
        assert!(css.contains(".w-full{width:100%;}"));
    }

    #[test]
    fn shorthands_come_before_longhands() {
        let css = generate_css_for_classes(&["pt-[19px]", "p-[20px]", "pb-[10px]"]);
        let lines: Vec<&str> = css.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec![
                r".p-\[20px\]{padding:20px;}",
                r".pt-\[19px\]{padding-top:19px;}",
                r".pb-\[10px\]{padding-bottom:10px;}",
            ]
        );
    }

    #[test]
    fn deduplicates_and_skips_unknown() {
        let css = generate_css_for_classes(&["flex", "lf-box", "flex"]);
        assert_eq!(css.matches(".flex{").count(), 1);
        assert!(!css.contains("lf-box"));
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(generate_css("<div></div>"), "");
        assert_eq!(generate_css_for_classes(&["lf-only"]), "");
    }
}
