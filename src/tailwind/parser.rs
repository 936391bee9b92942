use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("BUG: invalid CLASS_ATTR_RE regex literal")
});

/// Extracts all unique CSS class tokens from an HTML string.
///
/// Scans for `class="..."` and `class='...'` attributes and returns
/// each whitespace-separated token exactly once, in order of first appearance.
pub fn extract_classes(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut classes = Vec::new();

    for caps in CLASS_ATTR_RE.captures_iter(html) {
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        for token in value.as_str().split_whitespace() {
            if seen.insert(token) {
                classes.push(token.to_string());
            }
        }
    }

    classes
}
