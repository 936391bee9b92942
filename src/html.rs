//! Standalone HTML page output.
//! No script, no inline event handlers; only structure and styles.

use std::fmt::Write;

use crate::config::RenderConfig;
use crate::document::FlexDocument;
use crate::node::escape_html;
use crate::render::Renderer;
use crate::tailwind;

/// Document styles and the layout rules the utility engine cannot express.
///
/// A child's margin is stored in `--lf-m` and applied on the parent's main
/// axis, so the same `lf-m-*` class works in vertical and horizontal boxes.
const BASE_STYLES: &str = "html,body{margin:0;}\
body{font-family:-apple-system,BlinkMacSystemFont,'Helvetica Neue','Hiragino Sans',sans-serif;color:#111111;}\
p{margin:0;}\
button{font:inherit;background:none;}\
.lf-page{box-sizing:border-box;max-width:520px;margin:0 auto;padding:16px;}\
.lf-scrollbar-hide{scrollbar-width:none;-ms-overflow-style:none;}\
.lf-scrollbar-hide::-webkit-scrollbar{display:none;}\
.lf-box>*{--lf-m:0px;}\
.lf-vertical>*{margin-top:var(--lf-m);}\
.lf-horizontal>*,.lf-baseline>*{margin-inline-start:var(--lf-m);}\
.lf-vertical>:first-child,.lf-horizontal>:first-child,.lf-baseline>:first-child{margin-top:0;margin-inline-start:0;}\
.lf-carousel .lf-bubble{align-self:flex-start;}\n";

const MARGIN_KEYWORDS: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "xxl"];

/// `.lf-m-md{--lf-m:8px;}` and friends, from the spacing scale
fn margin_rules() -> String {
    let mut css = String::new();
    for keyword in MARGIN_KEYWORDS {
        if let Some(px) = crate::style::spacing_px(keyword) {
            css.push_str(&format!(".lf-m-{keyword}{{--lf-m:{px};}}"));
        }
    }
    css.push('\n');
    css
}

/// Drops characters that could close the declaration or the `<style>` element
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';'))
        .collect()
}

/// Full stylesheet for a rendered fragment
pub fn stylesheet(fragment: &str, config: &RenderConfig) -> String {
    let mut css = format!("body{{background:{};}}\n", css_value(&config.page.background));
    if config.page.base_styles {
        css.push_str(BASE_STYLES);
        css.push_str(&margin_rules());
    }
    css.push_str(&tailwind::generate_css(fragment));
    css
}

/// Render `document` into a standalone HTML page.
pub fn render_page(document: &FlexDocument, config: &RenderConfig) -> String {
    let fragment = Renderer::new(config).render_document(document).to_html();
    wrap_page(&fragment, config)
}

/// Wrap an already rendered fragment into a standalone HTML page.
pub fn wrap_page(fragment: &str, config: &RenderConfig) -> String {
    let css = stylesheet(fragment, config);

    let mut html = String::new();
    let written = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{css}</style>
</head>
<body>
<main class="lf-page">{fragment}</main>
</body>
</html>
"#,
        title = escape_html(&config.page.title),
    );
    if let Err(err) = written {
        log::error!("failed to assemble page: {err}");
    }
    html
}
