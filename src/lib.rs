//! # LINE Flex Message renderer
//!
//! Renders Flex Message JSON (a message envelope, a bare bubble or a bare
//! carousel) into a styled node tree, standalone HTML, or `Lf*` component
//! markup.
//!
//! ## Features
//! - Typed data model for every Flex node, with unknown node types kept and skipped
//! - Style tokens (`"md"`, `"16:9"`, `"12px"`) resolved through fixed lookup tables
//! - Separator orientation follows the enclosing box's layout
//! - Click targets carry their action; hosts bind [`resolve_click`] to their own events
//! - A small utility-class CSS engine for standalone HTML pages
//!
//! ## Example: render a bubble
//! ```
//! use line_flex::{parse, render};
//!
//! let json = r#"{
//!   "type": "bubble",
//!   "body": {
//!     "type": "box",
//!     "layout": "vertical",
//!     "contents": [{ "type": "text", "text": "Hello, World!" }]
//!   }
//! }"#;
//!
//! let doc = parse(json).expect("valid flex json");
//! let tree = render(&doc);
//! assert!(tree.to_html().contains("Hello, World!"));
//! ```
//!
//! ## Example: generate component markup
//! ```
//! use line_flex::{generate_jsx, parse};
//!
//! let doc = parse(r#"{"type":"bubble","size":"nano"}"#).unwrap();
//! assert_eq!(generate_jsx(&doc), "<LfBubble size=\"nano\">\n</LfBubble>");
//! ```

pub mod action;
pub mod class_names;
pub mod codegen;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod html;
pub mod node;
pub mod parser;
pub mod render;
pub mod style;
pub mod tailwind;

// --- Core types ---
pub use action::{resolve_click, Action, ActionHandler, Click};
pub use components::{Bubble, Carousel, Component, FlexBox, FlexContainer, FlexMessage, Layout};
pub use config::RenderConfig;
pub use dispatch::{dispatch, Context, Visitor};
pub use document::FlexDocument;
pub use error::{FlexError, FlexResult};
pub use node::{Element, Node};
pub use render::Renderer;

// --- Code generation ---
pub use codegen::{generate_component_jsx, generate_jsx};

/// Parse a Flex document (message envelope, bubble or carousel).
pub fn parse(json: &str) -> FlexResult<FlexDocument> {
    parser::parse_document(json)
}

/// Parse a single component such as a box or a text.
pub fn parse_component(json: &str) -> FlexResult<Component> {
    parser::parse_component(json)
}

/// Render a document into a node tree with the default configuration.
pub fn render(document: &FlexDocument) -> Node {
    render_with_config(document, &RenderConfig::default())
}

pub fn render_with_config(document: &FlexDocument, config: &RenderConfig) -> Node {
    Renderer::new(config).render_document(document)
}

/// Render a document into a standalone HTML page.
pub fn render_html(document: &FlexDocument, config: &RenderConfig) -> String {
    html::render_page(document, config)
}
