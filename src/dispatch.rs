//! Node dispatch shared by every tree walker.
//!
//! Both the renderer and the code generator implement [`Visitor`]; [`dispatch`]
//! is the single place that maps a component's type to a visit method, so the
//! set of known node types cannot drift between them.

use crate::components::{
    Button, Component, Filler, FlexBox, Icon, Image, Layout, Separator, Spacer, Span, Text, Video,
};

/// Information inherited from ancestors during a walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// Layout of the nearest enclosing box; `None` outside any box
    pub layout: Option<Layout>,
    pub depth: usize,
}

impl Context {
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for the children of a box with `layout`
    pub fn within(self, layout: Layout) -> Self {
        Self {
            layout: Some(layout),
            depth: self.depth + 1,
        }
    }

    /// Context for a node that sits outside any box (a bare hero leaf)
    pub fn detached(self) -> Self {
        Self {
            layout: None,
            depth: self.depth + 1,
        }
    }
}

pub trait Visitor {
    type Output;

    fn visit_box(&self, node: &FlexBox, ctx: Context) -> Self::Output;
    fn visit_button(&self, node: &Button, ctx: Context) -> Self::Output;
    fn visit_filler(&self, node: &Filler, ctx: Context) -> Self::Output;
    fn visit_icon(&self, node: &Icon, ctx: Context) -> Self::Output;
    fn visit_image(&self, node: &Image, ctx: Context) -> Self::Output;
    fn visit_separator(&self, node: &Separator, ctx: Context) -> Self::Output;
    fn visit_spacer(&self, node: &Spacer, ctx: Context) -> Self::Output;
    fn visit_span(&self, node: &Span, ctx: Context) -> Self::Output;
    fn visit_text(&self, node: &Text, ctx: Context) -> Self::Output;
    fn visit_video(&self, node: &Video, ctx: Context) -> Self::Output;

    /// Called for any node whose `type` is not recognised
    fn visit_unsupported(&self, kind: &str, ctx: Context) -> Self::Output;
}

/// Route `component` to the matching visit method. Total over all inputs.
pub fn dispatch<V: Visitor + ?Sized>(visitor: &V, component: &Component, ctx: Context) -> V::Output {
    log::trace!("visit {} at depth {}", component.kind(), ctx.depth);
    match component {
        Component::Box(node) => visitor.visit_box(node, ctx),
        Component::Button(node) => visitor.visit_button(node, ctx),
        Component::Filler(node) => visitor.visit_filler(node, ctx),
        Component::Icon(node) => visitor.visit_icon(node, ctx),
        Component::Image(node) => visitor.visit_image(node, ctx),
        Component::Separator(node) => visitor.visit_separator(node, ctx),
        Component::Spacer(node) => visitor.visit_spacer(node, ctx),
        Component::Span(node) => visitor.visit_span(node, ctx),
        Component::Text(node) => visitor.visit_text(node, ctx),
        Component::Video(node) => visitor.visit_video(node, ctx),
        Component::Unsupported(_) => visitor.visit_unsupported(component.kind(), ctx),
    }
}
