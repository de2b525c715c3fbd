use itertools::Itertools;

use crate::{
    emitter::emit_node, escape::string_literal, node::MarkupChild, options::TransformOptions,
};

/// Emits the arguments of a `.children()` call, or an empty string when no
/// child survives.
pub fn extract_children(children: &[MarkupChild], options: &TransformOptions) -> String {
    children
        .iter()
        .filter_map(|child| match child {
            MarkupChild::Text(text) if text.is_empty() => None,
            MarkupChild::Text(text) if options.trim && is_whitespace(text) => None,
            MarkupChild::Text(text) => Some(string_literal(text)),
            MarkupChild::Element(node) => Some(emit_node(node, options)),
        })
        .join(",")
}

/// Whether `text` consists only of spaces, tabs, line feeds and carriage returns.
pub fn is_whitespace(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}
