use itertools::Itertools;

use crate::{
    attributes::extract_properties,
    children::extract_children,
    escape::string_literal,
    node::{MarkupChild, MarkupNode},
    options::TransformOptions,
    style::extract_styles,
    tables::{BUILDER_NAMESPACE, ElementClass, INPUT_CONSTRUCTOR_PREFIX, input_subtype},
};

/// Emits the builder-chain expression for `node` and, recursively, its children.
///
/// Calls are chained in a fixed order: constructor, `.style()`, `.value()` and
/// `.checked()` for inputs, `.props()`, then either the textarea `.value()` or
/// `.children()`.
pub fn emit_node(node: &MarkupNode, options: &TransformOptions) -> String {
    let class = ElementClass::from_tag(&node.tag);
    let mut output = String::from(BUILDER_NAMESPACE);
    output.push('.');

    match class {
        ElementClass::InputLike => {
            output.push_str(INPUT_CONSTRUCTOR_PREFIX);
            output.push_str(input_subtype(node.attribute("type")));
        }
        ElementClass::Plain | ElementClass::TextAreaLike => output.push_str(&node.tag),
    }

    match node.attribute("class").filter(|class_name| !class_name.is_empty()) {
        Some(class_name) => push_call(&mut output, "", &string_literal(class_name)),
        None => output.push_str("()"),
    }

    if let Some(styles) = node.attribute("style").and_then(extract_styles) {
        let styles = object_literal(
            styles
                .iter()
                .map(|(property, value)| (*property, string_literal(value))),
        );
        push_call(&mut output, ".style", &styles);
    }

    if class == ElementClass::InputLike {
        if let Some(value) = node.attribute("value").filter(|value| !value.is_empty()) {
            push_call(&mut output, ".value", &string_literal(value));
        }
        // A bare `checked` has an empty value, which counts as `true` like any boolean attribute.
        if node.attribute("checked").is_some() {
            push_call(&mut output, ".checked", "true");
        }
    }

    if let Some(properties) = extract_properties(class, &node.attributes) {
        let properties = object_literal(
            properties
                .iter()
                .map(|(name, value)| (*name, value.to_literal())),
        );
        push_call(&mut output, ".props", &properties);
    }

    match class {
        ElementClass::TextAreaLike => {
            if let Some(MarkupChild::Text(text)) = node.children.first() {
                if !text.is_empty() {
                    push_call(&mut output, ".value", &string_literal(text.trim()));
                }
            }
        }
        ElementClass::Plain | ElementClass::InputLike => {
            let children = extract_children(&node.children, options);
            if !children.is_empty() {
                push_call(&mut output, ".children", &children);
            }
        }
    }

    log::trace!("<{}> => {}", node.tag, output);
    output
}

fn push_call(output: &mut String, method: &str, args: &str) {
    output.push_str(method);
    output.push('(');
    output.push_str(args);
    output.push(')');
}

/// Serializes entries as `{"key":value,...}` with a trailing comma after every entry.
fn object_literal<'a>(entries: impl Iterator<Item = (&'a str, String)>) -> String {
    format!(
        "{{{}}}",
        entries
            .map(|(key, value)| format!("{}:{},", string_literal(key), value))
            .join("")
    )
}
