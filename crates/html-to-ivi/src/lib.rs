//! `html-to-ivi` converts an HTML fragment into a component function that
//! builds the same tree with a builder-style API.
//!
//! ## Examples
//!
//! ```rust
//! use html_to_ivi::{TransformOptions, convert};
//!
//! let html = r#"<div class="app"><label for="name">Name</label></div>"#;
//! let code = convert(html, &TransformOptions::default()).unwrap();
//!
//! assert_eq!(
//!     code,
//!     r#"function Component() {
//!   return h.div("app").children(
//!     h.label().props({ "htmlFor": "name" }).children("Name"),
//!   );
//! }
//! "#
//! );
//! ```
//!
//! Only the first top-level element is converted; an input without elements
//! yields an empty string.
mod attributes;
mod children;
mod emitter;
mod error;
mod escape;
mod node;
mod options;
mod parser;
mod style;
mod tables;

pub use attributes::{PropertyMap, PropertyValue, extract_properties};
pub use children::{extract_children, is_whitespace};
pub use emitter::emit_node;
pub use error::Error;
pub use escape::{escape_text, string_literal};
pub use ivi_formatter::{FormatError, Formatter, FormatterConfig};
pub use node::{MarkupChild, MarkupNode};
pub use options::{DEFAULT_COMPONENT_NAME, TransformOptions};
pub use parser::parse_markup;
pub use style::{StyleMap, extract_styles};
pub use tables::{ElementClass, input_subtype, property_name};

/// Converts `input` and formats the result with the default formatter settings.
pub fn convert(input: &str, options: &TransformOptions) -> Result<String, Error> {
    convert_with_formatter(input, options, FormatterConfig::default())
}

pub fn convert_with_formatter(
    input: &str,
    options: &TransformOptions,
    config: FormatterConfig,
) -> Result<String, Error> {
    let code = convert_unformatted(input, options)?;
    if code.is_empty() {
        return Ok(code);
    }

    Ok(Formatter::new(Some(config)).format(&code)?)
}

/// Converts `input` without running the formatter.
pub fn convert_unformatted(input: &str, options: &TransformOptions) -> Result<String, Error> {
    if !is_identifier(&options.component_name) {
        return Err(Error::InvalidComponentName(options.component_name.clone()));
    }

    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let nodes = parse_markup(input);
    let mut elements = nodes.iter().filter_map(|node| match node {
        MarkupChild::Element(element) => Some(element),
        MarkupChild::Text(_) => None,
    });

    let Some(root) = elements.next() else {
        log::debug!("no top-level element found");
        return Ok(String::new());
    };

    let ignored = elements.count();
    if ignored > 0 {
        log::debug!("ignoring {} top-level sibling(s) of <{}>", ignored, root.tag);
    }

    Ok(emit_component(root, options))
}

/// Wraps the expression for `root` in the component function.
pub fn emit_component(root: &MarkupNode, options: &TransformOptions) -> String {
    format!(
        "function {}() {{ return {}; }}",
        options.component_name,
        emit_node(root, options)
    )
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
