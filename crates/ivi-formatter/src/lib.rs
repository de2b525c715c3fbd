//! `ivi-formatter` pretty-prints the component functions generated by `html-to-ivi`.
//!
//! It understands the small JavaScript subset the transformer emits: one
//! `function NAME() { return EXPR; }` whose body is built from identifiers,
//! string literals, object literals, member accesses and calls.
//!
//! ```rust
//! use ivi_formatter::Formatter;
//!
//! let mut formatter = Formatter::new(None);
//! let formatted = formatter
//!     .format(r#"function Component() { return h.div("app"); }"#)
//!     .unwrap();
//!
//! assert_eq!(formatted, "function Component() {\n  return h.div(\"app\");\n}\n");
//! ```
mod ast;
mod error;
mod formatter;
mod lexer;
mod parser;

pub use error::FormatError;
pub use formatter::{Formatter, FormatterConfig};
