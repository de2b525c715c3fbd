use ivi_formatter::FormatError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum Error {
    #[error("Invalid component name `{0}`")]
    #[diagnostic(
        code(html_to_ivi::invalid_component_name),
        help("The component name must be a JavaScript identifier such as `TodoItem`.")
    )]
    InvalidComponentName(String),

    #[error(transparent)]
    #[diagnostic(
        code(html_to_ivi::format),
        help("The generated code could not be formatted; tag or attribute names may not be valid identifiers.")
    )]
    Format(#[from] FormatError),
}
