use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FormatError {
    #[error("Unexpected character `{found}` at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
    #[error("Unexpected token `{token}` at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },
    #[error("Unexpected EOF detected")]
    UnexpectedEOFDetected,
}
