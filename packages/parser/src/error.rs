use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Malformed JSON at {line}:{column}: {message}")]
    MalformedJson {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    pub fn malformed_json(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::MalformedJson {
            line,
            column,
            message: message.into(),
        }
    }

    pub fn is_malformed_json(&self) -> bool {
        matches!(self, Self::MalformedJson { .. })
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::malformed_json(e.line(), e.column(), e.to_string())
    }
}
