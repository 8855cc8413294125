use std::{error::Error as StdError, fmt::Display};

use thiserror::Error;

use crate::Position;

/// Which stage of the front end an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } | ErrorImpl::SourceTooLarge { .. } => {
                ErrorKind::Lexical
            }
            _ => ErrorKind::Syntax,
        }
    }

    /// Re-wraps a lexical error as the syntax error the parser reports for it.
    /// Syntax errors are returned unchanged.
    pub fn into_lexer_error(self) -> Self {
        match self.get_kind() {
            ErrorKind::Lexical => Error {
                internal_error: ErrorImpl::LexerError {
                    inner: Box::new(self.internal_error),
                },
                position: self.position,
            },
            ErrorKind::Syntax => self,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::LexerError { .. } => "LexerError",
            ErrorImpl::ExpectedExpression => "ExpectedExpression",
            ErrorImpl::ExpectedSemicolon => "ExpectedSemicolon",
            ErrorImpl::ExpectedDeclarationSemicolon => "ExpectedDeclarationSemicolon",
            ErrorImpl::ExpectedIdentifier => "ExpectedIdentifier",
            ErrorImpl::ExpectedAssignment => "ExpectedAssignment",
            ErrorImpl::ExpectedCloseParen => "ExpectedCloseParen",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character: {}", character))
            }
            ErrorImpl::LexerError { inner } => ErrorTip::Suggestion(inner.to_string()),
            ErrorImpl::ExpectedExpression => ErrorTip::Suggestion(String::from(
                "expected a number, an identifier or `(`",
            )),
            ErrorImpl::ExpectedSemicolon | ErrorImpl::ExpectedDeclarationSemicolon => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::ExpectedIdentifier => ErrorTip::Suggestion(String::from(
                "`let` must be followed by a variable name",
            )),
            ErrorImpl::ExpectedAssignment => ErrorTip::Suggestion(String::from(
                "variables must be initialised with `=`",
            )),
            ErrorImpl::ExpectedCloseParen => {
                ErrorTip::Suggestion(String::from("unclosed parenthesis"))
            }
            ErrorImpl::SourceTooLarge { .. } => {
                ErrorTip::Suggestion(String::from("split the input into smaller sources"))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.internal_error.source()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character: {character}")]
    UnexpectedCharacter { character: char },
    #[error("Lexer error: {inner}")]
    LexerError {
        #[source]
        inner: Box<ErrorImpl>,
    },
    #[error("Expected expression")]
    ExpectedExpression,
    #[error("Expected ';' after expression")]
    ExpectedSemicolon,
    #[error("Expected ';' after variable declaration")]
    ExpectedDeclarationSemicolon,
    #[error("Expected identifier after 'let'")]
    ExpectedIdentifier,
    #[error("Expected '=' after identifier")]
    ExpectedAssignment,
    #[error("Expected ')' after expression")]
    ExpectedCloseParen,
    #[error("Source too large: {size} bytes (at most {limit})")]
    SourceTooLarge { size: usize, limit: usize },
    #[error("Expected at most {limit} nested parentheses")]
    NestingTooDeep { limit: usize },
}
