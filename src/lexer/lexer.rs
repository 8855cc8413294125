use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    logger::logger::Logger,
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Largest source `tokenize` accepts, since offsets are stored as `u32`.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Receives the lexer and the text its pattern matched at the current position.
pub type RegexHandler = fn(&mut Lexer, String);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Every pattern is anchored, so a match is always at the lexer's position
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Position of the current byte offset.
    pub fn position(&self) -> Position {
        Position(offset(self.pos), Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position(offset(self.pos + len), Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

// Lossless once `check_source_len` has passed
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

pub fn check_source_len(len: usize) -> Result<(), ErrorImpl> {
    if len > MAX_SOURCE_LEN {
        Err(ErrorImpl::SourceTooLarge {
            size: len,
            limit: MAX_SOURCE_LEN,
        })
    } else {
        Ok(())
    }
}

fn number_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
}

fn skip_handler(lexer: &mut Lexer, matched: String) {
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push(MK_TOKEN!(*kind, matched, span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, matched, span));
    }
}

/// Scans `source` into tokens, terminated by a single EOF token.
///
/// `file` names the source in positions and defaults to `"shell"`. The first
/// character no pattern accepts fails the whole scan, as does a source longer
/// than [`MAX_SOURCE_LEN`] bytes.
pub fn tokenize(
    source: String,
    file: Option<String>,
    logger: Option<&dyn Logger>,
) -> Result<Vec<Token>, Error> {
    if let Some(logger) = logger {
        logger.info("Tokenizing input string");
    }

    let mut lex = Lexer::new(source, file);
    check_source_len(lex.source.len()).map_err(|error| Error::new(error, lex.position()))?;

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => {
                let character = lex.remainder().chars().next().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter { character },
                    lex.position(),
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
