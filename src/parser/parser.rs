//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser tokenizes its source eagerly on construction, then walks the
//! tokens with NUD/LED handlers for expressions and dedicated functions for
//! statements.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    logger::logger::{Logger, NoopLogger},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream of one source and the lookup tables for
/// parsing statements and expressions. It tracks the current position in the
/// token stream and provides methods for token consumption.
pub struct Parser {
    /// The tokens of the source, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Number of groupings currently open
    depth: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser for `source`, tokenizing it immediately.
    ///
    /// # Arguments
    ///
    /// * `source` - The source text
    /// * `logger` - Receives construction milestones; defaults to a no-op logger
    ///
    /// # Returns
    ///
    /// The parser, or the lexical failure re-wrapped as a `Lexer error: ...` syntax error.
    pub fn new(source: &str, logger: Option<Rc<dyn Logger>>) -> Result<Self, Error> {
        Parser::new_with_file(source, None, logger)
    }

    /// Like [`Parser::new`], naming the source for positions and diagnostics.
    /// The name defaults to `"shell"`.
    pub fn new_with_file(
        source: &str,
        file: Option<String>,
        logger: Option<Rc<dyn Logger>>,
    ) -> Result<Self, Error> {
        let logger: Rc<dyn Logger> = match logger {
            Some(logger) => logger,
            None => Rc::new(NoopLogger),
        };

        logger.info("Initializing parser");

        let tokens = tokenize(source.to_string(), file, Some(&*logger))
            .map_err(Error::into_lexer_error)?;

        // The EOF token always exists and carries the source name
        let file = tokens
            .last()
            .map(|token| Rc::clone(&token.span.end.1))
            .unwrap_or_else(|| Position::null().1);

        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        logger.info("Parser initialized");

        Ok(parser)
    }

    /// Parses every statement up to EOF into a [`Program`].
    ///
    /// Parsing starts over from the first token on every call, so repeated calls
    /// return equal trees. The first grammar violation aborts the parse.
    pub fn parse(&mut self) -> Result<Program, Error> {
        self.pos = 0;
        self.depth = 0;

        let mut body = vec![];

        while self.has_tokens() {
            body.push(parse_stmt(self)?);
        }

        log::debug!("parsed {} statement(s) from {}", body.len(), self.file);

        Ok(Program {
            body,
            span: Span {
                start: Position(0, Rc::clone(&self.file)),
                end: self.current_token().span.end.clone(),
            },
        })
    }

    pub fn get_tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        // Never runs past EOF, which is always the last token
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    /// The cursor stays put on EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind, failing with `error` otherwise.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an Error
    /// positioned at the current token.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: ErrorImpl) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(Error::new(error, self.get_position()))
        } else {
            Ok(self.advance())
        }
    }

    /// Opens a grouping, failing at `position` once more than
    /// [`MAX_NESTING_DEPTH`] are open at once.
    pub fn enter_group(&mut self, position: Position) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup.insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup.insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Tokenizes and parses `source` in one call.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Optional name of the source, defaulting to `"shell"`
pub fn parse(source: &str, file: Option<String>) -> Result<Program, Error> {
    Parser::new_with_file(source, file, None)?.parse()
}
