//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while tokenizing and parsing:
//!
//! - A positioned error structure shared by both stages
//! - Lexical and syntax error variants with their exact messages
//! - Error names and tips for diagnostic rendering

pub mod errors;
