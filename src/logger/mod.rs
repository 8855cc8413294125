//! Logging capability injected into the parser.
//!
//! The front end never reaches for global logging state on its own: callers hand
//! a [`logger::Logger`] to the parser, or get a no-op one by default.

pub mod logger;
