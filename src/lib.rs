#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, tagged with the source name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text (including its newline, if any)
/// and the column of `position` within that line, counted in characters.
/// Offsets at or past the end of the source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = line[..pos - start].chars().count();
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    // End of input: either a fresh empty line or the tail of the last one
    if source.is_empty() || source.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    let last = source.rsplit('\n').next().unwrap_or_default();
    (line_number - 1, last.to_string(), last.chars().count())
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnexpectedCharacter (Unexpected character: @)
/// -> shell
///   |
/// 1 | 2 + @ * 4;
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", position.1));
    output.push_str(&format!("{:>padding$}\n", "|"));

    // The caret counts characters, so each tab is printed as a single space
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let line_text_removed = line_text_removed.trim_end().replace('\t', " ");
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    output
}

/// Strips leading whitespace of any kind, returning how many characters went.
fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start();
    let removed = string[..string.len() - trimmed.len()].chars().count();

    (String::from(trimmed), removed)
}
