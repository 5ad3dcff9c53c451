#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source buffer, plus the file it came from.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line's text and the offset
/// within the line. An offset at the very end of the buffer maps to one
/// past the end of the last line, so errors detected at EOF still
/// render.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, "", 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line, pos.saturating_sub(start));
        start = end;
        line_number += 1;
    }

    (last.0, last.1.to_string(), last.2)
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: name (message)
        -> prog.c
           |
        20 | a = #;
           | ----^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond line\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 35);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_position_at_eof() {
        let source = "main(){ return 1";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 16);
        assert_eq!(line_number, 1);
        assert_eq!(line, "main(){ return 1");
        assert_eq!(line_pos, 16);
    }
}
