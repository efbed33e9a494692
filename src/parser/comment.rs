//! Comment parser — line-by-line state machine.
//!
//! Turns one block comment into a [`DocRecord`], recognizing three section
//! headers on each stripped line, in priority order:
//!
//! - `Function:` — names the function, section stays `Description`
//! - `Returns:` — switches to `Returns`, last occurrence wins
//! - bare `word:` — starts a parameter entry
//!
//! Any other non-blank line continues the current section. The bare-word
//! rule is intentionally greedy: prose like `Note: this is important` starts
//! a parameter named `Note`.

use crate::model::DocRecord;
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+:").unwrap());

/// Section the parser is currently accumulating into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Description,
    Params,
    Returns,
}

/// Parse one block comment (delimiters included) into a record.
///
/// The returned record has `signature` left empty; the caller attaches it.
/// Pure function of its input — re-parsing yields an identical record.
pub fn parse(block: &str) -> DocRecord {
    let body = block.trim();
    let body = body.strip_prefix("/*").unwrap_or(body);
    let body = body.strip_suffix("*/").unwrap_or(body);
    let lines: Vec<&str> = body.trim().lines().collect();

    let mut record = DocRecord::default();
    let mut section = Section::Description;

    let mut i = 0;
    while i < lines.len() {
        let line = strip_line_prefix(lines[i]);
        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("Function:") {
            record.function = rest.trim().to_string();
            section = Section::Description;
        } else if let Some(rest) = line.strip_prefix("Returns:") {
            // Assignment, not append: a repeated Returns: header overwrites.
            section = Section::Returns;
            record.returns = rest.trim().to_string();
        } else if RE_PARAM_START.is_match(line) {
            section = Section::Params;
            let mut entry = line.trim().to_string();
            i += 1;
            // Consume continuation lines until the next header, which is
            // left unconsumed for the outer loop.
            while i < lines.len() {
                let next = strip_line_prefix(lines[i]);
                if next.trim().is_empty() {
                    i += 1;
                    continue;
                }
                if RE_PARAM_START.is_match(next) || next.starts_with("Returns:") {
                    break;
                }
                concat_word(&mut entry, next.trim());
                i += 1;
            }
            record.params.push(entry.trim().to_string());
            continue;
        } else {
            match section {
                Section::Description => concat_word(&mut record.description, line.trim()),
                Section::Returns => concat_word(&mut record.returns, line.trim()),
                Section::Params => {
                    // Dropped when no parameter has been started yet.
                    if let Some(last) = record.params.last_mut() {
                        concat_word(last, line.trim());
                    }
                }
            }
        }

        i += 1;
    }

    record.description = record.description.trim().to_string();
    record.returns = record.returns.trim().to_string();
    record
}

/// Strip the conventional comment-line prefix: leading spaces, asterisks,
/// and tabs.
fn strip_line_prefix(line: &str) -> &str {
    line.trim_start_matches([' ', '*', '\t'])
}

/// Append with a single-space separator.
fn concat_word(dest: &mut String, text: &str) {
    if !dest.is_empty() {
        dest.push(' ');
    }
    dest.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(body: &str) -> DocRecord {
        parse(&format!("/*\n{}\n*/", body))
    }

    #[test]
    fn full_convention() {
        let rec = parse(
            "/*\n * Function: add\n * Adds two integers.\n * a: first operand\n * b: second operand\n * Returns: the sum\n */",
        );
        assert_eq!(rec.function, "add");
        assert_eq!(rec.description, "Adds two integers.");
        assert_eq!(rec.params, vec!["a: first operand", "b: second operand"]);
        assert_eq!(rec.returns, "the sum");
        assert_eq!(rec.signature, "");
    }

    #[test]
    fn empty_comment() {
        let rec = parse("/* */");
        assert_eq!(rec, DocRecord::default());
    }

    #[test]
    fn bare_description() {
        let rec = parse_body(" * Frees the buffer.");
        assert_eq!(rec.function, "");
        assert_eq!(rec.description, "Frees the buffer.");
        assert!(rec.params.is_empty());
        assert_eq!(rec.returns, "");
    }

    #[test]
    fn description_lines_joined_with_single_spaces() {
        let rec = parse_body(" * Allocates a buffer\n * of the given size\n * and zeroes it.");
        assert_eq!(rec.description, "Allocates a buffer of the given size and zeroes it.");
    }

    #[test]
    fn blank_lines_do_not_change_section() {
        let rec = parse_body(" * First half.\n *\n * Second half.");
        assert_eq!(rec.description, "First half. Second half.");
    }

    #[test]
    fn param_accumulates_continuation_lines() {
        let rec = parse_body("alpha: first line\nmore text\nbeta: second\nReturns: done");
        assert_eq!(rec.params, vec!["alpha: first line more text", "beta: second"]);
        assert_eq!(rec.returns, "done");
    }

    #[test]
    fn param_order_and_duplicates_preserved() {
        let rec = parse_body("x: one\ny: two\nx: three");
        assert_eq!(rec.params, vec!["x: one", "y: two", "x: three"]);
    }

    #[test]
    fn returns_last_wins() {
        let rec = parse_body("Returns: first value\nReturns: second value\nwith continuation");
        assert_eq!(rec.returns, "second value with continuation");
    }

    #[test]
    fn function_header_does_not_reset_description() {
        let rec = parse_body("Some intro text.\nFunction: late\nMore description.");
        assert_eq!(rec.function, "late");
        assert_eq!(rec.description, "Some intro text. More description.");
    }

    #[test]
    fn prose_colon_starts_parameter() {
        // The bare-word-colon rule is greedy on purpose.
        let rec = parse_body("Note: this is important");
        assert_eq!(rec.description, "");
        assert_eq!(rec.params, vec!["Note: this is important"]);
    }

    #[test]
    fn function_header_ends_parameter_scan() {
        let rec = parse_body("a: operand\nFunction: add");
        assert_eq!(rec.params, vec!["a: operand"]);
        assert_eq!(rec.function, "add");
    }

    #[test]
    fn returns_continuation_after_params() {
        let rec = parse_body("a: operand\nReturns: a count\nof matching entries");
        assert_eq!(rec.params, vec!["a: operand"]);
        assert_eq!(rec.returns, "a count of matching entries");
    }

    #[test]
    fn blank_lines_inside_parameter_skipped() {
        let rec = parse_body("a: starts here\n *\ncontinues here\nb: next");
        assert_eq!(rec.params, vec!["a: starts here continues here", "b: next"]);
    }

    #[test]
    fn function_with_empty_remainder() {
        let rec = parse_body("Function:");
        assert_eq!(rec.function, "");
        assert_eq!(rec.description, "");
    }

    #[test]
    fn word_with_space_before_colon_is_not_a_parameter() {
        let rec = parse_body("not a param : just prose");
        assert!(rec.params.is_empty());
        assert_eq!(rec.description, "not a param : just prose");
    }

    #[test]
    fn reparsing_is_idempotent() {
        let block = "/*\n * Function: add\n * Adds.\n * a: operand\n * Returns: sum\n */";
        assert_eq!(parse(block), parse(block));
    }
}
