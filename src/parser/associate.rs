//! Signature Associator — pairs each block comment with the declaration
//! lines that follow it.
//!
//! Comment spans are matched non-greedily from each `/*` to the nearest
//! `*/`, so nested comment markers are not supported. The trailing
//! declaration is resolved by scanning forward line by line until a line
//! containing `{` or `;` terminates it; a span that reaches end-of-file
//! without a terminator is dropped.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Scan file text for (comment, signature) pairs.
///
/// The comment text is borrowed from the input and includes its `/* */`
/// delimiters; the signature is the resolved declaration text.
pub fn comment_signature_pairs(content: &str) -> Vec<(&str, String)> {
    let mut pairs = Vec::new();
    for m in RE_BLOCK_COMMENT.find_iter(content) {
        if let Some(signature) = trailing_signature(&content[m.end()..]) {
            pairs.push((m.as_str(), signature));
        }
    }
    pairs
}

/// Resolve the declaration following a comment span.
///
/// Blank lines are skipped without being consumed. The first line holding a
/// `{` or `;` ends the scan: the earliest marker wins, a `{` is discarded
/// together with everything after it, a `;` is kept and the remainder of the
/// line discarded. Marker-free lines accumulate in full. Returns `None` when
/// end-of-input arrives before any marker.
fn trailing_signature(rest: &str) -> Option<String> {
    let mut lines: Vec<&str> = Vec::new();
    for line in rest.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match (line.find('{'), line.find(';')) {
            (Some(brace), semi) if semi.map_or(true, |s| brace < s) => {
                lines.push(line[..brace].trim_end());
                return Some(join_signature(&lines));
            }
            (_, Some(semi)) => {
                lines.push(&line[..=semi]);
                return Some(join_signature(&lines));
            }
            _ => lines.push(line),
        }
    }
    None
}

fn join_signature(lines: &[&str]) -> String {
    lines.join(" ").trim().to_string()
}
