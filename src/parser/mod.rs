//! Parser module — comment/signature association plus structured parsing.

pub mod associate;
pub mod comment;

use crate::model::DocRecord;

/// Parse the full text of one source file into documentation records.
///
/// Each block comment with a resolvable trailing declaration yields one
/// record; comments with no terminated declaration before end-of-file are
/// dropped. Record order matches first appearance in the file.
pub fn parse_source(content: &str) -> Vec<DocRecord> {
    associate::comment_signature_pairs(content)
        .into_iter()
        .map(|(comment, signature)| {
            let mut record = comment::parse(comment);
            record.signature = signature;
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_documented_function() {
        let input = r#"/*
 * Function: add
 * Adds two integers.
 * a: first operand
 * b: second operand
 * Returns: the sum
 */
int add(int a, int b);
"#;
        let records = parse_source(input);
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.function, "add");
        assert_eq!(rec.description, "Adds two integers.");
        assert_eq!(rec.params, vec!["a: first operand", "b: second operand"]);
        assert_eq!(rec.returns, "the sum");
        assert_eq!(rec.signature, "int add(int a, int b);");
    }

    #[test]
    fn parse_multiple_comments_in_order() {
        let input = "/* Function: first */\nvoid first(void);\n\n/* Function: second */\nvoid second(void);\n";
        let records = parse_source(input);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].function, "first");
        assert_eq!(records[1].function, "second");
    }

    #[test]
    fn unterminated_comment_yields_nothing() {
        let records = parse_source("/* Function: lost\nint lost(void);\n");
        assert!(records.is_empty());
    }

    #[test]
    fn plain_code_yields_nothing() {
        let records = parse_source("int main(void) { return 0; }\n");
        assert!(records.is_empty());
    }
}
