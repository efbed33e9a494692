//! GitHub-flavored markdown renderer.

use crate::model::DocRecord;
use crate::render::{display_name, split_param, Renderer};
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, records: &[DocRecord]) -> String {
        let mut out = String::new();

        out.push_str("# Function Documentation\n\n");

        if !records.is_empty() {
            out.push_str("## Index\n\n");
            for record in records {
                out.push_str(&toc::render_toc_item(display_name(record)));
                out.push('\n');
            }
            out.push('\n');
        }

        for record in records {
            out.push_str(&render_record(record));
            out.push('\n');
        }

        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_record(record: &DocRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", display_name(record)));

    lines.push("```c".to_string());
    lines.push(record.signature.clone());
    lines.push("```".to_string());
    lines.push(String::new());

    if !record.description.is_empty() {
        lines.push(record.description.clone());
        lines.push(String::new());
    }

    if !record.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in &record.params {
            match split_param(param) {
                Some((name, desc)) => lines.push(format!("* **{}**: {}", name, desc)),
                None => lines.push(format!("* {}", param.trim())),
            }
        }
        lines.push(String::new());
    }

    if !record.returns.is_empty() {
        lines.push("#### Returns\n".to_string());
        lines.push(record.returns.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}
