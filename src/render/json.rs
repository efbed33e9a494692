//! JSON renderer — structured output for tooling integration.

use crate::model::DocRecord;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, records: &[DocRecord]) -> String {
        let mut out = String::new();
        out.push_str("{\n  \"records\": [\n");
        for (i, record) in records.iter().enumerate() {
            out.push_str(&render_record(record));
            if i < records.len() - 1 {
                out.push_str(",\n");
            } else {
                out.push('\n');
            }
        }
        out.push_str("  ]\n}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_record(record: &DocRecord) -> String {
    let mut out = String::new();
    out.push_str("    {\n");
    out.push_str(&format!(
        "      \"function\": \"{}\",\n",
        json_escape(&record.function)
    ));
    out.push_str(&format!(
        "      \"signature\": \"{}\",\n",
        json_escape(&record.signature)
    ));
    out.push_str(&format!(
        "      \"description\": \"{}\",\n",
        json_escape(&record.description)
    ));
    out.push_str("      \"params\": [");
    if !record.params.is_empty() {
        out.push('\n');
        for (i, param) in record.params.iter().enumerate() {
            let comma = if i < record.params.len() - 1 { "," } else { "" };
            out.push_str(&format!("        \"{}\"{}\n", json_escape(param), comma));
        }
        out.push_str("      ");
    }
    out.push_str("],\n");
    out.push_str(&format!(
        "      \"returns\": \"{}\"\n",
        json_escape(&record.returns)
    ));
    out.push_str("    }");
    out
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
