//! HTML renderer — standalone page with a navigation index.

use crate::model::DocRecord;
use crate::render::{display_name, split_param, Renderer};
use crate::toc;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, records: &[DocRecord]) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<title>Function Documentation</title>\n");
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("h1 { text-align: center; }\n");
        out.push_str(".function { margin-bottom: 3em; }\n");
        out.push_str(".signature { font-family: monospace; background: #f4f4f4; padding: 1em; border-left: 4px solid #ccc; border-radius: 3px; overflow-x: auto; white-space: pre; }\n");
        out.push_str("ul { margin-left: 1em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str("<h1>Function Documentation</h1>\n");

        // Navigation index
        if !records.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for record in records {
                let name = display_name(record);
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&toc::anchor_slug(name)),
                    html_escape(name)
                ));
            }
            out.push_str("</ul>\n");
        }

        for record in records {
            out.push_str(&render_record(record));
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_record(record: &DocRecord) -> String {
    let mut out = String::new();
    let name = display_name(record);

    out.push_str("<div class=\"function\">\n");
    out.push_str(&format!(
        "<h2 id=\"{}\">{}</h2>\n",
        html_escape(&toc::anchor_slug(name)),
        html_escape(name)
    ));
    out.push_str(&format!(
        "<pre class=\"signature\">{}</pre>\n",
        html_escape(&record.signature)
    ));

    if !record.description.is_empty() {
        out.push_str("<h3>Description</h3>\n");
        out.push_str(&format!("<p>{}</p>\n", html_escape(&record.description)));
    }

    if !record.params.is_empty() {
        out.push_str("<h3>Parameters</h3>\n<ul>\n");
        for param in &record.params {
            match split_param(param) {
                Some((pname, desc)) => out.push_str(&format!(
                    "  <li><strong>{}:</strong> {}</li>\n",
                    html_escape(pname),
                    html_escape(desc)
                )),
                None => out.push_str(&format!("  <li>{}</li>\n", html_escape(param.trim()))),
            }
        }
        out.push_str("</ul>\n");
    }

    if !record.returns.is_empty() {
        out.push_str("<h3>Returns</h3>\n");
        out.push_str(&format!("<p>{}</p>\n", html_escape(&record.returns)));
    }

    out.push_str("</div>\n");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
