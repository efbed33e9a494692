//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::DocRecord;
use anyhow::{anyhow, Result};

/// Heading text used when a comment carries no `Function:` header.
pub const UNNAMED: &str = "Unnamed Function";

/// Trait for rendering the collected records into one output document.
pub trait Renderer {
    fn render(&self, records: &[DocRecord]) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use html, markdown, or json",
            format
        )),
    }
}

/// Display name for a record: the function name or the unnamed placeholder.
pub fn display_name(record: &DocRecord) -> &str {
    if record.function.is_empty() {
        UNNAMED
    } else {
        &record.function
    }
}

/// Split a parameter entry on its first colon into (name, description).
///
/// The split is lossy when the accumulated description itself contains an
/// early colon; that is the documented behavior.
pub fn split_param(param: &str) -> Option<(&str, &str)> {
    param
        .split_once(':')
        .map(|(name, desc)| (name.trim(), desc.trim()))
}
