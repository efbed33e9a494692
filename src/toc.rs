//! Heading anchor/slug generation for the navigation index.

/// Anchor slug for a function name, shared by the HTML and markdown
/// renderers so index links and headings agree.
///
/// Lowercase; characters that aren't alphanumeric, space, or hyphen are
/// stripped; spaces become hyphens.
pub fn anchor_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Markdown index entry linking to a function's heading.
pub fn render_toc_item(title: &str) -> String {
    format!("* [{}](#{})", title, anchor_slug(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(anchor_slug("add"), "add");
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(anchor_slug("Unnamed Function"), "unnamed-function");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(anchor_slug("buf_free"), "buffree");
        assert_eq!(anchor_slug("ns::open"), "nsopen");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("buf_free"), "* [buf_free](#buffree)");
    }
}
