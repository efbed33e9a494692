//! Data model for parsed documentation — format-agnostic.

/// A single documented function, parsed from one block comment and the
/// declaration lines that follow it.
///
/// Fields use empty strings for "not present"; `params` entries are the raw
/// `name: description` strings in first-appearance order, duplicates kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocRecord {
    /// Name from a `Function:` header line, empty if the comment has none.
    pub function: String,
    /// Free text accumulated before any recognized section header.
    pub description: String,
    /// `name: description` entries; descriptions may span multiple lines.
    pub params: Vec<String>,
    /// Text from the last `Returns:` header plus its continuation lines.
    pub returns: String,
    /// Declaration text following the comment, attached after parsing.
    pub signature: String,
}
