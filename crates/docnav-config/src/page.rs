//! Site-wide page settings: extra `<head>` tags and markdown rendering
//! options.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// Extra tag injected into every page's `<head>`.
///
/// ```toml
/// [[head]]
/// tag = "link"
/// attrs = { rel = "icon", href = "/favicon.ico" }
/// ```
///
/// Serializes in the host's `[tag, attrs]` / `[tag, attrs, content]` form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadTag {
    /// Element name (e.g., "link", "meta", "script").
    pub tag: String,
    /// Element attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Inner content, for elements such as `script` or `style`.
    #[serde(default)]
    pub content: Option<String>,
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&self.attrs)?;
        if let Some(content) = &self.content {
            seq.serialize_element(content)?;
        }
        seq.end()
    }
}

/// `[markdown]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct MarkdownConfig {
    /// Show line numbers in fenced code blocks.
    pub line_numbers: bool,
}
