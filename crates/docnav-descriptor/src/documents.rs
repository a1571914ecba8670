//! Link target checks against a markdown content tree.
//!
//! Maps site links to source documents the way the site host routes them:
//! `/guide/intro` → `guide/intro.md`, `/guide/` → `guide/index.md`,
//! `/` → `index.md`. A `.html` or `.md` suffix and any `#fragment` or
//! `?query` are ignored. A link without trailing slash also matches a
//! directory landing page (`/guide` → `guide/index.md`).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::model::NavDescriptor;
use crate::validate::{IssueKind, ValidationIssue};

const INDEX_FILE: &str = "index.md";

/// Source document path (relative to the content root) a link routes to.
#[must_use]
pub fn document_path(link: &str) -> PathBuf {
    let path = link.split(['#', '?']).next().unwrap_or_default();
    let path = path.trim_start_matches('/');

    if path.is_empty() || path.ends_with('/') {
        return PathBuf::from(format!("{path}{INDEX_FILE}"));
    }

    let stem = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);
    PathBuf::from(format!("{stem}.md"))
}

/// Directory landing page a link without trailing slash may also route to.
fn landing_page_path(link: &str) -> Option<PathBuf> {
    let path = link.split(['#', '?']).next().unwrap_or_default();
    let path = path.trim_start_matches('/');
    if path.is_empty() || path.ends_with('/') || path.ends_with(".html") || path.ends_with(".md") {
        return None;
    }
    Some(Path::new(path).join(INDEX_FILE))
}

/// Report links whose target document does not exist under `src_dir`.
///
/// Each distinct link is checked once. Missing documents are warnings: the
/// site host decides whether a dead link fails the build.
#[must_use]
pub fn check_documents(descriptor: &NavDescriptor, src_dir: &Path) -> Vec<ValidationIssue> {
    let mut checked = HashSet::new();
    let mut issues = Vec::new();

    for link_ref in descriptor.links() {
        if !checked.insert(link_ref.link) {
            continue;
        }
        // Malformed links are reported by `validate`
        if !link_ref.link.starts_with('/') {
            continue;
        }

        let primary = document_path(link_ref.link);
        if src_dir.join(&primary).is_file() {
            continue;
        }
        if landing_page_path(link_ref.link).is_some_and(|p| src_dir.join(p).is_file()) {
            continue;
        }

        tracing::debug!(link = link_ref.link, document = %primary.display(), "Document not found");
        issues.push(ValidationIssue::warning(
            IssueKind::MissingDocument,
            link_ref.location,
            format!(
                "link '{}' has no document at {}",
                link_ref.link,
                primary.display()
            ),
        ));
    }

    issues
}
