//! Descriptor validation.
//!
//! [`validate`] never fails; it returns every finding as a
//! [`ValidationIssue`] so callers can decide what blocks a build. Checks:
//!
//! - labels are non-empty
//! - every link is a site-relative path (`/...`, optional `#fragment` or `?query`)
//! - no link value appears twice across `nav` and the whole sidebar
//! - groups have items and leaf items have links
//! - sidebar prefixes are non-empty and do not collide after normalization
//!
//! Nested prefixes (`/a/` and `/a/b/`) are reported as warnings: longest
//! prefix match makes them well defined, but the override should be
//! intentional.

use std::collections::HashMap;
use std::fmt;

use crate::model::{NavDescriptor, SidebarItem};
use crate::sidebar::normalize_prefix;

/// How serious a finding is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Category of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// The same link appears more than once.
    DuplicateLink,
    /// Two sidebar prefixes collide or nest.
    AmbiguousPrefix,
    /// Link is not a site-relative path.
    InvalidLink,
    /// Sidebar key is empty.
    InvalidPrefix,
    /// Label is empty.
    EmptyText,
    /// Group or sub-heading without items.
    EmptyGroup,
    /// Leaf sidebar item without a link.
    MissingLink,
    /// Link has no matching document in the content tree.
    MissingDocument,
}

/// Single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    /// Where in the descriptor the finding applies (e.g., `nav[2]`).
    pub location: String,
    pub message: String,
}

impl ValidationIssue {
    pub(crate) fn error(kind: IssueKind, location: impl Into<String>, message: String) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            location: location.into(),
            message,
        }
    }

    pub(crate) fn warning(kind: IssueKind, location: impl Into<String>, message: String) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            location: location.into(),
            message,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// Summary helpers over a list of findings.
pub trait ValidationReport {
    /// Number of findings with the given severity.
    fn count(&self, severity: Severity) -> usize;

    fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }
}

impl ValidationReport for [ValidationIssue] {
    fn count(&self, severity: Severity) -> usize {
        self.iter().filter(|i| i.severity == severity).count()
    }
}

/// Check a descriptor and return every finding, errors and warnings mixed,
/// in descriptor order.
#[must_use]
pub fn validate(descriptor: &NavDescriptor) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (i, entry) in descriptor.nav.iter().enumerate() {
        require_text(&entry.text, &format!("nav[{i}]"), &mut issues);
    }

    for (prefix, section) in descriptor.sidebar.iter() {
        if prefix.is_empty() {
            issues.push(ValidationIssue::error(
                IssueKind::InvalidPrefix,
                "sidebar",
                "sidebar prefix cannot be empty".to_owned(),
            ));
        }
        for (g, group) in section.groups().iter().enumerate() {
            let location = format!("sidebar[{prefix:?}][{g}]");
            require_text(&group.text, &location, &mut issues);
            if group.items.is_empty() {
                issues.push(ValidationIssue::error(
                    IssueKind::EmptyGroup,
                    location.clone(),
                    format!("group '{}' has no items", group.text),
                ));
            }
            check_items(&group.items, &location, &mut issues);
        }
    }

    check_links(descriptor, &mut issues);
    check_prefixes(descriptor, &mut issues);

    tracing::debug!(issues = issues.len(), "Validated navigation descriptor");
    issues
}

fn require_text(text: &str, location: &str, issues: &mut Vec<ValidationIssue>) {
    if text.trim().is_empty() {
        issues.push(ValidationIssue::error(
            IssueKind::EmptyText,
            location,
            "text cannot be empty".to_owned(),
        ));
    }
}

fn check_items(items: &[SidebarItem], base: &str, issues: &mut Vec<ValidationIssue>) {
    for (i, item) in items.iter().enumerate() {
        let location = format!("{base}.items[{i}]");
        require_text(&item.text, &location, issues);
        if item.is_leaf() && item.link.is_none() {
            issues.push(ValidationIssue::error(
                IssueKind::MissingLink,
                location.clone(),
                format!("item '{}' has neither a link nor nested items", item.text),
            ));
        }
        check_items(&item.items, &location, issues);
    }
}

fn check_links(descriptor: &NavDescriptor, issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashMap<&str, String> = HashMap::new();

    for link_ref in descriptor.links() {
        if let Err(reason) = check_link_syntax(link_ref.link) {
            issues.push(ValidationIssue::error(
                IssueKind::InvalidLink,
                link_ref.location.clone(),
                format!("link '{}' {reason}", link_ref.link),
            ));
        }

        if let Some(first) = seen.get(link_ref.link) {
            issues.push(ValidationIssue::error(
                IssueKind::DuplicateLink,
                link_ref.location,
                format!("link '{}' already used at {first}", link_ref.link),
            ));
        } else {
            seen.insert(link_ref.link, link_ref.location);
        }
    }
}

/// Check that a link is a site-relative path.
fn check_link_syntax(link: &str) -> Result<(), &'static str> {
    if link.is_empty() {
        return Err("cannot be empty");
    }
    if !link.starts_with('/') {
        return Err("must start with '/'");
    }
    if link.starts_with("//") {
        return Err("must not be protocol-relative");
    }
    if link.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    if link.contains('\\') {
        return Err("must not contain backslashes");
    }

    let path = link.split(['#', '?']).next().unwrap_or_default();
    if path.split('/').any(|segment| segment == "..") {
        return Err("must not contain '..' segments");
    }

    Ok(())
}

fn check_prefixes(descriptor: &NavDescriptor, issues: &mut Vec<ValidationIssue>) {
    let prefixes: Vec<(&str, String)> = descriptor
        .sidebar
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, _)| (key, normalize_prefix(key).into_owned()))
        .collect();

    for (i, (key_a, norm_a)) in prefixes.iter().enumerate() {
        for (key_b, norm_b) in &prefixes[i + 1..] {
            if norm_a == norm_b {
                issues.push(ValidationIssue::error(
                    IssueKind::AmbiguousPrefix,
                    format!("sidebar[{key_b:?}]"),
                    format!("prefix {key_b:?} is the same route prefix as {key_a:?}"),
                ));
            } else if let Some((outer, inner)) = nesting(key_a, norm_a, key_b, norm_b) {
                issues.push(ValidationIssue::warning(
                    IssueKind::AmbiguousPrefix,
                    format!("sidebar[{inner:?}]"),
                    format!("prefix {inner:?} overrides {outer:?} for routes under it"),
                ));
            }
        }
    }
}

/// Return `(outer, inner)` when one normalized prefix strictly contains the other.
fn nesting<'a>(
    key_a: &'a str,
    norm_a: &str,
    key_b: &'a str,
    norm_b: &str,
) -> Option<(&'a str, &'a str)> {
    if norm_b.starts_with(norm_a) {
        Some((key_a, key_b))
    } else if norm_a.starts_with(norm_b) {
        Some((key_b, key_a))
    } else {
        None
    }
}
