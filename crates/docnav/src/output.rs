//! Colored terminal output for command progress and descriptor findings.
//!
//! Everything goes to stderr so that `docnav export` can stream its payload
//! on stdout.

use console::{Style, Term};
use docnav_descriptor::{Severity, ValidationIssue};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Print a descriptor finding, with the severity colored and the
    /// location highlighted.
    pub(crate) fn issue(&self, issue: &ValidationIssue) {
        let _ = self.term.write_line(&self.format_issue(issue));
    }

    fn format_issue(&self, issue: &ValidationIssue) -> String {
        let style = match issue.severity {
            Severity::Warning => &self.yellow,
            Severity::Error => &self.red,
        };
        format!(
            "{}: {}: {}",
            style.apply_to(issue.severity),
            self.cyan_bold.apply_to(&issue.location),
            issue.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_descriptor::IssueKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_issue_plain_text_matches_display() {
        let issue = ValidationIssue {
            kind: IssueKind::DuplicateLink,
            severity: Severity::Error,
            location: "nav[1]".to_owned(),
            message: "link /a already used at nav[0]".to_owned(),
        };

        let formatted = Output::new().format_issue(&issue);

        assert_eq!(console::strip_ansi_codes(&formatted), issue.to_string());
    }
}
