//! Colored terminal output for status messages.
//!
//! Everything here goes to stderr; stdout is reserved for sidebar JSON.

use console::{Style, Term};

/// Width of the summary rule and label column.
const RULE_WIDTH: usize = 60;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    heading: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            heading: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.red.apply_to(msg).to_string());
    }

    /// Print a section heading followed by a rule.
    pub(crate) fn heading(&self, msg: &str) {
        self.line(&self.heading.apply_to(msg).to_string());
        self.line(&"=".repeat(RULE_WIDTH));
    }

    /// Print one sidebar group with its item count.
    pub(crate) fn group(&self, label: &str, count: usize) {
        let count = count.to_string();
        let label = pad_label(label, &count);
        self.line(&format!("{label} {}", self.dim.apply_to(count)));
    }

    /// Print a closing rule and totals.
    pub(crate) fn totals(&self, groups: usize, items: usize) {
        self.line(&"-".repeat(RULE_WIDTH));
        self.line(&format!("{groups} groups, {items} items"));
    }
}

/// Pad `label` so that `label count` fills the rule width.
fn pad_label(label: &str, count: &str) -> String {
    let width = RULE_WIDTH.saturating_sub(count.len() + 1);
    format!("{label:<width$}")
}
