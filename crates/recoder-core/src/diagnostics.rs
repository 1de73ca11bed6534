//! Line-attributed diagnostics and the rewrite result envelope
//!
//! Diagnostics are plain data. The engine returns them as values in emission
//! order and never aborts a run because of them; only empty input is fatal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single line-attributed finding: a validation failure, a dropped line or
/// an unsupported conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-indexed source line the finding refers to
    pub line: usize,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic for the given line
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linea {}: {}", self.line, self.message)
    }
}

/// Outcome of a translation: the rewritten text plus any diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResult {
    /// Rewritten source; empty when validation rejected the input
    pub rewritten: String,
    /// Findings in emission order
    pub diagnostics: Vec<Diagnostic>,
}

impl RewriteResult {
    /// True when the translation produced no diagnostics
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(3, "Se encontró la palabra 'error' en la línea.");
        assert_eq!(
            diagnostic.to_string(),
            "Linea 3: Se encontró la palabra 'error' en la línea."
        );
    }

    #[test]
    fn test_result_cleanliness() {
        let clean = RewriteResult {
            rewritten: "console.log(1);".to_string(),
            diagnostics: vec![],
        };
        assert!(clean.is_clean());

        let flagged = RewriteResult {
            rewritten: String::new(),
            diagnostics: vec![Diagnostic::new(1, "mensaje")],
        };
        assert!(!flagged.is_clean());
    }

    #[test]
    fn test_diagnostic_serializes_line_and_message() {
        let diagnostic = Diagnostic::new(2, "mensaje");
        let json = serde_json::to_string(&diagnostic).unwrap();
        assert_eq!(json, r#"{"line":2,"message":"mensaje"}"#);

        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diagnostic);
    }
}
