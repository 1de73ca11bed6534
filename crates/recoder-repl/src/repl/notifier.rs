//! Output notification system for the REPL
//!
//! Provides a trait-based system for handling shell output, allowing
//! different output backends (console, tests, files) to be plugged in.

use recoder_core::Diagnostic;

/// Trait for handling REPL output notifications
pub trait ReplNotifier: Send + Sync {
    /// Handle regular output
    fn on_output(&self, content: &str);

    /// Handle error output
    fn on_error(&self, content: &str);

    /// Handle a clean rewrite result
    fn on_rewrite(&self, rewritten: &str);

    /// Handle the findings of a rejected rewrite
    fn on_diagnostics(&self, diagnostics: &[Diagnostic]);
}

/// Default console-based notifier
pub struct DefaultNotifier;

impl DefaultNotifier {
    /// Create a new default notifier
    pub fn new() -> Self {
        Self
    }
}

impl ReplNotifier for DefaultNotifier {
    fn on_output(&self, content: &str) {
        if !content.is_empty() {
            println!("{}", content);
        }
    }

    fn on_error(&self, content: &str) {
        eprintln!("{}", content);
    }

    fn on_rewrite(&self, rewritten: &str) {
        println!("--- Código Traducido ---");
        println!("{}", rewritten);
    }

    fn on_diagnostics(&self, diagnostics: &[Diagnostic]) {
        eprintln!("Linea | Error");
        for diagnostic in diagnostics {
            eprintln!("{:>5} | {}", diagnostic.line, diagnostic.message);
        }
    }
}

impl Default for DefaultNotifier {
    fn default() -> Self {
        Self::new()
    }
}
