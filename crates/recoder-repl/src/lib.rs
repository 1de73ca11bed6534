//! Recoder REPL - Interactive command-line interface for the recoder line
//! rewriter
//!
//! This crate provides the terminal shell around `recoder-core`, including
//! dot-command parsing, source-buffer collection, and result presentation.

pub mod repl;

// Re-export commonly used types for convenience
pub use repl::{DefaultNotifier, ReplCommand, ReplNotifier, Session};
