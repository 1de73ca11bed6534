//! # Recoder Core
//!
//! Core implementation of the recoder line-rewriting engine, including:
//! - Language profile definitions and source validation
//! - Ordered substitution rule sets for each supported profile pair
//! - The `translate` entry point producing rewritten text plus diagnostics
//!
//! This crate provides the foundational components that can be used to build
//! various recoder interfaces (REPL, batch CLI, embedded rewriting, etc.)

#![warn(clippy::all)]

pub mod diagnostics;
pub mod profile;
pub mod rewriter;

mod rules;
mod validator;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, RewriteResult};
pub use profile::Profile;
pub use rewriter::translate;

/// Recoder version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for recoder core components
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recoder_core=info".parse().unwrap()),
        )
        .init();
}

/// Error types for recoder core operations
#[derive(thiserror::Error, Debug)]
pub enum RewriteError {
    /// The source text was empty or contained only whitespace
    #[error("El código es nulo o está vacío.")]
    EmptyInput,
}

/// Result type for recoder core operations
pub type Result<T> = std::result::Result<T, RewriteError>;
