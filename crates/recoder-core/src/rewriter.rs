//! Per-line rewriting policy and the `translate` entry point
//!
//! The engine runs two stages: profile validation over the whole text, then
//! an independent rewrite of every line. Lines never see each other, and
//! diagnostics come back in emission order next to the rewritten text. The
//! only fatal condition is empty input.

use tracing::debug;

use crate::diagnostics::{Diagnostic, RewriteResult};
use crate::profile::Profile;
use crate::{rules, validator, Result, RewriteError};

/// Literal token that poisons a line: the line is dropped and flagged
const SENTINEL: &str = "error";

/// Outcome of rewriting a single line
#[derive(Debug)]
enum LineResult {
    /// Line belongs in the output, possibly transformed
    Emit(String),
    /// Line belongs in the output verbatim, with a finding attached
    EmitFlagged(String, Diagnostic),
    /// Line is excluded from the output entirely
    Drop(Diagnostic),
}

/// Rewrite one line for the given profile pair.
///
/// Policy order: sentinel check, identity pass-through, rule-set dispatch,
/// unsupported-pair fallback. The sentinel wins even over identity pairs.
fn rewrite_line(line: &str, source: &Profile, target: &Profile, number: usize) -> LineResult {
    if line.contains(SENTINEL) {
        return LineResult::Drop(Diagnostic::new(
            number,
            "Se encontró la palabra 'error' en la línea.",
        ));
    }
    if source == target {
        return LineResult::Emit(line.to_string());
    }
    match rules::steps_for(source, target) {
        Some(steps) => LineResult::Emit(rules::apply(line, steps)),
        None => LineResult::EmitFlagged(
            line.to_string(),
            Diagnostic::new(
                number,
                format!("Conversión de {source} a {target} no soportada."),
            ),
        ),
    }
}

/// Translate `code` from `source` to `target`, line by line.
///
/// Validation failures short-circuit with empty output. Line-level findings
/// (sentinel drops, unsupported pairs) accumulate without aborting the
/// remaining lines. Dropped lines still advance the line numbering seen by
/// later diagnostics.
///
/// # Errors
///
/// Returns [`RewriteError::EmptyInput`] when `code` is empty or contains
/// only whitespace.
pub fn translate(code: &str, source: &Profile, target: &Profile) -> Result<RewriteResult> {
    if code.trim().is_empty() {
        return Err(RewriteError::EmptyInput);
    }

    debug!("translating {} bytes from {} to {}", code.len(), source, target);

    if let Some(diagnostic) = validator::validate(code, source) {
        return Ok(RewriteResult {
            rewritten: String::new(),
            diagnostics: vec![diagnostic],
        });
    }

    let mut rewritten = Vec::new();
    let mut diagnostics = Vec::new();
    for (index, line) in code.split('\n').enumerate() {
        match rewrite_line(line, source, target, index + 1) {
            LineResult::Emit(text) => rewritten.push(text),
            LineResult::EmitFlagged(text, diagnostic) => {
                rewritten.push(text);
                diagnostics.push(diagnostic);
            }
            LineResult::Drop(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    Ok(RewriteResult {
        rewritten: rewritten.join("\n"),
        diagnostics,
    })
}
