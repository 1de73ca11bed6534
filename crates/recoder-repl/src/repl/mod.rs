//! REPL functionality for the recoder line rewriter
//!
//! This module provides the interactive shell around the rewriting engine:
//! - Source-buffer collection with command history and editing
//! - Profile selection commands (.from, .to)
//! - Translation runs honoring the display contract of the original tool
//! - Output formatting and notifications

use anyhow::{anyhow, Result};
use recoder_core::{translate, Profile, RewriteResult};
use tracing::debug;

pub mod commands;
pub mod notifier;

pub use commands::ReplCommand;
pub use notifier::{DefaultNotifier, ReplNotifier};

/// Shown whenever a translation produced any diagnostics
pub const FAILURE_BANNER: &str =
    "El código fuente a traducir es incorrecto o no es el lenguaje que se espera.";

/// Shown when a run is requested with nothing in the buffer
pub const EMPTY_BUFFER_PROMPT: &str = "Por favor ingresa el código fuente.";

/// Interactive session around the rewriting engine
pub struct Session {
    /// Current source profile
    source: Profile,
    /// Current target profile
    target: Profile,
    /// Collected source lines awaiting a run
    buffer: Vec<String>,
    /// Current notifier for output
    notifier: Box<dyn ReplNotifier>,
    /// Whether the REPL is running
    running: bool,
    /// Debug mode
    debug: bool,
}

impl Session {
    /// Create a new session with the default Java -> JS profile pair
    pub fn new() -> Self {
        Self::with_profiles(Profile::Java, Profile::Js)
    }

    /// Create a new session with the given profile pair
    pub fn with_profiles(source: Profile, target: Profile) -> Self {
        Self {
            source,
            target,
            buffer: Vec::new(),
            notifier: Box::new(DefaultNotifier::new()),
            running: true,
            debug: false,
        }
    }

    /// Set the notifier for this session
    pub fn set_notifier(&mut self, notifier: Box<dyn ReplNotifier>) {
        self.notifier = notifier;
    }

    /// Get a reference to the current notifier
    pub fn notifier(&self) -> &dyn ReplNotifier {
        self.notifier.as_ref()
    }

    /// Check if the REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Set debug mode
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Append one line of source text to the buffer
    pub fn push_line(&mut self, line: &str) {
        self.buffer.push(line.to_string());
    }

    /// Check whether the buffer holds any collected lines
    pub fn is_collecting(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Discard the collected buffer
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Prompt reflecting the collection state
    pub fn prompt(&self) -> &'static str {
        if self.buffer.is_empty() {
            ">> "
        } else {
            "   "
        }
    }

    /// Parse REPL input into a command
    pub fn parse_input(&self, input: &str) -> Result<ReplCommand> {
        commands::parse_command(input)
    }

    /// Handle a REPL command
    pub fn handle_command(&mut self, command: ReplCommand) -> Result<String> {
        match command {
            ReplCommand::Help => Ok(self.get_help_text()),
            ReplCommand::Quit => {
                self.running = false;
                Ok("Goodbye!".to_string())
            }
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[1;1H");
                Ok("Screen cleared.".to_string())
            }
            ReplCommand::Reset => {
                self.clear_buffer();
                Ok("Source buffer cleared.".to_string())
            }
            ReplCommand::Source(profile) => {
                debug!("source profile set to {profile}");
                self.source = profile;
                Ok(format!("Source profile: {}", self.source))
            }
            ReplCommand::Target(profile) => {
                debug!("target profile set to {profile}");
                self.target = profile;
                Ok(format!("Target profile: {}", self.target))
            }
            ReplCommand::Profiles => Ok(format!(
                "Profiles: Java, C++, JS (current: {} -> {})",
                self.source, self.target
            )),
            ReplCommand::Show => {
                if self.buffer.is_empty() {
                    Ok("Source buffer is empty.".to_string())
                } else {
                    Ok(self.buffer.join("\n"))
                }
            }
            ReplCommand::Load(path) => self.load_file(&path),
            ReplCommand::Run => self.run(),
            ReplCommand::Debug => {
                self.debug = !self.debug;
                Ok(format!(
                    "Debug mode: {}",
                    if self.debug { "on" } else { "off" }
                ))
            }
        }
    }

    /// Translate the collected buffer with the current profile pair
    pub fn translate_buffer(&self) -> recoder_core::Result<RewriteResult> {
        translate(&self.buffer.join("\n"), &self.source, &self.target)
    }

    /// Run a translation and present the outcome. The buffer survives the
    /// run so it can be retargeted and run again.
    fn run(&mut self) -> Result<String> {
        if self.buffer.join("\n").trim().is_empty() {
            self.notifier.on_error(EMPTY_BUFFER_PROMPT);
            return Ok(String::new());
        }

        match self.translate_buffer() {
            Ok(result) => {
                self.present(&result);
                if self.debug {
                    self.notifier.on_output(&format!(
                        "({} lines in, {} diagnostics)",
                        self.buffer.len(),
                        result.diagnostics.len()
                    ));
                }
            }
            Err(e) => self
                .notifier
                .on_error(&format!("Error durante la traducción: {e}")),
        }
        Ok(String::new())
    }

    /// Any diagnostic suppresses the rewritten text
    fn present(&self, result: &RewriteResult) {
        if result.is_clean() {
            self.notifier.on_rewrite(&result.rewritten);
        } else {
            self.notifier.on_diagnostics(&result.diagnostics);
            self.notifier.on_error(FAILURE_BANNER);
        }
    }

    /// Replace the buffer with a file's contents
    fn load_file(&mut self, path: &str) -> Result<String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Cannot read '{}': {}", path, e))?;
        self.buffer = content.lines().map(|line| line.to_string()).collect();
        Ok(format!("Loaded {} lines from '{}'", self.buffer.len(), path))
    }

    /// Get help text
    fn get_help_text(&self) -> String {
        r#"Recoder REPL Commands:
  .help            - Show this help message
  .quit            - Exit the REPL
  .from <profile>  - Set the source profile (Java, C++, JS)
  .to <profile>    - Set the target profile (Java, C++, JS)
  .profiles        - List profiles and the current selection
  .show            - Print the collected source buffer
  .load <file>     - Replace the buffer with a file's contents
  .run             - Translate the buffer (shortcut: a lone '.')
  .reset           - Discard the buffer
  .clear           - Clear the screen
  .debug           - Toggle debug mode

Any other input is collected into the source buffer until you issue .run.
Lines are rewritten independently; a line containing the word 'error' is
dropped and reported. The buffer survives .run, so you can retarget with
.to and run again."#
            .to_string()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
