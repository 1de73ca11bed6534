//! REPL command parsing and definitions
//!
//! Handles parsing of dot-commands (.help, .quit, etc.) and profile
//! selection.

use anyhow::{anyhow, Result};
use recoder_core::Profile;

/// Available REPL commands
#[derive(Debug, Clone)]
pub enum ReplCommand {
    /// Show help information
    Help,
    /// Exit the REPL
    Quit,
    /// Clear the screen
    Clear,
    /// Discard the collected source buffer
    Reset,
    /// Set the source profile
    Source(Profile),
    /// Set the target profile
    Target(Profile),
    /// List the recognized profiles and the current selection
    Profiles,
    /// Print the collected source buffer
    Show,
    /// Load a file into the source buffer
    Load(String),
    /// Translate the collected source buffer
    Run,
    /// Toggle debug mode
    Debug,
}

/// Parse a command string into a ReplCommand
pub fn parse_command(input: &str) -> Result<ReplCommand> {
    let trimmed = input.trim();

    // A lone dot runs the buffer, heredoc style
    if trimmed == "." {
        return Ok(ReplCommand::Run);
    }

    if !trimmed.starts_with('.') {
        return Err(anyhow!("Commands must start with '.'"));
    }

    let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();

    if parts.is_empty() {
        return Err(anyhow!("Empty command"));
    }

    match parts[0] {
        "help" | "h" => Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
        "clear" | "cls" => Ok(ReplCommand::Clear),
        "reset" | "new" => Ok(ReplCommand::Reset),
        "from" => {
            if parts.len() != 2 {
                return Err(anyhow!("Usage: .from <profile>"));
            }
            Ok(ReplCommand::Source(parse_profile(parts[1])))
        }
        "to" => {
            if parts.len() != 2 {
                return Err(anyhow!("Usage: .to <profile>"));
            }
            Ok(ReplCommand::Target(parse_profile(parts[1])))
        }
        "profiles" | "langs" => Ok(ReplCommand::Profiles),
        "show" | "buffer" => Ok(ReplCommand::Show),
        "load" => {
            if parts.len() != 2 {
                return Err(anyhow!("Usage: .load <file>"));
            }
            Ok(ReplCommand::Load(parts[1].to_string()))
        }
        "run" | "translate" => Ok(ReplCommand::Run),
        "debug" => Ok(ReplCommand::Debug),
        _ => Err(anyhow!("Unknown command: .{}", parts[0])),
    }
}

/// Match a user-typed token against the canonical profile tokens, ignoring
/// case and accepting common spellings; anything else passes through
/// verbatim and degrades to the engine's permissive or unsupported paths.
pub fn parse_profile(token: &str) -> Profile {
    if token.eq_ignore_ascii_case("java") {
        Profile::Java
    } else if token.eq_ignore_ascii_case("c++") || token.eq_ignore_ascii_case("cpp") {
        Profile::Cpp
    } else if token.eq_ignore_ascii_case("js") || token.eq_ignore_ascii_case("javascript") {
        Profile::Js
    } else {
        Profile::from(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert!(matches!(parse_command(".help").unwrap(), ReplCommand::Help));
        assert!(matches!(parse_command(".h").unwrap(), ReplCommand::Help));
    }

    #[test]
    fn test_parse_quit() {
        assert!(matches!(parse_command(".quit").unwrap(), ReplCommand::Quit));
        assert!(matches!(parse_command(".q").unwrap(), ReplCommand::Quit));
        assert!(matches!(parse_command(".exit").unwrap(), ReplCommand::Quit));
    }

    #[test]
    fn test_parse_profile_selection() {
        match parse_command(".from java").unwrap() {
            ReplCommand::Source(profile) => assert_eq!(profile, Profile::Java),
            _ => panic!("Expected Source command"),
        }
        match parse_command(".to cpp").unwrap() {
            ReplCommand::Target(profile) => assert_eq!(profile, Profile::Cpp),
            _ => panic!("Expected Target command"),
        }
    }

    #[test]
    fn test_parse_profile_keeps_unknown_tokens() {
        match parse_command(".to Python").unwrap() {
            ReplCommand::Target(profile) => {
                assert_eq!(profile, Profile::Other("Python".to_string()))
            }
            _ => panic!("Expected Target command"),
        }
    }

    #[test]
    fn test_parse_profile_spellings() {
        assert_eq!(parse_profile("JAVA"), Profile::Java);
        assert_eq!(parse_profile("C++"), Profile::Cpp);
        assert_eq!(parse_profile("javascript"), Profile::Js);
        assert_eq!(parse_profile("pascal"), Profile::Other("pascal".to_string()));
    }

    #[test]
    fn test_parse_load() {
        match parse_command(".load hola.java").unwrap() {
            ReplCommand::Load(path) => assert_eq!(path, "hola.java"),
            _ => panic!("Expected Load command"),
        }
    }

    #[test]
    fn test_lone_dot_runs_buffer() {
        assert!(matches!(parse_command(".").unwrap(), ReplCommand::Run));
        assert!(matches!(parse_command(".run").unwrap(), ReplCommand::Run));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(parse_command(".invalid").is_err());
        assert!(parse_command("help").is_err()); // Missing dot
        assert!(parse_command(".from").is_err()); // Missing argument
        assert!(parse_command(".load").is_err()); // Missing argument
    }
}
