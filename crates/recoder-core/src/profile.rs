//! Language profiles recognized by the rewriter
//!
//! A profile names the vocabulary used both to validate source text and to
//! select the substitution rule set for a (source, target) pair. Tokens
//! outside the three fixed profiles are carried verbatim so diagnostics can
//! echo them exactly as the caller supplied them.

use std::fmt;

/// A language profile tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    /// Java-flavored sources, canonical token `Java`
    Java,
    /// C++-flavored sources, canonical token `C++`
    Cpp,
    /// JavaScript-flavored sources, canonical token `JS`
    Js,
    /// Any other token, kept verbatim
    Other(String),
}

impl Profile {
    /// Canonical token for this profile, as it appears in diagnostics
    pub fn token(&self) -> &str {
        match self {
            Profile::Java => "Java",
            Profile::Cpp => "C++",
            Profile::Js => "JS",
            Profile::Other(token) => token,
        }
    }
}

impl From<&str> for Profile {
    /// Exact-token matching: anything but the three canonical tokens lands
    /// in `Other` unchanged
    fn from(token: &str) -> Self {
        match token {
            "Java" => Profile::Java,
            "C++" => Profile::Cpp,
            "JS" => Profile::Js,
            other => Profile::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
