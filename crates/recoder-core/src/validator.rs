//! Source-profile validation
//!
//! Checks that the raw text contains the marker tokens of its declared
//! profile before any line rewriting happens. The check is deliberately
//! shallow: marker presence anywhere in the text, nothing positional. The
//! `main(` marker also matches unrelated calls such as `domain(`.

use crate::diagnostics::Diagnostic;
use crate::profile::Profile;

/// Validate that `code` plausibly belongs to `profile`.
///
/// Returns at most one diagnostic, attributed to line 1. Profiles outside
/// the three fixed vocabularies validate unconditionally.
pub(crate) fn validate(code: &str, profile: &Profile) -> Option<Diagnostic> {
    let message = match profile {
        Profile::Java => {
            if code.contains("class") && code.contains("main(") {
                return None;
            }
            "El código fuente no parece ser Java (faltan 'class' o 'main')."
        }
        Profile::Cpp => {
            if code.contains("#include") && code.contains("main(") {
                return None;
            }
            "El código fuente no parece ser C++ (faltan '#include' o 'main')."
        }
        Profile::Js => {
            if code.contains("function") || code.contains("console.log") {
                return None;
            }
            "El código fuente no parece ser JavaScript (faltan 'function' o 'console.log')."
        }
        Profile::Other(_) => return None,
    };
    Some(Diagnostic::new(1, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_requires_both_markers() {
        assert!(validate("public class A { main( } ", &Profile::Java).is_none());

        let missing_class = validate("int main(){}", &Profile::Java);
        assert_eq!(
            missing_class.map(|d| (d.line, d.message)),
            Some((
                1,
                "El código fuente no parece ser Java (faltan 'class' o 'main').".to_string()
            ))
        );

        assert!(validate("public class A {}", &Profile::Java).is_some());
    }

    #[test]
    fn test_cpp_requires_include_and_main() {
        assert!(validate("#include <iostream>\nint main(){}", &Profile::Cpp).is_none());

        let missing_include = validate("int main(){}", &Profile::Cpp);
        assert_eq!(
            missing_include.map(|d| d.message),
            Some("El código fuente no parece ser C++ (faltan '#include' o 'main').".to_string())
        );
    }

    #[test]
    fn test_js_accepts_either_marker() {
        assert!(validate("function f(){}", &Profile::Js).is_none());
        assert!(validate("console.log(1);", &Profile::Js).is_none());

        let neither = validate("let x = 1;", &Profile::Js);
        assert_eq!(
            neither.map(|d| d.message),
            Some(
                "El código fuente no parece ser JavaScript (faltan 'function' o 'console.log')."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_main_marker_is_a_loose_substring() {
        // "domain(" contains "main(", so this passes the Java check
        assert!(validate("class A { domain( ) }", &Profile::Java).is_none());
    }

    #[test]
    fn test_other_profiles_always_validate() {
        assert!(validate("anything at all", &Profile::Other("Pascal".to_string())).is_none());
        assert!(validate("", &Profile::Other(String::new())).is_none());
    }
}
