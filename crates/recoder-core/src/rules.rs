//! Substitution rule sets for each supported profile pair
//!
//! Each (source, target) pair maps to an ordered slice of steps. Steps
//! compose sequentially: a substitution step hands its output to the next
//! step, while a whole-line omission step ends the chain for that line. The
//! tables below are the entire decision surface of the rewriter; [`apply`]
//! is a plain fold over them.

use crate::profile::Profile;

/// C++ stream opener spliced in by [`Step::PrintToStream`]. The second
/// trailing space stands where the consumed call parenthesis was.
const STREAM_OPENER: &str = "std::cout <<  ";

/// Statement tail spliced in wherever a `);` terminator is rewritten.
const STREAM_TERMINATOR: &str = " << std::endl;";

/// One transformation step inside a rule set
#[derive(Debug, Clone, Copy)]
pub(crate) enum Step {
    /// Replace the whole line with `comment` when the trimmed line starts
    /// with `prefix`, skipping any remaining steps
    Omit {
        prefix: &'static str,
        comment: &'static str,
    },
    /// Replace every occurrence of `from` with `to` and continue
    Swap {
        from: &'static str,
        to: &'static str,
    },
    /// Rewrite a print call into a C++ stream statement: the call opener
    /// (parenthesis included) becomes the stream opener, then any `);`
    /// terminator becomes ` << std::endl;`
    PrintToStream { call: &'static str },
    /// Collapse `std::cout << x << std::endl;` into `console.log(x);`,
    /// falling back to a bare `std::cout` rename when the operator pair
    /// cannot be located
    StreamToLog,
}

static JAVA_TO_JS: &[Step] = &[
    Step::Omit {
        prefix: "public class",
        comment: "// Clase omitida en JS",
    },
    Step::Swap {
        from: "public static void main(String[] args)",
        to: "function main()",
    },
    Step::Swap {
        from: "System.out.println",
        to: "console.log",
    },
];

static JAVA_TO_CPP: &[Step] = &[
    Step::Omit {
        prefix: "public class",
        comment: "// Clase traducida omitida en C++",
    },
    Step::Swap {
        from: "public static void main(String[] args)",
        to: "int main()",
    },
    Step::PrintToStream {
        call: "System.out.println(",
    },
];

static CPP_TO_JS: &[Step] = &[
    Step::Omit {
        prefix: "#include",
        comment: "// Directiva de preprocesador omitida",
    },
    Step::Omit {
        prefix: "using namespace",
        comment: "",
    },
    Step::Swap {
        from: "int main()",
        to: "function main()",
    },
    Step::StreamToLog,
];

static CPP_TO_JAVA: &[Step] = &[
    Step::Swap {
        from: "int main()",
        to: "public static void main(String[] args)",
    },
    Step::Swap {
        from: "console.log",
        to: "System.out.println",
    },
    // Directive lines are commented out last, overriding any substitution
    // already made on the line.
    Step::Omit {
        prefix: "#include",
        comment: "// Directiva omitida en Java",
    },
    Step::Omit {
        prefix: "using namespace",
        comment: "// Directiva omitida en Java",
    },
];

static JS_TO_JAVA: &[Step] = &[Step::Swap {
    from: "console.log",
    to: "System.out.println",
}];

static JS_TO_CPP: &[Step] = &[Step::PrintToStream {
    call: "console.log(",
}];

/// Look up the rule set for a (source, target) pair. `None` means the pair
/// is unsupported; identity pairs are handled before dispatch ever happens.
pub(crate) fn steps_for(source: &Profile, target: &Profile) -> Option<&'static [Step]> {
    use Profile::{Cpp, Java, Js};
    Some(match (source, target) {
        (Java, Js) => JAVA_TO_JS,
        (Java, Cpp) => JAVA_TO_CPP,
        (Cpp, Js) => CPP_TO_JS,
        (Cpp, Java) => CPP_TO_JAVA,
        (Js, Java) => JS_TO_JAVA,
        (Js, Cpp) => JS_TO_CPP,
        _ => return None,
    })
}

/// Apply a rule set to a single line
pub(crate) fn apply(line: &str, steps: &[Step]) -> String {
    let mut current = line.to_string();
    for step in steps {
        match *step {
            Step::Omit { prefix, comment } => {
                if current.trim_start().starts_with(prefix) {
                    return comment.to_string();
                }
            }
            Step::Swap { from, to } => {
                current = current.replace(from, to);
            }
            Step::PrintToStream { call } => {
                if current.contains(call) {
                    current = current.replace(call, STREAM_OPENER);
                    current = current.replace(");", STREAM_TERMINATOR);
                }
            }
            Step::StreamToLog => {
                current = collapse_stream(&current);
            }
        }
    }
    current
}

/// Extract the payload between the first insertion operator after
/// `std::cout` and the `<< std::endl` marker, discarding everything else on
/// the line. Lines without a stream object pass through; when the marker is
/// missing, precedes the operator, or overlaps it, fall back to renaming the
/// stream object.
fn collapse_stream(line: &str) -> String {
    let start = match line.find("std::cout") {
        Some(at) => at,
        None => return line.to_string(),
    };
    let operator = line[start..].find("<<").map(|at| start + at);
    let endl = line.find("<< std::endl");
    match (operator, endl) {
        (Some(op), Some(end)) if end >= op + 2 => {
            let content = line[op + 2..end].trim();
            format!("console.log({content});")
        }
        _ => line.replace("std::cout", "console.log"),
    }
}
