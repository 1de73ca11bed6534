use std::{
    fs,
    io::{self, IsTerminal},
};

use anyhow::Result;
use clap::{Arg, Command};
use recoder_core::{init_tracing, translate, Profile};

mod repl;
use repl::commands::parse_profile;
use repl::{DefaultNotifier, ReplNotifier, Session, FAILURE_BANNER};

fn main() -> Result<()> {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let matches = Command::new("recoder-repl")
        .version(recoder_core::VERSION)
        .about("Interactive REPL and batch front end for the recoder line rewriter")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Translate FILE and exit instead of starting the REPL")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("PROFILE")
                .help("Source profile (Java, C++, JS)")
                .default_value("Java"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("PROFILE")
                .help("Target profile (Java, C++, JS)")
                .default_value("JS"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the batch result as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug mode")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Extract command line options
    let input_file = matches.get_one::<String>("file").cloned();
    let source = parse_profile(matches.get_one::<String>("from").unwrap());
    let target = parse_profile(matches.get_one::<String>("to").unwrap());
    let json = matches.get_flag("json");
    let debug = matches.get_flag("debug");

    if let Some(path) = input_file {
        return run_batch(&path, &source, &target, json);
    }

    println!("Recoder REPL v{}", recoder_core::VERSION);
    println!("Profiles: {source} -> {target}");

    if debug {
        println!("Debug mode: enabled");
    }

    println!("Type .help for help, .quit to exit");
    println!();

    let mut session = Session::with_profiles(source, target);
    session.set_debug(debug);

    run_repl(&mut session)
}

/// Translate a file in one shot. Any diagnostic marks the run as failed for
/// scripting purposes.
fn run_batch(path: &str, source: &Profile, target: &Profile, json: bool) -> Result<()> {
    let code = fs::read_to_string(path)?;
    let result = translate(&code, source, target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_clean() {
        println!("{}", result.rewritten);
    } else {
        let notifier = DefaultNotifier::new();
        notifier.on_diagnostics(&result.diagnostics);
        notifier.on_error(FAILURE_BANNER);
    }

    if !result.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_repl(session: &mut Session) -> Result<()> {
    use rustyline::{error::ReadlineError, DefaultEditor};

    let mut rl = DefaultEditor::new()?;
    let is_interactive = io::stdin().is_terminal();

    while session.is_running() {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle empty input
                if trimmed.is_empty() {
                    continue;
                }

                // Check if it's a REPL command
                if trimmed.starts_with('.') {
                    rl.add_history_entry(&line)?;

                    // Echo input in non-interactive mode
                    if !is_interactive {
                        println!(">> {trimmed}");
                    }

                    match session.parse_input(trimmed) {
                        Ok(command) => match session.handle_command(command) {
                            Ok(output) => session.notifier().on_output(&output),
                            Err(e) => session.notifier().on_error(&format!("Error: {e}")),
                        },
                        Err(e) => session.notifier().on_error(&format!("Error: {e}")),
                    }
                } else {
                    // Collect the line into the source buffer
                    session.push_line(&line);
                }
            }
            Err(ReadlineError::Interrupted) => {
                if session.is_collecting() {
                    // Cancel the collected buffer
                    println!("^C");
                    session.clear_buffer();
                } else {
                    println!("Use .quit to exit");
                }
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    Ok(())
}
