use std::{fs, path::Path};

use clap::Parser;
use numera::{Environment, evaluate_expression, process_script, session};
use rustyline::{DefaultEditor, error::ReadlineError};

/// numera is a small, sandboxed calculator language for line-oriented
/// numeric scripts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numera to run a script file instead of a single expression.
    #[arg(short, long)]
    file: bool,

    /// An expression to evaluate, or a script path with --file. With no
    /// argument the interactive shell starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        interactive_shell();
        return;
    };

    if args.file {
        run_script_file(&contents);
        return;
    }

    let env = Environment::new();
    match evaluate_expression(&contents, &env) {
        Ok(value) => println!("{value}"),
        Err(error) => eprintln!("{error}"),
    }
}

fn run_script_file(path: &str) {
    let script = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    let lines: Vec<&str> = script.lines().collect();
    let mut env = Environment::new();

    for record in process_script(&lines, &mut env) {
        match record.outcome {
            Ok(value) => println!("Line {}: {value}", record.line),
            Err(error) => println!("Line {}: {error}", record.line),
        }
    }
}

/// Runs the interactive shell, restoring and persisting variables through
/// the session file in the working directory.
///
/// Each entered line goes through the script processor so assignments
/// work; `exit` saves the session and quits.
fn interactive_shell() {
    println!("numera interactive shell");
    println!("Type expressions or assignments; 'exit' saves the session and quits.");
    println!();

    let session_path = Path::new(session::SESSION_FILE);
    let mut env = session::load(session_path).unwrap_or_else(|error| {
                                                 eprintln!("Failed to load session: {error}");
                                                 Environment::new()
                                             });

    let Ok(mut rl) = DefaultEditor::new() else {
        eprintln!("Failed to initialize the line editor.");
        return;
    };

    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if line == "exit" {
                    break;
                }

                for record in process_script(&[line], &mut env) {
                    match record.outcome {
                        Ok(value) => println!("{value}"),
                        Err(error) => println!("{error}"),
                    }
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Use Ctrl+D or 'exit' to quit.");
            },
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error:?}");
                break;
            },
        }
    }

    if let Err(error) = session::save(session_path, &env) {
        eprintln!("Failed to save session: {error}");
    }
}
