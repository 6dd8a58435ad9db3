//! Thrice compiler CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thricec::commands::{check_workspace, lex_file, LexFileOptions, Outcome};
use thrice_workspace::LoadOptions;

fn main() -> ExitCode {
    thricec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = match command.as_str() {
        "lex" => {
            let mut options = LexFileOptions::default();
            let mut path = None;
            for arg in args.iter().skip(2) {
                if arg == "--spans" || arg == "-s" {
                    options.spans = true;
                } else if arg == "--keep-crlf" {
                    options.load.normalize_line_endings = false;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(PathBuf::from(arg));
                }
            }
            let Some(path) = path else {
                eprintln!("Usage: thrice lex <file.tr> [--spans]");
                return ExitCode::FAILURE;
            };
            lex_file(&path, &options, &mut out, &mut err)
        }
        "check" => {
            let mut options = LoadOptions::default();
            let mut root = None;
            for arg in args.iter().skip(2) {
                if let Some(extension) = arg.strip_prefix("--extension=") {
                    options.extension = extension.to_owned();
                } else if arg == "--keep-crlf" {
                    options.normalize_line_endings = false;
                } else if !arg.starts_with('-') && root.is_none() {
                    root = Some(PathBuf::from(arg));
                }
            }
            let root = root.unwrap_or_else(|| PathBuf::from("."));
            check_workspace(&root, &options, &mut out, &mut err)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Outcome::Success)
        }
        "version" | "--version" | "-V" => {
            println!("thrice {}", env!("CARGO_PKG_VERSION"));
            Ok(Outcome::Success)
        }
        _ => {
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tr"))
            {
                lex_file(Path::new(command), &LexFileOptions::default(), &mut out, &mut err)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    };

    match result.and_then(|outcome| out.flush().map(|()| outcome)) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failure) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Thrice compiler");
    println!();
    println!("Usage: thrice <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.tr>        Tokenize a file and display its lexemes");
    println!("  check [dir]          Lex every source of a workspace (default: current directory)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --spans, -s          Show the span of each lexeme");
    println!();
    println!("Check options:");
    println!("  --extension=<ext>    Source file extension (default: tr)");
    println!();
    println!("Common options:");
    println!("  --keep-crlf          Do not normalize CRLF line endings");
    println!();
    println!("Examples:");
    println!("  thrice lex main.tr");
    println!("  thrice lex main.tr --spans");
    println!("  thrice check");
    println!("  thrice check src/");
    println!("  thrice main.tr                  # Same as `thrice lex main.tr`");
}
