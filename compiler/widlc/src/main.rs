//! `widl` command-line driver.

use widlc::commands::{
    format_source, lex_source, parse_source, read_file, roundtrip_source, write_file,
    CommandError, FormatResult,
};

fn main() {
    widlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let mut check = false;
    let mut file_path = None;
    for arg in args.iter().skip(2) {
        if arg == "--check" {
            check = true;
        } else if !arg.starts_with('-') && file_path.is_none() {
            file_path = Some(arg.as_str());
        } else {
            eprintln!("error: unexpected argument '{arg}'");
            std::process::exit(2);
        }
    }

    let result = match (command, file_path) {
        ("help" | "--help" | "-h", _) => {
            print_usage();
            Ok(true)
        }
        ("lex" | "parse" | "fmt" | "roundtrip", None) => {
            eprintln!("error: missing file path");
            eprintln!("Usage: widl {command} <file.idl>");
            std::process::exit(2);
        }
        ("lex", Some(path)) => read_file(path)
            .and_then(|source| lex_source(path, &source))
            .map(|out| print_and_succeed(&out)),
        ("parse", Some(path)) => read_file(path)
            .and_then(|source| parse_source(path, &source))
            .map(|out| print_and_succeed(&out)),
        ("fmt", Some(path)) => run_format(path, check),
        ("roundtrip", Some(path)) => read_file(path)
            .and_then(|source| roundtrip_source(path, &source))
            .map(|()| {
                println!("{path}: round trip ok");
                true
            }),
        _ => {
            eprintln!("error: unknown command '{command}'");
            print_usage();
            std::process::exit(2);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_and_succeed(out: &str) -> bool {
    print!("{out}");
    true
}

/// Format in place, or report only with `--check`. `Ok(false)` means a
/// checked file is not formatted.
fn run_format(path: &str, check: bool) -> Result<bool, CommandError> {
    let source = read_file(path)?;
    match format_source(path, &source)? {
        FormatResult::Unchanged => Ok(true),
        FormatResult::Formatted(_) if check => {
            println!("{path}: would reformat");
            Ok(false)
        }
        FormatResult::Formatted(formatted) => {
            write_file(path, &formatted)?;
            println!("{path}: formatted");
            Ok(true)
        }
    }
}

fn print_usage() {
    println!("Usage: widl <command> <file.idl> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>            Print the token stream");
    println!("  parse <file>          Print a summary of the definitions");
    println!("  fmt <file> [--check]  Rewrite in canonical layout (drops comments)");
    println!("  roundtrip <file>      Verify lossless parse and write");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=widl_parse=trace) for tracing output.");
}
