//! lox: the loxscript command-line front end.
//!
//! Usage:
//!   lox [FILE]
//!
//! With a file argument the file is scanned and its token listing and
//! diagnostics are printed. Without one an interactive prompt starts.

use clap::Parser as ClapParser;
use std::fs;
use std::process;

use loxscript_ast::token::Token;
use loxscript_diagnostics::Diagnostic;

mod repl;

#[derive(ClapParser, Debug)]
#[command(
    name = "lox",
    about = "loxscript - a small scripting language front end",
    disable_version_flag = true
)]
struct Cli {
    /// Script file to scan.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("lox Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    match cli.file {
        Some(ref file) => process::exit(run_file(file, &cli)),
        None => {
            if let Err(err) = repl::run(cli.pretty) {
                print_error(&format!("prompt failed: {}", err));
                process::exit(1);
            }
        }
    }
}

fn run_file(path: &str, cli: &Cli) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            print_error(&format!("could not read '{}': {}", path, err));
            return 1;
        }
    };

    let use_color = cli.pretty && atty_is_terminal();
    if run(&source, use_color) {
        2
    } else {
        0
    }
}

/// Scan one source buffer and print its token listing and diagnostics.
/// Returns whether any diagnostics were produced.
fn run(source: &str, use_color: bool) -> bool {
    let result = loxscript_scanner::scan(source);

    for token in &result.tokens {
        print_token(token, use_color);
    }

    for diag in result.diagnostics.diagnostics() {
        print_diagnostic(diag, use_color);
    }

    if !result.diagnostics.has_errors() {
        return false;
    }

    let count = result.diagnostics.error_count();
    if use_color {
        eprintln!(
            "\n{}Found {} error{}.{}",
            RED,
            count,
            if count == 1 { "" } else { "s" },
            RESET
        );
    } else {
        eprintln!(
            "\nFound {} error{}.",
            count,
            if count == 1 { "" } else { "s" }
        );
    }
    true
}

fn print_token(token: &Token, use_color: bool) {
    let mut rendered = format!("{:?} {:?}", token.kind, token.lexeme);
    if let Some(ref literal) = token.literal {
        rendered.push_str(&format!(" -> {:?}", literal));
    }
    if use_color {
        println!("{}{:>4}{}  {}", GRAY, token.line, RESET, rendered);
    } else {
        println!("{:>4}  {}", token.line, rendered);
    }
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        let category = if diag.is_error() { "error" } else { "warning" };
        eprintln!(
            "{}[line {}]{} {}{}{}{} {}LS{}{}: {}",
            GRAY, diag.line, RESET,
            BOLD, color, category, RESET,
            CYAN, diag.code, RESET,
            diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
