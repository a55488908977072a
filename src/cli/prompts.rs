//! User-facing messages on stderr, and quiet mode.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Stdin is a terminal.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip prompts when quiet or when nobody can answer them.
pub fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        if count == 1 {
            eprintln!("{GREEN}Password copied to clipboard{RESET}");
        } else {
            eprintln!("{GREEN}{count} passwords copied to clipboard{RESET}");
        }
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Falls back silently when prompts are skipped.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Defaults saved \u{2192} {path}");
    }
}

/// Show a composition for `--explain`.
pub fn explain(fragments: &[String], shuffled: &[String]) {
    eprintln!("Fragments:");
    eprintln!("|- Base: {}", fragments.join(" "));
    eprintln!("|- Rand: {}", shuffled.join(" "));
}
