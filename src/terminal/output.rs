//! Terminal output: box drawing and ANSI helpers.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

pub const BOX_WIDTH: usize = 56;

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colours.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// ┌─ Title ──────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
        return;
    }
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    println!("┌{}{}┐", title_part, "─".repeat(remaining));
}

/// │ content      │
pub fn box_line(content: &str) {
    let padding = (BOX_WIDTH - 4).saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// │   content    │
pub fn box_line_center(content: &str) {
    let total = (BOX_WIDTH - 4).saturating_sub(console_width(content));
    let left = total / 2;
    println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(total - left));
}

/// ├──────────────┤
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// └──────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
