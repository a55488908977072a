//! Line editing in raw mode.

use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Characters a field will take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    Any,
    Digits,
    Date,
}

impl Accept {
    fn allows(self, c: char) -> bool {
        match self {
            Accept::Any => !c.is_control(),
            Accept::Digits => c.is_ascii_digit(),
            Accept::Date => c.is_ascii_digit() || matches!(c, '-' | '/' | '.'),
        }
    }
}

/// Line buffer with a cursor counted in characters.
#[derive(Debug)]
struct LineBuf {
    chars: Vec<char>,
    cursor: usize,
}

enum Step {
    Continue,
    Submit,
    Cancel,
}

impl LineBuf {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn apply(&mut self, key: KeyEvent, accept: Accept) -> Step {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => return Step::Cancel,
            KeyCode::Esc => return Step::Cancel,
            KeyCode::Enter => return Step::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept.allows(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Step::Continue
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

fn redraw(prompt: &str, line: &LineBuf, last_len: &mut usize) {
    print!("\r{}: {}", prompt, " ".repeat(*last_len + 1));
    print!("\r{}: {}", prompt, line.text());
    print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor);
    flush();
    *last_len = line.chars.len();
}

/// Edit a field pre-filled with `initial`. `None` on Esc, Ctrl+Q or a read error.
pub fn read_field(prompt: &str, initial: &str, accept: Accept) -> Option<String> {
    let guard = match RawModeGuard::enable() {
        Ok(g) => g,
        Err(_) => return read_plain(prompt, initial),
    };

    let mut line = LineBuf::new(initial);
    let mut last_len = line.chars.len();
    redraw(prompt, &line, &mut last_len);

    let submitted = edit(&mut line, accept, read, |line| {
        redraw(prompt, line, &mut last_len)
    });

    drop(guard);
    println!();
    submitted.then(|| line.text())
}

/// Feed key events into `line` until Enter (`true`), or Esc or a read
/// error (`false`).
fn edit(
    line: &mut LineBuf,
    accept: Accept,
    mut next: impl FnMut() -> io::Result<Event>,
    mut changed: impl FnMut(&LineBuf),
) -> bool {
    loop {
        let key = match next() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => return false,
        };
        match line.apply(key, accept) {
            Step::Continue => changed(line),
            Step::Submit => return true,
            Step::Cancel => return false,
        }
    }
}

/// Wait for one of `keys`; Enter picks `default`. `None` on Esc.
pub fn read_choice(prompt: &str, keys: &str, default: char) -> Option<char> {
    print!("{prompt} ");
    flush();

    let guard = match RawModeGuard::enable() {
        Ok(g) => g,
        Err(_) => {
            let answer = read_plain("", "")?;
            let picked = answer
                .chars()
                .next()
                .map(|c| c.to_ascii_lowercase())
                .filter(|c| keys.contains(*c));
            return Some(picked.unwrap_or(default));
        }
    };

    let choice = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break None,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Esc => break None,
            KeyCode::Enter => break Some(default),
            KeyCode::Char(c) if keys.contains(c.to_ascii_lowercase()) => {
                break Some(c.to_ascii_lowercase());
            }
            _ => {}
        }
    };

    drop(guard);
    println!();
    choice
}

/// Cooked-mode fallback: an empty answer keeps `initial`, EOF cancels.
fn read_plain(prompt: &str, initial: &str) -> Option<String> {
    if !prompt.is_empty() {
        print!("{prompt} [{initial}]: ");
        flush();
    }
    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let input = input.trim_end_matches(['\n', '\r']);
            let value = if input.is_empty() { initial } else { input };
            Some(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn edits_in_the_middle() {
        let mut line = LineBuf::new("Ann");
        line.apply(key(KeyCode::Left), Accept::Any);
        line.apply(key(KeyCode::Backspace), Accept::Any);
        line.apply(key(KeyCode::Char('d')), Accept::Any);
        assert_eq!(line.text(), "Adn");
        assert_eq!(line.cursor, 2);
    }

    #[test]
    fn multibyte_characters_edit_cleanly() {
        let mut line = LineBuf::new("Zoë");
        line.apply(key(KeyCode::Backspace), Accept::Any);
        assert_eq!(line.text(), "Zo");
    }

    #[test]
    fn digit_fields_ignore_letters() {
        let mut line = LineBuf::new("1");
        line.apply(key(KeyCode::Char('x')), Accept::Digits);
        line.apply(key(KeyCode::Char('2')), Accept::Digits);
        line.apply(key(KeyCode::Char('-')), Accept::Date);
        assert_eq!(line.text(), "12-");
    }

    #[test]
    fn ctrl_u_clears_and_keys_end_editing() {
        let mut line = LineBuf::new("1990-05-02");
        assert!(matches!(line.apply(ctrl('u'), Accept::Date), Step::Continue));
        assert_eq!(line.text(), "");
        assert!(matches!(line.apply(key(KeyCode::Enter), Accept::Date), Step::Submit));
        assert!(matches!(line.apply(key(KeyCode::Esc), Accept::Date), Step::Cancel));
        assert!(matches!(line.apply(ctrl('q'), Accept::Date), Step::Cancel));
    }

    fn feed(events: Vec<io::Result<Event>>) -> (bool, String) {
        let mut line = LineBuf::new("");
        let mut events = events.into_iter();
        let submitted = edit(
            &mut line,
            Accept::Any,
            || events.next().unwrap_or_else(|| Err(io::ErrorKind::UnexpectedEof.into())),
            |_| {},
        );
        (submitted, line.text())
    }

    #[test]
    fn enter_submits_typed_text() {
        let (submitted, text) = feed(vec![
            Ok(Event::Key(key(KeyCode::Char('A')))),
            Ok(Event::Key(key(KeyCode::Enter))),
        ]);
        assert!(submitted);
        assert_eq!(text, "A");
    }

    #[test]
    fn read_error_cancels_half_typed_field() {
        let (submitted, _) = feed(vec![
            Ok(Event::Key(key(KeyCode::Char('A')))),
            Err(io::Error::other("terminal gone")),
        ]);
        assert!(!submitted);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut line = LineBuf::new("ab");
        line.apply(key(KeyCode::Right), Accept::Any);
        assert_eq!(line.cursor, 2);
        line.apply(key(KeyCode::Home), Accept::Any);
        line.apply(key(KeyCode::Left), Accept::Any);
        assert_eq!(line.cursor, 0);
        line.apply(key(KeyCode::Delete), Accept::Any);
        assert_eq!(line.text(), "b");
    }
}
