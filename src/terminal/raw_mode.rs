//! Raw mode RAII guard.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};

/// Enables raw mode for its lifetime. Leaves an already-raw terminal alone.
pub struct RawModeGuard {
    owned: bool,
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            return Ok(Self { owned: false });
        }
        enable_raw_mode()?;
        Ok(Self { owned: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.owned {
            let _ = disable_raw_mode();
        }
    }
}
