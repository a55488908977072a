//! Writing generated passwords to a stream or file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Write one password per line.
pub fn write_batch<W: Write>(passwords: &[String], out: W) -> io::Result<()> {
    let mut out = SecureBufWriter::new(out);
    for pass in passwords {
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Append passwords to `path`, creating parent directories as needed.
pub fn append_to_file(path: &Path, passwords: &[String]) -> Result<()> {
    let wrap = |source: io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(wrap)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)?;

    debug!(path = %path.display(), count = passwords.len(), "appending passwords");
    write_batch(passwords, file).map_err(wrap)
}
