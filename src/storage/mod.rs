//! Backing storage for settings documents.
//!
//! The settings engine never opens or closes anything. It is handed a
//! [`Storage`]: a readable, writable, seekable resource that can also be
//! truncated. The cursor position is part of the contract; each settings
//! operation documents where it leaves it.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

/// A mutable, seekable, truncatable document store.
///
/// Implemented for [`std::fs::File`] and for in-memory `Cursor<Vec<u8>>`.
///
/// # Testing
///
/// Use `Cursor<Vec<u8>>` in tests to avoid filesystem dependencies.
pub trait Storage: Read + Write + Seek {
    /// Truncates (or extends) the underlying content to `len` bytes.
    ///
    /// The cursor position is not changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying resource cannot be resized.
    fn truncate(&mut self, len: u64) -> io::Result<()>;

    /// Reads the whole document as UTF-8 text, starting from offset 0.
    ///
    /// Leaves the cursor at the end of the document.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if the content is not valid UTF-8.
    fn read_document(&mut self) -> io::Result<String> {
        self.seek(SeekFrom::Start(0))?;
        let mut text = String::new();
        self.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Replaces the whole document with `text`.
    ///
    /// Truncates to zero, writes from the start, flushes, and leaves the
    /// cursor at offset 0. A failure part way through can leave the
    /// document truncated or partially written.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails.
    fn replace_document(&mut self, text: &str) -> io::Result<()> {
        self.seek(SeekFrom::Start(0))?;
        self.truncate(0)?;
        self.write_all(text.as_bytes())?;
        self.flush()?;
        self.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

impl Storage for Cursor<Vec<u8>> {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length exceeds memory"))?;
        self.get_mut().resize(len, 0);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        (**self).truncate(len)
    }
}
