//! File-backed storage.

use std::fs::File;
use std::io;

use super::Storage;

impl Storage for File {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}
