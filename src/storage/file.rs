//! File-backed slot, used with the controller's SD card.

use super::SelectionSlot;
use crate::config::AUTON_FILE_PATH;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Stores the selection as the whole contents of one file.
#[derive(Clone, Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSlot {
    /// The selection file on the SD card.
    fn default() -> Self {
        Self::new(AUTON_FILE_PATH)
    }
}

impl SelectionSlot for FileSlot {
    type Error = io::Error;

    fn read(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let len = data.len().min(buf.len());
        buf[..len].copy_from_slice(&data[..len]);
        Ok(Some(len))
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        std::fs::write(&self.path, data)
    }
}
