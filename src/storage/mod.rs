//! Persistent storage for the last selected auton.
//!
//! The selection is a single line of text - the raw cell text of the last
//! grid press - kept in a byte-oriented slot. There is no schema and no
//! checksum: a value that is absent, empty, not UTF-8 or does not name a
//! registered auton simply means "no prior selection".
//!
//! Backends:
//!   - [`MemorySlot`]: RAM only, always available.
//!   - [`FileSlot`]: file on the controller's SD card (`std` feature).
//!   - [`FlashSlot`]: internal NOR flash via `sequential-storage`
//!     (`embedded` feature).

#[cfg(any(test, feature = "std"))]
mod file;
#[cfg(feature = "embedded")]
mod flash;

#[cfg(any(test, feature = "std"))]
pub use file::FileSlot;
#[cfg(feature = "embedded")]
pub use flash::FlashSlot;

use crate::config::{MAX_NAME_LEN, SLOT_READ_CAPACITY};
use crate::error::Error;
use heapless::Vec;

/// A durable slot holding one value.
pub trait SelectionSlot {
    type Error: core::fmt::Debug;

    /// Read the stored value into `buf`, returning the number of bytes
    /// copied, or `None` if nothing has been stored. Values longer than
    /// `buf` are truncated.
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error>;

    /// Replace the stored value with `data`.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<S: SelectionSlot + ?Sized> SelectionSlot for &mut S {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error> {
        (**self).read(buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }
}

/// Loads and saves the selected auton name through a [`SelectionSlot`].
pub struct SelectionStore<S> {
    slot: S,
    buf: [u8; SLOT_READ_CAPACITY],
}

impl<S: SelectionSlot> SelectionStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            buf: [0; SLOT_READ_CAPACITY],
        }
    }

    /// First line of the stored value, if there is a usable one.
    pub fn load(&mut self) -> Option<&str> {
        let len = match self.slot.read(&mut self.buf) {
            Ok(Some(len)) => len.min(self.buf.len()),
            Ok(None) => {
                info!("No saved auton");
                return None;
            }
            Err(_) => {
                error!("Saved auton read error");
                return None;
            }
        };

        let data = &self.buf[..len];
        let line = match data.iter().position(|&b| b == b'\n') {
            Some(end) => &data[..end],
            None => data,
        };
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if line.is_empty() {
            info!("Saved auton is empty");
            return None;
        }

        match core::str::from_utf8(line) {
            Ok(name) => {
                debug!("Loaded saved auton {=str}", name);
                Some(name)
            }
            Err(_) => {
                warn!("Saved auton is not valid UTF-8");
                None
            }
        }
    }

    /// Overwrite the stored value with `name`, verbatim.
    pub fn save(&mut self, name: &str) -> Result<(), Error> {
        match self.slot.write(name.as_bytes()) {
            Ok(()) => {
                info!("Saved auton {=str}", name);
                Ok(())
            }
            Err(_) => {
                error!("Saved auton write error");
                Err(Error::Storage)
            }
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }
}

/// Slot capacity of [`MemorySlot`]: the longest name plus a line ending.
pub const MEMORY_SLOT_CAPACITY: usize = MAX_NAME_LEN + 2;

/// RAM-backed slot. Survives selector rebuilds but not power cycles.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    value: Option<Vec<u8, MEMORY_SLOT_CAPACITY>>,
}

impl MemorySlot {
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// A slot that already holds `value`.
    pub fn with_value(value: &str) -> Result<Self, Error> {
        let mut slot = Self::new();
        slot.write(value.as_bytes())?;
        Ok(slot)
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }
}

impl SelectionSlot for MemorySlot {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Error> {
        Ok(self.value.as_ref().map(|value| {
            let len = value.len().min(buf.len());
            buf[..len].copy_from_slice(&value[..len]);
            len
        }))
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        let value = Vec::from_slice(data).map_err(|_| Error::BufferOverflow)?;
        self.value = Some(value);
        Ok(())
    }
}
