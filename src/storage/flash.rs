//! Internal-flash slot.
//!
//! Uses the `sequential-storage` map over a reserved page range, which
//! handles wear levelling and garbage collection. The map API is async;
//! the selector is synchronous, so each access is driven to completion
//! with `embassy_futures::block_on`.

use super::SelectionSlot;
use crate::config::{SLOT_READ_CAPACITY, STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use core::ops::Range;
use embedded_storage_async::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;

/// Flash page size (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Key of the selected-auton record in the map storage.
const KEY_SELECTED_AUTON: u8 = 0x01;

/// Scratch buffer for map operations: record header plus the value.
const MAX_RECORD_SIZE: usize = 64;

/// Default flash range reserved for the selection.
pub const DEFAULT_FLASH_RANGE: Range<u32> = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE
    ..(STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Stores the selection as one record in NOR flash.
pub struct FlashSlot<F> {
    flash: F,
    range: Range<u32>,
}

impl<F: NorFlash> FlashSlot<F> {
    /// Slot over the default reserved page range.
    pub fn new(flash: F) -> Self {
        Self::with_range(flash, DEFAULT_FLASH_RANGE)
    }

    pub fn with_range(flash: F, range: Range<u32>) -> Self {
        Self { flash, range }
    }

    pub fn into_inner(self) -> F {
        self.flash
    }
}

impl<F: NorFlash> SelectionSlot for FlashSlot<F> {
    type Error = sequential_storage::Error<F::Error>;

    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error> {
        let mut data_buf = [0u8; MAX_RECORD_SIZE];

        let item = embassy_futures::block_on(sequential_storage::map::fetch_item::<u8, &[u8], _>(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut data_buf,
            &KEY_SELECTED_AUTON,
        ))?;

        Ok(item.map(|data| {
            let len = data.len().min(buf.len());
            buf[..len].copy_from_slice(&data[..len]);
            len
        }))
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let data = &data[..data.len().min(SLOT_READ_CAPACITY)];
        let mut buf = [0u8; MAX_RECORD_SIZE];

        embassy_futures::block_on(sequential_storage::map::store_item::<u8, &[u8], _>(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut buf,
            &KEY_SELECTED_AUTON,
            &data,
        ))
    }
}
