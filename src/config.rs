//! Application-wide constants and compile-time configuration.
//!
//! Grid sizing, sentinel texts, storage locations and capacities live
//! here so they can be tuned in one place.

// Grid

/// Rows in the selection grid.
pub const GRID_ROWS: usize = 4;

/// Columns in the selection grid.
pub const GRID_COLS: usize = 4;

/// Placeholder for an empty cell, and the selected-name text when nothing
/// is selected.
pub const NO_AUTON_TEXT: &str = "No Auton";

/// Placeholder for a cell whose auton has no action.
pub const INVALID_AUTON_TEXT: &str = "Invalid Auton";

/// Separator between consecutive columns in the flattened button map.
pub const MAP_ROW_SEPARATOR: &str = "\n";

/// Terminates the flattened button map.
pub const MAP_END: &str = "";

// Labels & feedback

/// Prefix of the selected-name label.
pub const LABEL_PREFIX: &str = "Selected: ";

/// Text on the run control.
pub const RUN_BUTTON_TEXT: &str = "Test Selected Auton";

/// Controller rumble pattern played when the run control is pressed.
pub const RUN_RUMBLE_PATTERN: &str = "- - -";

// Registry

/// Maximum number of autons a registry can hold.
pub const MAX_AUTONS: usize = 32;

/// Maximum auton name length in bytes.
///
/// Bounded so the persisted value always fits the load buffer.
pub const MAX_NAME_LEN: usize = 32;

/// Capacity of the selected-name label (prefix + longest name).
pub const LABEL_CAPACITY: usize = 48;

// Persistence

/// Bytes read from the storage slot on load. Leaves room for a CRLF
/// terminator after the longest name.
pub const SLOT_READ_CAPACITY: usize = MAX_NAME_LEN + 2;

/// Location of the saved selection on the controller's SD card.
pub const AUTON_FILE_PATH: &str = "/usd/LastSelectedAuton.txt";

/// Flash page index where selection storage starts (4 KB per page).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for selection storage.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 2;
