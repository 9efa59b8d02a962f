//! Unified error type for autonsel.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Registry
    /// Auton names must not be empty.
    EmptyName,

    /// Auton name exceeds `MAX_NAME_LEN` bytes.
    NameTooLong,

    /// Auton name collides with a placeholder text.
    ReservedName,

    /// An auton with this name is already registered.
    DuplicateName,

    /// The registry is at capacity.
    RegistryFull,

    // Storage
    /// The storage slot could not be read or written.
    Storage,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::EmptyName => "auton name is empty",
            Error::NameTooLong => "auton name is too long",
            Error::ReservedName => "auton name is reserved",
            Error::DuplicateName => "auton name is already registered",
            Error::RegistryFull => "auton registry is full",
            Error::Storage => "selection storage failed",
            Error::BufferOverflow => "buffer too small",
        };
        f.write_str(msg)
    }
}
