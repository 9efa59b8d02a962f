//! Ordered registry of autonomous routines.
//!
//! Entries are appended during startup and keep insertion order, which is
//! also the order they appear in the selection grid. The registry is moved
//! into the [`Selector`](crate::selector::Selector) when it is built, so no
//! registration can happen after the grid has been laid out.

use crate::config::{INVALID_AUTON_TEXT, MAX_AUTONS, MAX_NAME_LEN, NO_AUTON_TEXT};
use crate::error::Error;
use heapless::Vec;

/// Zero-argument routine run when an auton is executed.
pub type Action<'a> = &'a dyn Fn();

/// A named autonomous routine.
#[derive(Clone, Copy)]
pub struct AutonEntry<'a> {
    name: &'a str,
    action: Option<Action<'a>>,
}

impl<'a> AutonEntry<'a> {
    pub fn new(name: &'a str, action: Option<Action<'a>>) -> Self {
        Self { name, action }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn action(&self) -> Option<Action<'a>> {
        self.action
    }

    /// Whether this entry has an action to run.
    pub fn is_runnable(&self) -> bool {
        self.action.is_some()
    }

    /// Run the action. Returns `false` for a reserved, action-less slot.
    pub fn run(&self) -> bool {
        match self.action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

impl core::fmt::Debug for AutonEntry<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutonEntry")
            .field("name", &self.name)
            .field("runnable", &self.is_runnable())
            .finish()
    }
}

/// Append-only, fixed-capacity collection of autons.
pub struct Registry<'a, const N: usize = MAX_AUTONS> {
    entries: Vec<AutonEntry<'a>, N>,
}

impl<'a, const N: usize> Registry<'a, N> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an auton. `None` reserves a grid cell that cannot be run.
    pub fn register(&mut self, name: &'a str, action: Option<Action<'a>>) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(Error::NameTooLong);
        }
        if name == NO_AUTON_TEXT || name == INVALID_AUTON_TEXT {
            return Err(Error::ReservedName);
        }
        if self.find(name).is_some() {
            warn!("Registry: duplicate auton {=str}", name);
            return Err(Error::DuplicateName);
        }

        self.entries
            .push(AutonEntry::new(name, action))
            .map_err(|_| Error::RegistryFull)?;
        debug!("Registry: added {=str} ({} total)", name, self.entries.len());
        Ok(())
    }

    /// First entry whose name matches.
    pub fn find(&self, name: &str) -> Option<&AutonEntry<'a>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[AutonEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> Default for Registry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
