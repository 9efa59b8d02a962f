//! Autonomous routine registry and persistent selection grid.
//!
//! An application registers its autons at startup, hands the registry to
//! a [`Selector`], and wires the selector to whatever toolkit draws the
//! grid. The selected auton survives power cycles through a
//! [`SelectionSlot`].
//!
//! ```
//! use autonsel::{MemorySlot, Registry, Selector};
//!
//! let left = || {};
//! let mut registry: Registry = Registry::new();
//! registry.register("Left", Some(&left)).unwrap();
//! registry.register("Skills", None).unwrap();
//!
//! let mut selector = Selector::headless(registry, MemorySlot::new());
//! selector.on_cell_pressed(0);
//! assert_eq!(selector.selected_name(), "Left");
//! assert!(selector.run_selected());
//! ```
//!
//! Usage: `cargo test` runs everything on the host. The `embedded`
//! feature adds the flash-backed slot, `std` the SD-card file slot and
//! `defmt` on-target logging.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod grid;
pub mod registry;
pub mod selector;
pub mod storage;
pub mod ui;

pub use error::Error;
pub use grid::Grid;
pub use registry::{Action, AutonEntry, Registry};
pub use selector::{Selection, Selector, SelectorGrid};
#[cfg(any(test, feature = "std"))]
pub use storage::FileSlot;
#[cfg(feature = "embedded")]
pub use storage::FlashSlot;
pub use storage::{MemorySlot, SelectionSlot, SelectionStore};
pub use ui::{Feedback, SelectorView, UiEvent};
