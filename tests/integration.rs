//! Integration tests for autonsel's public API.

use autonsel::config::{GRID_ROWS, INVALID_AUTON_TEXT, NO_AUTON_TEXT};
use autonsel::{MemorySlot, Registry, Selection, Selector, UiEvent};
use std::cell::Cell;

#[test]
fn left_and_right_fill_first_column() {
    let noop = || {};
    let mut registry: Registry = Registry::new();
    registry.register("Left", Some(&noop)).unwrap();
    registry.register("Right", Some(&noop)).unwrap();

    let selector = Selector::headless(registry, MemorySlot::new());
    let grid = selector.grid();

    assert_eq!(
        grid.column(0),
        Some(&["Left", "Right", NO_AUTON_TEXT, NO_AUTON_TEXT])
    );
    for col in 1..4 {
        assert_eq!(grid.column(col), Some(&[NO_AUTON_TEXT; 4]));
    }
}

#[test]
fn action_less_auton_renders_as_invalid() {
    let mut registry: Registry = Registry::new();
    registry.register("Skills", None).unwrap();

    let selector = Selector::headless(registry, MemorySlot::new());
    assert_eq!(selector.grid().cell(0, 0), Some(INVALID_AUTON_TEXT));
    assert!(selector.grid().map().all(|text| text != "Skills"));
}

#[test]
fn fifth_auton_starts_second_column() {
    let noop = || {};
    let names = ["A", "B", "C", "D", "E"];
    let mut registry: Registry = Registry::new();
    for name in names {
        registry.register(name, Some(&noop)).unwrap();
    }

    let mut selector = Selector::headless(registry, MemorySlot::new());
    assert_eq!(selector.grid().cell(0, 1), Some("E"));

    selector.handle_event(UiEvent::CellPressed(GRID_ROWS), &mut ());
    assert_eq!(selector.selected_name(), "E");
}

fn left_right<'a>(left: &'a dyn Fn(), right: &'a dyn Fn()) -> Registry<'a> {
    let mut registry = Registry::new();
    registry.register("Left", Some(left)).unwrap();
    registry.register("Right", Some(right)).unwrap();
    registry
}

#[test]
fn selection_persists_across_rebuild() {
    let left_runs = Cell::new(0);
    let right_runs = Cell::new(0);
    let left = || left_runs.set(left_runs.get() + 1);
    let right = || right_runs.set(right_runs.get() + 1);
    let mut slot = MemorySlot::new();

    let mut selector = Selector::headless(left_right(&left, &right), &mut slot);
    assert_eq!(selector.selection(), Selection::Unselected);
    selector.on_cell_pressed(1);
    drop(selector);

    let selector = Selector::headless(left_right(&left, &right), &mut slot);
    assert_eq!(selector.selected_name(), "Right");
    assert!(selector.run_selected());
    assert_eq!(right_runs.get(), 1);
    assert_eq!(left_runs.get(), 0);
}

#[test]
fn competition_dispatch_bypasses_grid() {
    let runs = Cell::new(0);
    let count = || runs.set(runs.get() + 1);
    let mut registry: Registry = Registry::new();
    registry.register("Match", Some(&count)).unwrap();

    let selector = Selector::headless(registry, MemorySlot::new());
    assert!(!selector.is_auton_selected());
    assert!(selector.run_by_name("Match"));
    assert!(!selector.run_by_name("Unknown"));
    assert_eq!(runs.get(), 1);
}
