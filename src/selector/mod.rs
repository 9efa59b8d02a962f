//! Auton selection state machine.
//!
//! The [`Selector`] owns the registry, the laid-out grid and the current
//! [`Selection`]. It is built once by the application after every auton
//! has been registered, restores the last saved choice, and from then on
//! reacts to [`UiEvent`]s from the rendering layer.
//!
//! ```text
//! pressed cell text      new state
//! ---------------------  -------------
//! "No Auton"             Unselected
//! "Invalid Auton"        InvalidSlot
//! any auton name         Selected(name)
//! ```
//!
//! Every press is saved verbatim, placeholder text included. Failures in
//! storage or lookups never abort: they fall back to `Unselected` or to
//! doing nothing.
//!
//! Single-threaded: all calls are expected from the task driving the UI.


use crate::config::{
    GRID_COLS, GRID_ROWS, INVALID_AUTON_TEXT, LABEL_CAPACITY, LABEL_PREFIX, NO_AUTON_TEXT,
    RUN_BUTTON_TEXT, RUN_RUMBLE_PATTERN,
};
use crate::grid::Grid;
use crate::registry::Registry;
use crate::storage::{SelectionSlot, SelectionStore};
use crate::ui::{Feedback, SelectorView, UiEvent};

/// Grid at the configured size.
pub type SelectorGrid<'a> = Grid<'a, GRID_ROWS, GRID_COLS>;

/// What is currently selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection<'a> {
    /// Nothing selected, or an empty cell was pressed.
    Unselected,
    /// A runnable auton.
    Selected(&'a str),
    /// A cell reserved for an auton without an action was pressed.
    InvalidSlot,
}

impl<'a> Selection<'a> {
    /// Selection for a pressed cell showing `text`.
    pub fn from_cell(text: &'a str) -> Self {
        match text {
            NO_AUTON_TEXT => Selection::Unselected,
            INVALID_AUTON_TEXT => Selection::InvalidSlot,
            name => Selection::Selected(name),
        }
    }

    /// Display text: the auton name, or a placeholder.
    pub fn text(&self) -> &'a str {
        match *self {
            Selection::Unselected => NO_AUTON_TEXT,
            Selection::Selected(name) => name,
            Selection::InvalidSlot => INVALID_AUTON_TEXT,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

/// `"Selected: <name>"`, truncated to the label capacity.
pub fn selected_label(name: &str) -> heapless::String<LABEL_CAPACITY> {
    let mut label = heapless::String::new();
    let _ = label.push_str(LABEL_PREFIX);
    for c in name.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

/// Application-owned auton selector.
pub struct Selector<'a, S, V = ()> {
    registry: Registry<'a>,
    grid: SelectorGrid<'a>,
    store: SelectionStore<S>,
    view: V,
    selection: Selection<'a>,
    visible: bool,
}

impl<'a, S: SelectionSlot> Selector<'a, S, ()> {
    /// Selector without a rendering surface.
    pub fn headless(registry: Registry<'a>, slot: S) -> Self {
        Self::new(registry, slot, ())
    }
}

impl<'a, S: SelectionSlot, V: SelectorView> Selector<'a, S, V> {
    /// Take ownership of the registry, restore the saved selection and
    /// set up the (hidden) widgets on `view`.
    pub fn new(registry: Registry<'a>, slot: S, view: V) -> Self {
        let mut store = SelectionStore::new(slot);
        let selection = match store.load() {
            Some(saved) => restore(&registry, saved),
            None => Selection::Unselected,
        };
        let grid = SelectorGrid::layout(registry.entries());

        info!(
            "Selector: {} autons, initial {=str}",
            registry.len(),
            selection.text()
        );

        let mut selector = Self {
            registry,
            grid,
            store,
            view,
            selection,
            visible: true,
        };
        selector.view.set_map(selector.grid.map());
        selector.view.set_run_text(RUN_BUTTON_TEXT);
        selector.refresh_label();
        selector.hide();
        selector
    }

    /// Show the grid, label and run control.
    pub fn display(&mut self) {
        self.set_visible(true);
    }

    /// Hide the grid, label and run control.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.view.set_visible(visible);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a runnable auton is selected.
    pub fn is_auton_selected(&self) -> bool {
        self.selection.is_selected()
    }

    /// Run the selected auton. Returns `false` if nothing ran.
    pub fn run_selected(&self) -> bool {
        let Selection::Selected(name) = self.selection else {
            debug!("No auton selected - nothing to run");
            return false;
        };
        self.run_by_name(name)
    }

    /// Run an auton by name, regardless of the current selection. Returns
    /// `false` if no runnable auton has that name.
    pub fn run_by_name(&self, name: &str) -> bool {
        let Some(entry) = self.registry.find(name) else {
            warn!("Unknown auton {=str}", name);
            return false;
        };
        if !entry.is_runnable() {
            warn!("Auton {=str} has no action", name);
            return false;
        }

        info!("Running auton {=str}", name);
        entry.run()
    }

    /// Name of the selected auton, or a placeholder text.
    pub fn selected_name(&self) -> &'a str {
        self.selection.text()
    }

    pub fn selection(&self) -> Selection<'a> {
        self.selection
    }

    /// A grid cell was pressed.
    pub fn on_cell_pressed(&mut self, index: usize) {
        let Some(text) = self.grid.cell_at(index) else {
            warn!("Cell {} is outside the grid", index);
            return;
        };

        self.selection = Selection::from_cell(text);
        info!("Selected {=str}", text);
        self.refresh_label();

        // The selection stays in effect even if it could not be saved.
        let _ = self.store.save(text);
    }

    /// The run control was pressed: rumble, then run the selection.
    pub fn on_run_pressed(&self, feedback: &mut impl Feedback) -> bool {
        feedback.rumble(RUN_RUMBLE_PATTERN);
        self.run_selected()
    }

    /// Dispatch an event from the rendering layer.
    pub fn handle_event(&mut self, event: UiEvent, feedback: &mut impl Feedback) {
        debug!("Selector event: {}", event);
        match event {
            UiEvent::CellPressed(index) => self.on_cell_pressed(index),
            UiEvent::RunPressed => {
                self.on_run_pressed(feedback);
            }
        }
    }

    fn refresh_label(&mut self) {
        let label = selected_label(self.selection.text());
        self.view.set_label(&label);
    }

    pub fn registry(&self) -> &Registry<'a> {
        &self.registry
    }

    pub fn grid(&self) -> &SelectorGrid<'a> {
        &self.grid
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &SelectionStore<S> {
        &self.store
    }
}

/// Resolve a saved name against the registry. Only runnable autons are
/// restored, matching what a live grid press can select.
fn restore<'a>(registry: &Registry<'a>, saved: &str) -> Selection<'a> {
    match registry.find(saved) {
        Some(entry) if entry.is_runnable() => {
            info!("Restored saved auton {=str}", entry.name());
            Selection::Selected(entry.name())
        }
        Some(_) => {
            warn!("Saved auton {=str} has no action - ignoring", saved);
            Selection::Unselected
        }
        None => {
            info!("Saved auton {=str} is not registered", saved);
            Selection::Unselected
        }
    }
}
