//! Boundary to the graphical surface and the operator's controller.
//!
//! The selector draws nothing itself. It pushes the button map, the
//! selected-name label and the group visibility to a [`SelectorView`],
//! and receives [`UiEvent`]s back from whatever widget toolkit renders
//! them.
//!
//! ## Components
//!
//! - **Grid**: button matrix showing the laid-out auton names
//! - **Label**: `"Selected: <name>"`
//! - **Run control**: runs the selected auton after a controller rumble

/// Events delivered by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// A grid cell was pressed. Carries the button id (column-major,
    /// separators excluded).
    CellPressed(usize),
    /// The run control was pressed.
    RunPressed,
}

/// Rendering surface for the selector's widgets.
pub trait SelectorView {
    /// Install the flattened button map (see [`Grid::map`](crate::grid::Grid::map)).
    fn set_map<'m>(&mut self, map: impl Iterator<Item = &'m str>);

    /// Replace the selected-name label text.
    fn set_label(&mut self, text: &str);

    /// Set the caption of the run control.
    fn set_run_text(&mut self, text: &str);

    /// Show or hide the grid, label and run control together.
    fn set_visible(&mut self, visible: bool);
}

/// Headless surface: state changes go nowhere.
impl SelectorView for () {
    fn set_map<'m>(&mut self, _map: impl Iterator<Item = &'m str>) {}

    fn set_label(&mut self, _text: &str) {}

    fn set_run_text(&mut self, _text: &str) {}

    fn set_visible(&mut self, _visible: bool) {}
}

/// Haptic feedback device (e.g. the master controller).
pub trait Feedback {
    /// Start a rumble pattern. Must not wait for it to finish.
    fn rumble(&mut self, pattern: &str);
}

impl Feedback for () {
    fn rumble(&mut self, _pattern: &str) {}
}
