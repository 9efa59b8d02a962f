//! Selection grid layout.
//!
//! Autons fill the grid column by column: entry `i` lands at row
//! `i % ROWS`, column `i / ROWS`. The flattened map handed to the
//! button-matrix widget lists each column's cells in turn, with a
//! separator between columns and an empty-string end marker:
//!
//! ```text
//! col 0: r0 r1 .. rR-1  "\n"
//! col 1: r0 r1 .. rR-1  "\n"
//! ...
//! col C-1: r0 .. rR-1   ""
//! ```
//!
//! The widget's button ids skip separators, so a pressed id maps directly
//! back to the entry index (see [`Grid::cell_at`]).

use crate::config::{INVALID_AUTON_TEXT, MAP_END, MAP_ROW_SEPARATOR, NO_AUTON_TEXT};
use crate::error::Error;
use crate::registry::AutonEntry;

/// Fixed `ROWS` x `COLS` grid of display texts, stored column-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<'a, const ROWS: usize, const COLS: usize> {
    columns: [[&'a str; ROWS]; COLS],
}

impl<'a, const ROWS: usize, const COLS: usize> Grid<'a, ROWS, COLS> {
    /// Number of cells.
    pub const CAPACITY: usize = ROWS * COLS;

    /// Length of the flattened map: cells, `COLS - 1` separators and the
    /// end marker.
    pub const MAP_LEN: usize = if COLS == 0 {
        1
    } else {
        ROWS * COLS + COLS
    };

    /// Lay out `entries` in display order. Entries past the grid's
    /// capacity are not shown.
    pub fn layout(entries: &[AutonEntry<'a>]) -> Self {
        let mut columns = [[NO_AUTON_TEXT; ROWS]; COLS];
        let mut next = entries.iter();

        for column in columns.iter_mut() {
            for cell in column.iter_mut() {
                *cell = match next.next() {
                    None => NO_AUTON_TEXT,
                    Some(entry) if !entry.is_runnable() => INVALID_AUTON_TEXT,
                    Some(entry) => entry.name(),
                };
            }
        }

        let hidden = Self::hidden_count(entries);
        if hidden > 0 {
            warn!("Grid: {} autons do not fit and are hidden", hidden);
        }

        Self { columns }
    }

    /// How many of `entries` fall outside the grid.
    pub fn hidden_count(entries: &[AutonEntry<'_>]) -> usize {
        entries.len().saturating_sub(Self::CAPACITY)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&'a str> {
        self.columns.get(col)?.get(row).copied()
    }

    /// Cell by button id (column-major index, separators excluded).
    pub fn cell_at(&self, index: usize) -> Option<&'a str> {
        if ROWS == 0 {
            return None;
        }
        self.cell(index % ROWS, index / ROWS)
    }

    pub fn column(&self, col: usize) -> Option<&[&'a str; ROWS]> {
        self.columns.get(col)
    }

    /// Flattened button map, end marker included.
    pub fn map(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(col, cells)| {
                let separator = (col + 1 < COLS).then_some(MAP_ROW_SEPARATOR);
                cells.iter().copied().chain(separator)
            })
            .chain(core::iter::once(MAP_END))
    }

    /// Copy the flattened map into `out`, returning the number of slots
    /// written.
    pub fn write_map(&self, out: &mut [&'a str]) -> Result<usize, Error> {
        if out.len() < Self::MAP_LEN {
            return Err(Error::BufferOverflow);
        }
        let mut written = 0;
        for (slot, text) in out.iter_mut().zip(self.map()) {
            *slot = text;
            written += 1;
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Grid4x4<'a> = Grid<'a, 4, 4>;

    fn noop() {}

    #[test]
    fn entries_fill_first_column_before_wrapping() {
        let names = ["A", "B", "C", "D", "E", "F"];
        let entries: std::vec::Vec<AutonEntry<'_>> = names
            .iter()
            .map(|&n| AutonEntry::new(n, Some(&noop)))
            .collect();
        let grid = Grid4x4::layout(&entries);

        for (i, name) in names.iter().enumerate() {
            assert_eq!(grid.cell(i % 4, i / 4), Some(*name));
            assert_eq!(grid.cell_at(i), Some(*name));
        }
        assert_eq!(grid.cell(2, 1), Some(NO_AUTON_TEXT));
        assert_eq!(grid.cell(3, 3), Some(NO_AUTON_TEXT));
    }

    #[test]
    fn placement_holds_for_non_square_grid() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let entries: std::vec::Vec<AutonEntry<'_>> = names
            .iter()
            .map(|&n| AutonEntry::new(n, Some(&noop)))
            .collect();
        let grid = Grid::<3, 5>::layout(&entries);

        for (i, name) in names.iter().enumerate() {
            assert_eq!(grid.cell(i % 3, i / 3), Some(*name));
        }
        assert_eq!(grid.cell(3, 0), None);
        assert_eq!(grid.cell(0, 5), None);
    }

    #[test]
    fn two_autons_fill_first_column() {
        let entries = [
            AutonEntry::new("Left", Some(&noop)),
            AutonEntry::new("Right", Some(&noop)),
        ];
        let grid = Grid4x4::layout(&entries);

        assert_eq!(
            grid.column(0),
            Some(&["Left", "Right", NO_AUTON_TEXT, NO_AUTON_TEXT])
        );
        for col in 1..4 {
            assert_eq!(grid.column(col), Some(&[NO_AUTON_TEXT; 4]));
        }
    }

    #[test]
    fn action_less_entry_shows_invalid_placeholder() {
        let entries = [
            AutonEntry::new("Skills", None),
            AutonEntry::new("Left", Some(&noop)),
        ];
        let grid = Grid4x4::layout(&entries);
        assert_eq!(grid.cell(0, 0), Some(INVALID_AUTON_TEXT));
        assert_eq!(grid.cell(1, 0), Some("Left"));
    }

    #[test]
    fn overflow_entries_are_hidden() {
        let names: std::vec::Vec<std::string::String> =
            (0..18).map(|i| std::format!("R{}", i)).collect();
        let entries: std::vec::Vec<AutonEntry<'_>> = names
            .iter()
            .map(|n| AutonEntry::new(n.as_str(), Some(&noop)))
            .collect();
        let grid = Grid4x4::layout(&entries);

        assert_eq!(Grid4x4::hidden_count(&entries), 2);
        assert_eq!(grid.cell(3, 3), Some("R15"));
        assert!(grid.map().all(|text| text != "R16" && text != "R17"));
    }

    #[test]
    fn map_separates_columns_and_terminates() {
        let entries = [AutonEntry::new("Left", Some(&noop))];
        let grid = Grid::<2, 3>::layout(&entries);
        let map: std::vec::Vec<&str> = grid.map().collect();

        assert_eq!(
            map,
            [
                "Left",
                NO_AUTON_TEXT,
                MAP_ROW_SEPARATOR,
                NO_AUTON_TEXT,
                NO_AUTON_TEXT,
                MAP_ROW_SEPARATOR,
                NO_AUTON_TEXT,
                NO_AUTON_TEXT,
                MAP_END,
            ]
        );
        assert_eq!(map.len(), Grid::<2, 3>::MAP_LEN);
    }

    #[test]
    fn write_map_fills_static_buffer() {
        let entries = [AutonEntry::new("Left", Some(&noop))];
        let grid = Grid4x4::layout(&entries);

        const LEN: usize = Grid::<'static, 4, 4>::MAP_LEN;
        let mut out = [""; LEN];
        assert_eq!(grid.write_map(&mut out), Ok(Grid4x4::MAP_LEN));
        assert_eq!(out[0], "Left");
        assert_eq!(out[4], MAP_ROW_SEPARATOR);
        assert_eq!(out[Grid4x4::MAP_LEN - 1], MAP_END);

        let mut short = [""; 4];
        assert_eq!(grid.write_map(&mut short), Err(Error::BufferOverflow));
    }

    #[test]
    fn cell_at_out_of_range() {
        let grid = Grid4x4::layout(&[]);
        assert_eq!(grid.cell_at(15), Some(NO_AUTON_TEXT));
        assert_eq!(grid.cell_at(16), None);
    }
}
