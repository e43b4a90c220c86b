//! Pattern Garden: paint cells on a small grid.

use serde_json::json;

use super::Sandbox;
use crate::event::{EventDraft, EventType};

pub const APP_NAME: &str = "PatternGarden";
pub const PROMPT: &str = "Click to paint a pattern. Can you create symmetry?";
pub const GRID_SIDE: usize = 5;
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;
/// Active cells needed before a discovery is reported.
pub const DISCOVERY_THRESHOLD: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternGardenAction {
    /// Flip one cell, addressed row-major from 0.
    Toggle(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGarden {
    cells: [bool; CELL_COUNT],
}

impl Default for PatternGarden {
    fn default() -> Self {
        Self {
            cells: [false; CELL_COUNT],
        }
    }
}

impl PatternGarden {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row-major index of `(row, col)`, if inside the grid.
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        (row < GRID_SIDE && col < GRID_SIDE).then_some(row * GRID_SIDE + col)
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|on| **on).count()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(GRID_SIDE)
    }

    fn derive_event(&self) -> Option<EventDraft> {
        let active = self.active_count();
        (active >= DISCOVERY_THRESHOLD).then(|| {
            EventDraft::new(
                APP_NAME,
                EventType::Discovery,
                Some(json!({ "active": active })),
            )
        })
    }
}

impl Sandbox for PatternGarden {
    type Action = PatternGardenAction;

    fn reduce(&mut self, action: PatternGardenAction) -> Option<EventDraft> {
        let PatternGardenAction::Toggle(index) = action;
        let cell = self.cells.get_mut(index)?;
        *cell = !*cell;
        self.derive_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(garden: &mut PatternGarden, index: usize) -> Option<EventDraft> {
        garden.reduce(PatternGardenAction::Toggle(index))
    }

    #[test]
    fn test_threshold_crossing() {
        let mut garden = PatternGarden::new();
        for i in 0..7 {
            assert!(toggle(&mut garden, i).is_none(), "cell {i} should not trigger");
        }

        let eighth = toggle(&mut garden, 7).unwrap();
        assert_eq!(eighth.kind, EventType::Discovery);
        assert_eq!(eighth.app, "PatternGarden");
        assert_eq!(eighth.payload, Some(json!({ "active": 8 })));

        let ninth = toggle(&mut garden, 8).unwrap();
        assert_eq!(ninth.payload, Some(json!({ "active": 9 })));
    }

    #[test]
    fn test_reemits_while_threshold_holds() {
        let mut garden = PatternGarden::new();
        for i in 0..9 {
            toggle(&mut garden, i);
        }

        // flicker cell 8 off and on: still >= 8 both times
        assert_eq!(toggle(&mut garden, 8).unwrap().payload, Some(json!({ "active": 8 })));
        assert_eq!(toggle(&mut garden, 8).unwrap().payload, Some(json!({ "active": 9 })));

        // dropping below threshold goes quiet
        toggle(&mut garden, 8);
        assert!(toggle(&mut garden, 7).is_none());
        assert_eq!(garden.active_count(), 7);
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut garden = PatternGarden::new();
        assert!(toggle(&mut garden, CELL_COUNT).is_none());
        assert_eq!(garden.active_count(), 0);
    }

    #[test]
    fn test_grid_addressing() {
        assert_eq!(PatternGarden::index_of(0, 0), Some(0));
        assert_eq!(PatternGarden::index_of(2, 3), Some(13));
        assert_eq!(PatternGarden::index_of(4, 4), Some(24));
        assert_eq!(PatternGarden::index_of(5, 0), None);

        let mut garden = PatternGarden::new();
        toggle(&mut garden, 13);
        let rows: Vec<&[bool]> = garden.rows().collect();
        assert_eq!(rows.len(), GRID_SIDE);
        assert!(rows[2][3]);
        assert!(garden.is_active(13));
    }
}
