//! Mutable session state.

use board_core::{Color, PieceId, Point};
use std::collections::HashSet;
use tracing::trace;

/// The single source of mutable session truth.
///
/// Holds whose turn it is, what the last two clicks selected, the pending
/// destination, and which pieces have moved at least once. One instance
/// lives for the whole session; it is updated in place, never recreated.
#[derive(Debug, Clone)]
pub struct GameState {
    selected: Option<PieceId>,
    was_selected: Option<PieceId>,
    dest: Option<Point>,
    turn: Color,
    used_pieces: HashSet<PieceId>,
}

impl GameState {
    /// Creates a fresh session state with the given side to move.
    pub fn new(turn: Color) -> Self {
        GameState {
            selected: None,
            was_selected: None,
            dest: None,
            turn,
            used_pieces: HashSet::new(),
        }
    }

    /// Returns the occupant of the most recent click, if any.
    #[inline]
    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// Returns the occupant of the click before the most recent one.
    #[inline]
    pub fn was_selected(&self) -> Option<PieceId> {
        self.was_selected
    }

    /// Returns the destination of the most recent click.
    #[inline]
    pub fn dest(&self) -> Option<Point> {
        self.dest
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Records a cell interaction: the previous selection becomes
    /// `was_selected`, the clicked occupant becomes `selected`.
    pub fn update(&mut self, dest: Point, occupant: Option<PieceId>) {
        self.was_selected = self.selected;
        self.selected = occupant;
        self.dest = Some(dest);
        trace!(state = ?self, "state updated");
    }

    /// Clears both selection fields after a completed interaction.
    pub fn reset(&mut self) {
        self.selected = None;
        self.was_selected = None;
    }

    /// Remembers that the piece has made at least one move.
    pub fn mark_used(&mut self, id: PieceId) {
        self.used_pieces.insert(id);
    }

    /// Returns true if the piece has moved before.
    pub fn is_used(&self, id: PieceId) -> bool {
        self.used_pieces.contains(&id)
    }

    /// Sets the side to move. Only the turn manager calls this.
    pub(crate) fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }
}
