//! Rule validation for the board.
//!
//! This module provides the [`RuleSet`] trait which abstracts the legality
//! rules. The turn state machine is rule-agnostic - it delegates every
//! move, capture, castling, and promotion decision to the active rule set.
//!
//! Rule sets are pure: they read the collection and the session state,
//! mutate nothing, and report illegality as a plain `false`.

mod classic;

pub use classic::ClassicRules;

use crate::{GameState, PieceCollection};
use board_core::{Piece, Point};

/// Legality rules for piece movement and interaction.
///
/// # Example
///
/// ```
/// use board_engine::rules::RuleSet;
/// use board_engine::{ClassicRules, GameState};
/// use board_core::{Color, Point};
///
/// let rules = ClassicRules;
/// let pieces = rules.initial_collection();
/// let state = GameState::new(Color::White);
///
/// let e2 = Point::from_algebraic("e2").unwrap();
/// let e4 = Point::from_algebraic("e4").unwrap();
/// let pawn = pieces.find_by_dest(e2).unwrap();
/// assert!(rules.check_move(pawn, e4, &pieces, &state));
/// ```
pub trait RuleSet {
    /// Returns the starting layout for a fresh session.
    fn initial_collection(&self) -> PieceCollection;

    /// Returns true if relocating `piece` to the unoccupied cell `dest` is
    /// legal.
    fn check_move(
        &self,
        piece: &Piece,
        dest: Point,
        pieces: &PieceCollection,
        state: &GameState,
    ) -> bool;

    /// Returns true if `piece` may capture on `dest`.
    ///
    /// Only pawns have capture geometry of their own. For every other kind
    /// this is always true: the caller confirms the occupant is an opponent
    /// and checks the movement shape separately.
    fn can_attack(&self, piece: &Piece, dest: Point) -> bool;

    /// Returns true if the king and rook may castle: same color, neither
    /// has moved, and the cells between them are unobstructed.
    fn castling_allowed(
        &self,
        king: &Piece,
        rook: &Piece,
        pieces: &PieceCollection,
        state: &GameState,
    ) -> bool;

    /// Returns true if the piece is a pawn standing on its promotion row.
    fn promotion_eligible(&self, piece: &Piece) -> bool;
}
