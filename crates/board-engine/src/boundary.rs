//! Boundary traits for the presentation layer.
//!
//! The engine never draws anything and never blocks on the player directly;
//! it talks to the outside world through these two traits. Implementations
//! hold no game logic.

use crate::PieceCollection;
use board_core::{Color, Piece, PieceId, PieceKind};
use std::future::Future;

/// Receives rendering requests from the turn state machine.
pub trait Presenter {
    /// Redraws the whole board from current piece positions.
    fn render(&mut self, pieces: &PieceCollection);

    /// Marks the given piece as the active selection.
    fn highlight(&mut self, id: PieceId);

    /// Clears any active selection mark.
    fn reset_highlight(&mut self);

    /// Refreshes one piece's visual after its kind changed.
    fn refresh_piece(&mut self, piece: &Piece);
}

/// Asks the player which kind a promoting pawn becomes.
///
/// This is the engine's one suspension point. The move that put the pawn on
/// its last row is already committed when `choose` runs; a dismissed choice
/// (`None`) leaves the pawn unpromoted and the move stands.
pub trait PromotionChooser {
    /// Resolves to one of [`PieceKind::PROMOTION_CHOICES`], or `None` if the
    /// player dismissed the choice.
    fn choose(&mut self, color: Color) -> impl Future<Output = Option<PieceKind>>;
}
