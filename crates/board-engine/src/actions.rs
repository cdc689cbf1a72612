//! Mutation executor for validated decisions.

use crate::{EngineError, GameState, PieceCollection};
use board_core::{PieceId, PieceKind, Point};

/// Applies validated decisions to the board.
///
/// Every method assumes the rule checks already passed; none of them decides
/// legality. Errors only occur when an id does not resolve, which is a
/// wiring defect, not a game condition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionManager;

impl ActionManager {
    /// Relocates a piece to the destination cell.
    pub fn move_piece(
        &self,
        pieces: &mut PieceCollection,
        id: PieceId,
        dest: Point,
    ) -> Result<(), EngineError> {
        let piece = pieces.get_mut(id).ok_or(EngineError::UnknownPiece(id))?;
        piece.set_position(dest);
        Ok(())
    }

    /// Relocates the killer onto the target's cell, removes the target from
    /// play, and clears the session's selection fields.
    pub fn kill(
        &self,
        pieces: &mut PieceCollection,
        state: &mut GameState,
        killer: PieceId,
        target: PieceId,
        dest: Point,
    ) -> Result<(), EngineError> {
        self.move_piece(pieces, killer, dest)?;
        let victim = pieces.get_mut(target).ok_or(EngineError::UnknownPiece(target))?;
        victim.capture();
        state.reset();
        Ok(())
    }

    /// Repositions king and rook for a castle: the king ends two cells
    /// toward the rook from its original cell, the rook one cell on the
    /// king's side of the king's destination.
    pub fn castle(
        &self,
        pieces: &mut PieceCollection,
        rook: PieceId,
        king: PieceId,
    ) -> Result<(), EngineError> {
        let kp = pieces
            .get(king)
            .and_then(|p| p.position())
            .ok_or(EngineError::UnknownPiece(king))?;
        let rp = pieces
            .get(rook)
            .and_then(|p| p.position())
            .ok_or(EngineError::UnknownPiece(rook))?;
        let side: i8 = if rp.x() > kp.x() { 1 } else { -1 };
        // a validated castle never pushes either piece off the board
        if let (Some(king_dest), Some(rook_dest)) = (kp.offset(2 * side, 0), kp.offset(side, 0)) {
            self.move_piece(pieces, king, king_dest)?;
            self.move_piece(pieces, rook, rook_dest)?;
        }
        Ok(())
    }

    /// Changes a pawn's kind in place. This is the only place a piece's
    /// kind ever changes after creation.
    pub fn promote(
        &self,
        pieces: &mut PieceCollection,
        id: PieceId,
        kind: PieceKind,
    ) -> Result<(), EngineError> {
        let piece = pieces.get_mut(id).ok_or(EngineError::UnknownPiece(id))?;
        piece.set_kind(kind);
        Ok(())
    }
}
