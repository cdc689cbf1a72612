//! Classic chess legality rules.

use super::RuleSet;
use crate::{GameState, PieceCollection};
use board_core::{Color, Piece, PieceId, PieceKind, Point, BOARD_SIZE};

/// The classic two-player rules.
///
/// Covers per-kind movement geometry, path obstruction for sliding pieces,
/// pawn capture geometry, castling eligibility, and promotion eligibility.
/// Check detection is deliberately absent: a king may move onto an attacked
/// cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicRules;

impl RuleSet for ClassicRules {
    fn initial_collection(&self) -> PieceCollection {
        const BACK_ROW: [PieceKind; BOARD_SIZE as usize] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut pieces = Vec::with_capacity(32);
        let mut next_id = 0u8;
        for color in [Color::White, Color::Black] {
            let home = color.home_row();
            let pawn_row = home.wrapping_add_signed(color.forward());
            for (x, kind) in BACK_ROW.into_iter().enumerate() {
                if let Some(point) = Point::new(x as u8, home) {
                    pieces.push(Piece::new(PieceId::new(next_id), kind, color, point));
                    next_id += 1;
                }
            }
            for x in 0..BOARD_SIZE {
                if let Some(point) = Point::new(x, pawn_row) {
                    pieces.push(Piece::new(PieceId::new(next_id), PieceKind::Pawn, color, point));
                    next_id += 1;
                }
            }
        }
        PieceCollection::new(pieces)
    }

    fn check_move(
        &self,
        piece: &Piece,
        dest: Point,
        pieces: &PieceCollection,
        state: &GameState,
    ) -> bool {
        let Some(prev) = piece.position() else {
            return false;
        };
        match piece.kind() {
            PieceKind::King => {
                let (dx, dy) = prev.delta(dest);
                dx < 2 && dy < 2
            }
            PieceKind::Queen => {
                (prev.same_row(dest) || prev.same_column(dest) || prev.diagonal_to(dest))
                    && path_clear(prev, dest, pieces)
            }
            PieceKind::Rook => {
                (prev.same_row(dest) || prev.same_column(dest)) && path_clear(prev, dest, pieces)
            }
            PieceKind::Bishop => prev.diagonal_to(dest) && path_clear(prev, dest, pieces),
            PieceKind::Knight => {
                let (dx, dy) = prev.delta(dest);
                dx.min(dy) == 1 && dx.max(dy) == 2
            }
            PieceKind::Pawn => pawn_move_allowed(piece, prev, dest, pieces, state),
        }
    }

    fn can_attack(&self, piece: &Piece, dest: Point) -> bool {
        match piece.kind() {
            PieceKind::Pawn => {
                let Some(prev) = piece.position() else {
                    return false;
                };
                // strictly diagonal-forward-one; never straight ahead
                let (dx, _) = prev.delta(dest);
                let step = dest.y() as i16 - prev.y() as i16;
                dx == 1 && step == piece.color().forward() as i16
            }
            _ => true,
        }
    }

    fn castling_allowed(
        &self,
        king: &Piece,
        rook: &Piece,
        pieces: &PieceCollection,
        state: &GameState,
    ) -> bool {
        if king.kind() != PieceKind::King || rook.kind() != PieceKind::Rook {
            return false;
        }
        if king.color() != rook.color() {
            return false;
        }
        if state.is_used(king.id()) || state.is_used(rook.id()) {
            return false;
        }
        match (king.position(), rook.position()) {
            (Some(kp), Some(rp)) => kp.same_row(rp) && path_clear(rp, kp, pieces),
            _ => false,
        }
    }

    fn promotion_eligible(&self, piece: &Piece) -> bool {
        piece.kind() == PieceKind::Pawn
            && piece
                .position()
                .is_some_and(|p| p.y() == piece.color().promotion_row())
    }
}

/// Walks the cells strictly between `from` and `to` along their shared row,
/// column, or diagonal and reports whether all of them are free. Endpoints
/// are never inspected; adjacent cells produce an empty walk.
fn path_clear(from: Point, to: Point, pieces: &PieceCollection) -> bool {
    let sx = (to.x() as i8 - from.x() as i8).signum();
    let sy = (to.y() as i8 - from.y() as i8).signum();
    let mut cursor = from.offset(sx, sy);
    while let Some(cell) = cursor {
        if cell == to {
            return true;
        }
        if !pieces.is_available_dest(cell) {
            return false;
        }
        cursor = cell.offset(sx, sy);
    }
    true
}

fn pawn_move_allowed(
    piece: &Piece,
    prev: Point,
    dest: Point,
    pieces: &PieceCollection,
    state: &GameState,
) -> bool {
    if !prev.same_column(dest) || !pieces.is_available_dest(dest) {
        return false;
    }
    let forward = piece.color().forward();
    let step = dest.y() as i16 - prev.y() as i16;
    if step == forward as i16 {
        return true;
    }
    if step == 2 * forward as i16 && !state.is_used(piece.id()) {
        // the stepped-over cell must be free as well
        return matches!(prev.offset(0, forward), Some(mid) if pieces.is_available_dest(mid));
    }
    false
}
