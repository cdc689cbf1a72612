//! The authoritative set of pieces.

use board_core::{Piece, PieceId, Point};

/// Owns every piece of a session, captured ones included.
///
/// All positional queries go through this collection. Pieces are never
/// removed from it; a captured piece simply stops answering occupancy
/// queries. With at most 32 entries every query is a plain scan.
#[derive(Debug, Clone)]
pub struct PieceCollection {
    pieces: Vec<Piece>,
}

impl PieceCollection {
    /// Creates a collection from an already laid out set of pieces.
    pub fn new(pieces: Vec<Piece>) -> Self {
        PieceCollection { pieces }
    }

    /// Returns the piece with the given id.
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    /// Returns the piece with the given id for mutation.
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    /// Returns true if no on-board piece occupies the given cell.
    pub fn is_available_dest(&self, point: Point) -> bool {
        self.find_by_dest(point).is_none()
    }

    /// Returns the on-board piece occupying the given cell, if any.
    pub fn find_by_dest(&self, point: Point) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == Some(point))
    }

    /// Iterates over every piece, captured ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Iterates over the pieces still in play.
    pub fn on_board(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_on_board())
    }

    /// Returns how many pieces are still in play.
    pub fn on_board_count(&self) -> usize {
        self.on_board().count()
    }

    /// Returns the total number of pieces, captured ones included.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if the collection holds no pieces at all.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
