//! Board piece entities.

use crate::{Color, PieceKind, Point};
use std::fmt;

/// Stable identity of a piece, assigned once at game setup.
///
/// Captured pieces keep their id; it is the key used to remember which
/// pieces have moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u8);

impl PieceId {
    /// Creates an id from its raw index.
    #[inline]
    pub const fn new(index: u8) -> Self {
        PieceId(index)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a piece currently is.
///
/// A captured piece is never deleted from the collection, only marked
/// `Captured`, so its identity stays valid for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The piece occupies a cell on the board.
    OnBoard(Point),
    /// The piece has been captured and removed from play.
    Captured,
}

/// A mutable board entity.
///
/// Pieces are created once at game setup and mutated in place afterwards:
/// position changes on moves, placement becomes [`Placement::Captured`] on
/// capture, and kind changes exactly once on promotion.
#[derive(Debug, Clone)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    placement: Placement,
}

impl Piece {
    /// Creates a piece on the given cell.
    pub const fn new(id: PieceId, kind: PieceKind, color: Color, position: Point) -> Self {
        Piece {
            id,
            kind,
            color,
            placement: Placement::OnBoard(position),
        }
    }

    /// Returns this piece's identity.
    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Returns the kind of this piece.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the owning color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the current placement.
    #[inline]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns the occupied cell, or `None` if the piece has been captured.
    #[inline]
    pub const fn position(&self) -> Option<Point> {
        match self.placement {
            Placement::OnBoard(p) => Some(p),
            Placement::Captured => None,
        }
    }

    /// Returns true if the piece is still in play.
    #[inline]
    pub const fn is_on_board(&self) -> bool {
        matches!(self.placement, Placement::OnBoard(_))
    }

    /// Relocates the piece to the given cell.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.placement = Placement::OnBoard(position);
    }

    /// Removes the piece from play.
    #[inline]
    pub fn capture(&mut self) {
        self.placement = Placement::Captured;
    }

    /// Changes the kind of this piece. Promotion is the only caller.
    #[inline]
    pub fn set_kind(&mut self, kind: PieceKind) {
        self.kind = kind;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(p) => write!(f, "{} {} at {}", self.color, self.kind, p),
            None => write!(f, "captured {} {}", self.color, self.kind),
        }
    }
}
