//! Board cell coordinates.

use std::fmt;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: u8 = 8;

/// A cell on the board.
///
/// `x` is the column and `y` the row, both in `0..8`. White pieces advance
/// toward higher rows, black pieces toward lower rows. The algebraic form
/// maps files a-h to `x` and ranks 1-8 to `y`, so `"e2"` is `(4, 1)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: u8,
    y: u8,
}

impl Point {
    /// Creates a point, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Point { x, y })
        } else {
            None
        }
    }

    /// Parses a cell from algebraic notation (e.g., "e2").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Point::new(file - b'a', rank - b'1')
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the absolute column and row distance to `other`.
    #[inline]
    pub const fn delta(self, other: Point) -> (u8, u8) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// Returns true if both points share a row.
    #[inline]
    pub const fn same_row(self, other: Point) -> bool {
        self.y == other.y
    }

    /// Returns true if both points share a column.
    #[inline]
    pub const fn same_column(self, other: Point) -> bool {
        self.x == other.x
    }

    /// Returns true if both points lie on a common diagonal.
    #[inline]
    pub const fn diagonal_to(self, other: Point) -> bool {
        self.x.abs_diff(other.x) == self.y.abs_diff(other.y)
    }

    /// Returns the point shifted by the given signed offsets, or `None` if
    /// the result leaves the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if x < 0 || y < 0 || x >= BOARD_SIZE as i16 || y >= BOARD_SIZE as i16 {
            return None;
        }
        Point::new(x as u8, y as u8)
    }

    /// Returns the algebraic notation for this cell.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.x) as char, (b'1' + self.y) as char)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", self.to_algebraic())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
