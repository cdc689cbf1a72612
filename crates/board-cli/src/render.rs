//! Terminal board presentation.

use crate::config::Theme;
use board_core::{Piece, PieceId, Point, BOARD_SIZE};
use board_engine::{PieceCollection, Presenter};

/// Draws the board as an 8x8 character grid with a rank/file legend.
///
/// Ranks print top-down from black's side, the way a physical board faces
/// white. The selected piece carries the theme's highlight marker.
pub struct TermPresenter {
    theme: Theme,
    highlighted: Option<PieceId>,
}

impl TermPresenter {
    pub fn new(theme: Theme) -> Self {
        TermPresenter {
            theme,
            highlighted: None,
        }
    }

    fn cell(&self, pieces: &PieceCollection, point: Point) -> String {
        match pieces.find_by_dest(point) {
            Some(piece) => {
                let glyph = self.theme.glyph(piece.kind(), piece.color());
                if self.highlighted == Some(piece.id()) {
                    format!("{}{}", glyph, self.theme.highlight)
                } else {
                    format!("{} ", glyph)
                }
            }
            None => {
                if (point.x() + point.y()) % 2 == 0 {
                    "· ".to_string()
                } else {
                    "  ".to_string()
                }
            }
        }
    }

    fn draw(&self, pieces: &PieceCollection) -> String {
        let mut out = String::new();
        for y in (0..BOARD_SIZE).rev() {
            out.push((b'1' + y) as char);
            out.push(' ');
            for x in 0..BOARD_SIZE {
                if let Some(point) = Point::new(x, y) {
                    out.push_str(&self.cell(pieces, point));
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

impl Presenter for TermPresenter {
    fn render(&mut self, pieces: &PieceCollection) {
        print!("{}", self.draw(pieces));
    }

    fn highlight(&mut self, id: PieceId) {
        self.highlighted = Some(id);
    }

    fn reset_highlight(&mut self) {
        self.highlighted = None;
    }

    fn refresh_piece(&mut self, piece: &Piece) {
        println!("promoted: {}", piece);
    }
}
