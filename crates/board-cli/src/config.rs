//! Glyph theme configuration for the terminal board.
//!
//! Themes map each piece kind and color to the glyph drawn on the board.
//! The built-in theme uses the unicode chess figurines; a TOML file can
//! replace any part of it.

use board_core::{Color, PieceKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing a theme file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the theme file from disk.
    #[error("failed to read theme file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the theme file as valid TOML.
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Glyphs for one side's pieces.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SideGlyphs {
    pub king: String,
    pub queen: String,
    pub rook: String,
    pub bishop: String,
    pub knight: String,
    pub pawn: String,
}

impl SideGlyphs {
    fn get(&self, kind: PieceKind) -> &str {
        match kind {
            PieceKind::King => &self.king,
            PieceKind::Queen => &self.queen,
            PieceKind::Rook => &self.rook,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Knight => &self.knight,
            PieceKind::Pawn => &self.pawn,
        }
    }
}

fn default_white() -> SideGlyphs {
    SideGlyphs {
        king: "♔".to_string(),
        queen: "♕".to_string(),
        rook: "♖".to_string(),
        bishop: "♗".to_string(),
        knight: "♘".to_string(),
        pawn: "♙".to_string(),
    }
}

fn default_black() -> SideGlyphs {
    SideGlyphs {
        king: "♚".to_string(),
        queen: "♛".to_string(),
        rook: "♜".to_string(),
        bishop: "♝".to_string(),
        knight: "♞".to_string(),
        pawn: "♟".to_string(),
    }
}

fn default_highlight() -> String {
    "*".to_string()
}

/// Board theme: the glyph for each piece and the selection marker.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Theme {
    #[serde(default = "default_white")]
    pub white: SideGlyphs,
    #[serde(default = "default_black")]
    pub black: SideGlyphs,
    /// Marker appended to the currently selected piece.
    #[serde(default = "default_highlight")]
    pub highlight: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            white: default_white(),
            black: default_black(),
            highlight: default_highlight(),
        }
    }
}

fn ascii_side(color: Color) -> SideGlyphs {
    let glyph = |kind: PieceKind| {
        let c = kind.to_char();
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
        .to_string()
    };
    SideGlyphs {
        king: glyph(PieceKind::King),
        queen: glyph(PieceKind::Queen),
        rook: glyph(PieceKind::Rook),
        bishop: glyph(PieceKind::Bishop),
        knight: glyph(PieceKind::Knight),
        pawn: glyph(PieceKind::Pawn),
    }
}

impl Theme {
    /// Plain-letter theme for terminals without the chess figurines:
    /// uppercase for white, lowercase for black.
    pub fn ascii() -> Self {
        Theme {
            white: ascii_side(Color::White),
            black: ascii_side(Color::Black),
            highlight: default_highlight(),
        }
    }

    /// Loads a theme from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Returns the glyph for a piece.
    pub fn glyph(&self, kind: PieceKind, color: Color) -> &str {
        match color {
            Color::White => self.white.get(kind),
            Color::Black => self.black.get(kind),
        }
    }
}
