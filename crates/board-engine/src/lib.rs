//! Move-legality engine and turn state machine for a click-driven chess board.
//!
//! This crate provides:
//! - [`PieceCollection`] - the authoritative set of pieces with occupancy queries
//! - [`GameState`] - turn, selection, and moved-piece tracking
//! - [`RuleSet`] - trait for move/attack/castling/promotion legality, with
//!   [`ClassicRules`] as the standard implementation
//! - [`TurnManager`] - the state machine resolving clicked cells into board
//!   mutations
//! - [`ActionManager`] - the mutation executor for validated decisions
//! - [`Presenter`] and [`PromotionChooser`] - boundary traits for the
//!   presentation layer
//!
//! # Architecture
//!
//! All work is triggered by one kind of external event: a cell interaction
//! delivered as a destination point plus the identity of its occupant, if any.
//! [`TurnManager::handle_click`] re-evaluates the full session snapshot on
//! every event, asks the rule set whether the implied move, capture, or castle
//! is legal, applies it through the action manager on success, and advances
//! the turn. Illegal proposals are silent no-ops; only wiring defects in the
//! input layer surface as errors.
//!
//! # Example
//!
//! ```no_run
//! use board_core::Point;
//! use board_engine::{ClassicRules, TurnManager};
//! # use board_engine::{Presenter, PromotionChooser, PieceCollection};
//! # use board_core::{Color, Piece, PieceId, PieceKind};
//! # struct NoUi;
//! # impl Presenter for NoUi {
//! #     fn render(&mut self, _: &PieceCollection) {}
//! #     fn highlight(&mut self, _: PieceId) {}
//! #     fn reset_highlight(&mut self) {}
//! #     fn refresh_piece(&mut self, _: &Piece) {}
//! # }
//! # impl PromotionChooser for NoUi {
//! #     async fn choose(&mut self, _: Color) -> Option<PieceKind> { None }
//! # }
//!
//! # async fn run() -> Result<(), board_engine::EngineError> {
//! let mut manager = TurnManager::new(ClassicRules, NoUi, NoUi);
//!
//! // White clicks the e2 pawn, then the empty e4 cell.
//! let e2 = Point::from_algebraic("e2").unwrap();
//! let e4 = Point::from_algebraic("e4").unwrap();
//! let pawn = manager.pieces().find_by_dest(e2).map(|p| p.id());
//! manager.handle_click(e2, pawn).await?;
//! manager.handle_click(e4, None).await?;
//! # Ok(())
//! # }
//! ```

mod actions;
mod boundary;
mod collection;
pub mod rules;
mod state;
mod turn;

pub use actions::ActionManager;
pub use boundary::{Presenter, PromotionChooser};
pub use collection::PieceCollection;
pub use rules::{ClassicRules, RuleSet};
pub use state::GameState;
pub use turn::{ClickOutcome, EngineError, TurnManager, TurnOrder};
