//! The turn state machine.
//!
//! [`TurnManager`] owns the whole session and exposes a single entry point,
//! [`handle_click`](TurnManager::handle_click), which resolves one cell
//! interaction into a board mutation, a fresh selection, or a silent
//! rejection. Evaluation is level-triggered: every click re-interprets the
//! full session snapshot (`was_selected`, `selected`, `dest`, `turn`) from
//! scratch instead of stepping an explicit transition table.

use crate::boundary::{Presenter, PromotionChooser};
use crate::rules::RuleSet;
use crate::{ActionManager, GameState, PieceCollection};
use board_core::{Color, Piece, PieceId, PieceKind, Point};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the turn state machine.
///
/// Both variants indicate a defect in the layer feeding input events, not a
/// user-recoverable game condition: the input layer must only hand over ids
/// it obtained from the collection, and an out-of-turn mover means its
/// filtering failed. Illegal moves are not errors; they resolve to
/// [`ClickOutcome::Rejected`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A piece of the wrong color reached the state machine as the
    /// previously selected mover.
    #[error("{selected} piece selected while {turn} is to move")]
    OutOfTurn { selected: Color, turn: Color },
    /// An id that does not resolve to any piece in the collection.
    #[error("no piece with id {0}")]
    UnknownPiece(PieceId),
}

/// What a cell interaction resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click on an empty cell with no prior selection.
    Idle,
    /// The clicked occupant became the current selection.
    Selected,
    /// The proposed action failed a rule check; nothing changed.
    Rejected,
    /// A piece moved to an empty cell, possibly promoting on arrival.
    Moved { promoted: Option<PieceKind> },
    /// A piece captured an opponent, possibly promoting on arrival.
    Captured { promoted: Option<PieceKind> },
    /// King and rook castled.
    Castled,
}

/// The fixed two-color rotation driving turn order.
///
/// A fresh rotation yields White first, then alternates forever.
#[derive(Debug, Clone)]
pub struct TurnOrder {
    index: usize,
}

impl TurnOrder {
    const ORDER: [Color; 2] = [Color::Black, Color::White];

    /// Creates a rotation positioned before its first yield.
    pub fn new() -> Self {
        TurnOrder { index: 0 }
    }

    /// Advances the rotation and returns the next side to move.
    pub fn next_turn(&mut self) -> Color {
        self.index += 1;
        Self::ORDER[self.index % 2]
    }
}

impl Default for TurnOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TurnOrder {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        Some(self.next_turn())
    }
}

/// The orchestrating state machine of a session.
///
/// Owns the session state, the piece collection, the rule set, and the
/// presentation boundary. All mutations flow through [`ActionManager`];
/// all legality decisions flow through the rule set.
pub struct TurnManager<R, P, C> {
    state: GameState,
    pieces: PieceCollection,
    rules: R,
    actions: ActionManager,
    ordering: TurnOrder,
    presenter: P,
    chooser: C,
}

impl<R, P, C> TurnManager<R, P, C>
where
    R: RuleSet,
    P: Presenter,
    C: PromotionChooser,
{
    /// Creates a session with the rule set's starting layout.
    pub fn new(rules: R, presenter: P, chooser: C) -> Self {
        let pieces = rules.initial_collection();
        Self::from_collection(rules, pieces, presenter, chooser)
    }

    /// Creates a session over a custom layout.
    pub fn from_collection(
        rules: R,
        pieces: PieceCollection,
        presenter: P,
        chooser: C,
    ) -> Self {
        let mut ordering = TurnOrder::new();
        let state = GameState::new(ordering.next_turn());
        TurnManager {
            state,
            pieces,
            rules,
            actions: ActionManager,
            ordering,
            presenter,
            chooser,
        }
    }

    /// Returns the piece collection.
    pub fn pieces(&self) -> &PieceCollection {
        &self.pieces
    }

    /// Returns the session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Redraws the whole board through the presenter.
    pub fn refresh(&mut self) {
        self.presenter.render(&self.pieces);
    }

    /// Resolves one cell interaction.
    ///
    /// `dest` is the clicked cell and `occupant` the identity of the piece
    /// on it, if any. On success the board is mutated, the turn advances,
    /// and the promotion step may suspend on the chooser. Illegal proposals
    /// return [`ClickOutcome::Rejected`] and change nothing.
    pub async fn handle_click(
        &mut self,
        dest: Point,
        occupant: Option<PieceId>,
    ) -> Result<ClickOutcome, EngineError> {
        self.state.update(dest, occupant);

        let mover = self.resolve(self.state.was_selected())?;
        let clicked = self.resolve(self.state.selected())?;

        // an out-of-turn mover means the input layer let a selection
        // through that it must filter; abort this evaluation
        if let Some(mover) = &mover {
            if mover.color() != self.state.turn() {
                self.presenter.reset_highlight();
                return Err(EngineError::OutOfTurn {
                    selected: mover.color(),
                    turn: self.state.turn(),
                });
            }
        }

        match self.state.selected() {
            Some(id) => self.presenter.highlight(id),
            None => self.presenter.reset_highlight(),
        }

        let Some(mover) = mover else {
            return Ok(if clicked.is_some() {
                ClickOutcome::Selected
            } else {
                ClickOutcome::Idle
            });
        };

        let outcome = match clicked {
            None => self.resolve_move(&mover, dest).await?,
            Some(target) if target.color() != mover.color() => {
                self.resolve_capture(&mover, &target, dest).await?
            }
            Some(target) => self.resolve_castle(&mover, &target).await?,
        };
        debug!(%dest, ?outcome, "cell interaction resolved");
        Ok(outcome)
    }

    fn resolve(&self, id: Option<PieceId>) -> Result<Option<Piece>, EngineError> {
        match id {
            Some(id) => match self.pieces.get(id) {
                Some(piece) => Ok(Some(piece.clone())),
                None => Err(EngineError::UnknownPiece(id)),
            },
            None => Ok(None),
        }
    }

    /// Movement strategy: the destination cell is empty.
    async fn resolve_move(
        &mut self,
        mover: &Piece,
        dest: Point,
    ) -> Result<ClickOutcome, EngineError> {
        if !self.rules.check_move(mover, dest, &self.pieces, &self.state) {
            return Ok(ClickOutcome::Rejected);
        }
        self.actions.move_piece(&mut self.pieces, mover.id(), dest)?;
        self.state.mark_used(mover.id());
        let promoted = self.finish_action(mover.id()).await?;
        Ok(ClickOutcome::Moved { promoted })
    }

    /// Interaction strategy, opposing occupant: pawns capture with their
    /// own geometry, every other kind with its movement shape.
    async fn resolve_capture(
        &mut self,
        mover: &Piece,
        target: &Piece,
        dest: Point,
    ) -> Result<ClickOutcome, EngineError> {
        let allowed = match mover.kind() {
            PieceKind::Pawn => self.rules.can_attack(mover, dest),
            _ => self.rules.check_move(mover, dest, &self.pieces, &self.state),
        };
        if !allowed {
            return Ok(ClickOutcome::Rejected);
        }
        self.actions
            .kill(&mut self.pieces, &mut self.state, mover.id(), target.id(), dest)?;
        self.state.mark_used(mover.id());
        let promoted = self.finish_action(mover.id()).await?;
        Ok(ClickOutcome::Captured { promoted })
    }

    /// Interaction strategy, same-color occupant: castling is the only
    /// legal interaction; anything else is a silent rejection.
    async fn resolve_castle(
        &mut self,
        mover: &Piece,
        clicked: &Piece,
    ) -> Result<ClickOutcome, EngineError> {
        if !self
            .rules
            .castling_allowed(mover, clicked, &self.pieces, &self.state)
        {
            return Ok(ClickOutcome::Rejected);
        }
        self.actions.castle(&mut self.pieces, clicked.id(), mover.id())?;
        self.state.mark_used(mover.id());
        self.state.mark_used(clicked.id());
        // the mover is a king here, so the promotion step never fires
        self.finish_action(mover.id()).await?;
        Ok(ClickOutcome::Castled)
    }

    /// Commits the post-action sequence: turn switch and re-render first,
    /// then the promotion step, which may suspend on the chooser.
    async fn finish_action(&mut self, mover: PieceId) -> Result<Option<PieceKind>, EngineError> {
        self.switch_turn();
        self.presenter.render(&self.pieces);

        let piece = self
            .pieces
            .get(mover)
            .ok_or(EngineError::UnknownPiece(mover))?;
        if !self.rules.promotion_eligible(piece) {
            return Ok(None);
        }
        let color = piece.color();
        let Some(kind) = self.chooser.choose(color).await else {
            debug!(%mover, "promotion dismissed, pawn keeps its kind");
            return Ok(None);
        };
        // a kind outside the promotion set counts as a dismissal
        if !kind.is_promotion_choice() {
            return Ok(None);
        }
        self.actions.promote(&mut self.pieces, mover, kind)?;
        if let Some(piece) = self.pieces.get(mover) {
            self.presenter.refresh_piece(piece);
        }
        Ok(Some(kind))
    }

    fn switch_turn(&mut self) {
        let turn = self.ordering.next_turn();
        self.state.set_turn(turn);
    }
}
