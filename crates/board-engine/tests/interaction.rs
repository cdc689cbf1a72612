//! End-to-end click sequences through the turn state machine.

use std::cell::RefCell;
use std::rc::Rc;

use board_core::{Color, Piece, PieceId, PieceKind, Point};
use board_engine::{
    ClassicRules, ClickOutcome, EngineError, PieceCollection, Presenter, PromotionChooser,
    RuleSet, TurnManager,
};

/// Recording presenter shared with the test body through an `Rc`.
#[derive(Default, Clone)]
struct Ui(Rc<RefCell<UiLog>>);

#[derive(Default)]
struct UiLog {
    renders: usize,
    highlighted: Option<PieceId>,
    refreshed: Vec<PieceId>,
}

impl Presenter for Ui {
    fn render(&mut self, _pieces: &PieceCollection) {
        self.0.borrow_mut().renders += 1;
    }

    fn highlight(&mut self, id: PieceId) {
        self.0.borrow_mut().highlighted = Some(id);
    }

    fn reset_highlight(&mut self) {
        self.0.borrow_mut().highlighted = None;
    }

    fn refresh_piece(&mut self, piece: &Piece) {
        self.0.borrow_mut().refreshed.push(piece.id());
    }
}

/// Chooser that always answers the same thing.
struct FixedChooser(Option<PieceKind>);

impl PromotionChooser for FixedChooser {
    async fn choose(&mut self, _color: Color) -> Option<PieceKind> {
        self.0
    }
}

type Manager = TurnManager<ClassicRules, Ui, FixedChooser>;

fn manager() -> (Manager, Ui) {
    let ui = Ui::default();
    let manager = TurnManager::new(ClassicRules, ui.clone(), FixedChooser(Some(PieceKind::Queen)));
    (manager, ui)
}

fn custom(pieces: Vec<Piece>, chooser: FixedChooser) -> (Manager, Ui) {
    let ui = Ui::default();
    let manager = TurnManager::from_collection(
        ClassicRules,
        PieceCollection::new(pieces),
        ui.clone(),
        chooser,
    );
    (manager, ui)
}

fn pt(cell: &str) -> Point {
    Point::from_algebraic(cell).unwrap()
}

fn piece(id: u8, kind: PieceKind, color: Color, cell: &str) -> Piece {
    Piece::new(PieceId::new(id), kind, color, pt(cell))
}

async fn click(manager: &mut Manager, cell: &str) -> Result<ClickOutcome, EngineError> {
    let point = pt(cell);
    let occupant = manager.pieces().find_by_dest(point).map(|p| p.id());
    manager.handle_click(point, occupant).await
}

async fn must_move(manager: &mut Manager, from: &str, to: &str) {
    assert_eq!(click(manager, from).await.unwrap(), ClickOutcome::Selected);
    assert!(matches!(
        click(manager, to).await.unwrap(),
        ClickOutcome::Moved { .. }
    ));
}

fn kind_at(manager: &Manager, cell: &str) -> Option<PieceKind> {
    manager.pieces().find_by_dest(pt(cell)).map(|p| p.kind())
}

#[tokio::test]
async fn fresh_session_starts_with_white() {
    let (manager, _ui) = manager();
    assert_eq!(manager.state().turn(), Color::White);
    assert_eq!(manager.pieces().on_board_count(), 32);
}

#[tokio::test]
async fn opening_moves_alternate_turns() {
    let (mut manager, ui) = manager();

    assert_eq!(click(&mut manager, "e2").await.unwrap(), ClickOutcome::Selected);
    assert!(ui.0.borrow().highlighted.is_some());
    assert_eq!(
        click(&mut manager, "e4").await.unwrap(),
        ClickOutcome::Moved { promoted: None }
    );
    assert_eq!(kind_at(&manager, "e4"), Some(PieceKind::Pawn));
    assert_eq!(manager.state().turn(), Color::Black);

    must_move(&mut manager, "e7", "e5").await;
    assert_eq!(manager.state().turn(), Color::White);
}

#[tokio::test]
async fn pawn_double_step_is_gone_after_first_move() {
    let (mut manager, _ui) = manager();
    must_move(&mut manager, "e2", "e4").await;
    must_move(&mut manager, "a7", "a6").await;

    assert_eq!(click(&mut manager, "e4").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "e6").await.unwrap(), ClickOutcome::Rejected);
    // rejection changes nothing; the same pawn may still make the single step
    assert_eq!(manager.state().turn(), Color::White);
    assert_eq!(kind_at(&manager, "e4"), Some(PieceKind::Pawn));
    // the failed destination click dropped the selection entirely
    assert_eq!(click(&mut manager, "e5").await.unwrap(), ClickOutcome::Idle);
    must_move(&mut manager, "e4", "e5").await;
}

#[tokio::test]
async fn blocked_rook_is_rejected() {
    let (mut manager, _ui) = manager();
    assert_eq!(click(&mut manager, "a1").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "a4").await.unwrap(), ClickOutcome::Rejected);
    assert_eq!(kind_at(&manager, "a1"), Some(PieceKind::Rook));
    assert_eq!(manager.state().turn(), Color::White);
    assert_eq!(manager.pieces().on_board_count(), 32);
}

#[tokio::test]
async fn capture_removes_exactly_one_piece() {
    let (mut manager, _ui) = custom(
        vec![
            piece(0, PieceKind::King, Color::White, "e1"),
            piece(1, PieceKind::Queen, Color::White, "d1"),
            piece(2, PieceKind::King, Color::Black, "e8"),
            piece(3, PieceKind::Pawn, Color::Black, "d7"),
        ],
        FixedChooser(None),
    );
    let before = manager.pieces().on_board_count();

    assert_eq!(click(&mut manager, "d1").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(
        click(&mut manager, "d7").await.unwrap(),
        ClickOutcome::Captured { promoted: None }
    );

    assert_eq!(manager.pieces().on_board_count(), before - 1);
    assert_eq!(kind_at(&manager, "d7"), Some(PieceKind::Queen));
    assert_eq!(manager.pieces().get(PieceId::new(3)).unwrap().position(), None);
    // a completed capture clears the selection fields
    assert_eq!(manager.state().selected(), None);
    assert_eq!(manager.state().was_selected(), None);
    assert_eq!(manager.state().turn(), Color::Black);
}

#[tokio::test]
async fn pawn_cannot_capture_straight_ahead() {
    let (mut manager, _ui) = custom(
        vec![
            piece(0, PieceKind::King, Color::White, "e1"),
            piece(1, PieceKind::Pawn, Color::White, "e2"),
            piece(2, PieceKind::King, Color::Black, "e8"),
            piece(3, PieceKind::Pawn, Color::Black, "e3"),
        ],
        FixedChooser(None),
    );
    assert_eq!(click(&mut manager, "e2").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "e3").await.unwrap(), ClickOutcome::Rejected);
    assert_eq!(manager.pieces().on_board_count(), 4);
}

#[tokio::test]
async fn pawn_captures_diagonally() {
    let (mut manager, _ui) = custom(
        vec![
            piece(0, PieceKind::King, Color::White, "e1"),
            piece(1, PieceKind::Pawn, Color::White, "e2"),
            piece(2, PieceKind::King, Color::Black, "e8"),
            piece(3, PieceKind::Knight, Color::Black, "f3"),
        ],
        FixedChooser(None),
    );
    assert_eq!(click(&mut manager, "e2").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(
        click(&mut manager, "f3").await.unwrap(),
        ClickOutcome::Captured { promoted: None }
    );
    assert_eq!(kind_at(&manager, "f3"), Some(PieceKind::Pawn));
}

#[tokio::test]
async fn same_color_non_castle_interaction_is_a_noop() {
    let (mut manager, _ui) = manager();
    assert_eq!(click(&mut manager, "d1").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "d2").await.unwrap(), ClickOutcome::Rejected);
    assert_eq!(kind_at(&manager, "d1"), Some(PieceKind::Queen));
    assert_eq!(kind_at(&manager, "d2"), Some(PieceKind::Pawn));
    assert_eq!(manager.state().turn(), Color::White);

    // the rejected click selected the pawn, which may move next
    assert_eq!(
        click(&mut manager, "d4").await.unwrap(),
        ClickOutcome::Moved { promoted: None }
    );
}

#[tokio::test]
async fn kingside_castle_from_the_opening() {
    let (mut manager, _ui) = manager();
    must_move(&mut manager, "g1", "f3").await;
    must_move(&mut manager, "a7", "a6").await;
    must_move(&mut manager, "e2", "e3").await;
    must_move(&mut manager, "b7", "b6").await;
    must_move(&mut manager, "f1", "e2").await;
    must_move(&mut manager, "c7", "c6").await;

    assert_eq!(click(&mut manager, "e1").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "h1").await.unwrap(), ClickOutcome::Castled);
    assert_eq!(kind_at(&manager, "g1"), Some(PieceKind::King));
    assert_eq!(kind_at(&manager, "f1"), Some(PieceKind::Rook));
    assert!(manager.pieces().is_available_dest(pt("e1")));
    assert!(manager.pieces().is_available_dest(pt("h1")));
    assert_eq!(manager.state().turn(), Color::Black);
}

#[tokio::test]
async fn queenside_castle_from_the_opening() {
    let (mut manager, _ui) = manager();
    must_move(&mut manager, "b1", "a3").await;
    must_move(&mut manager, "a7", "a6").await;
    must_move(&mut manager, "d2", "d3").await;
    must_move(&mut manager, "b7", "b6").await;
    must_move(&mut manager, "c1", "e3").await;
    must_move(&mut manager, "c7", "c6").await;
    must_move(&mut manager, "d1", "d2").await;
    must_move(&mut manager, "d7", "d6").await;

    assert_eq!(click(&mut manager, "e1").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "a1").await.unwrap(), ClickOutcome::Castled);
    assert_eq!(kind_at(&manager, "c1"), Some(PieceKind::King));
    assert_eq!(kind_at(&manager, "d1"), Some(PieceKind::Rook));
}

#[tokio::test]
async fn castle_rejected_after_king_moved() {
    let (mut manager, _ui) = custom(
        vec![
            piece(0, PieceKind::King, Color::White, "e1"),
            piece(1, PieceKind::Rook, Color::White, "h1"),
            piece(2, PieceKind::King, Color::Black, "e8"),
        ],
        FixedChooser(None),
    );
    must_move(&mut manager, "e1", "e2").await;
    must_move(&mut manager, "e8", "e7").await;
    must_move(&mut manager, "e2", "e1").await;
    must_move(&mut manager, "e7", "e8").await;

    assert_eq!(click(&mut manager, "e1").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "h1").await.unwrap(), ClickOutcome::Rejected);
    assert_eq!(kind_at(&manager, "e1"), Some(PieceKind::King));
    assert_eq!(kind_at(&manager, "h1"), Some(PieceKind::Rook));
}

#[tokio::test]
async fn promotion_applies_the_chosen_kind() {
    let (mut manager, ui) = custom(
        vec![
            piece(0, PieceKind::King, Color::White, "e1"),
            piece(1, PieceKind::Pawn, Color::White, "a7"),
            piece(2, PieceKind::King, Color::Black, "h8"),
        ],
        FixedChooser(Some(PieceKind::Queen)),
    );
    assert_eq!(click(&mut manager, "a7").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(
        click(&mut manager, "a8").await.unwrap(),
        ClickOutcome::Moved {
            promoted: Some(PieceKind::Queen)
        }
    );
    let promoted = manager.pieces().get(PieceId::new(1)).unwrap();
    assert_eq!(promoted.kind(), PieceKind::Queen);
    assert_eq!(promoted.position(), Some(pt("a8")));
    assert_eq!(ui.0.borrow().refreshed, vec![PieceId::new(1)]);
    // the turn switch is committed before the promotion step
    assert_eq!(manager.state().turn(), Color::Black);
}

#[tokio::test]
async fn dismissed_promotion_keeps_the_pawn() {
    let (mut manager, ui) = custom(
        vec![
            piece(0, PieceKind::King, Color::White, "e1"),
            piece(1, PieceKind::Pawn, Color::White, "a7"),
            piece(2, PieceKind::King, Color::Black, "h8"),
        ],
        FixedChooser(None),
    );
    assert_eq!(click(&mut manager, "a7").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(
        click(&mut manager, "a8").await.unwrap(),
        ClickOutcome::Moved { promoted: None }
    );
    let pawn = manager.pieces().get(PieceId::new(1)).unwrap();
    assert_eq!(pawn.kind(), PieceKind::Pawn);
    assert_eq!(pawn.position(), Some(pt("a8")));
    assert!(ui.0.borrow().refreshed.is_empty());
    assert_eq!(manager.state().turn(), Color::Black);
}

#[tokio::test]
async fn capture_onto_the_last_row_promotes() {
    let (mut manager, _ui) = custom(
        vec![
            piece(0, PieceKind::King, Color::White, "e1"),
            piece(1, PieceKind::Pawn, Color::White, "b7"),
            piece(2, PieceKind::King, Color::Black, "h8"),
            piece(3, PieceKind::Rook, Color::Black, "a8"),
        ],
        FixedChooser(Some(PieceKind::Knight)),
    );
    assert_eq!(click(&mut manager, "b7").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(
        click(&mut manager, "a8").await.unwrap(),
        ClickOutcome::Captured {
            promoted: Some(PieceKind::Knight)
        }
    );
    assert_eq!(kind_at(&manager, "a8"), Some(PieceKind::Knight));
    assert_eq!(manager.pieces().get(PieceId::new(3)).unwrap().position(), None);
}

#[tokio::test]
async fn out_of_turn_selection_aborts_without_mutation() {
    let (mut manager, ui) = manager();

    // the guard only sees the previous selection, so the first click passes
    assert_eq!(click(&mut manager, "a7").await.unwrap(), ClickOutcome::Selected);
    let err = click(&mut manager, "a6").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::OutOfTurn {
            selected: Color::Black,
            turn: Color::White,
        }
    );
    assert_eq!(kind_at(&manager, "a7"), Some(PieceKind::Pawn));
    assert!(manager.pieces().is_available_dest(pt("a6")));
    assert_eq!(manager.state().turn(), Color::White);
    assert_eq!(ui.0.borrow().highlighted, None);
}

#[tokio::test]
async fn empty_cell_click_with_no_selection_is_idle() {
    let (mut manager, _ui) = manager();
    assert_eq!(click(&mut manager, "d4").await.unwrap(), ClickOutcome::Idle);
}

#[tokio::test]
async fn unknown_occupant_id_is_a_protocol_violation() {
    let (mut manager, _ui) = manager();
    let err = manager
        .handle_click(pt("d4"), Some(PieceId::new(99)))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownPiece(PieceId::new(99)));
}

#[tokio::test]
async fn successful_moves_rerender() {
    let (mut manager, ui) = manager();
    must_move(&mut manager, "e2", "e4").await;
    assert_eq!(ui.0.borrow().renders, 1);
    assert_eq!(click(&mut manager, "e7").await.unwrap(), ClickOutcome::Selected);
    assert_eq!(click(&mut manager, "d5").await.unwrap(), ClickOutcome::Rejected);
    // rejections do not re-render
    assert_eq!(ui.0.borrow().renders, 1);
}

#[tokio::test]
async fn initial_collection_via_ruleset() {
    // the session layout comes from the rule set, never from the manager
    let pieces = ClassicRules.initial_collection();
    assert_eq!(pieces.len(), 32);
}
