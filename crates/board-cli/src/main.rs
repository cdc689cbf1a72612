//! Interactive two-player chess at the terminal.
//!
//! Each line of input is one "click": a cell reference like `e2`. The first
//! click of a pair selects a piece, the second one picks its destination.
//! Two players share the keyboard; a promoting pawn asks for a letter.

mod config;
mod render;

use board_core::{Color, PieceKind, Point};
use board_engine::{ClassicRules, ClickOutcome, PromotionChooser, TurnManager};
use clap::Parser;
use config::Theme;
use render::TermPresenter;
use std::io::Write as _;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "board-cli")]
#[command(about = "Two-player chess driven by cell clicks")]
struct Cli {
    /// Theme file (TOML) overriding the built-in glyphs
    #[arg(short, long)]
    theme: Option<PathBuf>,
    /// Use plain letters instead of the unicode figurines
    #[arg(long, conflicts_with = "theme")]
    ascii: bool,
}

/// Asks for the promotion kind on stdin; an empty line keeps the pawn.
struct StdinChooser;

impl PromotionChooser for StdinChooser {
    async fn choose(&mut self, color: Color) -> Option<PieceKind> {
        print!(
            "{} pawn promotes to [q/r/n/b, empty line keeps the pawn]: ",
            color
        );
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return None;
        }
        let kind = line.trim().chars().next().and_then(PieceKind::from_char)?;
        kind.is_promotion_choice().then_some(kind)
    }
}

fn describe(outcome: ClickOutcome) -> &'static str {
    match outcome {
        ClickOutcome::Idle => "nothing there",
        ClickOutcome::Selected => "selected",
        ClickOutcome::Rejected => "not a legal move",
        ClickOutcome::Moved { .. } => "moved",
        ClickOutcome::Captured { .. } => "captured",
        ClickOutcome::Castled => "castled",
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let theme = match cli.theme {
        Some(path) => Theme::load(&path).expect("failed to load theme"),
        None if cli.ascii => Theme::ascii(),
        None => Theme::default(),
    };

    let presenter = TermPresenter::new(theme);
    let mut manager = TurnManager::new(ClassicRules, presenter, StdinChooser);
    manager.refresh();

    loop {
        print!("{} to move > ", manager.state().turn());
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "stdin read failed");
                break;
            }
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        let Some(point) = Point::from_algebraic(input) else {
            println!("unrecognized cell (use e.g. e2)");
            continue;
        };
        let occupant = manager.pieces().find_by_dest(point).map(|p| p.id());
        match manager.handle_click(point, occupant).await {
            Ok(outcome) => println!("{}: {}", point, describe(outcome)),
            // the engine treats this as a wiring defect; at a shared
            // keyboard it just means the wrong side was picked up
            Err(err) => println!("{}", err),
        }
    }
}
