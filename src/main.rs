mod game;
mod term;

use std::{fs::File, path::PathBuf, rc::Rc, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;

use wormle::config::{BASE_MS_PER_MOVE, MIN_MS_PER_MOVE};
use wormle::grid::Grid;
use wormle::{GameConfig, GridInt, Lexicon, WordList};

use crate::game::WormleGame;
use crate::term::TermManager;

/// Snake meets Wordle: steer the snake over letters to spell the hidden word.
#[derive(Debug, Parser)]
#[command(name = "wormle", version)]
struct Args {
    /// Board width in cells (defaults to what fits the terminal)
    #[arg(long)]
    width: Option<GridInt>,

    /// Board height in cells (defaults to what fits the terminal)
    #[arg(long)]
    height: Option<GridInt>,

    /// Milliseconds per move at the start of the game
    #[arg(long, default_value_t = BASE_MS_PER_MOVE)]
    base_ms: u64,

    /// Fastest allowed milliseconds per move
    #[arg(long, default_value_t = MIN_MS_PER_MOVE)]
    floor_ms: u64,

    /// Seed for target choice and letter placement
    #[arg(long)]
    seed: Option<u64>,

    /// Target words, whitespace separated
    #[arg(long)]
    words: Option<PathBuf>,

    /// Extra words accepted while spelling but never chosen as targets
    #[arg(long)]
    allowed: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let lexicon = Rc::new(load_lexicon(&args)?);
    let term = TermManager::new()?;
    let config = build_config(&args, term.get_terminal_size());
    config.validate().context("invalid game configuration")?;

    let mut game = WormleGame::new(config, lexicon, term);
    let result = run(&mut game);
    game.restore();
    result
}

fn run(game: &mut WormleGame) -> Result<()> {
    game.initialize()?;
    game.show_intro()?;

    loop {
        // The main game loop takes care of exiting cleanly on CTRL+C
        game.play()?;
    }
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn load_lexicon(args: &Args) -> Result<Lexicon> {
    let targets = match &args.words {
        Some(path) => WordList::load(path)?,
        None => WordList::builtin(),
    };
    let allowed = args.allowed.as_deref().map(WordList::load).transpose()?;

    Ok(Lexicon::new(targets, allowed.as_ref()))
}

/// Fits the board into the terminal. A given size is used when it fits and
/// shrunk to the terminal otherwise.
fn build_config(args: &Args, term_size: (u16, u16)) -> GameConfig {
    let defaults = GameConfig::default();
    let (cols, rows) = (term_size.0 as GridInt, term_size.1 as GridInt);

    // two columns per cell plus borders; borders and a status line below
    let (fit_width, fit_height) = ((cols - 2) / 2, rows - 4);
    let width = args.width.unwrap_or(defaults.grid.width).min(fit_width);
    let height = args.height.unwrap_or(defaults.grid.height).min(fit_height);

    GameConfig {
        grid: Grid::new(width, height),
        start: (defaults.start.0.min(width / 2), defaults.start.1.min(height / 2)),
        base_interval: Duration::from_millis(args.base_ms),
        min_interval: Duration::from_millis(args.floor_ms),
        seed: args.seed,
        ..defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("wormle").chain(extra.iter().copied()))
    }

    #[test]
    fn board_defaults_to_what_fits() {
        let config = build_config(&args(&[]), (200, 60));
        assert_eq!(config.grid, Grid::new(30, 20));

        let config = build_config(&args(&[]), (42, 16));
        assert_eq!(config.grid, Grid::new(20, 12));
        assert_eq!(config.start, (5, 5));
    }

    #[test]
    fn oversized_boards_are_capped_to_the_terminal() {
        let config = build_config(&args(&["--width", "2000000000", "--height", "70000"]), (80, 24));
        assert_eq!(config.grid, Grid::new(39, 20));
        assert!(config.validate().is_ok());
        assert_eq!(crate::game::board_size(&config), (78, 20));
    }

    #[test]
    fn smaller_boards_are_kept() {
        let config = build_config(&args(&["--width", "10", "--height", "6", "--seed", "3"]), (80, 24));
        assert_eq!(config.grid, Grid::new(10, 6));
        assert_eq!(config.start, (5, 3));
        assert_eq!(config.seed, Some(3));
    }
}
