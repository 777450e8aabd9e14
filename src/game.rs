use std::{process::exit, rc::Rc, thread::sleep, time::{Duration, Instant}};

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use crossterm::style::Color;
use tracing::info;

use wormle::session::{SegmentView, TileView};
use wormle::{Direction::{self, *}, GameConfig, GameState, LetterTag, Lexicon, LossCause, Session, Snapshot};

use crate::term::{TermCoords, TermManager};

const FRAME_INTERVAL_MS: u64 = 5;

const BORDER_GREY: Color = Color::Rgb { r: 135, g: 138, b: 140 };

pub struct WormleGame {
    config: GameConfig,
    lexicon: Rc<Lexicon>,
    paused: bool,
    round: u64,
    term: TermManager,
}

impl WormleGame {
    pub fn new(config: GameConfig, lexicon: Rc<Lexicon>, term: TermManager) -> Self {
        WormleGame { config, lexicon, paused: false, round: 0, term }
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()
    }

    pub fn show_intro(&mut self) -> Result<()> {
        let lines = &[
            "Spell the hidden word by eating letters",
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            self.clean_exit()
        }

        self.term.hide_message()
    }

    pub fn play(&mut self) -> Result<()> {
        // a fixed seed still gives a different board every round
        let config = GameConfig {
            seed: self.config.seed.map(|seed| seed.wrapping_add(self.round)),
            ..self.config.clone()
        };
        self.round += 1;
        self.paused = false;

        let mut session = Session::new(config, Rc::clone(&self.lexicon))?;
        let (width, height) = board_size(&self.config);

        self.term.clear()?;
        self.term.draw_borders(width, height)?;
        self.draw(&session.snapshot())?;

        // game time only advances while unpaused
        let mut game_time = Duration::ZERO;
        let mut last_frame = Instant::now();

        loop {
            sleep(Duration::from_millis(FRAME_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match &key_ev {
                    ev if is_ctrl_c(ev) => self.clean_exit(),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => self.steer(&mut session, Up),
                        KeyCode::Char('a') | KeyCode::Left => self.steer(&mut session, Left),
                        KeyCode::Char('s') | KeyCode::Down => self.steer(&mut session, Down),
                        KeyCode::Char('d') | KeyCode::Right => self.steer(&mut session, Right),
                        KeyCode::Esc => self.toggle_pause(&session)?,
                        _ => {}
                    }
                }
            }

            let now = Instant::now();
            if !self.paused {
                game_time += now - last_frame;
            }
            last_frame = now;

            if self.paused { continue; }

            if session.on_frame(game_time)?.is_some() {
                let snapshot = session.snapshot();
                self.draw(&snapshot)?;

                if snapshot.state != GameState::Running {
                    self.game_over(&session, &snapshot)?;
                    break;
                }
            }
        } // Game loop

        // Quit if the user CTRL+C's after the game
        if is_ctrl_c(&self.term.read_key_blocking()?) {
            self.clean_exit()
        }

        Ok(())
    }

    pub fn restore(&mut self) {
        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clean_exit(&mut self) -> ! {
        self.term.restore();
        exit(0);
    }

    fn steer(&self, session: &mut Session, direction: Direction) {
        if !self.paused {
            session.steer(direction);
        }
    }

    fn game_over(&mut self, session: &Session, snapshot: &Snapshot) -> Result<()> {
        let headline = match snapshot.state {
            GameState::Won => "You win!",
            _ => "You lose!",
        };
        let reason = match snapshot.state {
            GameState::Lost(LossCause::SelfCollision) => "You ran into yourself".to_string(),
            GameState::Lost(LossCause::OutOfBounds) => "You left the board".to_string(),
            GameState::Lost(LossCause::IllegalLetter(letter)) => format!("No word continues with {}", letter),
            GameState::Lost(LossCause::BoardFull) => "The board is full".to_string(),
            _ => format!("Solved after {} guesses", snapshot.guesses_made + 1),
        };
        let word = format!("The word was {}", session.target());

        info!(state = ?snapshot.state, guesses = snapshot.guesses_made, "game over");

        self.term.show_message(&[
            headline,
            reason.as_str(),
            word.as_str(),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])
    }

    fn draw(&mut self, snapshot: &Snapshot) -> Result<()> {
        let (width, height) = board_size(&self.config);

        let blank = " ".repeat(width as usize);
        for y in 1..=height {
            self.term.print_colored_at((1, y), &blank, Color::Reset, Color::Reset)?;
        }

        for tile in &snapshot.tiles {
            self.print_tile(tile)?;
        }

        for segment in &snapshot.segments {
            self.print_segment(segment)?;
        }

        let guess: String = snapshot.segments.iter()
            .filter(|seg| seg.in_current_guess)
            .filter_map(|seg| seg.letter)
            .collect();
        let status = format!(
            "Guess {}: {:_<len$}   Guesses: {}   Speed: {}ms",
            snapshot.guesses_made + 1,
            guess,
            snapshot.guesses_made,
            snapshot.interval.as_millis(),
            len = snapshot.target_len,
        );
        self.term.print_line(height + 2, &status)?;

        self.term.flush()
    }

    fn print_tile(&mut self, tile: &TileView) -> Result<()> {
        let pos = cell_origin(tile.pos);
        if tile.legal {
            let text = format!("{} ", tile.letter);
            self.term.print_colored_at(pos, &text, text_color(tile.status), tag_color(tile.status))
        } else {
            // illegal letters are shown hatched
            let text = format!("{}/", tile.letter.to_ascii_lowercase());
            self.term.print_colored_at(pos, &text, Color::Black, tag_color(tile.status))
        }
    }

    fn print_segment(&mut self, segment: &SegmentView) -> Result<()> {
        let pos = cell_origin(segment.pos);
        let letter = segment.letter.unwrap_or(' ');
        let text = if segment.in_current_guess {
            format!("{}.", letter)
        } else {
            format!("{} ", letter)
        };
        self.term.print_colored_at(pos, &text, text_color(segment.tag), tag_color(segment.tag))
    }

    fn toggle_pause(&mut self, session: &Session) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
            let (width, height) = board_size(&self.config);
            self.term.draw_borders(width, height)?;
            self.draw(&session.snapshot())?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

/// Board area in terminal cells; every grid cell is two columns wide.
pub fn board_size(config: &GameConfig) -> TermCoords {
    ((config.grid.width * 2) as u16, config.grid.height as u16)
}

fn cell_origin(pos: wormle::Coords) -> TermCoords {
    ((pos.0 * 2 + 1) as u16, (pos.1 + 1) as u16)
}

fn tag_color(tag: LetterTag) -> Color {
    match tag {
        LetterTag::Correct => Color::Rgb { r: 106, g: 170, b: 100 },
        LetterTag::Close => Color::Rgb { r: 201, g: 180, b: 88 },
        LetterTag::Wrong => Color::Rgb { r: 120, g: 124, b: 126 },
        LetterTag::Start => Color::White,
        LetterTag::Unknown => Color::Rgb { r: 211, g: 214, b: 218 },
    }
}

fn text_color(tag: LetterTag) -> Color {
    match tag {
        LetterTag::Unknown => Color::Black,
        LetterTag::Start => BORDER_GREY,
        _ => Color::White,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
