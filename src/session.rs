//! One game from the first tick to a win or a loss.

use std::rc::Rc;
use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::clock::TickClock;
use crate::config::GameConfig;
use crate::error::SessionError;
use crate::food::FoodField;
use crate::guess::{GuessEngine, LetterStatus, LetterTag};
use crate::snake::{compute_next_head, Direction, Snake};
use crate::words::Lexicon;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LossCause {
    SelfCollision,
    OutOfBounds,
    IllegalLetter(char),
    /// The snake grew until no cell was left for the eaten letter's tile.
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Won,
    Lost(LossCause),
}

/// What a committed tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No direction chosen yet, nothing moved.
    Idle,
    Moved { head: Coords },
    Ate { letter: char, tag: LetterTag },
    Won,
    Lost(LossCause),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentView {
    pub pos: Coords,
    pub letter: Option<char>,
    pub tag: LetterTag,
    /// Part of the guess still being spelled.
    pub in_current_guess: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileView {
    pub letter: char,
    pub pos: Coords,
    pub status: LetterTag,
    /// Whether eating this tile now keeps the guess a dictionary prefix.
    pub legal: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub segments: Vec<SegmentView>,
    pub tiles: Vec<TileView>,
    pub guess_len: usize,
    pub target_len: usize,
    pub guesses_made: usize,
    pub interval: Duration,
    pub state: GameState,
}

pub struct Session {
    config: GameConfig,
    lexicon: Rc<Lexicon>,
    snake: Snake,
    foods: FoodField,
    guess: GuessEngine,
    state: GameState,
    interval: Duration,
    clock: TickClock,
    rng: StdRng,
}

impl Session {
    /// Starts a game with a target drawn from the lexicon.
    pub fn new(config: GameConfig, lexicon: Rc<Lexicon>) -> Result<Self, SessionError> {
        let mut rng = seeded_rng(config.seed);
        let target = lexicon.choose_target(&mut rng)?.to_string();
        Self::build(config, lexicon, &target, rng)
    }

    /// Starts a game with a fixed target, which must be a dictionary word.
    pub fn with_target(config: GameConfig, lexicon: Rc<Lexicon>, target: &str) -> Result<Self, SessionError> {
        let target = target.to_ascii_uppercase();
        if !lexicon.trie().contains_word(&target) {
            return Err(SessionError::UnknownTarget(target));
        }
        let rng = seeded_rng(config.seed);
        Self::build(config, lexicon, &target, rng)
    }

    fn build(config: GameConfig, lexicon: Rc<Lexicon>, target: &str, mut rng: StdRng) -> Result<Self, SessionError> {
        config.validate()?;

        let snake = Snake::new(config.start);
        let mut foods = FoodField::new(config.grid);
        foods.initialize(&snake, &mut rng)?;

        info!(
            width = config.grid.width,
            height = config.grid.height,
            target_len = target.len(),
            "session started"
        );
        debug!(%target, "target chosen");

        Ok(Session {
            interval: config.tick_interval(0),
            config,
            lexicon,
            snake,
            foods,
            guess: GuessEngine::new(target),
            state: GameState::Running,
            clock: TickClock::new(),
            rng,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn target(&self) -> String {
        self.guess.target()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn foods(&self) -> &FoodField {
        &self.foods
    }

    pub fn guess(&self) -> &GuessEngine {
        &self.guess
    }

    pub fn letter_status(&self) -> &LetterStatus {
        self.guess.status()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Player input; takes effect on the next tick.
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.is_running() && self.snake.steer(direction)
    }

    /// Runs a tick if `now` is at least one interval past the last one.
    pub fn on_frame(&mut self, now: Duration) -> Result<Option<TickOutcome>, SessionError> {
        if !self.is_running() || !self.clock.is_due(now, self.interval) {
            return Ok(None);
        }

        let outcome = self.tick()?;
        self.clock.mark(now);
        Ok(Some(outcome))
    }

    /// Advances the game by one move.
    pub fn tick(&mut self) -> Result<TickOutcome, SessionError> {
        match self.state {
            GameState::Running => {}
            GameState::Won => return Ok(TickOutcome::Won),
            GameState::Lost(cause) => return Ok(TickOutcome::Lost(cause)),
        }

        let direction = match self.snake.commit_direction() {
            Some(direction) => direction,
            None => return Ok(TickOutcome::Idle),
        };
        let head = compute_next_head(self.snake.head(), direction);

        if !self.config.grid.contains(head) {
            return Ok(self.lose(LossCause::OutOfBounds));
        }

        if self.snake.would_collide(head) {
            return Ok(self.lose(LossCause::SelfCollision));
        }

        let letter = match self.foods.letter_at(head) {
            Some(letter) => letter,
            None => {
                self.snake.advance(head, false);
                return Ok(TickOutcome::Moved { head });
            }
        };

        if !self.guess.is_legal(self.lexicon.trie(), letter) {
            return Ok(self.lose(LossCause::IllegalLetter(letter)));
        }

        if self.guess.completes_target(letter) {
            self.state = GameState::Won;
            info!(%letter, guesses = self.guess.guesses_made() + 1, "target spelled");
            return Ok(TickOutcome::Won);
        }

        // the head takes over the eaten tile's cell, so growing needs one
        // more free cell for the replacement tile
        let growing = !self.guess.has_start();
        if growing && self.foods.free_cells(&self.snake) == 0 {
            return Ok(self.lose(LossCause::BoardFull));
        }

        self.foods.consume(head);

        let index = self.guess.current_guess_index();
        if self.guess.discard_start() {
            self.snake.replace_with(head);
        } else {
            self.snake.advance(head, true);
        }
        let tag = self.guess.record_pickup(letter);
        debug!(%letter, ?tag, index, len = self.snake.len(), "letter collected");

        if let Err(err) = self.foods.spawn(letter, &self.snake, &mut self.rng) {
            self.lose(LossCause::BoardFull);
            return Err(err);
        }

        let interval = self.config.tick_interval(self.guess.guesses_made());
        if interval != self.interval {
            debug!(ms = interval.as_millis() as u64, "tick interval changed");
            self.interval = interval;
        }

        Ok(TickOutcome::Ate { letter, tag })
    }

    fn lose(&mut self, cause: LossCause) -> TickOutcome {
        self.state = GameState::Lost(cause);
        info!(?cause, collected = self.guess.collected(), "game lost");
        TickOutcome::Lost(cause)
    }

    pub fn snapshot(&self) -> Snapshot {
        let guess_len = self.guess.current_guess_index();
        let len = self.snake.len();

        let segments = self.snake.body().iter()
            .zip(self.guess.letters())
            .enumerate()
            .map(|(i, (&pos, entry))| SegmentView {
                pos,
                letter: entry.letter,
                tag: entry.tag,
                in_current_guess: len - i <= guess_len,
            })
            .collect();

        let tiles = self.foods.iter()
            .map(|food| TileView {
                letter: food.letter,
                pos: food.pos,
                status: self.guess.status().get(food.letter),
                legal: self.guess.is_legal(self.lexicon.trie(), food.letter),
            })
            .collect();

        Snapshot {
            segments,
            tiles,
            guess_len,
            target_len: self.guess.target().len(),
            guesses_made: self.guess.guesses_made(),
            interval: self.interval,
            state: self.state,
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
