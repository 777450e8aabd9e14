// Integration tests driving whole sessions through the public API.

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use wormle::snake::compute_next_head;
use wormle::{Coords, Direction, GameConfig, GameState, LetterTag, Lexicon, LossCause, Session, TickOutcome};

const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

fn seeded(seed: u64) -> Session {
    let config = GameConfig { seed: Some(seed), ..GameConfig::default() };
    Session::new(config, Rc::new(Lexicon::builtin())).unwrap()
}

fn check_board(session: &Session) {
    let tiles: Vec<_> = session.foods().iter().collect();
    assert_eq!(tiles.len(), 26);

    let cells: HashSet<_> = tiles.iter().map(|food| food.pos).collect();
    assert_eq!(cells.len(), 26, "tiles overlap");

    let body: HashSet<_> = session.snake().body().iter().copied().collect();
    assert_eq!(body.len(), session.snake().len(), "snake overlaps itself");
    assert!(cells.is_disjoint(&body), "tile under the snake");

    let grid = session.config().grid;
    assert!(cells.iter().all(|&pos| grid.contains(pos)));
}

#[test]
fn same_seed_same_board() {
    let a = seeded(99);
    let b = seeded(99);
    assert_eq!(a.target(), b.target());
    assert_eq!(a.snapshot(), b.snapshot());
}

/// Picks a move towards the nearest legal tile, going around the body and
/// illegal tiles. Falls back to any move that survives one more tick, then to
/// straight ahead. The flag is false when no safe move was found.
fn choose_move(session: &Session) -> (Direction, bool) {
    let snapshot = session.snapshot();
    let grid = session.config().grid;
    let head = session.snake().head();
    let reverse = session.snake().direction().map(Direction::opposite);

    let body: HashSet<Coords> = session.snake().body().iter().copied().collect();
    let tiles: HashSet<Coords> = snapshot.tiles.iter().map(|t| t.pos).collect();
    let legal: HashSet<Coords> = snapshot.tiles.iter().filter(|t| t.legal).map(|t| t.pos).collect();
    let blocked = |pos: Coords| {
        !grid.contains(pos) || body.contains(&pos) || (tiles.contains(&pos) && !legal.contains(&pos))
    };

    let mut seen: HashSet<Coords> = HashSet::new();
    let mut queue: VecDeque<(Coords, Direction)> = VecDeque::new();
    for &dir in &DIRECTIONS {
        let next = compute_next_head(head, dir);
        if Some(dir) != reverse && !blocked(next) && seen.insert(next) {
            queue.push_back((next, dir));
        }
    }

    let first_safe = queue.front().map(|&(_, dir)| dir);
    while let Some((pos, first)) = queue.pop_front() {
        if legal.contains(&pos) {
            return (first, true);
        }
        for &dir in &DIRECTIONS {
            let next = compute_next_head(pos, dir);
            if !blocked(next) && seen.insert(next) {
                queue.push_back((next, first));
            }
        }
    }

    match first_safe {
        Some(dir) => (dir, true),
        None => (session.snake().direction().unwrap_or(Direction::Right), false),
    }
}

#[test]
fn guided_play_keeps_invariants() {
    let mut best_guesses = 0;
    let mut total_pickups = 0;

    for seed in 0..20 {
        let mut session = seeded(seed);
        let target_len = session.target().len();
        let mut correct_seen: HashSet<char> = HashSet::new();
        let mut last_interval = session.interval();
        let mut eaten = String::new();

        check_board(&session);

        for _ in 0..2000 {
            if !session.is_running() {
                break;
            }

            let (direction, safe) = choose_move(&session);
            assert!(session.steer(direction));
            let had_start = session.guess().has_start();
            let len_before = session.snake().len();

            match session.tick().unwrap() {
                TickOutcome::Idle => unreachable!("snake was steered"),
                TickOutcome::Moved { head } => {
                    assert_eq!(session.snake().len(), len_before);
                    assert_eq!(session.snake().head(), head);
                }
                TickOutcome::Ate { letter, tag } => {
                    let expected = if had_start { len_before } else { len_before + 1 };
                    assert_eq!(session.snake().len(), expected);
                    assert_eq!(session.guess().letters().last().and_then(|e| e.letter), Some(letter));
                    assert_ne!(tag, LetterTag::Unknown);
                    eaten.push(letter);
                }
                TickOutcome::Won => assert_eq!(session.state(), GameState::Won),
                TickOutcome::Lost(cause) => {
                    assert_eq!(session.state(), GameState::Lost(cause));
                    if safe {
                        assert!(!matches!(cause, LossCause::IllegalLetter(_)), "seed {}: {:?}", seed, cause);
                    }
                }
            }

            check_board(&session);

            let guess = session.guess();
            let collected: String = guess.letters().iter().filter_map(|entry| entry.letter).collect();
            assert_eq!(collected, eaten);
            assert_eq!(guess.collected(), eaten.len());
            assert_eq!(guess.current_guess_prefix().len(), guess.collected() % target_len);
            assert_eq!(session.snake().len(), guess.letters().len());

            for (letter, tag) in session.letter_status().iter() {
                if correct_seen.contains(&letter) {
                    assert_eq!(tag, LetterTag::Correct, "{} was downgraded", letter);
                } else if tag == LetterTag::Correct {
                    correct_seen.insert(letter);
                }
            }

            let interval = session.interval();
            assert!(interval <= last_interval);
            assert!(interval >= session.config().min_interval);
            if guess.guesses_made() > 0 {
                assert!(interval < session.config().base_interval);
            }
            last_interval = interval;
        }

        best_guesses = best_guesses.max(session.guess().guesses_made());
        total_pickups += eaten.len();
    }

    assert!(best_guesses >= 2, "no game got past two guesses");
    assert!(total_pickups >= 20 * 5, "only {} letters collected", total_pickups);
}

#[test]
fn finished_sessions_ignore_input_and_frames() {
    let mut session = seeded(5);
    session.steer(Direction::Left);
    // walk off the left edge
    let outcome = loop {
        let outcome = session.tick().unwrap();
        if !session.is_running() {
            break outcome;
        }
    };
    assert_ne!(session.state(), GameState::Running);
    assert!(matches!(outcome, TickOutcome::Won | TickOutcome::Lost(_)));

    let before = session.snapshot();
    assert!(!session.steer(Direction::Up));
    assert_eq!(session.on_frame(std::time::Duration::from_secs(60)).unwrap(), None);
    assert_eq!(session.snapshot(), before);
}
