use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Cell reached by stepping once from `head`. Never clamped to the grid.
pub fn compute_next_head(head: Coords, direction: Direction) -> Coords {
    match direction {
        Up => (head.0, head.1 - 1),
        Down => (head.0, head.1 + 1),
        Left => (head.0 - 1, head.1),
        Right => (head.0 + 1, head.1),
    }
}

/// Snake body with the head at the front. A direction picked by the player is
/// only pending until the next tick commits it.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Option<Direction>,
    pending: Option<Direction>,
}

impl Snake {
    pub fn new(start: Coords) -> Self {
        Snake { body: VecDeque::from(vec![start]), direction: None, pending: None }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Coords {
        // body always keeps at least one segment
        self.body[0]
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    /// Buffers `new_direction` for the next tick. Turning straight back onto
    /// the active direction is refused.
    pub fn steer(&mut self, new_direction: Direction) -> bool {
        match self.direction {
            Some(active) if active.opposite() == new_direction => false,
            _ => {
                self.pending = Some(new_direction);
                true
            }
        }
    }

    /// Makes the pending direction active. `None` while the player has not
    /// moved yet.
    pub fn commit_direction(&mut self) -> Option<Direction> {
        if self.pending.is_some() {
            self.direction = self.pending;
        }
        self.direction
    }

    pub fn next_head(&self) -> Option<Coords> {
        self.direction.map(|dir| compute_next_head(self.head(), dir))
    }

    pub fn would_collide(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    /// Pushes `new_head`; drops and returns the tail unless the snake ate.
    pub fn advance(&mut self, new_head: Coords, ate: bool) -> Option<Coords> {
        self.body.push_front(new_head);

        if ate {
            None
        } else {
            self.body.pop_back()
        }
    }

    /// Replaces the whole body with `new_head` (used when the start segment is
    /// the only one and gets swapped for the first letter).
    pub fn replace_with(&mut self, new_head: Coords) -> Coords {
        let old = self.head();
        self.body.clear();
        self.body.push_front(new_head);
        old
    }
}
