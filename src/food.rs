//! Letter tiles on the board, one live tile per letter.

use std::collections::BTreeMap;

use rand::{seq::SliceRandom, Rng};
use tracing::warn;

use crate::error::SessionError;
use crate::grid::Grid;
use crate::snake::Snake;
use crate::{Coords, ALPHABET};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub letter: char,
    pub pos: Coords,
}

#[derive(Clone, Debug)]
pub struct FoodField {
    grid: Grid,
    tiles: BTreeMap<char, Coords>,
}

impl FoodField {
    pub fn new(grid: Grid) -> Self {
        FoodField { grid, tiles: BTreeMap::new() }
    }

    /// Places one tile for every letter of the alphabet.
    pub fn initialize<R: Rng + ?Sized>(&mut self, snake: &Snake, rng: &mut R) -> Result<(), SessionError> {
        self.tiles.clear();
        for letter in ALPHABET.chars() {
            self.spawn(letter, snake, rng)?;
        }
        Ok(())
    }

    /// Puts `letter` on a cell chosen uniformly among those free of snake
    /// segments and other tiles.
    pub fn spawn<R: Rng + ?Sized>(&mut self, letter: char, snake: &Snake, rng: &mut R) -> Result<Coords, SessionError> {
        self.tiles.remove(&letter);

        let choices: Vec<Coords> = self.grid.cells()
            .filter(|pos| !snake.would_collide(*pos) && self.letter_at(*pos).is_none())
            .collect();

        match choices.choose(rng).copied() {
            Some(pos) => {
                self.tiles.insert(letter, pos);
                Ok(pos)
            }
            None => {
                warn!(%letter, snake_len = snake.len(), "no free cell left for letter tile");
                Err(SessionError::BoardFull { letter })
            }
        }
    }

    /// Cells holding neither a snake segment nor a tile.
    pub fn free_cells(&self, snake: &Snake) -> usize {
        self.grid.cells()
            .filter(|pos| !snake.would_collide(*pos) && self.letter_at(*pos).is_none())
            .count()
    }

    pub fn letter_at(&self, pos: Coords) -> Option<char> {
        self.tiles.iter()
            .find(|(_, tile)| **tile == pos)
            .map(|(letter, _)| *letter)
    }

    /// Removes and returns the tile at `pos`. The caller respawns its letter.
    pub fn consume(&mut self, pos: Coords) -> Option<Food> {
        let letter = self.letter_at(pos)?;
        self.tiles.remove(&letter);
        Some(Food { letter, pos })
    }

    pub fn position_of(&self, letter: char) -> Option<Coords> {
        self.tiles.get(&letter).copied()
    }

    /// Tiles in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Food> + '_ {
        self.tiles.iter().map(|(&letter, &pos)| Food { letter, pos })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Moves `letter` onto `pos`, swapping with a tile already sitting there.
    #[cfg(test)]
    pub(crate) fn place(&mut self, letter: char, pos: Coords) {
        let old = self.tiles.get(&letter).copied();
        if let Some(other) = self.letter_at(pos) {
            match old {
                Some(old) => { self.tiles.insert(other, old); }
                None => { self.tiles.remove(&other); }
            }
        }
        self.tiles.insert(letter, pos);
    }
}
