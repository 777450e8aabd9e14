use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Coords;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,

    #[error("line {line}: {word:?} is not a word made of the letters A-Z")]
    InvalidWord { line: usize, word: String },

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid has {cells} cells but at least {required} are needed")]
    GridTooSmall { cells: usize, required: usize },

    #[error("start position {start:?} lies outside the grid")]
    StartOutOfBounds { start: Coords },

    #[error("tick interval floor must not exceed the base and decay must lie in (0, 1)")]
    InvalidInterval,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Words(#[from] WordListError),

    #[error("target {0:?} is not in the dictionary")]
    UnknownTarget(String),

    #[error("no free cell left to place letter {letter}")]
    BoardFull { letter: char },
}
