//! Wordle-style bookkeeping for the letters the snake has collected.

use crate::trie::PrefixTrie;
use crate::ALPHABET;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LetterTag {
    Start,
    Correct,
    Close,
    Wrong,
    Unknown,
}

/// One entry per snake segment. The start segment carries no letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CollectedLetter {
    pub letter: Option<char>,
    pub tag: LetterTag,
}

impl CollectedLetter {
    fn start() -> Self {
        CollectedLetter { letter: None, tag: LetterTag::Start }
    }
}

/// Best feedback learned so far for each letter of the alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterStatus {
    tags: [LetterTag; 26],
}

impl LetterStatus {
    pub fn new() -> Self {
        LetterStatus { tags: [LetterTag::Unknown; 26] }
    }

    pub fn get(&self, letter: char) -> LetterTag {
        index(letter).map(|i| self.tags[i]).unwrap_or(LetterTag::Unknown)
    }

    /// Records `tag` for `letter`; a letter known to be correct stays correct.
    pub fn update(&mut self, letter: char, tag: LetterTag) {
        if let Some(i) = index(letter) {
            if self.tags[i] != LetterTag::Correct {
                self.tags[i] = tag;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterTag)> + '_ {
        ALPHABET.chars().zip(self.tags.iter().copied())
    }
}

impl Default for LetterStatus {
    fn default() -> Self {
        LetterStatus::new()
    }
}

fn index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}

#[derive(Clone, Debug)]
pub struct GuessEngine {
    target: Vec<char>,
    letters: Vec<CollectedLetter>,
    status: LetterStatus,
}

impl GuessEngine {
    /// `target` must be a non-empty word over A-Z.
    pub fn new(target: &str) -> Self {
        GuessEngine {
            target: target.chars().collect(),
            letters: vec![CollectedLetter::start()],
            status: LetterStatus::new(),
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn letters(&self) -> &[CollectedLetter] {
        &self.letters
    }

    pub fn status(&self) -> &LetterStatus {
        &self.status
    }

    pub fn has_start(&self) -> bool {
        self.letters.first().map_or(false, |entry| entry.tag == LetterTag::Start)
    }

    /// Letters picked up so far, not counting the start entry.
    pub fn collected(&self) -> usize {
        self.letters.len() - usize::from(self.has_start())
    }

    /// Completed guess cycles.
    pub fn guesses_made(&self) -> usize {
        self.collected() / self.target.len()
    }

    /// Position within the target that the next letter fills.
    pub fn current_guess_index(&self) -> usize {
        self.collected() % self.target.len()
    }

    /// The guess in progress, oldest letter first.
    pub fn current_guess_prefix(&self) -> String {
        let typed = self.current_guess_index();
        self.letters[self.letters.len() - typed..]
            .iter()
            .filter_map(|entry| entry.letter)
            .collect()
    }

    pub fn is_legal(&self, trie: &PrefixTrie, letter: char) -> bool {
        trie.accepts(&self.current_guess_prefix(), letter)
    }

    /// Whether collecting `letter` would spell the target exactly.
    pub fn completes_target(&self, letter: char) -> bool {
        let mut guess = self.current_guess_prefix();
        guess.push(letter);
        guess.chars().eq(self.target.iter().copied())
    }

    /// Per-letter feedback; "close" ignores how often the letter occurs.
    pub fn score(&self, index: usize, letter: char) -> LetterTag {
        if self.target.get(index) == Some(&letter) {
            LetterTag::Correct
        } else if self.target.contains(&letter) {
            LetterTag::Close
        } else {
            LetterTag::Wrong
        }
    }

    /// Drops the start entry. Returns whether there was one.
    pub fn discard_start(&mut self) -> bool {
        if self.has_start() {
            self.letters.remove(0);
            true
        } else {
            false
        }
    }

    pub fn record_pickup(&mut self, letter: char) -> LetterTag {
        let tag = self.score(self.current_guess_index(), letter);
        self.letters.push(CollectedLetter { letter: Some(letter), tag });
        self.status.update(letter, tag);
        tag
    }
}
