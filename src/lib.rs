//! A Wordle solver that narrows a dictionary with positional feedback and picks each next guess
//! by letter coverage.
//!
//! The dictionary is indexed by each word's set of distinct letters ([`LetterSet`]). Every round,
//! feedback is folded into a [`Constraints`] value, the index is pruned by [`filter::filter`], and
//! [`scorer::score`] picks the letter-set that overlaps most with the letter-sets enumerated
//! before it. The first word under that letter-set becomes the next guess.

#[cfg(test)]
macro_rules! word {
    ($w:expr) => {
        $w.parse::<$crate::Word>().unwrap()
    };
}

#[cfg(test)]
macro_rules! feedback {
    ($f:expr) => {
        $f.parse::<$crate::Feedback>().unwrap()
    };
}

use std::fmt;
use std::str::FromStr;

pub mod constraints;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod logger;
pub mod scorer;
pub mod solver;

pub use constraints::Constraints;
pub use dictionary::Index;
pub use error::Error;
pub use scorer::{rank, score, Ranked, Score};
pub use solver::{interactive, solve, Outcome, Session, Step};

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

pub const WORD_LENGTH: usize = 5;

/// Maximum number of feedback rounds in an automated session.
pub const MAX_ROUNDS: usize = 15;

/// The game a human plays only allows this many rounds after the opening.
pub const INTERACTIVE_ROUNDS: usize = 5;

/// The opening guess, chosen offline with [`scorer::rank`].
pub const OPENING: Word = Word(*b"arose");

/// Returns true if `word` is one of the words shipped in `dictionary.txt`.
pub fn is_shipped(word: &str) -> bool {
    SHIPPED.contains(word)
}

/// A five letter word, stored as lowercase ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Builds a word from raw bytes, returning `None` unless every byte is an ASCII letter.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; WORD_LENGTH] = bytes.try_into().ok()?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self(bytes.map(|b| b.to_ascii_lowercase())))
    }

    pub fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letters(&self) -> LetterSet {
        LetterSet::of(&self.0)
    }

    pub fn to_uppercase(&self) -> String {
        self.to_string().to_ascii_uppercase()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.trim().as_bytes()).ok_or_else(|| Error::InvalidWord {
            word: s.to_string(),
        })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&b| write!(f, "{}", b as char))
    }
}

/// The distinct letters of a word, one bit per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Bytes other than ASCII letters map to no bit at all.
    fn bit(letter: u8) -> u32 {
        if letter.is_ascii_alphabetic() {
            1 << (letter.to_ascii_lowercase() - b'a')
        } else {
            0
        }
    }

    /// The set of ASCII letters in `letters`; any other byte is ignored.
    pub fn of(letters: &[u8]) -> Self {
        letters.iter().fold(Self::EMPTY, |set, &l| set.with(l))
    }

    #[must_use]
    pub fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    pub fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    pub fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of letters the two sets share.
    pub fn overlap(self, other: Self) -> usize {
        (self.0 & other.0).count_ones() as usize
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|l| write!(f, "{}", l as char))
    }
}

/// Feedback for one position of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Green: the letter is at this position.
    Exact(u8),
    /// Yellow: the letter is in the secret, but not here.
    Misplaced(u8),
    /// Gray.
    Absent,
}

/// How the oracle hands out misplaced markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rules {
    /// A guessed letter is misplaced whenever it occurs anywhere in the secret, however many
    /// times it was guessed.
    #[default]
    Simplified,
    /// The real game: exact matches use up their letter first, and each remaining copy in the
    /// secret can mark at most one guessed letter as misplaced.
    Standard,
}

/// Feedback for a whole guess, as exchanged with the player.
///
/// On the wire this is five characters: an uppercase letter is an exact match, a lowercase
/// letter is present elsewhere, and anything else (conventionally `.`) is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    pub fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Every letter named by an exact or misplaced marker.
    pub fn letters(&self) -> LetterSet {
        self.0.iter().fold(LetterSet::EMPTY, |set, m| match *m {
            Mark::Exact(l) | Mark::Misplaced(l) => set.with(l),
            Mark::Absent => set,
        })
    }

    /// The feedback the game would give for `guess` when `secret` is the answer.
    pub fn compute(secret: &Word, guess: &Word, rules: Rules) -> Self {
        match rules {
            Rules::Simplified => Self::compute_simplified(secret, guess),
            Rules::Standard => Self::compute_standard(secret, guess),
        }
    }

    fn compute_simplified(secret: &Word, guess: &Word) -> Self {
        let present = secret.letters();
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for ((&s, &g), m) in secret.0.iter().zip(&guess.0).zip(marks.iter_mut()) {
            if s == g {
                *m = Mark::Exact(g);
            } else if present.contains(g) {
                *m = Mark::Misplaced(g);
            }
        }
        Self(marks)
    }

    fn compute_standard(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        // Unmatched letters of the secret, indexed by lowercase ascii letter.
        let mut unmatched = [0u8; (b'z' - b'a' + 1) as usize];

        for ((&s, &g), m) in secret.0.iter().zip(&guess.0).zip(marks.iter_mut()) {
            if s == g {
                *m = Mark::Exact(g);
            } else {
                unmatched[(s - b'a') as usize] += 1;
            }
        }
        for (&g, m) in guess.0.iter().zip(marks.iter_mut()) {
            if *m == Mark::Absent && unmatched[(g - b'a') as usize] > 0 {
                *m = Mark::Misplaced(g);
                unmatched[(g - b'a') as usize] -= 1;
            }
        }

        Self(marks)
    }
}

impl FromStr for Feedback {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = |reason: String| Error::MalformedFeedback {
            feedback: s.to_string(),
            reason,
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(malformed(format!(
                "expected {} characters, found {}",
                WORD_LENGTH,
                chars.len()
            )));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (i, (&c, m)) in chars.iter().zip(marks.iter_mut()).enumerate() {
            if !c.is_ascii() {
                return Err(malformed(format!(
                    "unsupported character '{}' at position {}",
                    c,
                    i + 1
                )));
            }
            let b = c as u8;
            if b.is_ascii_uppercase() {
                *m = Mark::Exact(b.to_ascii_lowercase());
            } else if b.is_ascii_lowercase() {
                *m = Mark::Misplaced(b);
            }
        }
        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| match *m {
            Mark::Exact(l) => write!(f, "{}", l.to_ascii_uppercase() as char),
            Mark::Misplaced(l) => write!(f, "{}", l as char),
            Mark::Absent => write!(f, "."),
        })
    }
}
