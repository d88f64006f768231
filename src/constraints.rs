use crate::{Error, Feedback, LetterSet, Mark, Word, WORD_LENGTH};

fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Everything the feedback so far says about the secret.
///
/// Constraints only ever grow: a fixed position is never unset, and a letter's misplaced
/// positions are never forgotten. [`Constraints::update`] returns a new value and leaves `self`
/// untouched, so a rejected round costs nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    /// The letter known to be at each position.
    exact: [Option<u8>; WORD_LENGTH],
    /// Bitmask per letter of the positions where it was reported present-but-misplaced.
    misplaced: [u8; 26],
    /// Every letter guessed in a completed round.
    guessed: LetterSet,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds in one round: `feedback` as reported for a round in which `guess` was suggested.
    ///
    /// The feedback's own letters are what count; `guess` only widens the set of guessed
    /// letters that absence is derived from.
    pub fn update(&self, guess: &Word, feedback: &Feedback) -> Result<Self, Error> {
        let excluded = self.excluded();
        let contradiction = |reason: String| Error::MalformedFeedback {
            feedback: feedback.to_string(),
            reason,
        };

        let mut next = self.clone();
        for (i, mark) in feedback.marks().iter().enumerate() {
            match *mark {
                Mark::Exact(l) | Mark::Misplaced(l) if excluded.contains(l) => {
                    return Err(contradiction(format!(
                        "'{}' was already ruled out",
                        l as char
                    )));
                }
                Mark::Exact(l) => {
                    if let Some(known) = next.exact[i].filter(|&known| known != l) {
                        return Err(contradiction(format!(
                            "position {} is already known to be '{}'",
                            i + 1,
                            known as char
                        )));
                    }
                    if next.misplaced[slot(l)] & (1 << i) != 0 {
                        return Err(contradiction(format!(
                            "'{}' is already known not to be at position {}",
                            l as char,
                            i + 1
                        )));
                    }
                    next.exact[i] = Some(l);
                }
                Mark::Misplaced(l) => {
                    if next.exact[i] == Some(l) {
                        return Err(contradiction(format!(
                            "'{}' is already known to be at position {}",
                            l as char,
                            i + 1
                        )));
                    }
                    next.misplaced[slot(l)] |= 1 << i;
                }
                Mark::Absent => {}
            }
        }
        next.guessed = next
            .guessed
            .union(guess.letters())
            .union(feedback.letters());

        Ok(next)
    }

    pub fn exact(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.exact
    }

    /// Positions where `letter` was reported present-but-misplaced.
    pub fn misplaced_at(&self, letter: u8) -> impl Iterator<Item = usize> {
        let mask = self.misplaced[slot(letter)];
        (0..WORD_LENGTH).filter(move |i| mask & (1 << i) != 0)
    }

    /// Letters the secret must contain somewhere.
    pub fn required(&self) -> LetterSet {
        (b'a'..=b'z')
            .filter(|&l| self.misplaced[slot(l)] != 0)
            .fold(LetterSet::EMPTY, LetterSet::with)
    }

    pub fn fixed(&self) -> LetterSet {
        self.exact
            .iter()
            .flatten()
            .fold(LetterSet::EMPTY, |set, &l| set.with(l))
    }

    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Letters that have been guessed but never reported exact or misplaced.
    pub fn excluded(&self) -> LetterSet {
        self.guessed
            .difference(self.fixed())
            .difference(self.required())
    }

    /// Whether `word` has every fixed letter in place and no misplaced letter in a position it
    /// was reported misplaced at.
    pub fn admits(&self, word: &Word) -> bool {
        let bytes = word.bytes();
        let in_place = self
            .exact
            .iter()
            .zip(bytes)
            .all(|(&e, &b)| e.map_or(true, |e| e == b));
        in_place
            && bytes
                .iter()
                .enumerate()
                .all(|(i, &b)| self.misplaced[slot(b)] & (1 << i) == 0)
    }
}
