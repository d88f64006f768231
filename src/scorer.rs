//! Coverage scoring: ranking letter-sets by how many letters they share with the others.
//!
//! This is a cheap stand-in for expected information. A letter-set that overlaps heavily with
//! the rest of the candidates splits them on many letters at once.

use crate::dictionary::Index;
use crate::{LetterSet, Word};

/// The scorer's pick for the next guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// The winning letter-set.
    pub letters: LetterSet,
    /// The first word under `letters`, which is what gets guessed.
    pub guess: Word,
    /// How many words are still possible, across every letter-set.
    pub candidates: usize,
}

#[derive(Debug, Copy, Clone)]
struct Candidate {
    idx: usize,
    goodness: usize,
}

/// Coverage of each letter-set in `index`, in enumeration order.
///
/// A set only accumulates its overlap with the sets enumerated at or before it (itself
/// included), not with the whole index, so the score depends on enumeration order and later
/// sets are favoured.
pub fn coverage(index: &Index) -> Vec<usize> {
    let keys: Vec<LetterSet> = index.keys().collect();
    keys.iter()
        .enumerate()
        .map(|(i, key)| keys[..=i].iter().map(|&other| key.overlap(other)).sum::<usize>())
        .collect()
}

/// Picks the next guess from the surviving `index`, or `None` if nothing survived.
///
/// Ties go to the letter-set enumerated first.
pub fn score(index: &Index) -> Option<Score> {
    let mut best: Option<Candidate> = None;
    for (idx, goodness) in coverage(index).into_iter().enumerate() {
        if best.map_or(true, |c| goodness > c.goodness) {
            best = Some(Candidate { idx, goodness });
        }
    }

    let bucket = &index.buckets()[best?.idx];
    Some(Score {
        letters: bucket.letters,
        guess: *bucket.words.first()?,
        candidates: index.word_count(),
    })
}

/// A letter-set's coverage against the entire index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
    pub letters: LetterSet,
    pub score: usize,
}

/// Ranks every letter-set by its overlap with all letter-sets in `index`, best first.
///
/// Unlike [`coverage`] this is symmetric and independent of enumeration order (apart from
/// breaking ties). It is meant for choosing an opening offline, so it logs progress as it goes.
pub fn rank(index: &Index) -> Vec<Ranked> {
    let keys: Vec<LetterSet> = index.keys().collect();
    let mut scores = vec![0usize; keys.len()];
    for (i, &chosen) in keys.iter().enumerate() {
        if i % 1000 == 0 {
            log::info!("{}/{}", i, keys.len());
        }
        for (score, &guess) in scores.iter_mut().zip(&keys) {
            *score += guess.overlap(chosen);
        }
    }

    let mut ranked: Vec<_> = keys
        .into_iter()
        .zip(scores)
        .map(|(letters, score)| Ranked { letters, score })
        .collect();
    // Stable, so equal scores stay in enumeration order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
