use crate::{Error, LetterSet, Word, DICTIONARY};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::io::BufRead;

/// The index of the shipped dictionary, built on first use.
static SHIPPED_INDEX: OnceCell<Index> = OnceCell::new();

/// All words sharing one set of distinct letters, in dictionary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub letters: LetterSet,
    pub words: Vec<Word>,
}

/// Dictionary words grouped by their [`LetterSet`].
///
/// Buckets are enumerated in the order their first word appeared in the source, and words keep
/// their source order within a bucket. Every word reduces to exactly its bucket's letter-set, so
/// no word is in two buckets. Narrowing never mutates an index; [`crate::filter::filter`] builds
/// a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Index {
    buckets: Vec<Bucket>,
}

impl Index {
    /// The index over `dictionary.txt` as shipped with the crate.
    pub fn shipped() -> &'static Index {
        SHIPPED_INDEX.get_or_init(|| Index::from_words(DICTIONARY.iter().copied()))
    }

    /// Reads one word per line. Lines that are not five letters once trimmed are skipped,
    /// including lines that are not valid UTF-8.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut builder = Builder::default();
        for line in reader.split(b'\n') {
            builder.push(&String::from_utf8_lossy(&line?));
        }
        let index = builder.finish();
        log::debug!(
            "loaded {} words under {} letter-sets",
            index.word_count(),
            index.len()
        );
        Ok(index)
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut builder = Builder::default();
        for word in words {
            builder.push(word);
        }
        builder.finish()
    }

    pub(crate) fn from_buckets(buckets: Vec<Bucket>) -> Self {
        Self { buckets }
    }

    /// Number of letter-sets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of words across all letter-sets.
    pub fn word_count(&self) -> usize {
        self.buckets.iter().map(|b| b.words.len()).sum()
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn keys(&self) -> impl Iterator<Item = LetterSet> + '_ {
        self.buckets.iter().map(|b| b.letters)
    }

    pub fn get(&self, letters: LetterSet) -> Option<&[Word]> {
        self.buckets
            .iter()
            .find(|b| b.letters == letters)
            .map(|b| &b.words[..])
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.buckets.iter().flat_map(|b| &b.words)
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.get(word.letters())
            .map_or(false, |words| words.contains(word))
    }
}

#[derive(Default)]
struct Builder {
    buckets: Vec<Bucket>,
    slots: HashMap<LetterSet, usize>,
}

impl Builder {
    fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.chars().count() != crate::WORD_LENGTH {
            return;
        }
        let word = match Word::from_bytes(line.as_bytes()) {
            Some(word) => word,
            None => return,
        };

        let letters = word.letters();
        let buckets = &mut self.buckets;
        let slot = *self.slots.entry(letters).or_insert_with(|| {
            buckets.push(Bucket {
                letters,
                words: Vec::new(),
            });
            buckets.len() - 1
        });
        let words = &mut self.buckets[slot].words;
        if !words.contains(&word) {
            words.push(word);
        }
    }

    fn finish(self) -> Index {
        Index {
            buckets: self.buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Index;
    use crate::LetterSet;

    #[test]
    fn groups_anagrams() {
        let index = Index::from_words(["least", "crane", "slate", "stale"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.word_count(), 4);
        let words: Vec<_> = index
            .get(LetterSet::of(b"aelst"))
            .unwrap()
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(words, ["least", "slate", "stale"]);
    }

    #[test]
    fn keys_in_first_seen_order() {
        let index = Index::from_words(["crane", "least", "nacre", "brain"]);
        let keys: Vec<_> = index.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["acenr", "aelst", "abinr"]);
    }

    #[test]
    fn skips_malformed_lines() {
        let source = "crane\n\nbrains\nco-op\n  train \t\nGRAIN\nab\n";
        let index = Index::load(source.as_bytes()).unwrap();
        let words: Vec<_> = index.words().map(|w| w.to_string()).collect();
        assert_eq!(words, ["crane", "train", "grain"]);

        let source = b"crane\r\nna\xefve\n\xff\xfe\xfd\xfc\xfb\ntrain\n";
        let index = Index::load(&source[..]).unwrap();
        let words: Vec<_> = index.words().map(|w| w.to_string()).collect();
        assert_eq!(words, ["crane", "train"]);
    }

    #[test]
    fn repeated_word_kept_once() {
        let index = Index::from_words(["crane", "crane", "nacre"]);
        assert_eq!(index.word_count(), 2);
        assert!(index.contains(&word!("nacre")));
        assert!(!index.contains(&word!("caner")));
    }

    #[test]
    fn every_word_matches_its_key() {
        let index = Index::shipped();
        for bucket in index.buckets() {
            assert!(!bucket.words.is_empty());
            for word in &bucket.words {
                assert_eq!(word.letters(), bucket.letters);
            }
        }
    }

    #[test]
    fn shipped() {
        let index = Index::shipped();
        assert_eq!(index.word_count(), crate::DICTIONARY.len());
        assert!(index.contains(&crate::OPENING));
        assert_eq!(index.words().next().map(|w| w.to_string()).as_deref(), Some("arose"));
    }
}
