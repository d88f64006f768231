//! Pruning an [`Index`] down to the words still consistent with the [`Constraints`].

use crate::dictionary::{Bucket, Index};
use crate::Constraints;

/// Returns a new index with only the words `constraints` still allow.
///
/// Whole letter-sets are dropped first: a set survives only if it holds every letter known to be
/// in the secret and none known to be absent. The words of a surviving set are then checked
/// position by position, and sets left without words are dropped. Surviving sets and words keep
/// their relative order.
pub fn filter(index: &Index, constraints: &Constraints) -> Index {
    let required = constraints.required();
    let excluded = constraints.excluded();

    let buckets = index
        .buckets()
        .iter()
        .filter(|b| b.letters.is_superset(required) && b.letters.is_disjoint(excluded))
        .filter_map(|b| {
            let words: Vec<_> = b
                .words
                .iter()
                .filter(|w| constraints.admits(w))
                .copied()
                .collect();
            (!words.is_empty()).then(|| Bucket {
                letters: b.letters,
                words,
            })
        })
        .collect();

    Index::from_buckets(buckets)
}

#[cfg(test)]
mod tests {
    use super::filter;
    use crate::{Constraints, Feedback, Index, Rules, Word, OPENING};

    fn narrowed(index: &Index, rounds: &[(&str, &str)]) -> (Index, Constraints) {
        let c = rounds.iter().fold(Constraints::new(), |c, (guess, fb)| {
            c.update(&word!(guess), &feedback!(fb)).unwrap()
        });
        (filter(index, &c), c)
    }

    fn words(index: &Index) -> Vec<String> {
        index.words().map(Word::to_string).collect()
    }

    #[test]
    fn nothing_known() {
        let index = Index::shipped();
        assert_eq!(&filter(index, &Constraints::new()), index);
    }

    #[test]
    fn after_opening() {
        let (index, _) = narrowed(Index::shipped(), &[("arose", "aR..E")]);
        assert_eq!(
            words(&index),
            ["frame", "grace", "grade", "trade", "crane", "trace", "crate"]
        );
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn drops_sets_missing_required_letters() {
        let index = Index::from_words(["unity", "chalk", "final", "admit"]);
        let (index, _) = narrowed(&index, &[("arose", "a....")]);
        assert_eq!(words(&index), ["chalk", "final"]);
    }

    #[test]
    fn drops_sets_with_excluded_letters() {
        let index = Index::from_words(["crane", "train", "brain", "grain"]);
        let (index, _) = narrowed(&index, &[("crane", ".RAIN")]);
        assert_eq!(words(&index), ["train", "brain", "grain"]);
    }

    #[test]
    fn drops_emptied_sets_and_keeps_order() {
        let index = Index::from_words(["least", "crane", "steel", "slate", "stale", "steal"]);
        let (index, _) = narrowed(&index, &[("least", "leAst")]);
        assert_eq!(words(&index), ["slate", "stale"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn idempotent() {
        let (once, c) = narrowed(Index::shipped(), &[("arose", "aR..E"), ("trace", ".RAcE")]);
        assert_eq!(filter(&once, &c), once);
    }

    #[test]
    fn never_drops_the_secret() {
        let shipped = Index::shipped();
        for secret in shipped.words() {
            let mut index = shipped.clone();
            let mut c = Constraints::new();
            let mut guess = OPENING;
            for _ in 0..3 {
                let fb = Feedback::compute(secret, &guess, Rules::Simplified);
                c = c.update(&guess, &fb).unwrap();
                let next = filter(&index, &c);
                assert!(next.word_count() <= index.word_count());
                assert!(next.contains(secret), "lost {} after {}", secret, guess);
                index = next;
                guess = index.words().next().copied().unwrap();
            }
        }
    }
}
