use sift::filter::filter;
use sift::{Constraints, Feedback, Index, Outcome, Rules, Word, MAX_ROUNDS, OPENING};

fn word(w: &str) -> Word {
    w.parse().expect("test words are five letters")
}

#[test]
fn every_shipped_word_converges() {
    let index = Index::shipped();
    for secret in index.words() {
        match sift::solve(index, secret, OPENING, Rules::Simplified) {
            Ok(Outcome::Solved { rounds, word }) => {
                assert_eq!(&word, secret);
                assert!(rounds <= MAX_ROUNDS);
            }
            other => panic!("{} did not converge: {:?}", secret, other),
        }
    }
}

#[test]
fn standard_rules_never_solve_to_the_wrong_word() {
    let index = Index::shipped();
    let mut stalled = 0;
    for secret in index.words() {
        match sift::solve(index, secret, OPENING, Rules::Standard).unwrap() {
            Outcome::Solved { word, .. } => assert_eq!(&word, secret),
            Outcome::Exhausted { rounds } => {
                assert_eq!(rounds, MAX_ROUNDS);
                stalled += 1;
            }
            Outcome::Abandoned { .. } => unreachable!("automated sessions are never abandoned"),
        }
    }
    assert_eq!(stalled, 8);
}

#[test]
fn feedback_examples() {
    let check = |secret: &str, guess: &str| {
        Feedback::compute(&word(secret), &word(guess), Rules::Simplified).to_string()
    };
    assert_eq!(check("crane", "crane"), "CRANE");
    assert_eq!(check("crane", "trace"), ".RAcE");
}

#[test]
fn filtering_shrinks_and_settles() {
    let index = Index::shipped();
    for secret in ["crane", "bound", "youth", "water", "eager"] {
        let secret = word(secret);
        let mut remaining = index.clone();
        let mut constraints = Constraints::new();
        let mut guess = OPENING;
        loop {
            let fb = Feedback::compute(&secret, &guess, Rules::Simplified);
            constraints = constraints.update(&guess, &fb).unwrap();
            let next = filter(&remaining, &constraints);
            assert!(next.word_count() <= remaining.word_count());
            assert!(next.contains(&secret));
            assert_eq!(filter(&next, &constraints), next);
            remaining = next;

            let best = sift::score(&remaining).unwrap();
            if best.candidates == 1 {
                assert_eq!(best.guess, secret);
                break;
            }
            guess = best.guess;
        }
    }
}

#[test]
fn interactive_scenario() {
    let index = Index::from_words(["CRANE", "TRAIN", "BRAIN", "GRAIN"]);
    let mut output = Vec::new();
    let outcome = sift::interactive(&index, word("crane"), &b".RAIN\n"[..], &mut output).unwrap();
    assert_eq!(outcome, Outcome::Abandoned { rounds: 1 });

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, "Guess CRANE\nGuess GRAIN, 3 candidates remaining\n");

    let mut session = sift::Session::new(&index, word("crane"));
    session.advance(&".RAIN".parse().unwrap()).unwrap();
    let remaining: Vec<_> = session.remaining().words().map(Word::to_string).collect();
    assert_eq!(remaining, ["train", "brain", "grain"]);
}

#[test]
fn custom_dictionary() {
    let source = "# five letter words\nslate\nCRANE\nnope\nstale\n\ntrace\n";
    let index = Index::load(source.as_bytes()).unwrap();
    assert_eq!(index.word_count(), 4);
    assert_eq!(index.len(), 3);

    let outcome = sift::solve(&index, &word("stale"), word("crane"), Rules::Simplified).unwrap();
    assert_eq!(
        outcome,
        Outcome::Solved {
            rounds: 2,
            word: word("stale")
        }
    );
}
