use anyhow::{bail, Context, Result};
use clap::{ArgEnum, Parser, Subcommand};
use sift::{Index, Outcome, Step, Word};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Suggests Wordle guesses by narrowing a dictionary with the feedback so far
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Word list to use, one word per line.
    ///
    /// Lines that are not exactly five letters are ignored. Defaults to the shipped dictionary.
    #[clap(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// The first guess of every game.
    #[clap(short, long, global = true, default_value = "arose")]
    opening: String,

    /// Open with the scorer's pick for the whole dictionary instead of `--opening`.
    #[clap(long, global = true)]
    derive_opening: bool,

    /// How the oracle marks repeated letters when solving for a known secret.
    #[clap(short, long, arg_enum, global = true, default_value = "simplified")]
    rules: RulesArg,

    /// Log every round.
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest guesses for a game played elsewhere (the default).
    ///
    /// After each suggestion, type the feedback as five characters: an uppercase letter for the
    /// right letter in the right place, lowercase for the right letter in the wrong place, and
    /// '.' otherwise.
    Play,

    /// Solve for a known secret, showing each round.
    Solve { secret: String },

    /// Solve for every dictionary word, reporting rounds and time taken.
    Bench {
        /// The number of words to run.
        ///
        /// If not passed, every word is run.
        #[clap(short, long)]
        games: Option<usize>,
    },

    /// Rank letter-sets by their overlap with the whole dictionary, to pick an opening.
    Rank {
        /// How many of the best and worst to show.
        #[clap(short, long, default_value = "15")]
        top: usize,
    },
}

#[derive(ArgEnum, Debug, Clone, Copy)]
enum RulesArg {
    /// A guessed letter found anywhere in the secret is always marked misplaced.
    Simplified,

    /// Repeated letters are marked the way the real game does.
    Standard,
}

impl From<RulesArg> for sift::Rules {
    fn from(rules: RulesArg) -> Self {
        match rules {
            RulesArg::Simplified => sift::Rules::Simplified,
            RulesArg::Standard => sift::Rules::Standard,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    sift::logger::init_logger(args.verbose);

    if let Err(e) = try_main(args) {
        if let Some(e) = e.downcast_ref::<sift::Error>() {
            eprintln!("Error: {}", e.display_detailed());
        } else {
            eprintln!("Error: {:#}", e);
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(args: Args) -> Result<()> {
    let loaded;
    let index = match &args.dictionary {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open dictionary '{}'", path.display()))?;
            loaded = Index::load(BufReader::new(file))?;
            &loaded
        }
        None => Index::shipped(),
    };
    if index.is_empty() {
        bail!("the dictionary has no five letter words");
    }

    let opening = if args.derive_opening {
        let best = sift::score(index).context("the dictionary is empty")?;
        log::info!("opening with {} (scorer's pick)", best.guess.to_uppercase());
        best.guess
    } else {
        args.opening.parse::<Word>()?
    };
    if !index.contains(&opening) {
        log::warn!("opening {} is not in the dictionary", opening.to_uppercase());
    }

    let rules = sift::Rules::from(args.rules);
    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            let outcome = sift::interactive(index, opening, io::stdin().lock(), io::stdout())?;
            log::debug!("session ended: {:?}", outcome);
        }
        Command::Solve { secret } => {
            let secret: Word = secret.parse()?;
            let known = match args.dictionary {
                Some(_) => index.contains(&secret),
                None => sift::is_shipped(&secret.to_string()),
            };
            if !known {
                log::warn!("{} is not in the dictionary", secret.to_uppercase());
            }
            solve_one(index, &secret, opening, rules)?;
        }
        Command::Bench { games } => bench(index, opening, rules, games)?,
        Command::Rank { top } => rank(index, top),
    }

    Ok(())
}

fn solve_one(index: &Index, secret: &Word, opening: Word, rules: sift::Rules) -> Result<()> {
    let outcome = sift::solver::solve_traced(index, secret, opening, rules, |guess, fb, step| {
        let left = match step {
            Step::Guess { candidates, .. } => *candidates,
            Step::Solved { .. } => 1,
        };
        println!("{} -> {} ({} left)", guess.to_uppercase(), fb, left);
    })?;

    match outcome {
        Outcome::Solved { rounds, word } => {
            println!("Solved: {} after {} rounds", word.to_uppercase(), rounds)
        }
        Outcome::Exhausted { rounds } | Outcome::Abandoned { rounds } => {
            println!("Not solved after {} rounds", rounds)
        }
    }
    Ok(())
}

fn bench(index: &Index, opening: Word, rules: sift::Rules, max: Option<usize>) -> Result<()> {
    let start = Instant::now();
    let total = max.unwrap_or(usize::MAX).min(index.word_count());
    let mut rounds_total = 0;
    let mut solved = 0;
    let mut failed = 0;
    let mut histogram = Vec::new();

    for (i, secret) in index.words().take(total).enumerate() {
        if i > 0 && i % 1000 == 0 {
            log::info!("{}/{}", i, total);
        }
        let t = Instant::now();
        match sift::solve(index, secret, opening, rules)? {
            Outcome::Solved { rounds, .. } => {
                println!(
                    "Solved for {} in {} rounds in {:.3}s",
                    secret,
                    rounds,
                    t.elapsed().as_secs_f64()
                );
                solved += 1;
                rounds_total += rounds;
                if rounds >= histogram.len() {
                    histogram.resize(rounds + 1, 0);
                }
                histogram[rounds] += 1;
            }
            Outcome::Exhausted { rounds } | Outcome::Abandoned { rounds } => {
                eprintln!("failed to solve '{}' within {} rounds", secret, rounds);
                failed += 1;
            }
        }
    }

    for (rounds, count) in histogram.into_iter().enumerate().skip(1) {
        let frac = count as f64 / total as f64;
        let w1 = (30.0 * frac).round() as usize;
        let w2 = (30.0 * (1.0 - frac)).round() as usize;
        eprintln!(
            "{:>2}: {}{} ({})",
            rounds,
            "#".repeat(w1),
            " ".repeat(w2),
            count
        );
    }
    if solved > 0 {
        eprintln!("average rounds: {:.4}", rounds_total as f64 / solved as f64);
    }
    if failed > 0 {
        eprintln!("not solved: {}", failed);
    }
    eprintln!("total time: {:.2?}", start.elapsed());
    Ok(())
}

fn rank(index: &Index, top: usize) {
    let ranked = sift::rank(index);
    let words = |letters| {
        index
            .get(letters)
            .unwrap_or_default()
            .iter()
            .map(Word::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("Top and bottom scoring letter-sets");
    for r in ranked.iter().take(top) {
        println!("{}: {}", words(r.letters), r.score);
    }
    println!("...");
    for r in &ranked[ranked.len().saturating_sub(top)..] {
        println!("{}: {}", words(r.letters), r.score);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn default_solver() {
        let index = sift::Index::shipped();
        let results: Vec<_> = index
            .words()
            .take(20)
            .filter_map(|secret| {
                match sift::solve(index, secret, sift::OPENING, sift::Rules::Simplified) {
                    Ok(sift::Outcome::Solved { rounds, .. }) => Some(rounds),
                    _ => None,
                }
            })
            .collect();

        assert_eq!(
            results,
            [1, 3, 2, 1, 1, 2, 2, 2, 2, 3, 2, 2, 2, 5, 2, 3, 2, 2, 3, 2]
        );
    }

    #[test]
    fn parses_arguments() {
        use clap::Parser;

        let args = super::Args::parse_from(["sift", "bench", "--games", "3", "--rules", "standard"]);
        assert!(matches!(args.command, Some(super::Command::Bench { games: Some(3) })));
        assert!(matches!(args.rules, super::RulesArg::Standard));
        assert_eq!(args.opening, "arose");

        let args = super::Args::parse_from(["sift"]);
        assert!(args.command.is_none());
    }
}
