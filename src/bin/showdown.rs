//! Showdown CLI
//!
//! Classify a five-card hand or compare two hands and report the verdict
//! from the first hand's perspective.
//!
//! Hands are five two-character cards separated by single spaces, rank
//! then suit: `"2H 3H 4H 5H 6H"`.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use showdown::cards::Hand;
use showdown::cards::Ranking;
use showdown::cards::Verdict;

#[derive(Parser)]
#[command(name = "showdown", version, about = "Five-card hold'em showdown")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a hand, e.g. rank "AS AD AC AH JD"
    Rank {
        /// five two-character cards separated by single spaces
        hand: String,
    },
    /// Compare two hands; the verdict is the first hand's
    Compare {
        first: String,
        second: String,
        /// emit a one-line JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(serde::Serialize)]
struct Report {
    first: String,
    second: String,
    first_ranking: Ranking,
    second_ranking: Ranking,
    verdict: Verdict,
}

fn main() -> anyhow::Result<()> {
    showdown::log();
    match Args::parse().command {
        Command::Rank { hand } => rank(&hand),
        Command::Compare {
            first,
            second,
            json,
        } => compare(&first, &second, json),
    }
}

fn rank(hand: &str) -> anyhow::Result<()> {
    let hand = Hand::try_from(hand.trim()).context("parse hand")?;
    log::debug!("parsed {}", hand);
    println!("{}", hand.strength());
    Ok(())
}

fn compare(first: &str, second: &str, json: bool) -> anyhow::Result<()> {
    let a = Hand::try_from(first.trim()).context("parse first hand")?;
    let b = Hand::try_from(second.trim()).context("parse second hand")?;
    let verdict = a.compare_with(&b);
    log::debug!("{} -> {}", a, a.strength());
    log::debug!("{} -> {}", b, b.strength());
    if json {
        let report = Report {
            first: a.to_string(),
            second: b.to_string(),
            first_ranking: a.ranking(),
            second_ranking: b.ranking(),
            verdict,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{:<18}{}", a.strength().to_string(), a);
        println!("{:<18}{}", b.strength().to_string(), b);
        println!(
            "{}",
            match verdict {
                Verdict::Win => "Win".green(),
                Verdict::Lose => "Lose".red(),
                Verdict::Tie => "Tie".yellow(),
            }
        );
    }
    Ok(())
}
