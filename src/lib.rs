//! Five-card Texas Hold'em hand classification and showdown comparison.
//!
//! Two hands of exactly five cards are parsed from text, classified into
//! one of the ten hold'em categories, and totally ordered by category and
//! category-specific tiebreak. Suits detect flushes and render cards; they
//! never break a tie.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` pair
//! - [`Hand`] — Exactly five cards, sorted by rank at construction
//! - [`Ranking`] — Hand category (high card through royal flush)
//! - [`Strength`] — Evaluated category with kicker resolution
//! - [`Verdict`] — Win/Lose/Tie from the first hand's perspective
//!
//! ## Evaluation
//!
//! [`Evaluator`] runs the category predicates strongest to weakest over the
//! sorted hand; [`Kickers`] carries the tie-breaking rank order.
//!
//! [`Card`]: cards::Card
//! [`Hand`]: cards::Hand
//! [`Ranking`]: cards::Ranking
//! [`Strength`]: cards::Strength
//! [`Verdict`]: cards::Verdict
//! [`Evaluator`]: cards::Evaluator
//! [`Kickers`]: cards::Kickers

pub mod cards;

/// Initialize terminal logging for binaries.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
