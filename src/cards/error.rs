use thiserror::Error;

/// Everything that can go wrong turning text into cards.
///
/// All failures are detected at parse time and carry the offending input;
/// classification and comparison operate on already-valid hands and are
/// total. There is no recovery here, a bad line is the caller's problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("card token must be exactly two characters: {0:?}")]
    MalformedToken(String),

    #[error("unknown rank symbol: {0:?}")]
    UnknownRank(char),

    #[error("unknown suit symbol: {0:?}")]
    UnknownSuit(char),

    #[error("expected exactly five cards, got {count}: {input:?}")]
    WrongCardCount { count: usize, input: String },
}
