/// A hand's category, the primary axis of showdown comparison.
///
/// Variants are ordered weakest to strongest, so `Ord` on the category
/// alone decides any cross-category showdown; only the margin within a
/// category falls to [`Kickers`].
///
/// Every five-card hand lands in exactly one category. Classification is
/// total: whatever matches nothing stronger is a high card.
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Ranking {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOfAKind => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOfAKind => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
            Ranking::RoyalFlush => write!(f, "RoyalFlush"),
        }
    }
}
