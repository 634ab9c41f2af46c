use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use std::cmp::Ordering;

/// A fully-evaluated hand: category plus tie-breaking ranks.
///
/// The total order is the showdown order. Categories compare first; equal
/// categories fall to a tiebreak selected by an exhaustive match over the
/// closed [`Ranking`] set, so a new category cannot silently inherit a
/// wildcard rule.
///
/// Equality follows the showdown order, not card identity: hands that tie
/// at showdown are equal strengths even when their suits differ.
#[derive(Debug, Clone)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kicks
    }

    /// Category-specific tiebreak between equally-ranked hands.
    ///
    /// Straights (flush or not) carry no kicker: the high rank decides and
    /// suits never do. Four of a kind compares the quad rank alone, which
    /// can genuinely tie because duplicate cards are representable. The
    /// grouped categories compare all five ranks positionally, defining
    /// group first.
    fn tiebreak(&self, other: &Self) -> Ordering {
        match self.value {
            Ranking::RoyalFlush | Ranking::StraightFlush | Ranking::Straight => {
                self.kicks.lead().cmp(&other.kicks.lead())
            }
            Ranking::FourOfAKind => self.kicks.lead().cmp(&other.kicks.lead()),
            Ranking::FullHouse
            | Ranking::Flush
            | Ranking::ThreeOfAKind
            | Ranking::TwoPair
            | Ranking::OnePair
            | Ranking::HighCard => self.kicks.cmp(&other.kicks),
        }
    }
}

impl Ord for Strength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.tiebreak(other))
    }
}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Strength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Strength {}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}
impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers();
        Self::from((value, kicks))
    }
}
impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{}", self.value.to_string(), self.kicks)
    }
}
