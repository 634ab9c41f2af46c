use super::card::Card;
use super::error::ParseError;
use super::evaluator::Evaluator;
use super::ranking::Ranking;
use super::strength::Strength;
use super::verdict::Verdict;

/// Exactly five cards, sorted ascending by rank at construction.
///
/// The sort happens once and is load-bearing: run detection and straight
/// detection in [`Evaluator`] assume it. Hands are value objects and are
/// never mutated afterwards.
///
/// Duplicate cards are accepted. The comparator does not assume both hands
/// came from a single physical deck, so "AS AS KD KC KH" is a legal full
/// house here; rejecting duplicates is a stricter game-level concern this
/// crate does not take on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand([Card; 5]);

impl Hand {
    pub const SIZE: usize = 5;

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    /// Highest card by rank (the last card, given the construction sort).
    pub fn high(&self) -> Card {
        self.0[Self::SIZE - 1]
    }

    /// The hand's category, high card through royal flush.
    pub fn ranking(&self) -> Ranking {
        Evaluator::from(*self).find_ranking()
    }

    /// The hand's full showdown value: category plus tie-breaking ranks.
    pub fn strength(&self) -> Strength {
        Strength::from(*self)
    }

    /// Total showdown order against another hand. `Greater` means this hand
    /// wins; two distinct hands compare `Equal` when no tiebreak separates
    /// them (suits never do).
    pub fn compare(&self, other: &Self) -> std::cmp::Ordering {
        self.strength().cmp(&other.strength())
    }

    /// Showdown verdict from this hand's perspective.
    pub fn compare_with(&self, other: &Self) -> Verdict {
        Verdict::from(self.compare(other))
    }
}

/// [Card; 5] isomorphism (up to permutation; construction sorts)
impl From<[Card; 5]> for Hand {
    fn from(mut cards: [Card; 5]) -> Self {
        cards.sort();
        Self(cards)
    }
}

/// Vec<Card> conversion, rejecting anything but exactly five cards
impl TryFrom<Vec<Card>> for Hand {
    type Error = ParseError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match <[Card; 5]>::try_from(cards) {
            Ok(cards) => Ok(Self::from(cards)),
            Err(cards) => Err(ParseError::WrongCardCount {
                count: cards.len(),
                input: cards
                    .iter()
                    .map(Card::to_string)
                    .collect::<Vec<String>>()
                    .join(" "),
            }),
        }
    }
}

/// str isomorphism
///
/// five two-character tokens separated by single spaces: "2H 3H 4H 5H 6H".
/// the first bad token wins; no partial hand is ever produced
impl TryFrom<&str> for Hand {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tokens = s.split(' ').collect::<Vec<&str>>();
        if tokens.len() != Self::SIZE {
            return Err(ParseError::WrongCardCount {
                count: tokens.len(),
                input: s.to_string(),
            });
        }
        tokens
            .into_iter()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn sorts_on_construction() {
        let hand = Hand::try_from("AS 2H TD 5C 5S").unwrap();
        assert_eq!(hand.to_string(), "2H 5C 5S TD AS");
        assert_eq!(hand.high().rank(), Rank::Ace);
    }

    #[test]
    fn order_insensitive() {
        let a = Hand::try_from("2H 3H 4H 5H 6H").unwrap();
        let b = Hand::try_from("6H 5H 4H 3H 2H").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(
            Hand::try_from("2H 3H 4H 5H"),
            Err(ParseError::WrongCardCount {
                count: 4,
                input: "2H 3H 4H 5H".to_string(),
            })
        );
        assert!(matches!(
            Hand::try_from("2H 3H 4H 5H 6H 7H"),
            Err(ParseError::WrongCardCount { count: 6, .. })
        ));
    }

    #[test]
    fn rejects_double_space() {
        // a doubled separator either inflates the token count or leaves an
        // empty token behind; both are refused
        assert!(matches!(
            Hand::try_from("2H  3H 4H 5H 6H"),
            Err(ParseError::WrongCardCount { count: 6, .. })
        ));
        assert_eq!(
            Hand::try_from("2H  3H 4H 5H"),
            Err(ParseError::MalformedToken(String::new()))
        );
    }

    #[test]
    fn propagates_first_bad_token() {
        assert_eq!(
            Hand::try_from("2H 3X 4H 1S 6H"),
            Err(ParseError::UnknownSuit('X'))
        );
    }

    #[test]
    fn accepts_duplicates() {
        let hand = Hand::try_from("AS AS KD KC KH").unwrap();
        assert_eq!(hand.to_string(), "KC KD KH AS AS");
    }
}
