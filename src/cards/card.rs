use super::error::ParseError;
use super::rank::Rank;
use super::suit::Suit;

/// An immutable (rank, suit) pair.
///
/// Field order makes the derived `Ord` rank-major with suit as a stable
/// secondary key; the suit component never influences hand comparison.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// str isomorphism
///
/// exactly two characters, rank then suit: "AS", "TD", "2H".
/// the accepted symbols are the exact inverse of Display, so
/// parse-then-render returns the input unchanged for every valid token
impl TryFrom<&str> for Card {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.chars().collect::<Vec<char>>().as_slice() {
            [rank, suit] => Ok(Self::from((Rank::try_from(*rank)?, Suit::try_from(*suit)?))),
            _ => Err(ParseError::MalformedToken(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
