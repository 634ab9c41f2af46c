use super::error::ParseError;

/// Card rank, two through ace. The ace is high.
///
/// Discriminants are the card's face value, so `Ord` falls out of the
/// numeric order and the ace sits on top at 14. The ace never plays low
/// unless the `wheel` feature is enabled, and even then only inside
/// straight detection.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
}

/// u8 isomorphism
///
/// ranks map to their face value, 2..=14
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => unreachable!("invalid rank u8: {}", n),
        }
    }
}

/// char isomorphism
impl TryFrom<char> for Rank {
    type Error = ParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(ParseError::UnknownRank(c)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => '2',
                Rank::Three => '3',
                Rank::Four => '4',
                Rank::Five => '5',
                Rank::Six => '6',
                Rank::Seven => '7',
                Rank::Eight => '8',
                Rank::Nine => '9',
                Rank::Ten => 'T',
                Rank::Jack => 'J',
                Rank::Queen => 'Q',
                Rank::King => 'K',
                Rank::Ace => 'A',
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert!(rank == Rank::from(u8::from(rank)));
        }
    }

    #[test]
    fn bijective_char() {
        for rank in Rank::all() {
            let c = rank.to_string().chars().next().unwrap();
            assert_eq!(Rank::try_from(c).unwrap(), rank);
        }
    }

    #[test]
    fn ace_is_high() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Two < Rank::Three);
    }

    #[test]
    fn rejects_unknown_symbol() {
        assert_eq!(Rank::try_from('1'), Err(ParseError::UnknownRank('1')));
        assert_eq!(Rank::try_from('t'), Err(ParseError::UnknownRank('t')));
    }
}
