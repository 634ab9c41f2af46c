use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// Classifies a hand by probing categories strongest to weakest.
///
/// Category shapes are mutually exclusive once runs are detected correctly,
/// so the first predicate to match is the answer and anything that matches
/// nothing stronger is a high card. Every predicate assumes the hand's
/// construction sort.
///
/// The ace only plays low in straights under the `wheel` feature; by
/// default "AS 2H 3D 4C 5S" is an ace-high nothing.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_pair())
            .or_else(|| self.find_1_pair())
            .unwrap_or(Ranking::HighCard)
    }

    /// The hand's five ranks in tie-breaking order. See [`Kickers`].
    pub fn find_kickers(&self) -> Kickers {
        #[cfg(feature = "wheel")]
        if self.is_wheel() {
            return Kickers::from(vec![
                Rank::Five,
                Rank::Four,
                Rank::Three,
                Rank::Two,
                Rank::Ace,
            ]);
        }
        let mut groups = self.runs();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
        Kickers::from(
            groups
                .into_iter()
                .flat_map(|(rank, len)| std::iter::repeat(rank).take(len))
                .collect::<Vec<Rank>>(),
        )
    }

    ///

    fn find_royal_flush(&self) -> Option<Ranking> {
        (self.is_flush() && self.find_rank_of_straight() == Some(Rank::Ace))
            .then_some(Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.is_flush() && self.find_rank_of_straight().is_some())
            .then_some(Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        (self.longest_run().1 == 4).then_some(Ranking::FourOfAKind)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        (self.profile() == [3, 2]).then_some(Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.is_flush().then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(|_| Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        (self.profile() == [3, 1, 1]).then_some(Ranking::ThreeOfAKind)
    }
    fn find_2_pair(&self) -> Option<Ranking> {
        (self.profile() == [2, 2, 1]).then_some(Ranking::TwoPair)
    }
    fn find_1_pair(&self) -> Option<Ranking> {
        (self.profile() == [2, 1, 1, 1]).then_some(Ranking::OnePair)
    }

    /// High rank of the straight, if the five sorted ranks are consecutive
    /// with no gaps and no repeats.
    fn find_rank_of_straight(&self) -> Option<Rank> {
        let cards = self.0.cards();
        let consecutive = cards
            .windows(2)
            .all(|w| u8::from(w[1].rank()) == u8::from(w[0].rank()) + 1);
        if consecutive {
            return Some(self.0.high().rank());
        }
        #[cfg(feature = "wheel")]
        if self.is_wheel() {
            return Some(Rank::Five);
        }
        None
    }

    /// All maximal equal-rank runs, in ascending rank order.
    fn runs(&self) -> Vec<(Rank, usize)> {
        let mut runs: Vec<(Rank, usize)> = Vec::new();
        for card in self.0.cards() {
            match runs.last_mut() {
                Some((rank, len)) if *rank == card.rank() => *len += 1,
                _ => runs.push((card.rank(), 1)),
            }
        }
        runs
    }

    /// Longest equal-rank run as (start index, length), scanning the sorted
    /// hand once. Ties keep the first-seen (lowest-rank) run.
    fn longest_run(&self) -> (usize, usize) {
        let cards = self.0.cards();
        let mut best = (0, 1);
        let mut start = 0;
        for i in 1..cards.len() {
            if cards[i].rank() != cards[start].rank() {
                start = i;
            }
            let len = i - start + 1;
            if len > best.1 {
                best = (start, len);
            }
        }
        best
    }

    /// Rank-count multiset, largest count first.
    fn profile(&self) -> Vec<usize> {
        let mut counts = self
            .runs()
            .into_iter()
            .map(|(_, len)| len)
            .collect::<Vec<usize>>();
        counts.sort_by(|a, b| b.cmp(a));
        counts
    }

    fn is_flush(&self) -> bool {
        let suit = self.0.cards()[0].suit();
        self.0.cards().iter().all(|c| c.suit() == suit)
    }

    #[cfg(feature = "wheel")]
    fn is_wheel(&self) -> bool {
        const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
        self.0
            .cards()
            .iter()
            .map(|c| c.rank())
            .eq(WHEEL.iter().copied())
    }
}


#[cfg(test)]
#[cfg(feature = "wheel")]
mod wheel_tests {
    use super::*;

    #[test]
    fn wheel_straight() {
        let eval = Evaluator::from(Hand::try_from("AS 2H 3D 4C 5S").unwrap());
        assert_eq!(eval.find_ranking(), Ranking::Straight);
        assert_eq!(eval.find_kickers().lead(), Rank::Five);
    }

    #[test]
    fn wheel_straight_flush() {
        let eval = Evaluator::from(Hand::try_from("AH 2H 3H 4H 5H").unwrap());
        assert_eq!(eval.find_ranking(), Ranking::StraightFlush);
        assert_eq!(eval.find_kickers().lead(), Rank::Five);
    }

    #[test]
    fn wheel_is_the_lowest_straight() {
        let wheel = Hand::try_from("AS 2H 3D 4C 5S").unwrap();
        let six_high = Hand::try_from("2S 3H 4D 5C 6S").unwrap();
        assert!(wheel.strength() < six_high.strength());
    }
}
