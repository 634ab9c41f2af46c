use std::cmp::Ordering;

/// Showdown outcome from the first hand's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Verdict {
    Win,
    Lose,
    Tie,
}

/// Ordering isomorphism
impl From<Ordering> for Verdict {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Verdict::Win,
            Ordering::Less => Verdict::Lose,
            Ordering::Equal => Verdict::Tie,
        }
    }
}
impl From<Verdict> for Ordering {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Win => Ordering::Greater,
            Verdict::Lose => Ordering::Less,
            Verdict::Tie => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Win => write!(f, "Win"),
            Verdict::Lose => write!(f, "Lose"),
            Verdict::Tie => write!(f, "Tie"),
        }
    }
}
