use crate::Percent;
use std::cmp::Ordering;

/// Win/tie/loss counts from the hero's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: usize,
    ties: usize,
    losses: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn total(&self) -> usize {
        self.wins + self.ties + self.losses
    }
    /// Hero equity in percent: wins plus half the ties.
    pub fn hero(&self) -> Percent {
        Self::percent(self.wins, self.ties, self.total())
    }
    /// Villain equity in percent.
    pub fn villain(&self) -> Percent {
        Self::percent(self.losses, self.ties, self.total())
    }
    fn percent(wins: usize, ties: usize, total: usize) -> Percent {
        match total {
            0 => 0.0,
            n => (wins as Percent + ties as Percent / 2.0) / n as Percent * 100.0,
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl FromIterator<Ordering> for Tally {
    fn from_iter<I: IntoIterator<Item = Ordering>>(iter: I) -> Self {
        let mut tally = Self::default();
        for outcome in iter {
            tally.record(outcome);
        }
        tally
    }
}
