use super::seat::Seat;
use crate::B_BLIND;
use crate::Chips;
use crate::Error;
use crate::S_BLIND;
use std::collections::BTreeMap;

/// Chips behind for every seated player.
///
/// A value type: every change returns a new `Stacks`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stacks(BTreeMap<Seat, Chips>);

impl Stacks {
    pub fn init(seats: &[Seat], starting: Chips) -> Self {
        Self(seats.iter().map(|s| (*s, starting)).collect())
    }
    /// Takes the small and big blind from the SB and BB seats.
    pub fn post_blinds(&self) -> Result<Self, Error> {
        self.pay(Seat::SB, S_BLIND)?.pay(Seat::BB, B_BLIND)
    }
    /// Moves `amount` out of `seat`'s stack. The caller caps it first.
    pub fn pay(&self, seat: Seat, amount: Chips) -> Result<Self, Error> {
        let stack = self.get(seat)?;
        let mut next = self.clone();
        next.0.insert(seat, stack - amount);
        Ok(next)
    }
    pub fn get(&self, seat: Seat) -> Result<Chips, Error> {
        self.0.get(&seat).copied().ok_or(Error::Unseated(seat))
    }
    pub fn contains(&self, seat: Seat) -> bool {
        self.0.contains_key(&seat)
    }
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.0.keys().copied()
    }
    pub fn total(&self) -> Chips {
        self.0.values().sum()
    }
}

impl std::fmt::Display for Stacks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let stacks = self
            .0
            .iter()
            .map(|(seat, stack)| format!("{} {:.1}", seat, stack))
            .collect::<Vec<_>>();
        write!(f, "{}", stacks.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinds_posted() {
        let stacks = Stacks::init(&Seat::ALL, 100.0).post_blinds().unwrap();
        assert_eq!(stacks.get(Seat::SB), Ok(99.5));
        assert_eq!(stacks.get(Seat::BB), Ok(99.0));
        assert_eq!(stacks.get(Seat::UTG), Ok(100.0));
        assert_eq!(stacks.total(), 598.5);
    }

    #[test]
    fn blinds_need_both_seats() {
        let stacks = Stacks::init(&[Seat::BTN, Seat::BB], 100.0);
        assert_eq!(stacks.post_blinds(), Err(Error::Unseated(Seat::SB)));
    }
}
