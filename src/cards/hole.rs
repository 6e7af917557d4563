use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards are
/// present.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Both cards, lower card first.
    pub fn cards(&self) -> (Card, Card) {
        let mut hand = self.0;
        let lo = hand.next().expect("hole has two cards");
        let hi = hand.next().expect("hole has two cards");
        (lo, hi)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (lo, hi) = self.cards();
        write!(f, "{}{}", hi, lo)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        debug_assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] if a == b => Err(Error::DuplicateCard(*a)),
            [a, b] => Ok(Self::from((*a, *b))),
            _ => Err(Error::InvalidHandFormat(cards.len())),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_cards_only() {
        assert!(Hole::try_from("AhKd").is_ok());
        assert_eq!(Hole::try_from("Ah"), Err(Error::InvalidHandFormat(1)));
        assert_eq!(Hole::try_from("AhKdQc"), Err(Error::InvalidHandFormat(3)));
        assert!(matches!(Hole::try_from("AhAh"), Err(Error::DuplicateCard(_))));
    }

    #[test]
    fn displays_high_card_first() {
        assert_eq!(Hole::try_from("2c As").unwrap().to_string(), "As2c");
    }
}
