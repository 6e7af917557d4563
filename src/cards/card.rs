use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52`
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards parse from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs). Use [`Card::parse`] for several at once.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Every card in canonical order, 2c first and As last.
    pub fn all() -> impl Iterator<Item = Card> {
        (0u8..52).map(Card)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => match (Rank::parse(r), Suit::parse(s)) {
                (Some(rank), Some(suit)) => Ok(Card::from((rank, suit))),
                _ => Err(Error::InvalidCard(format!("{}{}", r, s))),
            },
            _ => Err(Error::InvalidCard(s.to_string())),
        }
    }
}

impl Card {
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    /// An odd trailing character or an unknown rank/suit is an error.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn ten_of_spades() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(u8::from(card), 35);
        assert_eq!(card.to_string(), "Ts");
    }

    #[test]
    fn parse_concatenated() {
        let cards = Card::parse("AhKd 2c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].to_string(), "Ah");
        assert_eq!(cards[1].to_string(), "Kd");
        assert_eq!(cards[2].to_string(), "2c");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(Card::parse("AhK"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::parse("Xh"), Err(Error::InvalidCard(_))));
        assert!(Card::parse("").unwrap().is_empty());
    }
}
