use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::Error;

/// Community cards in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn push(&mut self, card: Card) {
        debug_assert!(self.0.len() < 5);
        self.0.push(card);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Street implied by the number of cards on the board.
    pub fn street(&self) -> Result<Street, Error> {
        Street::try_from(self.0.len())
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.cards())
    }
}

/// validated on the way in: 0, 3, 4, or 5 cards
impl TryFrom<Vec<Card>> for Board {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Street::try_from(cards.len())?;
        Ok(Self(cards))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_sets_street() {
        let board = Board::try_from(Card::parse("2c7s9d").unwrap()).unwrap();
        assert_eq!(board.street(), Ok(Street::Flop));
        assert_eq!(board.to_string(), "2c 7s 9d");
        assert_eq!(Board::empty().street(), Ok(Street::Pref));
    }

    #[test]
    fn partial_deal_is_not_a_street() {
        let mut board = Board::empty();
        board.push(Card::try_from("Ah").unwrap());
        assert_eq!(board.street(), Err(Error::InvalidBoardLength(1)));
        assert_eq!(Board::try_from(Card::parse("AhKh").unwrap()), Err(Error::InvalidBoardLength(2)));
    }
}
