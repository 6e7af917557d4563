use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;
use crate::Error;
use rand::seq::SliceRandom;

/// An ordered stack of the cards nobody holds yet.
///
/// Built from the 52-card universe minus an exclusion set, in canonical order.
/// The only mutations are [`shuffle`](Self::shuffle) and [`draw`](Self::draw),
/// both through `&mut self`, so a deck belongs to exactly one simulation step
/// at a time. Monte Carlo callers clone a residual deck per trial instead of
/// sharing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full, unshuffled 52-card deck.
    pub fn new() -> Self {
        Self::build(Hand::empty())
    }
    /// Every card not in `excluded`, unshuffled.
    pub fn build(excluded: Hand) -> Self {
        Self(excluded.complement().collect())
    }
    /// Uniform random permutation of the remaining cards (Fisher–Yates).
    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Removes and returns the top card.
    ///
    /// Running dry means the caller's exclusion bookkeeping is wrong, since
    /// 52 cards always cover a legal deal.
    pub fn draw(&mut self) -> Result<Card, Error> {
        self.0.pop().ok_or(Error::DeckEmpty)
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Result<Hole, Error> {
        let a = self.draw()?;
        let b = self.draw()?;
        Ok(Hole::from((a, b)))
    }
    /// Deals the board cards that open `street`.
    pub fn deal(&mut self, street: Street) -> Result<Vec<Card>, Error> {
        (0..street.n_revealed()).map(|_| self.draw()).collect()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&Deck> for Hand {
    fn from(deck: &Deck) -> Self {
        Hand::from(deck.0.as_slice())
    }
}
