use super::combo::Combo;
use super::range::Range;
use super::shape::Shape;
use crate::Error;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Suit;
use rand::seq::IndexedRandom;

impl Combo {
    /// Every concrete hole-card pair in this class.
    ///
    /// Pairs take two distinct suits of one rank, suited combos share a suit,
    /// offsuit combos use two distinct suits, one per rank.
    pub fn holes(&self) -> Vec<Hole> {
        let (hi, lo) = (self.hi(), self.lo());
        let suits = Suit::all();
        let hole = |a: Suit, b: Suit| Hole::from((Card::from((hi, a)), Card::from((lo, b))));
        match self.shape() {
            Shape::Pair => suits
                .iter()
                .flat_map(|a| suits.iter().filter(move |b| a < *b).map(move |b| hole(*a, *b)))
                .collect(),
            Shape::Suited => suits.iter().map(|s| hole(*s, *s)).collect(),
            Shape::Offsuit => suits
                .iter()
                .flat_map(|a| suits.iter().filter(move |b| a != *b).map(move |b| hole(*a, *b)))
                .collect(),
        }
    }
    /// Holes in this class that avoid every card in `excluded`.
    pub fn available(&self, excluded: Hand) -> Vec<Hole> {
        self.holes()
            .into_iter()
            .filter(|h| !Hand::overlaps(&Hand::from(*h), &excluded))
            .collect()
    }
    /// One concrete hole, uniform over the suit assignments that avoid
    /// `excluded`.
    pub fn sample<R: rand::Rng + ?Sized>(&self, excluded: Hand, rng: &mut R) -> Result<Hole, Error> {
        self.available(excluded)
            .choose(rng)
            .copied()
            .ok_or(Error::ComboExhausted(*self))
    }
}

impl Range {
    /// A combo drawn uniformly from the classes that still have a live
    /// suit assignment, then a concrete hole for it.
    pub fn sample<R: rand::Rng + ?Sized>(&self, excluded: Hand, rng: &mut R) -> Result<(Combo, Hole), Error> {
        let live = self
            .iter()
            .filter(|c| !c.available(excluded).is_empty())
            .copied()
            .collect::<Vec<Combo>>();
        match live.choose(rng) {
            Some(combo) => Ok((*combo, combo.sample(excluded, rng)?)),
            None => match self.iter().next() {
                Some(combo) => Err(Error::ComboExhausted(*combo)),
                None => Err(Error::EmptyRange),
            },
        }
    }
}
