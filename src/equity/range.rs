use super::report::Report;
use super::tally::Tally;
use crate::Error;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Street;
use crate::cards::Strength;
use crate::ranges::Range;

/// Range-versus-range equity on a fixed partial board.
///
/// Every trial samples a concrete hand for each side from its range, avoiding
/// the board and each other, then completes the board at random.
#[derive(Debug, Clone)]
pub struct RangeMatchup {
    hero: Range,
    villain: Range,
    board: Hand,
}

impl RangeMatchup {
    pub fn new(hero: Range, villain: Range, board: &[Card]) -> Result<Self, Error> {
        Street::try_from(board.len())?;
        let mut seen = Hand::empty();
        for card in board {
            if seen.contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
            seen.insert(*card);
        }
        for range in [&hero, &villain] {
            if range.is_empty() {
                return Err(Error::EmptyRange);
            }
        }
        Ok(Self {
            hero,
            villain,
            board: seen,
        })
    }

    pub fn simulate<R: rand::Rng + ?Sized>(&self, iterations: usize, rng: &mut R) -> Result<Report, Error> {
        if iterations == 0 {
            return Err(Error::NoIterations);
        }
        let mut tally = Tally::default();
        for _ in 0..iterations {
            let (_, hero) = self.hero.sample(self.board, rng)?;
            let dead = Hand::add(self.board, Hand::from(hero));
            let (_, villain) = self.villain.sample(dead, rng)?;
            let dead = Hand::add(dead, Hand::from(villain));
            let mut deck = Deck::build(dead);
            deck.shuffle(rng);
            let mut board = self.board;
            for _ in self.board.size()..5 {
                board.insert(deck.draw()?);
            }
            let hero = Strength::from(Hand::add(Hand::from(hero), board));
            let villain = Strength::from(Hand::add(Hand::from(villain), board));
            tally.record(hero.cmp(&villain));
        }
        log::debug!("range vs range on [{}]: {:?}", self.board, tally);
        Ok(Report::from(tally))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn premium_range_ahead() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let hero = Range::from_tokens(&["QQ+", "AKs"]);
        let villain = Range::from_tokens(&["22+", "A2s+", "K9o+"]);
        let report = RangeMatchup::new(hero, villain, &[]).unwrap().simulate(4_000, rng).unwrap();
        assert!(report.hero > 65.0, "{}", report);
    }

    #[test]
    fn blocked_combos_are_skipped() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let board = Card::parse("AcAdAh").unwrap();
        let hero = Range::from_tokens(&["AA", "KK"]);
        let villain = Range::from_tokens(&["QQ"]);
        let report = RangeMatchup::new(hero, villain, &board).unwrap().simulate(200, rng).unwrap();
        assert!(report.hero > 85.0, "{}", report);
    }

    #[test]
    fn rejects_bad_setup() {
        let ok = || Range::expand("AA");
        assert_eq!(
            RangeMatchup::new(Range::empty(), ok(), &[]).map(|_| ()),
            Err(Error::EmptyRange)
        );
        let board = Card::parse("2c3c").unwrap();
        assert_eq!(
            RangeMatchup::new(ok(), ok(), &board).map(|_| ()),
            Err(Error::InvalidBoardLength(2))
        );
    }

    #[test]
    fn mirrored_ranges_are_even() {
        let ref mut rng = SmallRng::seed_from_u64(8);
        let range = Range::from_tokens(&["TT+", "AQs+"]);
        let report = RangeMatchup::new(range.clone(), range, &[]).unwrap().simulate(6_000, rng).unwrap();
        assert!(report.hero > 46.0 && report.hero < 54.0, "{}", report);
    }
}
