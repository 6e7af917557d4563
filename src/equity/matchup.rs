use super::report::Report;
use super::tally::Tally;
use crate::Error;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;
use crate::cards::Strength;
use std::cmp::Ordering;

/// Two known hands and a partial board, ready for Monte Carlo runouts.
///
/// Construction validates everything up front, so simulation itself can
/// only fail on a non-positive iteration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    hero: Hole,
    villain: Hole,
    board: Hand,
}

impl Matchup {
    /// Checks, in order: two cards per hand, a board of 0/3/4/5 cards, and no
    /// card appearing twice anywhere.
    pub fn new(hero: &[Card], villain: &[Card], board: &[Card]) -> Result<Self, Error> {
        for hand in [hero, villain] {
            if hand.len() != 2 {
                return Err(Error::InvalidHandFormat(hand.len()));
            }
        }
        Street::try_from(board.len())?;
        let mut seen = Hand::empty();
        for card in hero.iter().chain(villain).chain(board) {
            if seen.contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
            seen.insert(*card);
        }
        Ok(Self {
            hero: Hole::try_from(hero)?,
            villain: Hole::try_from(villain)?,
            board: Hand::from(board),
        })
    }
    pub fn hero(&self) -> Hole {
        self.hero
    }
    pub fn villain(&self) -> Hole {
        self.villain
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    /// Every card already accounted for.
    pub fn known(&self) -> Hand {
        Hand::add(Hand::add(Hand::from(self.hero), Hand::from(self.villain)), self.board)
    }

    /// Estimates both sides' equity over `iterations` independent runouts.
    ///
    /// Each trial shuffles a fresh copy of the residual deck, so results vary
    /// from run to run unless the generator is seeded.
    pub fn simulate<R: rand::Rng + ?Sized>(&self, iterations: usize, rng: &mut R) -> Result<Report, Error> {
        if iterations == 0 {
            return Err(Error::NoIterations);
        }
        let tally = self.tally(iterations, rng)?;
        log::debug!("{} vs {} on [{}]: {:?}", self.hero, self.villain, self.board, tally);
        Ok(Report::from(tally))
    }

    /// Same estimate with the iterations split across rayon workers, each
    /// with its own generator seeded from `seed` and its own deck.
    #[cfg(feature = "parallel")]
    pub fn simulate_parallel(&self, iterations: usize, seed: u64) -> Result<Report, Error> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        use rayon::prelude::*;
        if iterations == 0 {
            return Err(Error::NoIterations);
        }
        let workers = rayon::current_num_threads().max(1);
        let tally = (0..workers)
            .into_par_iter()
            .map(|i| (i, iterations / workers + usize::from(i < iterations % workers)))
            .map(|(i, n)| self.tally(n, &mut SmallRng::seed_from_u64(seed.wrapping_add(i as u64))))
            .collect::<Result<Vec<Tally>, Error>>()?
            .into_iter()
            .sum::<Tally>();
        Ok(Report::from(tally))
    }

    fn tally<R: rand::Rng + ?Sized>(&self, iterations: usize, rng: &mut R) -> Result<Tally, Error> {
        let residual = Deck::build(self.known());
        (0..iterations)
            .map(|_| self.trial(&residual, rng))
            .collect::<Result<Tally, Error>>()
    }
    /// One random completion of the board, compared from the hero's side.
    fn trial<R: rand::Rng + ?Sized>(&self, residual: &Deck, rng: &mut R) -> Result<Ordering, Error> {
        let mut deck = residual.clone();
        deck.shuffle(rng);
        let mut board = self.board;
        for _ in self.board.size()..5 {
            board.insert(deck.draw()?);
        }
        let hero = Strength::from(Hand::add(Hand::from(self.hero), board));
        let villain = Strength::from(Hand::add(Hand::from(self.villain), board));
        Ok(hero.cmp(&villain))
    }
}

/// Wire format: two 4-character hands and a 0/6/8/10-character board.
impl TryFrom<(&str, &str, &str)> for Matchup {
    type Error = Error;
    fn try_from((hero, villain, board): (&str, &str, &str)) -> Result<Self, Self::Error> {
        Self::new(&Card::parse(hero)?, &Card::parse(villain)?, &Card::parse(board)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn matchup(hero: &str, villain: &str, board: &str) -> Result<Matchup, Error> {
        Matchup::try_from((hero, villain, board))
    }

    #[test]
    fn aces_over_kings() {
        let ref mut rng = SmallRng::seed_from_u64(0xACE);
        let report = matchup("AhAd", "KhKd", "").unwrap().simulate(20_000, rng).unwrap();
        assert!(report.hero > 79.0 && report.hero < 84.0, "{}", report);
        assert!((report.hero + report.villain - 100.0).abs() < 0.02);
    }

    #[test]
    fn mirrored_hands_split() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let report = matchup("AhKd", "AsKc", "").unwrap().simulate(10_000, rng).unwrap();
        assert!(report.hero > 45.0 && report.hero < 55.0, "{}", report);
        assert!(report.tally.ties() > report.tally.wins());
    }

    #[test]
    fn river_is_decided() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let report = matchup("AhAd", "KhKd", "2c7s9dJcKs").unwrap().simulate(50, rng).unwrap();
        assert_eq!(report.hero, 0.0);
        assert_eq!(report.villain, 100.0);
    }

    #[test]
    fn board_counts_toward_both() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let report = matchup("2c3d", "4h5s", "AhKhQhJhTh").unwrap().simulate(10, rng).unwrap();
        assert_eq!(report.tally.ties(), 10);
        assert_eq!(report.hero, 50.0);
    }

    #[test]
    fn runouts_never_reuse_known_cards() {
        let m = matchup("AhAd", "KhKd", "2c7s9d").unwrap();
        let residual = Deck::build(m.known());
        assert_eq!(residual.len(), 52 - 7);
        assert!(!Hand::overlaps(&Hand::from(&residual), &m.known()));
    }

    #[test]
    fn same_seed_same_estimate() {
        let m = matchup("QsJs", "9c9d", "").unwrap();
        let a = m.simulate(500, &mut SmallRng::seed_from_u64(3)).unwrap();
        let b = m.simulate(500, &mut SmallRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(matchup("AhAd", "AhKd", ""), Err(Error::DuplicateCard(_))));
        assert!(matches!(matchup("AhAd", "KhKd", "Ad2c3c"), Err(Error::DuplicateCard(_))));
        assert_eq!(matchup("AhAd", "KhKd", "2c3c"), Err(Error::InvalidBoardLength(2)));
        assert_eq!(matchup("AhAdAc", "KhKd", ""), Err(Error::InvalidHandFormat(3)));
        assert_eq!(matchup("Ah", "KhKd", ""), Err(Error::InvalidHandFormat(1)));
        assert!(matches!(matchup("AhXd", "KhKd", ""), Err(Error::InvalidCard(_))));
        let ref mut rng = SmallRng::seed_from_u64(0);
        let m = matchup("AhAd", "KhKd", "").unwrap();
        assert_eq!(m.simulate(0, rng), Err(Error::NoIterations));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_counts_every_iteration() {
        let m = matchup("AhAd", "KhKd", "").unwrap();
        let report = m.simulate_parallel(10_001, 42).unwrap();
        assert_eq!(report.tally.total(), 10_001);
        assert!(report.hero > 78.0 && report.hero < 85.0, "{}", report);
        assert_eq!(m.simulate_parallel(0, 42), Err(Error::NoIterations));
    }
}
