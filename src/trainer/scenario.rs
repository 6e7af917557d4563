use super::answer::Answer;
use crate::Arbitrary;
use crate::Error;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::gameplay::Seat;
use crate::ranges::Combo;
use crate::ranges::RangeBook;

/// One preflop spot: open or fold with a random hand from a random seat.
///
/// The table holds the first 2 to 6 seats of the rotation. The right answer
/// is `Raise` when the combo is in the hero seat's opening range and `Fold`
/// otherwise; calling is never correct for an open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    seats: Vec<Seat>,
    hero: Seat,
    combo: Combo,
    hole: Hole,
    correct: Answer,
}

impl Scenario {
    pub fn random<R: rand::Rng + ?Sized>(book: &RangeBook, rng: &mut R) -> Result<Self, Error> {
        let players = rng.random_range(2..=Seat::ALL.len());
        let seats = Seat::ALL[..players].to_vec();
        let hero = seats[rng.random_range(0..players)];
        let combo = Combo::random(rng);
        let hole = combo.sample(Hand::empty(), rng)?;
        let correct = match book.seat(hero).is_some_and(|range| range.contains(&combo)) {
            true => Answer::Raise,
            false => Answer::Fold,
        };
        log::debug!("{} players, {} holds {} ({}), answer {}", players, hero, hole, combo, correct);
        Ok(Self {
            seats,
            hero,
            combo,
            hole,
            correct,
        })
    }
    pub fn grade(&self, answer: Answer) -> bool {
        answer == self.correct
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn hero(&self) -> Seat {
        self.hero
    }
    pub fn combo(&self) -> Combo {
        self.combo
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn correct(&self) -> Answer {
        self.correct
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}-handed, you are {} with {} ({})",
            self.seats.len(),
            self.hero,
            self.hole,
            self.combo
        )
    }
}

/// Running drill score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        self.correct += usize::from(correct);
    }
    pub fn correct(&self) -> usize {
        self.correct
    }
    pub fn total(&self) -> usize {
        self.total
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}
