use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's showdown strength.
///
/// Built from any 5 to 7 card Hand. Category and defining ranks come first,
/// kickers break the remaining ties, so the derived `Ord` is the showdown order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn kicker_breaks_tie() {
        assert!(strength("As Ad 9c 7h 3s 2d Kc") > strength("Ah Ac 9d 7s 3h 2c Qd"));
    }

    #[test]
    fn board_plays() {
        assert_eq!(strength("Ts Js Qs Ks As 2c 3d"), strength("Ts Js Qs Ks As 4c 5d"));
    }

    #[test]
    fn flush_beats_straight() {
        assert!(strength("2h 5h 9h Jh Kh") > strength("9c Td Jh Qs Kc"));
    }

    #[test]
    fn higher_flush_card_wins() {
        assert!(strength("Ah 9h 7h 4h 3h Kc") > strength("Ah 9h 7h 4h 2h Kc"));
    }
}
