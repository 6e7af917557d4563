use super::book::Entry;
use super::book::Shorthand;
use crate::gameplay::Seat;

impl Shorthand {
    /// Default 6-max open-raise chart, one flat token list per seat.
    pub fn six_max() -> Self {
        let mut shorthand = Self::default();
        for seat in Seat::ALL {
            let tokens = match seat {
                Seat::UTG => &["77+", "ATs+", "AQo+", "KQs"][..],
                Seat::MP => &["66+", "A9s+", "KJs+", "QTs+", "JTs", "ATo+", "KQo"][..],
                Seat::CO => &["55+", "A5s+", "K9s+", "QTs+", "JTs+", "T9s+", "ATo+", "KJo", "QJo"][..],
                Seat::BTN => &[
                    "22+", "A2s+", "K2s+", "Q2s+", "J2s+", "T2s+", "A2o+", "KTo+", "QTo+", "JTo", "T9s+", "98s+",
                    "87s+", "76s+", "65s+", "54s+",
                ][..],
                Seat::SB | Seat::BB => &[
                    "22+", "A2s+", "K5s+", "Q9s+", "J9s+", "T8s+", "98s+", "87s+", "76s+", "65s+", "54s+", "A2o+",
                    "K9o+", "QTo+", "JTo",
                ][..],
            };
            let tokens = tokens.iter().map(|t| t.to_string()).collect();
            shorthand.insert(&seat.to_string(), Entry::Flat(tokens));
        }
        shorthand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::Combo;
    use crate::ranges::RangeBook;

    #[test]
    fn every_seat_has_an_opening_range() {
        let book = RangeBook::expand_all(&Shorthand::six_max());
        for seat in Seat::ALL {
            assert!(book.seat(seat).is_some_and(|r| !r.is_empty()), "{}", seat);
        }
    }

    #[test]
    fn ranges_widen_with_position() {
        let book = RangeBook::expand_all(&Shorthand::six_max());
        let size = |seat| book.seat(seat).map(|r| r.n_combos()).unwrap_or_default();
        assert!(size(Seat::UTG) < size(Seat::MP));
        assert!(size(Seat::MP) < size(Seat::CO));
        assert!(size(Seat::CO) < size(Seat::BTN));
    }

    #[test]
    fn under_the_gun() {
        let book = RangeBook::expand_all(&Shorthand::six_max());
        let utg = book.seat(Seat::UTG).unwrap();
        assert_eq!(utg.len(), 15);
        assert!(utg.contains(&Combo::try_from("KQs").unwrap()));
        assert!(!utg.contains(&Combo::try_from("KQo").unwrap()));
    }
}
