use super::action::Action;
use super::odds::pot_odds;
use super::seat::Seat;
use super::stacks::Stacks;
use super::state::HandState;
use crate::Chips;
use crate::EPSILON;
use crate::Error;
use crate::Probability;
use crate::STACK;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::cards::Street;
use crate::players::Robot;

/// Something the hero should be told about.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Villain { seat: Seat, action: Action, pot: Chips },
    Prompt { to_call: Chips, pot: Chips, odds: Probability },
    Street { street: Street, board: Board, pot: Chips },
    Folded { pot: Chips },
    Won { pot: Chips },
    Showdown { pot: Chips },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Villain { seat, action, pot } => write!(f, "Villain ({}) {} (pot {:.1}bb)", seat, action, pot),
            Event::Prompt { to_call, pot, odds } if *to_call > EPSILON => write!(
                f,
                "To call {:.1}bb into {:.1}bb (pot odds {:.1}%)",
                to_call,
                pot,
                odds * 100.0
            ),
            Event::Prompt { pot, .. } => write!(f, "Pot is {:.1}bb, action is on you", pot),
            Event::Street { street, board, pot } => write!(f, "{} dealt: {} (pot {:.1}bb)", street, board, pot),
            Event::Folded { pot } => write!(f, "You fold. Final pot {:.1}bb", pot),
            Event::Won { pot } => write!(f, "All villains folded. You win {:.1}bb", pot),
            Event::Showdown { pot } => write!(f, "Showdown. Final pot {:.1}bb", pot),
        }
    }
}

/// One coaching hand: the hero against five scripted villains.
///
/// Each call to [`act`](Self::act) returns a new session and the events it
/// produced; the previous session is left as it was.
#[derive(Debug, Clone)]
pub struct Session {
    hero: Seat,
    hole: Hole,
    board: Board,
    deck: Deck,
    state: HandState,
    stacks: Stacks,
    over: bool,
}

impl Session {
    /// Seats a full table at 100bb, posts blinds, deals the hero in, and lets
    /// the villains ahead of the hero act.
    pub fn deal<R: rand::Rng + ?Sized>(hero: Seat, rng: &mut R) -> Result<(Self, Vec<Event>), Error> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let hole = deck.hole()?;
        let mut session = Self {
            hero,
            hole,
            deck,
            board: Board::empty(),
            state: HandState::fresh(),
            stacks: Stacks::init(&Seat::ALL, STACK).post_blinds()?,
            over: false,
        };
        log::info!("new hand: {} holds {}", hero, hole);
        let mut events = Vec::new();
        for seat in Seat::ALL.into_iter().take_while(|s| *s != hero) {
            events.push(session.villain(seat, rng)?);
        }
        match session.uncontested() {
            Some(won) => events.push(won),
            None => events.push(session.prompt()),
        }
        Ok((session, events))
    }

    /// Applies the hero's action, then runs the villains and the street.
    ///
    /// A `Call` with nothing owed is taken as a `Check`. Any other illegal
    /// action comes back as an error and the hero should be asked again.
    pub fn act<R: rand::Rng + ?Sized>(&self, action: Action, rng: &mut R) -> Result<(Self, Vec<Event>), Error> {
        if self.over {
            return Err(Error::IllegalAction {
                seat: self.hero,
                action,
                reason: "hand is over",
            });
        }
        let action = match action {
            Action::Call if self.to_call() <= EPSILON => Action::Check,
            action => action,
        };
        let mut next = self.clone();
        let mut events = Vec::new();
        let transition = self.state.apply(&self.stacks, self.hero, action)?;
        next.state = transition.state;
        next.stacks = transition.stacks;
        if transition.hand_complete {
            log::info!("{} folds", self.hero);
            next.over = true;
            events.push(Event::Folded { pot: next.state.pot() });
            return Ok((next, events));
        }
        for seat in next.villains() {
            events.push(next.villain(seat, rng)?);
        }
        if let Some(won) = next.uncontested() {
            events.push(won);
            return Ok((next, events));
        }
        if next.state.is_settled(&next.live(), &next.stacks) {
            events.extend(next.next_street()?);
        } else {
            events.push(next.prompt());
        }
        Ok((next, events))
    }

    pub fn hero(&self) -> Seat {
        self.hero
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn state(&self) -> &HandState {
        &self.state
    }
    pub fn stacks(&self) -> &Stacks {
        &self.stacks
    }
    pub fn is_over(&self) -> bool {
        self.over
    }
    /// What the hero owes right now.
    pub fn to_call(&self) -> Chips {
        self.state.to_call(self.hero)
    }

    /// Villains still in the hand, in rotation order.
    fn villains(&self) -> Vec<Seat> {
        Seat::ALL
            .into_iter()
            .filter(|s| *s != self.hero)
            .filter(|s| !self.state.is_folded(*s))
            .collect()
    }
    /// Hero plus live villains.
    fn live(&self) -> Vec<Seat> {
        Seat::ALL
            .into_iter()
            .filter(|s| !self.state.is_folded(*s))
            .collect()
    }
    fn villain<R: rand::Rng + ?Sized>(&mut self, seat: Seat, rng: &mut R) -> Result<Event, Error> {
        let response = Robot.respond(&self.state, &self.stacks, seat, rng)?;
        self.state = response.state;
        self.stacks = response.stacks;
        Ok(Event::Villain {
            seat,
            action: response.action,
            pot: self.state.pot(),
        })
    }
    /// Ends the hand when every villain has folded.
    fn uncontested(&mut self) -> Option<Event> {
        if !self.villains().is_empty() {
            return None;
        }
        log::info!("{} wins {:.1} uncontested", self.hero, self.state.pot());
        self.over = true;
        Some(Event::Won { pot: self.state.pot() })
    }
    fn prompt(&self) -> Event {
        let to_call = self.to_call();
        Event::Prompt {
            to_call,
            pot: self.state.pot(),
            odds: pot_odds(to_call, self.state.pot()),
        }
    }
    /// Deals the next street, or ends the hand after the river.
    fn next_street(&mut self) -> Result<Vec<Event>, Error> {
        self.state = self.state.advance(self.hero);
        let street = self.state.street();
        if street.is_terminal() {
            log::info!("showdown, pot {:.1}", self.state.pot());
            self.over = true;
            return Ok(vec![Event::Showdown { pot: self.state.pot() }]);
        }
        for card in self.deck.deal(street)? {
            self.board.push(card);
        }
        log::info!("{} {}", street, self.board);
        Ok(vec![
            Event::Street {
                street,
                board: self.board.clone(),
                pot: self.state.pot(),
            },
            self.prompt(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Keeps checking or calling until the hand ends.
    fn play_passively(session: Session, rng: &mut SmallRng) -> (Session, Vec<Event>) {
        let mut session = session;
        let mut log = Vec::new();
        while !session.is_over() {
            let (next, events) = session.act(Action::Call, rng).unwrap();
            session = next;
            log.extend(events);
        }
        (session, log)
    }

    #[test]
    fn deal_prompts_hero() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let (session, events) = Session::deal(Seat::CO, rng).unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], Event::Villain { seat: Seat::UTG, .. }));
        assert!(matches!(events[1], Event::Villain { seat: Seat::MP, .. }));
        assert!(matches!(events[2], Event::Prompt { .. }));
        assert_eq!(Hand::from(session.hole()).size(), 2);
        assert!(session.board().is_empty());
    }

    #[test]
    fn big_blind_wins_when_everyone_folds_to_it() {
        let mut walks = 0;
        for seed in 0..64 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let (session, events) = Session::deal(Seat::BB, rng).unwrap();
            if !session.villains().is_empty() {
                assert!(!session.is_over());
                assert!(matches!(events.last(), Some(Event::Prompt { .. })));
                continue;
            }
            walks += 1;
            assert!(session.is_over(), "seed {}", seed);
            assert_eq!(events.last(), Some(&Event::Won { pot: 1.5 }));
            assert!(!events.iter().any(|e| matches!(e, Event::Prompt { .. })));
            assert!(matches!(session.act(Action::Check, rng), Err(Error::IllegalAction { .. })));
        }
        assert!(walks > 0);
    }

    #[test]
    fn hero_fold_ends_hand() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let (session, _) = Session::deal(Seat::UTG, rng).unwrap();
        let (folded, events) = session.act(Action::Fold, rng).unwrap();
        assert!(folded.is_over());
        assert_eq!(events, vec![Event::Folded { pot: 1.5 }]);
        assert!(!session.is_over());
        assert!(matches!(
            folded.act(Action::Check, rng),
            Err(Error::IllegalAction { .. })
        ));
    }

    #[test]
    fn illegal_check_leaves_session() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let (session, _) = Session::deal(Seat::UTG, rng).unwrap();
        assert!(matches!(session.act(Action::Check, rng), Err(Error::IllegalAction { .. })));
        assert_eq!(session.state(), &HandState::fresh());
    }

    #[test]
    fn chips_conserved_through_hand() {
        for seed in 0..32 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let (session, _) = Session::deal(Seat::BTN, rng).unwrap();
            let (end, _) = play_passively(session, rng);
            let total = end.state().pot() + end.stacks().total();
            assert!((total - 600.0).abs() < 1e-3, "seed {}: {}", seed, total);
        }
    }

    #[test]
    fn streets_deal_board_in_order() {
        for seed in 0..64 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let (session, _) = Session::deal(Seat::SB, rng).unwrap();
            let (end, events) = play_passively(session, rng);
            let streets = events
                .iter()
                .filter_map(|e| match e {
                    Event::Street { street, board, .. } => Some((*street, board.len())),
                    _ => None,
                })
                .collect::<Vec<_>>();
            let expected: [(Street, usize); 3] = [(Street::Flop, 3), (Street::Turn, 4), (Street::Rive, 5)];
            assert_eq!(streets.as_slice(), &expected[..streets.len()]);
            match events.last() {
                Some(Event::Showdown { .. }) => {
                    assert_eq!(streets.len(), 3);
                    assert_eq!(end.state().street(), Street::Show);
                }
                Some(Event::Won { .. }) => assert!(end.villains().is_empty()),
                other => panic!("unexpected end {:?}", other),
            }
            let dealt = Hand::from(end.board());
            assert!(!Hand::overlaps(&dealt, &Hand::from(end.hole())));
        }
    }

    #[test]
    fn call_with_nothing_owed_checks() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..64 {
            let (session, _) = Session::deal(Seat::BB, rng).unwrap();
            if session.is_over() || session.to_call() > EPSILON {
                continue;
            }
            let (next, _) = session.act(Action::Call, rng).unwrap();
            assert_eq!(next.stacks().get(Seat::BB), Ok(99.0));
            return;
        }
        panic!("no unraised big blind in 64 deals");
    }
}
