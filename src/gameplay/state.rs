use super::action::Action;
use super::seat::Seat;
use super::stacks::Stacks;
use crate::B_BLIND;
use crate::Chips;
use crate::EPSILON;
use crate::Error;
use crate::S_BLIND;
use crate::cards::Street;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Betting state of one hand.
///
/// Tracks the street, who acts next, the pot, what each seat has put in on
/// this street, the bet to match, the minimum raise-to target, and who has
/// folded. Stacks live beside it in [`Stacks`]. Every operation returns a
/// fresh value, so a rejected action leaves the caller's copy untouched.
///
/// Round completion is the simple "nobody live is short of the current bet"
/// test. It is sound for one human acting against scripted villains who all
/// respond in turn, but it is not a general closure rule: with several
/// independent humans it needs last-aggressor tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct HandState {
    street: Street,
    actor: Seat,
    pot: Chips,
    current_bet: Chips,
    last_raise: Chips,
    min_raise_to: Chips,
    contributions: BTreeMap<Seat, Chips>,
    folded: BTreeSet<Seat>,
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: HandState,
    pub stacks: Stacks,
    pub round_complete: bool,
    pub hand_complete: bool,
}

impl HandState {
    /// Preflop with the blinds in: pot 1.5, one big blind to match, UTG to act.
    ///
    /// The blinds count as this street's contributions for SB and BB, so the
    /// small blind completes for half a blind.
    pub fn fresh() -> Self {
        Self {
            street: Street::Pref,
            actor: Seat::UTG,
            pot: S_BLIND + B_BLIND,
            current_bet: B_BLIND,
            last_raise: B_BLIND,
            min_raise_to: B_BLIND * 2.0,
            contributions: BTreeMap::from([(Seat::SB, S_BLIND), (Seat::BB, B_BLIND)]),
            folded: BTreeSet::new(),
        }
    }
    /// Same street, betting reopened: nothing to match, contributions cleared.
    /// Pot and folds carry over.
    pub fn start_street(&self, first: Seat) -> Self {
        Self {
            actor: first,
            current_bet: 0.0,
            last_raise: B_BLIND,
            min_raise_to: B_BLIND,
            contributions: BTreeMap::new(),
            ..self.clone()
        }
    }
    /// Moves to the next street and reopens betting.
    pub fn advance(&self, first: Seat) -> Self {
        Self {
            street: self.street.next(),
            ..self.start_street(first)
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    /// Seat expected to act next.
    pub fn actor(&self) -> Seat {
        self.actor
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn last_raise(&self) -> Chips {
        self.last_raise
    }
    pub fn min_raise_to(&self) -> Chips {
        self.min_raise_to
    }
    /// What `seat` has put in on this street.
    pub fn contributed(&self, seat: Seat) -> Chips {
        self.contributions.get(&seat).copied().unwrap_or_default()
    }
    /// True once `seat` has acted (or posted) on this street.
    pub fn has_acted(&self, seat: Seat) -> bool {
        self.contributions.contains_key(&seat)
    }
    pub fn to_call(&self, seat: Seat) -> Chips {
        (self.current_bet - self.contributed(seat)).max(0.0)
    }
    pub fn is_folded(&self, seat: Seat) -> bool {
        self.folded.contains(&seat)
    }
    /// No live seat that has acted this street is short of the current bet.
    pub fn is_round_complete(&self) -> bool {
        self.contributions
            .iter()
            .filter(|(seat, _)| !self.is_folded(**seat))
            .all(|(_, put)| *put >= self.current_bet - EPSILON)
    }
    /// Every seat in `seats` has matched the current bet or is all in.
    pub fn is_settled(&self, seats: &[Seat], stacks: &Stacks) -> bool {
        seats.iter().all(|seat| {
            self.to_call(*seat) <= EPSILON || stacks.get(*seat).map(|s| s <= EPSILON).unwrap_or(true)
        })
    }

    /// Applies one betting action by `actor`.
    ///
    /// Illegal checks and bets are rejected with [`Error::IllegalAction`];
    /// nothing is converted into a different action here.
    pub fn apply(&self, stacks: &Stacks, actor: Seat, action: Action) -> Result<Transition, Error> {
        let stack = stacks.get(actor)?;
        if self.is_folded(actor) {
            return Err(Self::illegal(actor, action, "seat has folded"));
        }
        let put = self.contributed(actor);
        let mut next = self.clone();
        let stacks = match action {
            Action::Fold => {
                next.folded.insert(actor);
                log::debug!("{} folds, pot {:.1}", actor, next.pot);
                return Ok(Transition {
                    state: next.rotate(stacks, actor),
                    stacks: stacks.clone(),
                    round_complete: true,
                    hand_complete: true,
                });
            }
            Action::Check => {
                if self.to_call(actor) > EPSILON {
                    return Err(Self::illegal(actor, action, "facing a bet"));
                }
                next.commit(stacks, actor, 0.0, put)?
            }
            Action::Call => match self.to_call(actor) {
                owed if owed < stack => next.commit(stacks, actor, owed, self.current_bet)?,
                _ => next.commit(stacks, actor, stack, put + stack)?,
            },
            Action::Bet(amount) => {
                if self.current_bet > EPSILON {
                    return Err(Self::illegal(actor, action, "a bet is already open"));
                }
                if stack <= EPSILON {
                    return Err(Self::illegal(actor, action, "no chips behind"));
                }
                let size = amount.max(B_BLIND).min(stack);
                let stacks = next.commit(stacks, actor, size, put + size)?;
                next.current_bet = next.contributed(actor);
                next.last_raise = size;
                next.min_raise_to = next.current_bet + size;
                stacks
            }
            Action::Raise(amount) => {
                if stack <= EPSILON {
                    return Err(Self::illegal(actor, action, "no chips behind"));
                }
                let stacks = match amount.max(self.min_raise_to) {
                    target if target < put + stack => next.commit(stacks, actor, target - put, target)?,
                    _ => next.commit(stacks, actor, stack, put + stack)?,
                };
                let target = next.contributed(actor);
                if target > self.current_bet {
                    next.last_raise = self.last_raise.max(target - self.current_bet);
                    next.current_bet = target;
                    next.min_raise_to = target + next.last_raise;
                }
                stacks
            }
        };
        log::debug!("{} {} -> pot {:.1}, to match {:.1}", actor, action, next.pot, next.current_bet);
        let state = next.rotate(&stacks, actor);
        Ok(Transition {
            round_complete: state.is_round_complete(),
            hand_complete: false,
            state,
            stacks,
        })
    }

    /// Moves `amount` from `seat`'s stack into the pot and records `total` as
    /// the seat's contribution this street.
    ///
    /// The contribution is stored as given, never accumulated, so a call
    /// leaves the seat at exactly the current bet and an all-in leaves the
    /// stack at exactly zero.
    fn commit(&mut self, stacks: &Stacks, seat: Seat, amount: Chips, total: Chips) -> Result<Stacks, Error> {
        self.pot += amount;
        self.contributions.insert(seat, total);
        stacks.pay(seat, amount)
    }
    /// Hands the action to the next seated, unfolded seat after `from`.
    fn rotate(mut self, stacks: &Stacks, from: Seat) -> Self {
        let mut seat = from.next();
        while seat != from {
            if stacks.contains(seat) && !self.is_folded(seat) {
                self.actor = seat;
                break;
            }
            seat = seat.next();
        }
        self
    }
    fn illegal(seat: Seat, action: Action, reason: &'static str) -> Error {
        Error::IllegalAction { seat, action, reason }
    }
}

impl std::fmt::Display for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} pot {:.1} bet {:.1} min-raise {:.1} ({} to act)",
            self.street, self.pot, self.current_bet, self.min_raise_to, self.actor
        )
    }
}
