use crate::Chips;
use crate::EPSILON;
use crate::Error;
use crate::Probability;
use crate::VILLAIN_CALL_CHANCE;
use crate::VILLAIN_CALL_ODDS;
use crate::VILLAIN_RAISE_CHANCE;
use crate::VILLAIN_RAISE_MULTIPLE;
use crate::gameplay::Action;
use crate::gameplay::HandState;
use crate::gameplay::Seat;
use crate::gameplay::Stacks;
use crate::gameplay::pot_odds;

/// A scripted opponent.
///
/// Deliberately simple and exploitable: it checks when nothing is owed,
/// calls cheap prices or on a coin flip, occasionally raises, and otherwise
/// folds. One uniform draw decides each spot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Robot;

/// What the robot did and the state it left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub state: HandState,
    pub stacks: Stacks,
    pub action: Action,
}

impl Robot {
    /// Picks an action for `seat` without applying it.
    pub fn decide<R: rand::Rng + ?Sized>(&self, state: &HandState, stacks: &Stacks, seat: Seat, rng: &mut R) -> Result<Action, Error> {
        let to_call = state.to_call(seat);
        if to_call <= EPSILON {
            return Ok(Action::Check);
        }
        let stack = stacks.get(seat)?;
        let odds = pot_odds(to_call, state.pot());
        let roll = rng.random::<Probability>();
        let raise = VILLAIN_RAISE_MULTIPLE * state.last_raise();
        Ok(Self::choose(odds, roll, stack, to_call, raise, state.current_bet()))
    }
    /// Decides and applies in one step.
    pub fn respond<R: rand::Rng + ?Sized>(&self, state: &HandState, stacks: &Stacks, seat: Seat, rng: &mut R) -> Result<Response, Error> {
        let action = self.decide(state, stacks, seat, rng)?;
        let transition = state.apply(stacks, seat, action)?;
        Ok(Response {
            state: transition.state,
            stacks: transition.stacks,
            action,
        })
    }
    fn choose(odds: Probability, roll: Probability, stack: Chips, to_call: Chips, raise: Chips, bet: Chips) -> Action {
        if odds < VILLAIN_CALL_ODDS || roll < VILLAIN_CALL_CHANCE {
            Action::Call
        } else if roll > 1.0 - VILLAIN_RAISE_CHANCE && stack > to_call + raise {
            Action::Raise(bet + raise)
        } else {
            Action::Fold
        }
    }
}
