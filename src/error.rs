use crate::cards::Card;
use crate::gameplay::Action;
use crate::gameplay::Seat;
use crate::ranges::Combo;
use thiserror::Error;

/// Failures reported by the poker core.
///
/// Every variant goes back to the immediate caller. Nothing here is retried
/// or papered over by substituting a different action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("hand must contain exactly 2 cards, found {0}")]
    InvalidHandFormat(usize),

    #[error("board must contain 0, 3, 4, or 5 cards, found {0}")]
    InvalidBoardLength(usize),

    #[error("duplicate card {0}")]
    DuplicateCard(Card),

    #[error("invalid card notation {0:?}")]
    InvalidCard(String),

    #[error("deck is empty")]
    DeckEmpty,

    #[error("no concrete cards left for {0}")]
    ComboExhausted(Combo),

    #[error("range has no combos")]
    EmptyRange,

    #[error("illegal {action} by {seat}: {reason}")]
    IllegalAction {
        seat: Seat,
        action: Action,
        reason: &'static str,
    },

    #[error("{0} is not seated")]
    Unseated(Seat),

    #[error("iteration count must be positive")]
    NoIterations,
}
