use crate::Chips;
use crate::Probability;

/// Share of the final pot the caller has to put in: `call / (pot + call)`.
///
/// Nothing owed means odds of zero.
pub fn pot_odds(call: Chips, pot: Chips) -> Probability {
    if call <= 0.0 {
        0.0
    } else {
        call / (pot + call)
    }
}
