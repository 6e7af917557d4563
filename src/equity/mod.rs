pub mod matchup;
pub use matchup::*;

pub mod range;
pub use range::*;

pub mod report;
pub use report::*;

pub mod tally;
pub use tally::*;

use crate::Error;

/// Heads-up equity from card strings, e.g. `calculate("AhAd", "KhKd", "", 10_000, rng)`.
///
/// Hands are four characters, the board 0, 6, 8, or 10. Estimates are
/// Monte Carlo and differ between runs unless `rng` is seeded.
pub fn calculate<R: rand::Rng + ?Sized>(
    hero: &str,
    villain: &str,
    board: &str,
    iterations: usize,
    rng: &mut R,
) -> Result<Report, Error> {
    Matchup::try_from((hero, villain, board))?.simulate(iterations, rng)
}
