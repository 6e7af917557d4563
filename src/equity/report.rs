use super::tally::Tally;
use crate::Percent;

/// Equity estimate for both sides, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub hero: Percent,
    pub villain: Percent,
    pub tally: Tally,
}

impl From<Tally> for Report {
    fn from(tally: Tally) -> Self {
        Self {
            hero: round(tally.hero()),
            villain: round(tally.villain()),
            tally,
        }
    }
}

fn round(percent: Percent) -> Percent {
    (percent * 100.0).round() / 100.0
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:.2}% vs {:.2}% ({} runouts: {} won, {} tied, {} lost)",
            self.hero,
            self.villain,
            self.tally.total(),
            self.tally.wins(),
            self.tally.ties(),
            self.tally.losses()
        )
    }
}
