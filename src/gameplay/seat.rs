use serde::Deserialize;
use serde::Serialize;

/// A position in the fixed 6-max rotation.
///
/// Seats exist for the table's lifetime. Preflop action starts at `UTG` and
/// runs clockwise through the blinds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    UTG,
    MP,
    CO,
    BTN,
    SB,
    BB,
}

impl Seat {
    pub const ALL: [Seat; 6] = [Seat::UTG, Seat::MP, Seat::CO, Seat::BTN, Seat::SB, Seat::BB];

    /// Position in the rotation, `UTG` first.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// The seat to this one's left, wrapping from `BB` to `UTG`.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl TryFrom<&str> for Seat {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "UTG" => Ok(Seat::UTG),
            "MP" => Ok(Seat::MP),
            "CO" => Ok(Seat::CO),
            "BTN" => Ok(Seat::BTN),
            "SB" => Ok(Seat::SB),
            "BB" => Ok(Seat::BB),
            _ => Err(anyhow::anyhow!("invalid seat: {}", s)),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Seat::UTG => write!(f, "UTG"),
            Seat::MP => write!(f, "MP"),
            Seat::CO => write!(f, "CO"),
            Seat::BTN => write!(f, "BTN"),
            Seat::SB => write!(f, "SB"),
            Seat::BB => write!(f, "BB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps() {
        assert_eq!(Seat::BTN.next(), Seat::SB);
        assert_eq!(Seat::BB.next(), Seat::UTG);
    }

    #[test]
    fn str_roundtrip() {
        for seat in Seat::ALL {
            assert_eq!(Seat::try_from(seat.to_string().as_str()).unwrap(), seat);
        }
        assert_eq!(Seat::try_from("btn").unwrap(), Seat::BTN);
        assert!(Seat::try_from("HJ").is_err());
    }
}
