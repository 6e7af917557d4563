use crate::Chips;

/// A betting decision.
///
/// `Bet` and `Raise` carry the size the actor asked for; the state machine
/// clamps it. A `Raise` amount is a raise-to target, not an add-on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        let amount = || {
            parts
                .get(1)
                .and_then(|n| n.parse::<Chips>().ok())
                .filter(|n| n.is_finite() && *n > 0.0)
                .ok_or_else(|| anyhow::anyhow!("invalid amount in {:?}", s))
        };
        match parts.first().map(|p| p.to_uppercase()).as_deref() {
            Some("FOLD") => Ok(Action::Fold),
            Some("CHECK") => Ok(Action::Check),
            Some("CALL") => Ok(Action::Call),
            Some("BET") => amount().map(Action::Bet),
            Some("RAISE") => amount().map(Action::Raise),
            _ => Err(anyhow::anyhow!("invalid action: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call => write!(f, "CALL"),
            Action::Bet(amount) => write!(f, "BET {}", amount),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Action::try_from("fold").unwrap(), Action::Fold);
        assert_eq!(Action::try_from("CHECK").unwrap(), Action::Check);
        assert_eq!(Action::try_from("call").unwrap(), Action::Call);
        assert_eq!(Action::try_from("bet 2.5").unwrap(), Action::Bet(2.5));
        assert_eq!(Action::try_from("raise 6").unwrap(), Action::Raise(6.0));
    }

    #[test]
    fn rejects_missing_amounts() {
        assert!(Action::try_from("bet").is_err());
        assert!(Action::try_from("raise -3").is_err());
        assert!(Action::try_from("shove").is_err());
        assert!(Action::try_from("").is_err());
    }

    #[test]
    fn display_roundtrip() {
        for action in [Action::Fold, Action::Check, Action::Call, Action::Bet(3.0), Action::Raise(7.5)] {
            assert_eq!(Action::try_from(action.to_string().as_str()).unwrap(), action);
        }
    }
}
