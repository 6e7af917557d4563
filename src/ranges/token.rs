use super::combo::Combo;
use super::shape::Shape;
use crate::cards::Rank;

/// One shorthand range token: a combo, optionally followed by `+`.
///
/// - `77+` is every pair from sevens to aces
/// - `ATs+` keeps the ace and raises the kicker up to `AKs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    combo: Combo,
    plus: bool,
}

impl Token {
    pub fn combo(&self) -> Combo {
        self.combo
    }
    /// The explicit combos this token denotes.
    pub fn expand(&self) -> Vec<Combo> {
        let Self { combo, plus } = *self;
        match (combo.shape(), plus) {
            (_, false) => vec![combo],
            (Shape::Pair, true) => combo.hi().upto(Rank::MAX).map(Combo::pair).collect(),
            (shape, true) => combo
                .lo()
                .upto(combo.hi())
                .filter(|kicker| *kicker != combo.hi())
                .map(|kicker| Combo::unpaired(combo.hi(), kicker, shape == Shape::Suited))
                .collect(),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Token {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.strip_suffix('+') {
            Some(label) => Ok(Self {
                combo: Combo::try_from(label)?,
                plus: true,
            }),
            None => Ok(Self {
                combo: Combo::try_from(s)?,
                plus: false,
            }),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.combo, if self.plus { "+" } else { "" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(token: &str) -> Vec<String> {
        Token::try_from(token)
            .unwrap()
            .expand()
            .iter()
            .map(Combo::to_string)
            .collect()
    }

    #[test]
    fn pair_plus() {
        assert_eq!(labels("JJ+"), vec!["JJ", "QQ", "KK", "AA"]);
        assert_eq!(labels("AA+"), vec!["AA"]);
    }

    #[test]
    fn kicker_plus() {
        assert_eq!(labels("ATs+"), vec!["ATs", "AJs", "AQs", "AKs"]);
        assert_eq!(labels("KQo+"), vec!["KQo"]);
        assert_eq!(labels("32s+"), vec!["32s"]);
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(Token::try_from("T9s+").unwrap().to_string(), "T9s+");
    }

    #[test]
    fn double_plus_rejected() {
        assert!(Token::try_from("77++").is_err());
    }
}
