use super::combo::Combo;
use super::token::Token;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// A set of starting-hand classes a seat is assumed to play.
///
/// Built by expanding shorthand tokens. Unrecognized tokens contribute
/// nothing: there is no partial or best-effort matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Range(BTreeSet<Combo>);

impl Range {
    pub fn empty() -> Self {
        Self::default()
    }
    /// Expands one shorthand token. Malformed tokens yield an empty range.
    pub fn expand(token: &str) -> Self {
        match Token::try_from(token) {
            Ok(token) => token.expand().into_iter().collect(),
            Err(e) => {
                log::debug!("ignoring range token {:?}: {}", token, e);
                Self::empty()
            }
        }
    }
    /// Union of the expansions of every token.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        tokens
            .iter()
            .map(|t| Self::expand(t.as_ref()))
            .fold(Self::empty(), |a, b| a.union(&b))
    }
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).copied().collect()
    }
    pub fn contains(&self, combo: &Combo) -> bool {
        self.0.contains(combo)
    }
    pub fn insert(&mut self, combo: Combo) -> bool {
        self.0.insert(combo)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Combo> {
        self.0.iter()
    }
    /// Number of concrete two-card hands the range covers.
    pub fn n_combos(&self) -> usize {
        self.0.iter().map(|c| c.shape().n_combos()).sum()
    }
}

impl FromIterator<Combo> for Range {
    fn from_iter<I: IntoIterator<Item = Combo>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Range {
    type Item = Combo;
    type IntoIter = std::collections::btree_set::IntoIter<Combo>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// tokens in, labels out
impl From<Vec<String>> for Range {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(&tokens)
    }
}
impl From<Range> for Vec<String> {
    fn from(range: Range) -> Self {
        range.iter().map(Combo::to_string).collect()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels = self.iter().map(Combo::to_string).collect::<Vec<_>>();
        write!(f, "{}", labels.join(", "))
    }
}
