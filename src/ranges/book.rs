use super::range::Range;
use crate::gameplay::Seat;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Category a flat token list is filed under.
pub const RFI: &str = "RFI";

/// The shorthand for one name: a flat token list, or tokens per category.
///
/// Both JSON shapes load:
///
/// ```json
/// { "UTG": ["77+", "ATs+"], "BTN": { "RFI": ["22+"], "3-bet": ["QQ+"] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Flat(Vec<String>),
    Categorized(BTreeMap<String, Vec<String>>),
}

impl Entry {
    /// Category name to tokens. Flat lists become the single `RFI` category.
    pub fn categories(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            Entry::Flat(tokens) => BTreeMap::from([(RFI.to_string(), tokens.clone())]),
            Entry::Categorized(map) => map.clone(),
        }
    }
}

/// Unexpanded range definitions keyed by seat or range name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shorthand(BTreeMap<String, Entry>);

impl Shorthand {
    pub fn insert(&mut self, name: &str, entry: Entry) {
        self.0.insert(name.to_string(), entry);
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, Entry>> for Shorthand {
    fn from(map: BTreeMap<String, Entry>) -> Self {
        Self(map)
    }
}

/// Expanded ranges, name then category.
///
/// Categories are kept apart: a seat's `RFI` and `3-bet` ranges never merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeBook(BTreeMap<String, BTreeMap<String, Range>>);

impl RangeBook {
    pub fn expand_all(shorthand: &Shorthand) -> Self {
        Self(
            shorthand
                .iter()
                .map(|(name, entry)| {
                    let categories = entry
                        .categories()
                        .into_iter()
                        .map(|(category, tokens)| {
                            let range = Range::from_tokens(&tokens);
                            log::debug!("{} {}: {} tokens -> {} combos", name, category, tokens.len(), range.len());
                            (category, range)
                        })
                        .collect();
                    (name.clone(), categories)
                })
                .collect(),
        )
    }
    pub fn get(&self, name: &str, category: &str) -> Option<&Range> {
        self.0.get(name).and_then(|categories| categories.get(category))
    }
    /// A seat's open-raise range.
    pub fn seat(&self, seat: Seat) -> Option<&Range> {
        self.get(&seat.to_string(), RFI)
    }
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
    pub fn categories(&self, name: &str) -> impl Iterator<Item = (&String, &Range)> {
        self.0.get(name).into_iter().flat_map(|c| c.iter())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&Shorthand> for RangeBook {
    fn from(shorthand: &Shorthand) -> Self {
        Self::expand_all(shorthand)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_categorized() {
        let json = r#"{
            "UTG": ["77+", "ATs+", "AQo+", "KQs"],
            "BTN": { "RFI": ["22+"], "3-bet": ["QQ+", "AKs"] }
        }"#;
        let shorthand = serde_json::from_str::<Shorthand>(json).unwrap();
        let book = RangeBook::expand_all(&shorthand);
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("UTG", RFI).map(Range::len), Some(8 + 4 + 2 + 1));
        assert_eq!(book.get("BTN", RFI).map(Range::len), Some(13));
        assert_eq!(book.get("BTN", "3-bet").map(Range::len), Some(4));
        assert_eq!(book.categories("BTN").count(), 2);
        assert!(book.get("UTG", "3-bet").is_none());
    }

    #[test]
    fn seat_lookup() {
        let json = r#"{ "CO": ["55+"] }"#;
        let book = RangeBook::expand_all(&serde_json::from_str(json).unwrap());
        assert_eq!(book.seat(Seat::CO).map(Range::len), Some(10));
        assert!(book.seat(Seat::UTG).is_none());
    }

    #[test]
    fn bad_tokens_expand_to_nothing() {
        let json = r#"{ "MP": ["AK", "junk", "QQ+"] }"#;
        let book = RangeBook::expand_all(&serde_json::from_str(json).unwrap());
        assert_eq!(book.seat(Seat::MP).map(Range::len), Some(3));
    }
}
