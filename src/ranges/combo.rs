use super::shape::Shape;
use crate::Arbitrary;
use crate::cards::Rank;
use serde::Deserialize;
use serde::Serialize;

/// An abstract starting-hand class such as `AKs`, `T9o`, or `77`.
///
/// Not tied to concrete suits. Labels always name the higher rank first;
/// pairs never carry a suffix and non-pairs always do.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Combo {
    hi: Rank,
    lo: Rank,
    shape: Shape,
}

impl Combo {
    pub fn pair(rank: Rank) -> Self {
        Self {
            hi: rank,
            lo: rank,
            shape: Shape::Pair,
        }
    }
    /// Suited or offsuit class. Ranks may come in either order.
    pub fn unpaired(a: Rank, b: Rank, suited: bool) -> Self {
        debug_assert!(a != b);
        Self {
            hi: a.max(b),
            lo: a.min(b),
            shape: if suited { Shape::Suited } else { Shape::Offsuit },
        }
    }
    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    /// All 169 starting-hand classes: 13 pairs, 78 suited, 78 offsuit.
    pub fn all() -> Vec<Self> {
        let pairs = Rank::all().into_iter().map(Self::pair);
        let unpaired = Rank::all().into_iter().flat_map(|hi| {
            Rank::MIN
                .upto(hi)
                .filter(move |lo| *lo != hi)
                .flat_map(move |lo| [true, false].map(|s| Self::unpaired(hi, lo, s)))
        });
        pairs.chain(unpaired).collect()
    }
}

impl Arbitrary for Combo {
    fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        use rand::seq::IndexedRandom;
        *Self::all()
            .choose(rng)
            .expect("169 starting-hand classes")
    }
}

/// str isomorphism
impl TryFrom<&str> for Combo {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<_>>();
        let rank = |c: char| {
            Some(c)
                .filter(|c| !c.is_ascii_lowercase())
                .and_then(Rank::parse)
                .ok_or_else(|| anyhow::anyhow!("invalid rank in combo {}", s))
        };
        match chars.as_slice() {
            [a, b] => {
                let (hi, lo) = (rank(*a)?, rank(*b)?);
                match hi == lo {
                    true => Ok(Self::pair(hi)),
                    false => Err(anyhow::anyhow!("unpaired combo needs a suffix: {}", s)),
                }
            }
            [a, b, x] => {
                let (hi, lo) = (rank(*a)?, rank(*b)?);
                let suited = match x {
                    's' => true,
                    'o' => false,
                    _ => return Err(anyhow::anyhow!("invalid suffix in combo {}", s)),
                };
                match hi.cmp(&lo) {
                    std::cmp::Ordering::Greater => Ok(Self::unpaired(hi, lo, suited)),
                    std::cmp::Ordering::Equal => Err(anyhow::anyhow!("pair with suffix: {}", s)),
                    std::cmp::Ordering::Less => Err(anyhow::anyhow!("higher rank must come first: {}", s)),
                }
            }
            _ => Err(anyhow::anyhow!("invalid combo length: {}", s)),
        }
    }
}
impl TryFrom<String> for Combo {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Combo> for String {
    fn from(combo: Combo) -> Self {
        combo.to_string()
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.hi, self.lo, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sixty_nine() {
        let all = Combo::all();
        assert_eq!(all.len(), 169);
        let unique = all.iter().collect::<std::collections::BTreeSet<_>>();
        assert_eq!(unique.len(), 169);
        let concrete = all.iter().map(|c| c.shape().n_combos()).sum::<usize>();
        assert_eq!(concrete, 1326);
    }

    #[test]
    fn labels() {
        for label in ["AKs", "AKo", "77", "T9s", "32o"] {
            assert_eq!(Combo::try_from(label).unwrap().to_string(), label);
        }
    }

    #[test]
    fn malformed_labels() {
        for label in ["AK", "77s", "KAs", "AKx", "A", "AKso", "1Ks", "", "aks", "tt", "Tt", "AKS"] {
            assert!(Combo::try_from(label).is_err(), "{}", label);
        }
    }

    #[test]
    fn serde_as_label() {
        let combo = Combo::try_from("QJs").unwrap();
        let json = serde_json::to_string(&combo).unwrap();
        assert_eq!(json, "\"QJs\"");
        assert_eq!(serde_json::from_str::<Combo>(&json).unwrap(), combo);
    }
}
