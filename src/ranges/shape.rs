/// Suitedness of a starting-hand class.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

impl Shape {
    /// Number of concrete two-card hands in a class of this shape.
    pub const fn n_combos(&self) -> usize {
        match self {
            Shape::Pair => 6,
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }
    /// Label suffix. Pairs carry none.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Shape::Pair => "",
            Shape::Suited => "s",
            Shape::Offsuit => "o",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
