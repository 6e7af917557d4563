/// The three responses offered in the preflop drill.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Answer {
    Fold,
    Call,
    Raise,
}

impl Answer {
    pub const ALL: [Answer; 3] = [Answer::Fold, Answer::Call, Answer::Raise];
}

impl TryFrom<&str> for Answer {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "f" | "fold" => Ok(Answer::Fold),
            "c" | "call" => Ok(Answer::Call),
            "r" | "raise" => Ok(Answer::Raise),
            _ => Err(anyhow::anyhow!("invalid answer: {}", s)),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Answer::Fold => write!(f, "fold"),
            Answer::Call => write!(f, "call"),
            Answer::Raise => write!(f, "raise"),
        }
    }
}
