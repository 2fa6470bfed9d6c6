use super::throw::Throw;

/// result of one exchange, from the hero's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn payoff(&self) -> i32 {
        match self {
            Outcome::Win => 0 + 1,
            Outcome::Draw => 0,
            Outcome::Loss => 0 - 1,
        }
    }
}

impl From<(Throw, Throw)> for Outcome {
    fn from((hero, villain): (Throw, Throw)) -> Self {
        if hero == villain {
            Outcome::Draw
        } else if hero.beats(villain) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::Win => "WIN ",
                Outcome::Draw => "DRAW",
                Outcome::Loss => "LOSS",
            }
        )
    }
}
