use crate::game::Outcome;
use crate::game::Throw;

/// one settled exchange. `outcome` is from the bot's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    pub user: Throw,
    pub bot: Throw,
    pub outcome: Outcome,
}

impl From<(Throw, Throw)> for Round {
    fn from((user, bot): (Throw, Throw)) -> Self {
        Self {
            user,
            bot,
            outcome: Outcome::from((bot, user)),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "you {}  bot {}  {}", self.user, self.bot, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Throw::*;

    #[test]
    fn outcome_is_bot_sided() {
        let round = Round::from((Rock, Paper));
        assert!(round.outcome == Outcome::Win);
        let round = Round::from((Scissors, Paper));
        assert!(round.outcome == Outcome::Loss);
    }

    #[test]
    fn serializes_to_json() {
        let round = Round::from((Rock, Paper));
        let json = serde_json::to_string(&round).unwrap();
        assert!(json == r#"{"user":"Rock","bot":"Paper","outcome":"Win"}"#);
    }
}
