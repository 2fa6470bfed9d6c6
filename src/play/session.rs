use super::round::Round;
use super::score::Score;
use crate::game::History;
use crate::game::Throw;
use crate::predict::Config;
use crate::predict::Predictor;

/// one match against one opponent: the history, the predictor trained
/// on it, and the running score, isolated from every other session.
#[derive(Debug, Default, Clone)]
pub struct Session {
    history: History,
    predictor: Predictor,
    score: Score,
}

impl From<Config> for Session {
    fn from(config: Config) -> Self {
        Self {
            predictor: Predictor::from(config),
            ..Self::default()
        }
    }
}

impl Session {
    /// play one round: record the user's throw, counter it, settle.
    pub fn play(&mut self, user: Throw) -> Round {
        self.history.push(user);
        let bot = self.predictor.counter(&self.history);
        let round = Round::from((user, bot));
        self.score.settle(round.outcome);
        log::debug!("round {:>4} {}", self.score.games, round);
        round
    }

    /// wipe history, transition table, and score for a fresh match.
    pub fn reset(&mut self) {
        self.history = History::default();
        self.predictor.reset();
        self.score = Score::default();
    }

    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }
    pub fn score(&self) -> Score {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Throw::*;

    #[test]
    fn rounds_accumulate() {
        let mut session = Session::default();
        for t in [Rock, Paper, Scissors, Rock] {
            session.play(t);
        }
        let score = session.score();
        assert!(score.games == 4);
        assert!(session.history().len() == 4);
    }

    #[test]
    fn bot_punishes_spam() {
        let mut session = Session::default();
        session.play(Rock);
        session.play(Rock);
        let round = session.play(Rock);
        // three Rocks in a row trips the repetition guard
        assert!(round.bot == Paper);
        assert!(round.outcome == crate::game::Outcome::Win);
    }

    #[test]
    fn reset_isolates_matches() {
        let mut session = Session::default();
        for _ in 0..5 {
            session.play(Scissors);
        }
        session.reset();
        assert!(session.history().is_empty());
        assert!(session.score() == Score::default());
        assert!(session.predictor().transitions().total() == 0);
    }
}
