use super::config::Config;
use super::transitions::Transitions;
use crate::game::History;
use crate::game::Throw;

/// layered move prediction over an observed throw history.
///
/// three decision layers run in strict priority order:
/// 1. repetition guard — an opponent spamming one throw is assumed to
///    continue spamming it;
/// 2. order-2 Markov — the transition table predicts the most common
///    successor of the last throw, when seen often enough;
/// 3. frequency fallback — the most common throw overall, which is
///    total even on an empty history.
///
/// the transition table is the only state that persists across calls.
/// each session should own its own instance; nothing here is global.
#[derive(Debug, Default, Clone)]
pub struct Predictor {
    config: Config,
    transitions: Transitions,
}

impl From<Config> for Predictor {
    fn from(config: Config) -> Self {
        Self {
            config,
            transitions: Transitions::default(),
        }
    }
}

impl Predictor {
    /// the opponent's likely next throw.
    ///
    /// exactly one transition observation per call once the history has
    /// two entries, taken before any layer runs so the table reflects
    /// the full history regardless of which layer answers.
    pub fn predict(&mut self, history: &History) -> Throw {
        self.observe(history);
        self.spam(history)
            .or_else(|| self.markov(history))
            .unwrap_or_else(|| self.frequency(history))
    }

    /// the throw that beats [`Self::predict`]. total over all inputs.
    pub fn counter(&mut self, history: &History) -> Throw {
        self.predict(history).counter()
    }

    /// forget all observed transitions, for a fresh match.
    pub fn reset(&mut self) {
        self.transitions.reset();
    }

    pub fn config(&self) -> Config {
        self.config
    }
    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    fn observe(&mut self, history: &History) {
        if let [.., prev, last] = *history.throws() {
            self.transitions.observe(prev, last);
        }
    }

    /// layer 1: a trailing run of identical throws at least `streak`
    /// long predicts one more of the same.
    fn spam(&self, history: &History) -> Option<Throw> {
        history
            .last()
            .filter(|_| history.streak() >= self.config.streak)
    }

    /// layer 2: most common successor of the last throw, trusted only
    /// past the confidence threshold.
    fn markov(&self, history: &History) -> Option<Throw> {
        let last = history.last()?;
        let (next, count) = self.transitions.expectation(last);
        (count > self.config.confidence).then_some(next)
    }

    /// layer 3: most common throw overall, lowest symbol on ties.
    /// Rock on an empty history.
    fn frequency(&self, history: &History) -> Throw {
        let tally = history.tally();
        Throw::all()
            .into_iter()
            .fold(Throw::Rock, |best, t| {
                if tally[t as usize] > tally[best as usize] {
                    t
                } else {
                    best
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Throw::*;

    fn patient() -> Predictor {
        Predictor::from(Config::PATIENT)
    }

    #[test]
    fn empty_history_counters_rock() {
        assert!(patient().predict(&History::default()) == Rock);
        assert!(patient().counter(&History::default()) == Paper);
    }

    #[test]
    fn frequency_prefers_low_symbol_on_ties() {
        let history = History::from(vec![Rock, Rock, Paper, Paper]);
        assert!(patient().predict(&history) == Rock);
        assert!(patient().counter(&history) == Paper);
    }

    #[test]
    fn spam_guard_counters_a_streak() {
        let history = History::from(vec![Rock, Rock, Rock]);
        assert!(patient().counter(&history) == Paper);
    }

    #[test]
    fn spam_guard_outranks_the_table() {
        let mut predictor = patient();
        // load the table with contrary evidence; the guard must win
        for _ in 0..10 {
            predictor.transitions.observe(Scissors, Rock);
        }
        let history = History::from(vec![Scissors, Scissors, Scissors]);
        assert!(predictor.predict(&history) == Scissors);
    }

    #[test]
    fn eager_guard_fires_earlier() {
        // two trailing Papers: the eager guard calls it spam, while the
        // patient one falls through to the Rock-heavy frequency tally
        let history = History::from(vec![Rock, Rock, Rock, Paper, Paper]);
        assert!(Predictor::from(Config::EAGER).predict(&history) == Paper);
        assert!(patient().predict(&history) == Rock);
    }

    #[test]
    fn markov_learns_alternation() {
        let mut predictor = patient();
        let mut history = History::default();
        for i in 0..12 {
            history.push(if i % 2 == 0 { Rock } else { Paper });
            predictor.predict(&history);
        }
        // (P -> R) seen often enough that the chain expects Rock next
        history.push(Rock);
        history.push(Paper);
        assert!(predictor.predict(&history) == Rock);
        assert!(predictor.counter(&history) == Paper);
    }

    #[test]
    fn one_observation_per_call() {
        let mut predictor = patient();
        let mut history = History::default();
        for t in [Rock, Paper, Scissors, Rock, Rock, Paper] {
            history.push(t);
            predictor.predict(&history);
        }
        // first call saw a single-entry history and observed nothing
        assert!(predictor.transitions().total() == 5);
    }

    #[test]
    fn deterministic_given_same_state() {
        let history = History::from(vec![Rock, Paper, Scissors, Paper, Rock]);
        let mut a = patient();
        let mut b = a.clone();
        for _ in 0..3 {
            assert!(a.predict(&history) == b.predict(&history));
        }
    }

    #[test]
    fn reset_starts_fresh() {
        let mut predictor = patient();
        let mut history = History::default();
        for t in [Rock, Paper, Rock, Paper] {
            history.push(t);
            predictor.predict(&history);
        }
        assert!(predictor.transitions().total() > 0);
        predictor.reset();
        assert!(predictor.transitions().total() == 0);
    }
}
