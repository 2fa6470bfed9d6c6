use crate::game::History;
use crate::game::Throw;
use rand::Rng;
use rand::rngs::SmallRng;

/// scripted opponents for simulation. each one embodies a habit the
/// prediction layers are supposed to punish, plus a uniform-random
/// control that nothing can beat on average.
#[derive(Debug)]
pub enum Fish {
    /// throws the same thing forever. food for the repetition guard.
    Spammer(Throw),
    /// alternates between two throws. food for the Markov layer.
    Alternator(Throw, Throw),
    /// walks the R -> P -> S cycle. also food for the Markov layer.
    Cycler,
    /// uniform random. the unbeatable control group.
    Random(SmallRng),
}

impl Fish {
    /// the fish's next throw, given its own past throws.
    pub fn throw(&mut self, history: &History) -> Throw {
        match self {
            Fish::Spammer(t) => *t,
            Fish::Alternator(a, b) => match history.last() {
                Some(last) if last == *a => *b,
                _ => *a,
            },
            Fish::Cycler => match history.last() {
                Some(last) => last.counter(),
                None => Throw::Rock,
            },
            Fish::Random(rng) => Throw::from(rng.random_range(0..Throw::N as u8)),
        }
    }
}

impl std::fmt::Display for Fish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fish::Spammer(t) => write!(f, "spammer({})", t),
            Fish::Alternator(a, b) => write!(f, "alternator({}{})", a, b),
            Fish::Cycler => write!(f, "cycler"),
            Fish::Random(_) => write!(f, "random"),
        }
    }
}
