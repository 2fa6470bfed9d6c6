use crate::Count;

/// tunable thresholds for the layered decision procedure.
///
/// two configurations shipped historically and disagreed on both knobs;
/// rather than bless either silently, both are exposed as named presets
/// and every [`Predictor`](super::Predictor) carries its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// trailing run length at which the repetition guard assumes the
    /// opponent is spamming one throw.
    pub streak: usize,
    /// occurrence count the best Markov candidate must STRICTLY exceed
    /// before its prediction is trusted over the frequency fallback.
    pub confidence: Count,
}

impl Config {
    /// waits for three repeats and four transition observations.
    pub const PATIENT: Self = Self {
        streak: crate::SPAM_STREAK,
        confidence: crate::MARKOV_CONFIDENCE,
    };
    /// pounces after two repeats and three transition observations.
    pub const EAGER: Self = Self {
        streak: 2,
        confidence: 2,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::PATIENT
    }
}
