use super::throw::Throw;

/// append-only record of one opponent's past throws, oldest first.
///
/// owned by the caller of the prediction engine; the engine only ever
/// borrows it. length is unbounded in principle but stays small in a
/// typical match.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History(Vec<Throw>);

impl History {
    pub fn push(&mut self, throw: Throw) {
        self.0.push(throw);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<Throw> {
        self.0.last().copied()
    }
    pub fn throws(&self) -> &[Throw] {
        &self.0
    }

    /// length of the trailing run of identical throws.
    /// [R, P, S, S, S] -> 3, [R] -> 1, [] -> 0.
    pub fn streak(&self) -> usize {
        match self.last() {
            None => 0,
            Some(last) => self.0.iter().rev().take_while(|t| **t == last).count(),
        }
    }

    /// per-symbol occurrence counts across the whole history.
    pub fn tally(&self) -> [usize; Throw::N] {
        self.0.iter().fold([0; Throw::N], |mut counts, t| {
            counts[*t as usize] += 1;
            counts
        })
    }
}

impl From<Vec<Throw>> for History {
    fn from(throws: Vec<Throw>) -> Self {
        Self(throws)
    }
}
impl FromIterator<Throw> for History {
    fn from_iter<I: IntoIterator<Item = Throw>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// boundary conversion from raw symbols. every value is validated;
/// anything outside {0,1,2} is a caller contract violation.
impl TryFrom<&[u8]> for History {
    type Error = &'static str;
    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        raw.iter()
            .map(|n| Throw::parse(*n))
            .collect::<Result<Vec<Throw>, _>>()
            .map(Self)
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in self.0.iter() {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Throw::*;

    #[test]
    fn streak_counts_trailing_run() {
        let history = History::from(vec![Rock, Paper, Scissors, Scissors, Scissors]);
        assert!(history.streak() == 3);
        assert!(History::from(vec![Rock]).streak() == 1);
        assert!(History::default().streak() == 0);
    }

    #[test]
    fn streak_ignores_earlier_runs() {
        let history = History::from(vec![Rock, Rock, Rock, Paper]);
        assert!(history.streak() == 1);
    }

    #[test]
    fn tally_counts_everything() {
        let history = History::from(vec![Rock, Rock, Paper, Scissors, Rock]);
        assert!(history.tally() == [3, 1, 1]);
        assert!(History::default().tally() == [0, 0, 0]);
    }

    #[test]
    fn boundary_rejects_bad_symbols() {
        assert!(History::try_from([0u8, 1, 2, 1].as_slice()).is_ok());
        assert!(History::try_from([0u8, 3].as_slice()).is_err());
    }
}
