use crate::Count;
use crate::game::Throw;

/// occurrence counts over ordered pairs of consecutive throws.
///
/// the key space is 3x3 and known at compile time, so this is a flat
/// array indexed by `prev * 3 + next` rather than an associative map.
/// counts only ever increase, except through [`Self::reset`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transitions([Count; Throw::N * Throw::N]);

impl Transitions {
    fn index(prev: Throw, next: Throw) -> usize {
        prev as usize * Throw::N + next as usize
    }

    /// record one observed (prev -> next) transition.
    pub fn observe(&mut self, prev: Throw, next: Throw) {
        self.0[Self::index(prev, next)] += 1;
    }

    pub fn count(&self, prev: Throw, next: Throw) -> Count {
        self.0[Self::index(prev, next)]
    }

    /// the most frequently observed successor of `last`, with its count.
    /// ties break toward the lowest symbol, so the result is a pure
    /// function of the table.
    pub fn expectation(&self, last: Throw) -> (Throw, Count) {
        Throw::all()
            .into_iter()
            .map(|next| (next, self.count(last, next)))
            .fold((Throw::Rock, 0), |best, (next, count)| {
                if count > best.1 { (next, count) } else { best }
            })
    }

    /// sum of all counts; equals the number of observations since the
    /// last reset.
    pub fn total(&self) -> Count {
        self.0.iter().sum()
    }

    /// forget everything, for the start of a fresh match.
    pub fn reset(&mut self) {
        self.0 = [0; Throw::N * Throw::N];
    }
}

impl std::fmt::Display for Transitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "     R    P    S")?;
        for prev in Throw::all() {
            write!(f, "{}", prev)?;
            for next in Throw::all() {
                write!(f, " {:>4}", self.count(prev, next))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
