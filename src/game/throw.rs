#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Throw {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Throw {
    pub const N: usize = 3;

    /// every throw, in symbol order. iteration order matters for
    /// deterministic tie-breaking downstream.
    pub const fn all() -> [Self; Self::N] {
        [Throw::Rock, Throw::Paper, Throw::Scissors]
    }

    /// the unique throw that defeats this one: (m + 1) mod 3.
    pub fn counter(self) -> Self {
        Self::from((u8::from(self) + 1) % 3)
    }

    pub fn beats(self, other: Self) -> bool {
        self == other.counter()
    }

    /// validating conversion for raw symbols crossing the boundary.
    /// the From<u8> path panics instead; callers who cannot trust
    /// their input come through here.
    pub fn parse(n: u8) -> Result<Self, &'static str> {
        match n {
            0 => Ok(Throw::Rock),
            1 => Ok(Throw::Paper),
            2 => Ok(Throw::Scissors),
            _ => Err("throw symbol out of range"),
        }
    }
}

impl From<u8> for Throw {
    fn from(n: u8) -> Throw {
        match n {
            0 => Throw::Rock,
            1 => Throw::Paper,
            2 => Throw::Scissors,
            _ => panic!("Invalid throw"),
        }
    }
}
impl From<Throw> for u8 {
    fn from(t: Throw) -> u8 {
        t as u8
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Throw::Rock => "R",
                Throw::Paper => "P",
                Throw::Scissors => "S",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for t in Throw::all() {
            assert!(t == Throw::from(u8::from(t)));
        }
    }

    #[test]
    fn counter_cycles() {
        for t in Throw::all() {
            assert!(t.counter() != t);
            assert!(t.counter().counter().counter() == t);
        }
    }

    #[test]
    fn counter_beats() {
        for t in Throw::all() {
            assert!(t.counter().beats(t));
            assert!(!t.beats(t.counter()));
            assert!(!t.beats(t));
        }
    }

    #[test]
    fn parse_rejects_out_of_range() {
        for t in Throw::all() {
            assert!(Throw::parse(u8::from(t)) == Ok(t));
        }
        assert!(Throw::parse(3).is_err());
        assert!(Throw::parse(255).is_err());
    }
}
