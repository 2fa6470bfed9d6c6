use crate::game::Outcome;

/// running win/loss/draw tallies for one match, from the bot's side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Score {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Score {
    /// record one settled round. `outcome` is from the bot's perspective.
    pub fn settle(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// fraction of games won, 0 before any game is played.
    pub fn win_rate(&self) -> f32 {
        if self.games == 0 {
            0.
        } else {
            self.wins as f32 / self.games as f32
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>4}W {:>4}L {:>4}D ({:>5.1}%)",
            self.wins,
            self.losses,
            self.draws,
            self.win_rate() * 100.
        )
    }
}
