//! Interactive Match
//!
//! Terminal rock-paper-scissors against the layered predictor.
//!
//! Options: --eager, --streak, --confidence, --json

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use roshambot::game::Outcome;
use roshambot::game::Throw;
use roshambot::play::Session;
use roshambot::predict::Config;

#[derive(Parser)]
#[command(about = "play rock-paper-scissors against the predictor")]
struct Args {
    /// use the eager threshold preset (2-streak guard, >2 confidence)
    #[arg(long)]
    eager: bool,
    /// override the repetition-guard streak length
    #[arg(long)]
    streak: Option<usize>,
    /// override the Markov confidence threshold
    #[arg(long)]
    confidence: Option<u32>,
    /// dump the final score as JSON on exit
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> Config {
        let base = if self.eager {
            Config::EAGER
        } else {
            Config::PATIENT
        };
        Config {
            streak: self.streak.unwrap_or(base.streak),
            confidence: self.confidence.unwrap_or(base.confidence),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambot::log();
    let config = args.config();
    log::info!("{:<32}{:?}", "using thresholds", config);
    let mut session = Session::from(config);
    loop {
        let choices = ["Rock", "Paper", "Scissors", "Quit"];
        let selection = Select::new()
            .with_prompt("\nYOUR THROW")
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()?;
        let user = match choices[selection] {
            "Rock" => Throw::Rock,
            "Paper" => Throw::Paper,
            "Scissors" => Throw::Scissors,
            _ => break,
        };
        let round = session.play(user);
        let verdict = match round.outcome {
            Outcome::Win => "bot wins".red(),
            Outcome::Loss => "you win".green(),
            Outcome::Draw => "tie".yellow(),
        };
        println!("you {}  bot {}  {}", round.user, round.bot, verdict);
        println!("{}", session.score());
    }
    log::info!("{:<32}{}", "final score", session.score());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.score())?);
    }
    Ok(())
}
