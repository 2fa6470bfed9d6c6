//! Simulation Harness
//!
//! Pits the predictor against each scripted opponent for a fixed number
//! of rounds and logs the resulting win rates. The random fish is the
//! control group: anything much above a third there is a bug.
//!
//! Options: --rounds, --seed, --eager

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambot::game::Throw;
use roshambot::play::Fish;
use roshambot::play::Session;
use roshambot::predict::Config;

#[derive(Parser)]
#[command(about = "benchmark the predictor against scripted opponents")]
struct Args {
    /// rounds to play against each opponent
    #[arg(long, default_value_t = 1000)]
    rounds: u32,
    /// seed for the random opponent
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// use the eager threshold preset
    #[arg(long)]
    eager: bool,
}

fn main() {
    let args = Args::parse();
    roshambot::log();
    let config = if args.eager {
        Config::EAGER
    } else {
        Config::PATIENT
    };
    let school = vec![
        Fish::Spammer(Throw::Rock),
        Fish::Spammer(Throw::Scissors),
        Fish::Alternator(Throw::Rock, Throw::Paper),
        Fish::Alternator(Throw::Paper, Throw::Scissors),
        Fish::Cycler,
        Fish::Random(SmallRng::seed_from_u64(args.seed)),
    ];
    log::info!("{:<32}{:?}", "using thresholds", config);
    for mut fish in school {
        let mut session = Session::from(config);
        for _ in 0..args.rounds {
            let throw = fish.throw(session.history());
            session.play(throw);
        }
        log::info!("{:<32}{}", fish.to_string(), session.score());
    }
}
