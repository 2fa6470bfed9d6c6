pub mod game;
pub mod play;
pub mod predict;

#[cfg(feature = "client")]
pub mod wasm;

/// Occurrence count inside the transition table.
pub type Count = u32;

// ============================================================================
// PREDICTION THRESHOLDS
// Two configurations were in production use; these are the patient one.
// See predict::Config for the eager alternative.
// ============================================================================
/// Trailing run length at which the repetition guard assumes spam.
pub const SPAM_STREAK: usize = 3;
/// Occurrence count the Markov winner must strictly exceed to be trusted.
pub const MARKOV_CONFIDENCE: Count = 3;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "console")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
