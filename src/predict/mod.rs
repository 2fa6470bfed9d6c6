pub mod config;
pub use config::*;

pub mod predictor;
pub use predictor::*;

pub mod transitions;
pub use transitions::*;
