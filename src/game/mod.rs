pub mod history;
pub use history::*;

pub mod outcome;
pub use outcome::*;

pub mod throw;
pub use throw::*;
