pub mod fish;
pub use fish::*;

pub mod round;
pub use round::*;

pub mod score;
pub use score::*;

pub mod session;
pub use session::*;
