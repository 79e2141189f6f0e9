pub mod health;
pub mod transcribe;

pub use health::*;
pub use transcribe::*;
