pub use beeper::Beeper;
pub use display::Display;
pub use error::DisplayError;

mod beeper;
mod display;
mod error;
