//! Page components for the Lovenote card.

mod finale;
mod intro;
mod quiz;
mod story;

pub use finale::Finale;
pub use intro::Intro;
pub use quiz::Quiz;
pub use story::Story;
