//! Theme for the Lovenote card.
//!
//! Global stylesheet plus the color constants it is built from.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
