//! Decorative effect layers.
//!
//! All purely cosmetic: parameters are sampled once at mount (or per burst
//! trigger) and everything else is declarative CSS animation.

mod aura;
mod burst;
mod hearts;
mod starfield;

pub use aura::AuraBackground;
pub use burst::HeartBurst;
pub use hearts::FloatingHearts;
pub use starfield::Starfield;
