//! UI components for the Lovenote card.

mod cards;
pub mod effects;
mod header;
pub mod icons;
mod letter_modal;
mod letter_vault;
mod quiz_panel;
mod shell;
mod timeline;
mod video_card;

pub use cards::{GlassCard, Pill, SectionTitle, StatCard};
pub use letter_vault::LetterVault;
pub use quiz_panel::QuizPanel;
pub use shell::Shell;
pub use timeline::{PersonaCard, TimelineItem};
pub use video_card::DedicationCard;
