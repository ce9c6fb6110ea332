//! Screens of the card.
//!
//! One named, mutually exclusive visual state at a time. Transitions are
//! unconditional replacements of the current screen; there is no history
//! stack and no ordering constraint beyond what the UI affords.

use serde::{Deserialize, Serialize};

/// The named screens of the card, in narrative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Opening hero view
    Intro,
    /// The timeline of story moments
    Story,
    /// The memory quiz and letter vault
    Quiz,
    /// Closing view
    Finale,
}

impl Screen {
    /// All screens in the order the nav presents them
    pub fn all() -> [Screen; 4] {
        [Screen::Intro, Screen::Story, Screen::Quiz, Screen::Finale]
    }

    /// Label shown on the nav button
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Intro => "Valentine",
            Screen::Story => "Our Story",
            Screen::Quiz => "Quiz",
            Screen::Finale => "Forever",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_has_four_screens() {
        assert_eq!(Screen::all().len(), 4);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = Screen::all().iter().map(|s| s.label()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);
        assert_eq!(Screen::Intro.label(), "Valentine");
    }
}
