//! Content model for the card.
//!
//! Plain data types for the story timeline, the persona cards, and the
//! dedication video. The actual card content is a compile-time literal owned
//! by the application crate; nothing here is loaded at runtime.

use serde::{Deserialize, Serialize};

/// One moment on the story timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryMoment {
    /// Short headline for the moment
    pub title: String,
    /// Where or when it happened
    pub meta: String,
    /// The story text itself
    pub text: String,
}

impl StoryMoment {
    pub fn new(title: &str, meta: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            meta: meta.to_string(),
            text: text.to_string(),
        }
    }
}

/// Small icon vocabulary for persona chips; the UI maps these to SVGs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChipIcon {
    Coffee,
    Sparkles,
    Book,
    Film,
    Music,
    Wand,
}

/// A tagged trait shown on a persona card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub icon: ChipIcon,
    pub label: String,
}

impl Chip {
    pub fn new(icon: ChipIcon, label: &str) -> Self {
        Self {
            icon,
            label: label.to_string(),
        }
    }
}

/// One of the two people the card is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub role: String,
    pub chips: Vec<Chip>,
    pub text: String,
}

impl Persona {
    /// Monogram for the avatar circle: the uppercased first letters of up
    /// to the first two words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The embedded dedication video, treated as an opaque external resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dedication {
    /// URL loaded into the embedded player
    pub embed_url: String,
    /// URL for the "open externally" link
    pub open_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_moment_roundtrips_through_json() {
        let moment = StoryMoment::new("One last try", "Facebook Dating", "You gave it one last chance.");
        let json = serde_json::to_string(&moment).unwrap();
        let back: StoryMoment = serde_json::from_str(&json).unwrap();
        assert_eq!(moment, back);
    }

    fn persona(name: &str) -> Persona {
        Persona {
            name: name.to_string(),
            role: "Role".to_string(),
            chips: Vec::new(),
            text: "Text".to_string(),
        }
    }

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(persona("Peggy Ndlovu").initials(), "PN");
        assert_eq!(persona("Sabelo Maphosa Ndlovu").initials(), "SM");
    }

    #[test]
    fn initials_handle_short_and_lowercase_names() {
        assert_eq!(persona("peggy").initials(), "P");
        assert_eq!(persona("").initials(), "");
    }
}
