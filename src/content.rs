//! Card content - every word the card shows, as compile-time literals.
//!
//! Quiz questions, story moments, persona cards, the letter, and the
//! dedication video all live here so the rest of the tree stays pure layout.

use lovenote_core::{Chip, ChipIcon, Dedication, Persona, Question, StoryMoment};

/// Fraction of quiz answers that must be correct to unlock the letter
pub const PASS_RATIO: f64 = 0.70;

/// The memory quiz, in order
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "Where did we first meet?",
            &[
                "Facebook Dating",
                "Instagram",
                "At a brunch caf\u{e9}",
                "Through a friend",
            ],
            0,
        ),
        Question::new(
            "What was your mood about dating apps that day?",
            &[
                "You were excited to swipe",
                "You had basically sworn them off \u{2014} but tried one last time",
                "You were making a profile for someone else",
                "You were only there for memes",
            ],
            1,
        ),
        Question::new(
            "What did I say on our first date?",
            &[
                "Let\u{2019}s just be friends",
                "I\u{2019}m going to put a ring on your finger",
                "I don\u{2019}t like music",
                "I\u{2019}m moving tomorrow",
            ],
            1,
        ),
        Question::new(
            "You\u{2019}re basically the queen of\u{2026}",
            &[
                "Fantasy books + brunch",
                "Car collecting",
                "Skydiving",
                "Pro gaming",
            ],
            0,
        ),
        Question::new(
            "My vibe is best described as\u{2026}",
            &[
                "One genre only",
                "Eclectic playlists (jazz, gospel, Afrobeat & more)",
                "No music ever",
                "Only podcasts",
            ],
            1,
        ),
    ]
}

/// The five story moments on the timeline
pub fn story() -> Vec<StoryMoment> {
    vec![
        StoryMoment::new(
            "One last try",
            "Facebook Dating",
            "You had sworn off dating apps \u{2014} no more swiping, no more weird bios. \
             Then, on a \u{2018}why not?\u{2019} moment, you gave Facebook Dating one last \
             chance\u{2026} and I\u{2019}m grateful you did.",
        ),
        StoryMoment::new(
            "I messaged you",
            "First chat",
            "From my very first message, I wanted to be different \u{2014} thoughtful, \
             funny, and real. One chat became two, and suddenly talking to you felt easy.",
        ),
        StoryMoment::new(
            "Our rhythm",
            "Tea + music + dreams",
            "We swapped stories, shared dreams, bonded over our favorite music, and \
             somehow even the simplest things \u{2014} like a good cup of tea \u{2014} \
             became a moment I looked forward to.",
        ),
        StoryMoment::new(
            "I said it out loud",
            "First date",
            "On our first date, I told you confidently: I\u{2019}m going to put a ring \
             on your finger. (Spoiler: I meant it.)",
        ),
        StoryMoment::new(
            "When you know, you know",
            "The turning point",
            "What started as a \u{2018}why not?\u{2019} became \u{2018}how could it not \
             be us?\u{2019} Because some love stories don\u{2019}t take long \u{2014} \
             they just feel written.",
        ),
    ]
}

/// The two persona cards on the story page
pub fn personas() -> Vec<Persona> {
    vec![
        Persona {
            name: "Peggy Ndlovu".to_string(),
            role: "My Wife \u{1f48d}".to_string(),
            chips: vec![
                Chip::new(ChipIcon::Coffee, "Coffee always"),
                Chip::new(ChipIcon::Sparkles, "Finds beauty"),
                Chip::new(ChipIcon::Book, "Fantasy novels"),
            ],
            text: "Book lover, brunch enthusiast, and the heart behind this whole \
                   celebration \u{2014} creative, warm, and able to find beauty in the \
                   little things (especially if they sparkle)."
                .to_string(),
        },
        Persona {
            name: "Sabelo Ndlovu".to_string(),
            role: "Your Husband \u{1f497}".to_string(),
            chips: vec![
                Chip::new(ChipIcon::Film, "Documentaries"),
                Chip::new(ChipIcon::Music, "Eclectic playlists"),
                Chip::new(ChipIcon::Wand, "Now loves wizards"),
            ],
            text: "Documentary lover, music enthusiast, and always learning. Loving you \
                   added Harry Potter and Lord of the Rings to my favorites \u{2014} \
                   because love really does lead you to magical places."
                .to_string(),
        },
    ]
}

/// The letter behind the unlock gate, in markdown
pub fn letter() -> &'static str {
    "Peggy,\n\n\
     Happy Valentine\u{2019}s Day, my love. \u{1f497}\n\n\
     No coincidence \u{2014} just God\u{2019}s hand and good Wi-Fi.\n\n\
     I know you had sworn off dating apps. And somehow, on that one last try, \
     you found me\u{2026} and I found you.\n\n\
     From our first conversation, I knew there was something different. You felt \
     like home in a world that moves too fast.\n\n\
     On our first date I said it out loud \u{2014} I\u{2019}m going to put a ring \
     on your finger. I meant it then, and I mean it now.\n\n\
     Thank you for choosing me, for trusting the timing, and for turning a \
     \u{2018}why not?\u{2019} into the best \u{2018}how could it not be us?\u{2019}\n\n\
     Forever starts now.\n\n\
     \u{2014}Your husband, Sabelo"
}

/// The dedication song embed
pub fn dedication() -> Dedication {
    Dedication {
        embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
        open_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovenote_core::{QuizEngine, Screen};

    #[test]
    fn quiz_deck_is_valid() {
        // Construction validates every answer index against its option list
        let quiz = QuizEngine::new(questions(), PASS_RATIO).unwrap();
        assert_eq!(quiz.total(), 5);
    }

    #[test]
    fn pass_threshold_is_four_of_five() {
        assert_eq!(QuizEngine::pass_threshold(questions().len(), PASS_RATIO), 4);
    }

    #[test]
    fn story_has_at_least_three_moments() {
        assert!(story().len() >= 3);
    }

    #[test]
    fn exactly_two_personas() {
        assert_eq!(personas().len(), 2);
    }

    #[test]
    fn nav_covers_four_screens() {
        assert_eq!(Screen::all().len(), 4);
    }

    #[test]
    fn letter_is_not_empty() {
        assert!(letter().starts_with("Peggy,"));
    }

    #[test]
    fn dedication_urls_point_at_the_same_video() {
        let d = dedication();
        assert!(d.embed_url.contains("/embed/"));
        let id = d.embed_url.rsplit('/').next().unwrap();
        assert!(d.open_url.ends_with(id));
    }
}
