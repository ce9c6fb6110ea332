//! Lovenote Core Library
//!
//! State machines and content model for the Lovenote card: the memory quiz
//! that gates the letter, the unlock gate itself, the screen set, and the
//! parameter sampling for the decorative effects.
//!
//! All logic here is synchronous and free of UI concerns so it can be tested
//! without a webview.
//!
//! ## Quick Start
//!
//! ```rust
//! use lovenote_core::{Progress, Question, QuizEngine, UnlockGate};
//!
//! let questions = vec![
//!     Question::new("Where did we first meet?", &["Online", "A cafe"], 0),
//!     Question::new("What did I order?", &["Tea", "Coffee"], 1),
//! ];
//! let mut quiz = QuizEngine::new(questions, 0.75)?;
//! let mut gate = UnlockGate::new();
//!
//! quiz.submit_answer(0)?;
//! if let Progress::Finished(report) = quiz.submit_answer(1)? {
//!     if report.passed {
//!         gate.unlock();
//!     }
//! }
//! assert!(gate.can_open_letter());
//! # Ok::<(), lovenote_core::CardError>(())
//! ```

pub mod content;
pub mod effects;
pub mod error;
pub mod gate;
pub mod quiz;
pub mod screen;

// Re-exports
pub use content::{Chip, ChipIcon, Dedication, Persona, StoryMoment};
pub use error::{CardError, CardResult};
pub use gate::UnlockGate;
pub use quiz::{Progress, Question, QuizEngine, QuizReport};
pub use screen::Screen;
