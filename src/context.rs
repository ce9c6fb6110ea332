//! Shared card state provided through context.
//!
//! The unlock gate, the burst trigger, and the letter-modal flag cross
//! screen boundaries, so they live in signals provided by the root `App`
//! component rather than in any single page.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let gate = use_unlock_gate();
//! if gate().can_open_letter() {
//!     // ...
//! }
//! ```

use dioxus::prelude::*;
use lovenote_core::effects::ParallaxOffset;
use lovenote_core::UnlockGate;

/// Counter that triggers a heart burst each time it increments.
///
/// Wrapping newtype so the context lookup is unambiguous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BurstTrigger(pub u32);

/// Whether the letter modal is currently open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterOpen(pub bool);

/// Hook to access the session's unlock gate
pub fn use_unlock_gate() -> Signal<UnlockGate> {
    use_context::<Signal<UnlockGate>>()
}

/// Hook to access the burst trigger counter.
///
/// Increment the counter to fire a burst; the burst layer watches it and
/// clears itself after a fixed duration.
pub fn use_burst_trigger() -> Signal<BurstTrigger> {
    use_context::<Signal<BurstTrigger>>()
}

/// Hook to access the letter modal flag
pub fn use_letter_open() -> Signal<LetterOpen> {
    use_context::<Signal<LetterOpen>>()
}

/// Hook to access the cursor parallax offset.
///
/// The shell updates it on mouse movement; the glow layer reads it. Stays
/// at the centered default under reduced motion.
pub fn use_parallax() -> Signal<ParallaxOffset> {
    use_context::<Signal<ParallaxOffset>>()
}

/// Whether animations are suppressed this session
pub fn reduce_motion() -> bool {
    crate::reduce_motion()
}
