//! Unlock gate for the letter.
//!
//! A single boolean set true at most once per session, derived from the quiz
//! outcome. The "Open the letter" button being disabled is presentation; this
//! gate is the enforcement the UI consults before opening the modal.

/// Gate controlling access to the letter content.
///
/// Starts locked; `unlock` flips it exactly once. There is no way to re-lock
/// within a session - a fresh gate is created when the application restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnlockGate {
    unlocked: bool,
}

impl UnlockGate {
    /// A gate in its initial, locked state
    pub fn new() -> Self {
        Self::default()
    }

    /// Capability check consulted before opening the letter
    pub fn can_open_letter(&self) -> bool {
        self.unlocked
    }

    /// Unlock the gate.
    ///
    /// Returns `true` only on the call that changed the state, so the caller
    /// can trigger one-shot side effects (celebration burst) without firing
    /// them again on redundant unlocks.
    pub fn unlock(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        tracing::info!("Letter unlocked");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_locked() {
        let gate = UnlockGate::new();
        assert!(!gate.can_open_letter());
    }

    #[test]
    fn unlock_fires_once() {
        let mut gate = UnlockGate::new();
        assert!(gate.unlock());
        assert!(!gate.unlock());
        assert!(!gate.unlock());
        assert!(gate.can_open_letter());
    }

    #[test]
    fn capability_check_has_no_side_effects() {
        let mut gate = UnlockGate::new();
        gate.unlock();
        let before = gate;
        assert!(gate.can_open_letter());
        assert!(gate.can_open_letter());
        assert_eq!(gate, before);
    }
}
