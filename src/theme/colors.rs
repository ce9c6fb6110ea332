//! Color constants for the Valentine palette.
//!
//! Deep plum void with rose/pink aurora glows and frosted glass surfaces.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID_PLUM: &str = "#07040b";
pub const VOID_LETTER: &str = "rgba(17, 8, 19, 0.9)";

// === AURORA (Glow blobs) ===
pub const ROSE: &str = "rgba(244, 63, 94, 0.55)";
pub const PINK: &str = "rgba(236, 72, 153, 0.55)";
pub const PURPLE: &str = "rgba(168, 85, 247, 0.42)";
pub const BLUSH: &str = "rgba(251, 113, 133, 0.45)";

// === GLASS (Surfaces) ===
pub const GLASS_BG: &str = "rgba(255, 255, 255, 0.07)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.10)";
pub const GLASS_HOVER: &str = "rgba(255, 255, 255, 0.10)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.55)";

// === ACCENT (Unlocked badge) ===
pub const ROSE_BADGE: &str = "rgba(253, 164, 175, 0.1)";
pub const ROSE_BADGE_BORDER: &str = "rgba(253, 164, 175, 0.3)";
pub const ROSE_BADGE_TEXT: &str = "#ffe4e6";
