//! Parameter sampling for the decorative effects.
//!
//! Each effect draws a fixed-size collection of randomly parameterized
//! elements at mount time; all animation afterwards is declarative CSS. The
//! generators take the RNG as a parameter so tests can seed them.

use rand::Rng;

/// Default number of stars in the starfield
pub const STAR_COUNT: usize = 86;

/// Default number of floating hearts
pub const HEART_COUNT: usize = 18;

/// Number of pieces in one heart burst
pub const BURST_PIECES: usize = 22;

/// How long a burst stays on screen before it clears itself
pub const BURST_CLEAR_MS: u64 = 1400;

/// Largest shift, in pixels, the parallax glow moves along each axis
pub const PARALLAX_SHIFT_PX: f32 = 10.0;

/// Cursor offset from the window center, normalized so each axis lies in
/// `[-1, 1]`. Drives the subtle drift of the hero glow layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub x: f32,
    pub y: f32,
}

impl ParallaxOffset {
    /// Offset for a cursor at `(cursor_x, cursor_y)` in a window of the
    /// given logical size. Cursor positions beyond the window edges clamp
    /// to the edge; a degenerate window yields the centered offset.
    pub fn from_cursor(cursor_x: f32, cursor_y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let x = (cursor_x - width / 2.0) / (width / 2.0);
        let y = (cursor_y - height / 2.0) / (height / 2.0);
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Horizontal glow shift in pixels
    pub fn shift_x(&self) -> f32 {
        self.x * PARALLAX_SHIFT_PX
    }

    /// Vertical glow shift in pixels
    pub fn shift_y(&self) -> f32 {
        self.y * PARALLAX_SHIFT_PX
    }
}

/// One twinkling star: position in percent of the viewport, size in pixels,
/// opacity, and twinkle period in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSpec {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub duration: f32,
}

/// One floating heart: horizontal position in percent, scale factor, float
/// duration and start delay in seconds, opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartSpec {
    pub x: f32,
    pub scale: f32,
    pub duration: f32,
    pub delay: f32,
    pub opacity: f32,
}

/// One burst piece: final drift in pixels, rotation in degrees, scale, and
/// flight duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstPiece {
    pub drift_x: f32,
    pub drift_y: f32,
    pub rotation: f32,
    pub scale: f32,
    pub duration: f32,
}

/// Sample `count` stars scattered over the full viewport
pub fn starfield(count: usize, rng: &mut impl Rng) -> Vec<StarSpec> {
    (0..count)
        .map(|_| StarSpec {
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            size: 1.0 + rng.random_range(0.0..2.4),
            opacity: 0.22 + rng.random_range(0.0..0.62),
            duration: 3.0 + rng.random_range(0.0..7.0),
        })
        .collect()
}

/// Sample `count` hearts that drift up from below the viewport
pub fn floating_hearts(count: usize, rng: &mut impl Rng) -> Vec<HeartSpec> {
    (0..count)
        .map(|_| HeartSpec {
            x: rng.random_range(0.0..100.0),
            scale: 0.6 + rng.random_range(0.0..1.2),
            duration: 6.0 + rng.random_range(0.0..8.0),
            delay: rng.random_range(0.0..4.0),
            opacity: 0.12 + rng.random_range(0.0..0.22),
        })
        .collect()
}

/// Sample one burst of `count` pieces falling outward from the trigger point
pub fn heart_burst(count: usize, rng: &mut impl Rng) -> Vec<BurstPiece> {
    (0..count)
        .map(|_| BurstPiece {
            drift_x: rng.random_range(-1.0..1.0) * 160.0,
            drift_y: 560.0 + rng.random_range(0.0..260.0),
            rotation: rng.random_range(0.0..360.0),
            scale: 0.75 + rng.random_range(0.0..1.1),
            duration: 0.8 + rng.random_range(0.0..0.9),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starfield_count_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = starfield(STAR_COUNT, &mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in stars {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..3.4).contains(&star.size));
            assert!((0.22..0.84).contains(&star.opacity));
            assert!((3.0..10.0).contains(&star.duration));
        }
    }

    #[test]
    fn hearts_count_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let hearts = floating_hearts(HEART_COUNT, &mut rng);
        assert_eq!(hearts.len(), HEART_COUNT);
        for heart in hearts {
            assert!((0.0..100.0).contains(&heart.x));
            assert!((0.6..1.8).contains(&heart.scale));
            assert!((6.0..14.0).contains(&heart.duration));
            assert!((0.0..4.0).contains(&heart.delay));
            assert!((0.12..0.34).contains(&heart.opacity));
        }
    }

    #[test]
    fn burst_count_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let pieces = heart_burst(BURST_PIECES, &mut rng);
        assert_eq!(pieces.len(), BURST_PIECES);
        for piece in pieces {
            assert!((-160.0..160.0).contains(&piece.drift_x));
            assert!((560.0..820.0).contains(&piece.drift_y));
            assert!((0.0..360.0).contains(&piece.rotation));
            assert!((0.75..1.85).contains(&piece.scale));
            assert!((0.8..1.7).contains(&piece.duration));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = starfield(10, &mut StdRng::seed_from_u64(42));
        let b = starfield(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn parallax_is_centered_at_window_center() {
        let offset = ParallaxOffset::from_cursor(550.0, 400.0, 1100.0, 800.0);
        assert_eq!(offset, ParallaxOffset::default());
        assert_eq!(offset.shift_x(), 0.0);
        assert_eq!(offset.shift_y(), 0.0);
    }

    #[test]
    fn parallax_reaches_full_shift_at_corners() {
        let top_left = ParallaxOffset::from_cursor(0.0, 0.0, 1100.0, 800.0);
        assert_eq!(top_left.x, -1.0);
        assert_eq!(top_left.y, -1.0);
        assert_eq!(top_left.shift_x(), -PARALLAX_SHIFT_PX);

        let bottom_right = ParallaxOffset::from_cursor(1100.0, 800.0, 1100.0, 800.0);
        assert_eq!(bottom_right.x, 1.0);
        assert_eq!(bottom_right.y, 1.0);
        assert_eq!(bottom_right.shift_y(), PARALLAX_SHIFT_PX);
    }

    #[test]
    fn parallax_clamps_cursor_outside_the_window() {
        let offset = ParallaxOffset::from_cursor(-300.0, 5000.0, 1100.0, 800.0);
        assert_eq!(offset.x, -1.0);
        assert_eq!(offset.y, 1.0);
    }

    #[test]
    fn parallax_ignores_degenerate_window_sizes() {
        assert_eq!(
            ParallaxOffset::from_cursor(10.0, 10.0, 0.0, 800.0),
            ParallaxOffset::default()
        );
        assert_eq!(
            ParallaxOffset::from_cursor(10.0, 10.0, 1100.0, -1.0),
            ParallaxOffset::default()
        );
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(starfield(0, &mut rng).is_empty());
        assert!(floating_hearts(0, &mut rng).is_empty());
        assert!(heart_burst(0, &mut rng).is_empty());
    }
}
