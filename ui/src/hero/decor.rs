//! Randomized descriptors for the hero's decorative layers.
//!
//! Two kinds of floating elements fill the hero background: cherry-blossom
//! petals falling the full height of the section, and small tech glyphs
//! drifting in place. Both sets are generated once when the hero mounts and
//! survive re-renders untouched; the numbers here feed CSS custom properties
//! and the animation loops run entirely in the stylesheet.
//!
//! Draws are uniform and independent per field. Nothing is seeded, stored,
//! or reproducible across visits.

use rand::Rng;

/// Petals scattered per mount.
pub const PETAL_COUNT: usize = 25;

/// Tech glyphs scattered per mount.
pub const TECH_GLYPH_COUNT: usize = 20;

/// Glyph strings a [`TechGlyph`] can display. Picks are with replacement,
/// so repeats across one scatter are expected.
pub const TECH_SYMBOLS: [&str; 14] = [
    "{ }", "<>", "[ ]", "()", "01", "IoT", "AI", "ML", "⚡", "🔧", "💻", "🌐", "📡", "⚙️",
];

/// One falling petal.
#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    /// Index in generation order (doubles as the render key).
    pub id: usize,
    /// Horizontal position, percent of the hero width.
    pub left: f64,
    /// Animation start delay in seconds.
    pub delay: f64,
    /// Full top-to-bottom fall duration in seconds.
    pub duration: f64,
    /// Rendered width in px.
    pub size: f64,
}

impl Petal {
    /// Scatter a fresh set of [`PETAL_COUNT`] petals across the hero.
    pub fn scatter(rng: &mut impl Rng) -> Vec<Petal> {
        (0..PETAL_COUNT)
            .map(|id| Petal {
                id,
                left: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..5.0),
                duration: rng.gen_range(10.0..20.0),
                size: rng.gen_range(10.0..30.0),
            })
            .collect()
    }

    /// Horizontal sway amplitude in px. Stable per petal since it derives
    /// from the id rather than a separate draw.
    pub fn sway(&self) -> f64 {
        (self.id as f64).sin() * 100.0
    }
}

/// One floating tech glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct TechGlyph {
    /// Index in generation order (doubles as the render key).
    pub id: usize,
    /// Displayed glyph, one of [`TECH_SYMBOLS`].
    pub symbol: &'static str,
    /// Horizontal position, percent of the hero width.
    pub left: f64,
    /// Vertical position, percent of the hero height.
    pub top: f64,
    /// Animation start delay in seconds.
    pub delay: f64,
    /// Drift-loop duration in seconds.
    pub duration: f64,
    /// Font size in rem.
    pub scale: f64,
}

impl TechGlyph {
    /// Scatter a fresh set of [`TECH_GLYPH_COUNT`] glyphs across the hero.
    pub fn scatter(rng: &mut impl Rng) -> Vec<TechGlyph> {
        (0..TECH_GLYPH_COUNT)
            .map(|id| TechGlyph {
                id,
                symbol: TECH_SYMBOLS[rng.gen_range(0..TECH_SYMBOLS.len())],
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..3.0),
                duration: rng.gen_range(15.0..25.0),
                scale: rng.gen_range(0.8..2.3),
            })
            .collect()
    }

    /// Horizontal drift amplitude in px, keyed to the id like [`Petal::sway`].
    pub fn drift(&self) -> f64 {
        (self.id as f64).sin() * 20.0
    }
}
