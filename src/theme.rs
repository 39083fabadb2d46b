//! Color palettes for the splash.
//!
//! A palette bundles the four color roles the animation uses: the screen
//! background, the settled art, the hold-phase prompt, and the glitch noise
//! colors (repeats in the list act as weights for the random draw).

use crate::engine::color::Rgb;

/// One named color scheme.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Screen fill and the color background cells settle to.
    pub background: Rgb,
    /// Color the title art settles into.
    pub art: Rgb,
    /// Color of the "press any key" prompt.
    pub prompt: Rgb,
    /// Noise colors; duplicated entries are drawn more often.
    pub glitch: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Palette {
    /// Dark blue noise settling into warm gold on a near-black screen.
    pub fn midnight() -> Self {
        Self {
            background: Rgb::new(0x0a, 0x0a, 0x0f),
            art: Rgb::new(0xf5, 0xc5, 0x18),
            prompt: Rgb::new(0xc4, 0x9e, 0x14),
            glitch: vec![
                Rgb::new(0x1a, 0x3a, 0x5c),
                Rgb::new(0x0d, 0x24, 0x40),
                Rgb::new(0x1a, 0x3a, 0x5c),
                Rgb::new(0x2d, 0x2d, 0x4e),
                Rgb::new(0x1a, 0x1a, 0x3a),
                Rgb::new(0x0d, 0x24, 0x40),
                Rgb::new(0x3a, 0x4a, 0x6c),
                Rgb::new(0x1a, 0x3a, 0x5c),
                Rgb::new(0x0d, 0x24, 0x40),
                Rgb::new(0x4a, 0x5a, 0x7c),
                Rgb::new(0x1a, 0x3a, 0x5c),
                Rgb::new(0x2d, 0x2d, 0x4e),
            ],
        }
    }

    /// Green-on-black terminal classic.
    pub fn phosphor() -> Self {
        Self {
            background: Rgb::new(0x05, 0x0a, 0x05),
            art: Rgb::new(0x5a, 0xf7, 0x8e),
            prompt: Rgb::new(0x3f, 0xb9, 0x6a),
            glitch: vec![
                Rgb::new(0x0f, 0x38, 0x1f),
                Rgb::new(0x14, 0x4a, 0x28),
                Rgb::new(0x0f, 0x38, 0x1f),
                Rgb::new(0x1c, 0x5c, 0x33),
                Rgb::new(0x0a, 0x26, 0x15),
                Rgb::new(0x14, 0x4a, 0x28),
            ],
        }
    }

    /// Dim gray noise settling into bright white.
    pub fn mono() -> Self {
        Self {
            background: Rgb::new(0x0c, 0x0c, 0x0c),
            art: Rgb::new(0xe6, 0xe8, 0xeb),
            prompt: Rgb::new(0x9a, 0x9d, 0xa1),
            glitch: vec![
                Rgb::new(0x2a, 0x2a, 0x2e),
                Rgb::new(0x3a, 0x3a, 0x40),
                Rgb::new(0x2a, 0x2a, 0x2e),
                Rgb::new(0x4a, 0x4a, 0x52),
                Rgb::new(0x1e, 0x1e, 0x22),
            ],
        }
    }

    /// Look up a palette by name. Names are case-insensitive.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "midnight" => Some(Self::midnight()),
            "phosphor" => Some(Self::phosphor()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    /// Names accepted by [`Palette::by_name`], for CLI help and errors.
    pub fn names() -> &'static [&'static str] {
        &["midnight", "phosphor", "mono"]
    }
}
