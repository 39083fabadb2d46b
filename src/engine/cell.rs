//! Per-cell settling state and its update rule.
//!
//! Every screen position owns one [`Cell`]. A cell starts as random noise
//! and converges on its final character and color over an individually
//! assigned lifetime: character re-rolls slow down as progress grows, the
//! chance of rolling the final character rises linearly with progress, and
//! the color eases from the cell's glitch base toward the final hue.
//!
//! Each cell carries its own `SmallRng`, seeded from the engine's master
//! RNG at creation. Updates therefore never depend on the order cells are
//! visited in, which keeps the per-tick sweep safe to parallelize while a
//! fixed master seed still reproduces the run byte for byte.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SplashConfig;

use super::color::Rgb;

/// Whether a position belongs to the target image or the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Settles to a character of the target image.
    Art,
    /// Settles to a blank space in the background color.
    Background,
}

/// Mutable settling state for one screen position.
#[derive(Debug, Clone)]
pub struct Cell {
    kind: CellKind,
    lifetime_ticks: u32,
    elapsed_ticks: u32,
    final_char: char,
    final_color: Rgb,
    /// Interpolation base; re-rolled during Chaos, frozen once settling starts.
    glitch_color: Rgb,
    display_char: char,
    display_color: Rgb,
    /// Ticks since the character last re-rolled. Throttles cycling as
    /// progress grows.
    ticks_since_cycle: u32,
    rng: SmallRng,
}

impl Cell {
    /// Create a cell in its initial noise state.
    ///
    /// Draws the lifetime uniformly from the configured range and seeds the
    /// cell's private RNG from `master`, then rolls the initial glitch
    /// character and color.
    pub(crate) fn new(
        kind: CellKind,
        final_char: char,
        final_color: Rgb,
        config: &SplashConfig,
        alphabet: &[char],
        master: &mut SmallRng,
    ) -> Self {
        let lifetime_ticks = master.gen_range(config.min_lifetime..=config.max_lifetime);
        let mut rng = SmallRng::seed_from_u64(master.gen());
        let display_char = alphabet[rng.gen_range(0..alphabet.len())];
        let glitch_color = config.glitch_colors[rng.gen_range(0..config.glitch_colors.len())];
        Self {
            kind,
            lifetime_ticks,
            elapsed_ticks: 0,
            final_char,
            final_color,
            glitch_color,
            display_char,
            display_color: glitch_color,
            ticks_since_cycle: 0,
            rng,
        }
    }

    pub(crate) fn kind(&self) -> CellKind {
        self.kind
    }

    /// Settling progress in `[0, 1]`.
    pub(crate) fn progress(&self) -> f32 {
        (self.elapsed_ticks as f32 / self.lifetime_ticks as f32).min(1.0)
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.progress() >= 1.0
    }

    /// What this cell shows right now.
    pub(crate) fn display(&self) -> (char, Rgb) {
        (self.display_char, self.display_color)
    }

    /// Chaos-phase update: fresh noise character and color, no trajectory.
    pub(crate) fn reroll_glitch(&mut self, alphabet: &[char], palette: &[Rgb]) {
        self.display_char = alphabet[self.rng.gen_range(0..alphabet.len())];
        self.glitch_color = palette[self.rng.gen_range(0..palette.len())];
        self.display_color = self.glitch_color;
    }

    /// Materializing-phase update. One call per tick.
    pub(crate) fn advance(&mut self, alphabet: &[char], config: &SplashConfig) {
        if self.is_settled() {
            return;
        }

        self.elapsed_ticks += 1;
        let p = self.progress();
        if p >= 1.0 {
            self.settle();
            return;
        }

        if p >= config.cadence_freeze_at {
            self.display_char = self.final_char;
        } else {
            let cycle_every = if p < config.cadence_fast_until {
                1
            } else if p < config.cadence_steady_until {
                config.cadence_steady_every
            } else {
                config.cadence_slow_every
            };
            self.ticks_since_cycle += 1;
            if self.ticks_since_cycle >= cycle_every {
                self.ticks_since_cycle = 0;
                // Linear bias: the final character wins with probability p.
                self.display_char = if self.rng.gen_bool(f64::from(p)) {
                    self.final_char
                } else {
                    alphabet[self.rng.gen_range(0..alphabet.len())]
                };
            }
        }

        // Color updates every tick regardless of the cycling cadence.
        let t = p.powf(config.color_ease_exponent);
        self.display_color = self.glitch_color.lerp(self.final_color, t);
    }

    /// Snap straight to the terminal state: exact final character and color.
    pub(crate) fn settle(&mut self) {
        self.elapsed_ticks = self.lifetime_ticks;
        self.display_char = self.final_char;
        self.display_color = self.final_color;
    }
}
