//! The settling engine: owns the cell grid and drives it tick by tick.
//!
//! One instance per animation run. `start` allocates a cell for every
//! screen position, `tick` advances the whole grid one step according to
//! the current phase, `cancel` snaps everything to the finished image, and
//! `snapshot` hands out an immutable copy for rendering.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

use crate::config::{ConfigError, SplashConfig};

use super::cell::{Cell, CellKind};
use super::color::Rgb;
use super::phase::{Phase, PhaseClock};

/// One entry of the fixed target image: where a character of the final
/// picture lives and what it looks like once settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGlyph {
    pub row: u16,
    pub col: u16,
    pub ch: char,
    pub color: Rgb,
}

/// One rendered cell of a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotCell {
    pub ch: char,
    pub color: Rgb,
}

/// Immutable, fully-formed copy of the grid's visible state.
///
/// Taken after a `tick` completes, so it can be shipped to a presentation
/// thread without ever exposing a torn frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u16,
    height: u16,
    cells: Vec<SnapshotCell>,
}

impl Snapshot {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: u16, col: u16) -> Option<SnapshotCell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = usize::from(row) * usize::from(self.width) + usize::from(col);
        self.cells.get(idx).copied()
    }

    /// Row-major slice of all cells.
    pub fn cells(&self) -> &[SnapshotCell] {
        &self.cells
    }
}

/// Drives a grid of [`Cell`]s from noise to the target image.
#[derive(Debug)]
pub struct SettlingEngine {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    clock: PhaseClock,
    config: SplashConfig,
    alphabet: Vec<char>,
}

impl SettlingEngine {
    /// Allocate the grid and place it in the Chaos phase.
    ///
    /// Positions covered by a glyph become Art cells settling to that
    /// glyph; every other position becomes a Background cell settling to a
    /// blank. Glyphs outside `width`×`height` are dropped. Fails with a
    /// [`ConfigError`] when the configuration violates its invariants
    /// (notably `materialize_ticks < max_lifetime`).
    pub fn start(
        width: u16,
        height: u16,
        glyphs: &[TargetGlyph],
        config: &SplashConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let targets: HashMap<(u16, u16), &TargetGlyph> = glyphs
            .iter()
            .filter(|g| g.row < height && g.col < width)
            .map(|g| ((g.row, g.col), g))
            .collect();

        let alphabet = config.glitch_chars();
        let mut master = SmallRng::seed_from_u64(seed);
        let mut cells = Vec::with_capacity(usize::from(width) * usize::from(height));
        for row in 0..height {
            for col in 0..width {
                let cell = match targets.get(&(row, col)) {
                    Some(glyph) => Cell::new(
                        CellKind::Art,
                        glyph.ch,
                        glyph.color,
                        config,
                        &alphabet,
                        &mut master,
                    ),
                    None => Cell::new(
                        CellKind::Background,
                        ' ',
                        config.background,
                        config,
                        &alphabet,
                        &mut master,
                    ),
                };
                cells.push(cell);
            }
        }

        debug!(
            width,
            height,
            art_cells = targets.len(),
            seed,
            "settling engine started"
        );

        Ok(Self {
            width,
            height,
            cells,
            clock: PhaseClock::new(config.chaos_ticks, config.materialize_ticks, config.hold_ticks),
            config: config.clone(),
            alphabet,
        })
    }

    /// Advance the whole grid by one tick and return the resulting phase.
    ///
    /// Chaos re-rolls every cell's noise; Materializing runs each cell's
    /// settling step; Hold and Done leave the grid untouched. The per-cell
    /// work is order-independent (each cell owns its RNG), so the sweep
    /// runs in parallel without affecting determinism.
    pub fn tick(&mut self) -> Phase {
        let before = self.clock.current();
        let phase = self.clock.advance();
        match phase {
            Phase::Chaos => {
                let alphabet = &self.alphabet;
                let palette = &self.config.glitch_colors;
                self.cells
                    .par_iter_mut()
                    .for_each(|cell| cell.reroll_glitch(alphabet, palette));
            }
            Phase::Materializing => {
                let alphabet = &self.alphabet;
                let config = &self.config;
                self.cells
                    .par_iter_mut()
                    .for_each(|cell| cell.advance(alphabet, config));
            }
            Phase::Hold | Phase::Done => {}
        }
        if phase != before {
            debug!(tick = self.clock.tick_count(), ?phase, "phase transition");
        }
        phase
    }

    /// Force the terminal phase, snapping every cell to its final state.
    ///
    /// A mid-settle cancel never leaves a half-glitched frame behind.
    pub fn cancel(&mut self) {
        self.clock.cancel();
        for cell in &mut self.cells {
            cell.settle();
        }
        debug!(tick = self.clock.tick_count(), "animation cancelled");
    }

    /// Phase of the most recent tick.
    pub fn phase(&self) -> Phase {
        self.clock.current()
    }

    /// Ticks processed so far.
    pub fn tick_count(&self) -> u64 {
        self.clock.tick_count()
    }

    /// Copy the visible state of every cell.
    pub fn snapshot(&self) -> Snapshot {
        let cells = self
            .cells
            .iter()
            .map(|cell| {
                let (ch, color) = cell.display();
                SnapshotCell { ch, color }
            })
            .collect();
        Snapshot {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// True once every cell has reached its final state.
    pub fn fully_settled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }
}
