//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use gridfall::engine::{Phase, Rgb, Snapshot};
use gridfall::{SettlingEngine, SplashConfig, TargetGlyph};

pub const RED: Rgb = Rgb::new(0xff, 0x14, 0x00);

/// The documented reference timing: chaos 5, materialize 20, hold 10,
/// lifetimes 10..=18.
pub fn scenario_config() -> SplashConfig {
    SplashConfig {
        chaos_ticks: 5,
        materialize_ticks: 20,
        hold_ticks: 10,
        min_lifetime: 10,
        max_lifetime: 18,
        ..Default::default()
    }
}

/// A single 'B' glyph at (10, 10).
pub fn single_glyph() -> Vec<TargetGlyph> {
    vec![TargetGlyph {
        row: 10,
        col: 10,
        ch: 'B',
        color: RED,
    }]
}

/// Run an engine to Done, collecting the snapshot after every tick.
pub fn run_to_done(engine: &mut SettlingEngine) -> Vec<Snapshot> {
    let mut frames = Vec::new();
    loop {
        let phase = engine.tick();
        frames.push(engine.snapshot());
        if phase == Phase::Done {
            return frames;
        }
    }
}
