//! gridfall: a full-screen terminal splash animation.
//!
//! A field of random glitch characters settles, cell by cell, into a fixed
//! character-art image, holds the finished picture for a moment, and then
//! signals completion. Any key dismisses it immediately.
//!
//! # Architecture
//!
//! Leaves first:
//! - [`engine`]: the simulation: per-cell settling law ([`engine::cell`]),
//!   the shared phase timeline ([`engine::phase`]), and the grid-owning
//!   [`SettlingEngine`]. Wall-clock free and deterministic for a fixed seed.
//! - [`render`]: snapshot → frame buffer projection with resize clamping,
//!   plus the ratatui widget that paints a frame.
//! - [`splash`]: the target art, the [`AnimationController`] lifecycle
//!   (tick / skip / complete-once), and the timer loop that drives a real
//!   terminal.
//! - [`config`] / [`theme`]: every animation knob as a TOML-loadable,
//!   validated configuration with named palette presets.
//!
//! # Example
//!
//! Driving the simulation without a terminal or timers:
//!
//! ```no_run
//! use gridfall::{AnimationController, SettlingEngine, SplashConfig, TargetGlyph};
//! use gridfall::engine::Rgb;
//!
//! let glyphs = vec![TargetGlyph { row: 10, col: 10, ch: 'B', color: Rgb::new(255, 20, 0) }];
//! let engine = SettlingEngine::start(80, 24, &glyphs, &SplashConfig::default(), 42)?;
//! let mut controller = AnimationController::new(engine)
//!     .on_complete(|| println!("done"));
//! controller.tick();
//! controller.skip(); // settled image, completion fired exactly once
//! # Ok::<(), gridfall::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod render;
pub mod splash;
pub mod theme;
pub mod version;

pub use config::{ConfigError, SplashConfig};
pub use engine::{Phase, SettlingEngine, Snapshot, TargetGlyph};
pub use splash::{AnimationController, SplashOutcome};
pub use theme::Palette;
