//! The settling simulation.
//!
//! A discrete-time, per-cell stochastic process: every screen position
//! starts as random noise and converges on a target image over its own
//! randomly drawn lifetime, under a shared phase timeline (Chaos →
//! Materializing → Hold → Done).
//!
//! The engine is deliberately free of terminal concerns: it produces
//! [`Snapshot`]s, and the `render` module turns those into something a
//! terminal can paint. It is also wall-clock free: callers drive it with
//! `tick()`, which makes every behavior testable without timers.

pub mod cell;
pub mod color;
pub mod phase;
pub mod settle;

pub use cell::CellKind;
pub use color::Rgb;
pub use phase::{Phase, PhaseClock};
pub use settle::{SettlingEngine, Snapshot, SnapshotCell, TargetGlyph};
