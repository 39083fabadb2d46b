//! The splash screen: target art, lifecycle control, and the terminal loop.
//!
//! The split mirrors the layering of the engine underneath:
//! - `art`: what the animation settles into
//! - `controller`: tick/skip/complete lifecycle, wall-clock free
//! - `input`: terminal events → splash actions
//! - `runner`: the timer loop that ties it to a real terminal
//! - `terminal`: raw-mode setup with guaranteed restore

pub mod art;
pub mod controller;
pub mod input;
pub mod runner;
pub mod terminal;

pub use controller::AnimationController;
pub use runner::{run, SplashOutcome};
