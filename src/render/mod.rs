//! Turning engine snapshots into painted terminal frames.
//!
//! - `frame`: pure snapshot → [`frame::FrameBuffer`] projection with
//!   resize clamping
//! - `paint`: ratatui widget that puts a frame on screen

pub mod frame;
pub mod paint;

pub use frame::{render, FrameBuffer, FrameCell};
pub use paint::{PromptLine, SplashWidget};
