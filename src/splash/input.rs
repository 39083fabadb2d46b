//! Input mapping for the splash.
//!
//! The splash has exactly one interaction: any key dismisses it. Resize
//! events adjust the rendered viewport; everything else is ignored.

use crossterm::event::{Event, KeyEventKind};

/// What the runner should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Skip the animation and complete immediately.
    Skip,
    /// The terminal changed size; re-clamp the rendered frame.
    Resized(u16, u16),
    /// No effect on the splash.
    Ignored,
}

/// Map a crossterm event to a splash action.
pub fn map_event(event: &Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => InputAction::Skip,
        Event::Resize(cols, rows) => InputAction::Resized(*cols, *rows),
        _ => InputAction::Ignored,
    }
}
