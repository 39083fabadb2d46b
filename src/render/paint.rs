//! Terminal painting for the splash.
//!
//! [`SplashWidget`] writes a [`FrameBuffer`] into the ratatui back buffer:
//! background fill, one styled character per cell, and during the Hold
//! phase a centered prompt line below the art.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::engine::color::Rgb;

use super::frame::FrameBuffer;

/// Prompt overlay shown while the finished image is held.
#[derive(Debug, Clone, Copy)]
pub struct PromptLine<'a> {
    pub text: &'a str,
    pub row: u16,
    pub color: Rgb,
}

/// Paints one animation frame into a terminal area.
#[derive(Debug)]
pub struct SplashWidget<'a> {
    frame: &'a FrameBuffer,
    background: Rgb,
    prompt: Option<PromptLine<'a>>,
}

impl<'a> SplashWidget<'a> {
    pub fn new(frame: &'a FrameBuffer, background: Rgb) -> Self {
        Self {
            frame,
            background,
            prompt: None,
        }
    }

    /// Overlay a prompt line (Hold phase only).
    pub fn prompt(mut self, prompt: Option<PromptLine<'a>>) -> Self {
        self.prompt = prompt;
        self
    }
}

impl Widget for SplashWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bg = self.background.into();
        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                buf[(x, y)].set_char(' ').set_bg(bg);
            }
        }

        let rows = self.frame.height().min(area.height);
        let cols = self.frame.width().min(area.width);
        for row in 0..rows {
            for col in 0..cols {
                if let Some(cell) = self.frame.cell(row, col) {
                    let x = area.x + col;
                    let y = area.y + row;
                    buf[(x, y)]
                        .set_char(cell.ch)
                        .set_fg(cell.color.into())
                        .set_bg(bg);
                }
            }
        }

        if let Some(prompt) = self.prompt {
            if prompt.row < area.height {
                let text_width = prompt.text.chars().count() as u16;
                let start = area.width.saturating_sub(text_width) / 2;
                let y = area.y + prompt.row;
                for (i, ch) in prompt.text.chars().enumerate() {
                    let x = area.x + start + i as u16;
                    if x >= area.x + area.width {
                        break;
                    }
                    buf[(x, y)]
                        .set_char(ch)
                        .set_fg(prompt.color.into())
                        .set_bg(bg);
                }
            }
        }
    }
}
