//! Built-in title art and its placement on the grid.
//!
//! The target image is a block-letter rendition of the crate name. Layout
//! centers it in the available terminal area and emits one [`TargetGlyph`]
//! per non-blank character; anything that does not fit a small terminal is
//! clipped rather than failing.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::engine::color::Rgb;
use crate::engine::settle::TargetGlyph;

/// Rows the hold-phase prompt sits below the art.
const PROMPT_GAP: u16 = 2;

/// The block-letter title.
pub const TITLE: &[&str] = &[
    " ██████╗  ██████╗  ██╗ ██████╗  ███████╗  █████╗  ██╗      ██╗",
    "██╔════╝  ██╔══██╗ ██║ ██╔══██╗ ██╔════╝ ██╔══██╗ ██║      ██║",
    "██║  ███╗ ██████╔╝ ██║ ██║  ██║ █████╗   ███████║ ██║      ██║",
    "██║   ██║ ██╔══██╗ ██║ ██║  ██║ ██╔══╝   ██╔══██║ ██║      ██║",
    "╚██████╔╝ ██║  ██║ ██║ ██████╔╝ ██║      ██║  ██║ ███████╗ ███████╗",
    " ╚═════╝  ╚═╝  ╚═╝ ╚═╝ ╚═════╝  ╚═╝      ╚═╝  ╚═╝ ╚══════╝ ╚══════╝",
];

/// A placed piece of art: the glyphs plus where the art landed.
#[derive(Debug, Clone)]
pub struct ArtLayout {
    /// One glyph per visible character, all within the grid bounds.
    pub glyphs: Vec<TargetGlyph>,
    /// First row of the art block.
    pub top: u16,
    /// Rows the art block occupies.
    pub height: u16,
    /// Row for the hold-phase prompt, when it fits on screen.
    pub prompt_row: Option<u16>,
}

/// Center `lines` in a `width`×`height` grid and emit its glyphs.
///
/// Offsets follow `max(0, (dim - art) / 2)`; on terminals smaller than the
/// art the overflow is clipped. Blank characters stay background cells.
pub fn layout(lines: &[&str], width: u16, height: u16, color: Rgb) -> ArtLayout {
    let art_height = lines.len() as u16;
    let art_width = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line) as u16)
        .max()
        .unwrap_or(0);
    let top = height.saturating_sub(art_height) / 2;
    let left = width.saturating_sub(art_width) / 2;

    let mut glyphs = Vec::new();
    for (line_idx, line) in lines.iter().enumerate() {
        let row = top + line_idx as u16;
        if row >= height {
            break;
        }
        let mut col = left;
        for ch in line.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if ch != ' ' && col < width {
                glyphs.push(TargetGlyph { row, col, ch, color });
            }
            col += ch_width;
        }
    }

    let prompt_row = top
        .checked_add(art_height)
        .and_then(|r| r.checked_add(PROMPT_GAP))
        .filter(|r| *r < height);

    ArtLayout {
        glyphs,
        top,
        height: art_height,
        prompt_row,
    }
}
