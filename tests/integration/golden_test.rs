//! Golden settled frames.
//!
//! Whatever the seed or the path taken (natural completion or skip), the
//! settled frame is fully determined by the target art. These tests pin
//! that final picture down.

use gridfall::render::frame;
use gridfall::splash::art;
use gridfall::{SettlingEngine, SplashConfig};
use unicode_width::UnicodeWidthStr;

use super::helpers::RED;

#[test]
fn settled_frame_matches_golden_snapshot() {
    let config = SplashConfig::default();
    let layout = art::layout(&["<>", "##"], 10, 5, RED);
    let mut engine = SettlingEngine::start(10, 5, &layout.glyphs, &config, 77).unwrap();
    engine.cancel();

    let buffer = frame::render(&engine.snapshot(), 10, 5);
    let text = buffer
        .plain_rows()
        .iter()
        .map(|row| format!("|{row}|"))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(text, @r"
    ||
    |    <>|
    |    ##|
    ||
    ||
    ");
}

#[test]
fn settled_title_is_centered_on_a_standard_terminal() {
    let config = SplashConfig::default();
    let layout = art::layout(art::TITLE, 80, 24, config.art_color);
    let mut engine = SettlingEngine::start(80, 24, &layout.glyphs, &config, 3).unwrap();
    engine.cancel();

    let rows = frame::render(&engine.snapshot(), 80, 24).plain_rows();

    let art_width = art::TITLE
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap();
    let left = (80 - art_width) / 2;

    for (i, line) in art::TITLE.iter().enumerate() {
        let expected = format!("{}{}", " ".repeat(left), line.trim_end());
        assert_eq!(rows[usize::from(layout.top) + i], expected, "art row {i}");
    }

    // Rows outside the art block are settled background.
    assert!(rows[0].is_empty());
    assert!(rows[23].is_empty());
}

#[test]
fn settled_colors_come_from_the_palette() {
    let config = SplashConfig::default();
    let layout = art::layout(art::TITLE, 80, 24, config.art_color);
    let mut engine = SettlingEngine::start(80, 24, &layout.glyphs, &config, 4).unwrap();
    engine.cancel();

    let snap = engine.snapshot();
    for glyph in &layout.glyphs {
        let cell = snap.cell(glyph.row, glyph.col).unwrap();
        assert_eq!(cell.ch, glyph.ch);
        assert_eq!(cell.color, config.art_color);
    }
    assert_eq!(snap.cell(0, 0).unwrap().color, config.background);
}
