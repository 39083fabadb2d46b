//! Full-run scenarios through the public API.

use std::cell::Cell;
use std::rc::Rc;

use gridfall::engine::{Phase, SnapshotCell};
use gridfall::{AnimationController, SettlingEngine};

use super::helpers::{scenario_config, single_glyph, RED};

#[test]
fn reference_scenario_settles_on_schedule() {
    let config = scenario_config();
    let mut engine = SettlingEngine::start(80, 24, &single_glyph(), &config, 1).unwrap();

    for _ in 0..25 {
        engine.tick();
    }

    let snap = engine.snapshot();
    assert_eq!(
        snap.cell(10, 10).unwrap(),
        SnapshotCell { ch: 'B', color: RED }
    );
    assert_eq!(
        snap.cell(0, 0).unwrap(),
        SnapshotCell {
            ch: ' ',
            color: config.background
        }
    );

    // One more tick: still Hold, image unchanged.
    assert_eq!(engine.tick(), Phase::Hold);
    assert_eq!(engine.snapshot(), snap);
}

#[test]
fn hold_frames_are_frozen_until_done() {
    let config = scenario_config();
    let mut engine = SettlingEngine::start(40, 12, &single_glyph(), &config, 2).unwrap();

    // chaos (4) + materialize (20), next call enters Hold
    for _ in 0..24 {
        engine.tick();
    }
    assert_eq!(engine.tick(), Phase::Hold);
    let held = engine.snapshot();

    let mut phase = Phase::Hold;
    while phase == Phase::Hold {
        phase = engine.tick();
        assert_eq!(engine.snapshot(), held);
    }
    assert_eq!(phase, Phase::Done);
}

#[test]
fn skip_at_tick_three_shows_settled_image_and_completes_once() {
    let engine = SettlingEngine::start(80, 24, &single_glyph(), &scenario_config(), 3).unwrap();
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    let mut controller =
        AnimationController::new(engine).on_complete(move || counter.set(counter.get() + 1));

    for _ in 0..3 {
        controller.tick(); // mid-Chaos
    }
    controller.skip();

    let snap = controller.snapshot();
    assert_eq!(snap.cell(10, 10).unwrap().ch, 'B');
    for cell in snap.cells() {
        assert!(cell.ch == 'B' || cell.ch == ' ', "unsettled cell survived skip");
    }
    assert_eq!(fired.get(), 1);

    // A queued tick after the skip changes nothing.
    assert_eq!(controller.tick(), Phase::Done);
    assert_eq!(controller.snapshot(), snap);
    assert_eq!(fired.get(), 1);
}

#[test]
fn every_frame_is_fully_populated() {
    let config = scenario_config();
    let mut engine = SettlingEngine::start(32, 9, &single_glyph(), &config, 4).unwrap();
    let frames = super::helpers::run_to_done(&mut engine);
    assert_eq!(frames.len(), 35);
    for frame in &frames {
        assert_eq!(frame.cells().len(), 32 * 9);
        assert!(frame.cells().iter().all(|c| c.ch != '\0'));
    }
}
