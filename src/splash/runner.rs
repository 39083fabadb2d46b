//! The wall-clock loop around the animation.
//!
//! One thread, one timer: `event::poll` waits out the remainder of the
//! current tick period, so input stays responsive while ticks never
//! overlap. Every tick is followed by exactly one paint. A key press skips
//! the animation; SIGTERM/SIGHUP end the run as if skipped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::SplashConfig;
use crate::engine::phase::Phase;
use crate::engine::settle::SettlingEngine;
use crate::render::frame;
use crate::render::paint::{PromptLine, SplashWidget};

use super::art::{self, ArtLayout};
use super::controller::AnimationController;
use super::input::{map_event, InputAction};
use super::terminal;

/// Hold-phase hint under the art.
const PROMPT_TEXT: &str = "Press any key to continue...";

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashOutcome {
    /// Ran its full course: chaos, settle, hold, done.
    Completed,
    /// Dismissed early by the user (or a termination signal).
    Skipped,
}

/// Run the splash to completion on the current terminal.
pub fn run(config: &SplashConfig, seed: u64) -> Result<SplashOutcome> {
    // Fail on a bad config before touching the terminal state.
    config.validate()?;

    let shutdown = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&shutdown))
        .context("failed to register SIGTERM handler")?;
    signal_hook::flag::register(signal_hook::consts::SIGHUP, Arc::clone(&shutdown))
        .context("failed to register SIGHUP handler")?;

    let (width, height) = crossterm::terminal::size().context("failed to query terminal size")?;
    let layout = art::layout(art::TITLE, width, height, config.art_color);
    let engine = SettlingEngine::start(width, height, &layout.glyphs, config, seed)?;
    let mut controller =
        AnimationController::new(engine).on_complete(|| debug!("splash dismissed"));

    info!(width, height, seed, "starting splash");
    let (mut term, guard) = terminal::setup().context("failed to prepare the terminal")?;

    let tick_period = Duration::from_millis(config.tick_period_ms);
    let mut view = (width, height);
    let mut next_tick = Instant::now() + tick_period;
    let mut skipped = false;

    // Paint the seeded noise before the first tick fires.
    draw(&mut term, &controller, view, config, &layout)?;

    let outcome = loop {
        if shutdown.load(Ordering::Relaxed) && !controller.is_complete() {
            debug!("termination signal received");
            controller.skip();
            skipped = true;
        }

        if controller.is_complete() {
            draw(&mut term, &controller, view, config, &layout)?;
            break if skipped {
                SplashOutcome::Skipped
            } else {
                SplashOutcome::Completed
            };
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match map_event(&event::read()?) {
                InputAction::Skip => {
                    controller.skip();
                    skipped = true;
                    continue;
                }
                InputAction::Resized(cols, rows) => {
                    view = (cols, rows);
                    draw(&mut term, &controller, view, config, &layout)?;
                }
                InputAction::Ignored => {}
            }
        }

        if Instant::now() >= next_tick {
            controller.tick();
            next_tick += tick_period;
            draw(&mut term, &controller, view, config, &layout)?;
        }
    };

    drop(guard);
    info!(?outcome, "splash finished");
    Ok(outcome)
}

fn draw<B: Backend>(
    term: &mut Terminal<B>,
    controller: &AnimationController,
    view: (u16, u16),
    config: &SplashConfig,
    layout: &ArtLayout,
) -> Result<()> {
    let snapshot = controller.snapshot();
    let buffer = frame::render(&snapshot, view.0, view.1);
    let prompt = (controller.phase() == Phase::Hold)
        .then_some(())
        .and(layout.prompt_row)
        .map(|row| PromptLine {
            text: PROMPT_TEXT,
            row,
            color: config.prompt_color,
        });

    term.draw(|f| {
        let widget = SplashWidget::new(&buffer, config.background).prompt(prompt);
        f.render_widget(widget, f.area());
    })?;
    Ok(())
}
