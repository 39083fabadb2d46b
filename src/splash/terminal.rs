//! Terminal setup and teardown for the full-screen splash.
//!
//! Raw mode, alternate screen, hidden cursor, and a guard that restores
//! all three on drop or panic, so a crash mid-animation never leaves the
//! user's shell in a broken state.

use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Restores the terminal once, on drop or panic, whichever comes first.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn restore(flag: &AtomicBool) {
        if flag.swap(true, Ordering::SeqCst) {
            return;
        }
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Self::restore(&self.restored);
    }
}

/// Enter raw mode on the alternate screen and hand back a ratatui terminal
/// plus the guard that undoes it all.
pub fn setup() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let restored = Arc::new(AtomicBool::new(false));
    let hook_flag = Arc::clone(&restored);
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        TerminalGuard::restore(&hook_flag);
        default_hook(info);
    }));

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, TerminalGuard { restored }))
}
