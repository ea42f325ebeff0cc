//! Terminal setup and teardown
//!
//! Initializes and restores the terminal state around the expense form,
//! including a panic hook that restores the terminal on crash.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::error::{EerisError, EerisResult};
use crate::models::ExpenseDraft;

use super::event::{Event, EventHandler};
use super::form::{self, ExpenseFormApp};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
fn init_terminal() -> EerisResult<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
fn restore_terminal() -> EerisResult<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the expense entry form to completion
///
/// Returns the finished draft when the user submits, `None` when they
/// cancel. The form performs no network access; submission is the caller's
/// concern.
pub fn run_expense_form(draft: ExpenseDraft) -> EerisResult<Option<ExpenseDraft>> {
    let mut terminal = init_terminal()?;
    let mut app = ExpenseFormApp::from_draft(draft);
    let events = EventHandler::default();

    let result = loop {
        if let Err(e) = terminal.draw(|frame| form::render(&app, frame)) {
            break Err(EerisError::from(e));
        }

        match events.next() {
            Ok(Event::Key(key_event)) => app.handle_key(key_event),
            Ok(Event::Resize(_, _)) | Ok(Event::Tick) => {}
            Err(e) => break Err(EerisError::Tui(format!("event channel closed: {}", e))),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    restore_terminal()?;
    result?;

    Ok(app.into_draft())
}
