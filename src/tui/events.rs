use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PageUp/PageDown
const PAGE_SCROLL_ROWS: u16 = 10;

/// User actions from terminal events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Convert,
    Swap,
    Clear,
    CopyToClipboard,
    ToggleFocus,
    ScrollUp(u16),
    ScrollDown(u16),
    InsertChar(char),
    Newline,
    Paste(String),
    DeleteChar,
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_to_action(key),
            Event::Paste(text) => Action::Paste(text),
            _ => Action::None,
        });
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Actions
        (KeyCode::Enter, KeyModifiers::ALT) => Action::Newline,
        (KeyCode::Enter, _) => Action::Convert,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Swap,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::Clear,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyToClipboard,
        (KeyCode::Tab, _) => Action::ToggleFocus,

        // Output scrolling
        (KeyCode::Up, _) => Action::ScrollUp(1),
        (KeyCode::Down, _) => Action::ScrollDown(1),
        (KeyCode::PageUp, _) => Action::ScrollUp(PAGE_SCROLL_ROWS),
        (KeyCode::PageDown, _) => Action::ScrollDown(PAGE_SCROLL_ROWS),

        // Text input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
