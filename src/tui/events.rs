use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::timeline::VersionType;

/// Whether keystrokes drive navigation or go into the reply composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigate,
    Compose,
}

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Escape,
    MoveUp,
    MoveDown,
    ToggleFocus,
    Activate,
    ToggleFilterMenu,
    ChooseFilter(VersionType),
    ViewAllReplies,
    PromoteToPanel,
    ShowHistory,
    StartReply,
    CopyToClipboard,
    Input(char),
    DeleteChar,
    Submit,
    None,
}

/// Poll for a key press
pub fn poll_key(timeout: Duration) -> anyhow::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

pub fn key_to_action(key: KeyEvent, mode: InputMode) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::Esc, _) => return Action::Escape,
        _ => {}
    }

    match mode {
        InputMode::Navigate => navigate_action(key),
        InputMode::Compose => compose_action(key),
    }
}

fn navigate_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Tab, _) => Action::ToggleFocus,
        (KeyCode::Enter, _) => Action::Activate,

        // Timeline filter
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::ToggleFilterMenu,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ChooseFilter(VersionType::All),
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ChooseFilter(VersionType::Major),
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::ChooseFilter(VersionType::Minor),

        // Feed
        (KeyCode::Char('v'), KeyModifiers::NONE) => Action::ViewAllReplies,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::PromoteToPanel,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::StartReply,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::ShowHistory,

        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyToClipboard,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

        _ => Action::None,
    }
}

fn compose_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        _ => Action::None,
    }
}
