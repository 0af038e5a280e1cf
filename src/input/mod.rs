//! Input adapter: maps terminal key events to game actions.
//!
//! Mapping depends on the session phase so the same key can mean different
//! things (Enter starts a game or restarts a finished one). Quit and the
//! music toggle are host-level concerns and bypass the session entirely.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, Phase};

/// Map a key to a session action for the given phase.
pub fn action_for(phase: Phase, code: KeyCode) -> Option<GameAction> {
    match phase {
        Phase::NotStarted => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
            _ => None,
        },
        Phase::GameOver => match code {
            KeyCode::Enter | KeyCode::Char('r') => Some(GameAction::Restart),
            _ => None,
        },
        Phase::Running => match code {
            KeyCode::Left => Some(GameAction::MoveLeft),
            KeyCode::Right => Some(GameAction::MoveRight),
            KeyCode::Down => Some(GameAction::SoftDrop),
            KeyCode::Up => Some(GameAction::RotateCw),
            KeyCode::Char(' ') | KeyCode::Char('p') => Some(GameAction::TogglePause),
            KeyCode::Char('r') => Some(GameAction::Restart),
            _ => None,
        },
        Phase::Paused => match code {
            KeyCode::Char(' ') | KeyCode::Char('p') => Some(GameAction::TogglePause),
            KeyCode::Char('r') => Some(GameAction::Restart),
            _ => None,
        },
    }
}

/// Keys that end the program from any phase.
pub fn should_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Mute toggle, handled by the host rather than the session.
pub fn is_music_toggle(code: KeyCode) -> bool {
    code == KeyCode::Char('m')
}
