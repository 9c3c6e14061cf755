//! Key event handlers for each session status

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, SessionStatus};

/// Convert key events to messages based on the current session status
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.status {
        SessionStatus::LoggedOut => handle_key_locked(key),
        SessionStatus::LoggingIn | SessionStatus::LogInError => handle_key_pin_entry(key),
        SessionStatus::VerifyingLogIn => handle_key_verifying(key),
        SessionStatus::LoggedIn => handle_key_menu(key),
    }
}

/// Lock screen: any engagement starts PIN entry
fn handle_key_locked(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::BeginLogin),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// PIN entry: digits, backspace, cancel
fn handle_key_pin_entry(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) if c.is_ascii_digit() => Some(Message::PinDigit(c)),
        InputKey::Backspace | InputKey::Delete => Some(Message::PinBackspace),
        InputKey::Esc => Some(Message::CancelLogin),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Verification in flight: only cancel and quit are live
fn handle_key_verifying(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelLogin),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Unlocked menu: section navigation, row scrolling, sign-out
fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Tab => Some(Message::MenuNextSection),
        InputKey::Up | InputKey::BackTab => Some(Message::MenuPrevSection),
        InputKey::Left => Some(Message::MenuScrollLeft),
        InputKey::Right => Some(Message::MenuScrollRight),

        // Quick-nav pills map to sections 1-4
        InputKey::Char(c @ '1'..='4') => {
            Some(Message::MenuSelectSection(c as usize - '1' as usize))
        }

        InputKey::Char('s') | InputKey::Esc => Some(Message::SignOut),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
