//! Full-frame rendering tests for the three screens

use hearth_app::state::{AppState, SessionStatus};
use hearth_app::Settings;

use super::view;
use crate::test_utils::TestTerminal;

fn state_with_status(status: SessionStatus) -> AppState {
    let mut state = AppState::new(Settings::default());
    state.status = status;
    state
}

#[test]
fn test_lock_screen_shows_clock_and_hint() {
    let mut term = TestTerminal::new();
    let state = state_with_status(SessionStatus::LoggedOut);

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Press"));
    assert!(term.buffer_contains("Enter"));
    assert!(term.buffer_contains("sign in"));
    // The clock renders H:MM:SS, so at least one colon appears
    assert!(term.buffer_contains(":"));
    assert!(term.buffer_contains("\u{b0}F"));
}

#[test]
fn test_pin_screen_shows_entry_label_and_hint() {
    let mut term = TestTerminal::new();
    let state = state_with_status(SessionStatus::LoggingIn);

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Enter PIN"));
    assert!(term.buffer_contains("(1234)"));
    assert!(term.buffer_contains("Cancel"));
    assert!(!term.buffer_contains("Invalid"));
}

#[test]
fn test_pin_screen_hint_hidden_when_disabled() {
    let mut term = TestTerminal::new();
    let mut state = state_with_status(SessionStatus::LoggingIn);
    state.settings.session.show_pin_hint = false;

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Enter PIN"));
    assert!(!term.buffer_contains("(1234)"));
}

#[test]
fn test_pin_screen_shows_invalid_after_rejection() {
    let mut term = TestTerminal::new();
    let mut state = state_with_status(SessionStatus::LoggingIn);
    state.last_rejected = Some("9999".to_string());

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Invalid"));
}

#[test]
fn test_verifying_screen_shows_spinner() {
    let mut term = TestTerminal::new();
    let state = state_with_status(SessionStatus::VerifyingLogIn);

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Verifying"));
}

#[test]
fn test_menu_shows_all_section_titles() {
    let mut term = TestTerminal::new();
    let state = state_with_status(SessionStatus::LoggedIn);

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("How's it look out there?"));
    assert!(term.buffer_contains("Get it delivered!"));
    assert!(term.buffer_contains("What's Appening?"));
    assert!(term.buffer_contains("Popcorn time!"));
}

#[test]
fn test_menu_shows_content_and_hints() {
    let mut term = TestTerminal::new();
    let state = state_with_status(SessionStatus::LoggedIn);

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Mon"));
    assert!(term.buffer_contains("Burgers"));
    assert!(term.buffer_contains("Cloudly"));
    assert!(term.buffer_contains("Sign out"));
    assert!(term.buffer_contains("Quit"));
    assert!(term.buffer_contains("10AM"));
}

#[test]
fn test_menu_survives_short_terminal() {
    let mut term = TestTerminal::with_size(80, 10);
    let state = state_with_status(SessionStatus::LoggedIn);

    // Must not panic; trailing sections are dropped
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("How's it look out there?"));
}

#[test]
fn test_log_in_error_screen_matches_entry_screen() {
    let mut term = TestTerminal::new();
    let mut state = state_with_status(SessionStatus::LogInError);
    state.last_rejected = Some("0000".to_string());

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Enter PIN"));
    assert!(term.buffer_contains("Invalid"));
}
