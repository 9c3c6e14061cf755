//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use crate::message::{Message, VerifyOutcome};
use crate::state::{AppState, SessionStatus};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.clock.refresh();
            if state.status == SessionStatus::VerifyingLogIn {
                state.tick_spinner();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session Messages
        // ─────────────────────────────────────────────────────────
        Message::BeginLogin => {
            state.begin_login();
            UpdateResult::none()
        }

        Message::CancelLogin => {
            let was_verifying = state.status == SessionStatus::VerifyingLogIn;
            state.cancel_login();
            if was_verifying {
                debug!("Cancel during verification; aborting in-flight check");
                UpdateResult::action(UpdateAction::AbortVerification)
            } else {
                UpdateResult::none()
            }
        }

        Message::SignOut => {
            state.sign_out();
            UpdateResult::none()
        }

        Message::PinDigit(digit) => {
            if !state.status.accepts_pin_input() {
                return UpdateResult::none();
            }
            state.last_rejected = None;
            if state.pin.push(digit) && state.pin.is_complete() {
                // Exactly one verification per completed 4-digit entry: the
                // status flip below makes further digits inert until the
                // verdict lands.
                state.status = SessionStatus::VerifyingLogIn;
                debug!("PIN entry complete; dispatching verification");
                return UpdateResult::action(UpdateAction::SpawnVerification {
                    pin: state.pin.as_string(),
                });
            }
            UpdateResult::none()
        }

        Message::PinBackspace => {
            if state.status.accepts_pin_input() {
                state.pin.pop();
            }
            UpdateResult::none()
        }

        Message::VerifyFinished { outcome } => {
            if state.status != SessionStatus::VerifyingLogIn {
                warn!(
                    "Verification verdict arrived in {:?}; ignoring",
                    state.status
                );
                return UpdateResult::none();
            }
            match outcome {
                VerifyOutcome::Granted => {
                    info!("Sign-in verified");
                    state.status = SessionStatus::LoggedIn;
                    state.pin.clear();
                    state.last_rejected = None;
                    UpdateResult::none()
                }
                VerifyOutcome::Denied { pin } => {
                    warn!("Credential check rejected entry");
                    state.status = SessionStatus::LogInError;
                    state.pin.clear();
                    state.last_rejected = Some(pin);
                    // Re-arm immediately so the user can retype
                    UpdateResult::message(Message::RearmPinEntry)
                }
            }
        }

        Message::RearmPinEntry => {
            if state.status == SessionStatus::LogInError {
                state.status = SessionStatus::LoggingIn;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Menu Navigation
        // ─────────────────────────────────────────────────────────
        Message::MenuNextSection => {
            if state.status == SessionStatus::LoggedIn {
                state.menu.next_section();
            }
            UpdateResult::none()
        }

        Message::MenuPrevSection => {
            if state.status == SessionStatus::LoggedIn {
                state.menu.prev_section();
            }
            UpdateResult::none()
        }

        Message::MenuSelectSection(index) => {
            if state.status == SessionStatus::LoggedIn {
                if let Some(section) = crate::state::MenuSection::ALL.get(index) {
                    state.menu.select(*section);
                }
            }
            UpdateResult::none()
        }

        Message::MenuScrollLeft => {
            if state.status == SessionStatus::LoggedIn {
                state.menu.scroll_left();
            }
            UpdateResult::none()
        }

        Message::MenuScrollRight => {
            if state.status == SessionStatus::LoggedIn {
                let count = section_item_count(state);
                state.menu.scroll_right(count);
            }
            UpdateResult::none()
        }
    }
}

/// Number of cards in the focused section's row.
fn section_item_count(state: &AppState) -> usize {
    use crate::state::MenuSection;
    match state.menu.section {
        MenuSection::Forecast => state.catalog.forecast.len(),
        MenuSection::Restaurants => state.catalog.restaurants.len(),
        MenuSection::Tools => state.catalog.tools.len(),
        MenuSection::Movies => state.catalog.movies.len(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
