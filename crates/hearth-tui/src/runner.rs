//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Entry point; owns terminal setup/teardown
//! - `run_loop`: Main event loop processing terminal events and messages

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use hearth_app::handler::{update, UpdateAction};
use hearth_app::message::{Message, VerifyOutcome};
use hearth_app::state::AppState;
use hearth_app::{signals, verify, Settings};
use hearth_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::new(settings);
    info!("hearth starting; status={}", state.status.label());

    // Create unified message channel (signal handler, verification tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    // Restore terminal
    ratatui::restore();

    info!("hearth exiting");
    result
}

/// Holder for the single in-flight verification task.
///
/// The credential check is the one asynchronous operation in the system.
/// Keeping its handle here lets a cancel action actually abort a pending
/// verification instead of racing its verdict against the UI.
#[derive(Default)]
struct VerificationSlot {
    handle: Option<JoinHandle<()>>,
}

impl VerificationSlot {
    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    let tick = Duration::from_millis(state.settings.ui.tick_ms);
    let mut verification = VerificationSlot::default();

    while !state.should_quit() {
        // Process external messages (signal handler, verification verdicts)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &mut verification);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events; timeout yields Tick
        if let Some(message) = event::poll(tick)? {
            process_message(state, message, &msg_tx, &mut verification);
        }
    }

    verification.abort();
    Ok(())
}

/// Run a message through update(), chasing follow-up messages and
/// dispatching actions, the TEA driver.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    verification: &mut VerificationSlot,
) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, state, msg_tx, verification);
        }
        next = result.message;
    }
}

/// Perform side effects requested by update()
fn handle_action(
    action: UpdateAction,
    state: &AppState,
    msg_tx: &mpsc::Sender<Message>,
    verification: &mut VerificationSlot,
) {
    match action {
        UpdateAction::SpawnVerification { pin } => {
            // The state machine only dispatches one check per completed
            // entry, but a stale task must never outlive a new one.
            verification.abort();

            let secret = state.settings.session.pin.clone();
            let verifier = state.settings.verifier.clone();
            let tx = msg_tx.clone();

            verification.handle = Some(tokio::spawn(async move {
                let outcome = match verify::verify(&pin, &secret, &verifier).await {
                    Ok(()) => VerifyOutcome::Granted,
                    Err(e) => {
                        error!("{e}");
                        let rejected = e.rejected_pin().unwrap_or(&pin).to_string();
                        VerifyOutcome::Denied { pin: rejected }
                    }
                };
                if tx
                    .send(Message::VerifyFinished { outcome })
                    .await
                    .is_err()
                {
                    warn!("Verification verdict dropped; event loop gone");
                }
            }));
        }

        UpdateAction::AbortVerification => {
            verification.abort();
        }
    }
}
