//! Simulated credential verification
//!
//! Stand-in for a remote authentication call: the only asynchronous
//! operation in the system and the only place latency is simulated.

use std::time::Duration;

use hearth_core::prelude::*;
use hearth_core::rand_range;

use crate::config::VerifierSettings;

/// The factory-default secret.
pub const DEFAULT_PIN: &str = "1234";

/// Check a completed PIN entry against the configured secret.
///
/// Sleeps a uniformly random duration inside the settings' latency window
/// before answering. Rejections carry the offending entry in
/// [`Error::InvalidPin`].
pub async fn verify(pin: &str, secret: &str, verifier: &VerifierSettings) -> Result<()> {
    let delay = Duration::from_millis(rand_range(
        verifier.min_latency_ms,
        verifier.max_latency_ms,
    ));
    trace!("credential check will answer in {}ms", delay.as_millis());
    tokio::time::sleep(delay).await;

    if pin == secret {
        Ok(())
    } else {
        Err(Error::invalid_pin(pin))
    }
}
