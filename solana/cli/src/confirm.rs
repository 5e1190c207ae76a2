//! Waiting for a submitted transaction to land.

use std::{
    thread::sleep,
    time::{Duration, Instant},
};

use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};

use crate::{client::ChainClient, error::TaskError};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy)]
pub struct ConfirmationPolicy {
    pub commitment: CommitmentConfig,
    pub poll_interval: Duration,
    pub timeout: Duration,
    /// Fixed pause after submission, before the first poll.
    pub settle_delay: Duration,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            commitment: CommitmentConfig::confirmed(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_CONFIRM_TIMEOUT,
            settle_delay: Duration::ZERO,
        }
    }
}

/// Poll the signature status until it reaches the policy's commitment, fails, or the timeout
/// elapses. RPC errors while polling count as "not yet"; only the deadline ends the wait.
pub fn await_confirmation<C: ChainClient>(
    client: &C,
    signature: &Signature,
    policy: &ConfirmationPolicy,
) -> Result<(), TaskError> {
    if !policy.settle_delay.is_zero() {
        log::debug!("Waiting {:?} before polling {}", policy.settle_delay, signature);
        sleep(policy.settle_delay);
    }

    // A timeout too large to represent as an Instant means no deadline.
    let deadline = Instant::now().checked_add(policy.timeout);
    loop {
        match client.signature_status(signature, policy.commitment) {
            Ok(Some(Ok(()))) => {
                log::debug!("{} reached {:?}", signature, policy.commitment.commitment);
                return Ok(());
            }
            Ok(Some(Err(e))) => return Err(e.into()),
            Ok(None) => log::trace!("{} not yet {:?}", signature, policy.commitment.commitment),
            Err(e) => log::warn!("Status poll for {} failed: {}", signature, e),
        }

        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(TaskError::ConfirmationTimeout(policy.timeout));
                }
                policy.poll_interval.min(deadline - now)
            }
            None => policy.poll_interval,
        };
        sleep(pause);
    }
}
