//! One module per CLI task. Every task returns a [`TaskReport`]; none of them return errors.
//!
//! [`TaskReport`]: crate::report::TaskReport

use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Signature,
    signer::Signer,
    transaction::Transaction,
};

use crate::{client::ChainClient, error::TaskError};

pub mod create_mint_account;
pub mod get_peer;
pub mod mint_with_memo;
pub mod set_peer;

/// Sign `instructions` with a fresh blockhash and submit them once. No retries.
pub(crate) fn sign_and_submit<C: ChainClient>(
    client: &C,
    instructions: &[Instruction],
    payer: &Pubkey,
    signers: &[&dyn Signer],
) -> Result<Signature, TaskError> {
    let mut transaction = Transaction::new_with_payer(instructions, Some(payer));
    let recent_blockhash = client.get_latest_blockhash()?;
    transaction.try_sign(signers, recent_blockhash)?;

    log::debug!(
        "Submitting {} instruction(s) signed by {:?}",
        instructions.len(),
        signers.iter().map(|s| s.pubkey()).collect::<Vec<_>>()
    );
    client.send_transaction(&transaction)
}

/// Fetch an account that must exist.
pub(crate) fn require_account<C: ChainClient>(
    client: &C,
    key: &Pubkey,
    what: &str,
) -> Result<solana_sdk::account::Account, TaskError> {
    client
        .get_account(key)?
        .ok_or_else(|| TaskError::Validation(format!("{what} {key} does not exist")))
}
