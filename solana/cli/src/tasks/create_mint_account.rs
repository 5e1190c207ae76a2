//! Create a fresh SPL mint with the operator as mint and freeze authority.

use oft_solana::EndpointId;
use serde::Serialize;
use solana_sdk::{
    program_pack::Pack, pubkey::Pubkey, signature::Keypair, signer::Signer, system_instruction,
};
use spl_token::state::Mint;

use crate::{
    client::ChainClient,
    confirm::{await_confirmation, ConfirmationPolicy},
    error::TaskError,
    report::{display, TaskReport, TaskState},
    tasks::sign_and_submit,
};

pub const TASK: &str = "create-mint-account";
pub const DEFAULT_DECIMALS: u8 = 6;

#[derive(Debug, Serialize)]
pub struct MintCreated {
    #[serde(serialize_with = "display")]
    pub mint: Pubkey,
    pub decimals: u8,
    #[serde(serialize_with = "display")]
    pub authority: Pubkey,
}

pub fn create_mint_account<C: ChainClient>(
    client: &C,
    payer: &Keypair,
    eid: EndpointId,
    decimals: u8,
    policy: &ConfirmationPolicy,
) -> TaskReport<MintCreated> {
    let mint = Keypair::new();
    create_mint_account_with(client, payer, &mint, eid, decimals, policy)
}

/// Same as [`create_mint_account`] with a caller-chosen mint keypair.
pub fn create_mint_account_with<C: ChainClient>(
    client: &C,
    payer: &Keypair,
    mint: &Keypair,
    eid: EndpointId,
    decimals: u8,
    policy: &ConfirmationPolicy,
) -> TaskReport<MintCreated> {
    let mut report = TaskReport::new(TASK);
    let created = MintCreated {
        mint: mint.pubkey(),
        decimals,
        authority: payer.pubkey(),
    };
    log::info!("Creating mint {} with {} decimals", created.mint, decimals);

    let instructions = match build(client, payer, mint, decimals) {
        Ok(ixs) => ixs,
        Err(e) => return report.fail(e),
    };
    let signature = match sign_and_submit(client, &instructions, &payer.pubkey(), &[payer, mint])
    {
        Ok(s) => s,
        Err(e) => return report.fail(e),
    };
    report.submitted(signature, eid);

    let report = report.with_output(created);
    let checked = await_confirmation(client, &signature, policy)
        .and_then(|()| assert_mint_initialized(client, &mint.pubkey()));
    match checked {
        Ok(()) => {
            log::info!("Mint account created: {}", mint.pubkey());
            report.finish(TaskState::Verified)
        }
        Err(e) => report.fail(e),
    }
}

fn build<C: ChainClient>(
    client: &C,
    payer: &Keypair,
    mint: &Keypair,
    decimals: u8,
) -> Result<Vec<solana_sdk::instruction::Instruction>, TaskError> {
    let lamports = client.get_minimum_balance_for_rent_exemption(Mint::LEN)?;

    let create = system_instruction::create_account(
        &payer.pubkey(),
        &mint.pubkey(),
        lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    );
    let initialize = spl_token::instruction::initialize_mint2(
        &spl_token::id(),
        &mint.pubkey(),
        &payer.pubkey(),
        Some(&payer.pubkey()),
        decimals,
    )
    .map_err(|e| TaskError::Validation(e.to_string()))?;

    Ok(vec![create, initialize])
}

fn assert_mint_initialized<C: ChainClient>(client: &C, mint: &Pubkey) -> Result<(), TaskError> {
    let account = client.get_account(mint)?.ok_or_else(|| {
        TaskError::VerificationMismatch(format!("mint account {mint} does not exist"))
    })?;

    if account.owner != spl_token::id() {
        return Err(TaskError::VerificationMismatch(format!(
            "mint account {mint} is owned by {}",
            account.owner
        )));
    }

    // `unpack` rejects uninitialized mints.
    Mint::unpack(&account.data)
        .map(|_| ())
        .map_err(|e| TaskError::VerificationMismatch(format!("mint account {mint}: {e}")))
}
