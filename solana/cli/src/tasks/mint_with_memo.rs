//! Mint tokens to a wallet's associated token account with a memo attached.

use oft_solana::{parse_decimal_to_units, EndpointId};
use serde::Serialize;
use solana_sdk::{
    instruction::Instruction, program_option::COption, pubkey::Pubkey, signature::Keypair,
    signer::Signer,
};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};
use spl_token_2022::{extension::StateWithExtensions, state::Mint};

use crate::{
    client::ChainClient,
    confirm::{await_confirmation, ConfirmationPolicy},
    error::TaskError,
    report::{display, TaskReport, TaskState},
    tasks::{require_account, sign_and_submit},
};

pub const TASK: &str = "mint-with-memo";

#[derive(Debug, Clone)]
pub struct MintWithMemoArgs {
    pub mint: Pubkey,
    /// The wallet; tokens go to its associated token account.
    pub to: Pubkey,
    pub amount: String,
    pub memo: String,
    pub eid: EndpointId,
    pub token_program: Pubkey,
    /// Prepend an idempotent ATA creation instead of failing on a missing destination.
    pub create_ata: bool,
}

#[derive(Debug, Serialize)]
pub struct MintedWithMemo {
    #[serde(serialize_with = "display")]
    pub mint: Pubkey,
    #[serde(serialize_with = "display")]
    pub destination: Pubkey,
    pub amount: u64,
    pub decimals: u8,
    pub memo: String,
    pub created_destination: bool,
}

pub fn mint_with_memo<C: ChainClient>(
    client: &C,
    authority: &Keypair,
    args: &MintWithMemoArgs,
    policy: &ConfirmationPolicy,
) -> TaskReport<MintedWithMemo> {
    let mut report = TaskReport::new(TASK);

    let (instructions, minted) = match build(client, authority, args) {
        Ok(built) => built,
        Err(e) => return report.fail(e),
    };
    let signature = match sign_and_submit(client, &instructions, &authority.pubkey(), &[authority])
    {
        Ok(s) => s,
        Err(e) => return report.with_output(minted).fail(e),
    };
    report.submitted(signature, args.eid);
    log::info!("Transaction sent: {}", signature);

    let report = report.with_output(minted);
    match await_confirmation(client, &signature, policy) {
        Ok(()) => report.finish(TaskState::Confirmed),
        Err(e) => report.fail(e),
    }
}

fn build<C: ChainClient>(
    client: &C,
    authority: &Keypair,
    args: &MintWithMemoArgs,
) -> Result<(Vec<Instruction>, MintedWithMemo), TaskError> {
    let mint_account = require_account(client, &args.mint, "mint")?;
    if mint_account.owner != args.token_program {
        return Err(TaskError::Validation(format!(
            "mint {} is owned by {}, not token program {}",
            args.mint, mint_account.owner, args.token_program
        )));
    }
    let mint = StateWithExtensions::<Mint>::unpack(&mint_account.data)
        .map_err(|e| TaskError::Validation(format!("mint {}: {e}", args.mint)))?
        .base;

    let amount = parse_decimal_to_units(&args.amount, mint.decimals)?;
    let mint_authority = match mint.mint_authority {
        COption::Some(a) => a,
        COption::None => {
            return Err(TaskError::Validation(format!(
                "mint {} has a fixed supply",
                args.mint
            )))
        }
    };
    if mint_authority != authority.pubkey() {
        return Err(TaskError::Validation(format!(
            "signer {} is not the mint authority {}",
            authority.pubkey(),
            mint_authority
        )));
    }

    let destination =
        get_associated_token_address_with_program_id(&args.to, &args.mint, &args.token_program);
    let mut instructions = Vec::with_capacity(3);
    let created_destination = match client.get_account(&destination)? {
        Some(_) => false,
        None if args.create_ata => {
            log::info!("Creating destination token account {}", destination);
            instructions.push(create_associated_token_account_idempotent(
                &authority.pubkey(),
                &args.to,
                &args.mint,
                &args.token_program,
            ));
            true
        }
        None => {
            return Err(TaskError::Validation(format!(
                "destination token account {destination} does not exist; pass --create-ata to \
                 create it"
            )))
        }
    };

    instructions.push(
        spl_token_2022::instruction::mint_to(
            &args.token_program,
            &args.mint,
            &destination,
            &mint_authority,
            &[],
            amount,
        )
        .map_err(|e| TaskError::Validation(e.to_string()))?,
    );
    instructions.push(spl_memo::build_memo(args.memo.as_bytes(), &[]));

    log::debug!(
        "Minting {} base units of {} to {}",
        amount,
        args.mint,
        destination
    );
    let minted = MintedWithMemo {
        mint: args.mint,
        destination,
        amount,
        decimals: mint.decimals,
        memo: args.memo.clone(),
        created_destination,
    };
    Ok((instructions, minted))
}
