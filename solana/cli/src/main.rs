use std::process::exit;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use oft_tasks::{
    cli::{Action, Cli},
    report::TaskState,
    tasks::{
        create_mint_account::create_mint_account,
        get_peer::get_peer,
        mint_with_memo::{mint_with_memo, MintWithMemoArgs},
        set_peer::{set_peer, SetPeerArgs},
    },
};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(state) if state.is_success() => {}
        Ok(_) => exit(1),
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<TaskState> {
    let conn = cli.connection_opts();

    let state = match &cli.action {
        Action::CreateMintAccount {
            eid,
            decimals,
            confirm,
        } => {
            let client = conn.rpc_client(*eid)?;
            let payer = conn.signer()?;
            let policy = cli.confirmation_policy(confirm);
            let report = create_mint_account(&client, &payer, *eid, *decimals, &policy);
            report.print(cli.json);
            report.state
        }
        Action::MintWithMemo {
            mint,
            to,
            amount,
            data,
            eid,
            token_program,
            create_ata,
            confirm,
        } => {
            let client = conn.rpc_client(*eid)?;
            let authority = conn.signer()?;
            let policy = cli.confirmation_policy(confirm);
            let args = MintWithMemoArgs {
                mint: *mint,
                to: *to,
                amount: amount.clone(),
                memo: data.clone(),
                eid: *eid,
                token_program: *token_program,
                create_ata: *create_ata,
            };
            let report = mint_with_memo(&client, &authority, &args, &policy);
            report.print(cli.json);
            report.state
        }
        Action::SetPeer {
            program_id,
            eid,
            peer_eid,
            oft_store,
            peer_address,
            skip_if_set,
            confirm,
        } => {
            let client = conn.rpc_client(*eid)?;
            let admin = conn.signer()?;
            let policy = cli.confirmation_policy(confirm);
            let args = SetPeerArgs {
                program_id: *program_id,
                oft_store: *oft_store,
                eid: *eid,
                peer_eid: *peer_eid,
                peer_address: peer_address.clone(),
                skip_if_set: *skip_if_set,
            };
            let report = set_peer(&client, &admin, &args, &policy);
            report.print(cli.json);
            report.state
        }
        Action::GetPeer {
            program_id,
            eid,
            peer_eid,
            oft_store,
        } => {
            let client = conn.rpc_client(*eid)?;
            let report = get_peer(&client, program_id, oft_store, *peer_eid);
            report.print(cli.json);
            report.state
        }
    };

    Ok(state)
}

fn init_logging(cli: &Cli) {
    use LevelFilter::*;
    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => Error,
        (false, 0) => Info,
        (false, 1) => Debug,
        (false, _other) => Trace,
    };

    env_logger::builder().filter_level(filter).init();
}
