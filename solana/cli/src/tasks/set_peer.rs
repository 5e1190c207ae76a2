//! Register a remote peer on an OFT store and confirm the registration took effect.

use oft_solana::{
    instructions, Account, EndpointId, OftStore, PeerAddress, PeerConfig, PeerConfigSeeds,
};
use serde::Serialize;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::{
    client::ChainClient,
    confirm::{await_confirmation, ConfirmationPolicy},
    error::TaskError,
    report::{display, TaskReport, TaskState},
    tasks::sign_and_submit,
};

pub const TASK: &str = "set-peer";

#[derive(Debug, Clone)]
pub struct SetPeerArgs {
    pub program_id: Pubkey,
    pub oft_store: Pubkey,
    /// The local Solana endpoint.
    pub eid: EndpointId,
    pub peer_eid: EndpointId,
    /// Chain-native form; padded before use.
    pub peer_address: String,
    /// Read the current peer first and skip submission when it already matches.
    pub skip_if_set: bool,
}

#[derive(Debug, Serialize)]
pub struct PeerRegistration {
    #[serde(serialize_with = "display")]
    pub peer_config_address: Pubkey,
    pub peer_eid: EndpointId,
    pub peer_address: PeerAddress,
    /// The record read back from chain, when the read succeeded.
    pub peer_config: Option<PeerConfig>,
}

pub fn set_peer<C: ChainClient>(
    client: &C,
    admin: &Keypair,
    args: &SetPeerArgs,
    policy: &ConfirmationPolicy,
) -> TaskReport<PeerRegistration> {
    log::debug!("{} args: {:?}", TASK, args);
    let mut report = TaskReport::new(TASK);

    let peer_address: PeerAddress = match args.peer_address.parse() {
        Ok(a) => a,
        Err(e) => return report.fail(TaskError::from(e)),
    };
    let (peer_config_address, _) = PeerConfig::key(&args.program_id, PeerConfigSeeds {
        oft_store: args.oft_store,
        remote_eid: args.peer_eid,
    });
    let mut registration = PeerRegistration {
        peer_config_address,
        peer_eid: args.peer_eid,
        peer_address,
        peer_config: None,
    };
    log::info!(
        "Setting peer {} for {} at {}",
        peer_address,
        args.peer_eid,
        peer_config_address
    );

    if args.skip_if_set {
        match fetch_peer_config(client, &peer_config_address) {
            Ok(current) if current.peer_address == peer_address.0 => {
                log::info!("Peer already set; nothing to submit");
                registration.peer_config = Some(current);
                return report
                    .with_output(registration)
                    .finish(TaskState::Unchanged);
            }
            Ok(current) => log::info!("Replacing peer {}", current.peer()),
            Err(e) => log::debug!("No readable peer yet: {}", e),
        }
    }

    warn_if_not_admin(client, &args.oft_store, &admin.pubkey());

    let ix = instructions::set_peer_config(
        args.program_id,
        admin.pubkey(),
        args.oft_store,
        args.peer_eid,
        peer_address.into(),
    );
    let signature = match sign_and_submit(client, &[ix], &admin.pubkey(), &[admin]) {
        Ok(s) => s,
        Err(e) => return report.with_output(registration).fail(e),
    };
    report.submitted(signature, args.eid);
    log::info!("Transaction submitted with ID: {}", signature);

    if let Err(e) = await_confirmation(client, &signature, policy) {
        return report.with_output(registration).fail(e);
    }

    match fetch_peer_config(client, &peer_config_address) {
        Ok(config) => {
            let stored = config.peer();
            registration.peer_config = Some(config);
            let report = report.with_output(registration);
            if stored == peer_address {
                report.finish(TaskState::Verified)
            } else {
                report.fail(TaskError::VerificationMismatch(format!(
                    "stored peer {stored} does not match {peer_address}"
                )))
            }
        }
        Err(e) => report.with_output(registration).fail(e),
    }
}

/// Read and decode the PeerConfig at `key`. A missing or undecodable account is a mismatch, not a
/// network failure: the transaction confirmed but the record is not there.
pub(crate) fn fetch_peer_config<C: ChainClient>(
    client: &C,
    key: &Pubkey,
) -> Result<PeerConfig, TaskError> {
    let account = client
        .get_account(key)?
        .ok_or_else(|| TaskError::VerificationMismatch(format!("no PeerConfig at {key}")))?;
    PeerConfig::from_account_data(&account.data)
        .map_err(|e| TaskError::VerificationMismatch(format!("account {key}: {e}")))
}

// The program enforces `has_one = admin`; this only makes the likely failure obvious early.
fn warn_if_not_admin<C: ChainClient>(client: &C, oft_store: &Pubkey, signer: &Pubkey) {
    let store = match client.get_account(oft_store) {
        Ok(Some(account)) => OftStore::from_account_data(&account.data),
        Ok(None) => {
            log::warn!("OFT store {} does not exist", oft_store);
            return;
        }
        Err(e) => {
            log::debug!("Could not read OFT store {}: {}", oft_store, e);
            return;
        }
    };

    match store {
        Ok(store) if store.admin != *signer => log::warn!(
            "Signer {} is not the admin ({}) of OFT store {}",
            signer,
            store.admin,
            oft_store
        ),
        Ok(_) => {}
        Err(e) => log::warn!("Account {} is not an OFT store: {}", oft_store, e),
    }
}
