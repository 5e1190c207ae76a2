use oft_solana::{Account, EndpointId, PeerConfig, PeerConfigSeeds};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use crate::{
    client::ChainClient,
    report::{display, TaskReport, TaskState},
    tasks::set_peer::fetch_peer_config,
};

pub const TASK: &str = "get-peer";

#[derive(Debug, Serialize)]
pub struct PeerLookup {
    #[serde(serialize_with = "display")]
    pub peer_config_address: Pubkey,
    pub peer_eid: EndpointId,
    pub peer_config: PeerConfig,
}

pub fn get_peer<C: ChainClient>(
    client: &C,
    program_id: &Pubkey,
    oft_store: &Pubkey,
    peer_eid: EndpointId,
) -> TaskReport<PeerLookup> {
    let report = TaskReport::new(TASK);
    let (peer_config_address, _) = PeerConfig::key(program_id, PeerConfigSeeds {
        oft_store: *oft_store,
        remote_eid: peer_eid,
    });

    match fetch_peer_config(client, &peer_config_address) {
        Ok(peer_config) => report
            .with_output(PeerLookup {
                peer_config_address,
                peer_eid,
                peer_config,
            })
            .finish(TaskState::Verified),
        Err(e) => report.fail(e),
    }
}
