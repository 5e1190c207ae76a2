#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    time::Duration,
};

use borsh::BorshDeserialize;
use oft_solana::{
    instructions::{PeerConfigParam, SetPeerConfigParams},
    DataDiscriminator, EnforcedOptions, OftStore, OftType, PeerConfig,
};
use oft_tasks::{client::ChainClient, confirm::ConfirmationPolicy, error::TaskError};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    program_option::COption,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{self, Transaction, TransactionError},
};

pub type Accounts = HashMap<Pubkey, Account>;
pub type OnSend = Box<dyn Fn(&Transaction, &mut Accounts)>;

/// What `signature_status` answers for every submitted signature.
#[derive(Debug, Clone)]
pub enum Status {
    Confirmed,
    Pending,
    Failed(TransactionError),
}

/// In-memory stand-in for a cluster. Transactions are applied through `on_send` hooks, which
/// play the part of the programs they target.
pub struct MockChain {
    pub accounts: RefCell<Accounts>,
    pub sent: RefCell<Vec<Transaction>>,
    pub send_error: RefCell<Option<TaskError>>,
    pub status: RefCell<Status>,
    pub fail_reads: Cell<bool>,
    /// Start failing reads once a transaction has been accepted.
    pub fail_reads_after_send: Cell<bool>,
    on_send: Vec<OnSend>,
}

impl Default for MockChain {
    fn default() -> Self {
        Self {
            accounts: RefCell::new(HashMap::new()),
            sent: RefCell::new(Vec::new()),
            send_error: RefCell::new(None),
            status: RefCell::new(Status::Confirmed),
            fail_reads: Cell::new(false),
            fail_reads_after_send: Cell::new(false),
            on_send: Vec::new(),
        }
    }
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, key: Pubkey, account: Account) -> Self {
        self.accounts.borrow_mut().insert(key, account);
        self
    }

    pub fn on_send(mut self, hook: impl Fn(&Transaction, &mut Accounts) + 'static) -> Self {
        self.on_send.push(Box::new(hook));
        self
    }

    pub fn with_status(self, status: Status) -> Self {
        *self.status.borrow_mut() = status;
        self
    }

    pub fn rejecting_sends(self, error: TaskError) -> Self {
        *self.send_error.borrow_mut() = Some(error);
        self
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn last_sent(&self) -> Transaction {
        self.sent.borrow().last().cloned().expect("nothing was sent")
    }
}

impl ChainClient for MockChain {
    fn get_account(&self, key: &Pubkey) -> Result<Option<Account>, TaskError> {
        if self.fail_reads.get() {
            return Err(TaskError::Network("connection refused".into()));
        }
        Ok(self.accounts.borrow().get(key).cloned())
    }

    fn get_latest_blockhash(&self) -> Result<Hash, TaskError> {
        Ok(Hash::new_unique())
    }

    fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64, TaskError> {
        Ok((data_len as u64 + 128) * 6_960)
    }

    fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, TaskError> {
        if let Some(e) = self.send_error.borrow_mut().take() {
            return Err(e);
        }
        transaction
            .verify()
            .map_err(|e| TaskError::OnChainRejection(e.to_string()))?;

        self.sent.borrow_mut().push(transaction.clone());
        if matches!(*self.status.borrow(), Status::Confirmed) {
            let mut accounts = self.accounts.borrow_mut();
            for hook in &self.on_send {
                hook(transaction, &mut accounts);
            }
        }
        if self.fail_reads_after_send.get() {
            self.fail_reads.set(true);
        }
        Ok(transaction.signatures[0])
    }

    fn signature_status(
        &self,
        signature: &Signature,
        _commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, TaskError> {
        if !self.sent.borrow().iter().any(|t| t.signatures[0] == *signature) {
            return Ok(None);
        }
        Ok(match &*self.status.borrow() {
            Status::Confirmed => Some(Ok(())),
            Status::Pending => None,
            Status::Failed(e) => Some(Err(e.clone())),
        })
    }
}

pub fn fast_policy() -> ConfirmationPolicy {
    ConfirmationPolicy {
        commitment: CommitmentConfig::confirmed(),
        poll_interval: Duration::from_millis(1),
        timeout: Duration::from_millis(25),
        settle_delay: Duration::ZERO,
    }
}

/// Program ids of a transaction's instructions, in order.
pub fn program_ids(transaction: &Transaction) -> Vec<Pubkey> {
    transaction
        .message
        .instructions
        .iter()
        .map(|ix| *ix.program_id(&transaction.message.account_keys))
        .collect()
}

/// Anchor allocates accounts at their maximum size; the tail stays zeroed.
fn anchor_account<T: DataDiscriminator + borsh::BorshSerialize>(
    owner: Pubkey,
    value: &T,
    space: usize,
) -> Account {
    let mut data = T::DISCRIMINATOR.to_vec();
    borsh::to_writer(&mut data, value).unwrap();
    data.resize(data.len().max(space), 0);
    Account {
        lamports: 1_000_000,
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn peer_config(peer_address: [u8; 32]) -> PeerConfig {
    PeerConfig {
        peer_address,
        enforced_options: EnforcedOptions::default(),
        outbound_rate_limiter: None,
        inbound_rate_limiter: None,
        fee_bps: None,
        bump: 254,
    }
}

pub fn peer_config_account(program_id: Pubkey, peer_address: [u8; 32]) -> Account {
    anchor_account(program_id, &peer_config(peer_address), 256)
}

pub fn oft_store_account(program_id: Pubkey, admin: Pubkey) -> Account {
    let store = OftStore {
        oft_type: OftType::Native,
        ld2sd_rate: 1_000,
        token_mint: Pubkey::new_unique(),
        token_escrow: Pubkey::new_unique(),
        endpoint_program: Pubkey::new_unique(),
        bump: 255,
        tvl_ld: 0,
        admin,
        default_fee_bps: 0,
        paused: false,
    };
    anchor_account(program_id, &store, 256)
}

/// Plays the OFT program for `set_peer_config`: writes the peer address into the PeerConfig
/// account named by the instruction.
pub fn apply_set_peer_config(program_id: Pubkey) -> impl Fn(&Transaction, &mut Accounts) {
    move |transaction, accounts| {
        let keys = &transaction.message.account_keys;
        for ix in &transaction.message.instructions {
            if *ix.program_id(keys) != program_id {
                continue;
            }
            let params = SetPeerConfigParams::try_from_slice(&ix.data[8..]).unwrap();
            let peer = keys[ix.accounts[1] as usize];
            if let PeerConfigParam::PeerAddress(address) = params.config {
                accounts.insert(peer, peer_config_account(program_id, address));
            }
        }
    }
}

pub fn mint_account(authority: Option<Pubkey>, decimals: u8) -> Account {
    let mint = spl_token::state::Mint {
        mint_authority: authority.map(COption::Some).unwrap_or(COption::None),
        supply: 0,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(mint, &mut data).unwrap();
    Account {
        lamports: 1_461_600,
        data,
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}

pub fn token_account() -> Account {
    Account {
        lamports: 2_039_280,
        data: vec![0; spl_token::state::Account::LEN],
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}
