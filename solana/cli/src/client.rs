//! The slice of the Solana JSON RPC the tasks use.
//!
//! Tasks are written against [`ChainClient`] rather than `RpcClient` so the workflows can be
//! driven by an in-memory cluster in tests.

use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{self, Transaction},
};

use crate::error::TaskError;

pub trait ChainClient {
    /// `Ok(None)` when the account does not exist.
    fn get_account(&self, key: &Pubkey) -> Result<Option<Account>, TaskError>;

    fn get_latest_blockhash(&self) -> Result<Hash, TaskError>;

    fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64, TaskError>;

    /// Submit without waiting for confirmation.
    fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, TaskError>;

    /// `Ok(None)` while the signature has not reached `commitment`.
    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, TaskError>;
}

impl ChainClient for RpcClient {
    fn get_account(&self, key: &Pubkey) -> Result<Option<Account>, TaskError> {
        Ok(self.get_account_with_commitment(key, self.commitment())?.value)
    }

    fn get_latest_blockhash(&self) -> Result<Hash, TaskError> {
        Ok(RpcClient::get_latest_blockhash(self)?)
    }

    fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64, TaskError> {
        Ok(RpcClient::get_minimum_balance_for_rent_exemption(
            self, data_len,
        )?)
    }

    fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, TaskError> {
        Ok(RpcClient::send_transaction(self, transaction)?)
    }

    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, TaskError> {
        Ok(self.get_signature_status_with_commitment(signature, commitment)?)
    }
}
