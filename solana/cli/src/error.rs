use std::time::Duration;

use oft_solana::OftError;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_request::{RpcError, RpcResponseErrorData},
};
use solana_sdk::{signer::SignerError, transaction::TransactionError};
use thiserror::Error;

/// Everything a task can fail with. Tasks never return these to their caller; they land in the
/// `error` field of a [`crate::report::TaskReport`].
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("rpc request failed: {0}")]
    Network(String),
    #[error("transaction rejected: {0}")]
    OnChainRejection(String),
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("transaction not confirmed within {0:?}")]
    ConfirmationTimeout(Duration),
    #[error("verification failed: {0}")]
    VerificationMismatch(String),
}

impl From<OftError> for TaskError {
    fn from(e: OftError) -> Self {
        TaskError::Validation(e.to_string())
    }
}

impl From<SignerError> for TaskError {
    fn from(e: SignerError) -> Self {
        TaskError::Signing(e.to_string())
    }
}

impl From<TransactionError> for TaskError {
    fn from(e: TransactionError) -> Self {
        TaskError::OnChainRejection(e.to_string())
    }
}

/// Preflight and execution failures are rejections by the cluster; everything else is transport.
impl From<ClientError> for TaskError {
    fn from(e: ClientError) -> Self {
        let rejected = match e.kind() {
            ClientErrorKind::TransactionError(_) | ClientErrorKind::SigningError(_) => true,
            ClientErrorKind::RpcError(RpcError::RpcResponseError { data, .. }) => matches!(
                data,
                RpcResponseErrorData::SendTransactionPreflightFailure(_)
            ),
            _ => false,
        };

        if rejected {
            TaskError::OnChainRejection(e.to_string())
        } else {
            TaskError::Network(e.to_string())
        }
    }
}
