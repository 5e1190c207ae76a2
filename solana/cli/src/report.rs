//! What a task hands back to the operator.

use std::{
    fmt::{self, Debug, Display},
    io::{self, Write},
};

use oft_supported_endpoints::EndpointId;
use serde::{Serialize, Serializer};
use solana_sdk::signature::Signature;

use crate::error::TaskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Building,
    Submitted,
    /// Submitted and confirmed; the task has no further check.
    Confirmed,
    /// Confirmed and the resulting account read back as expected.
    Verified,
    /// Nothing submitted because the chain already holds the requested state.
    Unchanged,
    /// Failed before or during submission.
    Failed,
    /// Submitted, but confirmation or the read-back did not succeed.
    VerificationFailed,
}

impl TaskState {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            TaskState::Confirmed | TaskState::Verified | TaskState::Unchanged
        )
    }
}

#[derive(Debug, Serialize)]
pub struct TaskReport<T> {
    pub task: &'static str,
    pub state: TaskState,
    #[serde(serialize_with = "display_opt")]
    pub signature: Option<Signature>,
    pub explorer_url: Option<String>,
    pub output: Option<T>,
    #[serde(serialize_with = "display_opt")]
    pub error: Option<TaskError>,
}

impl<T> TaskReport<T> {
    pub fn new(task: &'static str) -> Self {
        Self {
            task,
            state: TaskState::Building,
            signature: None,
            explorer_url: None,
            output: None,
            error: None,
        }
    }

    pub fn submitted(&mut self, signature: Signature, eid: EndpointId) {
        self.state = TaskState::Submitted;
        self.explorer_url = Some(explorer_tx_link(&signature, eid));
        self.signature = Some(signature);
    }

    pub fn finish(mut self, state: TaskState) -> Self {
        self.state = state;
        self
    }

    /// Record `error` and pick the failure state from how far the task got.
    pub fn fail(mut self, error: TaskError) -> Self {
        log::debug!("{} failed: {}", self.task, error);
        self.state = if self.signature.is_some() {
            TaskState::VerificationFailed
        } else {
            TaskState::Failed
        };
        self.error = Some(error);
        self
    }

    pub fn with_output(mut self, output: T) -> Self {
        self.output = Some(output);
        self
    }
}

impl<T: Debug + Serialize> TaskReport<T> {
    /// Results go to stdout, the failure line to stderr. `fail` only logs at debug level, so
    /// this is the one place an operator sees the error.
    pub fn print(&self, json: bool) {
        let stdout = io::stdout();
        let stderr = io::stderr();
        if let Err(e) = self.write_to(json, &mut stdout.lock(), &mut stderr.lock()) {
            log::warn!("Unable to print report: {}", e);
        }
    }

    pub fn write_to(
        &self,
        json: bool,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        if json {
            serde_json::to_writer_pretty(&mut *out, self)?;
            return writeln!(out);
        }

        if let Some(signature) = &self.signature {
            writeln!(out, "Transaction: {}", signature)?;
        }
        if let Some(url) = &self.explorer_url {
            writeln!(out, "Explorer: {}", url)?;
        }
        if let Some(output) = &self.output {
            writeln!(out, "{:#?}", output)?;
        }
        match &self.error {
            Some(e) => writeln!(err, "{} failed: {}", self.task, e),
            None => writeln!(out, "{}: {:?}", self.task, self.state),
        }
    }
}

pub fn explorer_tx_link(signature: &Signature, eid: EndpointId) -> String {
    let cluster = if eid.is_testnet() {
        "devnet"
    } else {
        "mainnet-beta"
    };
    format!("https://explorer.solana.com/tx/{signature}?cluster={cluster}")
}

pub fn display<T: Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

pub fn display_opt<T: Display, S: Serializer>(value: &Option<T>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => s.collect_str(v),
        None => s.serialize_none(),
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
