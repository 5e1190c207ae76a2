//! Operator tasks for the Solana side of a LayerZero OFT deployment.
//!
//! Each task in [`tasks`] builds its instructions, signs and submits them once, waits for
//! confirmation and, where there is something to read back, verifies the on-chain result. The
//! outcome is always a [`report::TaskReport`].

pub mod cli;
pub mod client;
pub mod config;
pub mod confirm;
pub mod error;
pub mod report;
pub mod tasks;
