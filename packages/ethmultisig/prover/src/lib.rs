#![doc = "ETH multisig prover: signs IBC state with every key of a fixed key set"]
#![deny(clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod prover;
pub mod signer;

pub use config::{ContractConfig, ProverConfig, WalletConfig};
pub use error::{ConfigError, MultisigError, ProofPhase, ProverError};
pub use prover::{ChainQuerier, PathEnd, Prover};
pub use signer::{current_timestamp, EthMultisig, KeySet, SignedState};
