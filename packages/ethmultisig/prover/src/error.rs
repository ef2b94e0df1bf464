//! Error types for the ETH multisig prover

use std::fmt;

use alloy_primitives::Address;
use ethmultisig_types::{CodecError, DataType, PathError, COMMITMENT_LEN};
use thiserror::Error;

/// Stage of a proof request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProofPhase {
    /// Reading the latest height and the state value from the chain
    Querying,
    /// Deriving the path and assembling the sign bytes
    Building,
    /// Producing the signatures
    Signing,
}

impl fmt::Display for ProofPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Querying => write!(f, "querying"),
            Self::Building => write!(f, "building"),
            Self::Signing => write!(f, "signing"),
        }
    }
}

/// Errors producing a multi signature.
#[derive(Error, Debug)]
pub enum MultisigError {
    /// A signer needs at least one key
    #[error("at least one key is needed")]
    EmptyKeySet,

    /// Packet digests are fixed size
    #[error("{data_type:?} must be {expected} bytes, got {actual}", expected = COMMITMENT_LEN)]
    InvalidCommitmentLength {
        /// Category of the digest
        data_type: DataType,
        /// Length that was passed in
        actual: usize,
    },

    /// The commitment path cannot be derived
    #[error(transparent)]
    Path(#[from] PathError),

    /// The state value cannot be serialized
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The system clock does not yield a valid timestamp
    #[error("system clock is out of range: {0}")]
    Clock(String),

    /// A key failed to sign; no proof is produced
    #[error("key {index} ({address}) failed to sign: {error:#}")]
    Signing {
        /// Position of the key in the key set
        index: usize,
        /// Address of the key
        address: Address,
        /// Underlying error
        error: anyhow::Error,
    },
}

impl MultisigError {
    /// The phase this error aborts.
    #[must_use]
    pub const fn phase(&self) -> ProofPhase {
        match self {
            Self::Signing { .. } => ProofPhase::Signing,
            _ => ProofPhase::Building,
        }
    }
}

/// Errors answering a proof request.
#[derive(Error, Debug)]
pub enum ProverError {
    /// The chain could not be queried
    #[error("chain query failed: {0:#}")]
    Query(anyhow::Error),

    /// The chain answered without the requested value
    #[error("query response carries no {0}")]
    MissingValue(&'static str),

    /// Building or signing the proof failed
    #[error(transparent)]
    Multisig(#[from] MultisigError),
}

impl ProverError {
    /// The phase the request failed in.
    #[must_use]
    pub const fn phase(&self) -> ProofPhase {
        match self {
            Self::Query(_) | Self::MissingValue(_) => ProofPhase::Querying,
            Self::Multisig(e) => e.phase(),
        }
    }
}

/// Errors loading a prover configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file cannot be read
    #[error("I/O error reading `{0}`: {1}")]
    Io(String, #[source] std::io::Error),

    /// The config file is not valid TOML
    #[error("invalid TOML in config: {0}")]
    Toml(#[from] toml::de::Error),

    /// No wallet is configured
    #[error("at least one wallet is needed")]
    NoWallets,

    /// A wallet key cannot be derived
    #[error("failed to derive key of wallet {index}: {error:#}")]
    Wallet {
        /// Position of the wallet in the config
        index: usize,
        /// Underlying error
        error: anyhow::Error,
    },

    /// Two wallets derive the same signing key
    #[error("wallet {index} derives address {address}, already used by wallet {first}")]
    DuplicateWallet {
        /// Position of the repeated wallet in the config
        index: usize,
        /// Position of the wallet first deriving `address`
        first: usize,
        /// The repeated signer address
        address: Address,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_report_their_phase() {
        assert_eq!(
            ProverError::Query(anyhow::anyhow!("connection refused")).phase(),
            ProofPhase::Querying
        );
        assert_eq!(
            ProverError::MissingValue("connection").phase(),
            ProofPhase::Querying
        );
        assert_eq!(
            ProverError::from(MultisigError::Path(PathError::EmptyPrefix)).phase(),
            ProofPhase::Building
        );
        assert_eq!(
            ProverError::from(MultisigError::Signing {
                index: 0,
                address: Address::ZERO,
                error: anyhow::anyhow!("hsm offline"),
            })
            .phase(),
            ProofPhase::Signing
        );
    }

    #[test]
    fn length_error_names_the_category() {
        let err = MultisigError::InvalidCommitmentLength {
            data_type: DataType::PacketCommitment,
            actual: 31,
        };
        assert_eq!(err.to_string(), "PacketCommitment must be 32 bytes, got 31");
    }
}
