//! Error types for the ETH multisig wire types

use thiserror::Error;

/// Errors deriving a commitment path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The store prefix is empty
    #[error("commitment prefix can't be empty")]
    EmptyPrefix,

    /// An identifier would make the path ambiguous
    #[error("invalid identifier {identifier:?}: {reason}")]
    InvalidIdentifier {
        /// Offending identifier
        identifier: String,
        /// Reason for error
        reason: &'static str,
    },
}

/// Errors encoding or decoding state objects.
#[derive(Debug, Error)]
pub enum CodecError {
    /// `Any` carries a type this client does not know
    #[error("unknown state object type url: {0}")]
    UnknownTypeUrl(String),

    /// Protobuf decoding failed
    #[error("failed to decode protobuf: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A signer address is not 20 bytes
    #[error("address must be 20 bytes, got {0}")]
    InvalidAddressLength(usize),
}
