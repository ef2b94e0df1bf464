//! Error types for the ETH multisig light client

use alloy_primitives::Address;
use ethmultisig_types::{CodecError, PathError};
use thiserror::Error;

/// Reasons a multisig proof is rejected.
///
/// Every variant means "proof invalid"; they only differ in which check
/// caught it.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// No trusted signers were supplied
    #[error("expected signer set is empty")]
    EmptySignerSet,

    /// The proof does not carry exactly one signature per trusted signer
    #[error("expected {expected} signatures, got {actual}")]
    SignatureCountMismatch {
        /// Number of trusted signers
        expected: usize,
        /// Number of signatures in the proof
        actual: usize,
    },

    /// Sign bytes are not a valid encoding
    #[error("malformed sign bytes: {0}")]
    MalformedSignBytes(#[source] prost::DecodeError),

    /// Proof bytes are not a valid multi signature
    #[error("malformed proof: {0}")]
    MalformedProof(#[source] CodecError),

    /// The proof was produced for a different payload timestamp
    #[error("timestamp mismatch: sign bytes {sign_bytes}, proof {proof}")]
    TimestampMismatch {
        /// Timestamp inside the sign bytes
        sign_bytes: u64,
        /// Timestamp of the multi signature
        proof: u64,
    },

    /// No address can be recovered from a signature
    #[error("invalid signature at index {index}: {reason}")]
    InvalidSignature {
        /// Signature slot
        index: usize,
        /// Reason for error
        reason: String,
    },

    /// The same signer was recovered from two slots
    #[error("duplicate signer {address} at index {index}")]
    DuplicateSigner {
        /// Signature slot
        index: usize,
        /// Recovered address
        address: Address,
    },

    /// A slot was signed by someone other than the trusted signer at that position
    #[error("address mismatch at index {index}: expected {expected}, recovered {recovered}")]
    AddressMismatch {
        /// Signature slot
        index: usize,
        /// Trusted signer at this position
        expected: Address,
        /// Address recovered from the signature
        recovered: Address,
    },

    /// The commitment path cannot be derived
    #[error(transparent)]
    Path(#[from] PathError),

    /// The trusted consensus state is malformed
    #[error(transparent)]
    Codec(#[from] CodecError),
}
