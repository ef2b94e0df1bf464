//! The proof handed to the destination chain

use prost::Message;

use crate::error::CodecError;

/// One signature per trusted key, in key order, over the Keccak-256 hash
/// of the sign bytes. `timestamp` equals the timestamp inside the sign
/// bytes the signatures were produced for.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct MultiSignature {
    /// 65-byte `r || s || v` signatures
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub signatures: Vec<Vec<u8>>,
    /// Nanoseconds since the unix epoch
    #[prost(uint64, tag = "2")]
    pub timestamp: u64,
}

impl MultiSignature {
    /// Canonical proof bytes.
    #[must_use]
    pub fn to_proof_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// Decode proof bytes.
    ///
    /// # Errors
    /// Fails if `proof` is not a valid encoding.
    pub fn from_proof_bytes(proof: &[u8]) -> Result<Self, CodecError> {
        Ok(Self::decode(proof)?)
    }
}
