//! ETH multisig consensus state

use alloy_primitives::Address;

use crate::error::CodecError;

const ADDRESS_LEN: usize = 20;

/// Type URL of [`ConsensusState`] when packed into `google.protobuf.Any`.
pub const ETH_MULTISIG_CONSENSUS_STATE_TYPE_URL: &str =
    "/ibc.lightclients.ethmultisig.v1.ConsensusState";

/// Trusted signer set of the ETH multisig light client.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ConsensusState {
    /// Ordered 20-byte signer addresses
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub addresses: Vec<Vec<u8>>,
    /// Diversifier the signers sign with
    #[prost(string, tag = "2")]
    pub diversifier: String,
    /// Nanoseconds since the unix epoch
    #[prost(uint64, tag = "3")]
    pub timestamp: u64,
}

impl ConsensusState {
    /// Build a consensus state trusting `addresses`, in order.
    #[must_use]
    pub fn new(addresses: &[Address], diversifier: impl Into<String>, timestamp: u64) -> Self {
        Self {
            addresses: addresses.iter().map(|a| a.to_vec()).collect(),
            diversifier: diversifier.into(),
            timestamp,
        }
    }

    /// The trusted signer addresses, in order.
    ///
    /// # Errors
    /// Fails if any stored address is not 20 bytes long.
    pub fn signer_addresses(&self) -> Result<Vec<Address>, CodecError> {
        self.addresses
            .iter()
            .map(|raw| {
                if raw.len() == ADDRESS_LEN {
                    Ok(Address::from_slice(raw))
                } else {
                    Err(CodecError::InvalidAddressLength(raw.len()))
                }
            })
            .collect()
    }
}
