//! Canonical signed payload of a multisig commitment proof.
//!
//! The signed preimage is the protobuf encoding of [`SignBytes`], whose
//! `data` field carries the protobuf encoding of [`StateData`]. Field
//! numbers and the [`DataType`] discriminants are part of the wire format
//! shared with the on-chain verifier and must never change.

use ibc_proto::ibc::core::client::v1::Height;
use prost::Message;

/// Category of the state a proof commits to.
///
/// Baked into the signed payload so that a signature over one category
/// can never be replayed as a proof for another one. New categories get a
/// new discriminant; existing ones are never renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DataType {
    /// Default State
    UninitializedUnspecified = 0,
    /// Data type for client state verification
    ClientState = 1,
    /// Data type for consensus state verification
    ConsensusState = 2,
    /// Data type for connection state verification
    ConnectionState = 3,
    /// Data type for channel state verification
    ChannelState = 4,
    /// Data type for packet commitment verification
    PacketCommitment = 5,
    /// Data type for packet acknowledgement verification
    PacketAcknowledgement = 6,
}

/// A commitment path together with the value committed at it.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct StateData {
    /// Commitment path
    #[prost(bytes = "vec", tag = "1")]
    pub path: Vec<u8>,
    /// Committed value
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// The exact preimage that is hashed and signed by every key.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignBytes {
    /// Height the proof is produced for
    #[prost(message, optional, tag = "1")]
    pub height: Option<Height>,
    /// Nanoseconds since the unix epoch
    #[prost(uint64, tag = "2")]
    pub timestamp: u64,
    /// Domain separator between deployments sharing key material
    #[prost(string, tag = "3")]
    pub diversifier: String,
    /// Raw [`DataType`]
    #[prost(enumeration = "DataType", tag = "4")]
    pub data_type: i32,
    /// Encoded [`StateData`]
    #[prost(bytes = "vec", tag = "5")]
    pub data: Vec<u8>,
}

impl StateData {
    /// Wrap a path and value.
    #[must_use]
    pub fn new(path: Vec<u8>, value: Vec<u8>) -> Self {
        Self { path, value }
    }
}

impl SignBytes {
    /// Assemble the payload for `state_data`.
    #[must_use]
    pub fn new(
        height: Height,
        timestamp: u64,
        diversifier: impl Into<String>,
        data_type: DataType,
        state_data: &StateData,
    ) -> Self {
        Self {
            height: Some(height),
            timestamp,
            diversifier: diversifier.into(),
            data_type: data_type.into(),
            data: state_data.encode_to_vec(),
        }
    }
}

/// Build the encoded sign bytes for `state_data`.
#[must_use]
pub fn build_sign_bytes(
    height: &Height,
    timestamp: u64,
    diversifier: &str,
    data_type: DataType,
    state_data: &StateData,
) -> Vec<u8> {
    SignBytes::new(height.clone(), timestamp, diversifier, data_type, state_data).encode_to_vec()
}
