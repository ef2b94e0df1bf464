#![doc = "Wire types, commitment paths and sign bytes of the ETH multisig light client"]
#![warn(missing_docs)]

pub mod client_state;
pub mod codec;
pub mod commitment;
pub mod consensus_state;
pub mod error;
pub mod multi_signature;
pub mod sign_bytes;

pub use ibc_proto::ibc::core::client::v1::Height;

pub use client_state::ClientState;
pub use codec::{ClientStateObject, Codec, ConsensusStateObject, ProtoCodec};
pub use commitment::CommitmentPath;
pub use consensus_state::ConsensusState;
pub use error::{CodecError, PathError};
pub use multi_signature::MultiSignature;
pub use sign_bytes::{build_sign_bytes, DataType, SignBytes, StateData};

/// Length of a packet commitment or acknowledgement commitment digest.
pub const COMMITMENT_LEN: usize = 32;
