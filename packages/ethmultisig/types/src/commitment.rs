//! Commitment path derivation.
//!
//! A commitment key is `"/" + prefix + "/" + host_path`, with host paths
//! following ICS-24:
//!
//! | Category | host path |
//! |----------|-----------|
//! | client state | `clients/{client_id}/clientState` |
//! | consensus state | `clients/{client_id}/consensusStates/{revision_number}-{revision_height}` |
//! | connection | `connections/{connection_id}` |
//! | channel | `channelEnds/ports/{port_id}/channels/{channel_id}` |
//! | packet commitment | `commitments/ports/{port_id}/channels/{channel_id}/sequences/{sequence}` |
//! | packet acknowledgement | `acks/ports/{port_id}/channels/{channel_id}/sequences/{sequence}` |
//!
//! The on-chain verifier derives the very same bytes. Identifiers may not
//! be empty nor contain the `/` separator, so distinct identifier tuples
//! never map onto the same key.

use ibc_proto::ibc::core::client::v1::Height;

use crate::{error::PathError, sign_bytes::DataType};

const SEPARATOR: char = '/';

/// A state item and the identifiers that locate it.
///
/// Each variant carries exactly the identifiers of its category, so a
/// path can never be derived from a mismatched identifier set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitmentPath<'a> {
    /// Client state of `client_id`
    ClientState {
        /// Client identifier
        client_id: &'a str,
    },
    /// Consensus state of `client_id` at a height
    ConsensusState {
        /// Client identifier
        client_id: &'a str,
        /// Revision number of the consensus height
        revision_number: u64,
        /// Revision height of the consensus height
        revision_height: u64,
    },
    /// Connection end
    Connection {
        /// Connection identifier
        connection_id: &'a str,
    },
    /// Channel end
    Channel {
        /// Port identifier
        port_id: &'a str,
        /// Channel identifier
        channel_id: &'a str,
    },
    /// Packet commitment
    PacketCommitment {
        /// Port identifier
        port_id: &'a str,
        /// Channel identifier
        channel_id: &'a str,
        /// Packet sequence
        sequence: u64,
    },
    /// Packet acknowledgement commitment
    PacketAcknowledgement {
        /// Port identifier
        port_id: &'a str,
        /// Channel identifier
        channel_id: &'a str,
        /// Packet sequence
        sequence: u64,
    },
}

impl<'a> CommitmentPath<'a> {
    /// Path of the consensus state of `client_id` at `height`.
    #[must_use]
    pub const fn consensus_state(client_id: &'a str, height: &Height) -> Self {
        Self::ConsensusState {
            client_id,
            revision_number: height.revision_number,
            revision_height: height.revision_height,
        }
    }

    /// The data type signed together with this path.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::ClientState { .. } => DataType::ClientState,
            Self::ConsensusState { .. } => DataType::ConsensusState,
            Self::Connection { .. } => DataType::ConnectionState,
            Self::Channel { .. } => DataType::ChannelState,
            Self::PacketCommitment { .. } => DataType::PacketCommitment,
            Self::PacketAcknowledgement { .. } => DataType::PacketAcknowledgement,
        }
    }

    /// ICS-24 host path, without the store prefix.
    #[must_use]
    pub fn host_path(&self) -> String {
        match self {
            Self::ClientState { client_id } => format!("clients/{client_id}/clientState"),
            Self::ConsensusState {
                client_id,
                revision_number,
                revision_height,
            } => format!("clients/{client_id}/consensusStates/{revision_number}-{revision_height}"),
            Self::Connection { connection_id } => format!("connections/{connection_id}"),
            Self::Channel {
                port_id,
                channel_id,
            } => format!("channelEnds/ports/{port_id}/channels/{channel_id}"),
            Self::PacketCommitment {
                port_id,
                channel_id,
                sequence,
            } => format!("commitments/ports/{port_id}/channels/{channel_id}/sequences/{sequence}"),
            Self::PacketAcknowledgement {
                port_id,
                channel_id,
                sequence,
            } => format!("acks/ports/{port_id}/channels/{channel_id}/sequences/{sequence}"),
        }
    }

    /// Derive the commitment key under `prefix`.
    ///
    /// # Errors
    /// Returns an error if the prefix is empty or an identifier is empty or
    /// contains `/`.
    pub fn commitment_key(&self, prefix: &[u8]) -> Result<Vec<u8>, PathError> {
        if prefix.is_empty() {
            return Err(PathError::EmptyPrefix);
        }
        self.identifiers()
            .into_iter()
            .try_for_each(validate_identifier)?;

        let host_path = self.host_path();
        let mut key = Vec::with_capacity(prefix.len() + host_path.len() + 2);
        key.push(b'/');
        key.extend_from_slice(prefix);
        key.push(b'/');
        key.extend_from_slice(host_path.as_bytes());
        Ok(key)
    }

    fn identifiers(&self) -> Vec<&'a str> {
        match *self {
            Self::ClientState { client_id } | Self::ConsensusState { client_id, .. } => {
                vec![client_id]
            }
            Self::Connection { connection_id } => vec![connection_id],
            Self::Channel {
                port_id,
                channel_id,
            }
            | Self::PacketCommitment {
                port_id,
                channel_id,
                ..
            }
            | Self::PacketAcknowledgement {
                port_id,
                channel_id,
                ..
            } => vec![port_id, channel_id],
        }
    }
}

fn validate_identifier(identifier: &str) -> Result<(), PathError> {
    if identifier.is_empty() {
        return Err(PathError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: "identifier can't be empty",
        });
    }
    if identifier.contains(SEPARATOR) {
        return Err(PathError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: "identifier can't contain a path separator",
        });
    }
    Ok(())
}
