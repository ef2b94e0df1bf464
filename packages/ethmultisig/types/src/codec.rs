//! Canonical serialization of the state objects that get attested.
//!
//! Client and consensus states are polymorphic on the source chain. Rather
//! than resolving them through an open type registry, the set of state
//! objects this prover can attest to is closed: [`ClientStateObject`] and
//! [`ConsensusStateObject`] enumerate them, each variant with its own type
//! URL and encoder.

use ibc_proto::{
    google::protobuf::Any,
    ibc::{
        core::{channel::v1::Channel, connection::v1::ConnectionEnd},
        lightclients::tendermint::v1::{
            ClientState as TendermintClientState, ConsensusState as TendermintConsensusState,
        },
    },
};
use prost::Message;

use crate::{
    client_state::{ClientState, ETH_MULTISIG_CLIENT_STATE_TYPE_URL},
    consensus_state::{ConsensusState, ETH_MULTISIG_CONSENSUS_STATE_TYPE_URL},
    error::CodecError,
};

/// Type URL of the tendermint client state.
pub const TENDERMINT_CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.tendermint.v1.ClientState";
/// Type URL of the tendermint consensus state.
pub const TENDERMINT_CONSENSUS_STATE_TYPE_URL: &str =
    "/ibc.lightclients.tendermint.v1.ConsensusState";

/// Client states that can be attested.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientStateObject {
    /// ETH multisig client state
    EthMultisig(ClientState),
    /// Tendermint client state
    Tendermint(TendermintClientState),
}

/// Consensus states that can be attested.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsensusStateObject {
    /// ETH multisig consensus state
    EthMultisig(ConsensusState),
    /// Tendermint consensus state
    Tendermint(TendermintConsensusState),
}

impl ClientStateObject {
    /// Type URL of the wrapped state.
    #[must_use]
    pub const fn type_url(&self) -> &'static str {
        match self {
            Self::EthMultisig(_) => ETH_MULTISIG_CLIENT_STATE_TYPE_URL,
            Self::Tendermint(_) => TENDERMINT_CLIENT_STATE_TYPE_URL,
        }
    }

    /// Pack into `google.protobuf.Any`.
    #[must_use]
    pub fn to_any(&self) -> Any {
        let value = match self {
            Self::EthMultisig(cs) => cs.encode_to_vec(),
            Self::Tendermint(cs) => cs.encode_to_vec(),
        };
        Any {
            type_url: self.type_url().to_string(),
            value,
        }
    }
}

impl TryFrom<&Any> for ClientStateObject {
    type Error = CodecError;

    fn try_from(any: &Any) -> Result<Self, Self::Error> {
        match any.type_url.as_str() {
            ETH_MULTISIG_CLIENT_STATE_TYPE_URL => Ok(Self::EthMultisig(ClientState::decode(
                any.value.as_slice(),
            )?)),
            TENDERMINT_CLIENT_STATE_TYPE_URL => Ok(Self::Tendermint(
                TendermintClientState::decode(any.value.as_slice())?,
            )),
            other => Err(CodecError::UnknownTypeUrl(other.to_string())),
        }
    }
}

impl From<ClientState> for ClientStateObject {
    fn from(cs: ClientState) -> Self {
        Self::EthMultisig(cs)
    }
}

impl From<TendermintClientState> for ClientStateObject {
    fn from(cs: TendermintClientState) -> Self {
        Self::Tendermint(cs)
    }
}

impl ConsensusStateObject {
    /// Type URL of the wrapped state.
    #[must_use]
    pub const fn type_url(&self) -> &'static str {
        match self {
            Self::EthMultisig(_) => ETH_MULTISIG_CONSENSUS_STATE_TYPE_URL,
            Self::Tendermint(_) => TENDERMINT_CONSENSUS_STATE_TYPE_URL,
        }
    }

    /// Pack into `google.protobuf.Any`.
    #[must_use]
    pub fn to_any(&self) -> Any {
        let value = match self {
            Self::EthMultisig(cs) => cs.encode_to_vec(),
            Self::Tendermint(cs) => cs.encode_to_vec(),
        };
        Any {
            type_url: self.type_url().to_string(),
            value,
        }
    }
}

impl TryFrom<&Any> for ConsensusStateObject {
    type Error = CodecError;

    fn try_from(any: &Any) -> Result<Self, Self::Error> {
        match any.type_url.as_str() {
            ETH_MULTISIG_CONSENSUS_STATE_TYPE_URL => Ok(Self::EthMultisig(
                ConsensusState::decode(any.value.as_slice())?,
            )),
            TENDERMINT_CONSENSUS_STATE_TYPE_URL => Ok(Self::Tendermint(
                TendermintConsensusState::decode(any.value.as_slice())?,
            )),
            other => Err(CodecError::UnknownTypeUrl(other.to_string())),
        }
    }
}

impl From<ConsensusState> for ConsensusStateObject {
    fn from(cs: ConsensusState) -> Self {
        Self::EthMultisig(cs)
    }
}

impl From<TendermintConsensusState> for ConsensusStateObject {
    fn from(cs: TendermintConsensusState) -> Self {
        Self::Tendermint(cs)
    }
}

/// Deterministic serialization of state objects into committed values.
///
/// Client and consensus states are committed in their `Any` encoding,
/// connections and channels in their plain protobuf encoding.
pub trait Codec: Send + Sync {
    /// Encode a client state.
    ///
    /// # Errors
    /// Fails if the state cannot be serialized.
    fn marshal_client_state(&self, client_state: &ClientStateObject)
        -> Result<Vec<u8>, CodecError>;

    /// Encode a consensus state.
    ///
    /// # Errors
    /// Fails if the state cannot be serialized.
    fn marshal_consensus_state(
        &self,
        consensus_state: &ConsensusStateObject,
    ) -> Result<Vec<u8>, CodecError>;

    /// Encode a connection end.
    ///
    /// # Errors
    /// Fails if the connection cannot be serialized.
    fn marshal_connection(&self, connection: &ConnectionEnd) -> Result<Vec<u8>, CodecError>;

    /// Encode a channel end.
    ///
    /// # Errors
    /// Fails if the channel cannot be serialized.
    fn marshal_channel(&self, channel: &Channel) -> Result<Vec<u8>, CodecError>;
}

/// Protobuf codec matching the cosmos-sdk `ProtoCodec`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProtoCodec;

impl Codec for ProtoCodec {
    fn marshal_client_state(
        &self,
        client_state: &ClientStateObject,
    ) -> Result<Vec<u8>, CodecError> {
        Ok(client_state.to_any().encode_to_vec())
    }

    fn marshal_consensus_state(
        &self,
        consensus_state: &ConsensusStateObject,
    ) -> Result<Vec<u8>, CodecError> {
        Ok(consensus_state.to_any().encode_to_vec())
    }

    fn marshal_connection(&self, connection: &ConnectionEnd) -> Result<Vec<u8>, CodecError> {
        Ok(connection.encode_to_vec())
    }

    fn marshal_channel(&self, channel: &Channel) -> Result<Vec<u8>, CodecError> {
        Ok(channel.encode_to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Height;

    fn multisig_client_state() -> ClientStateObject {
        ClientState::new(Height {
            revision_number: 0,
            revision_height: 1,
        })
        .into()
    }

    #[test]
    fn client_state_any_roundtrips() {
        let cs = multisig_client_state();
        let any = cs.to_any();
        assert_eq!(any.type_url, ETH_MULTISIG_CLIENT_STATE_TYPE_URL);
        assert_eq!(ClientStateObject::try_from(&any).unwrap(), cs);
    }

    #[test]
    fn tendermint_client_state_is_known() {
        let cs: ClientStateObject = TendermintClientState {
            chain_id: "cosmoshub-4".to_string(),
            ..Default::default()
        }
        .into();
        let any = cs.to_any();
        assert_eq!(any.type_url, TENDERMINT_CLIENT_STATE_TYPE_URL);
        assert_eq!(ClientStateObject::try_from(&any).unwrap(), cs);
    }

    #[test]
    fn consensus_state_any_roundtrips() {
        let cs: ConsensusStateObject = ConsensusState {
            addresses: vec![vec![0x11; 20]],
            diversifier: "tester".to_string(),
            timestamp: 1,
        }
        .into();
        let any = cs.to_any();
        assert_eq!(any.type_url, ETH_MULTISIG_CONSENSUS_STATE_TYPE_URL);
        assert_eq!(ConsensusStateObject::try_from(&any).unwrap(), cs);
    }

    #[test]
    fn unknown_type_url_is_rejected() {
        let any = Any {
            type_url: "/ibc.lightclients.solomachine.v2.ClientState".to_string(),
            value: Vec::new(),
        };
        assert!(matches!(
            ClientStateObject::try_from(&any),
            Err(CodecError::UnknownTypeUrl(url)) if url.contains("solomachine")
        ));
        assert!(matches!(
            ConsensusStateObject::try_from(&any),
            Err(CodecError::UnknownTypeUrl(_))
        ));
    }

    #[test]
    fn malformed_value_is_rejected() {
        let any = Any {
            type_url: ETH_MULTISIG_CLIENT_STATE_TYPE_URL.to_string(),
            value: vec![0x0a, 0x05, 0x00],
        };
        assert!(matches!(
            ClientStateObject::try_from(&any),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn proto_codec_commits_client_state_as_any() {
        let cs = multisig_client_state();
        let bz = ProtoCodec.marshal_client_state(&cs).unwrap();
        assert_eq!(Any::decode(bz.as_slice()).unwrap(), cs.to_any());
    }

    #[test]
    fn proto_codec_commits_connection_concretely() {
        let connection = ConnectionEnd {
            client_id: "testcounterparty-0".to_string(),
            delay_period: 5,
            ..Default::default()
        };
        let bz = ProtoCodec.marshal_connection(&connection).unwrap();
        assert_eq!(ConnectionEnd::decode(bz.as_slice()).unwrap(), connection);
    }
}
