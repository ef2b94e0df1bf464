//! N-of-N multisig signer for IBC state.
//!
//! Every key of the [`KeySet`] signs the Keccak-256 hash of the sign bytes,
//! in key order. Either every key signs or the call fails; a proof with
//! fewer signatures than keys is never handed out.

use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::{keccak256, Address};
use ethereum_keys::AttestorKey;
use ethmultisig_types::{
    build_sign_bytes, ClientStateObject, Codec, CommitmentPath, ConsensusStateObject, DataType,
    Height, MultiSignature, StateData, COMMITMENT_LEN,
};
use ibc_proto::ibc::core::{channel::v1::Channel, connection::v1::ConnectionEnd};

use crate::error::MultisigError;

/// Ordered, non-empty set of signing keys.
#[derive(Clone, Debug)]
pub struct KeySet<K> {
    keys: Vec<K>,
}

impl<K: AttestorKey> KeySet<K> {
    /// Build a key set, keeping the order of `keys`.
    ///
    /// # Errors
    /// Fails if `keys` is empty.
    pub fn new(keys: Vec<K>) -> Result<Self, MultisigError> {
        if keys.is_empty() {
            return Err(MultisigError::EmptyKeySet);
        }
        Ok(Self { keys })
    }

    /// Addresses of the keys, in key order.
    #[must_use]
    pub fn addresses(&self) -> Vec<Address> {
        self.keys.iter().map(AttestorKey::address).collect()
    }

    /// The keys, in order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

/// A multi signature together with the exact payload it signs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedState {
    /// One signature per key
    pub proof: MultiSignature,
    /// Encoded sign bytes, for out of band verification
    pub sign_bytes: Vec<u8>,
}

impl SignedState {
    /// Canonical proof bytes of the multi signature.
    #[must_use]
    pub fn proof_bytes(&self) -> Vec<u8> {
        self.proof.to_proof_bytes()
    }
}

/// Current time in nanoseconds since the unix epoch.
///
/// # Errors
/// Fails if the clock is set before the epoch or beyond what fits a `u64`.
pub fn current_timestamp() -> Result<u64, MultisigError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| MultisigError::Clock(e.to_string()))?;
    u64::try_from(elapsed.as_nanos()).map_err(|e| MultisigError::Clock(e.to_string()))
}

/// Signs IBC state on behalf of the ETH multisig light client.
///
/// Immutable once built, so a single instance can serve concurrent
/// requests.
#[derive(Clone, Debug)]
pub struct EthMultisig<C, K> {
    codec: C,
    diversifier: String,
    keys: KeySet<K>,
    prefix: Vec<u8>,
}

impl<C: Codec, K: AttestorKey> EthMultisig<C, K> {
    /// Create a signer from all of its collaborators.
    #[must_use]
    pub fn new(
        codec: C,
        diversifier: impl Into<String>,
        keys: KeySet<K>,
        prefix: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            codec,
            diversifier: diversifier.into(),
            keys,
            prefix: prefix.into(),
        }
    }

    /// Addresses of the keys, in signing order.
    #[must_use]
    pub fn addresses(&self) -> Vec<Address> {
        self.keys.addresses()
    }

    /// Diversifier all payloads are signed with.
    #[must_use]
    pub fn diversifier(&self) -> &str {
        &self.diversifier
    }

    /// Store prefix of every commitment path.
    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Sign the client state of `client_id`.
    ///
    /// # Errors
    /// Fails if the path cannot be derived, the state cannot be encoded, or
    /// a key fails to sign.
    pub fn sign_client_state(
        &self,
        height: &Height,
        client_id: &str,
        client_state: &ClientStateObject,
    ) -> Result<SignedState, MultisigError> {
        let value = self.codec.marshal_client_state(client_state)?;
        self.sign_path(height, CommitmentPath::ClientState { client_id }, value)
    }

    /// Sign the consensus state of `client_id` at `consensus_height`.
    ///
    /// # Errors
    /// Fails if the path cannot be derived, the state cannot be encoded, or
    /// a key fails to sign.
    pub fn sign_consensus_state(
        &self,
        height: &Height,
        client_id: &str,
        consensus_height: &Height,
        consensus_state: &ConsensusStateObject,
    ) -> Result<SignedState, MultisigError> {
        let value = self.codec.marshal_consensus_state(consensus_state)?;
        self.sign_path(
            height,
            CommitmentPath::consensus_state(client_id, consensus_height),
            value,
        )
    }

    /// Sign a connection end.
    ///
    /// # Errors
    /// Fails if the path cannot be derived, the connection cannot be
    /// encoded, or a key fails to sign.
    pub fn sign_connection_state(
        &self,
        height: &Height,
        connection_id: &str,
        connection: &ConnectionEnd,
    ) -> Result<SignedState, MultisigError> {
        let value = self.codec.marshal_connection(connection)?;
        self.sign_path(height, CommitmentPath::Connection { connection_id }, value)
    }

    /// Sign a channel end.
    ///
    /// # Errors
    /// Fails if the path cannot be derived, the channel cannot be encoded,
    /// or a key fails to sign.
    pub fn sign_channel_state(
        &self,
        height: &Height,
        port_id: &str,
        channel_id: &str,
        channel: &Channel,
    ) -> Result<SignedState, MultisigError> {
        let value = self.codec.marshal_channel(channel)?;
        self.sign_path(
            height,
            CommitmentPath::Channel {
                port_id,
                channel_id,
            },
            value,
        )
    }

    /// Sign a packet commitment.
    ///
    /// # Errors
    /// Fails if `packet_commitment` is not 32 bytes, the path cannot be
    /// derived, or a key fails to sign.
    pub fn sign_packet_state(
        &self,
        height: &Height,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
        packet_commitment: &[u8],
    ) -> Result<SignedState, MultisigError> {
        check_commitment_len(DataType::PacketCommitment, packet_commitment)?;
        self.sign_path(
            height,
            CommitmentPath::PacketCommitment {
                port_id,
                channel_id,
                sequence,
            },
            packet_commitment.to_vec(),
        )
    }

    /// Sign a packet acknowledgement commitment.
    ///
    /// # Errors
    /// Fails if `acknowledgement_commitment` is not 32 bytes, the path
    /// cannot be derived, or a key fails to sign.
    pub fn sign_packet_acknowledgement_state(
        &self,
        height: &Height,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
        acknowledgement_commitment: &[u8],
    ) -> Result<SignedState, MultisigError> {
        check_commitment_len(
            DataType::PacketAcknowledgement,
            acknowledgement_commitment,
        )?;
        self.sign_path(
            height,
            CommitmentPath::PacketAcknowledgement {
                port_id,
                channel_id,
                sequence,
            },
            acknowledgement_commitment.to_vec(),
        )
    }

    /// Sign `value` at `path` as a state of `data_type`.
    ///
    /// The timestamp is read once and used for both the sign bytes and the
    /// multi signature.
    ///
    /// # Errors
    /// Fails if the clock is unusable or a key fails to sign.
    pub fn sign_state(
        &self,
        height: &Height,
        data_type: DataType,
        path: Vec<u8>,
        value: Vec<u8>,
    ) -> Result<SignedState, MultisigError> {
        let timestamp = current_timestamp()?;
        self.sign_state_at(height, timestamp, data_type, path, value)
    }

    fn sign_path(
        &self,
        height: &Height,
        path: CommitmentPath<'_>,
        value: Vec<u8>,
    ) -> Result<SignedState, MultisigError> {
        let key = path.commitment_key(&self.prefix)?;
        self.sign_state(height, path.data_type(), key, value)
    }

    #[tracing::instrument(skip_all, fields(data_type = ?data_type, timestamp = timestamp))]
    pub(crate) fn sign_state_at(
        &self,
        height: &Height,
        timestamp: u64,
        data_type: DataType,
        path: Vec<u8>,
        value: Vec<u8>,
    ) -> Result<SignedState, MultisigError> {
        let state_data = StateData::new(path, value);
        let sign_bytes =
            build_sign_bytes(height, timestamp, &self.diversifier, data_type, &state_data);
        let prehash = keccak256(&sign_bytes);

        let signatures = self
            .keys
            .keys()
            .iter()
            .enumerate()
            .map(|(index, key)| {
                key.sign_prehash(&prehash)
                    .map(|sig| sig.as_bytes().to_vec())
                    .map_err(|error| MultisigError::Signing {
                        index,
                        address: key.address(),
                        error,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(signatures = signatures.len(), "signed state");
        Ok(SignedState {
            proof: MultiSignature {
                signatures,
                timestamp,
            },
            sign_bytes,
        })
    }
}

fn check_commitment_len(data_type: DataType, commitment: &[u8]) -> Result<(), MultisigError> {
    if commitment.len() == COMMITMENT_LEN {
        Ok(())
    } else {
        Err(MultisigError::InvalidCommitmentLength {
            data_type,
            actual: commitment.len(),
        })
    }
}
