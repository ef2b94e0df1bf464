//! Answers IBC state queries with ETH multisig proofs.
//!
//! Every request runs through the same phases: the latest height and the
//! requested value are read from the chain, the value is signed at that
//! height, and the response is returned with the proof and proof height
//! filled in. Nothing is retried or cached, so every request yields fresh
//! signatures.

use alloy_signer_local::PrivateKeySigner;
use ethereum_keys::{wallet::WalletProvider, AttestorKey};
use ethmultisig_types::{
    ClientState, ClientStateObject, Codec, ConsensusState, ConsensusStateObject, Height,
};
use ibc_proto::ibc::core::{
    channel::v1::{
        QueryChannelResponse, QueryPacketAcknowledgementResponse, QueryPacketCommitmentResponse,
    },
    client::v1::{MsgCreateClient, QueryClientStateResponse, QueryConsensusStateResponse},
    connection::v1::QueryConnectionResponse,
};

use crate::{
    config::ProverConfig,
    error::{ConfigError, MultisigError, ProverError},
    signer::{current_timestamp, EthMultisig, KeySet},
};

/// Read access to the IBC state of the source chain.
///
/// Implementations own transport, retries and timeouts.
pub trait ChainQuerier: Send + Sync {
    /// Latest height the chain can be queried at.
    fn latest_height(&self) -> anyhow::Result<Height>;

    /// Client state of `client_id` at `height`.
    fn query_client_state(
        &self,
        height: &Height,
        client_id: &str,
    ) -> anyhow::Result<QueryClientStateResponse>;

    /// Consensus state of `client_id` for `consensus_height`, at `height`.
    fn query_client_consensus_state(
        &self,
        height: &Height,
        client_id: &str,
        consensus_height: &Height,
    ) -> anyhow::Result<QueryConsensusStateResponse>;

    /// Connection end at `height`.
    fn query_connection(
        &self,
        height: &Height,
        connection_id: &str,
    ) -> anyhow::Result<QueryConnectionResponse>;

    /// Channel end at `height`.
    fn query_channel(
        &self,
        height: &Height,
        port_id: &str,
        channel_id: &str,
    ) -> anyhow::Result<QueryChannelResponse>;

    /// Packet commitment at `height`.
    fn query_packet_commitment(
        &self,
        height: &Height,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
    ) -> anyhow::Result<QueryPacketCommitmentResponse>;

    /// Packet acknowledgement commitment at `height`.
    fn query_packet_acknowledgement_commitment(
        &self,
        height: &Height,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
    ) -> anyhow::Result<QueryPacketAcknowledgementResponse>;
}

/// Identifiers of the local end of an IBC path.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct PathEnd {
    /// Client identifier
    pub client_id: String,
    /// Connection identifier
    pub connection_id: String,
    /// Port identifier
    pub port_id: String,
    /// Channel identifier
    pub channel_id: String,
}

/// ETH multisig prover for one path end of a chain.
pub struct Prover<Q, C, K> {
    chain: Q,
    path: PathEnd,
    multisig: EthMultisig<C, K>,
}

impl<Q, C> Prover<Q, C, PrivateKeySigner>
where
    Q: ChainQuerier,
    C: Codec,
{
    /// Build a prover from its configuration, deriving every wallet key.
    ///
    /// # Errors
    /// Fails if no wallet is configured or a key cannot be derived.
    pub fn from_config<W: WalletProvider + ?Sized>(
        config: &ProverConfig,
        chain: Q,
        path: PathEnd,
        codec: C,
        wallet_provider: &W,
    ) -> Result<Self, ConfigError> {
        let keys = KeySet::new(config.derive_keys(wallet_provider)?)
            .map_err(|_| ConfigError::NoWallets)?;
        let multisig = EthMultisig::new(
            codec,
            config.diversifier.as_str(),
            keys,
            config.prefix.as_bytes(),
        );
        tracing::info!(
            signers = ?multisig.addresses(),
            diversifier = %config.diversifier,
            "built ethmultisig prover"
        );
        Ok(Self::new(chain, path, multisig))
    }
}

impl<Q, C, K> Prover<Q, C, K>
where
    Q: ChainQuerier,
    C: Codec,
    K: AttestorKey,
{
    /// Create a prover.
    #[must_use]
    pub const fn new(chain: Q, path: PathEnd, multisig: EthMultisig<C, K>) -> Self {
        Self {
            chain,
            path,
            multisig,
        }
    }

    /// The path end proofs are produced for.
    #[must_use]
    pub const fn path(&self) -> &PathEnd {
        &self.path
    }

    /// The underlying signer.
    #[must_use]
    pub const fn multisig(&self) -> &EthMultisig<C, K> {
        &self.multisig
    }

    /// Message creating an ETH multisig client trusting this prover's keys.
    ///
    /// # Errors
    /// Fails if the system clock is unusable.
    pub fn create_msg_create_client(&self, signer: &str) -> Result<MsgCreateClient, ProverError> {
        let client_state = ClientStateObject::from(ClientState::new(Height {
            revision_number: 0,
            revision_height: 1,
        }));
        let consensus_state = ConsensusStateObject::from(ConsensusState::new(
            &self.multisig.addresses(),
            self.multisig.diversifier(),
            current_timestamp()?,
        ));
        Ok(MsgCreateClient {
            client_state: Some(client_state.to_any()),
            consensus_state: Some(consensus_state.to_any()),
            signer: signer.to_string(),
        })
    }

    /// Query the client state and prove it.
    ///
    /// # Errors
    /// Fails if the chain query, decoding the state, or signing fails.
    #[tracing::instrument(skip(self), fields(client_id = %self.path.client_id))]
    pub fn query_client_state_with_proof(&self) -> Result<QueryClientStateResponse, ProverError> {
        let height = self.latest_height()?;
        let res = self
            .chain
            .query_client_state(&height, &self.path.client_id)
            .map_err(ProverError::Query)?;
        self.sign_client_state_response(res, height)
    }

    /// Query the consensus state at `consensus_height` and prove it.
    ///
    /// # Errors
    /// Fails if the chain query, decoding the state, or signing fails.
    #[tracing::instrument(skip(self), fields(client_id = %self.path.client_id))]
    pub fn query_client_consensus_state_with_proof(
        &self,
        consensus_height: &Height,
    ) -> Result<QueryConsensusStateResponse, ProverError> {
        let height = self.latest_height()?;
        let res = self
            .chain
            .query_client_consensus_state(&height, &self.path.client_id, consensus_height)
            .map_err(ProverError::Query)?;
        self.sign_consensus_state_response(res, height, consensus_height)
    }

    /// Query the connection end and prove it.
    ///
    /// # Errors
    /// Fails if the chain query or signing fails.
    #[tracing::instrument(skip(self), fields(connection_id = %self.path.connection_id))]
    pub fn query_connection_with_proof(&self) -> Result<QueryConnectionResponse, ProverError> {
        let height = self.latest_height()?;
        let res = self
            .chain
            .query_connection(&height, &self.path.connection_id)
            .map_err(ProverError::Query)?;
        self.sign_connection_response(res, height)
    }

    /// Query the channel end and prove it.
    ///
    /// # Errors
    /// Fails if the chain query or signing fails.
    #[tracing::instrument(
        skip(self),
        fields(port_id = %self.path.port_id, channel_id = %self.path.channel_id)
    )]
    pub fn query_channel_with_proof(&self) -> Result<QueryChannelResponse, ProverError> {
        let height = self.latest_height()?;
        let res = self
            .chain
            .query_channel(&height, &self.path.port_id, &self.path.channel_id)
            .map_err(ProverError::Query)?;
        self.sign_channel_response(res, height)
    }

    /// Query the commitment of packet `sequence` and prove it.
    ///
    /// # Errors
    /// Fails if the chain query fails, the commitment is not 32 bytes, or
    /// signing fails.
    #[tracing::instrument(
        skip(self),
        fields(port_id = %self.path.port_id, channel_id = %self.path.channel_id)
    )]
    pub fn query_packet_commitment_with_proof(
        &self,
        sequence: u64,
    ) -> Result<QueryPacketCommitmentResponse, ProverError> {
        let height = self.latest_height()?;
        let res = self
            .chain
            .query_packet_commitment(
                &height,
                &self.path.port_id,
                &self.path.channel_id,
                sequence,
            )
            .map_err(ProverError::Query)?;
        self.sign_packet_commitment_response(res, height, sequence)
    }

    /// Query the acknowledgement commitment of packet `sequence` and prove it.
    ///
    /// # Errors
    /// Fails if the chain query fails, the commitment is not 32 bytes, or
    /// signing fails.
    #[tracing::instrument(
        skip(self),
        fields(port_id = %self.path.port_id, channel_id = %self.path.channel_id)
    )]
    pub fn query_packet_acknowledgement_commitment_with_proof(
        &self,
        sequence: u64,
    ) -> Result<QueryPacketAcknowledgementResponse, ProverError> {
        let height = self.latest_height()?;
        let res = self
            .chain
            .query_packet_acknowledgement_commitment(
                &height,
                &self.path.port_id,
                &self.path.channel_id,
                sequence,
            )
            .map_err(ProverError::Query)?;
        self.sign_packet_acknowledgement_response(res, height, sequence)
    }

    /// Fill in proof and proof height of a client state response.
    ///
    /// # Errors
    /// Fails if the response carries no known client state or signing fails.
    pub fn sign_client_state_response(
        &self,
        mut res: QueryClientStateResponse,
        height: Height,
    ) -> Result<QueryClientStateResponse, ProverError> {
        let any = res
            .client_state
            .as_ref()
            .ok_or(ProverError::MissingValue("client state"))?;
        let client_state = ClientStateObject::try_from(any).map_err(MultisigError::from)?;
        let signed =
            self.multisig
                .sign_client_state(&height, &self.path.client_id, &client_state)?;
        res.proof = signed.proof_bytes();
        res.proof_height = Some(height);
        Ok(res)
    }

    /// Fill in proof and proof height of a consensus state response.
    ///
    /// # Errors
    /// Fails if the response carries no known consensus state or signing
    /// fails.
    pub fn sign_consensus_state_response(
        &self,
        mut res: QueryConsensusStateResponse,
        height: Height,
        consensus_height: &Height,
    ) -> Result<QueryConsensusStateResponse, ProverError> {
        let any = res
            .consensus_state
            .as_ref()
            .ok_or(ProverError::MissingValue("consensus state"))?;
        let consensus_state = ConsensusStateObject::try_from(any).map_err(MultisigError::from)?;
        let signed = self.multisig.sign_consensus_state(
            &height,
            &self.path.client_id,
            consensus_height,
            &consensus_state,
        )?;
        res.proof = signed.proof_bytes();
        res.proof_height = Some(height);
        Ok(res)
    }

    /// Fill in proof and proof height of a connection response.
    ///
    /// # Errors
    /// Fails if the response carries no connection or signing fails.
    pub fn sign_connection_response(
        &self,
        mut res: QueryConnectionResponse,
        height: Height,
    ) -> Result<QueryConnectionResponse, ProverError> {
        let connection = res
            .connection
            .as_ref()
            .ok_or(ProverError::MissingValue("connection"))?;
        let signed = self.multisig.sign_connection_state(
            &height,
            &self.path.connection_id,
            connection,
        )?;
        res.proof = signed.proof_bytes();
        res.proof_height = Some(height);
        Ok(res)
    }

    /// Fill in proof and proof height of a channel response.
    ///
    /// # Errors
    /// Fails if the response carries no channel or signing fails.
    pub fn sign_channel_response(
        &self,
        mut res: QueryChannelResponse,
        height: Height,
    ) -> Result<QueryChannelResponse, ProverError> {
        let channel = res
            .channel
            .as_ref()
            .ok_or(ProverError::MissingValue("channel"))?;
        let signed = self.multisig.sign_channel_state(
            &height,
            &self.path.port_id,
            &self.path.channel_id,
            channel,
        )?;
        res.proof = signed.proof_bytes();
        res.proof_height = Some(height);
        Ok(res)
    }

    /// Fill in proof and proof height of a packet commitment response.
    ///
    /// # Errors
    /// Fails if the commitment is not 32 bytes or signing fails.
    pub fn sign_packet_commitment_response(
        &self,
        mut res: QueryPacketCommitmentResponse,
        height: Height,
        sequence: u64,
    ) -> Result<QueryPacketCommitmentResponse, ProverError> {
        let signed = self.multisig.sign_packet_state(
            &height,
            &self.path.port_id,
            &self.path.channel_id,
            sequence,
            &res.commitment,
        )?;
        res.proof = signed.proof_bytes();
        res.proof_height = Some(height);
        Ok(res)
    }

    /// Fill in proof and proof height of a packet acknowledgement response.
    ///
    /// # Errors
    /// Fails if the commitment is not 32 bytes or signing fails.
    pub fn sign_packet_acknowledgement_response(
        &self,
        mut res: QueryPacketAcknowledgementResponse,
        height: Height,
        sequence: u64,
    ) -> Result<QueryPacketAcknowledgementResponse, ProverError> {
        let signed = self.multisig.sign_packet_acknowledgement_state(
            &height,
            &self.path.port_id,
            &self.path.channel_id,
            sequence,
            &res.acknowledgement,
        )?;
        res.proof = signed.proof_bytes();
        res.proof_height = Some(height);
        Ok(res)
    }

    fn latest_height(&self) -> Result<Height, ProverError> {
        let height = self.chain.latest_height().map_err(ProverError::Query)?;
        tracing::debug!(
            revision_number = height.revision_number,
            revision_height = height.revision_height,
            "proving at latest height"
        );
        Ok(height)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;
    use crate::error::ProofPhase;
    use ethereum_keys::wallet::MnemonicWallet;
    use ethmultisig_light_client::{
        test_utils::{signers, DIVERSIFIER, PREFIX},
        verify_membership, VerificationError,
    };
    use ethmultisig_types::{CommitmentPath, MultiSignature, ProtoCodec};
    use ibc_proto::{
        google::protobuf::Any,
        ibc::core::{channel::v1::Channel, connection::v1::ConnectionEnd},
    };
    use prost::Message;
    use sha2::{Digest, Sha256};

    /// In-memory chain; each `latest_height` call advances the height.
    #[derive(Default)]
    struct MockChain {
        height: AtomicU64,
        fail: bool,
        client_state: Option<Any>,
        consensus_state: Option<Any>,
        connection: Option<ConnectionEnd>,
        channel: Option<Channel>,
        commitment: Vec<u8>,
    }

    impl MockChain {
        fn populated() -> Self {
            Self {
                height: AtomicU64::new(10),
                client_state: Some(ClientStateObject::from(ClientState::new(Height {
                    revision_number: 0,
                    revision_height: 3,
                }))
                .to_any()),
                consensus_state: Some(
                    ConsensusStateObject::from(ConsensusState {
                        addresses: vec![vec![0x11; 20]],
                        diversifier: "counterparty".to_string(),
                        timestamp: 9,
                    })
                    .to_any(),
                ),
                connection: Some(ConnectionEnd {
                    client_id: "07-tendermint-0".to_string(),
                    ..Default::default()
                }),
                channel: Some(Channel {
                    version: "ics20-1".to_string(),
                    ..Default::default()
                }),
                commitment: Sha256::digest(b"test").to_vec(),
                ..Default::default()
            }
        }

        fn check(&self) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("rpc unavailable");
            }
            Ok(())
        }
    }

    impl ChainQuerier for MockChain {
        fn latest_height(&self) -> anyhow::Result<Height> {
            self.check()?;
            Ok(Height {
                revision_number: 0,
                revision_height: self.height.fetch_add(1, Ordering::SeqCst),
            })
        }

        fn query_client_state(
            &self,
            _height: &Height,
            _client_id: &str,
        ) -> anyhow::Result<QueryClientStateResponse> {
            Ok(QueryClientStateResponse {
                client_state: self.client_state.clone(),
                ..Default::default()
            })
        }

        fn query_client_consensus_state(
            &self,
            _height: &Height,
            _client_id: &str,
            _consensus_height: &Height,
        ) -> anyhow::Result<QueryConsensusStateResponse> {
            Ok(QueryConsensusStateResponse {
                consensus_state: self.consensus_state.clone(),
                ..Default::default()
            })
        }

        fn query_connection(
            &self,
            _height: &Height,
            _connection_id: &str,
        ) -> anyhow::Result<QueryConnectionResponse> {
            Ok(QueryConnectionResponse {
                connection: self.connection.clone(),
                ..Default::default()
            })
        }

        fn query_channel(
            &self,
            _height: &Height,
            _port_id: &str,
            _channel_id: &str,
        ) -> anyhow::Result<QueryChannelResponse> {
            Ok(QueryChannelResponse {
                channel: self.channel.clone(),
                ..Default::default()
            })
        }

        fn query_packet_commitment(
            &self,
            _height: &Height,
            _port_id: &str,
            _channel_id: &str,
            _sequence: u64,
        ) -> anyhow::Result<QueryPacketCommitmentResponse> {
            Ok(QueryPacketCommitmentResponse {
                commitment: self.commitment.clone(),
                ..Default::default()
            })
        }

        fn query_packet_acknowledgement_commitment(
            &self,
            _height: &Height,
            _port_id: &str,
            _channel_id: &str,
            _sequence: u64,
        ) -> anyhow::Result<QueryPacketAcknowledgementResponse> {
            Ok(QueryPacketAcknowledgementResponse {
                acknowledgement: self.commitment.clone(),
                ..Default::default()
            })
        }
    }

    fn path_end() -> PathEnd {
        PathEnd {
            client_id: "07-tendermint-0".to_string(),
            connection_id: "connection-0".to_string(),
            port_id: "port-0".to_string(),
            channel_id: "channel-0".to_string(),
        }
    }

    fn prover(chain: MockChain) -> Prover<MockChain, ProtoCodec, PrivateKeySigner> {
        let keys = KeySet::new(signers()).unwrap();
        Prover::new(
            chain,
            path_end(),
            EthMultisig::new(ProtoCodec, DIVERSIFIER, keys, PREFIX),
        )
    }

    fn trusted(prover: &Prover<MockChain, ProtoCodec, PrivateKeySigner>) -> ConsensusState {
        ConsensusState::new(&prover.multisig().addresses(), DIVERSIFIER, 0)
    }

    #[test]
    fn client_state_proof_verifies() {
        let prover = prover(MockChain::populated());
        let res = prover.query_client_state_with_proof().unwrap();
        let height = res.proof_height.clone().unwrap();
        assert_eq!(height.revision_height, 10);

        let value = res.client_state.as_ref().unwrap().encode_to_vec();
        verify_membership(
            &trusted(&prover),
            PREFIX,
            &height,
            CommitmentPath::ClientState {
                client_id: "07-tendermint-0",
            },
            &value,
            &res.proof,
        )
        .unwrap();
    }

    #[test]
    fn consensus_state_proof_verifies() {
        let prover = prover(MockChain::populated());
        let consensus_height = Height {
            revision_number: 0,
            revision_height: 3,
        };
        let res = prover
            .query_client_consensus_state_with_proof(&consensus_height)
            .unwrap();

        let value = res.consensus_state.as_ref().unwrap().encode_to_vec();
        verify_membership(
            &trusted(&prover),
            PREFIX,
            res.proof_height.as_ref().unwrap(),
            CommitmentPath::consensus_state("07-tendermint-0", &consensus_height),
            &value,
            &res.proof,
        )
        .unwrap();
    }

    #[test]
    fn connection_and_channel_proofs_verify() {
        let prover = prover(MockChain::populated());

        let res = prover.query_connection_with_proof().unwrap();
        verify_membership(
            &trusted(&prover),
            PREFIX,
            res.proof_height.as_ref().unwrap(),
            CommitmentPath::Connection {
                connection_id: "connection-0",
            },
            &res.connection.as_ref().unwrap().encode_to_vec(),
            &res.proof,
        )
        .unwrap();

        let res = prover.query_channel_with_proof().unwrap();
        verify_membership(
            &trusted(&prover),
            PREFIX,
            res.proof_height.as_ref().unwrap(),
            CommitmentPath::Channel {
                port_id: "port-0",
                channel_id: "channel-0",
            },
            &res.channel.as_ref().unwrap().encode_to_vec(),
            &res.proof,
        )
        .unwrap();
    }

    #[test]
    fn packet_proofs_verify() {
        let prover = prover(MockChain::populated());

        let res = prover.query_packet_commitment_with_proof(1).unwrap();
        verify_membership(
            &trusted(&prover),
            PREFIX,
            res.proof_height.as_ref().unwrap(),
            CommitmentPath::PacketCommitment {
                port_id: "port-0",
                channel_id: "channel-0",
                sequence: 1,
            },
            &res.commitment,
            &res.proof,
        )
        .unwrap();

        let res = prover
            .query_packet_acknowledgement_commitment_with_proof(1)
            .unwrap();
        let ack_path = CommitmentPath::PacketAcknowledgement {
            port_id: "port-0",
            channel_id: "channel-0",
            sequence: 1,
        };
        verify_membership(
            &trusted(&prover),
            PREFIX,
            res.proof_height.as_ref().unwrap(),
            ack_path,
            &res.acknowledgement,
            &res.proof,
        )
        .unwrap();

        // an ack proof is no packet commitment proof
        assert!(matches!(
            verify_membership(
                &trusted(&prover),
                PREFIX,
                res.proof_height.as_ref().unwrap(),
                CommitmentPath::PacketCommitment {
                    port_id: "port-0",
                    channel_id: "channel-0",
                    sequence: 1,
                },
                &res.acknowledgement,
                &res.proof,
            ),
            Err(VerificationError::AddressMismatch { .. })
        ));
    }

    #[test]
    fn every_request_uses_a_fresh_height() {
        let prover = prover(MockChain::populated());
        let first = prover.query_packet_commitment_with_proof(1).unwrap();
        let second = prover.query_packet_commitment_with_proof(1).unwrap();
        assert_ne!(first.proof_height, second.proof_height);
        assert_ne!(first.proof, second.proof);
    }

    #[test]
    fn chain_failure_is_a_query_error() {
        let prover = prover(MockChain {
            fail: true,
            ..MockChain::populated()
        });
        let err = prover.query_connection_with_proof().unwrap_err();
        assert_eq!(err.phase(), ProofPhase::Querying);
        assert!(err.to_string().contains("rpc unavailable"));
    }

    #[test]
    fn missing_value_is_a_query_error() {
        let prover = prover(MockChain {
            channel: None,
            ..MockChain::populated()
        });
        let err = prover.query_channel_with_proof().unwrap_err();
        assert!(matches!(err, ProverError::MissingValue("channel")));
        assert_eq!(err.phase(), ProofPhase::Querying);
    }

    #[test]
    fn unknown_client_state_is_a_building_error() {
        let prover = prover(MockChain {
            client_state: Some(Any {
                type_url: "/ibc.lightclients.solomachine.v2.ClientState".to_string(),
                value: Vec::new(),
            }),
            ..MockChain::populated()
        });
        let err = prover.query_client_state_with_proof().unwrap_err();
        assert_eq!(err.phase(), ProofPhase::Building);
    }

    #[test]
    fn short_commitment_is_a_building_error() {
        let prover = prover(MockChain {
            commitment: vec![0x01; 20],
            ..MockChain::populated()
        });
        let err = prover.query_packet_commitment_with_proof(1).unwrap_err();
        assert!(matches!(
            err,
            ProverError::Multisig(MultisigError::InvalidCommitmentLength { actual: 20, .. })
        ));
        assert_eq!(err.phase(), ProofPhase::Building);
    }

    #[test]
    fn msg_create_client_trusts_every_key() {
        let prover = prover(MockChain::default());
        let msg = prover.create_msg_create_client("cosmos1signer").unwrap();
        assert_eq!(msg.signer, "cosmos1signer");

        let client_state =
            ClientStateObject::try_from(msg.client_state.as_ref().unwrap()).unwrap();
        assert_eq!(
            client_state,
            ClientStateObject::EthMultisig(ClientState::new(Height {
                revision_number: 0,
                revision_height: 1,
            }))
        );

        let consensus_state =
            ConsensusStateObject::try_from(msg.consensus_state.as_ref().unwrap()).unwrap();
        let ConsensusStateObject::EthMultisig(consensus_state) = consensus_state else {
            panic!("unexpected consensus state type");
        };
        assert_eq!(
            consensus_state.signer_addresses().unwrap(),
            prover.multisig().addresses()
        );
        assert_eq!(consensus_state.diversifier, DIVERSIFIER);
        assert!(consensus_state.timestamp > 0);
    }

    #[test]
    fn from_config_derives_wallet_keys() {
        let mnemonic =
            "math razor capable expose worth grape metal sunset metal sudden usage scheme";
        let config: ProverConfig = toml::from_str(&format!(
            r#"
diversifier = "tester"
prefix = "ibc"

[[wallets]]
mnemonic = "{mnemonic}"
hdw_path = "m/44'/60'/0'/0/0"
"#
        ))
        .unwrap();

        let prover = Prover::from_config(
            &config,
            MockChain::populated(),
            path_end(),
            ProtoCodec,
            &MnemonicWallet,
        )
        .unwrap();
        assert_eq!(prover.multisig().addresses().len(), 1);
        assert_eq!(prover.multisig().prefix(), b"ibc");

        let res = prover.query_packet_commitment_with_proof(1).unwrap();
        let proof = MultiSignature::from_proof_bytes(&res.proof).unwrap();
        assert_eq!(proof.signatures.len(), 1);
    }

    #[test]
    fn from_config_requires_a_wallet() {
        let config: ProverConfig =
            toml::from_str("diversifier = \"tester\"\nprefix = \"ibc\"\nwallets = []\n").unwrap();
        assert!(matches!(
            Prover::from_config(
                &config,
                MockChain::populated(),
                path_end(),
                ProtoCodec,
                &MnemonicWallet
            ),
            Err(ConfigError::NoWallets)
        ));
    }

    #[test]
    fn from_config_rejects_repeated_wallet() {
        let mnemonic =
            "math razor capable expose worth grape metal sunset metal sudden usage scheme";
        let wallet =
            format!("[[wallets]]\nmnemonic = \"{mnemonic}\"\nhdw_path = \"m/44'/60'/0'/0/0\"\n");
        let config: ProverConfig = toml::from_str(&format!(
            "diversifier = \"tester\"\nprefix = \"ibc\"\n{wallet}{wallet}"
        ))
        .unwrap();

        assert!(matches!(
            Prover::from_config(
                &config,
                MockChain::populated(),
                path_end(),
                ProtoCodec,
                &MnemonicWallet
            ),
            Err(ConfigError::DuplicateWallet {
                index: 1,
                first: 0,
                ..
            })
        ));
    }

    #[test]
    fn path_end_deserializes() {
        let path: PathEnd = toml::from_str(
            "client_id = \"07-tendermint-0\"\nconnection_id = \"connection-0\"\nport_id = \"port-0\"\nchannel_id = \"channel-0\"\n",
        )
        .unwrap();
        assert_eq!(path, path_end());
    }
}
