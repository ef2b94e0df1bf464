//! ETH multisig client state

use ibc_proto::ibc::core::client::v1::Height;

/// Type URL of [`ClientState`] when packed into `google.protobuf.Any`.
pub const ETH_MULTISIG_CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.ethmultisig.v1.ClientState";

/// Client state of the ETH multisig light client.
///
/// The multisig client has no notion of headers to track; it only records
/// the latest height it has been updated to.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientState {
    /// Latest height the client was updated to
    #[prost(message, optional, tag = "1")]
    pub latest_height: Option<Height>,
}

impl ClientState {
    /// Client state tracking `latest_height`.
    #[must_use]
    pub const fn new(latest_height: Height) -> Self {
        Self {
            latest_height: Some(latest_height),
        }
    }
}
