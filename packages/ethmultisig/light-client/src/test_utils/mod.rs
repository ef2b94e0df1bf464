//! Test utilities for the ETH multisig light client

#[cfg(any(test, feature = "test-utils"))]
pub use fixtures::*;

#[allow(missing_docs, clippy::missing_panics_doc, clippy::must_use_candidate)]
#[cfg(any(test, feature = "test-utils"))]
mod fixtures {
    use alloy_primitives::Address;
    use alloy_signer_local::PrivateKeySigner;
    use ethmultisig_types::{build_sign_bytes, DataType, Height, MultiSignature, StateData};

    pub const DIVERSIFIER: &str = "tester";
    pub const PREFIX: &[u8] = b"ibc";

    pub fn signers() -> Vec<PrivateKeySigner> {
        [[0xcd; 32], [0x02; 32], [0x03; 32]]
            .iter()
            .map(|key| PrivateKeySigner::from_slice(key).expect("valid key"))
            .collect()
    }

    pub fn addresses(signers: &[PrivateKeySigner]) -> Vec<Address> {
        signers.iter().map(|s| s.address()).collect()
    }

    pub const fn proof_height() -> Height {
        Height {
            revision_number: 0,
            revision_height: 1,
        }
    }

    pub fn sample_sign_bytes(timestamp: u64, data_type: DataType, state_data: &StateData) -> Vec<u8> {
        build_sign_bytes(&proof_height(), timestamp, DIVERSIFIER, data_type, state_data)
    }

    /// Sign `sign_bytes` with every signer, in order.
    pub fn multi_sign(
        signers: &[PrivateKeySigner],
        sign_bytes: &[u8],
        timestamp: u64,
    ) -> MultiSignature {
        MultiSignature {
            signatures: signers
                .iter()
                .map(|signer| {
                    ethereum_keys::signature::sign(signer, sign_bytes)
                        .expect("signing should work")
                        .as_bytes()
                        .to_vec()
                })
                .collect(),
            timestamp,
        }
    }
}
