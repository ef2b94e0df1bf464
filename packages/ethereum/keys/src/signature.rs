use alloy_primitives::{keccak256, Address, Signature, B256};

#[cfg(feature = "signer")]
use alloy_signer::SignerSync;
#[cfg(feature = "signer")]
use alloy_signer_local::PrivateKeySigner;

/// A secp256k1 key that produces recoverable signatures over 32-byte prehashes.
///
/// Implementations must be deterministic with respect to the address they
/// report: the address returned by [`AttestorKey::address`] is the one a
/// verifier recovers from every signature the key produces.
pub trait AttestorKey: Send + Sync {
    /// Ethereum address of the key.
    fn address(&self) -> Address;

    /// Sign a 32-byte prehash.
    fn sign_prehash(&self, prehash: &B256) -> Result<Signature, anyhow::Error>;
}

#[cfg(feature = "signer")]
impl AttestorKey for PrivateKeySigner {
    fn address(&self) -> Address {
        Self::address(self)
    }

    fn sign_prehash(&self, prehash: &B256) -> Result<Signature, anyhow::Error> {
        self.sign_hash_sync(prehash)
            .map_err(|e| anyhow::anyhow!("{e}"))
    }
}

/// Compute Keccak-256 of input and sign the digest.
pub fn sign<K: AttestorKey + ?Sized>(key: &K, message: &[u8]) -> Result<Signature, anyhow::Error> {
    key.sign_prehash(&keccak256(message))
}
