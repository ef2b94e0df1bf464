//! Key derivation from BIP-39 mnemonics.

use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};

/// Derives signing keys from a seed phrase and an HD derivation path.
pub trait WalletProvider: Send + Sync {
    /// Derive the private key at `hd_path` from `mnemonic`.
    ///
    /// # Errors
    /// Fails if the mnemonic or the derivation path is invalid.
    fn derive_key(&self, mnemonic: &str, hd_path: &str) -> Result<PrivateKeySigner, anyhow::Error>;
}

/// BIP-39 (English wordlist, empty passphrase) + BIP-32 wallet.
#[derive(Clone, Copy, Debug, Default)]
pub struct MnemonicWallet;

impl WalletProvider for MnemonicWallet {
    fn derive_key(&self, mnemonic: &str, hd_path: &str) -> Result<PrivateKeySigner, anyhow::Error> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(mnemonic)
            .derivation_path(hd_path)?
            .build()?;
        tracing::debug!(address = %signer.address(), hd_path, "derived wallet key");
        Ok(signer)
    }
}
