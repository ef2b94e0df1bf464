//! Prover configuration.

use std::{collections::HashMap, fmt, fs, path::Path};

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use ethereum_keys::wallet::WalletProvider;

use crate::error::ConfigError;

/// Top level configuration of the ETH multisig prover.
#[derive(Clone, Debug, serde::Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ProverConfig {
    /// Domain separator signed into every payload.
    pub diversifier: String,
    /// Store prefix of the commitment paths.
    pub prefix: String,
    /// Signing wallets, in signing order.
    pub wallets: Vec<WalletConfig>,
    /// Contracts of the destination chain, if deployed.
    #[serde(default)]
    pub contracts: Option<ContractConfig>,
}

/// A key derived from a mnemonic.
#[derive(Clone, serde::Deserialize)]
pub struct WalletConfig {
    /// BIP-39 mnemonic
    pub mnemonic: String,
    /// BIP-32 derivation path
    pub hdw_path: String,
}

/// Addresses of the destination chain contracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ContractConfig {
    /// The multisig light client contract
    pub multisig_client_address: Address,
    /// The IBC host contract
    pub ibc_host_address: Address,
}

impl ProverConfig {
    /// Load a `ProverConfig` from a TOML file on disk.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not a valid config.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .map_err(|e| ConfigError::Io(path_ref.display().to_string(), e))?;
        let cfg = toml::from_str(&contents)?;
        Ok(cfg)
    }

    /// Derive the key of every wallet, in order.
    ///
    /// # Errors
    /// Fails if no wallet is configured, a key cannot be derived, or two
    /// wallets derive the same address.
    pub fn derive_keys<W: WalletProvider + ?Sized>(
        &self,
        wallet_provider: &W,
    ) -> Result<Vec<PrivateKeySigner>, ConfigError> {
        if self.wallets.is_empty() {
            return Err(ConfigError::NoWallets);
        }
        let mut seen = HashMap::with_capacity(self.wallets.len());
        let mut keys = Vec::with_capacity(self.wallets.len());
        for (index, w) in self.wallets.iter().enumerate() {
            let key = wallet_provider
                .derive_key(&w.mnemonic, &w.hdw_path)
                .map_err(|error| ConfigError::Wallet { index, error })?;
            let address = key.address();
            if let Some(&first) = seen.get(&address) {
                return Err(ConfigError::DuplicateWallet {
                    index,
                    first,
                    address,
                });
            }
            seen.insert(address, index);
            keys.push(key);
        }
        Ok(keys)
    }
}

impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConfig")
            .field("mnemonic", &"<redacted>")
            .field("hdw_path", &self.hdw_path)
            .finish()
    }
}
