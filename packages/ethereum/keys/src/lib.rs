#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = "Ethereum style secp256k1 keys: Keccak-256 prehash signing, address recovery and wallets"]

pub mod recover;

pub mod signature;

#[cfg(feature = "mnemonic")]
pub mod wallet;

pub use signature::AttestorKey;
