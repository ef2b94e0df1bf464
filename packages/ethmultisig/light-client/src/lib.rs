#![doc = "Verifier of ETH multisig commitment proofs"]
#![deny(clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

pub mod error;
pub mod membership;
pub mod verify;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::VerificationError;
pub use membership::verify_membership;
pub use verify::{verify_proof, verify_signature};
