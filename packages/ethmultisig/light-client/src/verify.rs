//! Multisig proof verification.
//!
//! Signatures are matched to the trusted signers positionally: the
//! signature at index `i` must recover to the trusted address at index
//! `i`, which is the order the signer iterates its keys in. A proof whose
//! signatures are all valid but reordered is rejected.

use std::collections::HashSet;

use alloy_primitives::{keccak256, Address};
use ethereum_keys::recover::recover_address_from_prehash;
use ethmultisig_types::{MultiSignature, SignBytes};
use prost::Message;

use crate::error::VerificationError;

/// Verify that `proof` carries one valid signature over `sign_bytes` from
/// every address in `expected`, in order.
///
/// # Errors
/// Fails if:
/// - `expected` is empty
/// - The number of signatures does not match the number of expected signers
/// - `sign_bytes` cannot be decoded or carries another timestamp than `proof`
/// - A signature is malformed or recovers to the same signer as an earlier one
/// - A signature does not recover to the expected signer at its position
pub fn verify_signature(
    expected: &[Address],
    proof: &MultiSignature,
    sign_bytes: &[u8],
) -> Result<(), VerificationError> {
    if expected.is_empty() {
        return Err(VerificationError::EmptySignerSet);
    }
    if proof.signatures.len() != expected.len() {
        return Err(VerificationError::SignatureCountMismatch {
            expected: expected.len(),
            actual: proof.signatures.len(),
        });
    }

    let decoded = SignBytes::decode(sign_bytes).map_err(VerificationError::MalformedSignBytes)?;
    if decoded.timestamp != proof.timestamp {
        return Err(VerificationError::TimestampMismatch {
            sign_bytes: decoded.timestamp,
            proof: proof.timestamp,
        });
    }

    let prehash = keccak256(sign_bytes);
    let mut seen = HashSet::with_capacity(expected.len());
    for (index, (signature, expected)) in proof.signatures.iter().zip(expected).enumerate() {
        let recovered = recover_address_from_prehash(&prehash, signature).map_err(|e| {
            VerificationError::InvalidSignature {
                index,
                reason: format!("{e:#}"),
            }
        })?;
        if !seen.insert(recovered) {
            return Err(VerificationError::DuplicateSigner {
                index,
                address: recovered,
            });
        }
        if recovered != *expected {
            return Err(VerificationError::AddressMismatch {
                index,
                expected: *expected,
                recovered,
            });
        }
    }

    tracing::debug!(
        signers = expected.len(),
        timestamp = proof.timestamp,
        data_type = decoded.data_type,
        "verified multisig proof"
    );
    Ok(())
}

/// Decode `proof` and verify it with [`verify_signature`].
///
/// # Errors
/// Fails if `proof` is not a valid multi signature encoding, or if
/// [`verify_signature`] fails.
pub fn verify_proof(
    expected: &[Address],
    proof: &[u8],
    sign_bytes: &[u8],
) -> Result<(), VerificationError> {
    let proof = MultiSignature::from_proof_bytes(proof).map_err(VerificationError::MalformedProof)?;
    verify_signature(expected, &proof, sign_bytes)
}
