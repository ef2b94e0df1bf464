//! Membership proof verification against a trusted consensus state

use ethmultisig_types::{
    build_sign_bytes, CommitmentPath, ConsensusState, Height, MultiSignature, StateData,
};

use crate::{error::VerificationError, verify::verify_signature};

/// Verify that `value` is committed at `path` under `prefix`.
///
/// The sign bytes are rebuilt the way the destination chain does it: from
/// the trusted signer set and diversifier of `consensus_state`, the proof
/// height and the timestamp carried by the proof itself.
///
/// # Errors
/// Fails if the proof cannot be decoded, the path cannot be derived, the
/// consensus state holds a malformed address, or signature verification
/// fails.
pub fn verify_membership(
    consensus_state: &ConsensusState,
    prefix: &[u8],
    proof_height: &Height,
    path: CommitmentPath<'_>,
    value: &[u8],
    proof: &[u8],
) -> Result<(), VerificationError> {
    let proof = MultiSignature::from_proof_bytes(proof).map_err(VerificationError::MalformedProof)?;
    let expected = consensus_state.signer_addresses()?;
    let state_data = StateData::new(path.commitment_key(prefix)?, value.to_vec());

    let sign_bytes = build_sign_bytes(
        proof_height,
        proof.timestamp,
        &consensus_state.diversifier,
        path.data_type(),
        &state_data,
    );
    verify_signature(&expected, &proof, &sign_bytes)
}
