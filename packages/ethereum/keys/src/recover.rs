use alloy_primitives::{keccak256, Address, Signature, B256};

/// Length of a recoverable `r || s || v` signature.
pub const SIGNATURE_LEN: usize = 65;

/// Compute Keccak-256 of message and recover the address from a 65-byte signature.
pub fn recover_address(message: &[u8], signature_65: &[u8]) -> Result<Address, anyhow::Error> {
    recover_address_from_prehash(&keccak256(message), signature_65)
}

/// Recover an Ethereum address from a prehash and 65-byte signature.
///
/// Both the canonical (`0`/`1`) and the Ethereum (`27`/`28`) recovery
/// ids are accepted. Any other id is rejected.
pub fn recover_address_from_prehash(
    prehash: &B256,
    signature_65: &[u8],
) -> Result<Address, anyhow::Error> {
    if signature_65.len() != SIGNATURE_LEN {
        return Err(anyhow::anyhow!(
            "signature must be exactly {SIGNATURE_LEN} bytes, got {}",
            signature_65.len()
        ));
    }
    let v = signature_65[SIGNATURE_LEN - 1];
    if !matches!(v, 0 | 1 | 27 | 28) {
        return Err(anyhow::anyhow!("invalid recovery id {v}"));
    }
    let sig = Signature::try_from(signature_65)
        .map_err(|_| anyhow::anyhow!("invalid signature length/format"))?;
    sig.recover_address_from_prehash(prehash)
        .map_err(|_| anyhow::anyhow!("signature recovery failed"))
}
