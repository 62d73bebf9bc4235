//! The hash, PRF and XOF instantiations used by the scheme.
//!
//! | name | instance                          |
//! |------|-----------------------------------|
//! | H    | SHA3-256                          |
//! | G    | SHA3-512, split into two halves   |
//! | J    | SHAKE256, 32-byte output          |
//! | PRF  | SHAKE256(σ ∥ nonce), 128 bytes     |
//! | XOF  | SHAKE128(ρ ∥ x ∥ y) session        |

use pqkem_algorithms::hash::{Sha3_256, Sha3_512};
use pqkem_algorithms::keccak::{Shake128Sponge, Shake256Sponge};
use pqkem_algorithms::poly::sampling::CBD_ETA2_BYTES;
use pqkem_params::pqc::mlkem::{MLKEM_ETA1_PRF_BYTES, MLKEM_ETA2_PRF_BYTES, MLKEM_SYM_BYTES};
use zeroize::Zeroizing;

/// Output length of the noise PRF
pub(crate) const PRF_BYTES: usize = CBD_ETA2_BYTES;

// Both noise widths are 2 at this parameter set, so one sampler serves both.
const _: () = assert!(MLKEM_ETA1_PRF_BYTES == PRF_BYTES && MLKEM_ETA2_PRF_BYTES == PRF_BYTES);

/// H: SHA3-256 over the concatenation of `inputs`
pub(crate) fn hash_h(inputs: &[&[u8]]) -> [u8; MLKEM_SYM_BYTES] {
    Sha3_256::hash_concat(inputs)
}

/// G: SHA3-512 over the concatenation of `inputs`, split into two halves
pub(crate) fn hash_g(
    inputs: &[&[u8]],
) -> (Zeroizing<[u8; MLKEM_SYM_BYTES]>, Zeroizing<[u8; MLKEM_SYM_BYTES]>) {
    let digest = Zeroizing::new(Sha3_512::hash_concat(inputs));
    let mut first = Zeroizing::new([0u8; MLKEM_SYM_BYTES]);
    let mut second = Zeroizing::new([0u8; MLKEM_SYM_BYTES]);
    first.copy_from_slice(&digest[..MLKEM_SYM_BYTES]);
    second.copy_from_slice(&digest[MLKEM_SYM_BYTES..]);
    (first, second)
}

/// J: SHAKE256 over the concatenation of `inputs`, 32 bytes out
pub(crate) fn hash_j(inputs: &[&[u8]]) -> [u8; MLKEM_SYM_BYTES] {
    let mut out = [0u8; MLKEM_SYM_BYTES];
    Shake256Sponge::digest(inputs, &mut out);
    out
}

/// Noise PRF: SHAKE256(seed ∥ nonce)
pub(crate) fn prf(seed: &[u8; MLKEM_SYM_BYTES], nonce: u8) -> Zeroizing<[u8; PRF_BYTES]> {
    let mut out = Zeroizing::new([0u8; PRF_BYTES]);
    Shake256Sponge::digest(&[seed, &[nonce]], out.as_mut());
    out
}

/// Matrix XOF: a SHAKE128 session over ρ ∥ x ∥ y, ready to squeeze
pub(crate) fn xof(rho: &[u8; MLKEM_SYM_BYTES], x: u8, y: u8) -> Shake128Sponge {
    let mut input = [0u8; MLKEM_SYM_BYTES + 2];
    input[..MLKEM_SYM_BYTES].copy_from_slice(rho);
    input[MLKEM_SYM_BYTES] = x;
    input[MLKEM_SYM_BYTES + 1] = y;

    let mut sponge = Shake128Sponge::new();
    sponge.absorb_final(&input);
    sponge
}
