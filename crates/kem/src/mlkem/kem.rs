//! Typed keys, ciphertexts and the `Kem` implementation.
//!
//! Sizes are enforced when bytes enter: every conversion from a slice checks
//! the length once, and from then on the core works on fixed arrays.

use core::fmt;
use core::marker::PhantomData;

use alloc::vec::Vec;

use log::trace;
use pqkem_api::{Kem as KemTrait, Result as ApiResult, Serialize, SerializeSecret};
use pqkem_common::{EphemeralSecret, SecretBuffer};
use pqkem_params::pqc::mlkem::{
    MLKEM_CIPHERTEXT_BYTES, MLKEM_ENCAPS_SEED_BYTES, MLKEM_KEYGEN_SEED_BYTES,
    MLKEM_PUBLIC_KEY_BYTES, MLKEM_SECRET_KEY_BYTES, MLKEM_SS_BYTES,
};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen};
use super::validate::{validate_private_key, validate_public_key};
use super::variant::KdfVariant;
use crate::error::{validate, Error, Result};

fn check_len<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<()> {
    validate::length(context, bytes.len(), N).map_err(|e| {
        trace!("{} rejected: {} bytes, expected {}", context, bytes.len(), N);
        e
    })
}

/// Copy `bytes` into an array after checking its length
fn checked_array<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    check_len::<N>(context, bytes)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Like [`checked_array`], but the bytes land directly in a wiped buffer
fn checked_secret<const N: usize>(
    context: &'static str,
    bytes: &[u8],
) -> Result<SecretBuffer<N>> {
    check_len::<N>(context, bytes)?;
    let mut out = SecretBuffer::zeroed();
    out.as_mut_slice().copy_from_slice(bytes);
    Ok(out)
}

/// Encapsulation key
#[derive(Clone, PartialEq, Eq)]
pub struct MlKemPublicKey([u8; MLKEM_PUBLIC_KEY_BYTES]);

/// Decapsulation key. Zeroized on drop.
#[derive(Clone, Zeroize)]
pub struct MlKemSecretKey(SecretBuffer<MLKEM_SECRET_KEY_BYTES>);

/// Ciphertext
#[derive(Clone, PartialEq, Eq)]
pub struct MlKemCiphertext([u8; MLKEM_CIPHERTEXT_BYTES]);

/// 32-byte shared secret. Zeroized on drop.
#[derive(Clone, Zeroize)]
pub struct MlKemSharedSecret(SecretBuffer<MLKEM_SS_BYTES>);

impl ZeroizeOnDrop for MlKemSecretKey {}
impl ZeroizeOnDrop for MlKemSharedSecret {}

impl MlKemPublicKey {
    /// Size in bytes
    pub const LEN: usize = MLKEM_PUBLIC_KEY_BYTES;

    /// Wrap an encoded key without validating it
    pub fn from_array(bytes: [u8; MLKEM_PUBLIC_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Encoded key bytes
    pub fn as_bytes(&self) -> &[u8; MLKEM_PUBLIC_KEY_BYTES] {
        &self.0
    }
}

impl MlKemSecretKey {
    /// Size in bytes
    pub const LEN: usize = MLKEM_SECRET_KEY_BYTES;

    /// Wrap an encoded key without validating it
    pub fn from_array(bytes: [u8; MLKEM_SECRET_KEY_BYTES]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Encoded key bytes: ŝ ∥ pk ∥ H(pk) ∥ z
    pub fn as_bytes(&self) -> &[u8; MLKEM_SECRET_KEY_BYTES] {
        self.0.as_array()
    }
}

impl MlKemCiphertext {
    /// Size in bytes
    pub const LEN: usize = MLKEM_CIPHERTEXT_BYTES;

    /// Wrap a ciphertext received from the wire
    pub fn from_array(bytes: [u8; MLKEM_CIPHERTEXT_BYTES]) -> Self {
        Self(bytes)
    }

    /// Encoded ciphertext bytes: u ∥ v
    pub fn as_bytes(&self) -> &[u8; MLKEM_CIPHERTEXT_BYTES] {
        &self.0
    }
}

impl MlKemSharedSecret {
    /// Size in bytes
    pub const LEN: usize = MLKEM_SS_BYTES;

    /// Wrap 32 secret bytes, e.g. a value restored from storage
    pub fn from_array(bytes: [u8; MLKEM_SS_BYTES]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// The shared secret bytes
    pub fn as_bytes(&self) -> &[u8; MLKEM_SS_BYTES] {
        self.0.as_array()
    }
}

macro_rules! impl_byte_conversions {
    ($ty:ident, $context:literal, $checked:ident) => {
        impl AsRef<[u8]> for $ty {
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }

        impl TryFrom<&[u8]> for $ty {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self> {
                $checked($context, bytes).map(Self)
            }
        }
    };
}

impl_byte_conversions!(MlKemPublicKey, "ML-KEM public key", checked_array);
impl_byte_conversions!(MlKemSecretKey, "ML-KEM secret key", checked_secret);
impl_byte_conversions!(MlKemCiphertext, "ML-KEM ciphertext", checked_array);
impl_byte_conversions!(MlKemSharedSecret, "ML-KEM shared secret", checked_secret);

impl Serialize for MlKemPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::try_from(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl Serialize for MlKemCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::try_from(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for MlKemSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::try_from(bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

impl SerializeSecret for MlKemSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::try_from(bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

impl ConstantTimeEq for MlKemSecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl ConstantTimeEq for MlKemSharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl PartialEq for MlKemSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MlKemSharedSecret {}

impl fmt::Debug for MlKemPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKemPublicKey(")?;
        for b in &self.0[..8] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "..)")
    }
}

impl fmt::Debug for MlKemCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKemCiphertext(")?;
        for b in &self.0[..8] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "..)")
    }
}

impl fmt::Debug for MlKemSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MlKemSecretKey([REDACTED])")
    }
}

impl fmt::Debug for MlKemSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MlKemSharedSecret([REDACTED])")
    }
}

/// A matching public/secret key pair
#[derive(Clone, Debug)]
pub struct MlKemKeyPair {
    public: MlKemPublicKey,
    secret: MlKemSecretKey,
}

impl MlKemKeyPair {
    pub fn public_key(&self) -> &MlKemPublicKey {
        &self.public
    }

    pub fn secret_key(&self) -> &MlKemSecretKey {
        &self.secret
    }

    /// Split into the two halves
    pub fn into_parts(self) -> (MlKemPublicKey, MlKemSecretKey) {
        (self.public, self.secret)
    }
}

/// ML-KEM-768 parameterized by its key-derivation variant.
///
/// Use the aliases [`MlKem768`](super::MlKem768) and
/// [`Kyber768`](super::Kyber768) rather than naming this type directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct MlKemKem<V: KdfVariant> {
    _variant: PhantomData<V>,
}

impl<V: KdfVariant> MlKemKem<V> {
    /// Deterministic key generation from `d ∥ z`.
    pub fn keypair_derand(seed: &[u8; MLKEM_KEYGEN_SEED_BYTES]) -> MlKemKeyPair {
        let (pk, sk) = kem_keygen::<V>(seed);
        MlKemKeyPair {
            public: MlKemPublicKey(pk),
            secret: MlKemSecretKey(SecretBuffer::copy_from(&sk)),
        }
    }

    /// Deterministic encapsulation. The public key is used as given; call
    /// [`Self::validate_public_key`] first if it came from an untrusted party.
    pub fn encapsulate_derand(
        public_key: &MlKemPublicKey,
        randomness: &[u8; MLKEM_ENCAPS_SEED_BYTES],
    ) -> (MlKemCiphertext, MlKemSharedSecret) {
        let (ct, ss) = kem_encaps::<V>(&public_key.0, randomness);
        (MlKemCiphertext(ct), MlKemSharedSecret(SecretBuffer::copy_from(&ss)))
    }

    /// Decapsulation with implicit rejection.
    ///
    /// Never fails: a ciphertext that does not re-encrypt to itself yields a
    /// pseudorandom secret derived from the key's rejection seed.
    pub fn decapsulate_implicit(
        secret_key: &MlKemSecretKey,
        ciphertext: &MlKemCiphertext,
    ) -> MlKemSharedSecret {
        let ss = kem_decaps::<V>(secret_key.as_bytes(), &ciphertext.0);
        MlKemSharedSecret(SecretBuffer::copy_from(&ss))
    }

    /// See [`validate_public_key`](super::validate::validate_public_key)
    pub fn validate_public_key(public_key: &MlKemPublicKey) -> bool {
        validate_public_key(&public_key.0)
    }

    /// See [`validate_private_key`](super::validate::validate_private_key)
    pub fn validate_private_key(secret_key: &MlKemSecretKey) -> bool {
        validate_private_key(secret_key.as_bytes())
    }
}

impl<V: KdfVariant> KemTrait for MlKemKem<V> {
    type PublicKey = MlKemPublicKey;
    type SecretKey = MlKemSecretKey;
    type SharedSecret = MlKemSharedSecret;
    type Ciphertext = MlKemCiphertext;
    type KeyPair = MlKemKeyPair;

    fn name() -> &'static str {
        V::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = EphemeralSecret::new([0u8; MLKEM_KEYGEN_SEED_BYTES]);
        rng.fill_bytes(&mut seed[..]);
        Ok(Self::keypair_derand(&seed))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        validate::key(
            Self::validate_public_key(public_key),
            V::NAME,
            "public key coefficient outside [0, q)",
        )?;
        let mut randomness = EphemeralSecret::new([0u8; MLKEM_ENCAPS_SEED_BYTES]);
        rng.fill_bytes(&mut randomness[..]);
        Ok(Self::encapsulate_derand(public_key, &randomness))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        validate::key(
            Self::validate_private_key(secret_key),
            V::NAME,
            "secret key hash check failed",
        )?;
        Ok(Self::decapsulate_implicit(secret_key, ciphertext))
    }
}
