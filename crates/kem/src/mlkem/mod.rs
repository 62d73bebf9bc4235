//! ML-KEM-768 / Kyber-768 key encapsulation.
//!
//! A module-lattice KEM over `Z_3329[X]/(X^256 + 1)` with rank 3. The
//! IND-CPA scheme in `cpa_pke` is lifted to IND-CCA2 by the
//! Fujisaki-Okamoto transform in `ind_cca`; decapsulation uses implicit
//! rejection and never reports failure.

mod cpa_pke; // IND-CPA public-key encryption
mod ind_cca; // Fujisaki-Okamoto transform with implicit rejection
mod kem; // Typed wrappers and the api::Kem implementation
mod mlkem768;
mod polyvec; // Vectors and the public matrix
mod serialize; // Key and ciphertext byte layouts
mod symmetric; // H, G, J, PRF and XOF
pub mod validate;
pub mod variant;

pub use self::kem::{
    MlKemCiphertext, MlKemKem, MlKemKeyPair, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret,
};
pub use self::mlkem768::{Kyber768, MlKem768};
pub use self::variant::{KdfVariant, Kyber, MlKem};

pub use pqkem_params::pqc::mlkem::{
    MLKEM_CIPHERTEXT_BYTES, MLKEM_PUBLIC_KEY_BYTES, MLKEM_SECRET_KEY_BYTES, MLKEM_SS_BYTES,
};
