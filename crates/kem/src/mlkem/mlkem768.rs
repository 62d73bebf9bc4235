//! The rank-3 parameter set in both key-derivation variants.

use super::kem::MlKemKem;
use super::variant::{Kyber, MlKem};

/// ML-KEM-768 as standardized in FIPS 203
pub type MlKem768 = MlKemKem<MlKem>;

/// Kyber-768 with the round-3 key derivation
pub type Kyber768 = MlKemKem<Kyber>;
