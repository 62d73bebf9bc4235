//! Common implementations and shared functionality for the pqkem library
//!
//! Containers for secret material and memory barrier helpers used by the
//! sponge and KEM layers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};

// Re-export memory barrier utilities
pub use security::barrier;
