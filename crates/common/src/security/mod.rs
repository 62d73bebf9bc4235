//! Security primitives and memory safety utilities

pub mod memory;
pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer};

pub use memory::barrier;
