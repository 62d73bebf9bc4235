//! Constant values for pqkem operations
//!
//! Every buffer size used by the KEM is a compile-time constant defined here.
//! Nothing in this crate allocates or depends on the standard library.

#![no_std]

pub mod pqc;
pub mod utils;
