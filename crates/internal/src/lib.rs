//! Internal utilities for the pqkem library
//!
//! Branch-free comparison/selection and byte-order helpers shared by the
//! algorithm and KEM crates. Not part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
