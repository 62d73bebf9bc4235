//! Shared harness for the pqkem workspace tests
pub mod constant_time;
