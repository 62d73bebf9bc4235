//! Type-safe digest implementation with size guarantees

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::{ConstantTimeEq, FixedSize};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// A cryptographic digest with a fixed size
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice of exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Get the length of the digest
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the digest is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the digest as an array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Consume the digest and return the raw array
    pub fn into_array(self) -> [u8; N] {
        self.data
    }

    /// Convert to a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>(", N)?;
        for b in self.data.iter() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.data.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        pqkem_internal::constant_time::ct_eq(&self.data, &other.data)
    }
}

impl<const N: usize> FixedSize for Digest<N> {
    fn size() -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_checks_length() {
        assert!(Digest::<4>::from_slice(&[1, 2, 3, 4]).is_ok());
        assert!(Digest::<4>::from_slice(&[1, 2, 3]).is_err());
        assert!(Digest::<4>::from_slice(&[0; 5]).is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let d = Digest::new([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(format!("{}", d), "deadbeef");
        assert_eq!(d.to_hex(), "deadbeef");
        assert_eq!(format!("{:?}", d), "Digest<4>(deadbeef)");
    }

    #[test]
    fn test_constant_time_equality() {
        let a = Digest::new([7u8; 32]);
        let mut raw = [7u8; 32];
        assert!(a.ct_eq(&Digest::new(raw)));
        raw[31] ^= 1;
        assert!(!a.ct_eq(&Digest::new(raw)));
    }
}
