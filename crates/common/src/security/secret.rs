//! Secret data types with guaranteed zeroization

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// Used for sponge block buffers and seeds whose size is known at compile
/// time. The contents are wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Copy `src` into a fresh buffer without an intermediate array value,
    /// so no unwiped copy of the secret is left behind.
    pub fn copy_from(src: &[u8; N]) -> Self {
        let mut buffer = Self::zeroed();
        buffer.data.copy_from_slice(src);
        buffer
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (only for `N == 0`)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get a reference to the inner array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Ephemeral secret that is automatically zeroized after use
///
/// Wraps intermediate values such as the random seeds drawn for key
/// generation and encapsulation so they are wiped when the enclosing scope
/// ends.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Create a new ephemeral secret
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> AsRef<T> for EphemeralSecret<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> AsMut<T> for EphemeralSecret<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize + Default> Default for EphemeralSecret<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_buffer_basic() {
        let mut buffer = SecretBuffer::<32>::new([42u8; 32]);
        assert_eq!(buffer.len(), 32);
        assert_eq!(buffer.as_slice()[0], 42);

        buffer.as_mut_slice()[0] = 1;
        assert_eq!(buffer.as_array()[0], 1);
    }

    #[test]
    fn test_secret_buffer_copy_from() {
        let src = zeroize::Zeroizing::new([0x3Cu8; 48]);
        let buffer = SecretBuffer::<48>::copy_from(&src);
        assert_eq!(buffer.as_array(), &*src);
        // the source keeps its own copy; its wrapper wipes it
        assert_eq!(src[47], 0x3C);
    }

    #[test]
    fn test_secret_buffer_zeroize() {
        let mut buffer = SecretBuffer::<16>::new([0xAA; 16]);
        buffer.zeroize();
        assert_eq!(buffer.as_slice(), &[0u8; 16]);
    }

    #[test]
    fn test_secret_buffer_debug_is_redacted() {
        let buffer = SecretBuffer::<4>::new([0xDE, 0xAD, 0xBE, 0xEF]);
        let shown = format!("{:?}", buffer);
        assert_eq!(shown, "SecretBuffer<4>([REDACTED])");
    }

    #[test]
    fn test_ephemeral_secret() {
        let mut secret = EphemeralSecret::new([7u8; 64]);
        assert_eq!(secret[0], 7);
        secret[63] = 1;
        assert_eq!(secret.as_ref()[63], 1);
        assert_eq!(format!("{:?}", secret), "EphemeralSecret([REDACTED])");
    }
}
