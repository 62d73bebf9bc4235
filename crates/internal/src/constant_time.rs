//! Constant-time operations to prevent timing attacks
//!
//! Every function here touches every byte of its inputs regardless of their
//! values. Only the *lengths* of the inputs may influence control flow, and
//! lengths are public in every caller.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a `Choice` (0 or 1)
///
/// Slices of different length compare unequal.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time selection between two fixed-size byte arrays
///
/// Returns a copy of `a` if `condition` is 0 and a copy of `b` if it is 1.
pub fn ct_select_bytes<const N: usize>(a: &[u8; N], b: &[u8; N], condition: Choice) -> [u8; N] {
    let mut out = [0u8; N];
    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = u8::conditional_select(x, y, condition);
    }
    out
}
