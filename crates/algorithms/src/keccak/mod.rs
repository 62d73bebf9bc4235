//! Keccak-f\[1600\] and the generic sponge construction (FIPS 202)
//!
//! Every hash, PRF and XOF in this crate is a [`KeccakSponge`] with a fixed
//! rate and domain-separation byte. The sponge is a small state machine:
//!
//! ```text
//!   absorbing ──absorb_final / first squeeze──▶ squeezing
//!       ▲                                          │
//!       └───────────────────reset──────────────────┘
//! ```
//!
//! Absorbing into a squeezing sponge is an error; squeezing can be repeated
//! and continues the output stream.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use pqkem_common::security::{barrier, SecretBuffer};
use pqkem_params::utils::hash::{
    KECCAK_ROUNDS, KECCAK_STATE_LANES, SHAKE128_RATE, SHAKE256_RATE, SHAKE_DELIMITER,
};

use crate::error::{Error, Result};

// ──────────────────────────────── constants ────────────────────────────────

/// Keccak round constants.
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rotation offsets for the ρ step, in π-walk order.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane visited at each step of the combined ρ/π walk.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Final padding bit, set in the last byte of the rate.
const PAD_LAST: u8 = 0x80;

// ───────────────────────────── permutation ────────────────────────────────

/// The Keccak-f\[1600\] permutation over a 5×5 lane state, lane `(x, y)` at
/// index `x + 5y`.
pub fn keccak_f1600(state: &mut [u64; KECCAK_STATE_LANES]) {
    for &rc in RC.iter() {
        // θ
        let mut c = [0u64; 5];
        for (x, col) in c.iter_mut().enumerate() {
            *col = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // ρ and π
        let mut carry = state[1];
        for (&lane, &rot) in PI.iter().zip(RHO.iter()) {
            let next = state[lane];
            state[lane] = carry.rotate_left(rot);
            carry = next;
        }

        // χ
        for y in 0..5 {
            let mut row = [0u64; 5];
            row.copy_from_slice(&state[5 * y..5 * y + 5]);
            for x in 0..5 {
                state[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // ι
        state[0] ^= rc;
    }
}

// ──────────────────────────────── sponge ──────────────────────────────────

/// A Keccak sponge session with rate `RATE` bytes and domain-separation
/// suffix `DELIM`.
///
/// While absorbing, `buffer` holds a partial input block of `pos` bytes.
/// While squeezing, `buffer` holds the current output block of which `pos`
/// bytes have been handed out. State and buffer are wiped on drop.
#[derive(Clone)]
pub struct KeccakSponge<const RATE: usize, const DELIM: u8> {
    state: [u64; KECCAK_STATE_LANES],
    buffer: SecretBuffer<RATE>,
    pos: usize,
    squeezing: bool,
}

/// SHAKE128 sponge, used as the matrix-expansion XOF.
pub type Shake128Sponge = KeccakSponge<SHAKE128_RATE, SHAKE_DELIMITER>;

/// SHAKE256 sponge, used as the noise PRF and rejection-key derivation.
pub type Shake256Sponge = KeccakSponge<SHAKE256_RATE, SHAKE_DELIMITER>;

impl<const RATE: usize, const DELIM: u8> KeccakSponge<RATE, DELIM> {
    const RATE_IS_LANE_ALIGNED: () = assert!(
        RATE % 8 == 0 && RATE > 0 && RATE < 8 * KECCAK_STATE_LANES,
        "sponge rate must be a whole number of lanes inside the state"
    );

    /// Rate of this sponge in bytes.
    pub const BLOCK_SIZE: usize = RATE;

    /// Create a sponge in the absorbing phase with an all-zero state.
    pub fn new() -> Self {
        let () = Self::RATE_IS_LANE_ALIGNED;
        Self {
            state: [0u64; KECCAK_STATE_LANES],
            buffer: SecretBuffer::zeroed(),
            pos: 0,
            squeezing: false,
        }
    }

    /// Whether the sponge has entered the squeezing phase.
    pub fn is_squeezing(&self) -> bool {
        self.squeezing
    }

    /// Absorb `data`. Fails once the sponge is squeezing.
    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        if self.squeezing {
            return Err(Error::xof_squeezing());
        }
        self.absorb_unchecked(data);
        Ok(())
    }

    /// Absorb the last piece of input, pad and switch to squeezing.
    ///
    /// Calling this on a sponge that is already squeezing does nothing.
    pub fn absorb_final(&mut self, data: &[u8]) {
        if self.squeezing {
            return;
        }
        self.absorb_unchecked(data);

        let buf = self.buffer.as_mut_slice();
        buf[self.pos..].fill(0);
        buf[self.pos] ^= DELIM;
        buf[RATE - 1] ^= PAD_LAST;
        xor_block(&mut self.state, buf);
        keccak_f1600(&mut self.state);

        self.squeezing = true;
        self.extract_block();
    }

    /// Write the next `out.len()` bytes of the output stream into `out`.
    ///
    /// Implicitly finalizes an absorbing sponge with no further input.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if !self.squeezing {
            self.absorb_final(&[]);
        }
        let mut written = 0;
        while written < out.len() {
            if self.pos == RATE {
                keccak_f1600(&mut self.state);
                self.extract_block();
            }
            let take = (RATE - self.pos).min(out.len() - written);
            out[written..written + take]
                .copy_from_slice(&self.buffer.as_slice()[self.pos..self.pos + take]);
            self.pos += take;
            written += take;
        }
    }

    /// Return to the initial absorbing state, wiping all secret material.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.pos = 0;
        self.squeezing = false;
        barrier::compiler_fence_seq_cst();
    }

    /// One-shot: absorb every piece of `inputs` in order and fill `out`.
    ///
    /// Taking the input in pieces lets callers hash `a ∥ b` without
    /// assembling the concatenation in a temporary buffer.
    pub fn digest(inputs: &[&[u8]], out: &mut [u8]) {
        let mut sponge = Self::new();
        for piece in inputs {
            sponge.absorb_unchecked(piece);
        }
        sponge.absorb_final(&[]);
        sponge.squeeze(out);
    }

    fn absorb_unchecked(&mut self, mut data: &[u8]) {
        if self.pos > 0 {
            let take = (RATE - self.pos).min(data.len());
            self.buffer.as_mut_slice()[self.pos..self.pos + take].copy_from_slice(&data[..take]);
            self.pos += take;
            data = &data[take..];
            if self.pos < RATE {
                return;
            }
            xor_block(&mut self.state, self.buffer.as_slice());
            keccak_f1600(&mut self.state);
            self.pos = 0;
        }

        let mut blocks = data.chunks_exact(RATE);
        for block in &mut blocks {
            xor_block(&mut self.state, block);
            keccak_f1600(&mut self.state);
        }

        let rest = blocks.remainder();
        self.buffer.as_mut_slice()[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    fn extract_block(&mut self) {
        let buf = self.buffer.as_mut_slice();
        for (lane, chunk) in self.state.iter().zip(buf.chunks_exact_mut(8)) {
            LittleEndian::write_u64(chunk, *lane);
        }
        self.pos = 0;
    }
}

impl<const RATE: usize, const DELIM: u8> Default for KeccakSponge<RATE, DELIM> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RATE: usize, const DELIM: u8> Zeroize for KeccakSponge<RATE, DELIM> {
    fn zeroize(&mut self) {
        self.reset();
    }
}

impl<const RATE: usize, const DELIM: u8> Drop for KeccakSponge<RATE, DELIM> {
    fn drop(&mut self) {
        self.state.zeroize();
        barrier::compiler_fence_seq_cst();
    }
}

impl<const RATE: usize, const DELIM: u8> core::fmt::Debug for KeccakSponge<RATE, DELIM> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakSponge")
            .field("rate", &RATE)
            .field("delimiter", &DELIM)
            .field("squeezing", &self.squeezing)
            .finish_non_exhaustive()
    }
}

/// XOR one rate-sized block into the leading lanes of the state.
#[inline(always)]
fn xor_block(state: &mut [u64; KECCAK_STATE_LANES], block: &[u8]) {
    for (lane, chunk) in state.iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= LittleEndian::read_u64(chunk);
    }
}
