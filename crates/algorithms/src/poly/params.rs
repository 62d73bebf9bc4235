//! Ring parameters for `Z_q[X]/(X^N + 1)` with NTT support

use pqkem_params::pqc::mlkem::{MLKEM_N, MLKEM_Q};

/// Number of coefficients in every ring element handled by this module.
pub const N: usize = MLKEM_N;

/// Basic trait defining the modulus and degree for a polynomial ring
pub trait Modulus {
    /// The primary modulus Q for coefficient arithmetic
    const Q: i16;

    /// The polynomial degree N (number of coefficients)
    const N: usize;

    /// Multiplier `M` with `floor(x / 2Q) == (x * M) >> DIV_2Q_SHIFT`, so
    /// compression never divides. With `e = M·2Q - 2^DIV_2Q_SHIFT` the
    /// identity holds for every `x < 2^DIV_2Q_SHIFT / e`. For ML-KEM that is
    /// `2^37 / 3310 ≈ 4.15·10^7`, above the largest compression input
    /// `(Q - 1)·2^13 + Q = 27_266_305` (d = 12).
    const DIV_2Q_MUL: u64;

    /// Shift paired with [`Modulus::DIV_2Q_MUL`].
    const DIV_2Q_SHIFT: u32;
}

/// Extended trait for NTT-enabled moduli
pub trait NttModulus: Modulus {
    /// Primitive 256-th root of unity
    const ZETA: i16;

    /// Powers of `ZETA` in bit-reversed order, in Montgomery form, centered
    const ZETAS: [i16; 128];

    /// Montgomery parameter `R = 2^16 mod Q`, centered
    const MONT_R: i16;

    /// `R^2 mod Q`, used to move a value into the Montgomery domain
    const MONT_R2: i16;

    /// `Q^-1 mod 2^16`, signed
    const Q_INV: i16;

    /// Final inverse-NTT scale `R^2 / 128 mod Q`
    const INV_NTT_SCALE: i16;

    /// Barrett multiplier `round(2^26 / Q)`
    const BARRETT_V: i32;
}

/// The ML-KEM ring: q = 3329, n = 256.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MlKemModulus;

impl Modulus for MlKemModulus {
    const Q: i16 = MLKEM_Q as i16;
    const N: usize = MLKEM_N;
    const DIV_2Q_MUL: u64 = 0x013A_FB77;
    const DIV_2Q_SHIFT: u32 = 37;
}

impl NttModulus for MlKemModulus {
    const ZETA: i16 = 17;
    const ZETAS: [i16; 128] = [
        -1044, -758, -359, -1517, 1493, 1422, 287, 202, -171, 622, 1577, 182, 962, -1202, -1474,
        1468, 573, -1325, 264, 383, -829, 1458, -1602, -130, -681, 1017, 732, 608, -1542, 411,
        -205, -1571, 1223, 652, -552, 1015, -1293, 1491, -282, -1544, 516, -8, -320, -666, -1618,
        -1162, 126, 1469, -853, -90, -271, 830, 107, -1421, -247, -951, -398, 961, -1508, -725,
        448, -1065, 677, -1275, -1103, 430, 555, 843, -1251, 871, 1550, 105, 422, 587, 177, -235,
        -291, -460, 1574, 1653, -246, 778, 1159, -147, -777, 1483, -602, 1119, -1590, 644, -872,
        349, 418, 329, -156, -75, 817, 1097, 603, 610, 1322, -1285, -1465, 384, -1215, -136, 1218,
        -1335, -874, 220, -1187, -1659, -1185, -1530, -1278, 794, -1510, -854, -870, 478, -108,
        -308, 996, 991, 958, -1460, 1522, 1628,
    ];
    const MONT_R: i16 = -1044;
    const MONT_R2: i16 = 1353;
    const Q_INV: i16 = -3327;
    const INV_NTT_SCALE: i16 = 1441;
    const BARRETT_V: i32 = 20159;
}

const _: () = assert!(<MlKemModulus as Modulus>::N == N);

/// Check if a number is prime (trial division; parameters are small)
pub const fn is_prime(q: u32) -> bool {
    if q < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= q {
        if q % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
