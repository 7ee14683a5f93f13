//! Round-constant and round-key derivation.
//!
//! Round constants are drawn from [`xof::shake128`](crate::xof::shake128)
//! bound to `(nonce, block index, round index)`; round keys fold the master
//! key into a round constant element-wise. This plays the same role as
//! AES's `RCON` table and key schedule in `cipher/block/aes.rs`, except the
//! constants here are derived on demand from an XOF rather than taken from a
//! fixed table, since the round constants must vary per nonce and per block.

use crate::{field::FieldElement, linear::STATE_SIZE, xof};

/// Derive the 36 round-constant elements for block `j`, round `r`, under
/// nonce `nonce` and modulus `p`.
///
/// Input to the XOF is `nonce || j as little-endian u32 || r as
/// little-endian u32`; the 288-byte output is consumed as 36 consecutive
/// big-endian 64-bit integers, each reduced mod `p` and bumped to 1 if the
/// reduction lands on zero, per §6.2.
pub fn round_constant(nonce: &[u8], j: u32, r: u32, p: u64) -> [FieldElement; STATE_SIZE] {
    let mut input = Vec::with_capacity(nonce.len() + 8);
    input.extend_from_slice(nonce);
    input.extend_from_slice(&j.to_le_bytes());
    input.extend_from_slice(&r.to_le_bytes());

    let out = xof::shake128(&input, STATE_SIZE * 8);

    let mut rc = [FieldElement::ZERO; STATE_SIZE];
    for (k, elem) in rc.iter_mut().enumerate() {
        let bytes: [u8; 8] = out[8 * k..8 * k + 8].try_into().unwrap();
        let reduced = FieldElement::from_be_bytes_mod(bytes, p);
        *elem = if reduced == FieldElement::ZERO {
            FieldElement::ONE
        } else {
            reduced
        };
    }
    rc
}

/// Derive the round key from the master key and a round constant:
/// `rk_i = K_i * rc_i mod p`.
pub fn round_key(
    key: &[FieldElement; STATE_SIZE],
    rc: &[FieldElement; STATE_SIZE],
    p: u64,
) -> [FieldElement; STATE_SIZE] {
    let mut rk = [FieldElement::ZERO; STATE_SIZE];
    for i in 0..STATE_SIZE {
        rk[i] = key[i].mul(rc[i], p);
    }
    rk
}

/// Add a round key into `state` element-wise, mod `p`.
pub fn add_round_key(
    state: &[FieldElement; STATE_SIZE],
    rk: &[FieldElement; STATE_SIZE],
    p: u64,
) -> [FieldElement; STATE_SIZE] {
    let mut out = [FieldElement::ZERO; STATE_SIZE];
    for i in 0..STATE_SIZE {
        out[i] = state[i].add(rk[i], p);
    }
    out
}

