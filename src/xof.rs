//! SHAKE128, the extendable-output function (XOF) the round schedule binds
//! to arbitrary byte strings.
//!
//! This is built on the same Keccak-`p[1600,24]` permutation used for the
//! fixed-digest SHA3 family elsewhere in this lineage
//! ([`hash::sha3`](https://lib.rs/crates/literate-crypto)): `theta`, `rho`,
//! `pi`, `chi`, `iota` in turn, 24 rounds, operating on a 5x5 array of
//! `u64`s. SHAKE128 differs from SHA3-*/256 only in its rate (168 bytes
//! instead of 136/104/etc.), its domain separation suffix (`1111` instead of
//! `01`), and in that it may need to run the permutation more than once
//! during the squeeze phase to produce more output than fits in one rate's
//! worth of state.

use {crate::util::IterChunks, std::iter};

const NUM_ROWS: usize = 5;
const NUM_COLS: usize = 5;
const NUM_ROUNDS: usize = 24;

/// SHAKE128's rate in bytes: `1600 - 2*128` bits of capacity, i.e. `(1600 -
/// 256) / 8`.
const RATE: usize = 168;

/// SHAKE's domain separation suffix, appended to the message before the
/// `pad10*1` padding. SHA3 uses `01`; SHAKE uses `1111`.
const SHAKE_DOMAIN: u8 = 0b0001_1111;

type State = [[u64; NUM_COLS]; NUM_ROWS];

const RHO_OFFSETS: [[u32; NUM_COLS]; NUM_ROWS] = [
    [0, 1, 190, 28, 91],
    [36, 300, 6, 55, 276],
    [3, 10, 171, 153, 231],
    [105, 45, 15, 21, 136],
    [210, 66, 253, 120, 78],
];

const RC: [u64; NUM_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Compute SHAKE128(`input`, `output_len` bytes).
///
/// Absorbs `input` a `RATE`-byte block at a time, then squeezes
/// `output_len` bytes out, running the permutation again between squeezes
/// whenever more than one rate's worth of output is requested.
pub fn shake128(input: &[u8], output_len: usize) -> Vec<u8> {
    let mut state = State::default();

    for block in pad10star1(input) {
        absorb(&mut state, &block);
        keccak_p(&mut state);
    }

    let mut output = Vec::with_capacity(output_len);
    loop {
        let bytes = squeeze(&state);
        let take = (output_len - output.len()).min(RATE);
        output.extend_from_slice(&bytes[..take]);
        if output.len() == output_len {
            break;
        }
        keccak_p(&mut state);
    }
    output
}

fn absorb(state: &mut State, block: &[u8; RATE]) {
    block
        .iter()
        .copied()
        .chain(iter::repeat(0))
        .chunks::<8>()
        .zip(state.iter_mut().flatten())
        .for_each(|(b, r)| *r ^= u64::from_le_bytes(b));
}

fn squeeze(state: &State) -> [u8; RATE] {
    let mut out = [0u8; RATE];
    state
        .iter()
        .flatten()
        .flat_map(|w| w.to_le_bytes())
        .zip(out.iter_mut())
        .for_each(|(s, r)| *r = s);
    out
}

fn keccak_p(state: &mut State) {
    for ir in 0..NUM_ROUNDS {
        theta(state);
        rho(state);
        pi(state);
        chi(state);
        iota(state, ir);
    }
}

#[allow(clippy::needless_range_loop)]
fn theta(state: &mut State) {
    let mut c = [0u64; NUM_COLS];
    for y in 0..NUM_ROWS {
        for x in 0..NUM_COLS {
            c[x] ^= state[y][x];
        }
    }

    for y in 0..NUM_ROWS {
        for x in 0..NUM_COLS {
            state[y][x] ^= c[if x == 0 { NUM_COLS - 1 } else { x - 1 }];
            state[y][x] ^= c[(x + 1) % NUM_COLS].rotate_left(1);
        }
    }
}

#[allow(clippy::needless_range_loop)]
fn rho(state: &mut State) {
    for y in 0..NUM_ROWS {
        for x in 0..NUM_COLS {
            state[y][x] = state[y][x].rotate_left(RHO_OFFSETS[y][x]);
        }
    }
}

#[allow(clippy::needless_range_loop)]
fn pi(state: &mut State) {
    let copy = *state;
    for y in 0..NUM_ROWS {
        for x in 0..NUM_COLS {
            state[y][x] = copy[x][(x + 3 * y) % NUM_COLS];
        }
    }
}

#[allow(clippy::needless_range_loop)]
fn chi(state: &mut State) {
    let copy = *state;
    for y in 0..NUM_ROWS {
        for x in 0..NUM_COLS {
            state[y][x] = copy[y][x] ^ (!copy[y][(x + 1) % NUM_ROWS] & copy[y][(x + 2) % NUM_ROWS]);
        }
    }
}

fn iota(state: &mut State, ir: usize) {
    state[0][0] ^= RC[ir];
}

/// Pad `data` into `RATE`-sized blocks using SHAKE's `pad10*1` scheme: the
/// domain separator bits are appended right after the message, then zero or
/// more zero bytes, then a final `1` bit to close the padding.
fn pad10star1(data: &[u8]) -> Box<dyn Iterator<Item = [u8; RATE]> + '_> {
    if data.len() % RATE == 0 {
        let mut padding = [0; RATE];
        padding[0] = SHAKE_DOMAIN;
        padding[RATE - 1] = 0b1000_0000;
        return Box::new(
            data.chunks(RATE)
                .map(|block| block.try_into().unwrap())
                .chain(iter::once(padding)),
        );
    }

    Box::new(data.chunks(RATE).map(|block| {
        if block.len() == RATE {
            block.try_into().unwrap()
        } else {
            let mut padded = [0; RATE];
            block
                .iter()
                .copied()
                .chain(iter::repeat(0))
                .zip(padded.iter_mut())
                .enumerate()
                .for_each(|(i, (mut b, r))| {
                    if i == block.len() {
                        b |= SHAKE_DOMAIN;
                    }
                    if i == RATE - 1 {
                        b |= 0b1000_0000;
                    }
                    *r = b;
                });
            padded
        }
    }))
}
