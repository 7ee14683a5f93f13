//! The keystream engine: per-block counter injection, whitening, the R
//! rounds of substitution-then-diffusion, a final diffusion layer, and
//! truncation.
//!
//! This plays the role `cipher/block/modes/ctr.rs`'s `keystream()` plays for
//! AES, deriving an unbounded keystream from a block primitive driven by a
//! counter, except here the "block cipher" is the S-box/linear-layer round
//! function rather than AES, and the counter feeds an algebraic whitening
//! step instead of an encrypted counter block.

use crate::{
    error::Error,
    field::FieldElement,
    key::{MasterKey, Nonce},
    linear::{self, STATE_SIZE},
    schedule,
    sbox::Sbox,
};

/// Security level, determining the number of full rounds `R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    Sec80,
    Sec128,
}

impl SecurityLevel {
    /// Number of full rounds for this level: 5 for SEC80, 6 for SEC128.
    pub fn rounds(self) -> u32 {
        match self {
            Self::Sec80 => 5,
            Self::Sec128 => 6,
        }
    }
}

/// A QPSC cipher instance, configured with a fixed prime, security level,
/// and truncation width, and then driven by a master key and nonce.
pub struct Cipher {
    p: u64,
    level: SecurityLevel,
    truncation: usize,
    sbox: Sbox,
    key: Option<MasterKey>,
    nonce: Option<Nonce>,
    counter: u32,
}

impl Cipher {
    /// Construct a cipher for modulus `p`, security level `level`, and
    /// truncation width `m`. Fails if `p` doesn't satisfy the modulus
    /// predicate (`p % 3 == 2`, `p >= 2^16`) or if `m > 36`; primality of `p`
    /// is the caller's responsibility.
    pub fn new(p: u64, level: SecurityLevel, m: usize) -> Result<Self, Error> {
        if m > STATE_SIZE {
            return Err(Error::InvalidTruncation);
        }
        let sbox = Sbox::new(p).ok_or(Error::InvalidPrime)?;
        Ok(Self {
            p,
            level,
            truncation: m,
            sbox,
            key: None,
            nonce: None,
            counter: 0,
        })
    }

    /// Install the master key and nonce, and reset the internal block
    /// counter to zero.
    pub fn init(&mut self, key: MasterKey, nonce: Nonce) -> Result<(), Error> {
        self.key = Some(key);
        self.nonce = Some(nonce);
        self.counter = 0;
        Ok(())
    }

    /// Emit `n * (36 - m)` keystream field elements, continuing from the
    /// internal block counter and advancing it by `n` once all `n` blocks
    /// have been produced.
    pub fn generate_keystream(&mut self, n: u32) -> Result<Vec<FieldElement>, Error> {
        if self.key.is_none() || self.nonce.is_none() {
            return Err(Error::NotInitialized);
        }

        let mut out = Vec::with_capacity(n as usize * (STATE_SIZE - self.truncation));
        for offset in 0..n {
            out.extend_from_slice(&self.generate_block(self.counter + offset)?);
        }
        self.counter = self.counter.wrapping_add(n);
        Ok(out)
    }

    /// Run the per-block algorithm for explicit block index `j`, independent
    /// of the instance's internal counter. Pure function of `(K, N, j)` once
    /// [`Cipher::init`] has fixed `K` and `N`.
    pub fn generate_block(&self, j: u32) -> Result<Vec<FieldElement>, Error> {
        let key = self.key.as_ref().ok_or(Error::NotInitialized)?;
        let nonce = self.nonce.as_ref().ok_or(Error::NotInitialized)?;
        let p = self.p;
        let rounds = self.level.rounds();

        // Counter vector: CV_j[i] = ((i + 1) + j) mod p.
        let mut state = [FieldElement::ZERO; STATE_SIZE];
        for (i, elem) in state.iter_mut().enumerate() {
            *elem = FieldElement((i as u64 + 1 + u64::from(j)) % p);
        }

        // Whitening.
        let rc0 = schedule::round_constant(&nonce.0, j, 0, p);
        let rk0 = schedule::round_key(&key.0, &rc0, p);
        state = schedule::add_round_key(&state, &rk0, p);

        // R full rounds.
        for r in 1..=rounds {
            let rc = schedule::round_constant(&nonce.0, j, r, p);
            let rk = schedule::round_key(&key.0, &rc, p);
            state = sbox_layer(&self.sbox, &state);
            state = linear::apply(&state, p);
            state = schedule::add_round_key(&state, &rk, p);
        }

        // Final diffusion.
        state = linear::apply(&state, p);

        Ok(state[self.truncation..].to_vec())
    }
}

/// Partition the state into 12 consecutive triples and apply the S-box to
/// each independently. The 12 evaluations don't depend on each other, so in
/// principle they can run in parallel (see the concurrency model).
fn sbox_layer(sbox: &Sbox, state: &[FieldElement; STATE_SIZE]) -> [FieldElement; STATE_SIZE] {
    let mut out = [FieldElement::ZERO; STATE_SIZE];
    for triple in 0..STATE_SIZE / 3 {
        let base = triple * 3;
        let y = sbox.apply([state[base], state[base + 1], state[base + 2]]);
        out[base] = y[0];
        out[base + 1] = y[1];
        out[base + 2] = y[2];
    }
    out
}
