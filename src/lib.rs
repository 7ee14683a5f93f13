//! QPSC: the keystream-generation core of a symmetric stream cipher designed
//! to be evaluated efficiently under fully homomorphic encryption.
//!
//! The cipher operates over a prime field F_p with `p ≡ 2 (mod 3)` and `p >
//! 2^16`, combining a cubic quadratic S-box ([`sbox`]) with a fixed binary
//! diffusion matrix ([`linear`]) under a key schedule driven by a SHAKE128
//! extendable-output function ([`xof`]). [`Cipher`] ties these together into
//! the block-indexed keystream construction.
//!
//! Authenticated encryption, key exchange, and side-channel resistance are
//! explicitly out of scope; so is the FHE backend that would consume this
//! keystream for transciphering ([`fhe`] specifies only the boundary it must
//! satisfy).

#[cfg(test)]
mod test;

mod cipher;
mod error;
mod fhe;
mod field;
mod key;
mod linear;
mod sbox;
mod schedule;
mod util;
mod xof;

pub use {
    cipher::{Cipher, SecurityLevel},
    error::Error,
    field::FieldElement,
    fhe::FheBackend,
    key::{MasterKey, Nonce},
    linear::STATE_SIZE,
    sbox::Sbox,
};
