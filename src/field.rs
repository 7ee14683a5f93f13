//! Arithmetic over F_p, the prime field the whole cipher is built on.
//!
//! Unlike [`pubkey::secp256k1`](https://lib.rs/crates/literate-crypto)-style
//! fields in sibling crates, `p` here is not a compile-time constant: a
//! cipher instance picks its own prime at construction, so every operation
//! takes `p` as a runtime parameter, the same way
//! `secp256k1::modular::Num::add(&self, n, p)` does. The useful range for `p`
//! is 17 to 64 bits (see the data model), so a single `u64` limb with a
//! `u128` double-width intermediate is enough; there's no need for a
//! multi-limb bignum.

/// An element of F_p, i.e. an integer known to lie in `[0, p)` for whichever
/// modulus the caller is working with.
///
/// `FieldElement` does not carry `p` itself, it's just a `u64` with a name,
/// so every arithmetic method takes `p` explicitly, exactly like
/// `secp256k1::modular::Num`'s modulus-parameterized methods.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(pub u64);

impl FieldElement {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    /// Modular addition. Widens to `u128` before reducing: two operands each
    /// up to `p - 1` can sum past `u64::MAX` for primes near the top of the
    /// field's 64-bit range.
    #[must_use]
    pub fn add(self, rhs: Self, p: u64) -> Self {
        let sum = u128::from(self.0 % p) + u128::from(rhs.0 % p);
        Self((sum % u128::from(p)) as u64)
    }

    /// Modular subtraction, canonicalizing negative intermediates back into
    /// `[0, p)`.
    #[must_use]
    pub fn sub(self, rhs: Self, p: u64) -> Self {
        let a = self.0 % p;
        let b = rhs.0 % p;
        Self(if a >= b { a - b } else { p - (b - a) })
    }

    /// Modular negation, i.e. `p - self` reduced into `[0, p)` (zero negates
    /// to zero).
    #[must_use]
    pub fn neg(self, p: u64) -> Self {
        Self::ZERO.sub(self, p)
    }

    /// Modular multiplication. Widens to `u128` to hold the full product
    /// before reducing, since two `u64`s can overflow a `u64` product.
    #[must_use]
    pub fn mul(self, rhs: Self, p: u64) -> Self {
        let prod = u128::from(self.0 % p) * u128::from(rhs.0 % p);
        Self((prod % u128::from(p)) as u64)
    }

    /// Reduce to the canonical representative in `[0, p)`.
    #[must_use]
    pub fn canonical(self, p: u64) -> Self {
        Self(self.0 % p)
    }

    /// Big-endian, most-significant-byte-first encoding.
    pub fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Decode a big-endian 64-bit unsigned integer from `bytes` and reduce it
    /// mod `p`. `bytes` must be exactly 8 bytes; this is the XOF-output
    /// reduction step used by the round-constant schedule.
    pub fn from_be_bytes_mod(bytes: [u8; 8], p: u64) -> Self {
        Self(u64::from_be_bytes(bytes) % p)
    }
}

/// Validate that `p` satisfies the modulus predicate the whole cipher relies
/// on: `p % 3 == 2` (making `x -> x^3` a bijection on F_p) and `p >= 2^16`.
/// Primality itself is the caller's responsibility, per the data model.
pub fn is_valid_modulus(p: u64) -> bool {
    p % 3 == 2 && p >= 1 << 16
}
