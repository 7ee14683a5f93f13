//! The boundary this crate expects of an FHE backend.
//!
//! Transciphering wraps keystream elements as ciphertexts under a BGV- or
//! BFV-style scheme and evaluates decryption homomorphically. None of that
//! is implemented here: `FheBackend` exists only so a downstream crate has a
//! contract to implement against. The cipher core above is entirely
//! oblivious to whether its field elements are plaintext or wrapped in
//! `Ciphertext`.

use crate::field::FieldElement;

/// A homomorphic-encryption backend capable of encrypting, decrypting, and
/// homomorphically combining vectors of field elements.
///
/// This trait is a specification of the boundary only: this crate does not
/// ship a BGV or BFV implementation.
pub trait FheBackend {
    type Ciphertext;

    /// Encrypt a vector of field elements.
    fn encrypt(&self, values: &[FieldElement]) -> Self::Ciphertext;

    /// Decrypt a ciphertext back into field elements.
    fn decrypt(&self, ciphertext: &Self::Ciphertext) -> Vec<FieldElement>;

    /// Homomorphically multiply two ciphertexts, relinearizing the result.
    fn mul(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Self::Ciphertext;

    /// Homomorphically add two ciphertexts.
    fn add(&self, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Self::Ciphertext;
}
