use crate::{error::Error, field::FieldElement, linear::STATE_SIZE};

/// The 36-element master key. Immutable after [`Cipher::init`](crate::Cipher::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterKey(pub [FieldElement; STATE_SIZE]);

impl MasterKey {
    pub fn from_slice(elements: &[FieldElement]) -> Result<Self, Error> {
        Ok(Self(elements.try_into().map_err(|_| Error::InvalidShape)?))
    }
}

/// An arbitrary-length nonce. Implementations must accept at least 16 bytes;
/// callers must never reuse a nonce for a different keystream under the same
/// key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce(pub Vec<u8>);

impl Nonce {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}
