use std::fmt;

/// Everything that can go wrong while constructing or driving a [`Cipher`](crate::Cipher).
///
/// All failures are synchronous and structural: there is no partial output
/// and nothing is recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `p` is not a valid modulus: either `p % 3 != 2` or `p < 2^16`.
    InvalidPrime,
    /// An input vector did not have the required length of 36 field elements.
    InvalidShape,
    /// The truncation width `m` exceeds the state width of 36.
    InvalidTruncation,
    /// [`Cipher::generate_keystream`](crate::Cipher::generate_keystream) or
    /// [`Cipher::generate_block`](crate::Cipher::generate_block) was called before
    /// [`Cipher::init`](crate::Cipher::init).
    NotInitialized,
    /// The underlying XOF failed to produce output. Expected never to occur
    /// under a correct host.
    XofFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrime => write!(f, "p must satisfy p % 3 == 2 and p >= 2^16"),
            Self::InvalidShape => write!(f, "expected a vector of exactly 36 field elements"),
            Self::InvalidTruncation => write!(f, "truncation width must be at most 36"),
            Self::NotInitialized => write!(f, "cipher must be initialized with init() first"),
            Self::XofFailure => write!(f, "XOF failed to produce the requested output"),
        }
    }
}

impl std::error::Error for Error {}
