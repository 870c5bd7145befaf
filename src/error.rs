//! Error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Hardened derivation was requested from a public-only extended key.
    ///
    /// Not retryable: hardened steps are only defined for private keys, so
    /// the request itself must change.
    #[error("hardened derivation requires the parent private key")]
    InvalidDerivationRequest,

    /// The derived key fell outside the valid domain: the HMAC left half was
    /// at least the curve order, the child scalar was zero, or the child
    /// point was the point at infinity.
    ///
    /// The caller may retry the derivation with the next sequential index;
    /// this crate never retries internally.
    #[error("derived child key is invalid for this index")]
    InvalidDerivedKey,

    /// The HMAC primitive could not be initialized. Unrecoverable.
    #[error("cryptographic backend failure: {0}")]
    CryptoBackendFailure(#[from] hmac::digest::InvalidLength),

    /// secp256k1 backend errors while decoding key material.
    #[error("secp256k1 error: {0}")]
    Crypto(#[from] secp256k1::Error),

    /// Base58 encoding errors.
    #[error("base58 encode error: {0}")]
    Base58Encode(#[from] bs58::encode::Error),

    /// Base58 decoding errors.
    #[error("base58 decode error: {0}")]
    Base58Decode(#[from] bs58::decode::Error),

    /// Decoded extended key had the wrong length.
    #[error("decoded extended key is {0} bytes, expected {1}")]
    DecodeLength(usize, usize),

    /// Decoding errors not related to Base58.
    #[error("decoding error")]
    Decode,

    /// Unknown or mismatched extended key prefix.
    #[error("invalid extended key prefix")]
    Prefix,

    /// Maximum derivation depth exceeded.
    #[error("maximum derivation depth exceeded")]
    Depth,

    /// Seed length invalid.
    #[error("seed length must be 16, 32 or 64 bytes")]
    SeedLength,

    /// Child number out of range or unparseable.
    #[error("invalid child number")]
    ChildNumber,

    #[error("{0}")]
    String(String),

    #[error(transparent)]
    Utf8(#[from] core::str::Utf8Error),
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Decode
    }
}
