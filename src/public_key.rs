//! Public key trait and the secp256k1 backend implementation.

use crate::error::Error;
use crate::result::Result;
use crate::types::{KeyFingerprint, PrivateKeyBytes, PublicKeyBytes};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Key material usable on the public half of a derivation step.
pub trait PublicKey: Sized {
    /// Parse a public key from its compressed SEC1 encoding.
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self>;

    /// Serialize as compressed SEC1: tag byte plus x-coordinate.
    fn to_bytes(&self) -> PublicKeyBytes;

    /// Derive the child public key `tweak * G + self` using curve-group
    /// point addition.
    ///
    /// Fails with [`Error::InvalidDerivedKey`] if the tweak is not a scalar
    /// below the curve order, or if the sum is the point at infinity.
    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self>;

    /// Compute the 4-byte fingerprint of this key: the leading bytes of
    /// `RIPEMD160(SHA256(compressed_key))`.
    fn fingerprint(&self) -> KeyFingerprint {
        let digest = Ripemd160::digest(Sha256::digest(self.to_bytes()));
        [digest[0], digest[1], digest[2], digest[3]]
    }
}

impl PublicKey for secp256k1::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        Ok(secp256k1::PublicKey::from_slice(&bytes)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.serialize()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        let tweak = secp256k1::Scalar::from_be_bytes(tweak).map_err(|_| Error::InvalidDerivedKey)?;
        self.add_exp_tweak(secp256k1::SECP256K1, &tweak).map_err(|_| Error::InvalidDerivedKey)
    }
}
