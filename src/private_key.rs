//! Private key trait and the secp256k1 backend implementation.

use crate::error::Error;
use crate::public_key::PublicKey;
use crate::result::Result;
use crate::types::{KeyFingerprint, PrivateKeyBytes};

/// Key material usable on the private half of a derivation step.
///
/// The implementation supplies the group arithmetic: [`PrivateKey::derive_child`]
/// is the `(tweak + parent) mod n` combination with the curve order.
pub trait PrivateKey: Sized {
    /// Public key type corresponding to this private key.
    type PublicKey: PublicKey;

    /// Parse a private key from its 32-byte big-endian scalar encoding.
    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self>;

    /// Serialize the scalar as 32 big-endian bytes.
    fn to_bytes(&self) -> PrivateKeyBytes;

    /// Derive the child private key for the given 32-byte tweak.
    ///
    /// Fails with [`Error::InvalidDerivedKey`] if the tweak is not a scalar
    /// below the curve order, or if the resulting child scalar is zero.
    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self>;

    /// Public key corresponding to this private key.
    fn public_key(&self) -> Self::PublicKey;

    /// Fingerprint of the corresponding public key.
    fn fingerprint(&self) -> KeyFingerprint {
        self.public_key().fingerprint()
    }
}

impl PrivateKey for secp256k1::SecretKey {
    type PublicKey = secp256k1::PublicKey;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(secp256k1::SecretKey::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.secret_bytes()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        let tweak = secp256k1::Scalar::from_be_bytes(tweak).map_err(|_| Error::InvalidDerivedKey)?;
        self.add_tweak(&tweak).map_err(|_| Error::InvalidDerivedKey)
    }

    fn public_key(&self) -> Self::PublicKey {
        secp256k1::PublicKey::from_secret_key_global(self)
    }
}

#[cfg(test)]
mod tests {
    use super::PrivateKey;
    use crate::error::Error;
    use secp256k1::SecretKey;

    #[test]
    fn tweak_at_or_above_curve_order_is_rejected() {
        let key = SecretKey::from_slice(&[1u8; 32]).unwrap();

        // Exactly the secp256k1 group order n.
        let order: [u8; 32] = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xba, 0xae, 0xdc,
            0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
        ];
        assert!(matches!(key.derive_child(order), Err(Error::InvalidDerivedKey)));
        assert!(matches!(key.derive_child([0xff; 32]), Err(Error::InvalidDerivedKey)));
    }

    #[test]
    fn zero_child_scalar_is_rejected() {
        let key = SecretKey::from_slice(&[1u8; 32]).unwrap();

        // n - key yields a child scalar of exactly zero.
        let negated = key.negate().secret_bytes();
        assert!(matches!(key.derive_child(negated), Err(Error::InvalidDerivedKey)));
    }

    #[test]
    fn derived_key_is_consistent_with_its_public_key() {
        let key = SecretKey::from_slice(&[2u8; 32]).unwrap();
        let child = key.derive_child([3u8; 32]).unwrap();
        assert_eq!(PrivateKey::public_key(&child), secp256k1::PublicKey::from_secret_key_global(&child));
    }
}
