//! BIP32 hierarchical deterministic key derivation.
//!
//! Derives child key pairs from a master seed: extended private keys can
//! derive any descendant, extended public keys can derive non-hardened
//! public descendants without ever touching private material, and hardened
//! steps deliberately break public derivation to contain key compromise.
//!
//! Derivation never mutates a parent key and never retries an index: an
//! invalid derived key (a vanishingly rare event) surfaces as
//! [`Error::InvalidDerivedKey`] and the caller decides whether to move on to
//! the next index.
//!
//! ```
//! use hd_keys::{DerivationPath, Prefix, XPrv};
//!
//! let path: DerivationPath = "m/44'/0'/0'/0/0".parse()?;
//! let root = XPrv::new([0x01u8; 32])?;
//! let child = root.derive_path(&path)?;
//! let xpub = child.public_key().to_string(Some(Prefix::XPub));
//! # Ok::<(), hd_keys::Error>(())
//! ```

use zeroize::Zeroizing;

pub use secp256k1;
pub use secp256k1::SecretKey;

mod address_type;
mod attrs;
mod child_number;
mod ckd;
mod derivation_path;
mod error;
mod prefix;
mod private_key;
mod public_key;
mod result;
pub mod types;
mod xkey;
mod xprivate_key;
mod xpublic_key;

pub use address_type::AddressType;
pub use attrs::ExtendedKeyAttrs;
pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use error::Error;
pub use prefix::Prefix;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use result::Result;
pub use types::*;
pub use xkey::ExtendedKey;
pub use xprivate_key::ExtendedPrivateKey;
pub use xpublic_key::ExtendedPublicKey;

/// Extended private key backed by secp256k1.
pub type XPrv = ExtendedPrivateKey<secp256k1::SecretKey>;

/// Extended public key backed by secp256k1.
pub type XPub = ExtendedPublicKey<secp256k1::PublicKey>;

/// Convenience operations on raw secp256k1 secret keys.
pub trait SecretKeyExt {
    /// Public key for this secret key, using the global verification context.
    fn get_public_key(&self) -> secp256k1::PublicKey;

    /// Render the key as a Base58 extended private key string.
    fn as_str(&self, attrs: ExtendedKeyAttrs, prefix: Prefix) -> Zeroizing<String>;
}

impl SecretKeyExt for secp256k1::SecretKey {
    fn get_public_key(&self) -> secp256k1::PublicKey {
        secp256k1::PublicKey::from_secret_key_global(self)
    }

    fn as_str(&self, attrs: ExtendedKeyAttrs, prefix: Prefix) -> Zeroizing<String> {
        // Add leading `0` byte
        let mut key_bytes = [0u8; KEY_SIZE + 1];
        key_bytes[1..].copy_from_slice(&self.secret_bytes());

        let key = ExtendedKey { prefix, attrs, key_bytes };

        Zeroizing::new(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_ext_matches_extended_key_rendering() {
        let root = XPrv::new([0x42u8; 32]).unwrap();

        let rendered = root.private_key().as_str(root.attrs().clone(), Prefix::XPrv);
        assert_eq!(rendered.as_str(), root.to_string(Prefix::XPrv).as_str());

        assert_eq!(root.private_key().get_public_key(), *root.public_key().public_key());
    }
}
