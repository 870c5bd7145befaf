//! Extended public keys.

use core::str::FromStr;
use hmac::Mac;

use crate::attrs::ExtendedKeyAttrs;
use crate::child_number::ChildNumber;
use crate::ckd;
use crate::derivation_path::DerivationPath;
use crate::error::Error;
use crate::prefix::Prefix;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;
use crate::result::Result;
use crate::types::{HmacSha512, KeyFingerprint, PublicKeyBytes, KEY_SIZE};
use crate::xkey::ExtendedKey;
use crate::xprivate_key::ExtendedPrivateKey;

/// Extended public key: a public key plus the chain code and attributes
/// needed to derive non-hardened children without any private material.
///
/// Generic around a [`PublicKey`] type supplying the curve arithmetic.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct ExtendedPublicKey<K: PublicKey> {
    /// Derived public key
    public_key: K,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl<K> ExtendedPublicKey<K>
where
    K: PublicKey,
{
    /// Obtain the non-extended public key value `K`.
    pub fn public_key(&self) -> &K {
        &self.public_key
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Compute a 4-byte key fingerprint for this extended public key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.public_key().fingerprint()
    }

    /// Derive a child key for a particular [`ChildNumber`].
    ///
    /// Hardened child numbers are rejected with
    /// [`Error::InvalidDerivationRequest`]: hardened derivation is only
    /// defined for private extended keys.
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        if child_number.is_hardened() {
            return Err(Error::InvalidDerivationRequest);
        }

        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;

        let mut hmac = HmacSha512::new_from_slice(&self.attrs.chain_code)?;
        hmac.update(&ckd::normal_payload(&self.public_key.to_bytes(), child_number));

        let result = hmac.finalize().into_bytes();
        let (tweak, chain_code) = result.split_at(KEY_SIZE);
        let public_key = self.public_key.derive_child(tweak.try_into()?)?;

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: self.public_key.fingerprint(),
            child_number,
            chain_code: chain_code.try_into()?,
            depth,
        };

        Ok(ExtendedPublicKey { public_key, attrs })
    }

    /// Derive the key at `path`, applying [`Self::derive_child`] once per
    /// element in order.
    ///
    /// Fails on the first failing step; an empty path returns the key
    /// unchanged.
    pub fn derive_path(self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self, |key, child_number| key.derive_child(child_number))
    }

    /// Serialize the raw public key as a byte array (compressed SEC1).
    pub fn to_bytes(&self) -> PublicKeyBytes {
        self.public_key.to_bytes()
    }

    /// Serialize this key as an [`ExtendedKey`].
    pub fn to_extended_key(&self, prefix: Prefix) -> ExtendedKey {
        ExtendedKey { prefix, attrs: self.attrs.clone(), key_bytes: self.to_bytes() }
    }

    pub fn to_string(&self, prefix: Option<Prefix>) -> String {
        let prefix = prefix.unwrap_or(Prefix::XPub);
        self.to_extended_key(prefix).to_string()
    }

    pub fn from_public_key(public_key: K, attrs: &ExtendedKeyAttrs) -> Self {
        ExtendedPublicKey { public_key, attrs: attrs.clone() }
    }
}

impl<K> From<&ExtendedPrivateKey<K>> for ExtendedPublicKey<K::PublicKey>
where
    K: PrivateKey,
{
    fn from(xprv: &ExtendedPrivateKey<K>) -> ExtendedPublicKey<K::PublicKey> {
        ExtendedPublicKey { public_key: xprv.private_key().public_key(), attrs: xprv.attrs().clone() }
    }
}

impl<K> FromStr for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Err = Error;

    fn from_str(xpub: &str) -> Result<Self> {
        ExtendedKey::from_str(xpub)?.try_into()
    }
}

impl<K> TryFrom<ExtendedKey> for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Error = Error;

    fn try_from(extended_key: ExtendedKey) -> Result<ExtendedPublicKey<K>> {
        if !extended_key.prefix.is_public() {
            return Err(Error::Prefix);
        }

        Ok(ExtendedPublicKey { public_key: K::from_bytes(extended_key.key_bytes)?, attrs: extended_key.attrs.clone() })
    }
}
