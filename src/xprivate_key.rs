//! Extended private keys.

use core::fmt::{self, Debug};
use core::str::FromStr;
use hmac::Mac;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use crate::attrs::ExtendedKeyAttrs;
use crate::child_number::ChildNumber;
use crate::ckd;
use crate::derivation_path::DerivationPath;
use crate::error::Error;
use crate::prefix::Prefix;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;
use crate::result::Result;
use crate::types::{Depth, HmacSha512, KeyFingerprint, PrivateKeyBytes, KEY_SIZE};
use crate::xkey::ExtendedKey;
use crate::xpublic_key::ExtendedPublicKey;

/// HMAC key for deriving the root key from a seed, per the standard.
const MASTER_KEY_DOMAIN: &[u8; 12] = b"Bitcoin seed";

/// Extended private key: a private key plus the chain code and attributes
/// needed to derive children.
///
/// Generic around a [`PrivateKey`] type supplying the curve arithmetic.
#[derive(Clone)]
pub struct ExtendedPrivateKey<K: PrivateKey> {
    /// Derived private key
    private_key: K,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl<K> ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    /// Maximum derivation depth.
    pub const MAX_DEPTH: Depth = u8::MAX;

    /// Create the root extended key for the given seed value.
    ///
    /// The root has depth 0, a zero parent fingerprint and child number 0.
    pub fn new<S>(seed: S) -> Result<Self>
    where
        S: AsRef<[u8]>,
    {
        if ![16, 32, 64].contains(&seed.as_ref().len()) {
            return Err(Error::SeedLength);
        }

        let mut hmac = HmacSha512::new_from_slice(MASTER_KEY_DOMAIN)?;
        hmac.update(seed.as_ref());

        let result = hmac.finalize().into_bytes();
        let (secret_key, chain_code) = result.split_at(KEY_SIZE);
        let private_key = K::from_bytes(&secret_key.try_into()?)?;
        let attrs = ExtendedKeyAttrs {
            depth: 0,
            parent_fingerprint: KeyFingerprint::default(),
            child_number: ChildNumber::default(),
            chain_code: chain_code.try_into()?,
        };

        Ok(ExtendedPrivateKey { private_key, attrs })
    }

    /// Derive a child key for a particular [`ChildNumber`].
    ///
    /// The parent is read-only throughout; a new key is returned, tagged
    /// with this parent's fingerprint and an incremented depth.
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;

        let mut hmac = HmacSha512::new_from_slice(&self.attrs.chain_code)?;

        if child_number.is_hardened() {
            let mut scalar = self.private_key.to_bytes();
            let mut payload = ckd::hardened_payload(&scalar, child_number);
            hmac.update(&payload);
            payload.zeroize();
            scalar.zeroize();
        } else {
            hmac.update(&ckd::normal_payload(&self.private_key.public_key().to_bytes(), child_number));
        }

        let result = hmac.finalize().into_bytes();
        let (tweak, chain_code) = result.split_at(KEY_SIZE);

        // A tweak of at least the curve order, or a child scalar of zero, is
        // surfaced as InvalidDerivedKey rather than skipped: per "Child key
        // derivation (CKD) functions":
        // https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki#child-key-derivation-ckd-functions
        //
        // > "Note: this has probability lower than 1 in 2^127."
        //
        // ...the caller's remedy is to retry with the next index.
        let private_key = self.private_key.derive_child(tweak.try_into()?)?;

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: self.private_key.fingerprint(),
            child_number,
            chain_code: chain_code.try_into()?,
            depth,
        };

        Ok(ExtendedPrivateKey { private_key, attrs })
    }

    /// Derive the key at `path`, applying [`Self::derive_child`] once per
    /// element in order, each step's output feeding the next.
    ///
    /// Fails on the first failing step; an empty path returns the key
    /// unchanged.
    pub fn derive_path(self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self, |key, child_number| key.derive_child(child_number))
    }

    /// Borrow the derived private key value.
    pub fn private_key(&self) -> &K {
        &self.private_key
    }

    /// The corresponding extended public key.
    pub fn public_key(&self) -> ExtendedPublicKey<K::PublicKey> {
        self.into()
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Serialize the raw private key as a byte array.
    pub fn to_bytes(&self) -> PrivateKeyBytes {
        self.private_key.to_bytes()
    }

    /// Serialize this key as an [`ExtendedKey`].
    pub fn to_extended_key(&self, prefix: Prefix) -> ExtendedKey {
        // Add leading `0` byte
        let mut key_bytes = [0u8; KEY_SIZE + 1];
        key_bytes[1..].copy_from_slice(&self.to_bytes());

        ExtendedKey { prefix, attrs: self.attrs.clone(), key_bytes }
    }

    pub fn to_string(&self, prefix: Prefix) -> Zeroizing<String> {
        Zeroizing::new(self.to_extended_key(prefix).to_string())
    }
}

impl<K> ConstantTimeEq for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut key_a = self.to_bytes();
        let mut key_b = other.to_bytes();

        let result = key_a.ct_eq(&key_b)
            & self.attrs.depth.ct_eq(&other.attrs.depth)
            & self.attrs.parent_fingerprint.ct_eq(&other.attrs.parent_fingerprint)
            & self.attrs.child_number.0.ct_eq(&other.attrs.child_number.0)
            & self.attrs.chain_code.ct_eq(&other.attrs.chain_code);

        key_a.zeroize();
        key_b.zeroize();

        result
    }
}

impl<K> Debug for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPrivateKey").field("private_key", &"...").field("attrs", &self.attrs).finish()
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<K> Eq for ExtendedPrivateKey<K> where K: PrivateKey {}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<K> PartialEq for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<K> FromStr for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    type Err = Error;

    fn from_str(xprv: &str) -> Result<Self> {
        let key = ExtendedKey::from_str(xprv)?;
        key.try_into()
    }
}

impl<K> TryFrom<ExtendedKey> for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    type Error = Error;

    fn try_from(extended_key: ExtendedKey) -> Result<ExtendedPrivateKey<K>> {
        if !extended_key.prefix.is_private() {
            return Err(Error::Prefix);
        }

        if extended_key.key_bytes[0] != 0 {
            return Err(Error::Decode);
        }

        Ok(ExtendedPrivateKey {
            private_key: K::from_bytes(&extended_key.key_bytes[1..].try_into()?)?,
            attrs: extended_key.attrs.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faster_hex::hex_decode_fallback;
    use secp256k1::SecretKey;

    macro_rules! hex {
        ($str: literal) => {{
            let len = $str.as_bytes().len() / 2;
            let mut dst = vec![0; len];
            dst.resize(len, 0);
            hex_decode_fallback($str.as_bytes(), &mut dst);
            dst
        }
        [..]};
    }

    type XPrv = ExtendedPrivateKey<SecretKey>;

    fn vector1_root() -> XPrv {
        XPrv::new(&hex!("000102030405060708090a0b0c0d0e0f")).unwrap()
    }

    #[test]
    fn bip32_test_vector_1_chain() {
        let root = vector1_root();
        assert_eq!(
            root.to_string(Prefix::XPrv).as_str(),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );

        let m_0h = root.derive_child(ChildNumber::new(0, true).unwrap()).unwrap();
        assert_eq!(
            m_0h.to_string(Prefix::XPrv).as_str(),
            "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
        );
        assert_eq!(
            m_0h.public_key().to_string(None),
            "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw"
        );

        let m_0h_1 = m_0h.derive_child(ChildNumber::new(1, false).unwrap()).unwrap();
        assert_eq!(
            m_0h_1.to_string(Prefix::XPrv).as_str(),
            "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs"
        );

        let m_0h_1_2h = m_0h_1.derive_child(ChildNumber::new(2, true).unwrap()).unwrap();
        assert_eq!(
            m_0h_1_2h.to_string(Prefix::XPrv).as_str(),
            "xprv9z4pot5VBttmtdRTWfWQmoH1taj2axGVzFqSb8C9xaxKymcFzXBDptWmT7FwuEzG3ryjH4ktypQSAewRiNMjANTtpgP4mLTj34bhnZX7UiM"
        );
        assert_eq!(
            m_0h_1_2h.public_key().to_string(None),
            "xpub6D4BDPcP2GT577Vvch3R8wDkScZWzQzMMUm3PWbmWvVJrZwQY4VUNgqFJPMM3No2dFDFGTsxxpG5uJh7n7epu4trkrX7x7DogT5Uv6fcLW5"
        );
    }

    #[test]
    fn derive_path_matches_stepwise_derivation() {
        let path: DerivationPath = "m/0'/1/2'".parse().unwrap();
        let folded = vector1_root().derive_path(&path).unwrap();

        let stepwise = vector1_root()
            .derive_child(ChildNumber::new(0, true).unwrap())
            .unwrap()
            .derive_child(ChildNumber::new(1, false).unwrap())
            .unwrap()
            .derive_child(ChildNumber::new(2, true).unwrap())
            .unwrap();

        assert_eq!(folded, stepwise);
        assert_eq!(folded.attrs().depth, 3);
    }

    #[test]
    fn derivation_is_deterministic() {
        let path: DerivationPath = "m/44'/0'/0'/0/0".parse().unwrap();
        let a = vector1_root().derive_path(&path).unwrap();
        let b = vector1_root().derive_path(&path).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.to_bytes(), b.to_bytes());
        assert_eq!(a.attrs(), b.attrs());
    }

    #[test]
    fn child_attrs_are_provenance() {
        let root = vector1_root();
        let child_number = ChildNumber::new(5, true).unwrap();
        let child = root.derive_child(child_number).unwrap();

        assert_eq!(child.attrs().depth, root.attrs().depth + 1);
        assert_eq!(child.attrs().child_number, child_number);
        assert_eq!(child.attrs().parent_fingerprint, root.private_key().fingerprint());
    }

    #[test]
    fn empty_path_is_identity() {
        let root = vector1_root();
        let same = root.clone().derive_path(&DerivationPath::default()).unwrap();
        assert_eq!(same, root);
    }

    #[test]
    fn seed_length_is_validated() {
        assert!(matches!(XPrv::new([0u8; 15]), Err(Error::SeedLength)));
        assert!(matches!(XPrv::new([0u8; 63]), Err(Error::SeedLength)));
        assert!(XPrv::new([0u8; 64]).is_ok());
    }

    #[test]
    fn xprv_string_round_trip() {
        let m_0h = vector1_root().derive_child(ChildNumber::new(0, true).unwrap()).unwrap();
        let encoded = m_0h.to_string(Prefix::XPrv);
        let decoded: XPrv = encoded.parse().unwrap();
        assert_eq!(decoded, m_0h);
    }

    #[test]
    fn xpub_string_does_not_parse_as_xprv() {
        let xpub = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";
        assert!(matches!(xpub.parse::<XPrv>(), Err(Error::Prefix)));
    }
}
