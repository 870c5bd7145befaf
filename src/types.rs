//! Fixed-width byte types shared across the crate.

/// BIP32 key material size in bytes.
pub const KEY_SIZE: usize = 32;

/// Chain code: the per-level domain separator carried alongside a key and
/// used as the HMAC key when deriving children.
pub type ChainCode = [u8; KEY_SIZE];

/// Depth in the derivation hierarchy (0 at the root).
pub type Depth = u8;

/// Key fingerprint: the first four bytes of `RIPEMD160(SHA256(compressed_key))`.
pub type KeyFingerprint = [u8; 4];

/// Serialized private key scalar (big-endian).
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// Serialized compressed public key: SEC1 tag byte plus x-coordinate.
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];

/// Extended key version: the 4-byte prefix of a serialized extended key,
/// interpreted as a big-endian integer.
pub type Version = u32;

/// HMAC-SHA512 instance used for child key derivation.
pub type HmacSha512 = hmac::Hmac<sha2::Sha512>;
