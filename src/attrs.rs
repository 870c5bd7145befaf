use crate::child_number::ChildNumber;
use crate::types::{ChainCode, Depth, KeyFingerprint};
use borsh::{BorshDeserialize, BorshSerialize};

/// Metadata shared by extended private and public keys.
///
/// For a derived key these fields are provenance, not free-form metadata:
/// they hold exactly the values that entered the HMAC payload which produced
/// the key.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct ExtendedKeyAttrs {
    /// Depth in the key derivation hierarchy (0 at the root).
    pub depth: Depth,

    /// Fingerprint of the immediate parent key (zero at the root).
    pub parent_fingerprint: KeyFingerprint,

    /// Child number used to derive this key from its parent (0 at the root).
    pub child_number: ChildNumber,

    /// Chain code.
    pub chain_code: ChainCode,
}
