//! Assembly of the HMAC-SHA512 payload for one child key derivation step.
//!
//! The layout is the standard's wire contract: 37 bytes, big-endian.
//! Hardened steps hash `0x00 || parent_scalar || child_number`; normal steps
//! hash `parent_compressed_pubkey || child_number`.

use crate::child_number::ChildNumber;
use crate::types::{PrivateKeyBytes, PublicKeyBytes, KEY_SIZE};

/// Size of the derivation payload in bytes.
pub const PAYLOAD_SIZE: usize = KEY_SIZE + 5;

/// Payload of a hardened derivation step: a zero pad byte, the parent's
/// 32-byte scalar, and the child number with its hardened bit set.
///
/// Callers should wipe the returned buffer once it has been fed to the HMAC.
pub fn hardened_payload(scalar: &PrivateKeyBytes, child_number: ChildNumber) -> [u8; PAYLOAD_SIZE] {
    let mut payload = [0u8; PAYLOAD_SIZE];
    payload[1..KEY_SIZE + 1].copy_from_slice(scalar);
    payload[KEY_SIZE + 1..].copy_from_slice(&child_number.to_bytes());
    payload
}

/// Payload of a normal derivation step: the parent's 33-byte compressed
/// public key followed by the child number.
pub fn normal_payload(public_key: &PublicKeyBytes, child_number: ChildNumber) -> [u8; PAYLOAD_SIZE] {
    let mut payload = [0u8; PAYLOAD_SIZE];
    payload[..KEY_SIZE + 1].copy_from_slice(public_key);
    payload[KEY_SIZE + 1..].copy_from_slice(&child_number.to_bytes());
    payload
}
