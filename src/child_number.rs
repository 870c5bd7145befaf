//! Child numbers: one derivation step's index with its hardened flag.

use crate::error::Error;
use crate::result::Result;
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Index of a child key together with its hardened flag, packed the way the
/// standard serializes it: the low 31 bits are the index, the top bit marks a
/// hardened step.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Top bit of the child number, set for hardened derivation steps.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Build a child number from a 31-bit index and a hardened flag.
    ///
    /// Fails with [`Error::ChildNumber`] if the index already carries the
    /// hardened bit.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG == 0 {
            Ok(ChildNumber(if hardened { index | Self::HARDENED_FLAG } else { index }))
        } else {
            Err(Error::ChildNumber)
        }
    }

    /// Parse a child number from its big-endian serialization.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        ChildNumber(u32::from_be_bytes(bytes))
    }

    /// Serialize this child number as 4 big-endian bytes, hardened bit
    /// included. This is the exact form that enters the derivation payload.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// Index of this child number, without the hardened flag.
    pub fn index(&self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            write!(f, "'")?;
        }

        Ok(())
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        match child.strip_suffix(|c| c == '\'' || c == 'h') {
            Some(index) => ChildNumber::new(index.parse().map_err(|_| Error::ChildNumber)?, true),
            None => ChildNumber::new(child.parse().map_err(|_| Error::ChildNumber)?, false),
        }
    }
}
