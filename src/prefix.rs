//! Version prefixes for serialized extended keys (`xprv`, `xpub`, ...).

use crate::error::Error;
use crate::result::Result;
use crate::types::Version;
use core::fmt::{self, Display};

/// Version prefix of a serialized extended key: the human-readable tag of
/// the Base58 form and the 4-byte version it decodes to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Prefix {
    /// Mainnet extended private key (`xprv`).
    XPrv,
    /// Mainnet extended public key (`xpub`).
    XPub,
    /// Testnet extended private key (`tprv`).
    TPrv,
    /// Testnet extended public key (`tpub`).
    TPub,
}

impl Prefix {
    /// The 4-byte version as a big-endian integer.
    pub fn version(self) -> Version {
        match self {
            Prefix::XPrv => 0x0488_ade4,
            Prefix::XPub => 0x0488_b21e,
            Prefix::TPrv => 0x0435_8394,
            Prefix::TPub => 0x0435_87cf,
        }
    }

    /// The 4-byte version in serialized (big-endian) form.
    pub fn to_bytes(self) -> [u8; 4] {
        self.version().to_be_bytes()
    }

    /// Look up the prefix for a serialized version value.
    pub fn from_version(version: Version) -> Result<Self> {
        match version {
            0x0488_ade4 => Ok(Prefix::XPrv),
            0x0488_b21e => Ok(Prefix::XPub),
            0x0435_8394 => Ok(Prefix::TPrv),
            0x0435_87cf => Ok(Prefix::TPub),
            _ => Err(Error::Prefix),
        }
    }

    /// The tag as it appears at the start of the Base58 form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::XPrv => "xprv",
            Prefix::XPub => "xpub",
            Prefix::TPrv => "tprv",
            Prefix::TPub => "tpub",
        }
    }

    /// Is this a prefix for an extended private key?
    pub fn is_private(self) -> bool {
        matches!(self, Prefix::XPrv | Prefix::TPrv)
    }

    /// Is this a prefix for an extended public key?
    pub fn is_public(self) -> bool {
        !self.is_private()
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Prefix;

    #[test]
    fn version_round_trip() {
        for prefix in [Prefix::XPrv, Prefix::XPub, Prefix::TPrv, Prefix::TPub] {
            assert_eq!(Prefix::from_version(prefix.version()).unwrap(), prefix);
        }

        assert!(Prefix::from_version(0).is_err());
    }

    #[test]
    fn visibility() {
        assert!(Prefix::XPrv.is_private());
        assert!(Prefix::TPrv.is_private());
        assert!(Prefix::XPub.is_public());
        assert!(Prefix::TPub.is_public());
    }
}
