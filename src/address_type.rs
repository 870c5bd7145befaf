use core::fmt::{self, Display};

/// BIP44 change-level address type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressType {
    Receive = 0,
    Change,
}

impl AddressType {
    /// Index of this address type at the change level of a BIP44 path.
    pub fn index(&self) -> u32 {
        match self {
            Self::Receive => 0,
            Self::Change => 1,
        }
    }
}

impl Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Receive => "Receive",
            Self::Change => "Change",
        })
    }
}
