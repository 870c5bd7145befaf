//! Derivation paths

use crate::address_type::AddressType;
use crate::child_number::ChildNumber;
use crate::error::Error;
use crate::result::Result;
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Prefix for all derivation paths.
const PREFIX: &str = "m";

/// Derivation paths within a hierarchical keyspace.
///
/// An ordered sequence of [`ChildNumber`]s, applied left to right when
/// folding over a root key. The empty path denotes the root itself.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DerivationPath {
    path: Vec<ChildNumber>,
}

impl DerivationPath {
    /// Build the standard BIP44 path `m/44'/coin_type'/account'/change/index`.
    pub fn bip44(coin_type: u32, account: u32, address_type: AddressType, index: u32) -> Result<Self> {
        Ok(DerivationPath {
            path: vec![
                ChildNumber::new(44, true)?,
                ChildNumber::new(coin_type, true)?,
                ChildNumber::new(account, true)?,
                ChildNumber::new(address_type.index(), false)?,
                ChildNumber::new(index, false)?,
            ],
        })
    }

    /// Iterate over the [`ChildNumber`] values in this derivation path.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.path.iter().cloned()
    }

    /// Is this derivation path empty? (i.e. the root)
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the count of [`ChildNumber`] values in this derivation path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Get the parent [`DerivationPath`] for the current one.
    ///
    /// Returns `None` if this is already the root path.
    pub fn parent(&self) -> Option<Self> {
        self.path.len().checked_sub(1).map(|n| {
            let mut parent = self.clone();
            parent.path.truncate(n);
            parent
        })
    }

    /// Push a [`ChildNumber`] onto an existing derivation path.
    pub fn push(&mut self, child_number: ChildNumber) {
        self.path.push(child_number)
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.path
    }
}

impl Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;

        for child_number in self.iter() {
            write!(f, "/{}", child_number)?;
        }

        Ok(())
    }
}

impl Extend<ChildNumber> for DerivationPath {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = ChildNumber>,
    {
        self.path.extend(iter);
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<DerivationPath> {
        let mut path = path.split('/');

        if path.next() != Some(PREFIX) {
            return Err(Error::String(format!("derivation path must start with `{PREFIX}`")));
        }

        Ok(DerivationPath { path: path.map(str::parse).collect::<Result<_>>()? })
    }
}

impl FromIterator<ChildNumber> for DerivationPath {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = ChildNumber>,
    {
        DerivationPath { path: iter.into_iter().collect() }
    }
}

impl IntoIterator for DerivationPath {
    type Item = ChildNumber;
    type IntoIter = std::vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> std::vec::IntoIter<ChildNumber> {
        self.path.into_iter()
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<DerivationPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DerivationPathVisitor;
        impl de::Visitor<'_> for DerivationPathVisitor {
            type Value = DerivationPath;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a derivation path string such as m/44'/0'/0'/0/0")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                DerivationPath::from_str(value).map_err(|err| de::Error::custom(err.to_string()))
            }
        }

        deserializer.deserialize_str(DerivationPathVisitor)
    }
}

impl Serialize for DerivationPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressType, DerivationPath};

    #[test]
    fn round_trip() {
        let path_m = "m";
        assert_eq!(path_m.parse::<DerivationPath>().unwrap().to_string(), path_m);

        let path_m_0 = "m/0";
        assert_eq!(path_m_0.parse::<DerivationPath>().unwrap().to_string(), path_m_0);

        let path_m_0_2147483647h = "m/0/2147483647'";
        assert_eq!(path_m_0_2147483647h.parse::<DerivationPath>().unwrap().to_string(), path_m_0_2147483647h);

        let path_m_0_2147483647h_1 = "m/0/2147483647'/1";
        assert_eq!(path_m_0_2147483647h_1.parse::<DerivationPath>().unwrap().to_string(), path_m_0_2147483647h_1);

        let path_m_0_2147483647h_1_2147483646h = "m/0/2147483647'/1/2147483646'";
        assert_eq!(
            path_m_0_2147483647h_1_2147483646h.parse::<DerivationPath>().unwrap().to_string(),
            path_m_0_2147483647h_1_2147483646h
        );
    }

    #[test]
    fn parse_errors() {
        assert!("".parse::<DerivationPath>().is_err());
        assert!("n/0".parse::<DerivationPath>().is_err());
        assert!("m/".parse::<DerivationPath>().is_err());
        assert!("m//0".parse::<DerivationPath>().is_err());
        assert!("m/abc".parse::<DerivationPath>().is_err());
        assert!("m/2147483648".parse::<DerivationPath>().is_err());
    }

    #[test]
    fn parent() {
        let path_m_0_2147483647h = "m/0/2147483647'".parse::<DerivationPath>().unwrap();
        let path_m_0 = path_m_0_2147483647h.parent().unwrap();
        assert_eq!("m/0", path_m_0.to_string());

        let path_m = path_m_0.parent().unwrap();
        assert_eq!("m", path_m.to_string());
        assert_eq!(path_m.parent(), None);
    }

    #[test]
    fn bip44_account_paths() {
        let receive = DerivationPath::bip44(0, 0, AddressType::Receive, 5).unwrap();
        assert_eq!(receive.to_string(), "m/44'/0'/0'/0/5");

        let change = DerivationPath::bip44(972, 1, AddressType::Change, 0).unwrap();
        assert_eq!(change.to_string(), "m/44'/972'/1'/1/0");
    }
}
