//! Target environment names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named deployment environment, supplied by the caller at run start.
///
/// Only `development` and `mainnet` carry special behavior; any other name
/// (e.g. `testnet`) is treated as a regular remote network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Environment {
    Development,
    Mainnet,
    #[strum(default)]
    Other(String),
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, Environment::Mainnet)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Mainnet => f.write_str("mainnet"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

// Round-trips through config files as a plain string.
impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_str(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(
            Environment::from_str("development").unwrap(),
            Environment::Development
        );
        assert_eq!(Environment::from_str("mainnet").unwrap(), Environment::Mainnet);
    }

    #[test]
    fn test_parse_other_names() {
        assert_eq!(
            Environment::from_str("testnet").unwrap(),
            Environment::Other("testnet".to_string())
        );
        assert_eq!(
            Environment::from_str("staging").unwrap(),
            Environment::Other("staging".to_string())
        );
    }

    #[test]
    fn test_display_round_trip() {
        for name in ["development", "mainnet", "testnet"] {
            let env = Environment::from_str(name).unwrap();
            assert_eq!(env.to_string(), name);
        }
    }

    #[test]
    fn test_predicates() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Development.is_mainnet());
        assert!(Environment::Mainnet.is_mainnet());
        assert!(!Environment::Other("testnet".to_string()).is_mainnet());
    }
}
