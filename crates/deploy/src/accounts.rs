//! Wallet-owner resolution per target environment.

use alloy_core::primitives::{Address, address};
use anyhow::Result;

use crate::Environment;

/// Number of wallet owners; also the wallet's confirmation threshold.
pub const OWNER_COUNT: usize = 3;

/// Owner addresses used on every non-development environment.
///
/// Operator-controlled keys; development runs take owners from the node's
/// unlocked account pool instead.
pub const FIXED_OWNERS: [Address; OWNER_COUNT] = [
    address!("5f3c9a7be1d04c2a8f6b310c7d9e4a5b2c8d0e17"),
    address!("83b2d4c6a9e1507f3d2b8c4e6f0a197d5c3e8b26"),
    address!("c7e5a3910d8f6b247c1e0d9a3f5b8e627a4d0c93"),
];

/// Where the wallet's initial owner list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerSource {
    /// The first [`OWNER_COUNT`] accounts of the node's unlocked pool.
    NodePool,
    /// A fixed literal list.
    Fixed([Address; OWNER_COUNT]),
}

impl OwnerSource {
    /// Select the owner source for a target environment.
    pub fn for_environment(environment: &Environment) -> Self {
        if environment.is_development() {
            Self::NodePool
        } else {
            Self::Fixed(FIXED_OWNERS)
        }
    }

    /// Resolve the owner list against the node's account pool.
    pub fn resolve(&self, pool: &[Address]) -> Result<Vec<Address>> {
        match self {
            Self::NodePool => {
                if pool.len() < OWNER_COUNT {
                    anyhow::bail!(
                        "Not enough accounts in the node pool. Need at least {}, got {}",
                        OWNER_COUNT,
                        pool.len()
                    );
                }
                Ok(pool[..OWNER_COUNT].to_vec())
            }
            Self::Fixed(owners) => Ok(owners.to_vec()),
        }
    }
}
