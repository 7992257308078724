//! Named deployment profiles.
//!
//! The two profiles are alternative sequences, never merged: `factory` wires
//! the multisig wallet and the factory together and creates the default
//! wrapped tokens, while `standalone` deploys the wrapped-token contract on
//! its own.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Environment;
use crate::accounts::OWNER_COUNT;
use crate::step::{ArgValue, Artifact, Step};

/// Method signature for transferring a contract's administrative owner.
const TRANSFER_OWNERSHIP: &str = "transferOwnership(address)";

/// Method signature for creating a paired wrapped token on the factory.
const CREATE_WSLP: &str = "createWslp(string,string,string,uint8)";

/// Selects which deployment sequence to run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Profile {
    /// Wallet and factory, ownership hand-off, default wrapped tokens.
    #[default]
    Factory,
    /// Direct wrapped-token deployment, no factory.
    Standalone,
}

impl Profile {
    /// Build the profile's ordered step list.
    pub fn steps(&self) -> Vec<Step> {
        match self {
            Self::Factory => factory_steps(),
            Self::Standalone => standalone_steps(),
        }
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_str(&name).map_err(serde::de::Error::custom)
    }
}

fn factory_steps() -> Vec<Step> {
    vec![
        Step::deploy(
            Artifact::MultiSigWallet,
            vec![ArgValue::Owners, ArgValue::Uint(OWNER_COUNT as u64)],
        ),
        Step::deploy(Artifact::Factory, vec![]),
        Step::call(
            Artifact::Factory,
            TRANSFER_OWNERSHIP,
            vec![ArgValue::Deployed(Artifact::MultiSigWallet)],
        ),
        Step::deploy(Artifact::WrappedSlp, wslp_constructor_args())
            .skip_on(Environment::Mainnet),
        Step::call(
            Artifact::Factory,
            CREATE_WSLP,
            vec![
                ArgValue::Str(
                    "ff1b54b2141f81e07e0027d369db6484dea8d94429a635c35d17a7462a659239"
                        .to_string(),
                ),
                ArgValue::Str("ZAPT".to_string()),
                ArgValue::Str("Zapit".to_string()),
                ArgValue::Uint(0),
            ],
        )
        .skip_on(Environment::Mainnet),
        Step::call(
            Artifact::Factory,
            CREATE_WSLP,
            vec![
                ArgValue::Str(
                    "46d85a685ce8d5c983ca24e54379cf19aceeb4878144cd5047007e2f5c172c23"
                        .to_string(),
                ),
                ArgValue::Str("INC".to_string()),
                ArgValue::Str("InstaCrypto".to_string()),
                ArgValue::Uint(2),
            ],
        )
        .skip_on(Environment::Mainnet),
    ]
}

fn standalone_steps() -> Vec<Step> {
    vec![Step::deploy(Artifact::WrappedSlp, wslp_constructor_args())]
}

fn wslp_constructor_args() -> Vec<ArgValue> {
    vec![
        ArgValue::Str("slp".to_string()),
        ArgValue::Str("symbol".to_string()),
        ArgValue::Str("name".to_string()),
        ArgValue::Uint(0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{RunCondition, StepAction};

    #[test]
    fn test_factory_profile_shape() {
        let steps = Profile::Factory.steps();
        assert_eq!(steps.len(), 6);

        // Wallet and factory come first and always run; the ownership
        // hand-off targets the factory.
        assert_eq!(steps[0].artifact(), Artifact::MultiSigWallet);
        assert_eq!(steps[0].condition, RunCondition::Always);
        assert_eq!(steps[1].artifact(), Artifact::Factory);
        assert_eq!(steps[2].describe(), "call Factory.transferOwnership");
        assert_eq!(steps[2].condition, RunCondition::Always);

        // The wrapped-token block is omitted on mainnet.
        for step in &steps[3..] {
            assert_eq!(step.condition, RunCondition::SkipOn(Environment::Mainnet));
        }
    }

    #[test]
    fn test_wallet_constructor_args() {
        let steps = Profile::Factory.steps();
        let StepAction::Deploy { args, .. } = &steps[0].action else {
            panic!("first step must be a deployment");
        };
        assert_eq!(
            args,
            &vec![ArgValue::Owners, ArgValue::Uint(OWNER_COUNT as u64)]
        );
    }

    #[test]
    fn test_wrapped_token_constructor_args() {
        let steps = Profile::Factory.steps();
        let StepAction::Deploy { artifact, args } = &steps[3].action else {
            panic!("fourth step must be a deployment");
        };
        assert_eq!(*artifact, Artifact::WrappedSlp);
        assert_eq!(
            args,
            &vec![
                ArgValue::Str("slp".to_string()),
                ArgValue::Str("symbol".to_string()),
                ArgValue::Str("name".to_string()),
                ArgValue::Uint(0),
            ]
        );
    }

    #[test]
    fn test_paired_token_calls_are_distinct() {
        let steps = Profile::Factory.steps();
        let StepAction::Call { args: first, .. } = &steps[4].action else {
            panic!("fifth step must be a call");
        };
        let StepAction::Call { args: second, .. } = &steps[5].action else {
            panic!("sixth step must be a call");
        };
        assert_ne!(first, second);
        assert_eq!(first[1], ArgValue::Str("ZAPT".to_string()));
        assert_eq!(second[1], ArgValue::Str("INC".to_string()));
        assert_eq!(second[3], ArgValue::Uint(2));
    }

    #[test]
    fn test_standalone_profile_deploys_only_the_wrapped_token() {
        let steps = Profile::Standalone.steps();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].artifact(), Artifact::WrappedSlp);
        assert_eq!(steps[0].condition, RunCondition::Always);
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(Profile::Factory.to_string(), "factory");
        assert_eq!(Profile::from_str("standalone").unwrap(), Profile::Standalone);
        assert!(Profile::from_str("bogus").is_err());
    }
}
