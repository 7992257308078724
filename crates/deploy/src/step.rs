//! Declarative deployment steps.
//!
//! A deployment run is an ordered list of [`Step`]s. Each step either deploys
//! an artifact or invokes a method on an already-deployed one, and carries a
//! predicate over the environment name that controls whether it executes at
//! all. Keeping the condition on the step, rather than branching inline,
//! keeps the sequencer uniform across steps.

use alloy_core::primitives::Address;

use crate::Environment;

/// A deployable contract, identified by name.
///
/// `Display` yields the artifact file stem used by the artifact store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
pub enum Artifact {
    MultiSigWallet,
    Factory,
    #[strum(serialize = "WrappedSLP")]
    WrappedSlp,
}

/// Predicate over the environment name controlling whether a step executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunCondition {
    Always,
    /// Omit the step entirely when the environment matches.
    SkipOn(Environment),
}

impl RunCondition {
    pub fn should_run(&self, environment: &Environment) -> bool {
        match self {
            Self::Always => true,
            Self::SkipOn(skipped) => environment != skipped,
        }
    }
}

/// A constructor/call argument, resolved at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Address(Address),
    Uint(u64),
    Str(String),
    /// The resolved wallet-owner list.
    Owners,
    /// The registered address of an earlier deployment step.
    Deployed(Artifact),
}

/// What a step does once its condition passes.
#[derive(Debug, Clone)]
pub enum StepAction {
    Deploy {
        artifact: Artifact,
        args: Vec<ArgValue>,
    },
    Call {
        target: Artifact,
        /// Canonical method signature, e.g. `transferOwnership(address)`.
        method: &'static str,
        args: Vec<ArgValue>,
    },
}

/// One contract deployment or post-deploy configuration call.
#[derive(Debug, Clone)]
pub struct Step {
    pub action: StepAction,
    pub condition: RunCondition,
}

impl Step {
    /// A deployment step that always runs.
    pub fn deploy(artifact: Artifact, args: Vec<ArgValue>) -> Self {
        Self {
            action: StepAction::Deploy { artifact, args },
            condition: RunCondition::Always,
        }
    }

    /// A post-deploy call step that always runs.
    pub fn call(target: Artifact, method: &'static str, args: Vec<ArgValue>) -> Self {
        Self {
            action: StepAction::Call {
                target,
                method,
                args,
            },
            condition: RunCondition::Always,
        }
    }

    /// Omit this step when the run targets the given environment.
    pub fn skip_on(mut self, environment: Environment) -> Self {
        self.condition = RunCondition::SkipOn(environment);
        self
    }

    /// The artifact this step deploys or targets.
    pub fn artifact(&self) -> Artifact {
        match &self.action {
            StepAction::Deploy { artifact, .. } => *artifact,
            StepAction::Call { target, .. } => *target,
        }
    }

    /// Short label for logs and reports.
    pub fn describe(&self) -> String {
        match &self.action {
            StepAction::Deploy { artifact, .. } => format!("deploy {artifact}"),
            StepAction::Call { target, method, .. } => {
                let name = method.split('(').next().unwrap_or(method);
                format!("call {target}.{name}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_runs_everywhere() {
        let condition = RunCondition::Always;
        assert!(condition.should_run(&Environment::Development));
        assert!(condition.should_run(&Environment::Mainnet));
    }

    #[test]
    fn test_skip_on_matches_only_its_environment() {
        let condition = RunCondition::SkipOn(Environment::Mainnet);
        assert!(!condition.should_run(&Environment::Mainnet));
        assert!(condition.should_run(&Environment::Development));
        assert!(condition.should_run(&Environment::Other("testnet".to_string())));
    }

    #[test]
    fn test_builders_default_to_always() {
        let step = Step::deploy(Artifact::Factory, vec![]);
        assert_eq!(step.condition, RunCondition::Always);

        let step = step.skip_on(Environment::Mainnet);
        assert_eq!(step.condition, RunCondition::SkipOn(Environment::Mainnet));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Step::deploy(Artifact::MultiSigWallet, vec![]).describe(),
            "deploy MultiSigWallet"
        );
        assert_eq!(
            Step::call(Artifact::Factory, "transferOwnership(address)", vec![]).describe(),
            "call Factory.transferOwnership"
        );
    }

    #[test]
    fn test_artifact_display_matches_file_stems() {
        assert_eq!(Artifact::WrappedSlp.to_string(), "WrappedSLP");
        assert_eq!(Artifact::MultiSigWallet.to_string(), "MultiSigWallet");
    }
}
