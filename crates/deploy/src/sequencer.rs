//! Serial execution of a deployment step list.

use std::fmt;

use alloy_core::primitives::Address;
use anyhow::{Context, Result};

use crate::Environment;
use crate::abi::AbiValue;
use crate::backend::ChainBackend;
use crate::registry::ArtifactRegistry;
use crate::step::{ArgValue, Artifact, Step, StepAction};

/// What happened to a single step during a run.
#[derive(Debug)]
pub enum StepOutcome {
    /// Deployment succeeded; the artifact is registered at this address.
    Deployed(Address),
    /// Post-deploy call succeeded.
    Called,
    /// The step's condition matched the environment; nothing was executed.
    Skipped,
    /// The step failed; the run aborted here.
    Failed,
    /// An earlier step failed before this one was reached.
    NotAttempted,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deployed(address) => write!(f, "deployed at {address}"),
            Self::Called => write!(f, "called"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed => write!(f, "failed"),
            Self::NotAttempted => write!(f, "not attempted"),
        }
    }
}

/// Per-step record in a [`DeploymentReport`].
#[derive(Debug)]
pub struct StepReport {
    /// Short step label, e.g. `deploy Factory`.
    pub description: String,
    /// Artifact the step deploys or targets.
    pub artifact: Artifact,
    pub outcome: StepOutcome,
}

/// Failure details for an aborted run.
#[derive(Debug)]
pub struct StepFailure {
    /// Zero-based index of the failed step.
    pub index: usize,
    /// Artifact the failed step deployed or targeted.
    pub artifact: Artifact,
    pub error: anyhow::Error,
}

/// Result of one sequencer run.
#[derive(Debug)]
pub struct DeploymentReport {
    pub environment: Environment,
    pub steps: Vec<StepReport>,
    pub registry: ArtifactRegistry,
    pub failure: Option<StepFailure>,
}

impl DeploymentReport {
    /// The populated registry, or the run's failure with step context.
    pub fn into_result(self) -> Result<ArtifactRegistry> {
        match self.failure {
            None => Ok(self.registry),
            Some(failure) => Err(failure.error).with_context(|| {
                format!(
                    "Deployment step {} ({}) failed",
                    failure.index + 1,
                    failure.artifact
                )
            }),
        }
    }
}

/// Executes an ordered step list against a target environment.
///
/// Steps run strictly in declaration order. The first failure aborts the run
/// and no rollback is attempted: contracts deployed by earlier steps stay
/// deployed.
pub struct Sequencer<B> {
    backend: B,
    environment: Environment,
    owners: Vec<Address>,
    steps: Vec<Step>,
}

impl<B: ChainBackend> Sequencer<B> {
    pub fn new(
        backend: B,
        environment: Environment,
        owners: Vec<Address>,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            backend,
            environment,
            owners,
            steps,
        }
    }

    /// Run every step in order, short-circuiting on the first failure.
    pub async fn run(self) -> DeploymentReport {
        let total = self.steps.len();
        let mut registry = ArtifactRegistry::new();
        let mut reports = Vec::with_capacity(total);
        let mut failure: Option<StepFailure> = None;

        for (index, step) in self.steps.iter().enumerate() {
            let description = step.describe();

            if failure.is_some() {
                tracing::warn!(step = index + 1, total, "{description}: not attempted");
                reports.push(StepReport {
                    description,
                    artifact: step.artifact(),
                    outcome: StepOutcome::NotAttempted,
                });
                continue;
            }

            if !step.condition.should_run(&self.environment) {
                tracing::info!(
                    step = index + 1,
                    total,
                    environment = %self.environment,
                    "{description}: skipped"
                );
                reports.push(StepReport {
                    description,
                    artifact: step.artifact(),
                    outcome: StepOutcome::Skipped,
                });
                continue;
            }

            tracing::info!(step = index + 1, total, "{description}...");

            let outcome = match self.execute(step, &mut registry).await {
                Ok(outcome) => outcome,
                Err(error) => {
                    tracing::error!(
                        step = index + 1,
                        total,
                        artifact = %step.artifact(),
                        %error,
                        "Step failed, aborting run"
                    );
                    failure = Some(StepFailure {
                        index,
                        artifact: step.artifact(),
                        error,
                    });
                    StepOutcome::Failed
                }
            };

            reports.push(StepReport {
                description,
                artifact: step.artifact(),
                outcome,
            });
        }

        DeploymentReport {
            environment: self.environment.clone(),
            steps: reports,
            registry,
            failure,
        }
    }

    async fn execute(&self, step: &Step, registry: &mut ArtifactRegistry) -> Result<StepOutcome> {
        match &step.action {
            StepAction::Deploy { artifact, args } => {
                let args = self.resolve_args(args, registry)?;
                let address = self.backend.deploy(*artifact, &args).await?;
                tracing::info!(%artifact, %address, "Deployed");
                registry.register(*artifact, address);
                Ok(StepOutcome::Deployed(address))
            }
            StepAction::Call {
                target,
                method,
                args,
            } => {
                let target_address = registry.address_of(*target)?;
                let args = self.resolve_args(args, registry)?;
                self.backend.call(target_address, *method, &args).await?;
                tracing::info!(%target, method = *method, "Call succeeded");
                Ok(StepOutcome::Called)
            }
        }
    }

    fn resolve_args(&self, args: &[ArgValue], registry: &ArtifactRegistry) -> Result<Vec<AbiValue>> {
        args.iter()
            .map(|arg| self.resolve_arg(arg, registry))
            .collect()
    }

    fn resolve_arg(&self, arg: &ArgValue, registry: &ArtifactRegistry) -> Result<AbiValue> {
        Ok(match arg {
            ArgValue::Address(address) => AbiValue::Address(*address),
            ArgValue::Uint(value) => AbiValue::Uint(*value),
            ArgValue::Str(s) => AbiValue::Str(s.clone()),
            ArgValue::Owners => AbiValue::AddressArray(self.owners.clone()),
            ArgValue::Deployed(artifact) => AbiValue::Address(registry.address_of(*artifact)?),
        })
    }
}
