//! wslp-deploy - Deployment sequencer for the wrapped-SLP contract suite.
//!
//! This crate deploys the `MultiSigWallet`, `Factory` and `WrappedSLP`
//! contracts against a named target environment, wiring ownership between
//! them and creating the default paired tokens where the environment allows.

pub mod abi;

mod accounts;
mod artifacts;
mod backend;
mod deployment;
mod environment;
mod profiles;
mod registry;
mod rpc;
mod sequencer;
mod step;

pub use abi::AbiValue;
pub use accounts::{FIXED_OWNERS, OWNER_COUNT, OwnerSource};
pub use artifacts::ArtifactStore;
pub use backend::{ChainBackend, DEFAULT_GAS_LIMIT, RpcBackend};
pub use deployment::{Deployment, WSLPCONF_FILENAME};
pub use environment::Environment;
pub use profiles::Profile;
pub use registry::ArtifactRegistry;
pub use rpc::{RpcClient, TxReceipt};
pub use sequencer::{DeploymentReport, Sequencer, StepFailure, StepOutcome, StepReport};
pub use step::{ArgValue, Artifact, RunCondition, Step, StepAction};
