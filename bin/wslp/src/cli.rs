use clap::Parser;
use tracing::level_filters::LevelFilter;
use wslp_deploy::{DEFAULT_GAS_LIMIT, Environment, Profile};

/// The default artifacts directory (the contract compiler's output layout).
const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The default node endpoint (a local development chain).
const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

#[derive(Parser)]
#[command(name = "wslp")]
#[command(
    author,
    version,
    about = "Deploy the wrapped-SLP contract suite to a named environment"
)]
pub struct Cli {
    /// The verbosity level.
    #[arg(short, long, env = "WSLP_VERBOSITY", default_value_t = LevelFilter::INFO)]
    pub verbosity: LevelFilter,

    /// The target environment name (e.g. development, testnet, mainnet).
    ///
    /// Development runs take the wallet owners from the node's unlocked
    /// account pool; every other environment uses the fixed owner list.
    #[arg(short, long, env = "WSLP_ENVIRONMENT", default_value_t = Environment::Development)]
    pub environment: Environment,

    /// The URL of the JSON-RPC endpoint executing the run.
    #[arg(long, alias = "rpc", env = "WSLP_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Directory holding the compiled contract artifacts.
    #[arg(long, alias = "artifacts", env = "WSLP_ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// The deployment profile to run.
    #[arg(long, env = "WSLP_PROFILE", default_value_t = Profile::Factory)]
    pub profile: Profile,

    /// Gas limit attached to each deployment and call transaction.
    #[arg(long, env = "WSLP_GAS_LIMIT", default_value_t = DEFAULT_GAS_LIMIT)]
    pub gas_limit: u64,

    /// Path to an existing Wslp.toml configuration file to load.
    ///
    /// When provided, the run uses the configuration from this file instead
    /// of the other CLI arguments.
    #[arg(long, alias = "conf", env = "WSLP_CONFIG")]
    pub config: Option<String>,

    /// Skips writing the effective configuration next to the artifacts.
    #[arg(long, env = "WSLP_NO_SAVE_CONFIG")]
    pub no_save_config: bool,
}
