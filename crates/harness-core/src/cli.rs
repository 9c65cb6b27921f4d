use std::path::PathBuf;

use clap::Parser;

/// Replay recorded attack data into a search platform and validate that the
/// suite's detection searches fire on it.
#[derive(Parser, Debug)]
#[command(name = "detcheck", version, about)]
pub struct Cli {
    /// Test-suite YAML file describing the detections to validate
    pub test_file: PathBuf,

    /// Search platform address (host, host:port, or full URL)
    #[arg(long, env = "DETCHECK_SERVER")]
    pub server: Option<String>,

    /// Management API port, appended when the address has none
    #[arg(long, env = "DETCHECK_PORT")]
    pub port: Option<u16>,

    /// Management API username
    #[arg(long, env = "DETCHECK_USERNAME")]
    pub username: Option<String>,

    /// Management API password
    #[arg(long, env = "DETCHECK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Root folder holding the detection and baseline documents
    #[arg(long, env = "DETCHECK_CONTENT_ROOT")]
    pub content_root: Option<PathBuf>,

    /// Folder the scoped attack-data working directory is created under
    #[arg(long, env = "DETCHECK_ATTACK_DATA_ROOT")]
    pub attack_data_root: Option<PathBuf>,

    /// Pause for operator input when a test fails, leaving its data in place
    #[arg(long)]
    pub wait_on_failure: bool,

    /// Pause for operator input after every test
    #[arg(long)]
    pub wait_on_completion: bool,

    /// Optional TOML config file layered under flags and env vars
    #[arg(long, env = "DETCHECK_CONFIG")]
    pub config: Option<PathBuf>,
}
