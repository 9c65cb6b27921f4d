use anyhow::{bail, Result};

use crate::cli::Cli;

use super::types::HarnessConfig;
use super::util::non_empty;

impl HarnessConfig {
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config(cli.config.as_deref())?;
        cfg.apply_env_overrides();
        cfg.apply_cli(cli);
        if cfg.password.is_empty() {
            bail!(
                "no platform password configured; pass --password, set DETCHECK_PASSWORD, \
                 or add [server].password to the config file"
            );
        }
        Ok(cfg)
    }

    pub(super) fn apply_cli(&mut self, cli: &Cli) {
        self.test_file = cli.test_file.clone();
        if let Some(v) = non_empty(cli.server.clone()) {
            self.server = v;
        }
        if let Some(v) = cli.port {
            self.port = v;
        }
        if let Some(v) = non_empty(cli.username.clone()) {
            self.username = v;
        }
        if let Some(v) = non_empty(cli.password.clone()) {
            self.password = v;
        }
        if let Some(v) = &cli.content_root {
            self.content_root = v.clone();
        }
        if let Some(v) = &cli.attack_data_root {
            self.attack_data_root = v.clone();
        }
        if cli.wait_on_failure {
            self.wait_on_failure = true;
        }
        if cli.wait_on_completion {
            self.wait_on_completion = true;
        }
    }
}
