use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::types::HarnessConfig;
use super::util::non_empty;

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    server: Option<FileServerConfig>,
    content: Option<FileContentConfig>,
    replay: Option<FileReplayConfig>,
    search: Option<FileSearchConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct FileServerConfig {
    address: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileContentConfig {
    root: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct FileReplayConfig {
    attack_data_root: Option<PathBuf>,
    ingest_poll_secs: Option<u64>,
    ingest_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSearchConfig {
    poll_secs: Option<u64>,
}

impl HarnessConfig {
    pub(super) fn apply_file_config(&mut self, path: Option<&Path>) -> Result<bool> {
        let Some(path) = path else {
            return Ok(false);
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;
        self.apply_file_sections(file_cfg);
        Ok(true)
    }

    pub(super) fn apply_file_sections(&mut self, file_cfg: FileConfig) {
        self.apply_file_server(file_cfg.server);
        self.apply_file_content(file_cfg.content);
        self.apply_file_replay(file_cfg.replay);
        self.apply_file_search(file_cfg.search);
    }

    fn apply_file_server(&mut self, server: Option<FileServerConfig>) {
        let Some(server) = server else {
            return;
        };
        if let Some(v) = non_empty(server.address) {
            self.server = v;
        }
        if let Some(v) = server.port {
            self.port = v;
        }
        if let Some(v) = non_empty(server.username) {
            self.username = v;
        }
        if let Some(v) = non_empty(server.password) {
            self.password = v;
        }
    }

    fn apply_file_content(&mut self, content: Option<FileContentConfig>) {
        let Some(content) = content else {
            return;
        };
        if let Some(v) = content.root {
            self.content_root = v;
        }
    }

    fn apply_file_replay(&mut self, replay: Option<FileReplayConfig>) {
        let Some(replay) = replay else {
            return;
        };
        if let Some(v) = replay.attack_data_root {
            self.attack_data_root = v;
        }
        if let Some(v) = replay.ingest_poll_secs {
            self.ingest_poll_secs = v;
        }
        if let Some(v) = replay.ingest_timeout_secs {
            self.ingest_timeout_secs = v;
        }
    }

    fn apply_file_search(&mut self, search: Option<FileSearchConfig>) {
        let Some(search) = search else {
            return;
        };
        if let Some(v) = search.poll_secs {
            self.search_poll_secs = v;
        }
    }
}
