use std::path::PathBuf;

use search_client::Credentials;

use super::util::format_server_addr;

/// Everything one harness invocation needs, resolved once in `main` and
/// passed down explicitly.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub content_root: PathBuf,
    pub attack_data_root: PathBuf,
    pub test_file: PathBuf,
    pub wait_on_failure: bool,
    pub wait_on_completion: bool,
    pub ingest_poll_secs: u64,
    pub ingest_timeout_secs: u64,
    pub search_poll_secs: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            server: "127.0.0.1".to_string(),
            port: 8089,
            username: "admin".to_string(),
            password: String::new(),
            content_root: PathBuf::from("security_content"),
            attack_data_root: std::env::temp_dir(),
            test_file: PathBuf::new(),
            wait_on_failure: false,
            wait_on_completion: false,
            ingest_poll_secs: 5,
            ingest_timeout_secs: 120,
            search_poll_secs: 2,
        }
    }
}

impl HarnessConfig {
    pub fn server_addr(&self) -> String {
        format_server_addr(&self.server, self.port)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
