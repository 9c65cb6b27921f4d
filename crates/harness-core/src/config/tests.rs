use std::path::PathBuf;

use clap::Parser;

use crate::cli::Cli;

use super::util::{format_server_addr, non_empty};
use super::*;

#[test]
fn defaults_are_sane() {
    let cfg = HarnessConfig::default();
    assert_eq!(cfg.port, 8089);
    assert_eq!(cfg.username, "admin");
    assert!(cfg.password.is_empty());
    assert_eq!(cfg.content_root, PathBuf::from("security_content"));
    assert_eq!(cfg.ingest_timeout_secs, 120);
}

#[test]
fn server_addr_appends_port_only_when_needed() {
    assert_eq!(format_server_addr("10.0.0.5", 8089), "10.0.0.5:8089");
    assert_eq!(format_server_addr("10.0.0.5:9097", 8089), "10.0.0.5:9097");
    assert_eq!(
        format_server_addr("https://search.example", 8089),
        "https://search.example"
    );
}

#[test]
fn non_empty_rejects_whitespace() {
    assert_eq!(non_empty(Some("  ".to_string())), None);
    assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    assert_eq!(non_empty(None), None);
}

#[test]
fn file_sections_override_defaults() {
    let raw = r#"
[server]
address = "search.internal"
port = 9089
password = "from-file"

[content]
root = "/srv/security_content"

[replay]
ingest_timeout_secs = 300

[search]
poll_secs = 1
"#;
    let mut cfg = HarnessConfig::default();
    cfg.apply_file_sections(toml::from_str(raw).expect("parse toml"));

    assert_eq!(cfg.server, "search.internal");
    assert_eq!(cfg.port, 9089);
    assert_eq!(cfg.password, "from-file");
    assert_eq!(cfg.content_root, PathBuf::from("/srv/security_content"));
    assert_eq!(cfg.ingest_timeout_secs, 300);
    assert_eq!(cfg.search_poll_secs, 1);
    // untouched sections keep their defaults
    assert_eq!(cfg.username, "admin");
}

#[test]
fn cli_overrides_win_over_file_values() {
    let raw = r#"
[server]
address = "from-file"
password = "file-secret"
"#;
    let mut cfg = HarnessConfig::default();
    cfg.apply_file_sections(toml::from_str(raw).expect("parse toml"));

    let cli = Cli::try_parse_from([
        "detcheck",
        "suite.yml",
        "--server",
        "from-cli",
        "--wait-on-completion",
    ])
    .expect("parse cli");
    cfg.apply_cli(&cli);

    assert_eq!(cfg.server, "from-cli");
    // absent flags leave the lower layer in place
    assert_eq!(cfg.password, "file-secret");
    assert!(cfg.wait_on_completion);
    assert!(!cfg.wait_on_failure);
    assert_eq!(cfg.test_file, PathBuf::from("suite.yml"));
}
