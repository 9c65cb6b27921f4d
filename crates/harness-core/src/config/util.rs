pub(super) fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

pub(super) fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
}

pub(super) fn format_server_addr(address: &str, port: u16) -> String {
    let address = address.trim();
    if address.contains("://") || has_explicit_port(address) {
        return address.to_string();
    }
    format!("{address}:{port}")
}

fn has_explicit_port(address: &str) -> bool {
    address
        .rsplit_once(':')
        .map(|(_, tail)| !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}
