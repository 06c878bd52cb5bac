//! API utilities for frontend-backend communication

/// Port the backend listens on (see `[server] port` in config.toml)
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port, e.g.
/// "http://localhost:3000". Empty if there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname, API_PORT)
}

/// Build a full API URL from a path such as "/api/barang"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn base_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("http:", "localhost", 3000), "http://localhost:3000");
        assert_eq!(
            base_url("https:", "gudang.example.org", 8443),
            "https://gudang.example.org:8443"
        );
    }
}
