//! API utilities for frontend-backend communication
//!
//! The backend listens on [`API_PORT`] of the host that served the frontend.

pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
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
    build_api_base(&protocol, &hostname, API_PORT)
}

fn build_api_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_api_base() {
        assert_eq!(
            build_api_base("https:", "teacher.example", 3000),
            "https://teacher.example:3000"
        );
        assert_eq!(build_api_base("http:", "127.0.0.1", API_PORT), "http://127.0.0.1:3000");
    }
}
