//! Joining configured base URLs with endpoint paths.
//!
//! Base URLs come from flags, the environment and the config file, so they
//! may or may not carry a trailing slash.

/// Strip every trailing `/` from a base URL.
///
/// # Examples
///
/// ```
/// use hoper::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("https://hoper.example/api//"), "https://hoper.example/api");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Append `endpoint` to `base_url` with exactly one `/` between them.
///
/// # Examples
///
/// ```
/// use hoper::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:8000/", "chat"),
///     "http://localhost:8000/chat"
/// );
/// assert_eq!(
///     construct_api_url("http://localhost:8080", "/api/mood/evaluate"),
///     "http://localhost:8080/api/mood/evaluate"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalize_base_url(base_url), endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_removed() {
        assert_eq!(normalize_base_url("http://localhost:8000///"), "http://localhost:8000");
        assert_eq!(normalize_base_url(" http://localhost:8000/ "), "http://localhost:8000");
        assert_eq!(normalize_base_url(""), "");
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn chat_endpoint_never_gets_a_double_slash() {
        for base in [
            "http://localhost:8000",
            "http://localhost:8000/",
            "http://localhost:8000//",
        ] {
            assert_eq!(construct_api_url(base, "chat"), "http://localhost:8000/chat");
            assert_eq!(construct_api_url(base, "/chat"), "http://localhost:8000/chat");
        }
    }

    #[test]
    fn base_paths_are_kept() {
        assert_eq!(
            construct_api_url("https://hoper.example/backend/", "chat"),
            "https://hoper.example/backend/chat"
        );
        assert_eq!(
            construct_api_url("https://hoper.example", "api/mood/evaluate"),
            "https://hoper.example/api/mood/evaluate"
        );
    }
}
