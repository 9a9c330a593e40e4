#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // backend started locally next to trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // same origin in production
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_backend_and_path() {
        let url = api_url("/api/commerce/reconcile");
        assert!(url.starts_with(get_backend_url()));
        assert!(url.ends_with("/api/commerce/reconcile"));
    }
}
