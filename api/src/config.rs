//! Backend endpoint resolution.
//!
//! The base URL is picked once from the host the app is served from: a
//! developer machine talks to a locally running backend, anything else talks
//! to the deployed instance. There is no runtime override.

/// Backend URL used during local development.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Backend URL of the deployed instance.
pub const DEPLOYED_API_URL: &str = "https://peer-matcher-api.onrender.com";

/// Resolve the backend base URL for the current runtime host.
pub fn backend_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let host = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        url_for_host(&host).to_string()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native shells have no document host to inspect.
        url_for_host("localhost").to_string()
    }
}

fn url_for_host(host: &str) -> &'static str {
    if host == "localhost" || host == "127.0.0.1" {
        LOCAL_API_URL
    } else {
        DEPLOYED_API_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_use_the_development_url() {
        assert_eq!(url_for_host("localhost"), LOCAL_API_URL);
        assert_eq!(url_for_host("127.0.0.1"), LOCAL_API_URL);
    }

    #[test]
    fn any_other_host_uses_the_deployed_url() {
        assert_eq!(url_for_host("peer-matcher.vercel.app"), DEPLOYED_API_URL);
        assert_eq!(url_for_host(""), DEPLOYED_API_URL);
    }
}
