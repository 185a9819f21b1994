// Configuration module entry point
// Loads static gateway configuration from config.toml plus environment overrides

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, UpstreamConfig,
};

/// Public web bearer token used by the platform's own web client for
/// unauthenticated guest sessions
const DEFAULT_BEARER_TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAANRILgAAAAAAnNwIzUejRCOuH5E6I8xnZz4puTs%3D1Zv7ttfk8LF81IUq16cHjhLTvJu4FA33AGWWjCpTnA";

const DEFAULT_ACTIVATE_URL: &str = "https://api.twitter.com/1.1/guest/activate.json";
const DEFAULT_USER_LOOKUP_URL: &str =
    "https://api.twitter.com/graphql/sLVLhk0bGj3MVFEKTdax1w/UserByScreenName";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

impl Config {
    /// Load configuration from the default "config.toml" location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("GATEWAY"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8787)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "Pfp-Gateway/0.1")?
            .set_default("http.max_body_size", 65_536)?
            .set_default("upstream.bearer_token", DEFAULT_BEARER_TOKEN)?
            .set_default("upstream.activate_url", DEFAULT_ACTIVATE_URL)?
            .set_default("upstream.user_lookup_url", DEFAULT_USER_LOOKUP_URL)?
            .set_default("upstream.user_agent", DEFAULT_USER_AGENT)?
            .set_default("upstream.request_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8787);
        assert_eq!(cfg.server.workers, None);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.read_timeout, 30);
        assert_eq!(cfg.performance.max_connections, None);
        assert_eq!(cfg.http.max_body_size, 65_536);
        assert!(cfg.upstream.activate_url.contains("guest/activate"));
        assert_eq!(cfg.upstream.request_timeout, 30);
    }

    #[test]
    fn test_socket_addr_formatting() {
        let cfg = Config::load_from("does-not-exist").expect("defaults should load");
        let addr = cfg.socket_addr().expect("default address should parse");
        assert_eq!(addr.to_string(), "127.0.0.1:8787");
    }
}
