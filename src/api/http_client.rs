//! HTTP client construction with connection pooling.
//!
//! The submission client is lazily initialized with `OnceLock` and reused for
//! the life of the process; reqwest pools connections underneath, so repeated
//! submissions to the same endpoint reuse one connection.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

static SUBMIT_CLIENT: OnceLock<Client> = OnceLock::new();

/// Transport settings for the submission client.
pub struct SubmitClientConfig {
    /// Overall request timeout. Submissions can carry several megabytes of
    /// attachments and the service may run long workflows before replying.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Max idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// TCP keep-alive.
    pub tcp_keepalive: Duration,
}

impl Default for SubmitClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 4,
            tcp_keepalive: Duration::from_secs(60),
        }
    }
}

impl SubmitClientConfig {
    /// Config with caller-chosen request/connect timeouts, pool settings at
    /// their defaults.
    pub fn with_timeouts(timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            ..Self::default()
        }
    }
}

/// The shared submission client, built on first use with default settings.
pub fn get_submit_client() -> &'static Client {
    SUBMIT_CLIENT.get_or_init(|| {
        create_submit_client(SubmitClientConfig::default())
            .expect("Failed to create submission HTTP client")
    })
}

/// Builds a submission client with the given transport settings.
pub fn create_submit_client(config: SubmitClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .tcp_keepalive(config.tcp_keepalive)
        .user_agent(format!("promptforge/{}", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_client_config_default() {
        let config = SubmitClientConfig::default();
        assert_eq!(config.timeout.as_secs(), 120);
        assert_eq!(config.connect_timeout.as_secs(), 10);
    }

    #[test]
    fn test_with_timeouts_overrides_only_timeouts() {
        let config = SubmitClientConfig::with_timeouts(60, 5);
        assert_eq!(config.timeout.as_secs(), 60);
        assert_eq!(config.connect_timeout.as_secs(), 5);
        assert_eq!(config.pool_max_idle_per_host, 4);
    }

    #[test]
    fn test_get_submit_client_returns_same_instance() {
        let client = get_submit_client();
        let client2 = get_submit_client();
        assert!(std::ptr::eq(client, client2));
    }

    #[test]
    fn test_create_submit_client() {
        let result = create_submit_client(SubmitClientConfig::default());
        assert!(result.is_ok());
    }
}
