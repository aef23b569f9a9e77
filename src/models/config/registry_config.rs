use std::env;
use std::time::Duration;

/// Default location of the published all-families selector document
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/chain-registry/registry-data/main/all_selectors.yml";

/// Default timeout for remote HTTP fetches
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time-to-live for the remote selector cache
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Environment variable naming the override source (file path or URL)
pub const OVERRIDE_SOURCE_ENV: &str = "REGISTRY_OVERRIDE_SOURCE";

/// Environment variable enabling the remote fallback datasource
pub const REMOTE_ENABLED_ENV: &str = "REGISTRY_REMOTE_ENABLED";

/// Environment variable overriding the remote datasource URL
pub const REMOTE_URL_ENV: &str = "REGISTRY_REMOTE_URL";

/// Environment variable overriding the fetch timeout, in seconds
pub const FETCH_TIMEOUT_ENV: &str = "REGISTRY_FETCH_TIMEOUT_SECS";

/// Environment variable overriding the remote cache TTL, in seconds
pub const CACHE_TTL_ENV: &str = "REGISTRY_CACHE_TTL_SECS";

/// Tunable knobs for a registry instance
///
/// Every field has a working default; `from_env` overlays the documented
/// environment variables on top of those defaults.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Optional operator-supplied override source: a local file path, or a
    /// URL when prefixed with `http://` or `https://`. Absent means no
    /// override data, not an error.
    pub override_source: Option<String>,
    /// Whether selector lookups may fall back to the remote datasource
    pub remote_enabled: bool,
    /// URL of the remote selector document
    pub remote_url: String,
    /// Upper bound on a single remote fetch
    pub fetch_timeout: Duration,
    /// How long a fetched remote snapshot stays fresh; zero disables caching
    pub cache_ttl: Duration,
    /// Run the selector uniqueness check at construction and refuse to start
    /// on a violation
    pub strict: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            override_source: None,
            remote_enabled: false,
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            strict: false,
        }
    }
}

impl RegistryConfig {
    /// Builds a configuration from the process environment
    ///
    /// Unset variables keep their defaults; values that fail to parse are
    /// treated as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            override_source: env::var(OVERRIDE_SOURCE_ENV)
                .ok()
                .filter(|s| !s.is_empty()),
            remote_enabled: env::var(REMOTE_ENABLED_ENV)
                .ok()
                .and_then(|s| s.parse::<bool>().ok())
                .unwrap_or(defaults.remote_enabled),
            remote_url: env::var(REMOTE_URL_ENV)
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.remote_url),
            fetch_timeout: env::var(FETCH_TIMEOUT_ENV)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            cache_ttl: env::var(CACHE_TTL_ENV)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            strict: false,
        }
    }
}
