use std::sync::Mutex;
use std::time::Duration;

use lazy_static::lazy_static;

use chain_registry::models::{
	RegistryConfig, CACHE_TTL_ENV, FETCH_TIMEOUT_ENV, OVERRIDE_SOURCE_ENV, REMOTE_ENABLED_ENV,
	REMOTE_URL_ENV,
};

lazy_static! {
	// environment variables are process-global, serialize the tests touching them
	static ref ENV_LOCK: Mutex<()> = Mutex::new(());
}

struct EnvGuard {
	keys: Vec<&'static str>,
}

impl EnvGuard {
	fn set(pairs: &[(&'static str, &str)]) -> Self {
		for (key, value) in pairs {
			std::env::set_var(key, value);
		}
		EnvGuard {
			keys: pairs.iter().map(|(key, _)| *key).collect(),
		}
	}
}

impl Drop for EnvGuard {
	fn drop(&mut self) {
		for key in &self.keys {
			std::env::remove_var(key);
		}
	}
}

#[test]
fn test_from_env_reads_every_knob() {
	let _lock = ENV_LOCK.lock().unwrap();
	let _guard = EnvGuard::set(&[
		(OVERRIDE_SOURCE_ENV, "/tmp/extra_selectors.yml"),
		(REMOTE_ENABLED_ENV, "true"),
		(REMOTE_URL_ENV, "https://selectors.example.com/all.yml"),
		(FETCH_TIMEOUT_ENV, "3"),
		(CACHE_TTL_ENV, "120"),
	]);

	let config = RegistryConfig::from_env();
	assert_eq!(
		config.override_source.as_deref(),
		Some("/tmp/extra_selectors.yml")
	);
	assert!(config.remote_enabled);
	assert_eq!(config.remote_url, "https://selectors.example.com/all.yml");
	assert_eq!(config.fetch_timeout, Duration::from_secs(3));
	assert_eq!(config.cache_ttl, Duration::from_secs(120));
	assert!(!config.strict);
}

#[test]
fn test_from_env_defaults_when_unset() {
	let _lock = ENV_LOCK.lock().unwrap();

	let defaults = RegistryConfig::default();
	let config = RegistryConfig::from_env();
	assert_eq!(config.override_source, None);
	assert_eq!(config.remote_enabled, defaults.remote_enabled);
	assert_eq!(config.remote_url, defaults.remote_url);
	assert_eq!(config.fetch_timeout, defaults.fetch_timeout);
	assert_eq!(config.cache_ttl, defaults.cache_ttl);
}

#[test]
fn test_from_env_ignores_unparseable_values() {
	let _lock = ENV_LOCK.lock().unwrap();
	let _guard = EnvGuard::set(&[
		(REMOTE_ENABLED_ENV, "yes-please"),
		(FETCH_TIMEOUT_ENV, "soon"),
	]);

	let config = RegistryConfig::from_env();
	assert!(!config.remote_enabled);
	assert_eq!(config.fetch_timeout, RegistryConfig::default().fetch_timeout);
}
