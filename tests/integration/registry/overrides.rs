use std::io::Write;

use tempfile::NamedTempFile;

use chain_registry::{
	models::{ChainFamily, RegistryConfig},
	services::registry::{RegistryError, RegistryService},
};

fn write_override_file(yaml: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(yaml.as_bytes()).unwrap();
	file.flush().unwrap();
	file
}

fn registry_with_override(source: String) -> RegistryService {
	let config = RegistryConfig {
		override_source: Some(source),
		..RegistryConfig::default()
	};
	RegistryService::new(config).unwrap()
}

#[test]
fn test_override_adds_new_chain() {
	let file = write_override_file(
		r#"
evm:
  999:
    selector: 1234567890123456789
    name: "custom"
"#,
	);
	let registry = registry_with_override(file.path().to_string_lossy().to_string());

	let details = registry
		.details_by_chain_id_and_family("999", ChainFamily::Evm)
		.unwrap();
	assert_eq!(details.name, "custom");
	assert_eq!(details.selector, 1234567890123456789);

	// the override entry also resolves backwards
	let entry = registry.entry_by_selector(1234567890123456789).unwrap();
	assert_eq!(entry.family, ChainFamily::Evm);
	assert_eq!(entry.chain_id.to_string(), "999");
}

#[test]
fn test_override_does_not_clobber_static_entry() {
	let file = write_override_file(
		r#"
evm:
  1:
    selector: 4242424242
    name: "bogus-ethereum"
"#,
	);
	let registry = registry_with_override(file.path().to_string_lossy().to_string());

	// the compiled-in entry wins; the override is dropped with a diagnostic
	let details = registry
		.details_by_chain_id_and_family("1", ChainFamily::Evm)
		.unwrap();
	assert_eq!(details.name, "ethereum-mainnet");
	assert_eq!(details.selector, 5009297550715157269);

	// the shadowed override selector resolves nowhere
	assert!(matches!(
		registry.chain_id_from_selector(4242424242),
		Err(RegistryError::NotFound(_))
	));
}

#[test]
fn test_missing_override_source_yields_no_extra_chains() {
	let registry = RegistryService::new(RegistryConfig::default()).unwrap();
	assert!(matches!(
		registry.details_by_chain_id_and_family("999", ChainFamily::Evm),
		Err(RegistryError::NotFound(_))
	));
}

#[test]
fn test_override_loaded_from_url() {
	let mut server = mockito::Server::new();
	let mock = server
		.mock("GET", "/extra_selectors.yml")
		.with_status(200)
		.with_body(
			r#"
sui:
  777:
    selector: 2222222222222222222
    name: "sui-custom"
"#,
		)
		.expect(1)
		.create();

	let registry = registry_with_override(format!("{}/extra_selectors.yml", server.url()));

	let details = registry
		.details_by_chain_id_and_family("777", ChainFamily::Sui)
		.unwrap();
	assert_eq!(details.name, "sui-custom");

	// loaded exactly once, later lookups reuse the loaded tables
	registry
		.details_by_chain_id_and_family("777", ChainFamily::Sui)
		.unwrap();
	mock.assert();
}

#[test]
fn test_override_with_duplicate_selector_fails_uniqueness_check() {
	// reuses ethereum-mainnet's selector under a fresh chain ID
	let file = write_override_file(
		r#"
evm:
  999:
    selector: 5009297550715157269
    name: "selector-thief"
"#,
	);
	let registry = registry_with_override(file.path().to_string_lossy().to_string());

	assert!(matches!(
		registry.verify_selector_uniqueness(),
		Err(RegistryError::DataIntegrityViolation(_))
	));
}

#[test]
#[should_panic(expected = "Load error")]
fn test_unparseable_override_is_fatal() {
	let file = write_override_file("evm: [not, a, mapping]");
	let registry = registry_with_override(file.path().to_string_lossy().to_string());

	// first access triggers the load
	let _ = registry.details_by_chain_id_and_family("1", ChainFamily::Cosmos);
}

#[test]
#[should_panic(expected = "Validation error")]
fn test_structurally_invalid_override_is_fatal() {
	// genesis hash does not decode to 32 bytes
	let file = write_override_file(
		r#"
solana:
  "abc":
    selector: 99
"#,
	);
	let registry = registry_with_override(file.path().to_string_lossy().to_string());

	let _ = registry.details_by_chain_id_and_family("1", ChainFamily::Cosmos);
}

#[test]
#[should_panic(expected = "Load error")]
fn test_unreadable_override_source_is_fatal() {
	let registry = registry_with_override("/nonexistent/extra_selectors.yml".to_string());
	let _ = registry.details_by_chain_id_and_family("1", ChainFamily::Cosmos);
}
