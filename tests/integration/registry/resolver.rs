use chain_registry::{
	models::{ChainFamily, ChainIdentifier, RegistryConfig},
	services::registry::{parse_family, RegistryError, RegistryService},
};

fn local_registry() -> RegistryService {
	RegistryService::new(RegistryConfig::default()).unwrap()
}

#[test]
fn test_ethereum_mainnet_round_trip() {
	let registry = local_registry();

	let selector = registry
		.selector_from_chain_id(ChainFamily::Evm, "1")
		.unwrap();
	assert_eq!(selector, 5009297550715157269);

	let chain_id = registry.chain_id_from_selector(selector).unwrap();
	assert_eq!(chain_id.to_string(), "1");

	let family = registry.family_from_selector(selector).unwrap();
	assert_eq!(family, ChainFamily::Evm);

	let details = registry
		.details_by_chain_id_and_family("1", ChainFamily::Evm)
		.unwrap();
	assert_eq!(details.name, "ethereum-mainnet");
}

#[test]
fn test_every_static_chain_round_trips() {
	let registry = local_registry();

	for family in ChainFamily::ALL {
		for chain_id in registry.chain_ids_for_family(family) {
			let raw = chain_id.to_string();
			let selector = registry.selector_from_chain_id(family, &raw).unwrap();

			let resolved_id = registry.chain_id_from_selector(selector).unwrap();
			assert_eq!(resolved_id, chain_id);

			let resolved_family = registry.family_from_selector(selector).unwrap();
			assert_eq!(resolved_family, family);
		}
	}
}

#[test]
fn test_unknown_selector_is_not_found() {
	let registry = local_registry();

	let result = registry.chain_id_from_selector(0);
	assert!(matches!(result, Err(RegistryError::NotFound(_))));

	let result = registry.family_from_selector(0);
	assert!(matches!(result, Err(RegistryError::NotFound(_))));

	assert!(!registry.is_known_selector(0));
	assert!(registry.is_known_selector(5009297550715157269));
}

#[test]
fn test_unknown_chain_id_is_not_found() {
	let registry = local_registry();

	let result = registry.selector_from_chain_id(ChainFamily::Evm, "424242424242");
	assert!(matches!(result, Err(RegistryError::NotFound(_))));

	let result = registry.details_by_chain_id_and_family("424242424242", ChainFamily::Evm);
	assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

#[test]
fn test_no_cross_family_leakage() {
	let registry = local_registry();

	// a valid tron chain ID does not resolve under evm
	assert!(registry
		.selector_from_chain_id(ChainFamily::Tron, "728126428")
		.is_ok());
	assert!(matches!(
		registry.selector_from_chain_id(ChainFamily::Evm, "728126428"),
		Err(RegistryError::NotFound(_))
	));

	// chain ID 1 exists in several families, each with its own selector
	let evm = registry
		.selector_from_chain_id(ChainFamily::Evm, "1")
		.unwrap();
	let beacon = registry
		.selector_from_chain_id(ChainFamily::Beacon, "1")
		.unwrap();
	let sui = registry
		.selector_from_chain_id(ChainFamily::Sui, "1")
		.unwrap();
	assert_ne!(evm, beacon);
	assert_ne!(evm, sui);
	assert_ne!(beacon, sui);
}

#[test]
fn test_workchain_and_named_identifiers_resolve() {
	let registry = local_registry();

	let ton = registry
		.selector_from_chain_id(ChainFamily::Ton, "-239")
		.unwrap();
	assert_eq!(ton, 16448340667252469081);
	assert_eq!(
		registry.chain_id_from_selector(ton).unwrap(),
		ChainIdentifier::Workchain(-239)
	);

	let solana = registry
		.selector_from_chain_id(
			ChainFamily::Solana,
			"5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d",
		)
		.unwrap();
	assert_eq!(solana, 124615329519749607);

	let starknet = registry
		.details_by_chain_id_and_family("SN_MAIN", ChainFamily::Starknet)
		.unwrap();
	assert_eq!(starknet.name, "ethereum-mainnet-starknet-1");
}

#[test]
fn test_malformed_identifiers_are_rejected() {
	let registry = local_registry();

	assert!(matches!(
		registry.selector_from_chain_id(ChainFamily::Evm, "not-a-number"),
		Err(RegistryError::MalformedIdentifier(_))
	));
	assert!(matches!(
		registry.selector_from_chain_id(ChainFamily::Evm, "-1"),
		Err(RegistryError::MalformedIdentifier(_))
	));
	assert!(matches!(
		registry.details_by_chain_id_and_family("mainnet", ChainFamily::Ton),
		Err(RegistryError::MalformedIdentifier(_))
	));
}

#[test]
fn test_family_name_parsing() {
	assert_eq!(parse_family("evm").unwrap(), ChainFamily::Evm);
	assert_eq!(parse_family("ton").unwrap(), ChainFamily::Ton);
	assert!(matches!(
		parse_family("polkadot"),
		Err(RegistryError::UnsupportedFamily(_))
	));
}

#[test]
fn test_name_defaults_to_chain_id_for_test_networks() {
	let registry = local_registry();

	// test-network entries carry no name in the embedded tables
	let details = registry
		.details_by_chain_id_and_family("1337", ChainFamily::Evm)
		.unwrap();
	assert_eq!(details.name, "1337");

	assert_eq!(
		registry
			.name_from_chain_id(ChainFamily::Evm, "90000001")
			.unwrap(),
		"90000001"
	);

	// named chains keep their explicit name
	assert_eq!(
		registry.name_from_chain_id(ChainFamily::Evm, "1").unwrap(),
		"ethereum-mainnet"
	);
}

#[test]
fn test_test_chain_ids_only_cover_the_test_table() {
	let registry = local_registry();

	let test_ids = registry.test_chain_ids(ChainFamily::Evm);
	assert!(test_ids.contains(&ChainIdentifier::Numeric(1337)));
	assert!(!test_ids.contains(&ChainIdentifier::Numeric(1)));

	// families without a test table yield an empty list
	assert!(registry.test_chain_ids(ChainFamily::Ton).is_empty());
}

#[test]
fn test_returned_collections_are_defensive_copies() {
	let registry = local_registry();

	let mut selectors = registry.selectors_for_family(ChainFamily::Evm);
	let original = selectors.clone();
	selectors.clear();
	selectors.push(42);

	assert_eq!(registry.selectors_for_family(ChainFamily::Evm), original);
}

#[test]
fn test_selector_uniqueness_holds_for_compiled_in_data() {
	let registry = local_registry();
	registry.verify_selector_uniqueness().unwrap();
}

#[test]
fn test_strict_registry_construction_succeeds() {
	let config = RegistryConfig {
		strict: true,
		..RegistryConfig::default()
	};
	assert!(RegistryService::new(config).is_ok());
}
