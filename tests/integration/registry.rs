//! Endpoint registry resolution tests.

use std::sync::Arc;

use cosmos_block_watcher::services::registry::{
	ChainEndpointUrls, EndpointKind, EndpointRegistry, RegistryError, StaticEndpointSource,
};

use crate::integration::mocks::MockEndpointSource;

fn source_with(chain: &str, rest: Vec<&str>, rpc: Vec<&str>) -> StaticEndpointSource {
	StaticEndpointSource::new(
		[(
			chain.to_string(),
			ChainEndpointUrls {
				rest: rest.into_iter().map(String::from).collect(),
				rpc: rpc.into_iter().map(String::from).collect(),
			},
		)]
		.into_iter()
		.collect(),
	)
}

#[tokio::test]
async fn test_resolve_merges_sources_in_registration_order() {
	let registry = EndpointRegistry::new(vec![
		Arc::new(source_with(
			"cosmoshub-4",
			vec!["https://rest-a.example.com"],
			vec!["https://rpc-a.example.com"],
		)),
		Arc::new(source_with(
			"cosmoshub-4",
			vec!["https://rest-b.example.com"],
			vec!["https://rpc-b.example.com", "https://rpc-a.example.com"],
		)),
	]);

	let endpoints = registry.resolve("cosmoshub-4").await.unwrap();

	let rpc: Vec<_> = endpoints
		.endpoints(EndpointKind::Rpc)
		.iter()
		.map(|e| e.url().to_string())
		.collect();
	// First-seen order kept, duplicate from the second source dropped.
	assert_eq!(
		rpc,
		vec!["https://rpc-a.example.com", "https://rpc-b.example.com"]
	);

	let rest: Vec<_> = endpoints
		.endpoints(EndpointKind::Rest)
		.iter()
		.map(|e| e.url().to_string())
		.collect();
	assert_eq!(
		rest,
		vec!["https://rest-a.example.com", "https://rest-b.example.com"]
	);
}

#[tokio::test]
async fn test_resolve_trims_trailing_slashes() {
	let registry = EndpointRegistry::new(vec![Arc::new(source_with(
		"osmosis-1",
		vec![],
		vec!["https://rpc.example.com/"],
	))]);

	let endpoints = registry.resolve("osmosis-1").await.unwrap();
	let rpc = endpoints.endpoints(EndpointKind::Rpc);
	assert_eq!(rpc[0].url(), "https://rpc.example.com");
}

#[tokio::test]
async fn test_resolve_unknown_chain_fails() {
	let registry = EndpointRegistry::new(vec![Arc::new(source_with(
		"cosmoshub-4",
		vec!["https://rest.example.com"],
		vec![],
	))]);

	let result = registry.resolve("not-a-chain").await;
	assert!(matches!(result, Err(RegistryError::UnknownChain(chain)) if chain == "not-a-chain"));
}

#[tokio::test]
async fn test_resolve_with_only_one_kind_succeeds() {
	let registry = EndpointRegistry::new(vec![Arc::new(source_with(
		"juno-1",
		vec![],
		vec!["https://rpc.example.com"],
	))]);

	let endpoints = registry.resolve("juno-1").await.unwrap();
	assert!(endpoints.endpoints(EndpointKind::Rest).is_empty());
	assert_eq!(endpoints.endpoints(EndpointKind::Rpc).len(), 1);
}

#[tokio::test]
async fn test_source_error_propagates() {
	let mut source = MockEndpointSource::new();
	source
		.expect_endpoints_for()
		.returning(|_| Err(anyhow::anyhow!("registry document unreachable")));

	let registry = EndpointRegistry::new(vec![Arc::new(source)]);

	let result = registry.resolve("cosmoshub-4").await;
	assert!(matches!(result, Err(RegistryError::Source { .. })));
}
