//! Transaction search tests: pagination, empty-block handling, failover.

use mockito::{Matcher, Server};

use crate::integration::mocks::{raw_tx_entry, test_client, tx_search_body};

fn page_matcher(page: &str) -> Matcher {
	Matcher::AllOf(vec![Matcher::UrlEncoded("page".into(), page.into())])
}

#[tokio::test]
async fn test_pagination_accumulates_until_total_count() {
	let mut server = Server::new_async().await;

	let page1 = server
		.mock("GET", "/tx_search")
		.match_query(page_matcher("1"))
		.with_status(200)
		.with_body(tx_search_body(
			vec![raw_tx_entry("TX1", 0), raw_tx_entry("TX2", 1)],
			5,
		))
		.expect(1)
		.create_async()
		.await;
	let page2 = server
		.mock("GET", "/tx_search")
		.match_query(page_matcher("2"))
		.with_status(200)
		.with_body(tx_search_body(
			vec![raw_tx_entry("TX3", 2), raw_tx_entry("TX4", 3)],
			5,
		))
		.expect(1)
		.create_async()
		.await;
	let page3 = server
		.mock("GET", "/tx_search")
		.match_query(page_matcher("3"))
		.with_status(200)
		.with_body(tx_search_body(vec![raw_tx_entry("TX5", 4)], 5))
		.expect(1)
		.create_async()
		.await;

	let client = test_client(vec![], vec![server.url()]).await;
	let txs = client.get_txs_in_block(5).await;

	let hashes: Vec<_> = txs.iter().map(|tx| tx.hash.as_str()).collect();
	assert_eq!(hashes, vec!["TX1", "TX2", "TX3", "TX4", "TX5"]);

	page1.assert_async().await;
	page2.assert_async().await;
	page3.assert_async().await;
}

#[tokio::test]
async fn test_empty_result_tries_next_gateway() {
	let mut behind = Server::new_async().await;
	let mut indexed = Server::new_async().await;

	let behind_mock = behind
		.mock("GET", "/tx_search")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(tx_search_body(vec![], 0))
		.expect(1)
		.create_async()
		.await;
	let indexed_mock = indexed
		.mock("GET", "/tx_search")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(tx_search_body(vec![raw_tx_entry("TX1", 0)], 1))
		.expect(1)
		.create_async()
		.await;

	let client = test_client(vec![], vec![behind.url(), indexed.url()]).await;
	let txs = client.get_txs_in_block(5).await;

	assert_eq!(txs.len(), 1);
	assert_eq!(txs[0].hash, "TX1");

	behind_mock.assert_async().await;
	indexed_mock.assert_async().await;
}

#[tokio::test]
async fn test_all_gateways_empty_yields_empty_block() {
	let mut first = Server::new_async().await;
	let mut second = Server::new_async().await;

	first
		.mock("GET", "/tx_search")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(tx_search_body(vec![], 0))
		.expect(1)
		.create_async()
		.await;
	second
		.mock("GET", "/tx_search")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(tx_search_body(vec![], 0))
		.expect(1)
		.create_async()
		.await;

	let client = test_client(vec![], vec![first.url(), second.url()]).await;

	// An empty block is a legitimate outcome, not an error.
	assert!(client.get_txs_in_block(5).await.is_empty());
}

#[tokio::test]
async fn test_page_error_discards_partial_pages_and_fails_over() {
	let mut partial = Server::new_async().await;
	let mut complete = Server::new_async().await;

	partial
		.mock("GET", "/tx_search")
		.match_query(page_matcher("1"))
		.with_status(200)
		.with_body(tx_search_body(
			vec![raw_tx_entry("STALE1", 0), raw_tx_entry("STALE2", 1)],
			5,
		))
		.expect(1)
		.create_async()
		.await;
	partial
		.mock("GET", "/tx_search")
		.match_query(page_matcher("2"))
		.with_status(500)
		.expect(1)
		.create_async()
		.await;
	complete
		.mock("GET", "/tx_search")
		.match_query(page_matcher("1"))
		.with_status(200)
		.with_body(tx_search_body(vec![raw_tx_entry("GOOD", 0)], 1))
		.expect(1)
		.create_async()
		.await;

	let client = test_client(vec![], vec![partial.url(), complete.url()]).await;
	let txs = client.get_txs_in_block(5).await;

	// Partial pages from the broken gateway must not leak into the result.
	assert_eq!(txs.len(), 1);
	assert_eq!(txs[0].hash, "GOOD");
}

#[tokio::test]
async fn test_decoded_payloads_come_back_as_bytes() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/tx_search")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(tx_search_body(vec![raw_tx_entry("TX1", 0)], 1))
		.create_async()
		.await;

	let client = test_client(vec![], vec![server.url()]).await;
	let txs = client.get_txs_in_block(5).await;

	assert_eq!(txs[0].tx, b"payload");
	assert_eq!(txs[0].code, 0);
	assert_eq!(txs[0].index, 0);
}
