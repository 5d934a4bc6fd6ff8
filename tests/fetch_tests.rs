//! Tests for the document API client.
//!
//! Uses wiremock to pin down the request contract (fixed parameters, the
//! conditionally present search term) and the response handling (status
//! mapping, lenient payload decoding).

use regbrowse::domain::RegbrowseError;
use regbrowse::fetch::DocumentClient;
use url::Url;
use wiremock::matchers::{method, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DocumentClient {
    let base_url = Url::parse(&server.uri()).expect("mock server uri");
    DocumentClient::new(base_url).expect("client")
}

fn results_body(count: usize) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "document_number": format!("2024-{i:05}"),
                "title": format!("Document {i}"),
                "publication_date": "2024-06-01",
                "document_type": "Rule",
                "agencies": [{"name": "Environmental Protection Agency"}],
                "abstract": "A short abstract.",
                "citation": "89 FR 1",
                "html_url": "https://www.federalregister.gov/d/x"
            })
        })
        .collect();
    serde_json::json!({ "results": results })
}

#[tokio::test]
async fn empty_keyword_omits_the_search_term_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("per_page", "20"))
        .and(query_param("order", "newest"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("conditions[term]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(2)))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    // Fully empty, and whitespace-only (treated as empty after trimming).
    let page = client.fetch_page("", 1).await.expect("fetch");
    assert_eq!(page.documents.len(), 2);

    let page = client.fetch_page("   ", 1).await.expect("fetch");
    assert_eq!(page.documents.len(), 2);
}

#[tokio::test]
async fn keyword_is_trimmed_and_sent_as_search_term() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("per_page", "20"))
        .and(query_param("order", "newest"))
        .and(query_param("page", "3"))
        .and(query_param("conditions[term]", "climate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.fetch_page("  climate  ", 3).await.expect("fetch");
    assert_eq!(page.documents.len(), 1);
}

#[tokio::test]
async fn non_success_status_maps_to_a_request_error_with_the_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.fetch_page("", 1).await.expect_err("should fail");

    match error {
        RegbrowseError::Request { status } => assert_eq!(status, 429),
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn absent_results_field_is_an_empty_page_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 0,
            "description": "documents matching nothing"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.fetch_page("", 1).await.expect("fetch");

    assert!(page.documents.is_empty());
    assert!(!page.has_more);
}

#[tokio::test]
async fn undecodable_body_surfaces_as_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.fetch_page("", 1).await.expect_err("should fail");
    assert!(matches!(error, RegbrowseError::Http(_)));
}

#[tokio::test]
async fn payload_maps_into_domain_documents_with_lenient_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {
                    "document_number": "2024-05000",
                    "title": "Air Plan Approval",
                    "publication_date": "2024-03-15",
                    "document_type": "Rule",
                    "agencies": [
                        {"name": "Environmental Protection Agency"},
                        {"raw_name": "entry without a name"}
                    ],
                    "abstract": "Approval of a state plan.",
                    "citation": "89 FR 18501",
                    "html_url": "https://www.federalregister.gov/d/2024-05000"
                },
                {
                    "document_number": "2024-05001",
                    "title": "Sparse Document"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.fetch_page("", 1).await.expect("fetch");

    assert!(page.has_more);
    assert_eq!(page.documents.len(), 2);

    let full = &page.documents[0];
    assert_eq!(full.id, "2024-05000");
    assert_eq!(full.publication_date, "2024-03-15");
    assert_eq!(full.document_type.as_deref(), Some("Rule"));
    assert_eq!(full.abstract_text.as_deref(), Some("Approval of a state plan."));
    assert_eq!(full.citation.as_deref(), Some("89 FR 18501"));
    // The agency entry without a name is dropped.
    assert_eq!(full.agencies.len(), 1);
    assert_eq!(full.agencies[0].name, "Environmental Protection Agency");

    let sparse = &page.documents[1];
    assert_eq!(sparse.id, "2024-05001");
    assert_eq!(sparse.publication_date, "");
    assert!(sparse.document_type.is_none());
    assert!(sparse.agencies.is_empty());
    assert!(sparse.abstract_text.is_none());
    assert_eq!(sparse.source_url, "");
}
