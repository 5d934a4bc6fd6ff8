//! Tests for the client-side filter engine.
//!
//! Covers the facet derivations (duplicate-free, sorted) and the four-way
//! visibility predicate, including the missing-publication-date policy and
//! the lexicographic date-range comparisons.

use regbrowse::app::filter::{agency_options, document_matches, type_options, visible_documents, FilterState};
use regbrowse::domain::{Agency, Document};

fn doc(id: &str, date: &str, doc_type: Option<&str>, agencies: &[&str]) -> Document {
    Document {
        id: id.to_string(),
        title: format!("Document {id}"),
        publication_date: date.to_string(),
        document_type: doc_type.map(String::from),
        agencies: agencies
            .iter()
            .map(|name| Agency {
                name: (*name).to_string(),
            })
            .collect(),
        abstract_text: None,
        citation: None,
        source_url: String::new(),
    }
}

fn filters(agency: &str, doc_type: &str, start: &str, end: &str) -> FilterState {
    FilterState {
        agency: agency.to_string(),
        document_type: doc_type.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
    }
}

#[test]
fn agency_options_are_sorted_and_deduplicated() {
    let docs = vec![
        doc("1", "2024-01-01", None, &["Treasury Department", "EPA"]),
        doc("2", "2024-01-02", None, &["EPA", "Commerce Department"]),
        doc("3", "2024-01-03", None, &[]),
    ];

    let options = agency_options(&docs);
    assert_eq!(
        options,
        vec!["Commerce Department", "EPA", "Treasury Department"]
    );

    let mut sorted = options.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(options, sorted);
}

#[test]
fn type_options_skip_missing_and_empty_values() {
    let docs = vec![
        doc("1", "2024-01-01", Some("Rule"), &[]),
        doc("2", "2024-01-02", Some("Notice"), &[]),
        doc("3", "2024-01-03", Some("Rule"), &[]),
        doc("4", "2024-01-04", None, &[]),
        doc("5", "2024-01-05", Some(""), &[]),
    ];

    assert_eq!(type_options(&docs), vec!["Notice", "Rule"]);
}

#[test]
fn uniform_type_page_yields_single_option_and_filters_accordingly() {
    // Initial load returns 20 documents, all rules.
    let docs: Vec<Document> = (0..20)
        .map(|i| doc(&format!("2024-{i:05}"), "2024-06-01", Some("Rule"), &["EPA"]))
        .collect();

    assert_eq!(type_options(&docs), vec!["Rule"]);

    let rule_filter = filters("", "Rule", "", "");
    assert_eq!(visible_documents(&docs, &rule_filter).len(), 20);

    let notice_filter = filters("", "Notice", "", "");
    assert_eq!(visible_documents(&docs, &notice_filter).len(), 0);
}

#[test]
fn visible_subset_is_subset_and_every_item_passes_all_predicates() {
    let docs = vec![
        doc("1", "2024-03-15", Some("Rule"), &["EPA"]),
        doc("2", "2024-05-20", Some("Notice"), &["EPA", "DOT"]),
        doc("3", "2023-12-31", Some("Rule"), &["DOT"]),
        doc("4", "", Some("Rule"), &["EPA"]),
        doc("5", "2024-07-01", None, &["EPA"]),
    ];

    let active = filters("EPA", "Rule", "2024-01-01", "2024-12-31");
    let visible = visible_documents(&docs, &active);

    assert!(visible.len() <= docs.len());
    for document in &visible {
        assert!(docs.contains(document));
        assert!(document_matches(document, &active));
        assert!(document.agencies.iter().any(|a| a.name == "EPA"));
        assert_eq!(document.document_type.as_deref(), Some("Rule"));
        assert!(document.publication_date.as_str() >= "2024-01-01");
        assert!(document.publication_date.as_str() <= "2024-12-31");
    }

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "1");
}

#[test]
fn agency_filter_requires_exact_name_match() {
    let document = doc("1", "2024-03-15", None, &["Environmental Protection Agency"]);

    assert!(document_matches(
        &document,
        &filters("Environmental Protection Agency", "", "", "")
    ));
    assert!(!document_matches(&document, &filters("Environmental", "", "", "")));
    assert!(!document_matches(&document, &filters("EPA", "", "", "")));
}

#[test]
fn date_range_bounds_are_inclusive_and_lexicographic() {
    let document = doc("1", "2024-03-15", None, &[]);

    assert!(document_matches(
        &document,
        &filters("", "", "2024-01-01", "2024-12-31")
    ));
    assert!(!document_matches(&document, &filters("", "", "2024-04-01", "")));
    // Inclusive at both ends.
    assert!(document_matches(
        &document,
        &filters("", "", "2024-03-15", "2024-03-15")
    ));
    assert!(!document_matches(&document, &filters("", "", "", "2024-03-14")));
}

#[test]
fn missing_publication_date_fails_any_active_date_bound() {
    let document = doc("1", "", Some("Rule"), &["EPA"]);

    assert!(!document_matches(&document, &filters("", "", "2024-01-01", "")));
    assert!(!document_matches(&document, &filters("", "", "", "2024-12-31")));
    // No active date bound: the document passes.
    assert!(document_matches(&document, &filters("", "", "", "")));
}

#[test]
fn empty_filters_show_everything_including_duplicates() {
    let docs = vec![
        doc("1", "2024-01-01", Some("Rule"), &["EPA"]),
        doc("1", "2024-01-01", Some("Rule"), &["EPA"]),
        doc("2", "", None, &[]),
    ];

    let visible = visible_documents(&docs, &FilterState::default());
    assert_eq!(visible.len(), 3);
}

#[test]
fn reset_clears_all_four_fields() {
    let mut state = filters("EPA", "Rule", "2024-01-01", "2024-12-31");
    state.reset();
    assert_eq!(state, FilterState::default());
}
