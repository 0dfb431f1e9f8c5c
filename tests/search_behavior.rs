//! Behavior-driven tests for search user journeys
//!
//! These tests verify WHAT a caller gets out of the search engine —
//! ranking, partitioning, tolerance for typos — rather than how the tiers
//! are computed internally.

use scripdex_core::{match_security, normalize, MatchTier};
use scripdex_tests::{record, sample_index, scenario_index, symbols, Catalog, MarketType, SearchIndex};

// =============================================================================
// Journey: typing a ticker
// =============================================================================

#[test]
fn user_typing_an_exact_ticker_sees_that_security_first() {
    // Given: the scenario catalog with TCS and Tata Motors
    let index = scenario_index();

    // When: the user types the exact ticker
    let results = index
        .search("tcs", MarketType::Domestic, 8)
        .expect("search should succeed");

    // Then: exactly the ticker's record comes back, first
    assert_eq!(symbols(&results), vec!["TCS"]);
}

#[test]
fn user_typing_a_company_word_sees_all_group_companies_ranked() {
    let index = scenario_index();

    let results = index
        .search("tata", MarketType::Domestic, 8)
        .expect("search should succeed");

    // Both match at the name-token-prefix tier; the shorter display name
    // ("Tata Motors") outranks the longer one.
    assert_eq!(symbols(&results), vec!["TTM", "TCS"]);
}

#[test]
fn user_misspelling_a_company_name_still_finds_it() {
    let index = scenario_index();

    let results = index
        .search("tata consultency", MarketType::Domestic, 8)
        .expect("search should succeed");

    assert_eq!(symbols(&results), vec!["TCS"]);
}

#[test]
fn user_typing_garbage_sees_no_suggestions() {
    let index = scenario_index();

    let results = index
        .search("xyz123", MarketType::Domestic, 8)
        .expect("no match is a normal outcome");

    assert!(results.is_empty());
}

#[test]
fn user_searching_the_foreign_partition_with_limit_one_gets_one_record() {
    let index = scenario_index();

    let results = index
        .search("aapl", MarketType::Foreign, 1)
        .expect("search should succeed");

    assert_eq!(symbols(&results), vec!["AAPL"]);
}

// =============================================================================
// Properties: bounds, partitions, determinism
// =============================================================================

#[test]
fn result_length_never_exceeds_limit() {
    let index = sample_index();

    for limit in 1..=5 {
        let results = index
            .search("a", MarketType::Foreign, limit)
            .expect("search should succeed");
        assert!(
            results.len() <= limit,
            "limit {limit} produced {} results",
            results.len()
        );
    }
}

#[test]
fn every_result_belongs_to_the_requested_partition() {
    let index = sample_index();

    for market in MarketType::ALL {
        let results = index
            .search("in", market, 10)
            .expect("search should succeed");
        assert!(results.iter().all(|record| record.market == market));
    }
}

#[test]
fn repeated_calls_return_identical_sequences() {
    let index = sample_index();

    let first = index
        .search("ta", MarketType::Domestic, 10)
        .expect("search should succeed");
    let second = index
        .search("ta", MarketType::Domestic, 10)
        .expect("search should succeed");

    assert_eq!(symbols(&first), symbols(&second));
}

#[test]
fn interleaved_queries_do_not_disturb_each_other() {
    let index = sample_index();

    let before = symbols(
        &index
            .search("bank", MarketType::Domestic, 10)
            .expect("search should succeed"),
    );

    for query in ["apple", "", "reliance", "zzzz", "m"] {
        let _ = index.search(query, MarketType::Foreign, 3);
    }

    let after = symbols(
        &index
            .search("bank", MarketType::Domestic, 10)
            .expect("search should succeed"),
    );
    assert_eq!(before, after);
}

#[test]
fn results_reference_original_catalog_records() {
    let index = scenario_index();

    let results = index
        .search("tcs", MarketType::Domestic, 8)
        .expect("search should succeed");

    assert_eq!(results[0].full_name, "Tata Consultancy Services");
    assert_eq!(results[0].market, MarketType::Domestic);
}

// =============================================================================
// Properties: tier priority
// =============================================================================

#[test]
fn better_tiers_always_rank_ahead_of_worse_ones() {
    // Given: one candidate per tier for the query "tata"
    let catalog = Catalog::new(
        "v-test",
        vec![
            record("DATAPATT", "Data Patterns", MarketType::Domestic), // fuzzy
            record("SUNTV", "Suntata Media", MarketType::Domestic),    // substring
            record("TCS", "Tata Consultancy Services", MarketType::Domestic), // token prefix
            record("TATAMOTORS", "Tata Motors", MarketType::Domestic), // symbol prefix
            record("TATA", "Tata Sons", MarketType::Domestic),         // exact symbol
        ],
    )
    .expect("valid catalog");
    let index = SearchIndex::new(catalog);

    // When: the user searches "tata"
    let results = index
        .search("tata", MarketType::Domestic, 8)
        .expect("search should succeed");

    // Then: candidates appear strictly in tier priority order
    assert_eq!(
        symbols(&results),
        vec!["TATA", "TATAMOTORS", "TCS", "SUNTV", "DATAPATT"]
    );
}

#[test]
fn case_and_punctuation_do_not_change_results() {
    let index = sample_index();

    let plain = index
        .search("tata consultancy", MarketType::Domestic, 8)
        .expect("search should succeed");
    let noisy = index
        .search("TATA CONSULTANCY!!", MarketType::Domestic, 8)
        .expect("search should succeed");

    assert_eq!(symbols(&plain), symbols(&noisy));
    assert!(!plain.is_empty(), "phrase should match TCS");
}

#[test]
fn empty_query_yields_empty_results() {
    let index = sample_index();

    for query in ["", "   ", "!!!"] {
        let results = index
            .search(query, MarketType::Domestic, 8)
            .expect("empty query is a normal outcome");
        assert!(results.is_empty(), "query {query:?} should match nothing");
    }
}

// =============================================================================
// Properties: fuzzy tolerance bound
// =============================================================================

#[test]
fn one_substitution_in_a_four_char_query_matches_at_the_fuzzy_tier() {
    let tokens = vec![String::from("infosys")];
    let hit = match_security("imfy", "infy", "infosys", &tokens).expect("must match");
    assert_eq!(hit.tier, MatchTier::Fuzzy);
}

#[test]
fn edits_beyond_the_bound_do_not_match_at_the_fuzzy_tier() {
    // "iqfz" is two edits from "infy"; the bound for a 4-char query is 1.
    let tokens = vec![String::from("infosys")];
    assert_eq!(match_security("iqfz", "infy", "infosys", &tokens), None);
}

#[test]
fn fuzzy_exclusion_still_allows_other_tiers() {
    // Two edits over the bound as a fuzzy candidate, but a literal substring.
    let tokens = vec![String::from("infosys")];
    let hit = match_security("nfo", "infy", "infosys", &tokens).expect("must match");
    assert_eq!(hit.tier, MatchTier::Substring);
}

#[test]
fn normalization_is_shared_by_queries_and_candidates() {
    assert_eq!(
        normalize("TATA CONSULTANCY SERVICES."),
        normalize("  tata   consultancy services")
    );
}
