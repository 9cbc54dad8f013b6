//! Search Module Tests
//!
//! Validates the URL state codec and the filter/sort/paginate routine.
//!
//! ## Test Scopes
//! - **Codec**: Defaults, clamping, canonical ordering and round-trips.
//! - **Engine**: Filtering, sort order and stability, page windows and flags.
//! - **Serialization**: JSON shapes of the API and boot payloads.

#[cfg(test)]
mod tests {
    use crate::catalog::memory::{demo_vehicles, InMemoryCatalog};
    use crate::catalog::{CatalogError, VehicleCatalog};
    use crate::search::engine::{search, search_catalog};
    use crate::search::state::{parse, serialize, to_url};
    use crate::search::types::{
        SearchApiResponse, SearchResultPage, SearchState, SortOption, VehicleRecord,
    };
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::Arc;

    const PAGE_SIZE: usize = 5;

    fn ids(page: &SearchResultPage) -> Vec<&str> {
        page.results.iter().map(|v| v.id.as_str()).collect()
    }

    fn record(id: &str, title: &str, price: f64) -> VehicleRecord {
        VehicleRecord {
            id: id.to_string(),
            title: title.to_string(),
            price,
            description: String::new(),
        }
    }

    fn sort_strategy() -> impl Strategy<Value = SortOption> {
        prop::sample::select(SortOption::ALL.to_vec())
    }

    // ============================================================
    // CODEC TESTS - parse
    // ============================================================

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse(""), SearchState::default());
        assert_eq!(parse("?"), SearchState::default());
    }

    #[test]
    fn test_parse_all_params() {
        let state = parse("q=honda&page=3&sort=price_desc");

        assert_eq!(state.query, "honda");
        assert_eq!(state.page, 3);
        assert_eq!(state.sort, SortOption::PriceDesc);
    }

    #[test]
    fn test_parse_tolerates_leading_question_mark() {
        assert_eq!(parse("?q=civic").query, "civic");
    }

    #[test]
    fn test_parse_decodes_form_encoding() {
        let state = parse("q=mid-size+sedan%21");
        assert_eq!(state.query, "mid-size sedan!");
    }

    #[test]
    fn test_parse_unknown_sort_falls_back_to_relevance() {
        assert_eq!(parse("sort=cheapest").sort, SortOption::Relevance);
        assert_eq!(parse("sort=PRICE_ASC").sort, SortOption::Relevance);
        assert_eq!(parse("sort=").sort, SortOption::Relevance);
    }

    #[test]
    fn test_parse_invalid_page_becomes_one() {
        assert_eq!(parse("page=abc").page, 1);
        assert_eq!(parse("page=").page, 1);
        assert_eq!(parse("page=0").page, 1);
        assert_eq!(parse("page=-4").page, 1);
    }

    #[test]
    fn test_parse_page_numeric_prefix() {
        // Same as parseInt: leading digits win, the rest is ignored
        assert_eq!(parse("page=3abc").page, 3);
        assert_eq!(parse("page=+2").page, 2);
        assert_eq!(parse("page=%207").page, 7);
    }

    #[test]
    fn test_parse_page_overflow_saturates() {
        assert_eq!(parse("page=99999999999999999999").page, u32::MAX);
    }

    #[test]
    fn test_parse_first_occurrence_wins() {
        let state = parse("q=ford&q=audi&page=2&page=5&sort=price_asc&sort=price_desc");

        assert_eq!(state.query, "ford");
        assert_eq!(state.page, 2);
        assert_eq!(state.sort, SortOption::PriceAsc);
    }

    #[test]
    fn test_parse_ignores_unknown_params() {
        let state = parse("utm_source=mail&q=jeep&debug");
        assert_eq!(state, SearchState::new("jeep", 1, SortOption::Relevance));
    }

    // ============================================================
    // CODEC TESTS - serialize / to_url
    // ============================================================

    #[test]
    fn test_serialize_default_is_empty() {
        assert_eq!(serialize(&SearchState::default()), "");
    }

    #[test]
    fn test_serialize_fixed_order() {
        let state = SearchState::new("honda", 2, SortOption::PriceAsc);
        assert_eq!(serialize(&state), "q=honda&page=2&sort=price_asc");
    }

    #[test]
    fn test_serialize_omits_defaults() {
        assert_eq!(
            serialize(&SearchState::new("", 4, SortOption::Relevance)),
            "page=4"
        );
        assert_eq!(
            serialize(&SearchState::new("", 1, SortOption::PriceDesc)),
            "sort=price_desc"
        );
        assert_eq!(
            serialize(&SearchState::new("bmw", 1, SortOption::Relevance)),
            "q=bmw"
        );
    }

    #[test]
    fn test_serialize_encodes_query() {
        let state = SearchState::new("a&b=c d", 1, SortOption::Relevance);
        let encoded = serialize(&state);

        assert_eq!(encoded, "q=a%26b%3Dc+d");
        assert_eq!(parse(&encoded), state);
    }

    #[test]
    fn test_to_url() {
        assert_eq!(to_url(&SearchState::default(), "/custom/search"), "/custom/search");
        assert_eq!(
            to_url(&SearchState::new("kia", 2, SortOption::Relevance), "/custom/search"),
            "/custom/search?q=kia&page=2"
        );
    }

    #[test]
    fn test_page_helpers_clamp() {
        let first = SearchState::default();
        assert_eq!(first.prev_page().page, 1);
        assert_eq!(first.next_page().page, 2);
        assert_eq!(first.with_page(0).page, 1);
        assert_eq!(SearchState::new("x", 0, SortOption::Relevance).page, 1);
    }

    #[test]
    fn test_sort_option_from_str_and_display() {
        for opt in SortOption::ALL {
            assert_eq!(opt.to_string().parse::<SortOption>(), Ok(opt));
        }
        assert!("newest".parse::<SortOption>().is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip(query in ".*", page in 1u32..=u32::MAX, sort in sort_strategy()) {
            let state = SearchState::new(query, page, sort);
            prop_assert_eq!(parse(&serialize(&state)), state);
        }

        #[test]
        fn prop_parse_never_fails(raw in ".*") {
            let state = parse(&raw);
            prop_assert!(state.page >= 1);
            prop_assert!(SortOption::ALL.contains(&state.sort));
        }

        #[test]
        fn prop_parse_arbitrary_page_values(page in ".*", sort in ".*") {
            let raw = serde_urlencoded::to_string(vec![("page", page), ("sort", sort)]).unwrap();
            let state = parse(&raw);
            prop_assert!(state.page >= 1);
            prop_assert!(SortOption::ALL.contains(&state.sort));
        }
    }

    // ============================================================
    // ENGINE TESTS - filtering
    // ============================================================

    #[test]
    fn test_search_empty_query_matches_all() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::default(), &catalog, PAGE_SIZE);

        assert_eq!(page.total, catalog.len());
        assert_eq!(page.results.len(), PAGE_SIZE);
    }

    #[test]
    fn test_search_whitespace_query_matches_all() {
        let catalog = demo_vehicles();
        let state = SearchState::new("   ", 1, SortOption::Relevance);

        assert_eq!(search(&state, &catalog, PAGE_SIZE).total, catalog.len());
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace_in_query() {
        // "sedan " only hits descriptions with a word after "sedan"
        let catalog = demo_vehicles();
        let state = SearchState::new("sedan ", 1, SortOption::Relevance);
        let page = search(&state, &catalog, 20);

        assert_eq!(ids(&page), vec!["1", "2"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_search_honda_matches_case_insensitively() {
        let catalog = demo_vehicles();

        for q in ["honda", "HONDA", "HoNdA"] {
            let page = search(&SearchState::new(q, 1, SortOption::Relevance), &catalog, PAGE_SIZE);
            assert_eq!(page.total, 1);
            for v in &page.results {
                let hit = v.title.to_lowercase().contains("honda")
                    || v.description.to_lowercase().contains("honda");
                assert!(hit, "{} should match honda", v.title);
            }
        }
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("suv", 1, SortOption::Relevance), &catalog, PAGE_SIZE);

        // Mazda CX-5, Jeep Wrangler, Kia Telluride
        assert_eq!(page.total, 3);
        assert_eq!(ids(&page), vec!["7", "10", "12"]);
    }

    #[test]
    fn test_search_no_matches() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("spaceship", 1, SortOption::Relevance), &catalog, PAGE_SIZE);

        assert_eq!(page.total, 0);
        assert!(page.results.is_empty());
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    // ============================================================
    // ENGINE TESTS - sorting
    // ============================================================

    #[test]
    fn test_search_price_asc_non_decreasing() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("", 1, SortOption::PriceAsc), &catalog, catalog.len());

        assert!(page.results.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_search_price_desc_non_increasing() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("", 1, SortOption::PriceDesc), &catalog, catalog.len());

        assert!(page.results.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(page.results[0].id, "14");
    }

    #[test]
    fn test_search_relevance_preserves_catalog_order() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::default(), &catalog, catalog.len());

        assert_eq!(page.results, catalog);
    }

    #[test]
    fn test_search_sort_is_stable_on_ties() {
        let catalog = vec![
            record("a", "first", 100.0),
            record("b", "second", 50.0),
            record("c", "third", 100.0),
            record("d", "fourth", 50.0),
        ];

        let asc = search(&SearchState::new("", 1, SortOption::PriceAsc), &catalog, 10);
        assert_eq!(ids(&asc), vec!["b", "d", "a", "c"]);

        let desc = search(&SearchState::new("", 1, SortOption::PriceDesc), &catalog, 10);
        assert_eq!(ids(&desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_search_sorts_fractional_prices() {
        let catalog = vec![
            record("a", "first", 19999.99),
            record("b", "second", 19999.5),
            record("c", "third", 19999.99),
            record("d", "fourth", 20000.0),
        ];

        let asc = search(&SearchState::new("", 1, SortOption::PriceAsc), &catalog, 10);
        assert_eq!(ids(&asc), vec!["b", "a", "c", "d"]);

        let desc = search(&SearchState::new("", 1, SortOption::PriceDesc), &catalog, 10);
        assert_eq!(ids(&desc), vec!["d", "a", "c", "b"]);
    }

    // ============================================================
    // ENGINE TESTS - pagination
    // ============================================================

    #[test]
    fn test_search_zero_page_size_treated_as_one() {
        let catalog = demo_vehicles();

        let first = search(&SearchState::new("", 1, SortOption::Relevance), &catalog, 0);
        assert_eq!(ids(&first), vec!["1"]);
        assert!(first.has_next);

        let last = search(&SearchState::new("", 15, SortOption::Relevance), &catalog, 0);
        assert_eq!(ids(&last), vec!["15"]);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn test_search_page_two_price_asc() {
        // 15 items, 5 per page: ranks 6-10 by ascending price
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("", 2, SortOption::PriceAsc), &catalog, PAGE_SIZE);

        assert_eq!(ids(&page), vec!["2", "9", "3", "10", "12"]);
        assert_eq!(page.total, 15);
        assert!(page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn test_search_first_page_has_no_prev() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::default(), &catalog, PAGE_SIZE);

        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn test_search_last_page_has_no_next() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("", 3, SortOption::Relevance), &catalog, PAGE_SIZE);

        assert_eq!(page.results.len(), 5);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_search_partial_last_page() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("", 2, SortOption::Relevance), &catalog, 10);

        assert_eq!(page.results.len(), 5);
        assert!(!page.has_next);
    }

    #[test]
    fn test_search_beyond_last_page_is_empty() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("", 9, SortOption::PriceDesc), &catalog, PAGE_SIZE);

        assert!(page.results.is_empty());
        assert_eq!(page.total, 15);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_search_huge_page_does_not_overflow() {
        let catalog = demo_vehicles();
        let page = search(&SearchState::new("", u32::MAX, SortOption::Relevance), &catalog, usize::MAX);

        assert!(page.results.is_empty());
        assert_eq!(page.total, 15);
        assert!(!page.has_next);
    }

    proptest! {
        #[test]
        fn prop_has_next_matches_page_arithmetic(page in 1u32..10, page_size in 1usize..8, sort in sort_strategy()) {
            let catalog = demo_vehicles();
            let result = search(&SearchState::new("", page, sort), &catalog, page_size);

            prop_assert_eq!(result.has_next, (page as usize) * page_size < result.total);
            prop_assert_eq!(result.has_prev, page > 1);
            prop_assert!(result.results.len() <= page_size);
        }
    }

    // ============================================================
    // ENGINE TESTS - catalog source
    // ============================================================

    struct UnavailableCatalog;

    #[async_trait]
    impl VehicleCatalog for UnavailableCatalog {
        async fn vehicles(&self) -> Result<Arc<[VehicleRecord]>, CatalogError> {
            Err(CatalogError::Unavailable("store offline".to_string()))
        }

        fn describe(&self) -> String {
            "unavailable".to_string()
        }
    }

    #[tokio::test]
    async fn test_search_catalog_uses_source() {
        let catalog = InMemoryCatalog::demo();
        let state = parse("q=sedan&sort=price_asc");

        let page = search_catalog(&catalog, &state, PAGE_SIZE).await.unwrap();

        assert_eq!(page.total, 7);
        assert_eq!(page.results[0].id, "1");
        assert!(page.has_next);
    }

    #[tokio::test]
    async fn test_search_catalog_propagates_failure() {
        let result = search_catalog(&UnavailableCatalog, &SearchState::default(), PAGE_SIZE).await;

        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_api_response_json_shape() {
        let catalog = demo_vehicles();
        let state = SearchState::new("honda", 1, SortOption::PriceAsc);
        let page = search(&state, &catalog, PAGE_SIZE);

        let json = serde_json::to_value(SearchApiResponse { state, page }).unwrap();

        assert_eq!(json["state"]["q"], "honda");
        assert_eq!(json["state"]["page"], 1);
        assert_eq!(json["state"]["sort"], "price_asc");
        assert_eq!(json["total"], 1);
        assert_eq!(json["hasPrev"], false);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["results"][0]["title"], "2023 Honda Civic");
        assert_eq!(json["results"][0]["price"], 25000.0);
    }
}
