//! Catalog filtering and view derivation over the sample dataset.

use rentmarket::{
    build_view, filter, sample_products, CatalogViewState, FilterCriteria, Selector,
};

#[tokio::test]
async fn test_identity_criteria_show_every_product_in_order() {
    let products = sample_products();
    let criteria = FilterCriteria::default();

    let filtered = filter(&products, &criteria);

    let original_ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    let filtered_ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(filtered_ids, original_ids);
}

#[tokio::test]
async fn test_trending_leads_with_the_highest_rated_sample() {
    let products = sample_products();
    let view = build_view(&products, &CatalogViewState::new());

    let trending = &view.sections[0];
    assert_eq!(trending.key, "trending");
    // The DJ set (4.9) outranks the DSLR (4.8).
    assert_eq!(trending.items[0].name, "DJ Equipment Set");
    assert_eq!(trending.items[1].name, "Professional DSLR Camera");
}

#[tokio::test]
async fn test_view_recomputes_on_every_criteria_change() {
    let products = sample_products();
    let mut state = CatalogViewState::new();

    // Each keystroke narrows the result set.
    for (query, expected) in [("b", 3), ("bi", 2), ("bik", 1), ("bike", 1), ("bikes", 0)] {
        state.criteria.query = query.to_string();
        let filtered = filter(&products, &state.criteria);
        assert_eq!(filtered.len(), expected, "Query {query:?}");
    }

    let view = build_view(&products, &state);
    assert!(view.no_results);
    assert!(view.sections.is_empty());
}

#[tokio::test]
async fn test_expansion_state_survives_criteria_changes() {
    let products = sample_products();
    let mut state = CatalogViewState::new();
    state.toggle_expanded("trending");

    state.criteria.min_rating = 4.0;
    let view = build_view(&products, &state);

    let trending = view.sections.iter().find(|s| s.key == "trending").unwrap();
    assert!(trending.expanded);
    assert_eq!(trending.items.len(), trending.total);
}

#[tokio::test]
async fn test_rating_floor_and_brand_combine() {
    let products = sample_products();
    let criteria = FilterCriteria {
        brand: Selector::Only("trek".to_string()),
        min_rating: 4.6,
        ..Default::default()
    };

    // The Trek bike is rated 4.5, below the floor.
    assert!(filter(&products, &criteria).is_empty());
}

#[tokio::test]
async fn test_unavailable_products_still_appear() {
    // Availability is display metadata, not a filter.
    let products = sample_products();
    let filtered = filter(&products, &FilterCriteria::default());

    assert!(filtered.iter().any(|p| !p.available));
}

#[tokio::test]
async fn test_view_state_round_trips_through_json() {
    let mut state = CatalogViewState::new();
    state.criteria.category = Selector::Only("electronics".to_string());
    state.criteria.min_rating = 4.5;
    state.toggle_expanded("electronics");

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: CatalogViewState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);

    // The restored state derives the identical view.
    let products = sample_products();
    assert_eq!(build_view(&products, &restored), build_view(&products, &state));
}
