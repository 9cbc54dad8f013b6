use super::types::{SearchResultPage, SearchState, SortOption, VehicleRecord};
use crate::catalog::{CatalogError, VehicleCatalog};

/// Filters, sorts and paginates `catalog` according to `state`.
///
/// Pure over its inputs. Out-of-range pages yield an empty `results` with
/// the real `total` and correct flags. A `page_size` of 0 is treated as 1.
pub fn search(state: &SearchState, catalog: &[VehicleRecord], page_size: usize) -> SearchResultPage {
    let page_size = page_size.max(1);

    // Blank queries match everything; otherwise the query is matched as typed
    let mut matches: Vec<&VehicleRecord> = if state.query.trim().is_empty() {
        catalog.iter().collect()
    } else {
        let needle = state.query.to_lowercase();
        catalog
            .iter()
            .filter(|v| {
                v.title.to_lowercase().contains(&needle)
                    || v.description.to_lowercase().contains(&needle)
            })
            .collect()
    };

    // slice::sort_by is stable, equal prices keep catalog order
    match state.sort {
        SortOption::Relevance => {}
        SortOption::PriceAsc => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => matches.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    let total = matches.len();
    let page = state.page.max(1) as usize;
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);

    let results: Vec<VehicleRecord> = matches
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    SearchResultPage {
        results,
        total,
        has_prev: page > 1,
        has_next: end < total,
    }
}

/// Fetches the catalog from its source, then runs [`search`] over it.
pub async fn search_catalog(
    catalog: &dyn VehicleCatalog,
    state: &SearchState,
    page_size: usize,
) -> Result<SearchResultPage, CatalogError> {
    let vehicles = catalog.vehicles().await?;
    let page = search(state, &vehicles, page_size);

    tracing::debug!(
        "Search q={:?} sort={} page={} -> {} of {} matches",
        state.query,
        state.sort,
        state.page,
        page.results.len(),
        page.total
    );

    Ok(page)
}
