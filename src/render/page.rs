use super::escape::{escape_html, format_price, safe_serialize};
use crate::search::state::to_url;
use crate::search::types::{BootState, SearchResultPage, SearchState, SortOption};

/// Element id of the inline boot payload read by the client script.
pub const BOOT_STATE_ID: &str = "__STATE__";
pub const CLIENT_SCRIPT: &str = "/assets/client.js";

const STYLES: &str = r#"
      * { margin: 0; padding: 0; box-sizing: border-box; }
      body { font-family: system-ui, -apple-system, sans-serif; background: #f5f5f5; padding: 20px; }
      .container { max-width: 900px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
      h1 { margin-bottom: 24px; color: #333; }
      .search-controls { display: flex; gap: 12px; margin-bottom: 24px; }
      .search-form { flex: 1; display: flex; gap: 12px; }
      .search-form input { flex: 1; padding: 10px 14px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px; }
      .search-form button { padding: 10px 20px; background: #0066cc; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px; }
      .sort-control { display: flex; align-items: center; gap: 8px; }
      .sort-control label { font-size: 14px; color: #666; }
      .sort-control select { padding: 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; }
      .results-info { margin-bottom: 16px; color: #666; font-size: 14px; }
      .result-item { padding: 16px; border: 1px solid #e0e0e0; border-radius: 6px; margin-bottom: 12px; }
      .result-item h3 { color: #0066cc; margin-bottom: 8px; font-size: 18px; }
      .result-item .price { color: #16a34a; font-weight: 600; font-size: 16px; margin-bottom: 8px; }
      .result-item p { color: #666; line-height: 1.5; }
      .no-results { padding: 40px; text-align: center; color: #999; }
      .pagination { display: flex; justify-content: center; align-items: center; gap: 16px; margin-top: 24px; padding-top: 24px; border-top: 1px solid #e0e0e0; }
      .btn { padding: 10px 20px; background: #0066cc; color: white; text-decoration: none; border-radius: 4px; font-size: 14px; }
      .btn.disabled { background: #ccc; cursor: not-allowed; }
      .page-info { color: #666; font-size: 14px; }
"#;

/// Inner page content: search form, sort control, results and pagination.
///
/// This is also the fragment returned to client-side navigation requests.
pub fn render_body(state: &SearchState, page: &SearchResultPage, base_path: &str) -> String {
    let sort_options: String = SortOption::ALL
        .iter()
        .map(|opt| {
            let selected = if *opt == state.sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                opt.as_str(),
                selected,
                escape_html(opt.label())
            )
        })
        .collect();

    let results = if page.results.is_empty() {
        r#"<p class="no-results">No results found. Try a different search.</p>"#.to_string()
    } else {
        page.results
            .iter()
            .map(|v| {
                format!(
                    r#"
        <div class="result-item" data-id="{}">
          <h3>{}</h3>
          <p class="price">{}</p>
          <p>{}</p>
        </div>"#,
                    escape_html(&v.id),
                    escape_html(&v.title),
                    format_price(v.price),
                    escape_html(&v.description)
                )
            })
            .collect()
    };

    let (results_info, pagination) = if page.total > 0 {
        let plural = if page.total == 1 { "" } else { "s" };
        (
            format!(
                r#"<div class="results-info">Found {} result{}</div>"#,
                page.total, plural
            ),
            render_pagination(state, page, base_path),
        )
    } else {
        (String::new(), String::new())
    };

    format!(
        r#"
    <div class="container">
      <h1>Vehicle Search</h1>

      <div class="search-controls">
        <form data-search-form class="search-form" action="{action}" method="get">
          <input type="text" name="q" placeholder="Search vehicles..." value="{query}" />
          <button type="submit">Search</button>
        </form>

        <div class="sort-control">
          <label for="sort">Sort:</label>
          <select data-sort name="sort" id="sort">{sort_options}</select>
        </div>
      </div>

      {results_info}

      <div class="results">{results}
      </div>

      {pagination}
    </div>
"#,
        action = escape_html(base_path),
        query = escape_html(&state.query),
        sort_options = sort_options,
        results_info = results_info,
        results = results,
        pagination = pagination,
    )
}

fn render_pagination(state: &SearchState, page: &SearchResultPage, base_path: &str) -> String {
    let prev = if page.has_prev {
        format!(
            r#"<a data-page href="{}" class="btn">&larr; Previous</a>"#,
            escape_html(&to_url(&state.prev_page(), base_path))
        )
    } else {
        r#"<span class="btn disabled">&larr; Previous</span>"#.to_string()
    };

    let next = if page.has_next {
        format!(
            r#"<a data-page href="{}" class="btn">Next &rarr;</a>"#,
            escape_html(&to_url(&state.next_page(), base_path))
        )
    } else {
        r#"<span class="btn disabled">Next &rarr;</span>"#.to_string()
    };

    format!(
        r#"<div class="pagination">
        {}
        <span class="page-info">Page {}</span>
        {}
      </div>"#,
        prev, state.page, next
    )
}

/// Full HTML document with the boot payload embedded for client hydration.
pub fn render_document(
    state: &SearchState,
    page: &SearchResultPage,
    base_path: &str,
) -> Result<String, serde_json::Error> {
    let boot = BootState {
        state: state.clone(),
        data: page.clone(),
    };
    let boot_json = safe_serialize(&boot)?;

    let title = if state.query.is_empty() {
        "Search Results".to_string()
    } else {
        format!("Search Results: {}", escape_html(&state.query))
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{styles}</style>
</head>
<body>
  <div id="app">{body}</div>
  <script id="{boot_id}" type="application/json">{boot_json}</script>
  <script type="module" src="{client}"></script>
</body>
</html>"#,
        title = title,
        styles = STYLES,
        body = render_body(state, page, base_path),
        boot_id = BOOT_STATE_ID,
        boot_json = boot_json,
        client = CLIENT_SCRIPT,
    ))
}
