use contracts::domain::a001_filter::FilterCatalog;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the filter catalog (`GET /api/filters`)
pub async fn fetch_catalog() -> Result<FilterCatalog, String> {
    let response = Request::get(&api_url("/api/filters"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch filter data: {}", response.status()));
    }

    let catalog = response
        .json::<FilterCatalog>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    catalog
        .validate()
        .map_err(|e| format!("Invalid filter data: {}", e))?;

    Ok(catalog)
}
