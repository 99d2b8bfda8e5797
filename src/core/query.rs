//! Query parameters and pagination utilities

use serde::{Deserialize, Deserializer};

/// Page used when `page` is missing or unusable
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when `limit` is missing or unusable
pub const DEFAULT_LIMIT: usize = 10;


/// Query parameters for list pagination
///
/// Extracted from the URL query string. Values that are missing,
/// non-numeric or zero fall back to the defaults instead of rejecting the
/// request.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_items(Query(params): Query<QueryParams>) -> ... {
///     // params.page() defaults to 1
///     // params.limit(None) defaults to 10
/// }
///
/// // Usage:
/// GET /orders?page=2&limit=5
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(default, deserialize_with = "lenient_usize")]
    pub page: Option<usize>,

    /// Number of items per page
    #[serde(default, deserialize_with = "lenient_usize")]
    pub limit: Option<usize>,
}

/// Parse a query value as a positive integer, dropping anything else
fn lenient_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0))
}

impl QueryParams {
    /// Build params from explicit values
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page).filter(|p| *p > 0),
            limit: Some(limit).filter(|l| *l > 0),
        }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Get limit, capped at `max_limit` when one is configured
    pub fn limit(&self, max_limit: Option<usize>) -> usize {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        match max_limit {
            Some(max) => limit.min(max.max(1)),
            None => limit,
        }
    }
}

/// Take the `[(page-1)*limit, page*limit)` window of `items`
///
/// Returns an empty vector when the page lies past the end.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    items.into_iter().skip(start).take(limit).collect()
}
