//! Offset pagination for list endpoints.
//!
//! List endpoints accept `page` and `limit` query parameters:
//!
//! - `page`: 1-indexed page number (default: 1)
//! - `limit`: items per page (default: 10)
//!
//! The raw query values are kept as strings so that a non-numeric value
//! produces the API's JSON error instead of an extractor rejection.
//! [`PaginationParams::validate`] turns them into a [`Pagination`], from which
//! services derive the skip count and the `next`/`prev` links.
//!
//! # Example
//!
//! ```ignore
//! async fn get_categories(
//!     State(state): State<AppState>,
//!     Query(params): Query<PaginationParams>,
//! ) -> Result<Json<PaginatedCategoriesResponse>, AppError> {
//!     let pagination = params.validate()?;
//!     let total = repo.count().await?;
//!     let items = repo.list(pagination.offset(), pagination.limit).await?;
//!     let meta = PageMeta::new(&pagination, total, "/api/categories");
//!     // ...
//! }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::AppError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Query parameters for pagination, as received.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<u64>)]
    #[schema(value_type = Option<u64>)]
    pub page: Option<String>,
    /// Items per page (default: 10)
    #[param(value_type = Option<u64>)]
    #[schema(value_type = Option<u64>)]
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
        }
    }

    /// Parses and checks the parameters.
    ///
    /// Empty values fall back to the defaults. Both values must be integers
    /// and at least 1.
    ///
    /// # Errors
    ///
    /// Returns a bad request error when a value is not numeric or is below 1.
    pub fn validate(&self) -> Result<Pagination, AppError> {
        let page = parse_number(self.page.as_deref(), DEFAULT_PAGE as i64)?;
        let limit = parse_number(self.limit.as_deref(), DEFAULT_LIMIT as i64)?;

        if page <= 0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Page must be greater than 0"
            )));
        }
        if limit <= 0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Limit must be greater than 0"
            )));
        }

        Ok(Pagination {
            page: page as u64,
            limit: limit as u64,
        })
    }
}

fn parse_number(raw: Option<&str>, default: i64) -> Result<i64, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<i64>().map_err(|_| {
            AppError::bad_request(anyhow::anyhow!("Page and limit must be numbers"))
        }),
    }
}

/// Validated page/limit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Number of records to skip: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Link to the following page.
    ///
    /// Always present, even when the current page is already past the last
    /// record; clients stop when a page comes back empty.
    #[must_use]
    pub fn next_link(&self, base_path: &str) -> String {
        format!("{}?page={}&limit={}", base_path, self.page + 1, self.limit)
    }

    /// Link to the preceding page, `None` on the first page.
    #[must_use]
    pub fn prev_link(&self, base_path: &str) -> Option<String> {
        (self.page > 1)
            .then(|| format!("{}?page={}&limit={}", base_path, self.page - 1, self.limit))
    }
}

/// Pagination envelope fields shared by every list response.
///
/// ```json
/// {
///   "page": 2,
///   "limit": 10,
///   "total": 25,
///   "next": "/api/products?page=3&limit=10",
///   "prev": "/api/products?page=1&limit=10"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    /// Total number of records across all pages
    pub total: u64,
    pub next: String,
    pub prev: Option<String>,
}

impl PageMeta {
    pub fn new(pagination: &Pagination, total: u64, base_path: &str) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total,
            next: pagination.next_link(base_path),
            prev: pagination.prev_link(base_path),
        }
    }
}
