//! Pagination parameters for the user list endpoint.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET};
use crate::errors::{AppError, AppResult};

/// Raw pagination query parameters.
///
/// Kept as text so a non-numeric value is reported as a validation error
/// naming the offending parameter instead of a generic query rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Maximum number of users to return (default 10)
    pub limit: Option<String>,
    /// Number of users to skip (default 0); also accepted as `offset`
    #[serde(alias = "offset")]
    pub page: Option<String>,
}

impl PaginationParams {
    pub fn new(limit: Option<&str>, page: Option<&str>) -> Self {
        Self {
            limit: limit.map(str::to_owned),
            page: page.map(str::to_owned),
        }
    }

    /// Resolve into `(limit, offset)`, applying defaults for absent values.
    pub fn resolve(&self) -> AppResult<(u64, u64)> {
        let limit = parse_param(self.limit.as_deref(), DEFAULT_PAGE_LIMIT, "limit")?;
        let offset = parse_param(self.page.as_deref(), DEFAULT_PAGE_OFFSET, "offset")?;
        Ok((limit, offset))
    }
}

fn parse_param(raw: Option<&str>, default: u64, name: &str) -> AppResult<u64> {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return Ok(default);
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| AppError::validation(format!("{} must be an integer", name)))?;

    u64::try_from(value)
        .map_err(|_| AppError::validation(format!("{} must not be negative", name)))
}
