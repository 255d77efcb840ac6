use serde::Serialize;

use vendora_core::{DomainError, DomainResult};

/// Validated pagination parameters for the public catalog listing.
///
/// Both values are 1-based and must be positive; construction is the only
/// way to get an instance, so handlers never see an unvalidated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i64,
    limit: i64,
}

impl PageParams {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_LIMIT: i64 = 5;

    pub fn new(page: i64, limit: i64) -> DomainResult<Self> {
        if page < 1 || limit < 1 {
            return Err(DomainError::validation(
                "page and limit must be positive integers",
            ));
        }
        // The skip for page n is (n - 1) * limit; pairs whose skip does not
        // fit in i64 are rejected here so offset() stays infallible.
        if (page - 1).checked_mul(limit).is_none() {
            return Err(DomainError::validation("page and limit are out of range"));
        }
        Ok(Self { page, limit })
    }

    /// Build from raw query values. Absent values fall back to the defaults;
    /// present values must parse as positive integers.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> DomainResult<Self> {
        let page = match page {
            Some(raw) => parse_positive(raw)?,
            None => Self::DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(raw) => parse_positive(raw)?,
            None => Self::DEFAULT_LIMIT,
        };
        Self::new(page, limit)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip: pages before this one, each `limit` rows wide.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Page metadata for a listing of `total` matching rows.
    pub fn page_info(&self, total: i64) -> PageInfo {
        PageInfo {
            limit: self.limit,
            page: self.page,
            total_pages: total_pages(total, self.limit),
        }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Page metadata echoed alongside catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub limit: i64,
    pub page: i64,
    pub total_pages: i64,
}

fn parse_positive(raw: &str) -> DomainResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| DomainError::validation("page and limit must be positive integers"))
}

/// Ceiling division; zero rows means zero pages. Quotient-plus-remainder
/// form so an oversized `limit` cannot overflow the sum.
fn total_pages(total: i64, limit: i64) -> i64 {
    debug_assert!(limit >= 1);
    total / limit + (total % limit != 0) as i64
}
