use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters for the seller statistics endpoint.
///
/// Both values stay raw strings here; presence and format are validated in
/// the handler so the error responses keep their exact wording.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// Pagination query for the public catalog listing.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

// -------------------------
// Parameter parsing
// -------------------------

/// A query parameter counts as present only when it carries non-blank
/// content; `?startDate=` reads the same as no `startDate` at all.
pub fn present_param(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a date query parameter.
///
/// Accepts a plain `YYYY-MM-DD` date (interpreted as midnight UTC) or a full
/// RFC 3339 instant.
pub fn parse_date_param(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight));
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date_is_midnight_utc() {
        let parsed = parse_date_param("2024-03-10");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).single());
    }

    #[test]
    fn rfc3339_instant_is_accepted() {
        let parsed = parse_date_param("2024-03-10T14:30:00Z");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).single());
    }

    #[test]
    fn rfc3339_offset_is_normalized_to_utc() {
        let parsed = parse_date_param("2024-03-10T14:30:00+02:00");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 0).single());
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_date_param("not-a-date"), None);
        assert_eq!(parse_date_param("2024-13-40"), None);
        assert_eq!(parse_date_param(""), None);
    }

    #[test]
    fn blank_params_read_as_absent() {
        assert_eq!(present_param(None), None);
        assert_eq!(present_param(Some("")), None);
        assert_eq!(present_param(Some("   ")), None);
        assert_eq!(present_param(Some("2024-03-10")), Some("2024-03-10"));
        assert_eq!(present_param(Some("  2024-03-10 ")), Some("2024-03-10"));
    }
}
