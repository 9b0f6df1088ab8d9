//! Board Query String
//!
//! `page`, `perPage`, `status` and `search` live in the URL so a board view
//! can be bookmarked. Parsing is lenient: bad values fall back to defaults.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{ListProductsPayload, Pagination, ProductFilter, StatusFilter};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSearch {
    pub page: u32,
    pub per_page: u32,
    pub status: Option<StatusFilter>,
    pub search: Option<String>,
}

impl Default for BoardSearch {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            status: None,
            search: None,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}

impl BoardSearch {
    /// Parse `location.search`, with or without the leading `?`
    pub fn from_query_str(query: &str) -> Self {
        Self::from_query_str_with_default(query, DEFAULT_PER_PAGE)
    }

    pub fn from_query_str_with_default(query: &str, default_per_page: u32) -> Self {
        let mut parsed = Self { per_page: default_per_page, ..Self::default() };

        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(raw_value);
            match decode_component(raw_key).as_str() {
                "page" => {
                    if let Some(page) = parse_positive(&value) {
                        parsed.page = page;
                    }
                }
                "perPage" => {
                    if let Some(per_page) = parse_positive(&value) {
                        parsed.per_page = per_page;
                    }
                }
                "status" => parsed.status = StatusFilter::parse(&value),
                "search" => parsed.search = Some(value).filter(|s| !s.is_empty()),
                _ => {}
            }
        }
        parsed
    }

    /// Serialize back to `?page=..&perPage=..[&status=..][&search=..]`
    pub fn to_query_string(&self) -> String {
        let mut query = format!("?page={}&perPage={}", self.page, self.per_page);
        if let Some(status) = self.status {
            query.push_str("&status=");
            query.push_str(status.as_str());
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push_str("&search=");
            query.push_str(&utf8_percent_encode(search, NON_ALPHANUMERIC).to_string());
        }
        query
    }

    pub fn status_or_all(&self) -> StatusFilter {
        self.status.unwrap_or_default()
    }

    /// New status filter; starts over at page 1
    pub fn with_status(&self, status: StatusFilter) -> Self {
        Self { status: Some(status), page: DEFAULT_PAGE, ..self.clone() }
    }

    /// New search text; starts over at page 1
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            search: Some(search.to_string()).filter(|s| !s.is_empty()),
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    /// Clear the search and reset paging
    pub fn cleared_search(&self, default_per_page: u32) -> Self {
        Self {
            search: None,
            page: DEFAULT_PAGE,
            per_page: default_per_page,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self { page, ..self.clone() }
    }

    /// New page size; starts over at page 1
    pub fn with_per_page(&self, per_page: u32) -> Self {
        Self { per_page, page: DEFAULT_PAGE, ..self.clone() }
    }

    /// Payload of the list query for this view
    pub fn payload(&self) -> ListProductsPayload {
        ListProductsPayload {
            filter: ProductFilter {
                search: self.search.clone(),
                status: Some(self.status_or_all()),
            },
            pagination: Pagination { page: self.page, per_page: self.per_page },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_query() {
        assert_eq!(BoardSearch::from_query_str(""), BoardSearch::default());
        assert_eq!(BoardSearch::from_query_str("?"), BoardSearch::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let parsed = BoardSearch::from_query_str("?page=3&perPage=48&status=Disabled&search=blue+mug%21");
        assert_eq!(
            parsed,
            BoardSearch {
                page: 3,
                per_page: 48,
                status: Some(StatusFilter::Disabled),
                search: Some("blue mug!".to_string()),
            }
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let parsed = BoardSearch::from_query_str("page=0&perPage=-4&status=bogus");
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.per_page, 24);
        assert_eq!(parsed.status, None);

        let parsed = BoardSearch::from_query_str("page=abc&perPage=");
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.per_page, 24);
    }

    #[test]
    fn test_configured_default_page_size() {
        let parsed = BoardSearch::from_query_str_with_default("", 12);
        assert_eq!(parsed.per_page, 12);
    }

    #[test]
    fn test_query_string_survives_reparse() {
        let search = BoardSearch {
            page: 2,
            per_page: 12,
            status: Some(StatusFilter::Enabled),
            search: Some("café & co".to_string()),
        };
        let query = search.to_query_string();
        assert!(query.starts_with("?page=2&perPage=12&status=Enabled&search="));
        assert_eq!(BoardSearch::from_query_str(&query), search);
    }

    #[test]
    fn test_transitions_reset_page() {
        let on_page_four = BoardSearch { page: 4, ..BoardSearch::default() };

        assert_eq!(on_page_four.with_status(StatusFilter::Enabled).page, 1);
        assert_eq!(on_page_four.with_search("lamp").page, 1);
        assert_eq!(on_page_four.with_per_page(96).page, 1);
        assert_eq!(on_page_four.with_page(2).page, 2);

        let cleared = BoardSearch { search: Some("lamp".to_string()), per_page: 96, ..on_page_four }
            .cleared_search(24);
        assert_eq!(cleared.search, None);
        assert_eq!(cleared.page, 1);
        assert_eq!(cleared.per_page, 24);
    }

    #[test]
    fn test_payload_uses_all_when_status_missing() {
        let payload = BoardSearch::default().payload();
        assert_eq!(payload.filter.status, Some(StatusFilter::All));
        assert_eq!(payload.pagination, Pagination { page: 1, per_page: 24 });
    }
}
