use std::ops::Range;

/// Photos per gallery page, fixed by the NASA Mars Photos API.
pub const PAGE_SIZE: u64 = 25;

/// Pagination and filter params carried in the canonical link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub page_number: u64,
    pub camera: Option<String>,
    pub earth_date: Option<String>,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            page_number: 1,
            camera: None,
            earth_date: None,
        }
    }
}

/// Page count for a photo total: ceil(total / 25).
pub fn total_pages(total_photos: u64) -> u64 {
    (total_photos + PAGE_SIZE - 1) / PAGE_SIZE
}

/// The window of 0-based page indices to render buttons for.
///
/// An index `i` is shown when `i >= page - 3 && i < page + 2`, clamped to
/// `[0, total_pages)` — up to five buttons around the current page.
pub fn page_window(page_number: u64, total_pages: u64) -> Range<u64> {
    let lo = page_number.saturating_sub(3);
    let hi = (page_number + 2).min(total_pages);
    lo..hi.max(lo)
}

/// Build the canonical history link for a rover view:
/// `/{rover}&page=N[&camera=C][&earthDate=D]`. Filters are omitted when unset.
pub fn canonical_link(rover: &str, params: &RouteParams) -> String {
    let mut link = format!("/{}&page={}", rover, params.page_number);
    if let Some(camera) = &params.camera {
        link.push_str("&camera=");
        link.push_str(camera);
    }
    if let Some(date) = &params.earth_date {
        link.push_str("&earthDate=");
        link.push_str(date);
    }
    link
}

/// Parse a canonical link back into a rover name and params.
///
/// `/` and empty paths mean home (`None`). Unknown or malformed fields are
/// ignored; a missing or invalid page falls back to 1.
pub fn parse_link(path: &str) -> Option<(String, RouteParams)> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }

    let mut parts = path.split('&');
    let rover = parts.next()?.to_string();
    if rover.is_empty() {
        return None;
    }

    let mut params = RouteParams::default();
    for part in parts {
        match part.split_once('=') {
            Some(("page", value)) => {
                if let Ok(n) = value.parse::<u64>() {
                    if n >= 1 {
                        params.page_number = n;
                    }
                }
            }
            Some(("camera", value)) if !value.is_empty() => {
                params.camera = Some(value.to_string());
            }
            Some(("earthDate", value)) if !value.is_empty() => {
                params.earth_date = Some(value.to_string());
            }
            _ => {}
        }
    }

    Some((rover, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(25), 1);
        assert_eq!(total_pages(26), 2);
        assert_eq!(total_pages(695670), 27827);
    }

    #[test]
    fn test_page_window_at_start() {
        // Page 1 of 10: indices 0..3 → buttons 1, 2, 3.
        assert_eq!(page_window(1, 10), 0..3);
    }

    #[test]
    fn test_page_window_mid() {
        // Page 5 of 10: indices 2..7 → buttons 3..=7.
        assert_eq!(page_window(5, 10), 2..7);
    }

    #[test]
    fn test_page_window_at_end() {
        assert_eq!(page_window(10, 10), 7..10);
    }

    #[test]
    fn test_page_window_small_totals() {
        assert_eq!(page_window(1, 0), 0..0);
        assert_eq!(page_window(1, 2), 0..2);
        // Stale page beyond the total must not panic or underflow.
        assert_eq!(page_window(10, 2), 7..7);
    }

    #[test]
    fn test_canonical_link_plain() {
        assert_eq!(canonical_link("Curiosity", &RouteParams::default()), "/Curiosity&page=1");
    }

    #[test]
    fn test_canonical_link_with_filters() {
        let params = RouteParams {
            page_number: 3,
            camera: Some("FHAZ".into()),
            earth_date: Some("2015-05-30".into()),
        };
        assert_eq!(
            canonical_link("Spirit", &params),
            "/Spirit&page=3&camera=FHAZ&earthDate=2015-05-30"
        );
    }

    #[test]
    fn test_parse_link_home() {
        assert!(parse_link("/").is_none());
        assert!(parse_link("").is_none());
    }

    #[test]
    fn test_parse_link_round_trip() {
        let params = RouteParams {
            page_number: 7,
            camera: Some("NAVCAM".into()),
            earth_date: None,
        };
        let link = canonical_link("Opportunity", &params);
        let (rover, parsed) = parse_link(&link).unwrap();
        assert_eq!(rover, "Opportunity");
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_parse_link_bad_page_falls_back() {
        let (rover, params) = parse_link("/Curiosity&page=zero&camera=FHAZ").unwrap();
        assert_eq!(rover, "Curiosity");
        assert_eq!(params.page_number, 1);
        assert_eq!(params.camera.as_deref(), Some("FHAZ"));
    }

    #[test]
    fn test_parse_link_ignores_unknown_fields() {
        let (_, params) = parse_link("/Curiosity&page=2&sol=1000").unwrap();
        assert_eq!(params.page_number, 2);
        assert!(params.camera.is_none());
    }
}
