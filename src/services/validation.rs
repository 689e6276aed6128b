// src/services/validation.rs
//
// Shared input normalization and validation helpers used by the command
// layer and the catalog service.

use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};

/// Normalize comma-separated free text into a trimmed, lower-cased,
/// deduplicated list. Input order is preserved for the first occurrence
/// of each entry.
pub fn parse_list(raw: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for part in raw.split(',') {
        let entry = part.trim().to_lowercase();
        if !entry.is_empty() && !seen.contains(&entry) {
            seen.push(entry);
        }
    }
    seen
}

/// Validate a URL string. Only absolute http(s) URLs are accepted.
pub fn validate_url(raw: &str) -> AppResult<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|_| AppError::InvalidInput(format!("invalid URL: \"{}\"", raw)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::InvalidInput(format!(
            "unsupported URL scheme \"{}\" in \"{}\"",
            scheme, raw
        ))),
    }
}

/// Parse a `label:url,label:url` watch-link string into a quality -> URL
/// map. Each pairing splits on the FIRST colon only, so colons inside the
/// URL survive. Empty labels or URL halves fail with the offending segment
/// named.
pub fn parse_watch_links(raw: &str) -> AppResult<BTreeMap<String, String>> {
    let mut links = BTreeMap::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        let (label, link) = part.split_once(':').ok_or_else(|| {
            AppError::InvalidInput(format!(
                "invalid watch link \"{}\": expected \"quality:link\"",
                part.trim()
            ))
        })?;
        let label = label.trim();
        let link = link.trim();
        if label.is_empty() || link.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "invalid watch link \"{}\": expected \"quality:link\"",
                part.trim()
            )));
        }
        validate_url(link)?;
        links.insert(label.to_string(), link.to_string());
    }
    if links.is_empty() {
        return Err(AppError::InvalidInput(
            "at least one watch link is required".to_string(),
        ));
    }
    Ok(links)
}

/// Parse comma-separated screenshot URLs, validating each one
pub fn parse_screenshot_links(raw: &str) -> AppResult<Vec<String>> {
    let mut links = Vec::new();
    for part in raw.split(',') {
        let link = part.trim();
        if link.is_empty() {
            continue;
        }
        validate_url(link)?;
        links.push(link.to_string());
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_lowercases_dedupes() {
        assert_eq!(
            parse_list(" Hindi, english ,HINDI,, tamil "),
            vec!["hindi", "english", "tamil"]
        );
        assert!(parse_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_watch_links_splits_on_first_colon() {
        let links = parse_watch_links("1080p:https://x.com/a:b").unwrap();
        assert_eq!(
            links.get("1080p").map(String::as_str),
            Some("https://x.com/a:b")
        );
    }

    #[test]
    fn test_parse_watch_links_multiple() {
        let links =
            parse_watch_links("720p:https://x.com/a, 1080p:https://x.com/b").unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links.get("720p").map(String::as_str), Some("https://x.com/a"));
    }

    #[test]
    fn test_parse_watch_links_names_bad_segment() {
        let err = parse_watch_links("1080p:https://x.com/a,justalink").unwrap_err();
        assert!(err.to_string().contains("justalink"));
    }

    #[test]
    fn test_parse_watch_links_empty_half_fails() {
        assert!(parse_watch_links(":https://x.com/a").is_err());
        assert!(parse_watch_links("1080p:").is_err());
        assert!(parse_watch_links("  ").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/movie?id=1").is_ok());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("ftp://example.com/movie").is_err());
    }

    #[test]
    fn test_parse_screenshot_links_rejects_bad_url() {
        let err = parse_screenshot_links("https://x.com/a, nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
