use reqwest::Url;

const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid", "ref", "source", "mc_cid", "mc_eid"];

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key.as_str())
}

/// Canonical form of a resource URL, used only as a dedup key.
///
/// Lowercases scheme and host, drops a leading `www.`, the fragment, tracking
/// parameters and any trailing `/`, and sorts the remaining query parameters.
/// Unparseable input is trimmed and lowercased so it still dedups against
/// itself.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let Ok(url) = Url::parse(trimmed) else {
        return trimmed.trim_end_matches('/').to_lowercase();
    };

    let host = url
        .host_str()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(host.as_str());
    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
    let path = url.path().trim_end_matches('/');

    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    params.sort();

    let query = if params.is_empty() {
        String::new()
    } else {
        let joined: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("?{}", joined.join("&"))
    };

    format!("{}://{host}{port}{path}{query}", url.scheme())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_www_and_trailing_slash_collapse() {
        assert_eq!(
            normalize_url("https://www.Coursera.org/learn/python/"),
            normalize_url("https://coursera.org/learn/python")
        );
    }

    #[test]
    fn test_tracking_params_and_fragment_dropped() {
        assert_eq!(
            normalize_url("https://coursera.org/learn/sql?utm_source=x&ref=nav#reviews"),
            "https://coursera.org/learn/sql"
        );
        assert_eq!(
            normalize_url("https://example.com/a?fbclid=1&gclid=2&source=mail"),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_query_params_are_sorted() {
        assert_eq!(
            normalize_url("https://example.com/search?q=sql&page=2"),
            normalize_url("https://example.com/search?page=2&q=sql")
        );
    }

    #[test]
    fn test_meaningful_params_survive() {
        assert_eq!(
            normalize_url("https://www.youtube.com/watch?v=abc123&utm_medium=social"),
            "https://youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn test_unparseable_input_is_still_a_stable_key() {
        assert_eq!(normalize_url("  Not A URL/ "), "not a url");
    }
}
