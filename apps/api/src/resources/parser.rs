//! Parses search-provider output into candidate resources.
//!
//! Two shapes are accepted: a JSON list (bare, fenced, wrapped in
//! `{"resources": [...]}`, or embedded in prose), and loosely structured
//! numbered/bulleted text with `Title:` / `URL:` style fields or markdown
//! links. Entries without a title and an http(s) URL are dropped.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;
use serde_json::Value;

use crate::llm_client::strip_json_fences;
use crate::models::resource::{CandidateResource, Cost, ResourceSource};
use crate::resources::providers::provider_for_host;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"https?://[^\s<>")\]]+"#).expect("valid url regex"))
}

/// First bare URL in `text`: its byte offset and the URL without trailing
/// sentence punctuation.
fn find_url(text: &str) -> Option<(usize, String)> {
    let m = url_regex().find(text)?;
    let url = m.as_str().trim_end_matches(TRAILING_URL_PUNCTUATION);
    Some((m.start(), url.to_string()))
}

const TRAILING_URL_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Words that introduce a link rather than belong to the title ("SQLBolt: see https://...").
const LINK_LEAD_INS: &[&str] = &["see", "at", "visit", "via", "here", "link"];

fn markdown_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").expect("valid markdown link regex")
    })
}

fn list_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:\d+[.)]|[-*•])\s+").expect("valid list marker regex"))
}

fn field_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*(?:[-*•]\s*)?\**(title|name|url|link|provider|platform|cost|price|rating|description|summary)\**\s*:\s*\**\s*(.*)$",
        )
        .expect("valid field regex")
    })
}

fn rating_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d(?:\.\d+)?)").expect("valid rating regex"))
}

/// A rating mentioned in passing: "4.5 stars", "4.7/5", "4.8 ★".
fn rating_hint_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\d(?:\.\d+)?)\s*(?:/\s*5\b|stars?\b|★)").expect("valid rating hint regex")
    })
}

/// Parses raw provider output. Never fails; unusable input yields an empty list.
pub fn parse_search_output(raw: &str) -> Vec<CandidateResource> {
    let text = strip_json_fences(raw);

    if let Some(items) = json_items(text) {
        return items.iter().filter_map(from_json_item).collect();
    }

    parse_line_oriented(text)
}

// ────────────────────────────────────────────────────────────────────────────
// JSON shape
// ────────────────────────────────────────────────────────────────────────────

fn json_items(text: &str) -> Option<Vec<Value>> {
    let value = serde_json::from_str::<Value>(text).ok().or_else(|| {
        // JSON embedded in prose: try the outermost [...] span.
        let start = text.find('[')?;
        let end = text.rfind(']')?;
        (start < end)
            .then(|| serde_json::from_str::<Value>(&text[start..=end]).ok())
            .flatten()
    })?;

    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("resources") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

fn str_field<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|k| item.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn from_json_item(item: &Value) -> Option<CandidateResource> {
    let title = str_field(item, &["title", "name"])?;
    let url = str_field(item, &["url", "link"])?;

    let cost = match item.get("cost").or_else(|| item.get("price")) {
        Some(Value::String(s)) => Some(Cost::from_text(s)),
        _ => item.get("free").and_then(Value::as_bool).map(|free| {
            if free {
                Cost::Free
            } else {
                Cost::Paid
            }
        }),
    };

    let rating = match item.get("rating") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_rating(s),
        _ => None,
    };

    Draft {
        title: Some(title.to_string()),
        url: Some(url.to_string()),
        provider: str_field(item, &["provider", "platform"]).map(str::to_string),
        cost,
        rating,
        description: str_field(item, &["description", "summary"]).map(str::to_string),
    }
    .finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Line-oriented shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Draft {
    title: Option<String>,
    url: Option<String>,
    provider: Option<String>,
    cost: Option<Cost>,
    rating: Option<f64>,
    description: Option<String>,
}

impl Draft {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }

    fn finish(self) -> Option<CandidateResource> {
        let title = clean_text(&self.title?);
        let url = self.url?.trim().to_string();
        let parsed = Url::parse(&url).ok()?;
        if title.is_empty() || !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }

        let provider = self
            .provider
            .map(|p| clean_text(&p))
            .filter(|p| !p.is_empty())
            .or_else(|| {
                let host = parsed.host_str()?;
                Some(
                    provider_for_host(host)
                        .map(str::to_string)
                        .unwrap_or_else(|| host.trim_start_matches("www.").to_string()),
                )
            })
            .unwrap_or_default();

        Some(CandidateResource {
            title,
            url,
            provider,
            cost: self.cost.unwrap_or(Cost::Paid),
            rating: self.rating.unwrap_or(0.0).clamp(0.0, 5.0),
            description: self.description.map(|d| clean_text(&d)).unwrap_or_default(),
            verified: false,
            source: ResourceSource::IntelligentSearch,
        })
    }
}

fn parse_line_oriented(text: &str) -> Vec<CandidateResource> {
    let mut drafts: Vec<Draft> = Vec::new();
    let mut current = Draft::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        // Field lines are checked first: "- URL: ..." is a field, not a new entry.
        if let Some(caps) = field_regex().captures(line) {
            let value = caps[2].trim().to_string();
            let key = caps[1].to_ascii_lowercase();
            if matches!(key.as_str(), "title" | "name") && current.title.is_some() {
                drafts.push(std::mem::take(&mut current));
            }
            apply_field(&mut current, &key, &value);
            continue;
        }

        if let Some(marker) = list_marker_regex().find(line) {
            if !current.is_empty() {
                drafts.push(std::mem::take(&mut current));
            }
            let rest = &line[marker.end()..];
            match field_regex().captures(rest) {
                Some(caps) => apply_field(&mut current, &caps[1].to_ascii_lowercase(), caps[2].trim()),
                None => apply_headline(&mut current, rest),
            }
            continue;
        }

        // Free text inside an entry: pick up a bare URL and cost/rating hints.
        if current.url.is_none() {
            current.url = find_url(line).map(|(_, url)| url);
        }
        apply_hints(&mut current, line);
    }
    if !current.is_empty() {
        drafts.push(current);
    }

    drafts.into_iter().filter_map(Draft::finish).collect()
}

/// The text after a list marker: a markdown link, "Title - url", or a bare title.
fn apply_headline(draft: &mut Draft, rest: &str) {
    if let Some(caps) = markdown_link_regex().captures(rest) {
        draft.title = Some(caps[1].to_string());
        draft.url = Some(caps[2].to_string());
    } else if let Some((start, url)) = find_url(rest) {
        let title = headline_title(&rest[..start]);
        if !title.is_empty() {
            draft.title = Some(title.to_string());
        }
        draft.url = Some(url);
    } else {
        draft.title = Some(rest.to_string());
    }
    apply_hints(draft, rest);
}

/// Title text before an inline URL, minus separators and link lead-ins.
fn headline_title(prefix: &str) -> &str {
    let is_separator = |c: char| c.is_whitespace() || matches!(c, '-' | ':' | '(' | '–' | '|' | ',');
    let mut title = prefix.trim_end_matches(is_separator);
    while let Some((head, last)) = title.rsplit_once(char::is_whitespace) {
        if !LINK_LEAD_INS.contains(&last.to_lowercase().as_str()) {
            break;
        }
        title = head.trim_end_matches(is_separator);
    }
    title
}

fn apply_field(draft: &mut Draft, key: &str, value: &str) {
    match key {
        "title" | "name" => {
            if let Some(caps) = markdown_link_regex().captures(value) {
                draft.title = Some(caps[1].to_string());
                draft.url = Some(caps[2].to_string());
            } else {
                draft.title = Some(value.to_string());
            }
        }
        "url" | "link" => {
            draft.url = find_url(value).map(|(_, url)| url);
        }
        "provider" | "platform" => draft.provider = Some(value.to_string()),
        "cost" | "price" => draft.cost = Some(Cost::from_text(value)),
        "rating" => draft.rating = parse_rating(value),
        "description" | "summary" => draft.description = Some(value.to_string()),
        _ => {}
    }
}

fn apply_hints(draft: &mut Draft, text: &str) {
    let lower = text.to_lowercase();
    if draft.cost.is_none() {
        if lower.contains("free") {
            draft.cost = Some(Cost::from_text(&lower));
        } else if lower.contains("paid") || lower.contains('$') || lower.contains("subscription") {
            draft.cost = Some(Cost::Paid);
        }
    }
    if draft.rating.is_none() {
        draft.rating = rating_hint_regex()
            .captures(&lower)
            .and_then(|c| c[1].parse::<f64>().ok())
            .filter(|r| (0.0..=5.0).contains(r));
    }
}

fn parse_rating(raw: &str) -> Option<f64> {
    rating_regex()
        .captures(raw)
        .and_then(|c| c[1].parse::<f64>().ok())
        .filter(|r| (0.0..=5.0).contains(r))
}

/// Strips markdown emphasis and surrounding quotes.
fn clean_text(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| matches!(c, '*' | '_' | '"' | '`'))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_json_array() {
        let raw = r#"[
            {"title": "Prompt Engineering for ChatGPT", "url": "https://www.coursera.org/learn/prompt-engineering",
             "provider": "Coursera", "cost": "Free", "rating": 4.8, "description": "Intro course"},
            {"title": "Learn Prompting", "url": "https://learnprompting.org/docs/introduction",
             "provider": "Learn Prompting", "cost": "free", "rating": "4.7"}
        ]"#;
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].provider, "Coursera");
        assert_eq!(parsed[0].cost, Cost::Free);
        assert_eq!(parsed[0].rating, 4.8);
        assert_eq!(parsed[1].rating, 4.7);
        assert!(parsed.iter().all(|r| !r.verified));
        assert!(parsed
            .iter()
            .all(|r| r.source == ResourceSource::IntelligentSearch));
    }

    #[test]
    fn test_parses_fenced_object_with_resources_key() {
        let raw = "```json\n{\"resources\": [{\"name\": \"SQL Tutorial\", \"link\": \"https://sqlbolt.com/\", \"free\": true}]}\n```";
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "SQL Tutorial");
        assert_eq!(parsed[0].cost, Cost::Free);
        // Provider inferred from host when missing.
        assert_eq!(parsed[0].provider, "sqlbolt.com");
    }

    #[test]
    fn test_parses_json_embedded_in_prose() {
        let raw = "Here are some resources:\n[{\"title\": \"A\", \"url\": \"https://www.edx.org/learn/sql\"}]\nHope this helps!";
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].provider, "edX");
    }

    #[test]
    fn test_drops_malformed_json_entries() {
        let raw = r#"[
            {"title": "No url"},
            {"url": "https://example.com/no-title"},
            {"title": "Bad scheme", "url": "ftp://example.com/file"},
            {"title": "Good", "url": "https://example.com/good"}
        ]"#;
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Good");
    }

    #[test]
    fn test_parses_field_style_text() {
        let raw = "\
1. **Title:** Machine Learning Crash Course
   - URL: https://developers.google.com/machine-learning/crash-course
   - Provider: Google
   - Cost: Free
   - Rating: 4.7/5

2. **Title:** Intro to Machine Learning
   - URL: https://www.kaggle.com/learn/intro-to-machine-learning
   - Provider: Kaggle
   - Cost: Free
";
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "Machine Learning Crash Course");
        assert_eq!(parsed[0].provider, "Google");
        assert_eq!(parsed[0].rating, 4.7);
        assert_eq!(parsed[1].url, "https://www.kaggle.com/learn/intro-to-machine-learning");
        assert_eq!(parsed[1].rating, 0.0);
    }

    #[test]
    fn test_parses_markdown_link_list() {
        let raw = "\
- [SQL for Data Analysis](https://www.udemy.com/course/sql-for-data-analysis/) - paid, 4.5 stars
- [SQLBolt](https://sqlbolt.com/) (free)
- Not a resource at all
";
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].provider, "Udemy");
        assert_eq!(parsed[0].cost, Cost::Paid);
        assert_eq!(parsed[0].rating, 4.5);
        assert_eq!(parsed[1].title, "SQLBolt");
        assert_eq!(parsed[1].cost, Cost::Free);
    }

    #[test]
    fn test_title_then_bare_url_on_next_line() {
        let raw = "1. Google Data Analytics Certificate\nhttps://www.coursera.org/professional-certificates/google-data-analytics\n";
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].provider, "Coursera");
    }

    #[test]
    fn test_inline_urls_drop_trailing_punctuation() {
        let raw = "\
1. Python for Everybody - https://www.py4e.com/lessons, free
2. SQLBolt: see https://sqlbolt.com/.
3. Khan Academy SQL
   Start here: https://www.khanacademy.org/computing/computer-programming/sql!
";
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].url, "https://www.py4e.com/lessons");
        assert_eq!(parsed[0].title, "Python for Everybody");
        assert_eq!(parsed[0].cost, Cost::Free);
        assert_eq!(parsed[1].url, "https://sqlbolt.com/");
        assert_eq!(parsed[1].title, "SQLBolt");
        assert_eq!(
            parsed[2].url,
            "https://www.khanacademy.org/computing/computer-programming/sql"
        );
        assert!(parsed
            .iter()
            .all(|r| !r.url.ends_with(TRAILING_URL_PUNCTUATION)));
    }

    #[test]
    fn test_url_field_drops_trailing_punctuation() {
        let raw = "Title: SQLBolt\nURL: https://sqlbolt.com/lesson/select_queries_introduction.\n";
        let parsed = parse_search_output(raw);
        assert_eq!(parsed.len(), 1);
        assert_eq!(
            parsed[0].url,
            "https://sqlbolt.com/lesson/select_queries_introduction"
        );
    }

    #[test]
    fn test_garbage_yields_nothing() {
        assert!(parse_search_output("").is_empty());
        assert!(parse_search_output("I could not find anything, sorry.").is_empty());
        assert!(parse_search_output("{\"unexpected\": true}").is_empty());
    }
}
