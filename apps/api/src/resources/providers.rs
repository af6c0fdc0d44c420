//! Known learning providers and aggregator sites, with the quality scores the
//! ranker uses and the search-page URLs the non-LLM strategies synthesize.

use reqwest::Url;

use crate::models::resource::Cost;

/// A site that exposes a keyword search page.
#[derive(Debug, Clone, Copy)]
pub struct SearchSite {
    pub name: &'static str,
    /// 0.0 – 10.0
    pub quality_score: f64,
    /// Typical rating shown for the site's catalogue, 0.0 – 5.0.
    pub typical_rating: f64,
    pub cost: Cost,
    pub search_base: &'static str,
    pub query_param: &'static str,
    pub host: &'static str,
}

impl SearchSite {
    /// Builds the search-results URL for the given keywords, or `None` if the
    /// base URL is malformed.
    pub fn search_url(&self, keywords: &str) -> Option<String> {
        Url::parse_with_params(self.search_base, &[(self.query_param, keywords)])
            .ok()
            .map(String::from)
    }
}

const fn site(
    name: &'static str,
    quality_score: f64,
    typical_rating: f64,
    cost: Cost,
    search_base: &'static str,
    query_param: &'static str,
    host: &'static str,
) -> SearchSite {
    SearchSite {
        name,
        quality_score,
        typical_rating,
        cost,
        search_base,
        query_param,
        host,
    }
}

/// Course platforms queried by the provider search strategy, best first.
pub const PROVIDERS: &[SearchSite] = &[
    site("Coursera", 9.0, 4.7, Cost::Free, "https://www.coursera.org/search", "query", "coursera.org"),
    site("edX", 9.0, 4.6, Cost::Free, "https://www.edx.org/search", "q", "edx.org"),
    site("Khan Academy", 8.5, 4.7, Cost::Free, "https://www.khanacademy.org/search", "page_search_query", "khanacademy.org"),
    site("freeCodeCamp", 8.5, 4.7, Cost::Free, "https://www.freecodecamp.org/news/search/", "query", "freecodecamp.org"),
    site("Pluralsight", 8.0, 4.5, Cost::Paid, "https://www.pluralsight.com/search", "q", "pluralsight.com"),
    site("LinkedIn Learning", 7.5, 4.5, Cost::Paid, "https://www.linkedin.com/learning/search", "keywords", "linkedin.com"),
    site("Udemy", 7.0, 4.4, Cost::Paid, "https://www.udemy.com/courses/search/", "q", "udemy.com"),
    site("YouTube", 6.0, 4.2, Cost::Free, "https://www.youtube.com/results", "search_query", "youtube.com"),
];

/// Course catalogues that index many providers.
pub const AGGREGATOR_SITES: &[SearchSite] = &[
    site("Class Central", 8.0, 4.5, Cost::Free, "https://www.classcentral.com/search", "q", "classcentral.com"),
    site("MOOC List", 6.5, 4.2, Cost::Free, "https://www.mooc-list.com/search/node", "keys", "mooc-list.com"),
];

/// Providers that only appear through curated or LLM-sourced entries.
const OTHER_PROVIDER_SCORES: &[(&str, f64)] = &[
    ("DeepLearning.AI", 9.0),
    ("MDN Web Docs", 9.0),
    ("Google", 8.5),
    ("Kaggle", 8.5),
    ("Microsoft Learn", 8.5),
    ("AWS Skill Builder", 8.5),
    ("OpenAI", 8.5),
    ("Python Software Foundation", 8.5),
    ("fast.ai", 8.5),
    ("University of Helsinki", 8.5),
    ("The Odin Project", 8.0),
    ("Learn Prompting", 8.0),
    ("javascript.info", 8.0),
    ("Interaction Design Foundation", 8.0),
    ("Atlassian", 7.5),
    ("Scrum.org", 7.5),
    ("Mode", 7.5),
    ("SQLBolt", 7.5),
    ("Tableau", 7.5),
    ("Made With ML", 7.5),
    ("Prosci", 7.0),
    ("Zapier", 7.0),
];

/// Quality score for a provider name, case-insensitive. Unknown providers
/// score 0.
pub fn provider_quality_score(name: &str) -> f64 {
    let name = name.trim();
    PROVIDERS
        .iter()
        .chain(AGGREGATOR_SITES)
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .map(|s| s.quality_score)
        .or_else(|| {
            OTHER_PROVIDER_SCORES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
                .map(|(_, score)| *score)
        })
        .unwrap_or(0.0)
}

/// Maps a URL host to a known site name, e.g. `www.coursera.org` → `Coursera`.
pub fn provider_for_host(host: &str) -> Option<&'static str> {
    let host = host.trim_start_matches("www.").to_ascii_lowercase();
    PROVIDERS
        .iter()
        .chain(AGGREGATOR_SITES)
        .find(|s| host == s.host || host.ends_with(&format!(".{}", s.host)))
        .map(|s| s.name)
}

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "for", "in", "of", "on", "the", "to", "with",
];

/// Search keywords for a skill: lowercased words minus stop-words. Falls back
/// to the whole lowercased name if nothing survives.
pub fn search_keywords(skill: &str) -> String {
    let lower = skill.trim().to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| c.is_whitespace() || c == '-' || c == '/' || c == ',')
        .filter(|w| !w.is_empty() && !STOP_WORDS.contains(w))
        .collect();

    if words.is_empty() {
        lower
    } else {
        words.join(" ")
    }
}
