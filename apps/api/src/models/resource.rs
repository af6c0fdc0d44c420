use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost {
    Free,
    Paid,
}

impl Cost {
    /// Best-effort read of provider output: anything mentioning "free" is free.
    pub fn from_text(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("free") && !lower.contains("not free") {
            Cost::Free
        } else {
            Cost::Paid
        }
    }
}

/// Which discovery strategy produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceSource {
    IntelligentSearch,
    ProviderSearch,
    AggregatorSearch,
    Curated,
}

/// A learning resource proposed for a skill. `url` is the dedup key after
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResource {
    pub title: String,
    pub url: String,
    pub provider: String,
    pub cost: Cost,
    /// 0.0 – 5.0
    pub rating: f64,
    pub description: String,
    /// True only once the URL passed a reachability check (or came from the
    /// curated table in offline mode).
    pub verified: bool,
    pub source: ResourceSource,
}
