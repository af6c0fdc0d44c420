//! Skill Extractor: pluggable, trait-based extraction of skill names from free text.
//!
//! Default: `KeywordSkillExtractor` (matches graph skill names, deterministic).
//! With an API key: `LlmSkillExtractor`, which falls back to the keyword
//! extractor whenever the LLM call fails.
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, chosen at startup.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::graph::store::{GraphStore, NodeKind};
use crate::llm_client::LlmClient;
use crate::skills::prompts::{SKILL_EXTRACT_PROMPT_TEMPLATE, SKILL_EXTRACT_SYSTEM};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Returns skill names found in `text`, canonicalized to graph names where
/// possible, without duplicates.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Vec<String>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive whole-phrase match of every graph skill name.
/// Results follow graph insertion order. Matchers are compiled once, here.
pub struct KeywordSkillExtractor {
    graph: Arc<GraphStore>,
    matchers: Vec<(String, Regex)>,
}

impl KeywordSkillExtractor {
    pub fn new(graph: Arc<GraphStore>) -> Self {
        let matchers = graph
            .nodes_of_kind(NodeKind::Skill)
            .filter_map(|node| phrase_matcher(&node.name).map(|re| (node.name.clone(), re)))
            .collect();
        Self { graph, matchers }
    }

    fn extract_sync(&self, text: &str) -> Vec<String> {
        self.matchers
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// `\b` does not work for names ending in symbols ("C++"), so boundaries are
/// spelled out as "not a word character".
fn phrase_matcher(phrase: &str) -> Option<Regex> {
    let pattern = format!(r"(?i)(?:^|[^\w]){}(?:$|[^\w])", regex::escape(phrase));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Could not build matcher for '{phrase}': {e}");
            None
        }
    }
}

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<String>, AppError> {
        Ok(self.extract_sync(text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillExtractor {
    llm: LlmClient,
    fallback: KeywordSkillExtractor,
}

impl LlmSkillExtractor {
    pub fn new(llm: LlmClient, graph: Arc<GraphStore>) -> Self {
        Self {
            llm,
            fallback: KeywordSkillExtractor::new(graph),
        }
    }

    fn build_prompt(&self, text: &str) -> String {
        let known: Vec<&str> = self
            .fallback
            .graph
            .nodes_of_kind(NodeKind::Skill)
            .map(|n| n.name.as_str())
            .collect();
        SKILL_EXTRACT_PROMPT_TEMPLATE
            .replace("{known_skills}", &known.join(", "))
            .replace("{text}", text)
    }
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<String>, AppError> {
        let prompt = self.build_prompt(text);
        match self.llm.call_json::<Vec<String>>(&prompt, SKILL_EXTRACT_SYSTEM).await {
            Ok(names) => {
                debug!("LLM extracted {} skills", names.len());
                Ok(canonicalize_skills(&self.fallback.graph, &names))
            }
            Err(e) => {
                warn!("LLM skill extraction failed, using keyword matching: {e}");
                self.fallback.extract(text).await
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Canonicalization
// ────────────────────────────────────────────────────────────────────────────

/// Trims, drops blanks, maps names onto graph spelling where a skill node
/// matches case-insensitively, and removes case-insensitive duplicates
/// (first occurrence wins).
pub fn canonicalize_skills(graph: &GraphStore, raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            graph
                .resolve_name(NodeKind::Skill, s)
                .map(|node| node.name.clone())
                .unwrap_or_else(|| s.to_string())
        })
        .filter(|name| seen.insert(name.to_lowercase()))
        .collect()
}

/// Appends `extra` to `base`, keeping `base` order and skipping
/// case-insensitive duplicates.
pub fn merge_skills(base: &[String], extra: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    base.iter()
        .chain(extra)
        .filter(|s| seen.insert(s.trim().to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::seed::seed_default_graph;

    fn graph() -> Arc<GraphStore> {
        Arc::new(seed_default_graph().unwrap())
    }

    #[tokio::test]
    async fn test_keyword_extractor_finds_graph_skills() {
        let extractor = KeywordSkillExtractor::new(graph());
        let text = "Led project management for a 12-person team; wrote python scripts and SQL reports.";
        let skills = extractor.extract(text).await.unwrap();
        assert!(skills.contains(&"Project Management".to_string()));
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"SQL".to_string()));
    }

    #[tokio::test]
    async fn test_keyword_extractor_requires_whole_words() {
        let extractor = KeywordSkillExtractor::new(graph());
        let skills = extractor.extract("Worked with SQLite and pythonic APIs").await.unwrap();
        assert!(!skills.contains(&"SQL".to_string()));
        assert!(!skills.contains(&"Python".to_string()));
    }

    #[tokio::test]
    async fn test_keyword_extractor_empty_text() {
        let extractor = KeywordSkillExtractor::new(graph());
        assert!(extractor.extract("").await.unwrap().is_empty());
    }

    #[test]
    fn test_phrase_matcher_handles_symbol_suffixes() {
        let re = phrase_matcher("C++").unwrap();
        assert!(re.is_match("Strong C++ background"));
        assert!(!re.is_match("Strong C background"));
    }

    #[test]
    fn test_keyword_extractor_compiles_one_matcher_per_skill() {
        let g = graph();
        let extractor = KeywordSkillExtractor::new(g.clone());
        let names: Vec<&str> = extractor.matchers.iter().map(|(n, _)| n.as_str()).collect();
        let skills: Vec<&str> = g
            .nodes_of_kind(NodeKind::Skill)
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, skills);
    }

    #[test]
    fn test_canonicalize_maps_case_and_dedupes() {
        let g = graph();
        let raw = vec![
            " python ".to_string(),
            "PYTHON".to_string(),
            "".to_string(),
            "Underwater Welding".to_string(),
        ];
        assert_eq!(
            canonicalize_skills(&g, &raw),
            vec!["Python".to_string(), "Underwater Welding".to_string()]
        );
    }

    #[test]
    fn test_merge_skills_keeps_base_order() {
        let base = vec!["SQL".to_string(), "Python".to_string()];
        let extra = vec!["python".to_string(), "Statistics".to_string()];
        assert_eq!(
            merge_skills(&base, &extra),
            vec!["SQL".to_string(), "Python".to_string(), "Statistics".to_string()]
        );
    }
}
