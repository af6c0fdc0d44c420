// Prompt constants for resource discovery.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resource search. JSON is preferred but the parser also
/// accepts loosely structured lists, so this does not insist on JSON-only.
pub const RESOURCE_SEARCH_SYSTEM: &str =
    "You are a learning advisor who recommends high-quality online courses, \
    tutorials and documentation. You recommend resources from reputable providers \
    and never invent course titles.";

/// Resource search prompt template. Replace `{skill}`, `{keywords}` and
/// `{no_fabricated_links}` before sending.
pub const RESOURCE_SEARCH_PROMPT_TEMPLATE: &str = r#"Recommend up to 5 online learning resources for someone who wants to learn: {skill}
Search terms: {keywords}

Return a JSON array with this EXACT schema (no extra fields):
[
  {
    "title": "Course or tutorial title",
    "url": "https://...",
    "provider": "Coursera",
    "cost": "free",
    "rating": 4.7,
    "description": "One sentence on what the learner will get out of it"
  }
]

Rules:
- "cost" is "free" if the material can be studied at no charge (auditing counts), otherwise "paid".
- "rating" is the provider's public rating out of 5, or 0 if unknown.
- Prefer beginner-friendly material unless the skill is inherently advanced.
- {no_fabricated_links}
"#;
