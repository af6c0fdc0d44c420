// Prompt constants for skill extraction.

/// System prompt for skill extraction. JSON-only.
pub const SKILL_EXTRACT_SYSTEM: &str =
    "You are an expert career coach who reads resumes and lists the professional \
    skills they demonstrate. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Skill extraction prompt template. Replace `{known_skills}` and `{text}`.
pub const SKILL_EXTRACT_PROMPT_TEMPLATE: &str = r#"Read the text below and list the skills the author clearly has.

Prefer names from this list when one fits, spelled exactly as written:
{known_skills}

Return a JSON array of strings, e.g. ["Python", "SQL"]. Return [] if no skills are evident.
Only list skills supported by the text. Do not infer skills from job titles alone.

TEXT:
{text}
"#;
