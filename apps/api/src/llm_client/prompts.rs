// Cross-cutting prompt fragments. Each feature that calls the LLM keeps its
// own prompts.rs alongside it.

/// Appended to every prompt that asks for links.
pub const NO_FABRICATED_LINKS_INSTRUCTION: &str = "\
    CRITICAL: Only include URLs you are confident exist and are publicly reachable. \
    Never guess a deep link to a specific course page. \
    If you are unsure of a course URL, link to the provider's search page for the topic instead.";
