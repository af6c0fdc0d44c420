//! Static "required skills for this role" table, used when the graph cannot
//! produce a path.

use crate::graph::store::Difficulty;

use Difficulty::{Advanced, Beginner, Intermediate};

/// A required skill as listed in the table. Graph attributes win when the
/// skill also exists as a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackSkill {
    pub name: &'static str,
    pub category: &'static str,
    pub difficulty: Option<Difficulty>,
}

const fn skill(
    name: &'static str,
    category: &'static str,
    difficulty: Option<Difficulty>,
) -> FallbackSkill {
    FallbackSkill {
        name,
        category,
        difficulty,
    }
}

/// Ordered by importance within each role.
const ROLE_REQUIREMENTS: &[(&str, &[FallbackSkill])] = &[
    (
        "AI-Enhanced Project Manager",
        &[
            skill("AI Tools Proficiency", "ai", None),
            skill("Data-Driven Decision Making", "business", Some(Intermediate)),
            skill("AI Project Planning", "management", Some(Intermediate)),
            skill("Change Management", "management", Some(Intermediate)),
            skill("Prompt Engineering", "ai", Some(Beginner)),
        ],
    ),
    (
        "Data Analyst",
        &[
            skill("SQL", "data", Some(Beginner)),
            skill("Data Analysis", "data", Some(Intermediate)),
            skill("Data Visualization", "data", Some(Beginner)),
            skill("Statistics", "data", Some(Intermediate)),
        ],
    ),
    (
        "Data Scientist",
        &[
            skill("Python", "programming", Some(Beginner)),
            skill("Statistics", "data", Some(Intermediate)),
            skill("Machine Learning", "ai", Some(Advanced)),
            skill("Data Visualization", "data", Some(Beginner)),
        ],
    ),
    (
        "Machine Learning Engineer",
        &[
            skill("Python", "programming", Some(Beginner)),
            skill("Machine Learning", "ai", Some(Advanced)),
            skill("Deep Learning", "ai", Some(Advanced)),
            skill("MLOps", "ai", Some(Advanced)),
        ],
    ),
    (
        "Prompt Engineer",
        &[
            skill("Prompt Engineering", "ai", Some(Beginner)),
            skill("AI Tools Proficiency", "ai", None),
            skill("Automation Workflows", "ai", Some(Intermediate)),
            skill("AI Ethics", "ai", Some(Beginner)),
        ],
    ),
    (
        "AI Product Manager",
        &[
            skill("Product Management", "product", Some(Intermediate)),
            skill("AI Tools Proficiency", "ai", None),
            skill("Data-Driven Decision Making", "business", Some(Intermediate)),
            skill("AI Ethics", "ai", Some(Beginner)),
        ],
    ),
    (
        "Digital Marketing Specialist",
        &[
            skill("Digital Marketing", "marketing", Some(Beginner)),
            skill("Content Strategy", "marketing", Some(Beginner)),
            skill("Marketing Analytics", "marketing", Some(Intermediate)),
            skill("AI Tools Proficiency", "ai", None),
        ],
    ),
    (
        "Full Stack Developer",
        &[
            skill("JavaScript", "programming", Some(Beginner)),
            skill("Web Development", "programming", Some(Intermediate)),
            skill("API Design", "programming", Some(Intermediate)),
            skill("Cloud Computing", "infrastructure", Some(Intermediate)),
        ],
    ),
    (
        "UX Designer",
        &[
            skill("User Research", "design", Some(Beginner)),
            skill("UX Design", "design", Some(Intermediate)),
            skill("Prototyping", "design", Some(Beginner)),
        ],
    ),
    // Roles below have no graph node; they are served from this table only.
    (
        "Cloud Engineer",
        &[
            skill("Cloud Computing", "infrastructure", Some(Intermediate)),
            skill("Infrastructure as Code", "infrastructure", Some(Intermediate)),
            skill("Networking Fundamentals", "infrastructure", Some(Beginner)),
            skill("Python", "programming", Some(Beginner)),
        ],
    ),
    (
        "Cybersecurity Analyst",
        &[
            skill("Networking Fundamentals", "infrastructure", Some(Beginner)),
            skill("Security Operations", "security", Some(Intermediate)),
            skill("Threat Analysis", "security", Some(Advanced)),
        ],
    ),
    (
        "Business Analyst",
        &[
            skill("Requirements Gathering", "business", Some(Beginner)),
            skill("Data Analysis", "data", Some(Intermediate)),
            skill("Stakeholder Communication", "business", Some(Beginner)),
            skill("SQL", "data", Some(Beginner)),
        ],
    ),
];

/// Case-insensitive lookup by role name.
pub fn required_skills_for(role_name: &str) -> Option<&'static [FallbackSkill]> {
    let wanted = role_name.trim();
    ROLE_REQUIREMENTS
        .iter()
        .find(|(role, _)| role.eq_ignore_ascii_case(wanted))
        .map(|(_, skills)| *skills)
}

pub fn fallback_role_names() -> impl Iterator<Item = &'static str> {
    ROLE_REQUIREMENTS.iter().map(|(role, _)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let skills = required_skills_for("  data analyst ").unwrap();
        assert_eq!(skills[0].name, "SQL");
    }

    #[test]
    fn test_unknown_role_has_no_entry() {
        assert!(required_skills_for("Astronaut").is_none());
    }

    #[test]
    fn test_ai_pm_entry_leads_with_ai_tools() {
        let skills = required_skills_for("AI-Enhanced Project Manager").unwrap();
        assert_eq!(skills[0].name, "AI Tools Proficiency");
        assert_eq!(skills[0].difficulty, None);
    }

    #[test]
    fn test_role_names_are_unique() {
        let names: Vec<_> = fallback_role_names().collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
