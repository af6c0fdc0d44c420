//! Milestone synthesis for a skill gap.
//!
//! Skills with a bespoke entry get its 2–4 steps; anything else gets the
//! 4-step generic template. Hours are split evenly, rounding up.

use crate::models::pathway::Milestone;

const MAX_MILESTONES: usize = 4;

const GENERIC_TEMPLATE: &[&str] = &[
    "Learn the core concepts of {skill}",
    "Work through guided exercises in {skill}",
    "Apply {skill} in a small real-world project",
    "Review your work and share what you learned about {skill}",
];

const SKILL_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "AI Tools Proficiency",
        &[
            "Survey the AI assistants and copilots used in your field",
            "Automate one recurring task of your own with an AI tool",
            "Document when AI output needs human review",
        ],
    ),
    (
        "Data-Driven Decision Making",
        &[
            "Define the metrics that matter for your team's goals",
            "Build a simple dashboard from real data",
            "Present a recommendation backed by that data",
        ],
    ),
    (
        "AI Project Planning",
        &[
            "Scope an AI use case with clear success criteria",
            "Plan data, tooling, and risk checkpoints for the project",
            "Draft a rollout and adoption plan with stakeholders",
        ],
    ),
    (
        "Prompt Engineering",
        &[
            "Learn prompt anatomy: role, context, task, and format",
            "Practice few-shot and step-by-step prompting",
            "Build and evaluate a small prompt library for a real workflow",
        ],
    ),
    (
        "Python",
        &[
            "Learn Python syntax, data types, and control flow",
            "Write scripts that read, transform, and save data",
            "Build a small tool with third-party packages",
            "Add tests and share the project",
        ],
    ),
    (
        "SQL",
        &[
            "Write SELECT queries with filtering and sorting",
            "Join tables and aggregate with GROUP BY",
            "Answer a real business question with a multi-step query",
        ],
    ),
    (
        "Machine Learning",
        &[
            "Understand supervised vs unsupervised learning",
            "Train and evaluate a baseline model",
            "Tune, validate, and explain a model on a real dataset",
            "Package the model for someone else to use",
        ],
    ),
    (
        "Change Management",
        &[
            "Learn a change model such as ADKAR",
            "Map stakeholders and resistance for a change you are leading",
        ],
    ),
    (
        "Data Visualization",
        &[
            "Learn which chart fits which question",
            "Rebuild a cluttered chart into a clear one",
            "Publish a small dashboard",
        ],
    ),
    (
        "Statistics",
        &[
            "Review descriptive statistics and distributions",
            "Practice hypothesis testing and confidence intervals",
            "Run and interpret a regression on real data",
        ],
    ),
];

fn template_for(skill: &str) -> Option<&'static [&'static str]> {
    let wanted = skill.trim();
    SKILL_TEMPLATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, steps)| *steps)
}

pub fn build_milestones(skill: &str, total_hours: u32) -> Vec<Milestone> {
    let skill = skill.trim();
    let steps: Vec<String> = match template_for(skill) {
        Some(steps) => steps
            .iter()
            .take(MAX_MILESTONES)
            .map(|s| s.to_string())
            .collect(),
        None => GENERIC_TEMPLATE
            .iter()
            .map(|s| s.replace("{skill}", skill))
            .collect(),
    };

    let per_step = total_hours.div_ceil(steps.len() as u32);
    steps
        .into_iter()
        .enumerate()
        .map(|(i, title)| Milestone {
            step: i as u32 + 1,
            title,
            estimated_hours: per_step,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bespoke_template_is_used() {
        let milestones = build_milestones("prompt engineering", 15);
        assert_eq!(milestones.len(), 3);
        assert!(milestones[0].title.contains("prompt anatomy"));
        assert_eq!(
            milestones.iter().map(|m| m.step).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_generic_template_mentions_skill() {
        let milestones = build_milestones("Underwater Welding", 20);
        assert_eq!(milestones.len(), 4);
        assert!(milestones
            .iter()
            .all(|m| m.title.contains("Underwater Welding")));
    }

    #[test]
    fn test_hours_split_rounds_up() {
        // 25h over 3 steps -> ceil(8.33) = 9 each
        let milestones = build_milestones("AI Project Planning", 25);
        assert!(milestones.iter().all(|m| m.estimated_hours == 9));

        // 20h over 4 steps divides evenly
        let milestones = build_milestones("Anything Else", 20);
        assert!(milestones.iter().all(|m| m.estimated_hours == 5));
    }

    #[test]
    fn test_every_template_has_two_to_four_steps() {
        for (name, steps) in SKILL_TEMPLATES {
            assert!(
                (2..=MAX_MILESTONES).contains(&steps.len()),
                "{name} has {} steps",
                steps.len()
            );
        }
        assert_eq!(GENERIC_TEMPLATE.len(), MAX_MILESTONES);
    }
}
