//! Hand-picked resources for common skills. Used to top up discovery when
//! live strategies return too little.

use crate::models::resource::{CandidateResource, Cost, ResourceSource};

use Cost::{Free, Paid};

#[derive(Debug, Clone, Copy)]
struct CuratedEntry {
    title: &'static str,
    url: &'static str,
    provider: &'static str,
    cost: Cost,
    rating: f64,
    description: &'static str,
}

const fn entry(
    title: &'static str,
    url: &'static str,
    provider: &'static str,
    cost: Cost,
    rating: f64,
    description: &'static str,
) -> CuratedEntry {
    CuratedEntry {
        title,
        url,
        provider,
        cost,
        rating,
        description,
    }
}

const CURATED: &[(&str, &[CuratedEntry])] = &[
    (
        "Prompt Engineering",
        &[
            entry(
                "ChatGPT Prompt Engineering for Developers",
                "https://www.deeplearning.ai/short-courses/chatgpt-prompt-engineering-for-developers/",
                "DeepLearning.AI",
                Free,
                4.8,
                "Short course on writing clear, iterative prompts for LLM applications.",
            ),
            entry(
                "Prompt Engineering for ChatGPT",
                "https://www.coursera.org/learn/prompt-engineering",
                "Coursera",
                Free,
                4.8,
                "Prompt patterns and techniques for getting reliable output from chat models.",
            ),
            entry(
                "Learn Prompting: Introduction",
                "https://learnprompting.org/docs/introduction",
                "Learn Prompting",
                Free,
                4.7,
                "Open guide covering prompting basics through advanced techniques.",
            ),
            entry(
                "Prompt engineering guide",
                "https://platform.openai.com/docs/guides/prompt-engineering",
                "OpenAI",
                Free,
                4.6,
                "Strategies and tactics for better results from large language models.",
            ),
        ],
    ),
    (
        "AI Tools Proficiency",
        &[
            entry(
                "AI For Everyone",
                "https://www.coursera.org/learn/ai-for-everyone",
                "Coursera",
                Free,
                4.8,
                "Non-technical introduction to what AI can and cannot do at work.",
            ),
            entry(
                "Generative AI for Everyone",
                "https://www.deeplearning.ai/courses/generative-ai-for-everyone/",
                "DeepLearning.AI",
                Free,
                4.8,
                "How generative AI tools work and how to use them in everyday tasks.",
            ),
            entry(
                "Introduction to Generative AI",
                "https://www.cloudskillsboost.google/course_templates/536",
                "Google",
                Free,
                4.6,
                "Micro-course on generative AI concepts and Google tooling.",
            ),
        ],
    ),
    (
        "Python",
        &[
            entry(
                "Python for Everybody",
                "https://www.coursera.org/specializations/python",
                "Coursera",
                Free,
                4.8,
                "Beginner programming in Python, from variables to data structures.",
            ),
            entry(
                "The Python Tutorial",
                "https://docs.python.org/3/tutorial/",
                "Python Software Foundation",
                Free,
                4.7,
                "The official tutorial for the Python language.",
            ),
            entry(
                "Scientific Computing with Python",
                "https://www.freecodecamp.org/learn/scientific-computing-with-python/",
                "freeCodeCamp",
                Free,
                4.7,
                "Project-based Python curriculum with a free certification.",
            ),
        ],
    ),
    (
        "SQL",
        &[
            entry(
                "SQLBolt",
                "https://sqlbolt.com/",
                "SQLBolt",
                Free,
                4.7,
                "Interactive lessons and exercises for learning SQL.",
            ),
            entry(
                "Intro to SQL: Querying and managing data",
                "https://www.khanacademy.org/computing/computer-programming/sql",
                "Khan Academy",
                Free,
                4.6,
                "Video lessons and challenges on relational queries.",
            ),
            entry(
                "SQL Tutorial",
                "https://mode.com/sql-tutorial",
                "Mode",
                Free,
                4.6,
                "SQL for data analysis, from basic to advanced queries.",
            ),
        ],
    ),
    (
        "Data Analysis",
        &[
            entry(
                "Google Data Analytics Professional Certificate",
                "https://www.coursera.org/professional-certificates/google-data-analytics",
                "Coursera",
                Paid,
                4.8,
                "Job-ready program covering spreadsheets, SQL, R and visualization.",
            ),
            entry(
                "Pandas",
                "https://www.kaggle.com/learn/pandas",
                "Kaggle",
                Free,
                4.7,
                "Hands-on micro-course on data manipulation with pandas.",
            ),
        ],
    ),
    (
        "Data Visualization",
        &[
            entry(
                "Data Visualization",
                "https://www.kaggle.com/learn/data-visualization",
                "Kaggle",
                Free,
                4.6,
                "Charting with seaborn through short interactive lessons.",
            ),
            entry(
                "Tableau Free Training Videos",
                "https://www.tableau.com/learn/training",
                "Tableau",
                Free,
                4.5,
                "Official video training for building dashboards in Tableau.",
            ),
        ],
    ),
    (
        "Statistics",
        &[entry(
            "Statistics and Probability",
            "https://www.khanacademy.org/math/statistics-probability",
            "Khan Academy",
            Free,
            4.8,
            "Full introductory statistics course with practice exercises.",
        )],
    ),
    (
        "Machine Learning",
        &[
            entry(
                "Machine Learning Specialization",
                "https://www.coursera.org/specializations/machine-learning-introduction",
                "Coursera",
                Paid,
                4.9,
                "Foundational machine learning taught by Andrew Ng.",
            ),
            entry(
                "Machine Learning Crash Course",
                "https://developers.google.com/machine-learning/crash-course",
                "Google",
                Free,
                4.7,
                "Fast-paced practical introduction to machine learning.",
            ),
            entry(
                "Intro to Machine Learning",
                "https://www.kaggle.com/learn/intro-to-machine-learning",
                "Kaggle",
                Free,
                4.6,
                "Build and validate your first models in a notebook.",
            ),
        ],
    ),
    (
        "Deep Learning",
        &[
            entry(
                "Deep Learning Specialization",
                "https://www.deeplearning.ai/courses/deep-learning-specialization/",
                "DeepLearning.AI",
                Paid,
                4.9,
                "Neural networks, CNNs, sequence models and training practice.",
            ),
            entry(
                "Practical Deep Learning for Coders",
                "https://course.fast.ai/",
                "fast.ai",
                Free,
                4.8,
                "Top-down, code-first deep learning course.",
            ),
        ],
    ),
    (
        "MLOps",
        &[
            entry(
                "Machine Learning in Production",
                "https://www.deeplearning.ai/courses/machine-learning-in-production/",
                "DeepLearning.AI",
                Paid,
                4.7,
                "Deploying and maintaining ML systems in production.",
            ),
            entry(
                "Made With ML",
                "https://madewithml.com/",
                "Made With ML",
                Free,
                4.7,
                "End-to-end guide to building production ML applications.",
            ),
        ],
    ),
    (
        "AI Ethics",
        &[
            entry(
                "Elements of AI",
                "https://www.elementsofai.com/",
                "University of Helsinki",
                Free,
                4.7,
                "Free introduction to AI and its societal implications.",
            ),
            entry(
                "Ethics of AI",
                "https://ethics-of-ai.mooc.fi/",
                "University of Helsinki",
                Free,
                4.7,
                "Course on the ethical questions raised by AI systems.",
            ),
        ],
    ),
    (
        "Project Management",
        &[
            entry(
                "Google Project Management Professional Certificate",
                "https://www.coursera.org/professional-certificates/google-project-management",
                "Coursera",
                Paid,
                4.8,
                "Entry-level project management, from initiation to closing.",
            ),
            entry(
                "Project management guide",
                "https://www.atlassian.com/agile/project-management",
                "Atlassian",
                Free,
                4.5,
                "Practical articles on planning and running projects.",
            ),
        ],
    ),
    (
        "Agile Methodologies",
        &[
            entry(
                "Agile Coach",
                "https://www.atlassian.com/agile",
                "Atlassian",
                Free,
                4.6,
                "Guides to scrum, kanban and agile practice.",
            ),
            entry(
                "The Scrum Guide",
                "https://scrumguides.org/scrum-guide.html",
                "Scrum.org",
                Free,
                4.5,
                "The definitive description of the Scrum framework.",
            ),
        ],
    ),
    (
        "Change Management",
        &[entry(
            "The Prosci ADKAR Model",
            "https://www.prosci.com/methodology/adkar",
            "Prosci",
            Free,
            4.4,
            "A widely used model for guiding individual change.",
        )],
    ),
    (
        "Automation Workflows",
        &[entry(
            "Zapier Learn",
            "https://zapier.com/learn",
            "Zapier",
            Free,
            4.4,
            "Guides to automating work across apps.",
        )],
    ),
    (
        "JavaScript",
        &[
            entry(
                "The Modern JavaScript Tutorial",
                "https://javascript.info/",
                "javascript.info",
                Free,
                4.8,
                "From language basics to advanced topics, with exercises.",
            ),
            entry(
                "Learn JavaScript",
                "https://developer.mozilla.org/en-US/docs/Learn/JavaScript",
                "MDN Web Docs",
                Free,
                4.8,
                "MDN's structured JavaScript learning area.",
            ),
        ],
    ),
    (
        "Web Development",
        &[
            entry(
                "The Odin Project",
                "https://www.theodinproject.com/",
                "The Odin Project",
                Free,
                4.8,
                "Full-stack curriculum built around real projects.",
            ),
            entry(
                "Responsive Web Design",
                "https://www.freecodecamp.org/learn/2022/responsive-web-design/",
                "freeCodeCamp",
                Free,
                4.7,
                "HTML and CSS fundamentals through guided projects.",
            ),
        ],
    ),
    (
        "Cloud Computing",
        &[
            entry(
                "AWS Cloud Practitioner Essentials",
                "https://aws.amazon.com/training/digital/aws-cloud-practitioner-essentials/",
                "AWS Skill Builder",
                Free,
                4.7,
                "Foundational overview of AWS cloud concepts and services.",
            ),
            entry(
                "Azure training",
                "https://learn.microsoft.com/en-us/training/azure/",
                "Microsoft Learn",
                Free,
                4.6,
                "Self-paced learning paths for Azure.",
            ),
        ],
    ),
    (
        "UX Design",
        &[
            entry(
                "Google UX Design Professional Certificate",
                "https://www.coursera.org/professional-certificates/google-ux-design",
                "Coursera",
                Paid,
                4.8,
                "Design process from research to high-fidelity prototypes.",
            ),
            entry(
                "UX Design Literature",
                "https://www.interaction-design.org/literature",
                "Interaction Design Foundation",
                Free,
                4.5,
                "Open articles and topics on user experience design.",
            ),
        ],
    ),
];

/// Curated resources for a skill, case-insensitive. Returned as pre-trusted
/// candidates (`verified` set); the aggregator re-checks them when online.
pub fn curated_resources(skill: &str) -> Vec<CandidateResource> {
    let wanted = skill.trim();
    CURATED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, entries)| {
            entries
                .iter()
                .map(|e| CandidateResource {
                    title: e.title.to_string(),
                    url: e.url.to_string(),
                    provider: e.provider.to_string(),
                    cost: e.cost,
                    rating: e.rating,
                    description: e.description.to_string(),
                    verified: true,
                    source: ResourceSource::Curated,
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::providers::provider_quality_score;

    #[test]
    fn test_prompt_engineering_has_at_least_three() {
        let found = curated_resources("prompt engineering");
        assert!(found.len() >= 3);
        assert!(found.iter().all(|r| r.source == ResourceSource::Curated));
        assert!(found.iter().all(|r| r.verified));
    }

    #[test]
    fn test_unknown_skill_is_empty() {
        assert!(curated_resources("Underwater Basket Weaving").is_empty());
    }

    #[test]
    fn test_every_curated_provider_is_scored() {
        for (_, entries) in CURATED {
            for e in *entries {
                assert!(
                    provider_quality_score(e.provider) > 0.0,
                    "unscored provider {}",
                    e.provider
                );
            }
        }
    }

    #[test]
    fn test_curated_urls_are_https() {
        for (_, entries) in CURATED {
            for e in *entries {
                assert!(e.url.starts_with("https://"), "{}", e.url);
            }
        }
    }
}
