//! Built-in skills/roles graph loaded at startup.

use tracing::info;

use crate::graph::store::{
    DemandTier, Difficulty, GraphError, GraphStore, NodeId, NodeKind, Priority, RelationType,
    RoleAttrs, SkillAttrs,
};

use Difficulty::{Advanced, Beginner, Intermediate};
use Priority::{Complementary, Core};
use RelationType::{LeadsTo, RequiredFor};

/// (name, category, difficulty, base effort hours)
const SKILLS: &[(&str, &str, Option<Difficulty>, u32)] = &[
    ("Python", "programming", Some(Beginner), 40),
    ("SQL", "data", Some(Beginner), 20),
    ("Data Analysis", "data", Some(Intermediate), 30),
    ("Statistics", "data", Some(Intermediate), 35),
    ("Data Visualization", "data", Some(Beginner), 15),
    ("Machine Learning", "ai", Some(Advanced), 60),
    ("Deep Learning", "ai", Some(Advanced), 80),
    ("MLOps", "ai", Some(Advanced), 50),
    ("Cloud Computing", "infrastructure", Some(Intermediate), 40),
    ("JavaScript", "programming", Some(Beginner), 40),
    ("Web Development", "programming", Some(Intermediate), 50),
    ("API Design", "programming", Some(Intermediate), 25),
    ("Project Management", "management", Some(Intermediate), 30),
    ("Agile Methodologies", "management", Some(Beginner), 15),
    ("Stakeholder Communication", "business", Some(Beginner), 10),
    ("Change Management", "management", Some(Intermediate), 20),
    ("AI Tools Proficiency", "ai", None, 20),
    ("Data-Driven Decision Making", "business", Some(Intermediate), 20),
    ("AI Project Planning", "management", Some(Intermediate), 25),
    ("Prompt Engineering", "ai", Some(Beginner), 15),
    ("AI Ethics", "ai", Some(Beginner), 10),
    ("Automation Workflows", "ai", Some(Intermediate), 20),
    ("Digital Marketing", "marketing", Some(Beginner), 25),
    ("Content Strategy", "marketing", Some(Beginner), 15),
    ("Marketing Analytics", "marketing", Some(Intermediate), 25),
    ("Product Management", "product", Some(Intermediate), 40),
    ("User Research", "design", Some(Beginner), 15),
    ("UX Design", "design", Some(Intermediate), 40),
];

/// (name, category, demand, description)
const ROLES: &[(&str, &str, DemandTier, &str)] = &[
    (
        "AI-Enhanced Project Manager",
        "management",
        DemandTier::Growing,
        "Plans and delivers projects that adopt AI tooling, from scoping to change rollout.",
    ),
    (
        "Data Analyst",
        "data",
        DemandTier::High,
        "Turns raw data into reports and insights that inform business decisions.",
    ),
    (
        "Data Scientist",
        "data",
        DemandTier::High,
        "Builds statistical and machine learning models to answer open-ended questions.",
    ),
    (
        "Machine Learning Engineer",
        "ai",
        DemandTier::High,
        "Designs, trains, and operates machine learning systems in production.",
    ),
    (
        "Prompt Engineer",
        "ai",
        DemandTier::Emerging,
        "Designs and evaluates prompts and LLM workflows for products and teams.",
    ),
    (
        "AI Product Manager",
        "product",
        DemandTier::Growing,
        "Owns the roadmap for AI-powered products and balances value, risk, and feasibility.",
    ),
    (
        "Digital Marketing Specialist",
        "marketing",
        DemandTier::Growing,
        "Runs multi-channel campaigns and measures their impact.",
    ),
    (
        "Full Stack Developer",
        "programming",
        DemandTier::High,
        "Builds web applications across frontend, backend, and deployment.",
    ),
    (
        "UX Designer",
        "design",
        DemandTier::Growing,
        "Researches user needs and designs usable product experiences.",
    ),
];

/// (from skill, to node, type, strength, priority). `required-for` targets a
/// role; everything else targets a skill. Every strength is above 0.6.
const RELATIONSHIPS: &[(&str, &str, RelationType, f64, Option<Priority>)] = &[
    // Skill progressions
    ("Python", "Data Analysis", LeadsTo, 0.85, None),
    ("Python", "Machine Learning", LeadsTo, 0.75, None),
    ("Python", "Automation Workflows", LeadsTo, 0.7, None),
    ("Python", "API Design", LeadsTo, 0.7, None),
    ("SQL", "Data Analysis", LeadsTo, 0.85, None),
    ("Data Analysis", "Data Visualization", LeadsTo, 0.8, None),
    ("Data Analysis", "Statistics", LeadsTo, 0.75, None),
    ("Data Analysis", "Data-Driven Decision Making", LeadsTo, 0.8, None),
    ("Data Analysis", "Marketing Analytics", LeadsTo, 0.7, None),
    ("Statistics", "Machine Learning", LeadsTo, 0.8, None),
    ("Machine Learning", "Deep Learning", LeadsTo, 0.85, None),
    ("Machine Learning", "MLOps", LeadsTo, 0.75, None),
    ("Cloud Computing", "MLOps", LeadsTo, 0.8, None),
    ("JavaScript", "Web Development", LeadsTo, 0.9, None),
    ("Web Development", "API Design", LeadsTo, 0.8, None),
    ("Agile Methodologies", "Project Management", LeadsTo, 0.8, None),
    ("Project Management", "AI Tools Proficiency", LeadsTo, 0.9, None),
    ("Project Management", "Product Management", LeadsTo, 0.7, None),
    ("AI Tools Proficiency", "Data-Driven Decision Making", LeadsTo, 0.85, None),
    ("AI Tools Proficiency", "Prompt Engineering", LeadsTo, 0.85, None),
    ("AI Tools Proficiency", "Automation Workflows", LeadsTo, 0.8, None),
    ("Data-Driven Decision Making", "AI Project Planning", LeadsTo, 0.8, None),
    ("Prompt Engineering", "AI Ethics", LeadsTo, 0.7, None),
    ("Digital Marketing", "Content Strategy", LeadsTo, 0.8, None),
    ("Digital Marketing", "Marketing Analytics", LeadsTo, 0.75, None),
    ("Product Management", "User Research", LeadsTo, 0.7, None),
    ("User Research", "UX Design", LeadsTo, 0.85, None),
    // Role requirements
    ("AI Project Planning", "AI-Enhanced Project Manager", RequiredFor, 0.95, Some(Core)),
    ("Change Management", "AI-Enhanced Project Manager", RequiredFor, 0.75, Some(Complementary)),
    ("Stakeholder Communication", "AI-Enhanced Project Manager", RequiredFor, 0.7, Some(Complementary)),
    ("Agile Methodologies", "AI-Enhanced Project Manager", RequiredFor, 0.7, Some(Complementary)),
    ("SQL", "Data Analyst", RequiredFor, 0.9, Some(Core)),
    ("Data Analysis", "Data Analyst", RequiredFor, 0.95, Some(Core)),
    ("Data Visualization", "Data Analyst", RequiredFor, 0.85, Some(Core)),
    ("Statistics", "Data Analyst", RequiredFor, 0.75, Some(Complementary)),
    ("Python", "Data Analyst", RequiredFor, 0.8, Some(Complementary)),
    ("Statistics", "Data Scientist", RequiredFor, 0.9, Some(Core)),
    ("Machine Learning", "Data Scientist", RequiredFor, 0.9, Some(Core)),
    ("Python", "Data Scientist", RequiredFor, 0.85, Some(Core)),
    ("Data Visualization", "Data Scientist", RequiredFor, 0.75, Some(Complementary)),
    ("Machine Learning", "Machine Learning Engineer", RequiredFor, 0.95, Some(Core)),
    ("Deep Learning", "Machine Learning Engineer", RequiredFor, 0.85, Some(Core)),
    ("MLOps", "Machine Learning Engineer", RequiredFor, 0.8, Some(Core)),
    ("Python", "Machine Learning Engineer", RequiredFor, 0.9, Some(Core)),
    ("Cloud Computing", "Machine Learning Engineer", RequiredFor, 0.7, Some(Complementary)),
    ("Prompt Engineering", "Prompt Engineer", RequiredFor, 0.95, Some(Core)),
    ("Automation Workflows", "Prompt Engineer", RequiredFor, 0.75, Some(Complementary)),
    ("AI Ethics", "Prompt Engineer", RequiredFor, 0.7, Some(Complementary)),
    ("Product Management", "AI Product Manager", RequiredFor, 0.9, Some(Core)),
    ("Data-Driven Decision Making", "AI Product Manager", RequiredFor, 0.8, Some(Core)),
    ("AI Tools Proficiency", "AI Product Manager", RequiredFor, 0.8, Some(Core)),
    ("AI Ethics", "AI Product Manager", RequiredFor, 0.7, Some(Complementary)),
    ("Digital Marketing", "Digital Marketing Specialist", RequiredFor, 0.9, Some(Core)),
    ("Content Strategy", "Digital Marketing Specialist", RequiredFor, 0.8, Some(Core)),
    ("Marketing Analytics", "Digital Marketing Specialist", RequiredFor, 0.8, Some(Core)),
    ("AI Tools Proficiency", "Digital Marketing Specialist", RequiredFor, 0.65, Some(Complementary)),
    ("Web Development", "Full Stack Developer", RequiredFor, 0.95, Some(Core)),
    ("API Design", "Full Stack Developer", RequiredFor, 0.85, Some(Core)),
    ("Cloud Computing", "Full Stack Developer", RequiredFor, 0.7, Some(Complementary)),
    ("UX Design", "UX Designer", RequiredFor, 0.95, Some(Core)),
    ("User Research", "UX Designer", RequiredFor, 0.85, Some(Core)),
];

/// Builds the default graph. Fails only if the tables above are inconsistent.
pub fn seed_default_graph() -> Result<GraphStore, GraphError> {
    let mut graph = GraphStore::new();
    seed_into(&mut graph)?;
    info!(
        "Seeded graph: {} nodes, {} relationships",
        graph.len(),
        graph.relationship_count()
    );
    Ok(graph)
}

pub fn seed_into(graph: &mut GraphStore) -> Result<(), GraphError> {
    for &(name, category, difficulty, base_effort_hours) in SKILLS {
        graph.add_skill(
            name,
            SkillAttrs {
                category: category.to_string(),
                difficulty,
                base_effort_hours,
            },
        )?;
    }

    for &(name, category, demand, description) in ROLES {
        graph.add_role(
            name,
            RoleAttrs {
                category: category.to_string(),
                demand,
                description: description.to_string(),
            },
        )?;
    }

    for &(from, to, rel_type, strength, priority) in RELATIONSHIPS {
        let to_kind = match rel_type {
            RelationType::RequiredFor => NodeKind::Role,
            _ => NodeKind::Skill,
        };
        let from_id = lookup_id(graph, NodeKind::Skill, from)?;
        let to_id = lookup_id(graph, to_kind, to)?;
        graph.add_relationship(&from_id, &to_id, rel_type, strength, priority)?;
    }

    Ok(())
}

fn lookup_id(graph: &GraphStore, kind: NodeKind, name: &str) -> Result<NodeId, GraphError> {
    graph
        .find_node(kind, name)
        .map(|n| n.id.clone())
        .ok_or_else(|| GraphError::UnknownName {
            kind,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_builds_expected_counts() {
        let graph = seed_default_graph().unwrap();
        assert_eq!(graph.nodes_of_kind(NodeKind::Skill).count(), SKILLS.len());
        assert_eq!(graph.nodes_of_kind(NodeKind::Role).count(), ROLES.len());
        assert_eq!(graph.relationship_count(), RELATIONSHIPS.len());
    }

    #[test]
    fn test_seed_strengths_all_above_fallback_confidence() {
        for &(from, to, _, strength, _) in RELATIONSHIPS {
            assert!(strength > 0.6, "{from} -> {to} has strength {strength}");
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = seed_default_graph().unwrap();
        let b = seed_default_graph().unwrap();
        let ids_a: Vec<_> = a.nodes_of_kind(NodeKind::Skill).map(|n| n.id.clone()).collect();
        let ids_b: Vec<_> = b.nodes_of_kind(NodeKind::Skill).map(|n| n.id.clone()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_required_for_edges_point_at_roles() {
        let graph = seed_default_graph().unwrap();
        let role = graph
            .find_node(NodeKind::Role, "AI-Enhanced Project Manager")
            .unwrap();
        let incoming = graph.incoming(&role.id);
        assert_eq!(incoming.len(), 4);
        assert!(incoming
            .iter()
            .all(|r| r.rel_type == RelationType::RequiredFor));
    }
}
