//! Path Finder: confidence-weighted shortest path from known skills to a target role.
//!
//! Algorithm:
//! 1. Resolve the target role node (exact name). Unresolvable → fallback table.
//! 2. For every known skill that exists as a node, run Dijkstra over
//!    `1 / strength` edge weights to the role.
//! 3. Among the per-origin paths, keep the one with the highest average edge
//!    strength (first found wins ties). That average is the confidence.
//! 4. Skill gaps = Skill nodes on the winning path the caller doesn't know,
//!    in path order, capped at 3.
//!
//! Anything that prevents a graph path falls back to the static required-skills
//! table with a fixed confidence of 0.6.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::graph::fallback::required_skills_for;
use crate::graph::store::{Difficulty, GraphError, GraphStore, Node, NodeId, NodeKind};
use crate::models::pathway::SkillGap;

/// Neutral confidence reported whenever the fallback table is used.
pub const FALLBACK_CONFIDENCE: f64 = 0.6;
pub const MAX_SKILL_GAPS: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("Unknown role: '{0}'")]
    UnknownRole(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSource {
    Graph,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Traversed nodes, origin first. Empty for fallback results.
    pub path: Vec<Node>,
    pub skill_gaps: Vec<SkillGap>,
    pub confidence: f64,
    pub source: PathSource,
}

/// Hours to competency by difficulty. Unrated skills get the default.
pub fn estimated_hours(difficulty: Option<Difficulty>) -> u32 {
    match difficulty {
        Some(Difficulty::Beginner) => 15,
        Some(Difficulty::Intermediate) => 25,
        Some(Difficulty::Advanced) => 40,
        None => 20,
    }
}

pub struct PathFinder<'a> {
    graph: &'a GraphStore,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a GraphStore) -> Self {
        Self { graph }
    }

    pub fn find_shortest_path(
        &self,
        known_skills: &[String],
        target_role: &str,
    ) -> Result<PathResult, PathError> {
        let known = KnownSkills::new(known_skills);

        let Some(role) = self.graph.find_node(NodeKind::Role, target_role) else {
            debug!("Role '{target_role}' not in graph, using fallback table");
            return self.fallback(&known, target_role, None);
        };

        let origins: Vec<&Node> = known_skills
            .iter()
            .filter_map(|name| self.graph.find_node(NodeKind::Skill, name))
            .collect();

        if origins.is_empty() {
            debug!("No known skill resolves to a node for '{target_role}', using fallback");
            return self.fallback(&known, target_role, Some(role));
        }

        let mut best: Option<(Vec<&NodeId>, f64)> = None;
        for origin in origins {
            let Some(path) = shortest_path(self.graph, &origin.id, &role.id) else {
                continue;
            };
            let confidence = average_strength(self.graph, &path);
            debug!(
                "Path from '{}' to '{}': {} hops, avg strength {:.3}",
                origin.name,
                role.name,
                path.len().saturating_sub(1),
                confidence
            );
            if best.as_ref().map_or(true, |(_, c)| confidence > *c) {
                best = Some((path, confidence));
            }
        }

        match best {
            Some((ids, confidence)) => self.graph_result(&ids, confidence, &known),
            None => {
                debug!("No path reaches '{target_role}', using fallback");
                self.fallback(&known, target_role, Some(role))
            }
        }
    }

    fn graph_result(
        &self,
        ids: &[&NodeId],
        confidence: f64,
        known: &KnownSkills,
    ) -> Result<PathResult, PathError> {
        let path = ids
            .iter()
            .map(|id| {
                self.graph
                    .node(id)
                    .cloned()
                    .ok_or_else(|| GraphError::UnknownNode((*id).clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let skill_gaps = path
            .iter()
            .filter_map(|node| node.skill_attrs().map(|attrs| (node, attrs)))
            .filter(|(node, _)| !known.contains(&node.name))
            .take(MAX_SKILL_GAPS)
            .map(|(node, attrs)| new_gap(&node.name, &attrs.category, attrs.difficulty))
            .collect();

        Ok(PathResult {
            path,
            skill_gaps,
            confidence,
            source: PathSource::Graph,
        })
    }

    /// Static table first; otherwise the role's own `required-for` edges.
    /// A role that is neither in the graph nor in the table is terminal.
    fn fallback(
        &self,
        known: &KnownSkills,
        target_role: &str,
        role: Option<&Node>,
    ) -> Result<PathResult, PathError> {
        let required: Vec<(String, String, Option<Difficulty>)> =
            if let Some(table) = required_skills_for(target_role) {
                table
                    .iter()
                    .map(|fs| {
                        match self
                            .graph
                            .find_node(NodeKind::Skill, fs.name)
                            .and_then(Node::skill_attrs)
                        {
                            Some(attrs) => (
                                fs.name.to_string(),
                                attrs.category.clone(),
                                attrs.difficulty,
                            ),
                            None => (fs.name.to_string(), fs.category.to_string(), fs.difficulty),
                        }
                    })
                    .collect()
            } else if let Some(role) = role {
                self.required_from_graph(role)
            } else {
                return Err(PathError::UnknownRole(target_role.to_string()));
            };

        let skill_gaps = required
            .into_iter()
            .filter(|(name, _, _)| !known.contains(name))
            .take(MAX_SKILL_GAPS)
            .map(|(name, category, difficulty)| new_gap(&name, &category, difficulty))
            .collect();

        Ok(PathResult {
            path: Vec::new(),
            skill_gaps,
            confidence: FALLBACK_CONFIDENCE,
            source: PathSource::Fallback,
        })
    }

    /// Core requirements first, then by strength, then insertion order.
    fn required_from_graph(&self, role: &Node) -> Vec<(String, String, Option<Difficulty>)> {
        self.graph
            .required_skills(&role.id)
            .into_iter()
            .filter_map(|node| {
                node.skill_attrs()
                    .map(|a| (node.name.clone(), a.category.clone(), a.difficulty))
            })
            .collect()
    }
}

fn new_gap(name: &str, category: &str, difficulty: Option<Difficulty>) -> SkillGap {
    SkillGap {
        name: name.to_string(),
        category: category.to_string(),
        difficulty,
        estimated_hours: estimated_hours(difficulty),
        resources: Vec::new(),
        milestones: Vec::new(),
    }
}

/// Case-insensitive set of the caller's skills.
struct KnownSkills(HashSet<String>);

impl KnownSkills {
    fn new(names: &[String]) -> Self {
        Self(names.iter().map(|n| n.trim().to_lowercase()).collect())
    }

    fn contains(&self, name: &str) -> bool {
        self.0.contains(&name.trim().to_lowercase())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dijkstra
// ────────────────────────────────────────────────────────────────────────────

/// Min-heap entry. Equal costs order by node id so runs are deterministic.
#[derive(Debug, PartialEq)]
struct Frontier<'g> {
    cost: f64,
    node: &'g NodeId,
}

impl Eq for Frontier<'_> {}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse so the cheapest pops first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

/// Lowest total `1 / strength` path from `source` to `target`, inclusive.
fn shortest_path<'g>(
    graph: &'g GraphStore,
    source: &'g NodeId,
    target: &'g NodeId,
) -> Option<Vec<&'g NodeId>> {
    let mut dist: HashMap<&'g NodeId, f64> = HashMap::new();
    let mut prev: HashMap<&'g NodeId, &'g NodeId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(Frontier {
        cost: 0.0,
        node: source,
    });

    while let Some(Frontier { cost, node }) = heap.pop() {
        if node == target {
            break;
        }
        if cost > dist.get(node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        for next in graph.neighbors(node) {
            let candidate = cost + graph.edge_weight(node, next);
            if candidate < dist.get(next).copied().unwrap_or(f64::INFINITY) {
                dist.insert(next, candidate);
                prev.insert(next, node);
                heap.push(Frontier {
                    cost: candidate,
                    node: next,
                });
            }
        }
    }

    if !dist.contains_key(target) {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(&parent) = prev.get(current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Some(path)
}

/// Mean strength across consecutive pairs. Single-node paths score 0.
fn average_strength(graph: &GraphStore, path: &[&NodeId]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }
    let total: f64 = path
        .windows(2)
        .map(|pair| 1.0 / graph.edge_weight(pair[0], pair[1]))
        .sum();
    total / (path.len() - 1) as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
