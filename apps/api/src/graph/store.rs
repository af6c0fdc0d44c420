//! Graph Store: typed skill/role nodes joined by directed, weighted relationships.
//!
//! Pure in-memory structure. Populated once by the seed routine at startup and
//! read-only while requests are in flight; writers are administrative and
//! externally serialized.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Node data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Skill,
    Role,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Skill => "skill",
            NodeKind::Role => "role",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandTier {
    Emerging,
    Growing,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAttrs {
    pub category: String,
    /// `None` for skills that have not been rated yet.
    pub difficulty: Option<Difficulty>,
    pub base_effort_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAttrs {
    pub category: String,
    pub demand: DemandTier,
    pub description: String,
}

/// Kind-specific attributes. The variant decides the node's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeAttrs {
    Skill(SkillAttrs),
    Role(RoleAttrs),
}

impl NodeAttrs {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeAttrs::Skill(_) => NodeKind::Skill,
            NodeAttrs::Role(_) => NodeKind::Role,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            NodeAttrs::Skill(s) => &s.category,
            NodeAttrs::Role(r) => &r.category,
        }
    }
}

/// Stable string key: `skill-<n>` / `role-<n>`, assigned in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.attrs.kind()
    }

    pub fn skill_attrs(&self) -> Option<&SkillAttrs> {
        match &self.attrs {
            NodeAttrs::Skill(s) => Some(s),
            NodeAttrs::Role(_) => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Relationship data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationType {
    LeadsTo,
    RequiredFor,
    Complements,
}

/// Only meaningful on `required-for` edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Core,
    Complementary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: NodeId,
    pub to: NodeId,
    pub rel_type: RelationType,
    /// In (0, 1]. Edge weight is `1 / strength`.
    pub strength: f64,
    pub priority: Option<Priority>,
}

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("{kind} '{name}' already exists")]
    DuplicateNode { kind: NodeKind, name: String },

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("No {kind} named '{name}'")]
    UnknownName { kind: NodeKind, name: String },

    #[error("Invalid relationship strength {0}: must be in (0, 1]")]
    InvalidWeight(f64),

    #[error("Cannot apply {given} attributes to {existing} node {id}")]
    AttributeKindMismatch {
        id: NodeId,
        existing: NodeKind,
        given: NodeKind,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: HashMap<NodeId, Node>,
    /// Insertion order, for deterministic iteration.
    order: Vec<NodeId>,
    by_name: HashMap<(NodeKind, String), NodeId>,
    outgoing: HashMap<NodeId, Vec<Relationship>>,
    incoming: HashMap<NodeId, Vec<Relationship>>,
    skill_seq: u32,
    role_seq: u32,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node. `(kind, name)` must be unique; names match exactly,
    /// so callers normalize before inserting.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        attrs: NodeAttrs,
    ) -> Result<NodeId, GraphError> {
        let name = name.into();
        let kind = attrs.kind();
        let key = (kind, name.clone());

        if self.by_name.contains_key(&key) {
            return Err(GraphError::DuplicateNode { kind, name });
        }

        let seq = match kind {
            NodeKind::Skill => {
                self.skill_seq += 1;
                self.skill_seq
            }
            NodeKind::Role => {
                self.role_seq += 1;
                self.role_seq
            }
        };
        let id = NodeId(format!("{}-{}", kind.as_str(), seq));

        self.by_name.insert(key, id.clone());
        self.order.push(id.clone());
        self.nodes.insert(id.clone(), Node {
            id: id.clone(),
            name,
            attrs,
        });

        Ok(id)
    }

    pub fn add_skill(
        &mut self,
        name: impl Into<String>,
        attrs: SkillAttrs,
    ) -> Result<NodeId, GraphError> {
        self.add_node(name, NodeAttrs::Skill(attrs))
    }

    pub fn add_role(
        &mut self,
        name: impl Into<String>,
        attrs: RoleAttrs,
    ) -> Result<NodeId, GraphError> {
        self.add_node(name, NodeAttrs::Role(attrs))
    }

    pub fn add_relationship(
        &mut self,
        from: &NodeId,
        to: &NodeId,
        rel_type: RelationType,
        strength: f64,
        priority: Option<Priority>,
    ) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.nodes.contains_key(id) {
                return Err(GraphError::UnknownNode(id.clone()));
            }
        }
        // NaN fails both comparisons, so it is rejected here too
        if !(strength > 0.0 && strength <= 1.0) {
            return Err(GraphError::InvalidWeight(strength));
        }

        let relationship = Relationship {
            from: from.clone(),
            to: to.clone(),
            rel_type,
            strength,
            priority,
        };
        self.incoming
            .entry(to.clone())
            .or_default()
            .push(relationship.clone());
        self.outgoing
            .entry(from.clone())
            .or_default()
            .push(relationship);

        Ok(())
    }

    /// Replaces a node's attributes. The attribute variant must match the node's kind.
    pub fn update_attrs(&mut self, id: &NodeId, attrs: NodeAttrs) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownNode(id.clone()))?;

        if node.kind() != attrs.kind() {
            return Err(GraphError::AttributeKindMismatch {
                id: id.clone(),
                existing: node.kind(),
                given: attrs.kind(),
            });
        }

        node.attrs = attrs;
        Ok(())
    }

    /// Exact, case-sensitive lookup.
    pub fn find_node(&self, kind: NodeKind, name: &str) -> Option<&Node> {
        self.by_name
            .get(&(kind, name.to_string()))
            .and_then(|id| self.nodes.get(id))
    }

    /// Canonicalises free-form input: exact match first, then a trimmed,
    /// case-insensitive scan in insertion order.
    pub fn resolve_name(&self, kind: NodeKind, raw: &str) -> Option<&Node> {
        if let Some(node) = self.find_node(kind, raw) {
            return Some(node);
        }
        let wanted = raw.trim();
        if wanted.is_empty() {
            return None;
        }
        self.nodes_of_kind(kind)
            .find(|n| n.name.eq_ignore_ascii_case(wanted))
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(move |n| n.kind() == kind)
    }

    /// Distinct one-hop successors in edge insertion order, regardless of type.
    pub fn neighbors(&self, id: &NodeId) -> Vec<&NodeId> {
        let mut seen = HashSet::new();
        self.outgoing(id)
            .iter()
            .map(|r| &r.to)
            .filter(|to| seen.insert(*to))
            .collect()
    }

    pub fn outgoing(&self, id: &NodeId) -> &[Relationship] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn incoming(&self, id: &NodeId) -> &[Relationship] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Skills with a `required-for` edge into `role`: core before
    /// complementary, then strongest first, then edge insertion order.
    pub fn required_skills(&self, role: &NodeId) -> Vec<&Node> {
        let mut edges: Vec<&Relationship> = self
            .incoming(role)
            .iter()
            .filter(|r| r.rel_type == RelationType::RequiredFor)
            .collect();

        edges.sort_by(|a, b| {
            let rank = |p: Option<Priority>| u8::from(p != Some(Priority::Core));
            rank(a.priority)
                .cmp(&rank(b.priority))
                .then_with(|| b.strength.total_cmp(&a.strength))
        });

        let mut seen = HashSet::new();
        edges
            .into_iter()
            .filter(|r| seen.insert(&r.from))
            .filter_map(|r| self.nodes.get(&r.from))
            .filter(|n| n.kind() == NodeKind::Skill)
            .collect()
    }

    /// Strength of the strongest relationship from `from` to `to`, of any type.
    pub fn strongest_strength(&self, from: &NodeId, to: &NodeId) -> Option<f64> {
        self.outgoing(from)
            .iter()
            .filter(|r| &r.to == to)
            .map(|r| r.strength)
            .fold(None, |best, s| Some(best.map_or(s, |b: f64| b.max(s))))
    }

    /// `1 / strength` of the strongest relationship, or unit cost when the
    /// pair is not adjacent.
    pub fn edge_weight(&self, from: &NodeId, to: &NodeId) -> f64 {
        self.strongest_strength(from, to)
            .map(|s| 1.0 / s)
            .unwrap_or(1.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn relationship_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    /// Explicit teardown. Id sequences restart.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
