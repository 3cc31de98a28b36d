//! # Core Type Definitions
//!
//! This module contains the input model of the inference engine:
//! - Identifiers (`VertexId`, `EdgeId`)
//! - Records (`Vertex`, `Edge`, `Graph`) and their attribute bag (`AttrValue`)
//! - A fluent `GraphBuilder` for fixtures and collaborators
//! - Error types (`GraphSpecError`)
//!
//! ## Read-Only Guarantee
//!
//! A `Graph` is constructed once by an external collaborator (parser,
//! generator, test) and never mutated by any computer. It stores no adjacency
//! index; the kernel derives whatever each computer needs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier of a vertex within one graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub String);

impl VertexId {
    /// Create a new vertex id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an edge. Uniqueness is not required by any computer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    /// Create a new edge id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

// =============================================================================
// ATTRIBUTE VALUES
// =============================================================================

/// A typed value in a vertex or edge attribute bag.
///
/// Deserialized untagged, so JSON `3.5`, `"north"`, `true` and `[0, 1]` map
/// directly onto the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Explicit null.
    Null,
    /// Boolean flag (root markers, observability, probe designation).
    Bool(bool),
    /// Numeric scalar (timestamps, orders, port counts).
    Number(f64),
    /// Free text (layer tags, categorical data).
    Text(String),
    /// Ordered list (positions, weight vectors, port lists).
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// The value as a number, if it is one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a boolean, if it is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The value as a list of numbers. Fails if any element is not numeric.
    #[must_use]
    pub fn as_number_list(&self) -> Option<Vec<f64>> {
        match self {
            AttrValue::List(items) => items.iter().map(AttrValue::as_f64).collect(),
            _ => None,
        }
    }

    /// A canonical text key for grouping (layer tags may be text or numbers).
    #[must_use]
    pub fn group_key(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Null | AttrValue::List(_) => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<Vec<f64>> for AttrValue {
    fn from(v: Vec<f64>) -> Self {
        AttrValue::List(v.into_iter().map(AttrValue::Number).collect())
    }
}

/// Open attribute map, ordered for deterministic iteration.
pub type Attrs = BTreeMap<String, AttrValue>;

// =============================================================================
// VERTEX
// =============================================================================

/// A vertex record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Identifier, unique within the graph.
    pub id: VertexId,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// User data and policy-named metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: Attrs,
}

impl Vertex {
    /// Create an unlabelled vertex with no attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: VertexId::new(id),
            label: None,
            attrs: Attrs::new(),
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set one attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// Sign of a signed edge, serialized as `-1` / `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Sign {
    /// -1
    Negative,
    /// +1
    Positive,
}

impl TryFrom<i8> for Sign {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Sign::Negative),
            1 => Ok(Sign::Positive),
            other => Err(format!("edge sign must be -1 or 1, got {}", other)),
        }
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => -1,
            Sign::Positive => 1,
        }
    }
}

/// An edge record. Two endpoints make a binary edge; more make a hyperedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Edge identifier.
    pub id: EdgeId,
    /// Ordered endpoint list. For a directed binary edge: `[source, target]`.
    pub endpoints: Vec<VertexId>,
    /// Whether the edge is directed.
    #[serde(default)]
    pub directed: bool,
    /// Optional scalar weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Optional sign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
    /// Optional existence probability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// User data and policy-named metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: Attrs,
}

impl Edge {
    /// Create an edge over an arbitrary endpoint list.
    #[must_use]
    pub fn new(id: impl Into<String>, endpoints: Vec<VertexId>, directed: bool) -> Self {
        Self {
            id: EdgeId::new(id),
            endpoints,
            directed,
            weight: None,
            sign: None,
            probability: None,
            label: None,
            attrs: Attrs::new(),
        }
    }

    /// Create an undirected binary edge.
    #[must_use]
    pub fn undirected(id: impl Into<String>, a: &str, b: &str) -> Self {
        Self::new(id, vec![VertexId::from(a), VertexId::from(b)], false)
    }

    /// Create a directed binary edge `source -> target`.
    #[must_use]
    pub fn directed(id: impl Into<String>, source: &str, target: &str) -> Self {
        Self::new(id, vec![VertexId::from(source), VertexId::from(target)], true)
    }

    /// Set the scalar weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the sign.
    #[must_use]
    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.sign = Some(sign);
        self
    }

    /// Set the existence probability.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set one attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Number of endpoints.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.endpoints.len()
    }

    /// Check if this is a binary edge (arity == 2).
    #[must_use]
    pub fn is_binary(&self) -> bool {
        self.arity() == 2
    }
}

// =============================================================================
// GRAPH
// =============================================================================

/// An immutable graph: a vertex list and an edge list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    vertices: Vec<Vertex>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph from its parts. No validation is performed; see
    /// [`Graph::validate`].
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Create a graph and validate it eagerly.
    pub fn try_new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, GraphSpecError> {
        let graph = Self::new(vertices, edges);
        graph.validate()?;
        Ok(graph)
    }

    /// Start a fluent builder.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Parse a graph from its JSON form (`{"vertices": [...], "edges": [...]}`).
    pub fn from_json_str(json: &str) -> Result<Self, GraphSpecError> {
        serde_json::from_str(json).map_err(|e| GraphSpecError::GraphParse(e.to_string()))
    }

    /// Vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in construction order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check structural well-formedness.
    ///
    /// - Vertex ids are unique
    /// - Every edge has at least two endpoints
    /// - Every endpoint names an existing vertex
    ///
    /// Computers never call this: they skip unresolvable endpoints instead.
    pub fn validate(&self) -> Result<(), GraphSpecError> {
        let mut seen = BTreeSet::new();
        for vertex in &self.vertices {
            if !seen.insert(vertex.id.as_str()) {
                return Err(GraphSpecError::DuplicateVertex(vertex.id.clone()));
            }
        }

        for edge in &self.edges {
            if edge.arity() < 2 {
                return Err(GraphSpecError::DegenerateEdge(edge.id.clone()));
            }
            if let Some(missing) = edge
                .endpoints
                .iter()
                .find(|endpoint| !seen.contains(endpoint.as_str()))
            {
                return Err(GraphSpecError::UnknownVertex {
                    edge: edge.id.clone(),
                    vertex: missing.clone(),
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Fluent graph construction. Edge ids are assigned as `e0`, `e1`, ...
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Add a plain vertex.
    #[must_use]
    pub fn vertex(mut self, id: &str) -> Self {
        self.vertices.push(Vertex::new(id));
        self
    }

    /// Add several plain vertices.
    #[must_use]
    pub fn vertices<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        self.vertices.extend(ids.into_iter().map(Vertex::new));
        self
    }

    /// Add a fully specified vertex.
    #[must_use]
    pub fn with_vertex(mut self, vertex: Vertex) -> Self {
        self.vertices.push(vertex);
        self
    }

    /// Add an undirected binary edge.
    #[must_use]
    pub fn undirected(mut self, a: &str, b: &str) -> Self {
        let id = self.next_edge_id();
        self.edges.push(Edge::undirected(id, a, b));
        self
    }

    /// Add a directed binary edge.
    #[must_use]
    pub fn directed(mut self, source: &str, target: &str) -> Self {
        let id = self.next_edge_id();
        self.edges.push(Edge::directed(id, source, target));
        self
    }

    /// Add an undirected hyperedge over the given endpoints.
    #[must_use]
    pub fn hyperedge(mut self, endpoints: &[&str]) -> Self {
        let id = self.next_edge_id();
        let endpoints = endpoints.iter().map(|e| VertexId::from(*e)).collect();
        self.edges.push(Edge::new(id, endpoints, false));
        self
    }

    /// Add a fully specified edge.
    #[must_use]
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Finish without validation.
    #[must_use]
    pub fn build(self) -> Graph {
        Graph::new(self.vertices, self.edges)
    }

    /// Finish with validation.
    pub fn try_build(self) -> Result<Graph, GraphSpecError> {
        Graph::try_new(self.vertices, self.edges)
    }

    fn next_edge_id(&self) -> String {
        format!("e{}", self.edges.len())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by validation and loading.
///
/// Computers themselves never return errors: every unmet precondition maps to
/// a fallback variant of the axis being computed.
#[derive(Debug, Error)]
pub enum GraphSpecError {
    /// An edge references a vertex id that is not in the vertex list.
    #[error("Edge {edge:?} references unknown vertex {vertex}")]
    UnknownVertex {
        /// The offending edge.
        edge: EdgeId,
        /// The missing endpoint.
        vertex: VertexId,
    },

    /// Two vertices share the same id.
    #[error("Duplicate vertex id: {0}")]
    DuplicateVertex(VertexId),

    /// An edge has fewer than two endpoints.
    #[error("Edge {0:?} has fewer than two endpoints")]
    DegenerateEdge(EdgeId),

    /// A policy document could not be parsed.
    #[error("Policy parse error: {0}")]
    PolicyParse(String),

    /// A graph document could not be parsed.
    #[error("Graph parse error: {0}")]
    GraphParse(String),

    /// A spec could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assigns_sequential_edge_ids() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c"])
            .undirected("a", "b")
            .directed("b", "c")
            .build();

        let ids: Vec<_> = graph.edges().iter().map(|e| e.id.0.as_str()).collect();
        assert_eq!(ids, vec!["e0", "e1"]);
        assert!(graph.edges()[1].directed);
    }

    #[test]
    fn validate_rejects_unknown_endpoint() {
        let result = Graph::builder().vertex("a").undirected("a", "z").try_build();
        assert!(matches!(
            result,
            Err(GraphSpecError::UnknownVertex { ref vertex, .. }) if vertex.as_str() == "z"
        ));
    }

    #[test]
    fn validate_rejects_duplicate_vertex() {
        let result = Graph::builder().vertex("a").vertex("a").try_build();
        assert!(matches!(result, Err(GraphSpecError::DuplicateVertex(_))));
    }

    #[test]
    fn validate_rejects_degenerate_edge() {
        let graph = Graph::builder()
            .vertex("a")
            .with_edge(Edge::new("solo", vec![VertexId::from("a")], false))
            .build();
        assert!(matches!(
            graph.validate(),
            Err(GraphSpecError::DegenerateEdge(_))
        ));
    }

    #[test]
    fn graph_parses_from_json() {
        let json = r#"{
            "vertices": [
                {"id": "a", "attrs": {"position": [0.0, 1.0], "root": true}},
                {"id": "b", "label": "B"}
            ],
            "edges": [
                {"id": "ab", "endpoints": ["a", "b"], "directed": true, "sign": -1, "weight": 2.5}
            ]
        }"#;

        let graph = Graph::from_json_str(json).expect("parse");
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edges()[0].sign, Some(Sign::Negative));
        assert_eq!(graph.edges()[0].weight, Some(2.5));
        assert_eq!(
            graph.vertices()[0].attrs.get("position").and_then(AttrValue::as_number_list),
            Some(vec![0.0, 1.0])
        );
    }

    #[test]
    fn invalid_sign_is_a_parse_error() {
        let json = r#"{"vertices": [], "edges": [{"id": "x", "endpoints": ["a", "b"], "sign": 3}]}"#;
        assert!(matches!(
            Graph::from_json_str(json),
            Err(GraphSpecError::GraphParse(_))
        ));
    }

    #[test]
    fn attr_value_group_key() {
        assert_eq!(AttrValue::from("x").group_key(), Some("x".to_string()));
        assert_eq!(AttrValue::from(2.0).group_key(), Some("2".to_string()));
        assert_eq!(AttrValue::Null.group_key(), None);
    }
}
