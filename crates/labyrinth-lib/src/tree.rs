use crate::graph::VertexId;

/// Vertices already joined by the carver, in the order they were added.
///
/// Membership is tracked with a bitmap indexed by vertex id so lookups stay
/// constant time while the insertion order remains available for callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    order: Vec<VertexId>,
    members: Vec<bool>,
}

impl SpanningTree {
    /// Empty tree over a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            order: Vec::with_capacity(vertex_count),
            members: vec![false; vertex_count],
        }
    }

    /// Append a vertex. Returns `false` if it was already present.
    pub fn insert(&mut self, vertex: VertexId) -> bool {
        if vertex >= self.members.len() {
            self.members.resize(vertex + 1, false);
        }
        if self.members[vertex] {
            return false;
        }
        self.members[vertex] = true;
        self.order.push(vertex);
        true
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.get(vertex).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Vertex ids in insertion order.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// `true` once every vertex of the underlying graph has joined.
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.members.len()
    }
}
