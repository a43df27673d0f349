use std::collections::{HashMap, VecDeque};

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::{EdgeRef, NodeAttrs, NodeData, OutcomeGraphBuilder, OutcomeGraphView};

/// Node in the arena-based outcome graph.
#[derive(Debug)]
struct GraphNode {
    data: NodeData,
    /// Index of the parent node, None for roots
    parent: Option<Index>,
    /// Label of the edge coming from the parent
    edge_label: Option<String>,
    /// Indices of child nodes in insertion order
    children: Vec<Index>,
}

/// Arena-backed outcome graph.
///
/// Nodes are addressed by label through an index map; insertion order is kept
/// so iteration is deterministic. Every node accepts at most one incoming
/// edge, which keeps the structure a tree (or a forest while being built).
#[derive(Debug, Default)]
pub struct OutcomeGraph {
    arena: Arena<GraphNode>,
    by_label: HashMap<String, Index>,
    order: Vec<Index>,
    edges: usize,
}

impl OutcomeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, label: &str) -> DomainResult<Index> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| DomainError::UnknownNode(label.to_string()))
    }

    fn get(&self, label: &str) -> Option<&GraphNode> {
        self.by_label.get(label).and_then(|&idx| self.arena.get(idx))
    }

    /// First node without an incoming edge.
    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<&NodeData> {
        self.order
            .iter()
            .filter_map(|&idx| self.arena.get(idx))
            .find(|node| node.parent.is_none())
            .map(|node| &node.data)
    }

    /// Check the single-root tree shape: exactly one node without a parent.
    #[instrument(level = "debug", skip(self))]
    pub fn validate_tree(&self) -> DomainResult<()> {
        let roots: Vec<&str> = self
            .order
            .iter()
            .filter_map(|&idx| self.arena.get(idx))
            .filter(|node| node.parent.is_none())
            .map(|node| node.data.label.as_str())
            .collect();
        match roots.as_slice() {
            [_] if self.is_acyclic() => Ok(()),
            [_] => Err(DomainError::NotATree("cycle detected".to_string())),
            [] => Err(DomainError::NotATree("no root node".to_string())),
            many => Err(DomainError::NotATree(format!(
                "multiple roots: {}",
                many.join(", ")
            ))),
        }
    }

    /// Breadth-first distances from all roots; `None` if some node is never
    /// reached, which only happens when nodes sit on a cycle.
    fn levels(&self) -> Option<HashMap<Index, usize>> {
        let mut distance = HashMap::with_capacity(self.order.len());
        let mut queue: VecDeque<Index> = self
            .order
            .iter()
            .copied()
            .filter(|&idx| self.arena.get(idx).is_some_and(|n| n.parent.is_none()))
            .collect();
        for &idx in &queue {
            distance.insert(idx, 0);
        }

        while let Some(idx) = queue.pop_front() {
            let level = distance[&idx];
            if let Some(node) = self.arena.get(idx) {
                for &child in &node.children {
                    distance.insert(child, level + 1);
                    queue.push_back(child);
                }
            }
        }

        (distance.len() == self.order.len()).then_some(distance)
    }
}

impl OutcomeGraphBuilder for OutcomeGraph {
    #[instrument(level = "trace", skip(self))]
    fn add_node(&mut self, label: &str, attrs: NodeAttrs) -> DomainResult<()> {
        if self.by_label.contains_key(label) {
            return Err(DomainError::DuplicateNode(label.to_string()));
        }
        let idx = self.arena.insert(GraphNode {
            data: NodeData::new(label, attrs),
            parent: None,
            edge_label: None,
            children: Vec::new(),
        });
        self.by_label.insert(label.to_string(), idx);
        self.order.push(idx);
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    fn add_edge(&mut self, from: &str, to: &str, label: &str) -> DomainResult<()> {
        let parent_idx = self.index_of(from)?;
        let child_idx = self.index_of(to)?;

        if let Some(existing) = self.arena[child_idx].parent {
            return Err(DomainError::MultipleParents {
                child: to.to_string(),
                parent: self.arena[existing].data.label.clone(),
            });
        }

        let child = &mut self.arena[child_idx];
        child.parent = Some(parent_idx);
        child.edge_label = Some(label.to_string());
        self.arena[parent_idx].children.push(child_idx);
        self.edges += 1;
        Ok(())
    }
}

impl OutcomeGraphView for OutcomeGraph {
    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &NodeData> + '_> {
        Box::new(
            self.order
                .iter()
                .filter_map(|&idx| self.arena.get(idx))
                .map(|node| &node.data),
        )
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeRef<'_>> + '_> {
        Box::new(
            self.order
                .iter()
                .filter_map(|&idx| self.arena.get(idx))
                .flat_map(move |parent| {
                    parent.children.iter().filter_map(move |&child_idx| {
                        let child = self.arena.get(child_idx)?;
                        Some(EdgeRef {
                            from: parent.data.label.as_str(),
                            to: child.data.label.as_str(),
                            label: child.edge_label.as_deref().unwrap_or_default(),
                        })
                    })
                }),
        )
    }

    fn node(&self, label: &str) -> Option<&NodeData> {
        self.get(label).map(|node| &node.data)
    }

    fn children(&self, label: &str) -> Vec<(&str, &NodeData)> {
        self.get(label)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|&idx| self.arena.get(idx))
                    .map(|child| {
                        (
                            child.edge_label.as_deref().unwrap_or_default(),
                            &child.data,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn out_degree(&self, label: &str) -> Option<usize> {
        self.get(label).map(|node| node.children.len())
    }

    fn incoming_label(&self, label: &str) -> Option<&str> {
        self.get(label).and_then(|node| node.edge_label.as_deref())
    }

    #[instrument(level = "debug", skip(self))]
    fn is_acyclic(&self) -> bool {
        self.levels().is_some()
    }

    #[instrument(level = "debug", skip(self))]
    fn longest_path_len(&self) -> Option<usize> {
        self.levels()
            .map(|levels| levels.values().copied().max().unwrap_or(0))
    }
}
