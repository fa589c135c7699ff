use crate::airport::AirportCode;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Incoming;

pub type NodeId = NodeIndex;

#[derive(Debug)]
struct Node {
    code: AirportCode,
    depth: usize,
}

/// Tree of partial routes rooted at one airport, grown a whole level at a time.
///
/// Edges point from parent to child, so a path is recovered by walking
/// incoming edges up from a leaf. Only the deepest level (the frontier) is ever grown.
#[derive(Debug)]
pub struct SearchTree {
    graph: DiGraph<Node, ()>,
    frontier: Vec<NodeId>,
    height: usize,
}

impl SearchTree {
    pub fn new(root: AirportCode) -> SearchTree {
        let mut graph = DiGraph::new();
        let root = graph.add_node(Node { code: root, depth: 0 });
        SearchTree {
            graph,
            frontier: vec![root],
            height: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Nodes at the current height.
    pub fn leaves(&self) -> &[NodeId] {
        &self.frontier
    }

    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn code(&self, node: NodeId) -> &AirportCode {
        &self.graph[node].code
    }

    /// Number of flights from the root to `node`.
    pub fn depth(&self, node: NodeId) -> usize {
        self.graph[node].depth
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.graph.neighbors_directed(node, Incoming).next()
    }

    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |n| self.parent(*n))
    }

    pub fn is_on_path(&self, node: NodeId, code: &AirportCode) -> bool {
        self.ancestors(node).any(|n| self.graph[n].code == *code)
    }

    /// Codes from the root down to `node`.
    pub fn path(&self, node: NodeId) -> Vec<AirportCode> {
        let mut path = Vec::with_capacity(self.depth(node) + 1);
        path.extend(self.ancestors(node).map(|n| self.graph[n].code.clone()));
        path.reverse();
        path
    }

    /// Adds a level below the frontier. Neighbours already on a leaf's path are skipped.
    pub fn grow<F>(&mut self, mut neighbours: F)
    where
        F: FnMut(&AirportCode) -> Vec<AirportCode>,
    {
        let depth = self.height + 1;
        let mut next = vec![];
        for leaf in std::mem::take(&mut self.frontier) {
            for code in neighbours(&self.graph[leaf].code) {
                if self.is_on_path(leaf, &code) {
                    continue;
                }
                let child = self.graph.add_node(Node { code, depth });
                self.graph.add_edge(leaf, child, ());
                next.push(child);
            }
        }
        self.frontier = next;
        self.height = depth;
    }
}
