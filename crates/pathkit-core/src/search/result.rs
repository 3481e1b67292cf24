use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Accumulated cost of a path. Edge costs must be non-negative.
pub type Cost = u64;

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// A node satisfying the goal was reached; `end` holds it
    Reached,
    /// Every reachable node was explored without satisfying the goal
    Unreachable,
    /// The expansion cap ran out; `end` holds the best frontier node at that moment
    StepLimit,
    /// A level hook asked the search to stop
    Stopped,
}

impl SearchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchStatus::Reached => "reached",
            SearchStatus::Unreachable => "unreachable",
            SearchStatus::StepLimit => "step_limit",
            SearchStatus::Stopped => "stopped",
        }
    }
}

/// Snapshot of a finished (or in-progress) search.
///
/// Holds the terminal node, the best known distance of every node seen, and
/// the predecessor links used to rebuild paths. Start nodes sit in
/// `distances` at cost 0 and never appear as keys of `predecessors`.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    pub(crate) end: Option<N>,
    pub(crate) status: SearchStatus,
    pub(crate) distances: HashMap<N, Cost>,
    pub(crate) predecessors: HashMap<N, N>,
}

impl<N> SearchResult<N>
where
    N: Clone + Eq + Hash,
{
    pub(crate) fn seeded(starts: impl IntoIterator<Item = N>) -> Self {
        Self {
            end: None,
            status: SearchStatus::Unreachable,
            distances: starts.into_iter().map(|start| (start, 0)).collect(),
            predecessors: HashMap::new(),
        }
    }

    pub(crate) fn finish(mut self, end: Option<N>, status: SearchStatus) -> Self {
        self.end = end;
        self.status = status;
        self
    }

    /// Record that `node` was reached through `via` at cost `distance`.
    pub(crate) fn relax(&mut self, node: N, via: N, distance: Cost) {
        self.distances.insert(node.clone(), distance);
        self.predecessors.insert(node, via);
    }

    /// Terminal node: the goal when reached, the best frontier node when a
    /// step limit cut the search short, `None` otherwise.
    pub fn end(&self) -> Option<&N> {
        self.end.as_ref()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Reached
    }

    /// Cost from the nearest start to `end`
    pub fn distance(&self) -> Option<Cost> {
        self.end.as_ref().and_then(|end| self.distance_to(end))
    }

    pub fn distance_to(&self, node: &N) -> Option<Cost> {
        self.distances.get(node).copied()
    }

    pub fn distances(&self) -> &HashMap<N, Cost> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<N, N> {
        &self.predecessors
    }

    /// Path from a start node to `end`, start first. Empty when there is no end.
    pub fn path(&self) -> Vec<N> {
        match &self.end {
            Some(end) => self.path_to(end),
            None => Vec::new(),
        }
    }

    /// Path from a start node to any node this search has seen.
    /// Empty for unseen nodes.
    pub fn path_to(&self, node: &N) -> Vec<N> {
        if !self.distances.contains_key(node) {
            return Vec::new();
        }

        let mut path = vec![node.clone()];
        let mut current = node;
        while let Some(pred) = self.predecessors.get(current) {
            path.push(pred.clone());
            current = pred;
        }

        path.reverse();
        path
    }

    /// Number of edges on [`path`](Self::path)
    pub fn steps(&self) -> usize {
        let Some(mut current) = self.end.as_ref() else {
            return 0;
        };
        let mut steps = 0;
        while let Some(pred) = self.predecessors.get(current) {
            steps += 1;
            current = pred;
        }
        steps
    }
}
