use crate::error::{PathkitError, Result};
use crate::search::bfs::Bfs;
use crate::search::levels::{Level, Levels};
use crate::search::result::{Cost, SearchResult};
use crate::search::{astar, dfs, dijkstra};
use std::fmt::Debug;
use std::hash::Hash;

/// A node relation that every search in this crate can run over.
///
/// Only [`neighbors`](Graph::neighbors) is required. Implement
/// [`cost`](Graph::cost) to enable [`dijkstra`](Graph::dijkstra), and
/// additionally [`cost_estimate`](Graph::cost_estimate) for
/// [`a_star`](Graph::a_star); calling those without the backing method
/// fails with [`PathkitError::Unsupported`].
pub trait Graph {
    type Node: Clone + Eq + Hash + Debug;

    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Cost of the edge `from -> to`. Only called for `to` in `neighbors(from)`.
    fn cost(&self, _from: &Self::Node, _to: &Self::Node) -> Result<Cost> {
        Err(PathkitError::unsupported("cost"))
    }

    /// Admissible estimate of the remaining cost from `from` to `to`
    fn cost_estimate(&self, _from: &Self::Node, _to: &Self::Node) -> Result<Cost> {
        Err(PathkitError::unsupported("cost_estimate"))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    fn bfs(&self, start: Self::Node, is_goal: impl FnMut(&Self::Node) -> bool) -> SearchResult<Self::Node>
    where
        Self: Sized,
    {
        Bfs::new(start, |node: &Self::Node| self.neighbors(node)).search(is_goal)
    }

    fn levels(&self, start: Self::Node) -> impl Iterator<Item = Level<Self::Node>>
    where
        Self: Sized,
    {
        Levels::new(start, move |node: &Self::Node| self.neighbors(node))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    fn dfs(&self, start: Self::Node, is_goal: impl FnMut(&Self::Node) -> bool) -> SearchResult<Self::Node>
    where
        Self: Sized,
    {
        dfs::dfs(start, |node: &Self::Node| self.neighbors(node), is_goal)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    fn dijkstra(
        &self,
        starts: impl IntoIterator<Item = Self::Node>,
        is_goal: impl FnMut(&Self::Node) -> bool,
    ) -> Result<SearchResult<Self::Node>>
    where
        Self: Sized,
    {
        dijkstra::run(
            starts.into_iter().collect(),
            |node: &Self::Node| self.neighbors(node),
            |from: &Self::Node, to: &Self::Node| self.cost(from, to),
            is_goal,
        )
    }

    #[tracing::instrument(skip_all, level = "debug", fields(destination = ?destination))]
    fn a_star(
        &self,
        starts: impl IntoIterator<Item = Self::Node>,
        destination: &Self::Node,
        step_limit: Option<usize>,
    ) -> Result<SearchResult<Self::Node>>
    where
        Self: Sized,
    {
        astar::run(
            starts.into_iter().collect(),
            destination,
            |node: &Self::Node| self.neighbors(node),
            |from: &Self::Node, to: &Self::Node| self.cost(from, to),
            |from: &Self::Node, to: &Self::Node| self.cost_estimate(from, to),
            step_limit,
            None,
        )
    }
}

/// A graph described by explicit edges rather than neighbor nodes.
///
/// Wrap in [`Edges`] to search it.
pub trait EdgeGraph {
    type Node: Clone + Eq + Hash + Debug;
    type Edge;

    fn edges(&self, node: &Self::Node) -> Vec<Self::Edge>;

    /// Node an edge leads to
    fn target(&self, edge: &Self::Edge) -> Self::Node;

    fn edge_cost(&self, _edge: &Self::Edge) -> Result<Cost> {
        Err(PathkitError::unsupported("edge_cost"))
    }

    fn cost_estimate(&self, _from: &Self::Node, _to: &Self::Node) -> Result<Cost> {
        Err(PathkitError::unsupported("cost_estimate"))
    }
}

/// Adapts an [`EdgeGraph`] to [`Graph`]. Parallel edges are allowed; the
/// cost between two nodes is that of the cheapest connecting edge.
#[derive(Debug, Clone)]
pub struct Edges<G>(pub G);

impl<G: EdgeGraph> Graph for Edges<G> {
    type Node = G::Node;

    fn neighbors(&self, node: &G::Node) -> Vec<G::Node> {
        self.0
            .edges(node)
            .iter()
            .map(|edge| self.0.target(edge))
            .collect()
    }

    fn cost(&self, from: &G::Node, to: &G::Node) -> Result<Cost> {
        let mut cheapest: Option<Cost> = None;
        for edge in self.0.edges(from) {
            if self.0.target(&edge) != *to {
                continue;
            }
            let cost = self.0.edge_cost(&edge)?;
            cheapest = Some(cheapest.map_or(cost, |best| best.min(cost)));
        }
        cheapest.ok_or_else(|| PathkitError::invalid_value("edge", format!("{from:?} -> {to:?}")))
    }

    fn cost_estimate(&self, from: &G::Node, to: &G::Node) -> Result<Cost> {
        self.0.cost_estimate(from, to)
    }
}
