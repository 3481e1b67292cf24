//! Graph search over caller-defined nodes
//!
//! Nodes are any `Clone + Eq + Hash` value; the graph is a function from a
//! node to its neighbors, produced lazily on each expansion.
//! - [`Bfs`] / [`bfs_path`]: hop-count shortest path, level at a time
//! - [`Levels`]: level-complete traversal without a goal
//! - [`dfs`]: depth-first reachability
//! - [`Dijkstra`]: non-negative weighted shortest path
//! - [`AStar`]: heuristic-guided shortest path with an optional step cap
//! - [`Graph`]: trait exposing all of the above over one node relation

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod graph;
mod heap;
pub mod levels;
pub mod result;

pub use astar::{AStar, ExpandHook};
pub use bfs::{bfs_path, Bfs, LevelHook};
pub use dfs::dfs;
pub use dijkstra::Dijkstra;
pub use graph::{EdgeGraph, Edges, Graph};
pub use levels::{Level, Levels};
pub use result::{Cost, SearchResult, SearchStatus};

use std::convert::Infallible;

/// Unwrap the result of a core loop whose callbacks cannot fail
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
