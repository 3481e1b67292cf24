use crate::search::result::{Cost, SearchResult, SearchStatus};
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

/// Called once per BFS level with the level index, the frontier about to be
/// expanded, and every node seen so far. `Break` stops the search.
pub type LevelHook<'a, N> = Box<dyn FnMut(usize, &[N], &HashSet<N>) -> ControlFlow<()> + 'a>;

/// Breadth-first search that expands one whole frontier ("level") at a time.
///
/// Within a level, nodes are discovered in the order the neighbor function
/// yields them and the first discovery of a node fixes its predecessor.
pub struct Bfs<'a, N, F> {
    start: N,
    neighbors: F,
    hook: Option<LevelHook<'a, N>>,
}

impl<'a, N, F, I> Bfs<'a, N, F>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    pub fn new(start: N, neighbors: F) -> Self {
        Self {
            start,
            neighbors,
            hook: None,
        }
    }

    /// Install a per-level instrumentation hook
    pub fn with_level_hook(
        mut self,
        hook: impl FnMut(usize, &[N], &HashSet<N>) -> ControlFlow<()> + 'a,
    ) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Search for the nearest node (by hop count) satisfying `is_goal`.
    ///
    /// Distances in the result are hop counts. When nothing reachable
    /// matches, the result has no end and status `Unreachable`.
    pub fn search(self, mut is_goal: impl FnMut(&N) -> bool) -> SearchResult<N> {
        let Bfs {
            start,
            mut neighbors,
            mut hook,
        } = self;

        let mut result = SearchResult::seeded([start.clone()]);
        if is_goal(&start) {
            return result.finish(Some(start), SearchStatus::Reached);
        }

        let mut visited: HashSet<N> = HashSet::new();
        visited.insert(start.clone());
        let mut frontier = vec![start];
        let mut level = 0usize;

        while !frontier.is_empty() {
            if let Some(hook) = hook.as_mut() {
                if hook(level, &frontier, &visited).is_break() {
                    tracing::debug!(level, visited = visited.len(), "bfs stopped by level hook");
                    return result.finish(None, SearchStatus::Stopped);
                }
            }
            tracing::trace!(level, frontier = frontier.len(), "bfs level");

            let next_distance = (level + 1) as Cost;
            let mut next = Vec::new();
            for node in &frontier {
                for neighbor in neighbors(node) {
                    if !visited.insert(neighbor.clone()) {
                        continue;
                    }
                    result.relax(neighbor.clone(), node.clone(), next_distance);
                    if is_goal(&neighbor) {
                        tracing::debug!(
                            level = level + 1,
                            visited = visited.len(),
                            "bfs reached goal"
                        );
                        return result.finish(Some(neighbor), SearchStatus::Reached);
                    }
                    next.push(neighbor);
                }
            }

            frontier = next;
            level += 1;
        }

        tracing::debug!(visited = visited.len(), "bfs exhausted frontier");
        result.finish(None, SearchStatus::Unreachable)
    }
}

/// Shortest path (by hop count) from `start` to the first node satisfying
/// `is_goal`, start first.
///
/// `[start]` when the start itself matches; empty when no reachable node does.
pub fn bfs_path<N, F, I>(start: N, neighbors: F, is_goal: impl FnMut(&N) -> bool) -> Vec<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    Bfs::new(start, neighbors).search(is_goal).path()
}
