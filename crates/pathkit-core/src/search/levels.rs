//! Level-by-level reachability without a goal

use crate::search::bfs::LevelHook;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::ops::ControlFlow;

/// Nodes first reached at a given hop count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level<N> {
    pub index: usize,
    /// In discovery order
    pub nodes: Vec<N>,
}

/// Lazy iterator over BFS levels, starting with `Level { index: 0, nodes: [start] }`.
///
/// Every node appears in exactly one level. The iterator ends once a level
/// discovers nothing new, or when the level hook returns `Break`.
pub struct Levels<'a, N, F> {
    neighbors: F,
    frontier: Vec<N>,
    visited: HashSet<N>,
    index: usize,
    hook: Option<LevelHook<'a, N>>,
    stopped: bool,
}

impl<'a, N, F, I> Levels<'a, N, F>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    pub fn new(start: N, neighbors: F) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        Self {
            neighbors,
            frontier: vec![start],
            visited,
            index: 0,
            hook: None,
            stopped: false,
        }
    }

    pub fn with_level_hook(
        mut self,
        hook: impl FnMut(usize, &[N], &HashSet<N>) -> ControlFlow<()> + 'a,
    ) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Every node yielded so far
    pub fn visited(&self) -> &HashSet<N> {
        &self.visited
    }
}

impl<N, F, I> Iterator for Levels<'_, N, F>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = Level<N>;

    fn next(&mut self) -> Option<Level<N>> {
        if self.stopped || self.frontier.is_empty() {
            return None;
        }

        if let Some(hook) = self.hook.as_mut() {
            if hook(self.index, &self.frontier, &self.visited).is_break() {
                self.stopped = true;
                return None;
            }
        }

        let current = std::mem::take(&mut self.frontier);
        for node in &current {
            for neighbor in (self.neighbors)(node) {
                if self.visited.insert(neighbor.clone()) {
                    self.frontier.push(neighbor);
                }
            }
        }

        let level = Level {
            index: self.index,
            nodes: current,
        };
        tracing::trace!(level = level.index, nodes = level.nodes.len(), "level complete");
        self.index += 1;
        Some(level)
    }
}

impl<N, F, I> FusedIterator for Levels<'_, N, F>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
}
