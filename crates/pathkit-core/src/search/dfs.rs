use crate::search::result::{Cost, SearchResult, SearchStatus};
use std::hash::Hash;

/// Depth-first search with an explicit stack.
///
/// A neighbor is entered only if it has never been visited; dead ends are
/// backtracked. The returned path is the stack at the moment the goal was
/// found, which is generally not a shortest path. Distances are depths in
/// the DFS tree.
pub fn dfs<N, F, I>(start: N, mut neighbors: F, mut is_goal: impl FnMut(&N) -> bool) -> SearchResult<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut result = SearchResult::seeded([start.clone()]);
    if is_goal(&start) {
        return result.finish(Some(start), SearchStatus::Reached);
    }

    let children = neighbors(&start).into_iter();
    let mut stack: Vec<(N, I::IntoIter)> = vec![(start, children)];

    loop {
        let Some((node, pending)) = stack.last_mut() else {
            break;
        };
        let Some(next) = pending.next() else {
            stack.pop();
            continue;
        };
        if result.distances.contains_key(&next) {
            continue;
        }

        let parent = node.clone();
        let depth = stack.len() as Cost;
        result.relax(next.clone(), parent, depth);
        if is_goal(&next) {
            tracing::debug!(depth, visited = result.distances.len(), "dfs reached goal");
            return result.finish(Some(next), SearchStatus::Reached);
        }

        let children = neighbors(&next).into_iter();
        stack.push((next, children));
    }

    tracing::debug!(visited = result.distances.len(), "dfs exhausted graph");
    result.finish(None, SearchStatus::Unreachable)
}
