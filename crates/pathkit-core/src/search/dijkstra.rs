use crate::search::heap::{HeapEntry, Sequencer};
use crate::search::result::{Cost, SearchResult, SearchStatus};
use crate::search::infallible;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::convert::Infallible;
use std::hash::Hash;

/// Dijkstra shortest path over non-negative integer edge costs.
///
/// Negative costs cannot be expressed; a cost function that lies about
/// monotonicity simply yields non-optimal answers.
pub struct Dijkstra<N, F, C> {
    starts: Vec<N>,
    neighbors: F,
    cost: C,
}

impl<N, F, I, C> Dijkstra<N, F, C>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    C: FnMut(&N, &N) -> Cost,
{
    pub fn new(start: N, neighbors: F, cost: C) -> Self {
        Self::with_starts([start], neighbors, cost)
    }

    /// Seed several start nodes, all at distance 0
    pub fn with_starts(starts: impl IntoIterator<Item = N>, neighbors: F, cost: C) -> Self {
        Self {
            starts: starts.into_iter().collect(),
            neighbors,
            cost,
        }
    }

    /// Settle nodes in cost order until one satisfies `is_goal`.
    ///
    /// Pass `|_| false` to settle every reachable node and read the full
    /// distance map from the result.
    pub fn search(self, is_goal: impl FnMut(&N) -> bool) -> SearchResult<N> {
        let Dijkstra {
            starts,
            neighbors,
            mut cost,
        } = self;
        infallible(run(
            starts,
            neighbors,
            |from: &N, to: &N| Ok::<Cost, Infallible>(cost(from, to)),
            is_goal,
        ))
    }
}

/// Core loop shared with [`Graph::dijkstra`](crate::search::Graph::dijkstra),
/// where the cost function may fail.
pub(crate) fn run<N, F, I, E>(
    starts: Vec<N>,
    mut neighbors: F,
    mut cost: impl FnMut(&N, &N) -> Result<Cost, E>,
    mut is_goal: impl FnMut(&N) -> bool,
) -> Result<SearchResult<N>, E>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut result = SearchResult::seeded(starts.iter().cloned());
    let mut closed: HashSet<N> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<N>>> = BinaryHeap::new();
    let mut sequencer = Sequencer::default();

    for start in starts {
        heap.push(Reverse(sequencer.entry(0, start)));
    }

    while let Some(Reverse(HeapEntry {
        priority: distance,
        node,
        ..
    })) = heap.pop()
    {
        // Stale entry left behind by a later improvement
        if !closed.insert(node.clone()) {
            continue;
        }

        if is_goal(&node) {
            tracing::debug!(distance, settled = closed.len(), "dijkstra reached goal");
            return Ok(result.finish(Some(node), SearchStatus::Reached));
        }

        for neighbor in neighbors(&node) {
            if closed.contains(&neighbor) {
                continue;
            }
            let candidate = distance.saturating_add(cost(&node, &neighbor)?);
            let improves = result
                .distances
                .get(&neighbor)
                .is_none_or(|&known| candidate < known);
            if improves {
                result.relax(neighbor.clone(), node.clone(), candidate);
                heap.push(Reverse(sequencer.entry(candidate, neighbor)));
            }
        }
    }

    tracing::debug!(settled = closed.len(), "dijkstra exhausted graph");
    Ok(result.finish(None, SearchStatus::Unreachable))
}
