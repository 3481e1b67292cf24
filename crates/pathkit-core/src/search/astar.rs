use crate::search::heap::{HeapEntry, Sequencer};
use crate::search::infallible;
use crate::search::result::{Cost, SearchResult, SearchStatus};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::convert::Infallible;
use std::hash::Hash;

/// Observer invoked once per node taken off the open set. The snapshot's
/// `end` is the node being expanded.
pub type ExpandHook<'a, N> = Box<dyn FnMut(&SearchResult<N>) + 'a>;

/// A* search toward a single destination, ordered by `g + h`.
///
/// `g` is the accumulated cost, `h` comes from the cost estimate, which must
/// never overestimate for the returned distance to be optimal.
pub struct AStar<'a, N, F, C, H> {
    starts: Vec<N>,
    neighbors: F,
    cost: C,
    estimate: H,
    step_limit: Option<usize>,
    on_expand: Option<ExpandHook<'a, N>>,
}

impl<'a, N, F, I, C, H> AStar<'a, N, F, C, H>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    C: FnMut(&N, &N) -> Cost,
    H: FnMut(&N, &N) -> Cost,
{
    pub fn new(start: N, neighbors: F, cost: C, estimate: H) -> Self {
        Self::with_starts([start], neighbors, cost, estimate)
    }

    pub fn with_starts(
        starts: impl IntoIterator<Item = N>,
        neighbors: F,
        cost: C,
        estimate: H,
    ) -> Self {
        Self {
            starts: starts.into_iter().collect(),
            neighbors,
            cost,
            estimate,
            step_limit: None,
            on_expand: None,
        }
    }

    /// Stop after `limit` expansions, returning the best frontier node
    /// with status [`SearchStatus::StepLimit`].
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Observe each expansion, e.g. to draw progress. Cannot steer the search.
    pub fn on_expand(mut self, hook: impl FnMut(&SearchResult<N>) + 'a) -> Self {
        self.on_expand = Some(Box::new(hook));
        self
    }

    pub fn search(self, destination: &N) -> SearchResult<N> {
        let AStar {
            starts,
            neighbors,
            mut cost,
            mut estimate,
            step_limit,
            mut on_expand,
        } = self;
        infallible(run(
            starts,
            destination,
            neighbors,
            |from: &N, to: &N| Ok::<Cost, Infallible>(cost(from, to)),
            |from: &N, to: &N| Ok::<Cost, Infallible>(estimate(from, to)),
            step_limit,
            on_expand.as_deref_mut(),
        ))
    }
}

/// Core loop shared with [`Graph::a_star`](crate::search::Graph::a_star).
pub(crate) fn run<N, F, I, E>(
    starts: Vec<N>,
    destination: &N,
    mut neighbors: F,
    mut cost: impl FnMut(&N, &N) -> Result<Cost, E>,
    mut estimate: impl FnMut(&N, &N) -> Result<Cost, E>,
    step_limit: Option<usize>,
    mut on_expand: Option<&mut (dyn FnMut(&SearchResult<N>) + '_)>,
) -> Result<SearchResult<N>, E>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut result = SearchResult::seeded(starts.iter().cloned());
    if result.distances.contains_key(destination) {
        return Ok(result.finish(Some(destination.clone()), SearchStatus::Reached));
    }

    let mut open: HashSet<N> = HashSet::new();
    let mut closed: HashSet<N> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<N>>> = BinaryHeap::new();
    let mut sequencer = Sequencer::default();

    for start in starts {
        if open.insert(start.clone()) {
            let h = estimate(&start, destination)?;
            heap.push(Reverse(sequencer.entry(h, start)));
        }
    }

    let mut steps = 0usize;
    loop {
        while heap
            .peek()
            .is_some_and(|Reverse(entry)| closed.contains(&entry.node))
        {
            heap.pop();
        }

        if step_limit.is_some_and(|limit| steps >= limit) {
            let best = heap.peek().map(|Reverse(entry)| entry.node.clone());
            tracing::debug!(steps, "a* step limit reached");
            let status = if best.is_some() {
                SearchStatus::StepLimit
            } else {
                SearchStatus::Unreachable
            };
            return Ok(result.finish(best, status));
        }

        let Some(Reverse(HeapEntry { node, .. })) = heap.pop() else {
            break;
        };
        steps += 1;
        open.remove(&node);
        closed.insert(node.clone());

        if let Some(hook) = on_expand.as_deref_mut() {
            result.end = Some(node.clone());
            hook(&result);
        }

        if &node == destination {
            tracing::debug!(steps, "a* reached destination");
            return Ok(result.finish(Some(node), SearchStatus::Reached));
        }

        let g = result.distances.get(&node).copied().unwrap_or_default();
        tracing::trace!(step = steps, g, "a* expand");
        for neighbor in neighbors(&node) {
            if closed.contains(&neighbor) {
                continue;
            }
            let candidate = g.saturating_add(cost(&node, &neighbor)?);
            if open.contains(&neighbor)
                && result
                    .distances
                    .get(&neighbor)
                    .is_some_and(|&known| candidate >= known)
            {
                continue;
            }

            result.relax(neighbor.clone(), node.clone(), candidate);
            let f = candidate.saturating_add(estimate(&neighbor, destination)?);
            open.insert(neighbor.clone());
            heap.push(Reverse(sequencer.entry(f, neighbor)));
        }
    }

    tracing::debug!(steps, "a* exhausted open set");
    Ok(result.finish(None, SearchStatus::Unreachable))
}
