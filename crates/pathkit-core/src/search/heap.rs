use crate::search::result::Cost;

/// Priority-queue entry for the cost-ordered searches.
///
/// Wrap in `std::cmp::Reverse` to use `BinaryHeap` as a min-heap. Ties on
/// `priority` fall back to `sequence`, so equal-cost nodes come out in the
/// order they were pushed.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry<N> {
    pub priority: Cost,
    pub sequence: u64,
    pub node: N,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Hands out increasing sequence numbers for [`HeapEntry`]
#[derive(Debug, Default)]
pub(crate) struct Sequencer(u64);

impl Sequencer {
    pub fn entry<N>(&mut self, priority: Cost, node: N) -> HeapEntry<N> {
        let sequence = self.0;
        self.0 += 1;
        HeapEntry {
            priority,
            sequence,
            node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[test]
    fn test_heap_entry_ordering() {
        let mut seq = Sequencer::default();
        let entry1 = seq.entry(1, "A");
        let entry2 = seq.entry(2, "B");
        let entry3 = seq.entry(1, "C");

        assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
        assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);
        // Equal priority: earlier push wins
        assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

        assert_eq!(entry1, entry1.clone());
        assert_ne!(entry1, entry3);
    }

    #[test]
    fn test_reverse_heap_pops_cheapest_first() {
        let mut seq = Sequencer::default();
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(seq.entry(5, 'x')));
        heap.push(Reverse(seq.entry(1, 'y')));
        heap.push(Reverse(seq.entry(1, 'z')));
        heap.push(Reverse(seq.entry(3, 'w')));

        let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
        assert_eq!(order, vec!['y', 'z', 'w', 'x']);
    }
}
