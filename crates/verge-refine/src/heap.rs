//! Array-backed binary max-heap of split candidates.
//!
//! Priorities are plain `f64` scores compared with `total_cmp`, so the heap
//! is total over every float the scoring hook can produce. Ties pop in an
//! unspecified order. There is no removal or reprioritization: a refinement
//! pass only ever pushes during selection and drains during application.

/// A scored edge awaiting a split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<N> {
    /// Representative node of the undirected edge.
    pub node: N,
    /// Positive score; larger splits earlier.
    pub priority: f64,
}

/// Max-heap of [`Candidate`]s over a growable array.
///
/// `push` appends and sifts up while the parent is smaller; `pop` swaps the
/// root with the last slot, shrinks, and sifts down toward the larger
/// child. Both are O(log n). Popping an empty heap returns `None`, which is
/// the pass's normal termination signal rather than an error.
#[derive(Debug)]
pub struct CandidateHeap<N> {
    items: Vec<Candidate<N>>,
}

impl<N> Default for CandidateHeap<N> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<N: Copy> CandidateHeap<N> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highest-priority candidate without removing it.
    pub fn peek(&self) -> Option<&Candidate<N>> {
        self.items.first()
    }

    /// Queue a candidate.
    pub fn push(&mut self, node: N, priority: f64) {
        self.items.push(Candidate { node, priority });
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the highest-priority candidate.
    pub fn pop(&mut self) -> Option<Candidate<N>> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn sift_up(&mut self, mut at: usize) {
        while at > 0 {
            let parent = (at - 1) / 2;
            if self.items[parent]
                .priority
                .total_cmp(&self.items[at].priority)
                .is_ge()
            {
                break;
            }
            self.items.swap(parent, at);
            at = parent;
        }
    }

    fn sift_down(&mut self, mut at: usize) {
        loop {
            let left = 2 * at + 1;
            let right = left + 1;
            let mut largest = at;
            if left < self.items.len()
                && self.items[left]
                    .priority
                    .total_cmp(&self.items[largest].priority)
                    .is_gt()
            {
                largest = left;
            }
            if right < self.items.len()
                && self.items[right]
                    .priority
                    .total_cmp(&self.items[largest].priority)
                    .is_gt()
            {
                largest = right;
            }
            if largest == at {
                break;
            }
            self.items.swap(at, largest);
            at = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_empty_is_none() {
        let mut heap: CandidateHeap<u32> = CandidateHeap::new();
        assert!(heap.pop().is_none());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_pops_in_descending_priority() {
        let mut heap = CandidateHeap::new();
        for (node, priority) in [(1u32, 0.5), (2, 2.5), (3, 1.0), (4, 2.0), (5, 0.1)] {
            heap.push(node, priority);
        }
        let order: Vec<u32> = std::iter::from_fn(|| heap.pop().map(|c| c.node)).collect();
        assert_eq!(order, vec![2, 4, 3, 1, 5]);
    }

    #[test]
    fn test_peek_tracks_max() {
        let mut heap = CandidateHeap::new();
        heap.push(1u32, 1.0);
        assert_eq!(heap.peek().map(|c| c.node), Some(1));
        heap.push(2, 5.0);
        assert_eq!(heap.peek().map(|c| c.node), Some(2));
        heap.pop();
        assert_eq!(heap.peek().map(|c| c.node), Some(1));
    }

    #[test]
    fn test_matches_sorted_reference_on_random_input() {
        // Deterministic congruential stream; no external randomness.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) as f64) / ((1u64 << 31) as f64)
        };
        for round in 0..8 {
            let count = 20 + round * 17;
            let mut heap = CandidateHeap::new();
            let mut reference = Vec::with_capacity(count);
            for node in 0..count {
                let priority = next() * 100.0 - 20.0;
                heap.push(node as u32, priority);
                reference.push(priority);
            }
            reference.sort_by(f64::total_cmp);
            while let Some(candidate) = heap.pop() {
                let expected = reference.pop();
                assert_eq!(expected, Some(candidate.priority));
            }
            assert!(reference.is_empty());
        }
    }

    #[test]
    fn test_interleaved_push_pop_keeps_order() {
        let mut heap = CandidateHeap::new();
        heap.push(1u32, 3.0);
        heap.push(2, 7.0);
        assert_eq!(heap.pop().map(|c| c.node), Some(2));
        heap.push(3, 5.0);
        heap.push(4, 9.0);
        assert_eq!(heap.pop().map(|c| c.node), Some(4));
        assert_eq!(heap.pop().map(|c| c.node), Some(3));
        assert_eq!(heap.pop().map(|c| c.node), Some(1));
        assert!(heap.pop().is_none());
    }
}
