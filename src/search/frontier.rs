//! Best-first frontier of partial tours.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::DEPOT;

/// A partial tour waiting in the frontier.
///
/// Holds the visited prefix (always starting at the depot), the accumulated
/// cost of that prefix, and the priority it is ordered by. For a plain
/// best-first search the priority equals the cost; an informed search adds a
/// lower bound on the remaining cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    path: Vec<usize>,
    cost: f64,
    priority: f64,
}

impl Candidate {
    /// The search root: the depot alone, at zero cost.
    pub fn root(priority: f64) -> Self {
        Self::new(vec![DEPOT], 0.0, priority)
    }

    /// Creates a candidate from a prefix, its cost, and its priority.
    pub fn new(path: Vec<usize>, cost: f64, priority: f64) -> Self {
        Self {
            path,
            cost,
            priority,
        }
    }

    /// Visited nodes in order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Consumes the candidate, returning its visited nodes.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Accumulated cost of the prefix.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Frontier priority (lower is expanded first).
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Number of visited entries, counting a closing depot.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`; a candidate holds at least the depot.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The most recently visited node.
    pub fn last(&self) -> usize {
        self.path.last().copied().unwrap_or(DEPOT)
    }

    /// Returns `true` if the prefix has returned to the depot.
    pub fn is_closed(&self) -> bool {
        self.path.len() > 2 && self.last() == DEPOT
    }
}

struct Entry {
    candidate: Candidate,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the lowest priority first,
        // then the shorter prefix, then the larger last node, then FIFO.
        let (a, b) = (&self.candidate, &other.candidate);
        b.priority
            .total_cmp(&a.priority)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| a.last().cmp(&b.last()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier of [`Candidate`]s.
///
/// Candidates come out by ascending priority. Equal priorities go to the
/// shorter prefix, then to the larger last-visited node, then to the
/// earliest insertion.
///
/// # Examples
///
/// ```
/// use u_tourplan::search::{Candidate, PriorityFrontier};
///
/// let mut frontier = PriorityFrontier::new();
/// frontier.push(Candidate::new(vec![0, 1], 3.0, 3.0));
/// frontier.push(Candidate::new(vec![0, 2], 1.0, 1.0));
/// assert_eq!(frontier.pop().unwrap().path(), &[0, 2]);
/// assert_eq!(frontier.len(), 1);
/// ```
#[derive(Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityFrontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a candidate.
    pub fn push(&mut self, candidate: Candidate) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { candidate, seq });
    }

    /// Removes and returns the minimum candidate, or `None` when exhausted.
    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|e| e.candidate)
    }

    /// The minimum candidate without removing it.
    pub fn peek(&self) -> Option<&Candidate> {
        self.heap.peek().map(|e| &e.candidate)
    }

    /// Number of queued candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no candidates are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of candidates ever inserted.
    pub fn inserted(&self) -> u64 {
        self.next_seq
    }
}
