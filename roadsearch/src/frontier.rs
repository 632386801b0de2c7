//! Frontiers: the discovered but not yet processed nodes of a search.
//!
//! Both frontiers use lazy deletion. A node may be pushed several times with different
//! priorities and nothing is ever removed eagerly; the search discards every pop of a node that
//! is already visited. For the priority frontier this means only the first, cheapest pop of a
//! node is processed, which is what makes Dijkstra and A* correct without a decrease-key heap.

use crate::graph::{Identifier, Weight};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

pub trait Frontier<N> {
  /// Adds a candidate. FIFO frontiers ignore `priority`.
  fn push(&mut self, node: N, priority: Weight);
  fn pop(&mut self) -> Option<N>;
  fn len(&self) -> usize;
  /// Number of pushes since creation, including stale duplicates.
  fn pushed(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Processes nodes in insertion order.
pub struct FifoFrontier<N> {
  queue: VecDeque<N>,
  pushed: usize,
}

impl<N> Default for FifoFrontier<N> {
  fn default() -> Self {
    Self {
      queue: VecDeque::new(),
      pushed: 0,
    }
  }
}

impl<N> Frontier<N> for FifoFrontier<N> {
  fn push(&mut self, node: N, _priority: Weight) {
    self.pushed += 1;
    self.queue.push_back(node);
  }

  fn pop(&mut self) -> Option<N> {
    self.queue.pop_front()
  }

  fn len(&self) -> usize {
    self.queue.len()
  }

  fn pushed(&self) -> usize {
    self.pushed
  }
}

#[derive(Copy, Clone)]
struct State<N: Identifier> {
  cost: Weight,
  id: N,
}

impl<N: Identifier> Ord for State<N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc, so that the max-heap pops the cheapest entry; ties go to the smaller id
    other
      .cost
      .total_cmp(&self.cost)
      .then_with(|| other.id.cmp(&self.id))
  }
}

impl<N: Identifier> PartialOrd for State<N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<N: Identifier> PartialEq for State<N> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<N: Identifier> Eq for State<N> {}

/// Min-priority queue keyed by `(priority, node id)`.
pub struct PriorityFrontier<N: Identifier> {
  pq: BinaryHeap<State<N>>,
  pushed: usize,
}

impl<N: Identifier> Default for PriorityFrontier<N> {
  fn default() -> Self {
    Self {
      pq: BinaryHeap::new(),
      pushed: 0,
    }
  }
}

impl<N: Identifier> PriorityFrontier<N> {
  /// Cheapest entry without removing it.
  pub fn min(&self) -> Option<(N, Weight)> {
    self.pq.peek().map(|state| (state.id, state.cost))
  }
}

impl<N: Identifier> Frontier<N> for PriorityFrontier<N> {
  fn push(&mut self, node: N, priority: Weight) {
    self.pushed += 1;
    self.pq.push(State {
      cost: priority,
      id: node,
    });
  }

  fn pop(&mut self) -> Option<N> {
    self.pq.pop().map(|state| state.id)
  }

  fn len(&self) -> usize {
    self.pq.len()
  }

  fn pushed(&self) -> usize {
    self.pushed
  }
}
