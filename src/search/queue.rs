//! Bounded FIFO of visitation-record ids.

use std::collections::VecDeque;

use super::RecordId;

/// The work queue shared by both breadth-first variants.
///
/// Capacity is bounded by the node count of the graph being searched, which
/// is sufficient because eager visited-marking enqueues each node at most
/// once. A push beyond capacity is silently dropped; the bound is defensive
/// and never triggers in correct operation.
#[derive(Debug)]
pub struct TraversalQueue {
    items: VecDeque<RecordId>,
    capacity: usize,
}

impl TraversalQueue {
    /// Reserve the full capacity up-front. `None` when the allocation
    /// fails.
    pub fn try_with_capacity(capacity: usize) -> Option<Self> {
        let mut items = VecDeque::new();
        items.try_reserve_exact(capacity).ok()?;
        Some(Self { items, capacity })
    }

    pub fn push(&mut self, id: RecordId) {
        if self.items.len() >= self.capacity {
            tracing::trace!(?id, capacity = self.capacity, "traversal queue full, dropping push");
            return;
        }
        self.items.push_back(id);
    }

    pub fn pop(&mut self) -> Option<RecordId> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
