//! # Path Search
//!
//! The three search algorithms over the graph aggregate, plus the transient
//! bookkeeping they share: the visitation-record arena and the bounded FIFO
//! work queue.
//!
//! Every search call owns its bookkeeping privately — records live in an
//! arena created for that call and are dropped together when it returns,
//! whether or not they ended up on the discovered path. Parent links are
//! arena indices, so reconstruction walks indices rather than references.
//!
//! All bookkeeping storage is reserved up-front with `try_reserve`; if the
//! reservation fails the search degrades to an empty path instead of
//! panicking. Eager visited-marking caps record creation at one per node,
//! so the up-front reservation covers the whole search.

pub mod queue;
pub mod bfs;
pub mod hierarchical;
pub mod dijkstra;

pub use queue::TraversalQueue;

use crate::model::NodeId;

// ============================================================================
// Visitation records
// ============================================================================

/// Index of a visitation record inside its search's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub(crate) usize);

/// Transient per-search bookkeeping entry.
///
/// `dist` counts logical hops: the hierarchical search advances it by 2 for
/// a single record when a two-hop chain is collapsed.
#[derive(Debug, Clone, Copy)]
pub struct VisitRecord {
    pub node: NodeId,
    pub parent: Option<RecordId>,
    pub dist: u32,
}

/// Arena holding every visitation record created by one search call.
#[derive(Debug)]
pub struct VisitArena {
    records: Vec<VisitRecord>,
}

impl VisitArena {
    /// Reserve room for `capacity` records. `None` when the allocation
    /// fails; the caller returns the empty-path contract.
    pub fn try_with_capacity(capacity: usize) -> Option<Self> {
        let mut records = Vec::new();
        records.try_reserve_exact(capacity).ok()?;
        Some(Self { records })
    }

    pub fn push(&mut self, node: NodeId, parent: Option<RecordId>, dist: u32) -> RecordId {
        let id = RecordId(self.records.len());
        self.records.push(VisitRecord { node, parent, dist });
        id
    }

    pub fn get(&self, id: RecordId) -> &VisitRecord {
        &self.records[id.0]
    }

    /// Walk the parent chain from `found` back to the root and reverse it
    /// into a front-to-back node sequence.
    pub fn reconstruct(&self, found: RecordId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = Some(found);
        while let Some(id) = cursor {
            let record = self.get(id);
            path.push(record.node);
            cursor = record.parent;
        }
        path.reverse();
        path
    }
}

/// A `vec![value; len]` that reports allocation failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(value: T, len: usize) -> Option<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).ok()?;
    v.resize(len, value);
    Some(v)
}

// ============================================================================
// Tests
// ============================================================================
