//! The sequence structure: build, insert, delete, range-add, range-sum.
//!
//! Two permanent guard elements (key 0) bracket the real sequence, so the
//! element at external 0-indexed position `i` sits at in-order rank `i + 2`
//! and every range operation reduces to one isolation: splay the node just
//! before the range to the root, splay the node just after it to the
//! root's child, and the range is that child's left subtree.

use crate::arena::Arena;
use crate::aug::{apply_delta, push_up};
use crate::error::{Result, SplayListError};
use crate::node::{NodeId, LEFT, NIL, RIGHT};
use crate::print;
use crate::rank::find_kth;
use crate::splay;

/// Head guard plus tail guard.
const GUARDS: usize = 2;

/// Ordered sequence of `i64` on an arena splay tree.
///
/// All five operations run in amortized O(log n), and all of them splay:
/// even [`query_sum_range`](Self::query_sum_range) reshapes the tree.
/// Single-threaded; wrap an instance in a lock for shared use.
pub struct SplayList {
    arena: Arena,
    root: NodeId,
    head: NodeId,
    tail: NodeId,
}

impl SplayList {
    /// Default lifetime allocation budget of [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 200_005;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence whose arena can allocate `capacity` nodes
    /// over its lifetime.
    ///
    /// Deleted elements are unlinked but never recycled, so `capacity`
    /// bounds the total of guards, built elements and insertions until the
    /// next [`build`](Self::build), not the maximum live length.
    ///
    /// # Panics
    ///
    /// When `capacity` cannot hold the two guard elements, or exceeds the
    /// `u32` handle range.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity >= GUARDS,
            "capacity {capacity} cannot hold the two guard elements"
        );
        let mut list = Self {
            arena: Arena::with_capacity(capacity),
            root: NIL,
            head: NIL,
            tail: NIL,
        };
        list.rebuild(&[]).expect("capacity holds the guard pair");
        list
    }

    /// Number of real elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena[self.root].size as usize - GUARDS
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lifetime allocation budget, guards included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Replaces the contents with `values`, resetting the arena and its
    /// allocation counter. O(values.len()): the elements are laid out as a
    /// median-split balanced subtree between fresh guards.
    ///
    /// The whole requirement is checked up front; on
    /// [`CapacityExhausted`](SplayListError::CapacityExhausted) the
    /// previous contents are untouched.
    pub fn build(&mut self, values: &[i64]) -> Result<()> {
        if values.len() + GUARDS > self.arena.capacity() {
            return Err(SplayListError::CapacityExhausted {
                capacity: self.arena.capacity(),
            });
        }
        self.rebuild(values)
    }

    fn rebuild(&mut self, values: &[i64]) -> Result<()> {
        self.arena.reset();
        let head = self.arena.alloc(0, NIL)?;
        let tail = self.arena.alloc(0, head)?;
        self.arena[head].children[RIGHT] = tail;
        let data = build_subtree(&mut self.arena, values, tail)?;
        self.arena[tail].children[LEFT] = data;
        push_up(self.arena.nodes_mut(), tail);
        push_up(self.arena.nodes_mut(), head);
        self.root = head;
        self.head = head;
        self.tail = tail;
        Ok(())
    }

    /// Inserts `value` before position `pos` (`pos == len` appends).
    pub fn insert(&mut self, pos: usize, value: i64) -> Result<()> {
        let len = self.len();
        if pos > len {
            return Err(SplayListError::PositionOutOfBounds { pos, len });
        }

        let below = self.kth(pos as u32 + 1);
        self.splay(below, NIL);
        let above = self.kth(pos as u32 + 2);
        let root = self.root;
        self.splay(above, root);

        // `above` is the in-order successor of the root, so its left slot
        // is vacant.
        let node = self.arena.alloc(value, above)?;
        debug_assert_eq!(self.arena[above].children[LEFT], NIL);
        self.arena[above].children[LEFT] = node;

        push_up(self.arena.nodes_mut(), above);
        push_up(self.arena.nodes_mut(), root);
        Ok(())
    }

    /// Removes the element at position `pos`. Its node stays allocated but
    /// becomes unreachable.
    pub fn delete(&mut self, pos: usize) -> Result<()> {
        let len = self.len();
        if pos >= len {
            return Err(SplayListError::PositionOutOfBounds { pos, len });
        }

        let below = self.kth(pos as u32 + 1);
        self.splay(below, NIL);
        let above = self.kth(pos as u32 + 3);
        let root = self.root;
        self.splay(above, root);

        let removed = self.arena[above].children[LEFT];
        debug_assert_eq!(self.arena[removed].size, 1);
        self.arena[above].children[LEFT] = NIL;
        self.arena[removed].parent = NIL;

        push_up(self.arena.nodes_mut(), above);
        push_up(self.arena.nodes_mut(), root);
        Ok(())
    }

    /// Adds `delta` to every element in the inclusive range `[l, r]`.
    /// `l > r` is a defined no-op.
    pub fn update_range(&mut self, l: i64, r: i64, delta: i64) -> Result<()> {
        if l > r {
            return Ok(());
        }
        self.check_range(l, r)?;

        let iso = self.isolate(l as u32, r as u32);
        apply_delta(self.arena.nodes_mut(), iso, delta);

        let boundary = self.arena[iso].parent;
        push_up(self.arena.nodes_mut(), boundary);
        let root = self.arena[boundary].parent;
        push_up(self.arena.nodes_mut(), root);
        Ok(())
    }

    /// Sum of the inclusive range `[l, r]`; 0 when `l > r`.
    ///
    /// Takes `&mut self`: the isolating splays reshape the tree even
    /// though the logical contents are untouched.
    pub fn query_sum_range(&mut self, l: i64, r: i64) -> Result<i64> {
        if l > r {
            return Ok(0);
        }
        self.check_range(l, r)?;

        let iso = self.isolate(l as u32, r as u32);
        Ok(self.arena[iso].sum)
    }

    /// Logical contents, in order. Shape-neutral: pending lazy tags are
    /// resolved arithmetically during the walk instead of being pushed
    /// down.
    pub fn to_vec(&self) -> Vec<i64> {
        let nodes = self.arena.nodes();
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<(NodeId, i64)> = Vec::new();
        let mut curr = (self.root, 0i64);
        loop {
            while curr.0 != NIL {
                let (x, acc) = curr;
                stack.push((x, acc));
                curr = (nodes[x as usize].children[LEFT], acc + nodes[x as usize].lazy);
            }
            let Some((x, acc)) = stack.pop() else { break };
            if x != self.head && x != self.tail {
                out.push(nodes[x as usize].key + acc);
            }
            curr = (nodes[x as usize].children[RIGHT], acc + nodes[x as usize].lazy);
        }
        out
    }

    /// Multi-line rendering of the internal tree, guards included.
    /// Debugging aid only.
    pub fn dump(&self) -> String {
        print::dump(self.arena.nodes(), self.root)
    }

    /// Splays the two boundary nodes of the external range `[l, r]` and
    /// returns the isolated subtree holding exactly those elements: the
    /// left child of the root's right-boundary child. Requires a valid
    /// non-empty range.
    fn isolate(&mut self, l: u32, r: u32) -> NodeId {
        let below = self.kth(l + 1);
        self.splay(below, NIL);
        let above = self.kth(r + 3);
        let root = self.root;
        self.splay(above, root);
        self.arena[above].children[LEFT]
    }

    fn check_range(&self, l: i64, r: i64) -> Result<()> {
        let len = self.len();
        if l < 0 || r >= len as i64 {
            return Err(SplayListError::RangeOutOfBounds { l, r, len });
        }
        Ok(())
    }

    /// Node at in-order rank `rank`, guards counted. Callers validate the
    /// rank, so the descent cannot miss.
    fn kth(&mut self, rank: u32) -> NodeId {
        let root = self.root;
        let id = find_kth(self.arena.nodes_mut(), root, rank);
        debug_assert!(id != NIL, "rank {rank} out of tree bounds");
        id
    }

    fn splay(&mut self, x: NodeId, target: NodeId) {
        splay::splay(self.arena.nodes_mut(), x, target);
        if target == NIL {
            self.root = x;
        }
    }
}

impl Default for SplayList {
    fn default() -> Self {
        Self::new()
    }
}

/// Median-split construction of `values` as a balanced subtree under
/// `parent`. Lower median, so the recursion depth is logarithmic.
fn build_subtree(arena: &mut Arena, values: &[i64], parent: NodeId) -> Result<NodeId> {
    if values.is_empty() {
        return Ok(NIL);
    }
    let mid = (values.len() - 1) / 2;
    let node = arena.alloc(values[mid], parent)?;
    let left = build_subtree(arena, &values[..mid], node)?;
    let right = build_subtree(arena, &values[mid + 1..], node)?;
    arena[node].children = [left, right];
    push_up(arena.nodes_mut(), node);
    Ok(node)
}
