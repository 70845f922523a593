use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::error::ListError;
use crate::iter::{Ids, IntoIter, Iter};

/// Slot index of the sentinel. It never holds a value.
pub(crate) const ROOT: usize = 0;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to a node linked into a [`List`].
///
/// Handles are cheap to copy. A handle stays valid while its node is linked
/// into the list that issued it; after `remove`, `pop_*` or `clear` every
/// operation taking it reports [`ListError::ForeignNode`] (or `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    owner: u64,
    index: usize,
    generation: u32,
}

#[derive(Clone)]
pub(crate) struct Slot<T> {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    generation: u32,
    pub(crate) value: Option<T>,
}

impl<T> Slot<T> {
    fn sentinel() -> Self {
        Slot {
            prev: ROOT,
            next: ROOT,
            generation: 0,
            value: None,
        }
    }
}

/// A doubly-linked list with a sentinel node.
///
/// Nodes live in an arena owned by the list and are addressed by [`NodeId`]
/// handles, so insert, remove and move are O(1) anywhere in the list. The
/// sentinel closes the ring: the front node's `prev` and the back node's
/// `next` both point at it, which lets edge inserts share the interior path.
///
/// The list has no internal synchronization; mutation requires `&mut self`.
pub struct List<T> {
    id: u64,
    pub(crate) slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates a new empty List.
    pub fn new() -> Self {
        List {
            id: next_list_id(),
            slots: vec![Slot::sentinel()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of linked nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first node, or `None` if the list is empty.
    pub fn front(&self) -> Option<NodeId> {
        self.handle_unless_root(self.slots[ROOT].next)
    }

    /// Returns the last node, or `None` if the list is empty.
    pub fn back(&self) -> Option<NodeId> {
        self.handle_unless_root(self.slots[ROOT].prev)
    }

    /// Returns the node after `id`, or `None` at the back of the list or if
    /// `id` is not linked into this list.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let idx = self.resolve(id)?;
        self.handle_unless_root(self.slots[idx].next)
    }

    /// Returns the node before `id`, or `None` at the front of the list or if
    /// `id` is not linked into this list.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        let idx = self.resolve(id)?;
        self.handle_unless_root(self.slots[idx].prev)
    }

    /// Returns true if `id` is linked into this list.
    pub fn contains(&self, id: NodeId) -> bool {
        self.resolve(id).is_some()
    }

    /// Returns a reference to the value stored at `id`.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let idx = self.resolve(id)?;
        self.slots[idx].value.as_ref()
    }

    /// Returns a mutable reference to the value stored at `id`.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let idx = self.resolve(id)?;
        self.slots[idx].value.as_mut()
    }

    /// Returns a reference to the first value.
    pub fn front_value(&self) -> Option<&T> {
        self.slots[self.slots[ROOT].next].value.as_ref()
    }

    /// Returns a reference to the last value.
    pub fn back_value(&self) -> Option<&T> {
        self.slots[self.slots[ROOT].prev].value.as_ref()
    }

    /// Inserts `value` at the front of the list.
    pub fn push_front(&mut self, value: T) -> NodeId {
        self.insert(value, ROOT)
    }

    /// Inserts `value` at the back of the list.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let at = self.slots[ROOT].prev;
        self.insert(value, at)
    }

    /// Inserts `value` immediately before `mark`.
    ///
    /// # Errors
    /// Returns [`ListError::ForeignNode`] if `mark` is not linked into this list.
    pub fn insert_before(&mut self, value: T, mark: NodeId) -> Result<NodeId, ListError> {
        let mark = self.resolve_or_reject(mark)?;
        let at = self.slots[mark].prev;
        Ok(self.insert(value, at))
    }

    /// Inserts `value` immediately after `mark`.
    ///
    /// # Errors
    /// Returns [`ListError::ForeignNode`] if `mark` is not linked into this list.
    pub fn insert_after(&mut self, value: T, mark: NodeId) -> Result<NodeId, ListError> {
        let mark = self.resolve_or_reject(mark)?;
        Ok(self.insert(value, mark))
    }

    /// Unlinks the node at `id` and returns its value.
    ///
    /// The handle is dead afterwards; the value can be pushed again into any list.
    ///
    /// # Errors
    /// Returns [`ListError::ForeignNode`] if `id` is not linked into this list.
    pub fn remove(&mut self, id: NodeId) -> Result<T, ListError> {
        let idx = self.resolve_or_reject(id)?;
        self.release(idx).ok_or(ListError::ForeignNode)
    }

    /// Removes and returns the first value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.slots[ROOT].next;
        if idx == ROOT {
            return None;
        }
        self.release(idx)
    }

    /// Removes and returns the last value, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.slots[ROOT].prev;
        if idx == ROOT {
            return None;
        }
        self.release(idx)
    }

    /// Moves `id` to the front of the list.
    ///
    /// # Errors
    /// Returns [`ListError::ForeignNode`] if `id` is not linked into this list.
    pub fn move_to_front(&mut self, id: NodeId) -> Result<(), ListError> {
        let idx = self.resolve_or_reject(id)?;
        if self.slots[ROOT].next != idx {
            self.relink(idx, ROOT);
        }
        Ok(())
    }

    /// Moves `id` to the back of the list.
    ///
    /// # Errors
    /// Returns [`ListError::ForeignNode`] if `id` is not linked into this list.
    pub fn move_to_back(&mut self, id: NodeId) -> Result<(), ListError> {
        let idx = self.resolve_or_reject(id)?;
        let last = self.slots[ROOT].prev;
        if last != idx {
            self.relink(idx, last);
        }
        Ok(())
    }

    /// Moves `id` to the position immediately before `mark`.
    ///
    /// Moving a node relative to itself is a no-op.
    ///
    /// # Errors
    /// Returns [`ListError::ForeignNode`] if `id` or `mark` is not linked into
    /// this list.
    pub fn move_before(&mut self, id: NodeId, mark: NodeId) -> Result<(), ListError> {
        let idx = self.resolve_or_reject(id)?;
        let mark = self.resolve_or_reject(mark)?;
        if idx != mark {
            let at = self.slots[mark].prev;
            self.relink(idx, at);
        }
        Ok(())
    }

    /// Moves `id` to the position immediately after `mark`.
    ///
    /// Moving a node relative to itself is a no-op.
    ///
    /// # Errors
    /// Returns [`ListError::ForeignNode`] if `id` or `mark` is not linked into
    /// this list.
    pub fn move_after(&mut self, id: NodeId, mark: NodeId) -> Result<(), ListError> {
        let idx = self.resolve_or_reject(id)?;
        let mark = self.resolve_or_reject(mark)?;
        if idx != mark {
            self.relink(idx, mark);
        }
        Ok(())
    }

    /// Drops every node in O(1) link work.
    ///
    /// The sentinel is pointed back at itself without walking the nodes. The
    /// list also takes a fresh identity, so handles issued before the clear
    /// are rejected from now on.
    pub fn clear(&mut self) {
        trace!(len = self.len, "list: clear");
        self.id = next_list_id();
        self.slots.truncate(1);
        self.slots[ROOT].next = ROOT;
        self.slots[ROOT].prev = ROOT;
        self.free.clear();
        self.len = 0;
    }

    /// Returns an iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the node handles, front to back.
    pub fn ids(&self) -> Ids<'_, T> {
        Ids::new(self)
    }

    pub(crate) fn handle(&self, idx: usize) -> NodeId {
        NodeId {
            owner: self.id,
            index: idx,
            generation: self.slots[idx].generation,
        }
    }

    fn handle_unless_root(&self, idx: usize) -> Option<NodeId> {
        (idx != ROOT).then(|| self.handle(idx))
    }

    fn resolve(&self, id: NodeId) -> Option<usize> {
        if id.owner != self.id || id.index == ROOT {
            return None;
        }
        let slot = self.slots.get(id.index)?;
        (slot.generation == id.generation && slot.value.is_some()).then_some(id.index)
    }

    fn resolve_or_reject(&self, id: NodeId) -> Result<usize, ListError> {
        self.resolve(id).ok_or_else(|| {
            debug!(?id, list = self.id, "list: rejecting node not linked into this list");
            ListError::ForeignNode
        })
    }

    /// Stores `value` in a free slot and links it after `at`.
    fn insert(&mut self, value: T, at: usize) -> NodeId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].value = Some(value);
                idx
            }
            None => {
                self.slots.push(Slot {
                    prev: ROOT,
                    next: ROOT,
                    generation: 0,
                    value: Some(value),
                });
                self.slots.len() - 1
            }
        };
        self.link_after(idx, at);
        self.len += 1;
        self.handle(idx)
    }

    /// Unlinks `idx`, retires its handle and returns its value.
    fn release(&mut self, idx: usize) -> Option<T> {
        self.unlink(idx);
        self.len -= 1;

        let slot = &mut self.slots[idx];
        slot.prev = idx;
        slot.next = idx;
        slot.generation = slot.generation.wrapping_add(1);
        let value = slot.value.take();
        self.free.push(idx);
        value
    }

    fn relink(&mut self, idx: usize, at: usize) {
        if idx == at {
            return;
        }
        self.unlink(idx);
        self.link_after(idx, at);
    }

    fn link_after(&mut self, idx: usize, at: usize) {
        let next = self.slots[at].next;
        self.slots[at].next = idx;
        self.slots[idx].prev = at;
        self.slots[idx].next = next;
        self.slots[next].prev = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }
}

impl<T: Clone> List<T> {
    /// Appends a copy of every value of `other`, in order.
    ///
    /// `other` is left untouched and the new nodes get their own handles.
    pub fn push_back_list(&mut self, other: &List<T>) {
        for value in other.iter() {
            self.push_back(value.clone());
        }
    }

    /// Prepends a copy of every value of `other`, keeping `other`'s order.
    ///
    /// `other` is left untouched and the new nodes get their own handles.
    pub fn push_front_list(&mut self, other: &List<T>) {
        for value in other.iter().rev() {
            self.push_front(value.clone());
        }
    }
}

/// Deep copy under a fresh identity; handles of the source do not resolve in
/// the copy.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            id: next_list_id(),
            slots: self.slots.clone(),
            free: self.free.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
