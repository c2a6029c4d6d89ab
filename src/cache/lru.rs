//! LRU Tracker Module
//!
//! Recency-ordered sequence of cache entries used for LRU eviction.

use crate::cache::CacheEntry;

/// Handle to a node inside an [`LruTracker`].
pub type NodeId = usize;

#[derive(Debug)]
struct Node<V> {
    key: String,
    entry: CacheEntry<V>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == LRU Tracker ==
/// Doubly linked list of entries stored in a slab.
///
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// Node ids stay valid until the node is removed, so the store can keep
/// them in its key index and relink in O(1).
#[derive(Debug)]
pub struct LruTracker<V> {
    nodes: Vec<Option<Node<V>>>,
    /// Vacant slots available for reuse
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<V> Default for LruTracker<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LruTracker<V> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tracker with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new entry as most recently used and returns its node id.
    pub fn push_front(&mut self, key: String, entry: CacheEntry<V>) -> NodeId {
        let node = Node {
            key,
            entry,
            prev: None,
            next: None,
        };

        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        self.link_front(id);
        self.len += 1;
        id
    }

    // == Touch ==
    /// Marks a node as recently used (moves to front).
    pub fn touch(&mut self, id: NodeId) {
        if self.head == Some(id) || self.node(id).is_none() {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    // == Remove ==
    /// Removes a node, returning its key and entry.
    pub fn remove(&mut self, id: NodeId) -> Option<(String, CacheEntry<V>)> {
        self.node(id)?;
        self.unlink(id);

        let node = self.nodes[id].take()?;
        self.free.push(id);
        self.len -= 1;
        Some((node.key, node.entry))
    }

    // == Peek Oldest ==
    /// Returns the id of the least recently used node without removing it.
    pub fn oldest(&self) -> Option<NodeId> {
        self.tail
    }

    // == Accessors ==
    /// Returns the entry stored at `id`.
    pub fn entry(&self, id: NodeId) -> Option<&CacheEntry<V>> {
        self.node(id).map(|node| &node.entry)
    }

    /// Returns a mutable reference to the entry stored at `id`.
    pub fn entry_mut(&mut self, id: NodeId) -> Option<&mut CacheEntry<V>> {
        self.nodes
            .get_mut(id)
            .and_then(Option::as_mut)
            .map(|node| &mut node.entry)
    }

    /// Returns the key stored at `id`.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.key.as_str())
    }

    /// Iterates from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheEntry<V>)> + '_ {
        std::iter::successors(self.head.and_then(|id| self.node(id)), |node| {
            node.next.and_then(|id| self.node(id))
        })
        .map(|node| (node.key.as_str(), &node.entry))
    }

    // == Length ==
    /// Returns the number of tracked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Linking ==
    fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(Some(node)) = self.nodes.get_mut(id) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(Some(node)) = self.nodes.get_mut(id) {
            node.next = next;
        }
    }

    fn unlink(&mut self, id: NodeId) {
        let Some((prev, next)) = self.node(id).map(|node| (node.prev, node.next)) else {
            return;
        };

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }

        self.set_prev(id, None);
        self.set_next(id, None);
    }

    fn link_front(&mut self, id: NodeId) {
        let old_head = self.head;

        self.set_prev(id, None);
        self.set_next(id, old_head);
        match old_head {
            Some(head) => self.set_prev(head, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}
