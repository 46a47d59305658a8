//! FIFO queue that admits each logically-equal element at most once.
//!
//! The queue remembers everything it has ever admitted, not only what is
//! currently queued, so an element that has already been dequeued is not
//! admitted again. Removal of arbitrary values is not offered.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct DedupQueue<T> {
    queue: VecDeque<T>,
    /// Elements currently in `queue`.
    queued: HashSet<T>,
    /// Every element ever admitted.
    seen: HashSet<T>,
}

impl<T> Default for DedupQueue<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T> DedupQueue<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `item` unless an equal element was admitted before.
    ///
    /// Returns whether the element was admitted.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.queued.insert(item.clone());
        self.queue.push_back(item);
        true
    }

    /// Admit every not-yet-seen element of `items`, in iteration order.
    ///
    /// Always reports success; use [`DedupQueue::enqueue`] to observe
    /// individual admissions.
    pub fn enqueue_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.enqueue(item);
        }
        true
    }

    /// Remove and return the earliest-admitted element still queued.
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.queue.pop_front()?;
        self.queued.remove(&item);
        Some(item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.queue.front()
    }

    /// Whether an equal element is currently waiting in the queue.
    pub fn contains(&self, item: &T) -> bool {
        self.queued.contains(item)
    }

    /// Whether an equal element was ever admitted.
    pub fn has_seen(&self, item: &T) -> bool {
        self.seen.contains(item)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.queue.iter()
    }
}

impl<T> Extend<T> for DedupQueue<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T> FromIterator<T> for DedupQueue<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.enqueue_all(iter);
        queue
    }
}
