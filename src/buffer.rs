//! Capped ordered sequence that evicts its oldest element on overflow.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct EvictingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> EvictingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append at the back; the front is the oldest element.
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }

    /// Prepend at the front; the back is the oldest element.
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
        self.items.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Remove and return every element, oldest-first for `push_back` use.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_evicts_front() {
        let mut buffer = EvictingBuffer::new(3);
        for i in 0..5 {
            buffer.push_back(i);
        }
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn push_front_evicts_back() {
        let mut buffer = EvictingBuffer::new(3);
        for i in 0..5 {
            buffer.push_front(i);
        }
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
        assert_eq!(buffer.front(), Some(&4));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut buffer = EvictingBuffer::new(0);
        buffer.push_back(1);
        buffer.push_front(2);
        assert!(buffer.is_empty());
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = EvictingBuffer::new(4);
        buffer.push_back("a");
        buffer.push_back("b");
        assert_eq!(buffer.drain().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 4);
    }
}
