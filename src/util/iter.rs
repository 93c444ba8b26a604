//! Stack-based in-order iteration.
//!
//! The iterators keep an explicit stack of pending indices instead of
//! climbing parent links, so one pass never touches `p` fields. They read
//! the arena only; structural mutation during an in-progress traversal
//! invalidates further results and must be avoided by the caller.

use crate::types::Node;

use super::{left, right};

/// Forward in-order iterator over arena indices.
pub struct IndexIter<'a, N: Node> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N: Node> IndexIter<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = left(self.arena, i);
        }
    }
}

impl<'a, N: Node> Iterator for IndexIter<'a, N> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        self.push_left_spine(right(self.arena, i));
        Some(i)
    }
}

/// Reverse in-order iterator over arena indices.
pub struct RevIndexIter<'a, N: Node> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N: Node> RevIndexIter<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_right_spine(root);
        it
    }

    fn push_right_spine(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = right(self.arena, i);
        }
    }
}

impl<'a, N: Node> Iterator for RevIndexIter<'a, N> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        self.push_right_spine(left(self.arena, i));
        Some(i)
    }
}
