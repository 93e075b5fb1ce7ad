use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::common::Node;

struct FrontierEntry {
    priority: usize,
    sequence: usize,
    node: Rc<Node>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// BinaryHeap is a max-heap, so every comparison is reversed.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            // Cheaper path first on equal priority.
            .then_with(|| other.node.path_cost.cmp(&self.node.path_cost))
            // Then first in, first out.
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of nodes keyed by a caller-supplied priority.
pub(super) struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: usize,
}

impl PriorityFrontier {
    pub(super) fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub(super) fn push(&mut self, node: Rc<Node>, priority: usize) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.pushed,
            node,
        });
        self.pushed += 1;
    }

    pub(super) fn pop(&mut self) -> Option<Rc<Node>> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Action, State};

    #[test]
    fn test_pops_lowest_priority_first() {
        let root = Node::root(State::default_goal());
        let mut frontier = PriorityFrontier::new();
        frontier.push(Rc::clone(&root), 5);
        frontier.push(Rc::clone(&root), 1);
        frontier.push(Rc::clone(&root), 3);
        assert_eq!(frontier.len(), 3);

        let mut priorities = Vec::new();
        while let Some(entry) = frontier.heap.pop() {
            priorities.push(entry.priority);
        }
        assert_eq!(priorities, vec![1, 3, 5]);
    }

    #[test]
    fn test_ties_prefer_cheaper_then_older() {
        let root = Node::root(State::default_goal());
        let right = root.state().slide(Action::Right).unwrap();
        let child = Node::child(&root, right, Action::Right, 1);

        let mut frontier = PriorityFrontier::new();
        frontier.push(Rc::clone(&child), 2);
        frontier.push(Rc::clone(&root), 2);
        frontier.push(Rc::clone(&child), 2);

        let first = frontier.pop().unwrap();
        assert!(Rc::ptr_eq(&first, &root));

        let (second, third) = (frontier.heap.pop().unwrap(), frontier.heap.pop().unwrap());
        assert!(second.sequence < third.sequence);
        assert!(frontier.pop().is_none());
    }
}
