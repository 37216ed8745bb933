//! 最小优先队列模块
//!
//! 不支持 decrease-key：同一节点可以有多个条目，过期条目在弹出时丢弃（惰性删除）。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{NodeId, Weight};

/// 队列条目 (priority, node)
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct QueueEntry {
    pub priority: Weight,
    pub node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较得到最小堆；优先级相同时节点号小的先出队
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 最小优先队列
#[derive(Debug, Default)]
pub struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl MinQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, priority: Weight, node: NodeId) {
        self.heap.push(QueueEntry { priority, node });
    }

    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// 条目是否过期：当前记录的最优值严格优于条目中的优先级
///
/// 相等不算过期。
pub fn is_stale(entry_priority: Weight, best_known: Weight) -> bool {
    best_known < entry_priority
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_ascending_priority() {
        let mut queue = MinQueue::new();
        queue.push(5, 1);
        queue.push(1, 2);
        queue.push(3, 3);

        let order: Vec<Weight> = std::iter::from_fn(|| queue.pop()).map(|e| e.priority).collect();
        assert_eq!(order, vec![1, 3, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_break_on_smaller_node() {
        let mut queue = MinQueue::new();
        queue.push(2, 9);
        queue.push(2, 4);
        queue.push(2, 7);

        let nodes: Vec<NodeId> = std::iter::from_fn(|| queue.pop()).map(|e| e.node).collect();
        assert_eq!(nodes, vec![4, 7, 9]);
    }

    #[test]
    fn test_duplicate_entries_are_kept() {
        let mut queue = MinQueue::new();
        queue.push(8, 3);
        queue.push(6, 3);
        assert_eq!(queue.len(), 2);

        let first = queue.pop().expect("Queue should not be empty");
        assert_eq!(first, QueueEntry { priority: 6, node: 3 });
        let second = queue.pop().expect("Queue should not be empty");
        assert!(is_stale(second.priority, first.priority));
    }

    #[test]
    fn test_equal_priority_is_not_stale() {
        assert!(!is_stale(4, 4));
        assert!(is_stale(5, 4));
        assert!(!is_stale(3, 4));
    }
}
