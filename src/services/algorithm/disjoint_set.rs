//! 并查集模块
//!
//! 路径压缩 + 按秩合并。`find` 用迭代实现，长链输入不会增加栈深度。

use std::collections::HashMap;

use crate::core::NodeId;

/// 并查集
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: HashMap<NodeId, NodeId>,
    rank: HashMap<NodeId, u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为每个节点建立单元素集合
    pub fn from_nodes<I: IntoIterator<Item = NodeId>>(nodes: I) -> Self {
        let mut set = Self::new();
        for node in nodes {
            set.make_set(node);
        }
        set
    }

    /// 建立单元素集合，已存在的节点保持不变
    pub fn make_set(&mut self, x: NodeId) {
        self.parent.entry(x).or_insert(x);
        self.rank.entry(x).or_insert(0);
    }

    /// 查找代表元，未登记的节点会先成为单元素集合
    pub fn find(&mut self, x: NodeId) -> NodeId {
        self.make_set(x);

        let mut root = x;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut node = x;
        while node != root {
            let next = self.parent.insert(node, root).unwrap_or(root);
            node = next;
        }

        root
    }

    /// 合并两个集合；已在同一集合时返回 false
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }

        let rank_a = self.rank_of(a);
        let rank_b = self.rank_of(b);
        if rank_a < rank_b {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent.insert(b, a);
        if rank_a == rank_b {
            self.rank.insert(a, rank_a + 1);
        }
        true
    }

    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// 不相交集合的数量
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|(node, parent)| node == parent).count()
    }

    pub fn rank_of(&self, x: NodeId) -> u32 {
        self.rank.get(&x).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_singletons() {
        let mut set = DisjointSet::from_nodes(0..4);
        assert_eq!(set.set_count(), 4);
        for node in 0..4 {
            assert_eq!(set.find(node), node);
        }
    }

    #[test]
    fn test_union_and_find() {
        let mut set = DisjointSet::from_nodes(0..5);
        assert!(set.union(0, 1));
        assert!(set.union(2, 3));
        assert!(set.union(1, 3));
        assert!(!set.union(0, 2));

        assert!(set.connected(0, 3));
        assert!(!set.connected(0, 4));
        assert_eq!(set.set_count(), 2);
    }

    #[test]
    fn test_union_by_rank() {
        let mut set = DisjointSet::from_nodes(0..3);
        set.union(0, 1);
        let root = set.find(0);
        assert_eq!(set.rank_of(root), 1);

        // 低秩的根挂到高秩的根下面，高秩根的秩不变
        set.union(2, 0);
        assert_eq!(set.find(2), root);
        assert_eq!(set.rank_of(root), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut set = DisjointSet::new();
        // 手工搭一条 4 -> 3 -> 2 -> 1 -> 0 的链
        set.make_set(0);
        for node in 1..5 {
            set.make_set(node);
            set.parent.insert(node, node - 1);
        }

        assert_eq!(set.find(4), 0);
        for node in 1..5 {
            assert_eq!(set.parent.get(&node), Some(&0));
        }
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let mut set = DisjointSet::new();
        set.make_set(0);
        for node in 1..200_000 {
            set.make_set(node);
            set.parent.insert(node, node - 1);
        }
        assert_eq!(set.find(199_999), 0);
    }

    #[test]
    fn test_find_registers_unknown_node() {
        let mut set = DisjointSet::new();
        assert_eq!(set.find(-7), -7);
        assert_eq!(set.set_count(), 1);
    }

    proptest! {
        #[test]
        fn prop_find_matches_naive_components(
            unions in proptest::collection::vec((0i64..12, 0i64..12), 0..40)
        ) {
            let mut set = DisjointSet::from_nodes(0..12);
            // 朴素实现：每个节点一个组号，合并时整体改号
            let mut label: Vec<usize> = (0..12).collect();
            for (a, b) in &unions {
                let joined = set.union(*a, *b);
                let (la, lb) = (label[*a as usize], label[*b as usize]);
                prop_assert_eq!(joined, la != lb);
                for l in label.iter_mut() {
                    if *l == lb {
                        *l = la;
                    }
                }
            }
            for x in 0..12i64 {
                for y in 0..12i64 {
                    prop_assert_eq!(
                        set.connected(x, y),
                        label[x as usize] == label[y as usize]
                    );
                }
            }
        }
    }
}
