//! 带权无向图模块
//!
//! 邻接表按节点升序存放，每个节点的出边保持插入顺序。
//! 这个遍历顺序决定了初始快照和 Kruskal 排序前的边序列。

use std::collections::BTreeMap;

use crate::core::{NodeId, TraceError, TraceResult, Weight, MAX_WEIGHT, MIN_WEIGHT};

/// 邻接表中的一条有向边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Weight,
}

/// 去重后的无向边，`from < to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndirectedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// 带权无向图
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 (u, v, weight) 三元组构建图
    ///
    /// 权重必须落在 `MIN_WEIGHT..=MAX_WEIGHT` 内，否则返回 `InvalidNumber`。
    pub fn from_triplets(values: &[i64]) -> TraceResult<Self> {
        if values.len() % 3 != 0 {
            return Err(TraceError::MalformedGraphArgs {
                count: values.len(),
            });
        }

        let mut graph = Self::new();
        for chunk in values.chunks_exact(3) {
            let weight = chunk[2];
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
                return Err(TraceError::InvalidNumber {
                    value: weight.to_string(),
                });
            }
            graph.add_edge(chunk[0], chunk[1], weight);
        }
        Ok(graph)
    }

    /// 内置的 4 节点示例图
    pub fn default_example() -> Self {
        let mut graph = Self::new();
        for node in 0..4 {
            graph.add_node(node);
        }
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 2, 1);
        graph.add_edge(1, 2, 2);
        graph.add_edge(1, 3, 5);
        graph.add_edge(2, 3, 8);
        graph
    }

    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// 插入无向边，两个方向权重相同
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) {
        self.adjacency.entry(u).or_default().push(Edge { to: v, weight });
        self.adjacency.entry(v).or_default().push(Edge { to: u, weight });
    }

    /// 节点的邻接边，不存在的节点返回空切片
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// 升序节点列表
    pub fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 无向边数量（不含自环）
    pub fn edge_count(&self) -> usize {
        self.undirected_edges().len()
    }

    /// 按邻接遍历顺序收集无向边，每条 u<v 的边只出现一次
    pub fn undirected_edges(&self) -> Vec<UndirectedEdge> {
        let mut edges = Vec::new();
        for (&from, neighbors) in &self.adjacency {
            for edge in neighbors {
                if from < edge.to {
                    edges.push(UndirectedEdge {
                        from,
                        to: edge.to,
                        weight: edge.weight,
                    });
                }
            }
        }
        edges
    }

    /// 第一条负权边
    pub fn first_negative_edge(&self) -> Option<UndirectedEdge> {
        self.adjacency.iter().find_map(|(&from, neighbors)| {
            neighbors.iter().find(|e| e.weight < 0).map(|e| UndirectedEdge {
                from: from.min(e.to),
                to: from.max(e.to),
                weight: e.weight,
            })
        })
    }
}
