//! 算法模块
//!
//! 带追踪的图算法实现，共享同一个带权图模型

pub mod dijkstra;
pub mod disjoint_set;
pub mod graph;
pub mod kruskal;
pub mod prim;
pub mod priority_queue;

use std::fmt;
use std::str::FromStr;

use crate::core::{NodeId, TraceError, TraceResult, Weight};
use crate::services::trace::{EdgeRecord, FinalSummary};

// 重新导出常用算法结构体
pub use dijkstra::{Dijkstra, ShortestPath};
pub use disjoint_set::DisjointSet;
pub use graph::{Edge, UndirectedEdge, WeightedGraph};
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use priority_queue::{is_stale, MinQueue, QueueEntry};

/// 可选的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    Prims,
    Kruskal,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Prims => "prims",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// 运行前检查算法对图的前置条件
    pub fn validate(&self, graph: &WeightedGraph) -> TraceResult<()> {
        match self {
            Algorithm::Dijkstra => Dijkstra::validate(graph),
            Algorithm::Prims | Algorithm::Kruskal => Ok(()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "prims" => Ok(Algorithm::Prims),
            "kruskal" => Ok(Algorithm::Kruskal),
            other => Err(TraceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 生成树中的一条边，Prim 中 `from` 是父节点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// 最小生成树（图不连通时为生成森林或起点所在分量的生成树）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    /// 按接受顺序排列
    pub edges: Vec<TreeEdge>,
    pub total: Weight,
}

impl SpanningTree {
    pub fn push(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.edges.push(TreeEdge { from, to, weight });
        self.total += weight;
    }

    pub fn edge_pairs(&self) -> Vec<(NodeId, NodeId)> {
        self.edges.iter().map(|e| (e.from, e.to)).collect()
    }

    /// 端点按 (小, 大) 排列并排序后的边集，用于比较不同算法的结果
    pub fn normalized_edges(&self) -> Vec<(NodeId, NodeId, Weight)> {
        let mut edges: Vec<(NodeId, NodeId, Weight)> = self
            .edges
            .iter()
            .map(|e| (e.from.min(e.to), e.from.max(e.to), e.weight))
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn summary(&self) -> FinalSummary {
        FinalSummary {
            mst: Some(
                self.edges
                    .iter()
                    .map(|e| EdgeRecord {
                        from: e.from,
                        to: e.to,
                        weight: e.weight,
                    })
                    .collect(),
            ),
            cost: Some(self.total),
            explanation: format!("MST complete with total cost {}", self.total),
            ..FinalSummary::default()
        }
    }
}
