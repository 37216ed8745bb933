//! Kruskal算法模块
//!
//! 去重后的无向边按权重稳定排序，权重相同的边保持收集顺序，
//! 因此同一张图的追踪序列总是一致的。

use super::disjoint_set::DisjointSet;
use super::graph::{UndirectedEdge, WeightedGraph};
use super::SpanningTree;
use crate::core::TraceResult;
use crate::services::trace::{NullSink, SkipReason, StepDetail, TraceContext, TraceSink};

/// Kruskal算法结构体
pub struct Kruskal;

impl Kruskal {
    /// 按权重稳定排序后的边序列
    pub fn sorted_edges(graph: &WeightedGraph) -> Vec<UndirectedEdge> {
        let mut edges = graph.undirected_edges();
        edges.sort_by_key(|edge| edge.weight);
        edges
    }

    pub fn run<S: TraceSink>(
        graph: &WeightedGraph,
        ctx: &mut TraceContext<S>,
    ) -> TraceResult<SpanningTree> {
        let edges = Self::sorted_edges(graph);
        let mut components = DisjointSet::from_nodes(graph.nodes());
        let mut tree = SpanningTree::default();

        for edge in &edges {
            let (u, v, w) = (edge.from, edge.to, edge.weight);
            ctx.consider(u, v, w, format!("Considering edge {}-{} (w={})", u, v, w))?;

            if !components.union(u, v) {
                ctx.skip(
                    u,
                    v,
                    SkipReason::Cycle,
                    format!("Skipping edge {}-{} (would form cycle)", u, v),
                )?;
                continue;
            }

            tree.push(u, v, w);
            ctx.include(
                StepDetail::new(u, v, format!("Kruskal: include edge {}-{} (w={})", u, v, w))
                    .with_weight(w),
            )?;
        }

        log::debug!(
            "kruskal finished: accepted {} of {} edges, {} components left",
            tree.edges.len(),
            edges.len(),
            components.set_count()
        );

        ctx.finish(tree.summary())?;
        Ok(tree)
    }

    /// 不带追踪的最小生成树
    pub fn minimum_spanning_tree(graph: &WeightedGraph) -> TraceResult<SpanningTree> {
        let mut ctx = TraceContext::new(NullSink);
        Self::run(graph, &mut ctx)
    }
}
