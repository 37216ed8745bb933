//! Prim算法模块
//!
//! 从起点出发逐个吸收节点构造最小生成树。图不连通时只覆盖起点所在的连通分量。

use std::collections::{HashMap, HashSet};

use super::graph::WeightedGraph;
use super::priority_queue::{MinQueue, QueueEntry};
use super::SpanningTree;
use crate::core::{NodeId, TraceResult, Weight};
use crate::services::trace::{NullSink, SkipReason, StepDetail, TraceContext, TraceSink};

/// Prim算法结构体
pub struct Prim;

impl Prim {
    pub fn run<S: TraceSink>(
        graph: &WeightedGraph,
        start: NodeId,
        ctx: &mut TraceContext<S>,
    ) -> TraceResult<SpanningTree> {
        let mut key: HashMap<NodeId, Weight> = HashMap::new();
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
        let mut in_tree: HashSet<NodeId> = HashSet::new();
        let mut queue = MinQueue::new();
        let mut tree = SpanningTree::default();

        // 没有键值的节点尚未被任何树边触及
        key.insert(start, 0);
        queue.push(0, start);

        while let Some(QueueEntry { priority, node }) = queue.pop() {
            ctx.choose(
                node,
                priority,
                format!("Choosing node {} with key={}", node, priority),
            )?;

            if in_tree.contains(&node) {
                ctx.skip(
                    node,
                    priority,
                    SkipReason::InTree,
                    format!("Skipping node already in MST {}", node),
                )?;
                continue;
            }

            in_tree.insert(node);
            match parent.get(&node) {
                Some(&from) if node != start => tree.push(from, node, priority),
                _ => tree.total += priority,
            }
            ctx.include(StepDetail::new(
                node,
                priority,
                format!("Include node {} with connecting cost={}", node, priority),
            ))?;

            for edge in graph.neighbors(node) {
                ctx.consider(
                    node,
                    edge.to,
                    edge.weight,
                    format!("Considering edge {}->{} (w={})", node, edge.to, edge.weight),
                )?;

                let improves = key.get(&edge.to).map_or(true, |&current| edge.weight < current);
                if !in_tree.contains(&edge.to) && improves {
                    key.insert(edge.to, edge.weight);
                    parent.insert(edge.to, node);
                    queue.push(edge.weight, edge.to);
                    ctx.update(
                        edge.to,
                        edge.weight,
                        format!("Update key[{}]={}", edge.to, edge.weight),
                    )?;
                }
            }
        }

        log::debug!(
            "prim finished: {} of {} nodes spanned from {}",
            in_tree.len(),
            graph.node_count(),
            start
        );

        ctx.finish(tree.summary())?;
        Ok(tree)
    }

    /// 不带追踪的最小生成树
    pub fn minimum_spanning_tree(graph: &WeightedGraph, start: NodeId) -> TraceResult<SpanningTree> {
        let mut ctx = TraceContext::new(NullSink);
        Self::run(graph, start, &mut ctx)
    }
}
