//! Dijkstra算法模块
//!
//! 带追踪的单源最短路径。要求所有边权非负，`validate` 在发出任何记录之前检查。

use std::collections::{BTreeMap, HashMap, HashSet};

use super::graph::WeightedGraph;
use super::priority_queue::{is_stale, MinQueue, QueueEntry};
use crate::core::{NodeId, TraceError, TraceResult, Weight};
use crate::services::trace::{FinalSummary, NullSink, SkipReason, TraceContext, TraceSink};

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub source: NodeId,
    pub target: NodeId,
    /// 所有可达节点的最终距离
    pub distances: BTreeMap<NodeId, Weight>,
    /// 从起点到终点的路径，不可达时为 None
    pub path: Option<Vec<NodeId>>,
    pub cost: Option<Weight>,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
}

impl Dijkstra {
    /// 检查前置条件：不允许负权边
    pub fn validate(graph: &WeightedGraph) -> TraceResult<()> {
        match graph.first_negative_edge() {
            Some(edge) => Err(TraceError::NegativeWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            }),
            None => Ok(()),
        }
    }

    /// 运行算法并把每个决策点写入追踪上下文，最后发出 final 记录
    pub fn run<S: TraceSink>(
        graph: &WeightedGraph,
        source: NodeId,
        target: NodeId,
        ctx: &mut TraceContext<S>,
    ) -> TraceResult<ShortestPath> {
        Self::validate(graph)?;

        let mut dist: HashMap<NodeId, Weight> = HashMap::new();
        let mut prev: HashMap<NodeId, NodeId> = HashMap::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue = MinQueue::new();

        // 只记录已到达的节点
        dist.insert(source, 0);
        queue.push(0, source);

        while let Some(QueueEntry { priority, node }) = queue.pop() {
            ctx.choose(
                node,
                priority,
                format!("Choosing node {} with dist={}", node, priority),
            )?;

            let best = dist.get(&node).copied().unwrap_or(priority);
            if is_stale(priority, best) {
                ctx.skip(
                    node,
                    priority,
                    SkipReason::Stale,
                    format!("Skipping stale entry for node {}", node),
                )?;
                continue;
            }
            if visited.contains(&node) {
                ctx.skip(
                    node,
                    priority,
                    SkipReason::Visited,
                    format!("Skipping already visited node {}", node),
                )?;
                continue;
            }

            visited.insert(node);
            ctx.visit(node, priority, format!("Visiting node {}", node))?;

            for edge in graph.neighbors(node) {
                ctx.consider(
                    node,
                    edge.to,
                    edge.weight,
                    format!("Considering edge {}->{} (w={})", node, edge.to, edge.weight),
                )?;

                let candidate = best.saturating_add(edge.weight);
                if dist.get(&edge.to).map_or(true, |&known| candidate < known) {
                    dist.insert(edge.to, candidate);
                    prev.insert(edge.to, node);
                    queue.push(candidate, edge.to);
                    ctx.update(
                        edge.to,
                        candidate,
                        format!("Updated dist[{}]={}", edge.to, candidate),
                    )?;
                }
            }
        }

        log::debug!(
            "dijkstra finished: {} nodes visited from {}",
            visited.len(),
            source
        );

        let distances: BTreeMap<NodeId, Weight> = dist.into_iter().collect();

        if !prev.contains_key(&target) && target != source {
            ctx.finish(FinalSummary {
                reachable: Some(false),
                explanation: format!("No path to node {}", target),
                ..FinalSummary::default()
            })?;
            return Ok(ShortestPath {
                source,
                target,
                distances,
                path: None,
                cost: None,
            });
        }

        // 重建路径
        let mut path = vec![target];
        let mut current = target;
        while current != source {
            match prev.get(&current) {
                Some(&predecessor) => {
                    path.push(predecessor);
                    current = predecessor;
                }
                None => break,
            }
        }
        path.reverse();

        let cost = distances.get(&target).copied().unwrap_or(0);
        ctx.finish(FinalSummary {
            path: Some(path.clone()),
            cost: Some(cost),
            explanation: format!("Shortest path found with total cost {}", cost),
            ..FinalSummary::default()
        })?;

        Ok(ShortestPath {
            source,
            target,
            distances,
            path: Some(path),
            cost: Some(cost),
        })
    }

    /// 不带追踪的最短路径
    pub fn shortest_path(
        graph: &WeightedGraph,
        source: NodeId,
        target: NodeId,
    ) -> TraceResult<ShortestPath> {
        let mut ctx = TraceContext::new(NullSink);
        Self::run(graph, source, target, &mut ctx)
    }
}
