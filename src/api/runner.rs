//! 运行流程：前置检查 → init → 算法（含 final）→ end

use crate::config::RunConfig;
use crate::core::TraceResult;
use crate::services::algorithm::{
    Algorithm, Dijkstra, Kruskal, Prim, ShortestPath, SpanningTree, WeightedGraph,
};
use crate::services::trace::{TraceContext, TraceSink};

/// 一次运行所需的全部输入
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub algorithm: Algorithm,
    pub graph: WeightedGraph,
    pub run: RunConfig,
}

impl RunRequest {
    pub fn new(algorithm: Algorithm, graph: WeightedGraph) -> Self {
        Self {
            algorithm,
            graph,
            run: RunConfig::default(),
        }
    }
}

/// 算法结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    ShortestPath(ShortestPath),
    SpanningTree(SpanningTree),
}

/// 执行一次完整运行
///
/// 前置条件在第一条记录之前检查，失败时不会产生任何输出。
pub fn run<S: TraceSink>(request: &RunRequest, ctx: &mut TraceContext<S>) -> TraceResult<RunOutcome> {
    let graph = &request.graph;
    request.algorithm.validate(graph)?;

    log::info!(
        "running {} on {} nodes / {} edges",
        request.algorithm,
        graph.node_count(),
        graph.edge_count()
    );

    ctx.init(graph)?;
    let outcome = match request.algorithm {
        Algorithm::Dijkstra => RunOutcome::ShortestPath(Dijkstra::run(
            graph,
            request.run.source,
            request.run.target,
            ctx,
        )?),
        Algorithm::Prims => RunOutcome::SpanningTree(Prim::run(graph, request.run.start, ctx)?),
        Algorithm::Kruskal => RunOutcome::SpanningTree(Kruskal::run(graph, ctx)?),
    };
    ctx.end()?;

    log::info!("{} emitted {} records", request.algorithm, ctx.emitted());
    Ok(outcome)
}
