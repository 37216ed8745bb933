//! 追踪上下文
//!
//! 步号由一次运行独占的上下文维护，从 0 开始，每发出一条记录加一，
//! 包括初始图快照和结束标记。

use super::event::{
    EdgeRecord, FinalSummary, GraphSnapshot, SkipDetail, SkipReason, StepDetail, TraceEvent,
    TraceRecord,
};
use super::sink::TraceSink;
use crate::core::{NodeId, TraceResult, Weight};
use crate::services::algorithm::graph::WeightedGraph;

/// 一次运行的追踪上下文
pub struct TraceContext<S: TraceSink> {
    next_step: u64,
    sink: S,
}

impl<S: TraceSink> TraceContext<S> {
    pub fn new(sink: S) -> Self {
        Self { next_step: 0, sink }
    }

    /// 已发出的记录数
    pub fn emitted(&self) -> u64 {
        self.next_step
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// 发出一条记录，返回它的步号
    pub fn emit(&mut self, event: TraceEvent) -> TraceResult<u64> {
        let step = self.next_step;
        let record = TraceRecord { step, event };
        self.sink.write_record(&record)?;
        self.next_step += 1;
        Ok(step)
    }

    /// 发出初始图快照：升序节点列表 + 去重后的无向边
    pub fn init(&mut self, graph: &WeightedGraph) -> TraceResult<u64> {
        let edges = graph
            .undirected_edges()
            .into_iter()
            .map(|e| EdgeRecord {
                from: e.from,
                to: e.to,
                weight: e.weight,
            })
            .collect();
        self.emit(TraceEvent::Init(GraphSnapshot {
            nodes: graph.nodes(),
            edges,
        }))
    }

    pub fn choose(&mut self, node: NodeId, cost: Weight, explanation: String) -> TraceResult<u64> {
        self.emit(TraceEvent::Choose(StepDetail::new(node, cost, explanation)))
    }

    pub fn skip(
        &mut self,
        a: i64,
        b: i64,
        reason: SkipReason,
        explanation: String,
    ) -> TraceResult<u64> {
        self.emit(TraceEvent::Skip(SkipDetail {
            a,
            b,
            reason,
            explanation,
        }))
    }

    pub fn visit(&mut self, node: NodeId, cost: Weight, explanation: String) -> TraceResult<u64> {
        self.emit(TraceEvent::Visit(StepDetail::new(node, cost, explanation)))
    }

    pub fn include(&mut self, detail: StepDetail) -> TraceResult<u64> {
        self.emit(TraceEvent::Include(detail))
    }

    pub fn consider(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: Weight,
        explanation: String,
    ) -> TraceResult<u64> {
        self.emit(TraceEvent::Consider(
            StepDetail::new(from, to, explanation).with_weight(weight),
        ))
    }

    pub fn update(&mut self, node: NodeId, cost: Weight, explanation: String) -> TraceResult<u64> {
        self.emit(TraceEvent::Update(StepDetail::new(node, cost, explanation)))
    }

    pub fn finish(&mut self, summary: FinalSummary) -> TraceResult<u64> {
        self.emit(TraceEvent::Final(summary))
    }

    pub fn end(&mut self) -> TraceResult<u64> {
        self.emit(TraceEvent::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::trace::sink::MemorySink;

    #[test]
    fn test_steps_start_at_zero_and_increase() {
        let mut ctx = TraceContext::new(MemorySink::new());
        assert_eq!(ctx.choose(0, 0, "a".into()).expect("emit"), 0);
        assert_eq!(ctx.visit(0, 0, "b".into()).expect("emit"), 1);
        assert_eq!(ctx.end().expect("emit"), 2);
        assert_eq!(ctx.emitted(), 3);

        let steps: Vec<u64> = ctx.into_sink().into_records().iter().map(|r| r.step).collect();
        assert_eq!(steps, vec![0, 1, 2]);
    }

    #[test]
    fn test_init_snapshot_of_default_graph() {
        let mut ctx = TraceContext::new(MemorySink::new());
        ctx.init(&WeightedGraph::default_example()).expect("emit");

        let records = ctx.into_sink().into_records();
        match &records[0].event {
            TraceEvent::Init(snapshot) => {
                assert_eq!(snapshot.nodes, vec![0, 1, 2, 3]);
                let edges: Vec<(NodeId, NodeId, Weight)> =
                    snapshot.edges.iter().map(|e| (e.from, e.to, e.weight)).collect();
                assert_eq!(edges, vec![(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8)]);
            }
            other => panic!("expected init event, got {:?}", other),
        }
    }
}
