//! 追踪模块
//!
//! 把算法的每一个决策点序列化为有序、自描述的记录流

pub mod context;
pub mod event;
pub mod sink;

pub use context::TraceContext;
pub use event::{
    EdgeRecord, FinalSummary, GraphSnapshot, SkipDetail, SkipReason, StepDetail, TraceEvent,
    TraceRecord,
};
pub use sink::{JsonLinesSink, MemorySink, NullSink, TraceSink};
