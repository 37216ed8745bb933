//! 追踪事件模块
//!
//! 每条记录在输出中占一行，可以独立解析：
//! `{"step":3,"type":"consider","a":0,"b":1,"weight":4,"explanation":"..."}`

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Weight};

/// 一条完整的追踪记录：全局步号 + 事件本体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub step: u64,
    #[serde(flatten)]
    pub event: TraceEvent,
}

/// 追踪事件，按 `type` 字段区分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceEvent {
    Init(GraphSnapshot),
    Choose(StepDetail),
    Skip(SkipDetail),
    Visit(StepDetail),
    Include(StepDetail),
    Consider(StepDetail),
    Update(StepDetail),
    Final(FinalSummary),
    End,
}

impl TraceEvent {
    /// 事件种类名，与序列化后的 `type` 字段一致
    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Init(_) => "init",
            TraceEvent::Choose(_) => "choose",
            TraceEvent::Skip(_) => "skip",
            TraceEvent::Visit(_) => "visit",
            TraceEvent::Include(_) => "include",
            TraceEvent::Consider(_) => "consider",
            TraceEvent::Update(_) => "update",
            TraceEvent::Final(_) => "final",
            TraceEvent::End => "end",
        }
    }
}

/// 初始图快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeRecord>,
}

/// 无向边，`from < to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// 普通步骤
///
/// `a`/`b` 的含义随事件而变：choose/visit/include 中是 (节点, 代价)，
/// consider 中是 (起点, 终点)，update 中是 (节点, 新代价)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDetail {
    pub a: i64,
    pub b: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    pub explanation: String,
}

impl StepDetail {
    pub fn new(a: i64, b: i64, explanation: impl Into<String>) -> Self {
        Self {
            a,
            b,
            weight: None,
            explanation: explanation.into(),
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// 跳过原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// 优先队列中的过期条目
    Stale,
    /// 节点已经确定了最短距离
    Visited,
    /// 节点已经在生成树中
    InTree,
    /// 加入该边会成环
    Cycle,
}

/// 跳过步骤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipDetail {
    pub a: i64,
    pub b: i64,
    pub reason: SkipReason,
    pub explanation: String,
}

/// 最终结果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinalSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mst: Option<Vec<EdgeRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reachable: Option<bool>,
    pub explanation: String,
}
