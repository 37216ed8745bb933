//! 统一错误处理系统 for algotrace
//!
//! 所有组件只返回 `TraceResult<T>`，由入口 `main` 负责把错误转换成
//! 错误通道上的一条结构化记录并设置退出码。组件内部不会直接退出进程。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{NodeId, Weight};

/// 统一的追踪错误类型
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Usage: <algo> [u v w ...] ({0})")]
    Usage(String),

    #[error("Invalid args: need u v w triplets, got {count} values")]
    MalformedGraphArgs { count: usize },

    #[error("Invalid number in graph arguments: {value:?}")]
    InvalidNumber { value: String },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Negative weight {weight} on edge {from}-{to} is not supported by dijkstra")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 统一的结果类型
pub type TraceResult<T> = Result<T, TraceError>;

impl TraceError {
    /// 稳定的错误种类标识，写入错误记录的 `kind` 字段
    pub fn kind(&self) -> &'static str {
        match self {
            TraceError::Usage(_) => "usage_error",
            TraceError::MalformedGraphArgs { .. } => "malformed_graph_args",
            TraceError::InvalidNumber { .. } => "invalid_number",
            TraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            TraceError::NegativeWeight { .. } => "negative_weight",
            TraceError::Config(_) => "config_error",
            TraceError::Io(_) => "io_error",
            TraceError::Serialization(_) => "serialization_error",
        }
    }

    /// 进程退出码，所有错误都是致命的
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// 转换为错误通道上的结构化记录
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            record_type: "error".to_string(),
            kind: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<toml::de::Error> for TraceError {
    fn from(err: toml::de::Error) -> Self {
        TraceError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TraceError {
    fn from(err: toml::ser::Error) -> Self {
        TraceError::Config(err.to_string())
    }
}

/// 错误通道上的单条记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub kind: String,
    pub message: String,
}
