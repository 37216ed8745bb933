pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{ErrorRecord, TraceError, TraceResult};

// 核心数据类型
pub use types::{NodeId, Weight, MAX_WEIGHT, MIN_WEIGHT};
