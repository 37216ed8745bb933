//! 服务层模块
//!
//! 图算法与追踪输出

pub mod algorithm;
pub mod trace;

// 重新导出常用服务
pub use algorithm::*;
pub use trace::*;
