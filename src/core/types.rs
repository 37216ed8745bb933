//! 核心数据类型

/// 节点标识
pub type NodeId = i64;

/// 边权重，同时也用作距离和生成树代价
pub type Weight = i64;

/// 三元组中允许的最大边权，与 32 位整数一致，累加代价仍留在 `Weight` 范围内
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;

/// 三元组中允许的最小边权
pub const MIN_WEIGHT: Weight = i32::MIN as Weight;
