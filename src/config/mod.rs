use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{NodeId, TraceResult};

/// 运行配置
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub run: RunConfig,
}

/// 日志配置
///
/// 标准输出是追踪通道，日志只能写到标准错误或文件。
/// 默认级别为 `off`，保证错误通道上只出现错误记录。
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "algotrace".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 算法参数配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Dijkstra 起点
    pub source: NodeId,
    /// Dijkstra 终点
    pub target: NodeId,
    /// Prim 起点
    pub start: NodeId,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: 0,
            target: 3,
            start: 0,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> TraceResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> TraceResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
