//! 命令行参数
//!
//! `algotrace <algorithm> [u v w ...]`，不给三元组或只给一个 `0` 时使用内置示例图。

use std::path::PathBuf;

use clap::Parser;

use super::runner::RunRequest;
use crate::config::Config;
use crate::core::{NodeId, TraceError, TraceResult};
use crate::services::algorithm::{Algorithm, WeightedGraph};

/// 代替三元组、表示使用内置示例图的哨兵值
pub const DEFAULT_GRAPH_SENTINEL: &str = "0";

#[derive(Parser, Debug)]
#[command(
    name = "algotrace",
    version,
    about = "Run an instrumented graph algorithm and stream its trace as JSON lines"
)]
pub struct Cli {
    /// Algorithm to run: dijkstra, prims or kruskal
    pub algorithm: String,

    /// Undirected edges as `u v weight` triplets; omit (or pass a single 0) for the built-in graph
    #[arg(allow_negative_numbers = true)]
    pub triplets: Vec<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dijkstra source node
    #[arg(long, allow_negative_numbers = true)]
    pub source: Option<NodeId>,

    /// Dijkstra target node
    #[arg(long, allow_negative_numbers = true)]
    pub target: Option<NodeId>,

    /// Prim start node
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<NodeId>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// 合并配置文件与命令行覆盖项
    pub fn resolve_config(&self) -> TraceResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(source) = self.source {
            config.run.source = source;
        }
        if let Some(target) = self.target {
            config.run.target = target;
        }
        if let Some(start) = self.start {
            config.run.start = start;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        Ok(config)
    }

    /// 构建运行请求。校验顺序：图参数、算法名；任何一步失败都不会产生追踪记录
    pub fn to_request(&self, config: &Config) -> TraceResult<RunRequest> {
        let graph = graph_from_args(&self.triplets)?;
        let algorithm: Algorithm = self.algorithm.parse()?;
        Ok(RunRequest {
            algorithm,
            graph,
            run: config.run.clone(),
        })
    }
}

/// 是否回退到内置示例图
pub fn uses_default_graph(args: &[String]) -> bool {
    args.is_empty() || (args.len() == 1 && args[0] == DEFAULT_GRAPH_SENTINEL)
}

/// 把命令行三元组参数转换为图
pub fn graph_from_args(args: &[String]) -> TraceResult<WeightedGraph> {
    if uses_default_graph(args) {
        log::debug!("no triplets supplied, using the built-in graph");
        return Ok(WeightedGraph::default_example());
    }

    if args.len() % 3 != 0 {
        return Err(TraceError::MalformedGraphArgs { count: args.len() });
    }

    let values = parse_numbers(args)?;
    WeightedGraph::from_triplets(&values)
}

/// 逐个解析整数，第一个非法值即报错
pub fn parse_numbers(args: &[String]) -> TraceResult<Vec<i64>> {
    args.iter()
        .map(|arg| {
            arg.trim().parse::<i64>().map_err(|_| TraceError::InvalidNumber {
                value: arg.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::try_parse_from(["algotrace", "dijkstra"]).expect("Should parse");
        assert_eq!(cli.algorithm, "dijkstra");
        assert!(cli.triplets.is_empty());
    }

    #[test]
    fn test_parse_negative_triplets() {
        let cli = Cli::try_parse_from(["algotrace", "kruskal", "0", "1", "-5"]).expect("Should parse");
        assert_eq!(cli.triplets, args(&["0", "1", "-5"]));
    }

    #[test]
    fn test_missing_algorithm_is_clap_error() {
        assert!(Cli::try_parse_from(["algotrace"]).is_err());
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let cli = Cli::try_parse_from([
            "algotrace", "dijkstra", "--source", "1", "--target", "2", "--log-level", "warn",
        ])
        .expect("Should parse");
        let config = cli.resolve_config().expect("Config should resolve");
        assert_eq!(config.run.source, 1);
        assert_eq!(config.run.target, 2);
        assert_eq!(config.run.start, 0);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_default_graph_triggers() {
        assert!(uses_default_graph(&[]));
        assert!(uses_default_graph(&args(&["0"])));
        assert!(!uses_default_graph(&args(&["00"])));
        assert!(!uses_default_graph(&args(&["0", "1", "2"])));

        let graph = graph_from_args(&args(&["0"])).expect("Sentinel should use default graph");
        assert_eq!(graph, WeightedGraph::default_example());
    }

    #[test]
    fn test_malformed_count_checked_before_numbers() {
        let err = graph_from_args(&args(&["0", "1", "x", "3"])).expect_err("Four values must fail");
        assert!(matches!(err, TraceError::MalformedGraphArgs { count: 4 }));
    }

    #[test]
    fn test_invalid_number() {
        let err = graph_from_args(&args(&["0", "1", "four"])).expect_err("Bad number must fail");
        assert!(matches!(err, TraceError::InvalidNumber { ref value } if value == "four"));
    }

    #[test]
    fn test_graph_errors_come_before_selector_errors() {
        let cli = Cli::try_parse_from(["algotrace", "bfs", "1", "2"]).expect("Should parse");
        let err = cli.to_request(&Config::default()).expect_err("Must fail");
        assert_eq!(err.kind(), "malformed_graph_args");

        let cli = Cli::try_parse_from(["algotrace", "bfs"]).expect("Should parse");
        let err = cli.to_request(&Config::default()).expect_err("Must fail");
        assert_eq!(err.kind(), "unknown_algorithm");
    }
}
