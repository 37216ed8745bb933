//! 对外接口：命令行参数解析与运行流程

pub mod cli;
pub mod runner;

pub use cli::{graph_from_args, uses_default_graph, Cli};
pub use runner::{run, RunOutcome, RunRequest};
