//! 集成测试共享工具模块
//!
//! 提供运行可执行文件和解析追踪输出的辅助函数

#![allow(dead_code)]

use std::process::{Command, Output};

use serde_json::Value;

/// 一次命令行运行的结果
pub struct CliRun {
    pub status: i32,
    pub stdout_lines: Vec<Value>,
    pub stderr_lines: Vec<Value>,
}

/// 运行 algotrace 可执行文件并逐行解析两个输出通道
pub fn run_cli(args: &[&str]) -> CliRun {
    let output: Output = Command::new(env!("CARGO_BIN_EXE_algotrace"))
        .args(args)
        .output()
        .expect("Failed to spawn algotrace binary");

    CliRun {
        status: output.status.code().expect("Process should exit with a code"),
        stdout_lines: parse_lines(&output.stdout),
        stderr_lines: parse_lines(&output.stderr),
    }
}

/// 每一行都必须能独立解析为 JSON
pub fn parse_lines(bytes: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(bytes)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e)))
        .collect()
}

/// 提取所有记录的 `type` 字段
pub fn kinds(records: &[Value]) -> Vec<String> {
    records
        .iter()
        .map(|r| r["type"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// 取出唯一的 final 记录
pub fn final_record(records: &[Value]) -> &Value {
    let finals: Vec<&Value> = records.iter().filter(|r| r["type"] == "final").collect();
    assert_eq!(finals.len(), 1, "expected exactly one final record");
    finals[0]
}

/// 把 JSON 数组转换成整数序列
pub fn as_i64_vec(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .expect("value should be an array")
        .iter()
        .map(|v| v.as_i64().expect("array item should be an integer"))
        .collect()
}
