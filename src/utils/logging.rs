// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作。标准输出保留给追踪记录，
// 日志只会写到标准错误或滚动文件。

use crate::config::LogConfig;
use crate::core::{TraceError, TraceResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 级别为 `off` 时不启动任何 logger，`log` 宏保持为空操作。
///
/// # Arguments
/// * `config` - 日志配置
pub fn init(config: &LogConfig) -> TraceResult<()> {
    if config.level.eq_ignore_ascii_case("off") {
        return Ok(());
    }

    let logger = Logger::try_with_str(&config.level).map_err(to_config_error)?;
    let logger = if config.to_file {
        logger
            .log_to_file(
                FileSpec::default()
                    .basename(&config.file)
                    .directory(&config.dir),
            )
            .rotate(
                Criterion::Size(config.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.max_files),
            )
            .append()
    } else {
        logger.log_to_stderr()
    };

    let handle = logger
        .write_mode(WriteMode::Direct)
        .start()
        .map_err(to_config_error)?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::debug!("logger started at level {}", config.level);
    Ok(())
}

/// 刷新并关闭日志系统
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

fn to_config_error(err: flexi_logger::FlexiLoggerError) -> TraceError {
    TraceError::Config(format!("日志初始化失败: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 全局 logger 每个进程只能启动一次
    #[test]
    fn test_logging_init_and_shutdown() {
        init(&LogConfig::default()).expect("off level should never fail");
        assert!(!is_initialized());

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = LogConfig {
            level: "debug".to_string(),
            to_file: true,
            dir: dir.path().to_string_lossy().into_owned(),
            ..LogConfig::default()
        };

        let result = init(&config);
        assert!(result.is_ok(), "日志初始化失败: {:?}", result.err());
        assert!(is_initialized());

        log::info!("测试日志消息");

        shutdown();
        assert!(!is_initialized());
    }
}
