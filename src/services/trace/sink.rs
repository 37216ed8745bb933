//! 追踪输出端
//!
//! 算法只和 `TraceSink` 打交道，不关心记录最终写到哪里。

use std::io::Write;

use super::event::TraceRecord;
use crate::core::TraceResult;

/// 追踪记录的接收端
pub trait TraceSink {
    fn write_record(&mut self, record: &TraceRecord) -> TraceResult<()>;
}

/// 每条记录一行 JSON，写完立即 flush
///
/// 通过管道读取输出的一方可以在运行过程中逐行渲染。
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn write_record(&mut self, record: &TraceRecord) -> TraceResult<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// 把记录收集在内存中
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<TraceRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }
}

impl TraceSink for MemorySink {
    fn write_record(&mut self, record: &TraceRecord) -> TraceResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// 丢弃所有记录
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn write_record(&mut self, _record: &TraceRecord) -> TraceResult<()> {
        Ok(())
    }
}
