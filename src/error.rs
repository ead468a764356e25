//! 错误类型定义

use crate::graph::{SegmentIdx, StationId};
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("车站不存在: {0}")]
    StationNotFound(StationId),

    #[error("线段已存在: {tail} -> {head}")]
    DuplicateEdge { tail: StationId, head: StationId },

    #[error("车站 {station} 不是线段 {segment} 的端点")]
    NotIncident {
        station: StationId,
        segment: SegmentIdx,
    },

    #[error("无效的线段权重: {0}")]
    InvalidWeight(i64),

    #[error("解析错误 (第 {line} 行): {message}")]
    ParseError { line: usize, message: String },

    #[error("最短路径搜索超时: {0:?}")]
    DeadlineExceeded(Duration),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
