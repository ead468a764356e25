//! MetroGraph - 地铁线网图引擎
//!
//! 把地铁线网建模为带权图，支持：
//! - 同线车站查询（只沿非换乘线段遍历）
//! - 按时间计算的最短路径（换乘按固定步行时间计费）
//! - 某条线路停运时的替代路径

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{DetachGuard, LineDownRouter, LineExplorer, PathFinder, Route};
pub use config::{DisruptionPolicy, GraphConfig, QueryConfig};
pub use error::{Error, Result};
pub use graph::{
    Segment, SegmentIdx, SegmentWeight, SharedTransitGraph, Station, StationId, StationIdx,
    TransitGraph, WALKING_TIME,
};
pub use import::{ImportStats, MetroLoader};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
