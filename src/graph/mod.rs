//! 图核心模块
//!
//! 定义车站、线段和线网图的核心数据结构

mod graph;
mod segment;
mod shared;
mod station;

pub use graph::TransitGraph;
pub use segment::{Segment, SegmentIdx, SegmentWeight, WALKING_TIME};
pub use shared::SharedTransitGraph;
pub use station::{Adjacency, Station, StationId, StationIdx};
