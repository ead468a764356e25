//! 多线程共享的线网图
//!
//! 读查询持读锁；停运模拟在摘除 -> 计算 -> 恢复整个窗口内持写锁，
//! 其他线程不会看到摘除了一半的图

use super::graph::TransitGraph;
use super::station::StationId;
use crate::algorithm::{LineDownRouter, LineExplorer, PathFinder, Route};
use crate::config::QueryConfig;
use crate::error::Result;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// 共享线网图句柄
#[derive(Clone)]
pub struct SharedTransitGraph {
    inner: Arc<RwLock<TransitGraph>>,
}

impl SharedTransitGraph {
    pub fn new(graph: TransitGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 获取读锁
    pub fn read(&self) -> RwLockReadGuard<'_, TransitGraph> {
        self.inner.read()
    }

    /// 同线车站
    pub fn stations_on_same_line(&self, station: StationId) -> Result<Vec<StationId>> {
        let graph = self.inner.read();
        LineExplorer::new(&graph).stations_on_same_line(station)
    }

    /// 最短路径
    pub fn find_shortest_path(
        &self,
        source: StationId,
        destination: StationId,
        config: &QueryConfig,
    ) -> Result<Route> {
        let graph = self.inner.read();
        PathFinder::with_config(&graph, config.clone()).shortest_path(source, destination)
    }

    /// 线路停运时的最短路径
    pub fn find_shortest_path_with_line_down(
        &self,
        source: StationId,
        destination: StationId,
        down: StationId,
        config: &QueryConfig,
    ) -> Result<Route> {
        let mut graph = self.inner.write();
        LineDownRouter::with_config(&mut graph, config.clone())
            .shortest_path(source, destination, down)
    }
}

impl From<TransitGraph> for SharedTransitGraph {
    fn from(graph: TransitGraph) -> Self {
        Self::new(graph)
    }
}
