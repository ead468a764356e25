//! 线路停运模拟
//!
//! 临时摘除停运线路上所有车站的线段，计算替代路径后原样恢复

use crate::algorithm::same_line::LineExplorer;
use crate::algorithm::shortest_path::{PathFinder, Route};
use crate::config::{DisruptionPolicy, QueryConfig};
use crate::error::Result;
use crate::graph::{Adjacency, SegmentIdx, StationId, StationIdx, TransitGraph};
use indexmap::{IndexMap, IndexSet};
use std::ops::Deref;
use tracing::debug;

/// 摘除守卫
///
/// 创建时记录受影响车站的邻接表并摘除线段，析构时把记录原样写回。
/// 无论持有期间的查询成功、出错还是 panic，图都会恢复。
pub struct DetachGuard<'g> {
    graph: &'g mut TransitGraph,
    saved: IndexMap<StationIdx, (Adjacency, Adjacency)>,
    detached: Vec<SegmentIdx>,
}

impl<'g> DetachGuard<'g> {
    /// 摘除与 `stations` 相连的所有线段（出边和入边）
    pub fn detach(graph: &'g mut TransitGraph, stations: &[StationIdx]) -> Self {
        let mut detached: IndexSet<SegmentIdx> = IndexSet::new();
        for &idx in stations {
            detached.extend(graph.outgoing(idx).values().copied());
            detached.extend(graph.incoming(idx).values().copied());
        }

        // 先保存所有端点的邻接表，再动手修改
        let mut saved: IndexMap<StationIdx, (Adjacency, Adjacency)> = IndexMap::new();
        for &seg in &detached {
            let (tail, head) = graph.segment(seg).endpoints();
            for idx in [tail, head] {
                saved
                    .entry(idx)
                    .or_insert_with(|| graph.station(idx).snapshot());
            }
        }

        for &seg in &detached {
            graph.unlink(seg);
        }

        debug!(
            stations = stations.len(),
            segments = detached.len(),
            "摘除线段"
        );

        Self {
            graph,
            saved,
            detached: detached.into_iter().collect(),
        }
    }

    /// 被摘除的线段
    pub fn detached(&self) -> &[SegmentIdx] {
        &self.detached
    }
}

impl Deref for DetachGuard<'_> {
    type Target = TransitGraph;

    fn deref(&self) -> &TransitGraph {
        &*self.graph
    }
}

impl Drop for DetachGuard<'_> {
    fn drop(&mut self) {
        for (idx, adjacency) in self.saved.drain(..) {
            self.graph.station_mut(idx).restore(adjacency);
        }
        debug!(segments = self.detached.len(), "恢复线段");
    }
}

/// 停运路径规划器
pub struct LineDownRouter<'g> {
    graph: &'g mut TransitGraph,
    config: QueryConfig,
}

impl<'g> LineDownRouter<'g> {
    pub fn new(graph: &'g mut TransitGraph) -> Self {
        Self::with_config(graph, QueryConfig::default())
    }

    pub fn with_config(graph: &'g mut TransitGraph, config: QueryConfig) -> Self {
        Self { graph, config }
    }

    /// `down` 所在线路停运时，`source` 到 `destination` 的最短路径
    pub fn shortest_path(
        self,
        source: StationId,
        destination: StationId,
        down: StationId,
    ) -> Result<Route> {
        let s = self.graph.require_station(source)?;
        let d = self.graph.require_station(destination)?;
        let down_idx = self.graph.require_station(down)?;

        let members = match self.config.policy {
            DisruptionPolicy::WholeLine => {
                LineExplorer::new(&*self.graph).line_members(down_idx)
            }
            DisruptionPolicy::SingleStation => vec![down_idx],
        };
        debug!(
            down = %down,
            policy = %self.config.policy,
            members = members.len(),
            "停运车站已确定"
        );

        let guard = DetachGuard::detach(self.graph, &members);
        let route = PathFinder::with_config(&guard, self.config).shortest_path_between(s, d);
        drop(guard);

        route
    }
}
