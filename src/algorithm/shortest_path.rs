//! 最短路径算法
//!
//! Dijkstra，换乘线段按固定步行时间计费

use crate::config::QueryConfig;
use crate::error::{Error, Result};
use crate::graph::{StationId, StationIdx, TransitGraph};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::time::Instant;
use tracing::debug;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Route {
    /// 路径上的车站序列；不可达时为空
    pub stations: Vec<StationId>,
    /// 总耗时（秒）
    pub total_seconds: u64,
}

impl Route {
    /// 不可达
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// 经过的车站数
    pub fn len(&self) -> usize {
        self.stations.len()
    }
}

/// 车站的距离标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    /// 尚未到达
    Unreached,
    /// 暂定距离，仍在队列中
    Open(u64),
    /// 已出队，距离确定
    Settled(u64),
}

/// 路径查找器
pub struct PathFinder<'g> {
    graph: &'g TransitGraph,
    config: QueryConfig,
}

impl<'g> PathFinder<'g> {
    /// 使用默认配置创建
    pub fn new(graph: &'g TransitGraph) -> Self {
        Self::with_config(graph, QueryConfig::default())
    }

    pub fn with_config(graph: &'g TransitGraph, config: QueryConfig) -> Self {
        Self { graph, config }
    }

    /// 两站之间的最短路径；不可达时返回空路径
    pub fn shortest_path(&self, source: StationId, destination: StationId) -> Result<Route> {
        let s = self.graph.require_station(source)?;
        let d = self.graph.require_station(destination)?;
        self.shortest_path_between(s, d)
    }

    pub(crate) fn shortest_path_between(
        &self,
        source: StationIdx,
        destination: StationIdx,
    ) -> Result<Route> {
        let started = Instant::now();
        let n = self.graph.station_count();
        let mut labels = vec![Label::Unreached; n];
        let mut previous: Vec<Option<StationIdx>> = vec![None; n];
        // 距离相同时下标小的先出队，保证结果确定
        let mut queue: PriorityQueue<StationIdx, Reverse<(u64, StationIdx)>> =
            PriorityQueue::new();

        labels[source.0] = Label::Open(0);
        queue.push(source, Reverse((0, source)));

        while let Some((current, Reverse((dist, _)))) = queue.pop() {
            if let Some(limit) = self.config.deadline {
                if started.elapsed() >= limit {
                    return Err(Error::DeadlineExceeded(limit));
                }
            }

            labels[current.0] = Label::Settled(dist);
            if current == destination {
                let route = self.reconstruct_path(&previous, destination, dist);
                debug!(
                    source = %self.graph.station(source).id(),
                    destination = %self.graph.station(destination).id(),
                    hops = route.len(),
                    seconds = route.total_seconds,
                    "最短路径"
                );
                return Ok(route);
            }

            for (&neighbor, &seg) in self.graph.outgoing(current) {
                let cost = self
                    .graph
                    .segment(seg)
                    .weight()
                    .cost(self.config.walking_time);
                let candidate = dist.saturating_add(cost);

                let improves = match labels[neighbor.0] {
                    Label::Unreached => true,
                    Label::Open(known) => candidate < known,
                    Label::Settled(_) => false,
                };
                if improves {
                    labels[neighbor.0] = Label::Open(candidate);
                    previous[neighbor.0] = Some(current);
                    // 已在队列中时 push 只更新优先级
                    queue.push(neighbor, Reverse((candidate, neighbor)));
                }
            }
        }

        debug!(
            source = %self.graph.station(source).id(),
            destination = %self.graph.station(destination).id(),
            "不可达"
        );
        Ok(Route::unreachable())
    }

    /// 沿前驱回溯重构路径
    fn reconstruct_path(
        &self,
        previous: &[Option<StationIdx>],
        destination: StationIdx,
        total_seconds: u64,
    ) -> Route {
        let mut stations = vec![self.graph.station(destination).id()];
        let mut current = destination;

        while let Some(prev) = previous[current.0] {
            stations.push(self.graph.station(prev).id());
            current = prev;
        }
        stations.reverse();

        Route {
            stations,
            total_seconds,
        }
    }
}
