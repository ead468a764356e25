//! 同线车站查询
//!
//! 只沿非换乘线段做广度优先遍历

use crate::error::Result;
use crate::graph::{StationId, StationIdx, TransitGraph};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// 同线车站查询器
pub struct LineExplorer<'g> {
    graph: &'g TransitGraph,
}

impl<'g> LineExplorer<'g> {
    /// 创建查询器
    pub fn new(graph: &'g TransitGraph) -> Self {
        Self { graph }
    }

    /// 与给定车站同线的所有车站，按 BFS 发现顺序，第一个元素总是起点
    pub fn stations_on_same_line(&self, station: StationId) -> Result<Vec<StationId>> {
        let start = self.graph.require_station(station)?;
        let members: Vec<StationId> = self
            .line_members(start)
            .into_iter()
            .map(|idx| self.graph.station(idx).id())
            .collect();

        debug!(station = %station, count = members.len(), "同线车站查询");
        Ok(members)
    }

    /// 同 `stations_on_same_line`，返回内部下标
    pub(crate) fn line_members(&self, start: StationIdx) -> Vec<StationIdx> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);

            for (&neighbor, &seg) in self.graph.outgoing(current) {
                if self.graph.segment(seg).weight().is_transfer() {
                    continue;
                }
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }
}
