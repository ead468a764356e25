//! 线网图数据结构
//!
//! 车站与线段各存放在一块扁平数组中，邻接表只保存下标，不持有对象

use super::segment::{Segment, SegmentIdx, SegmentWeight};
use super::station::{Adjacency, Station, StationId, StationIdx};
use crate::algorithm::{LineDownRouter, LineExplorer, PathFinder, Route};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::{trace, warn};

/// 线网图
#[derive(Debug, Clone)]
pub struct TransitGraph {
    /// 是否有向，创建后不可更改
    directed: bool,
    /// 车站注册表（插入顺序）
    stations: Vec<Station>,
    /// 线段存储（创建顺序）
    segments: Vec<Segment>,
    /// 车站编号到下标的映射
    by_id: HashMap<StationId, StationIdx>,
}

impl TransitGraph {
    /// 按配置创建空图
    pub fn new(config: GraphConfig) -> Self {
        Self {
            directed: config.directed,
            stations: Vec::new(),
            segments: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(GraphConfig::directed())
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(GraphConfig::undirected())
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 车站操作 ====================

    /// 添加车站
    pub fn insert_station(&mut self, id: StationId) -> StationIdx {
        self.push_station(id, None)
    }

    /// 添加带站名的车站
    pub fn insert_named_station(&mut self, id: StationId, name: impl Into<String>) -> StationIdx {
        self.push_station(id, Some(name.into()))
    }

    fn push_station(&mut self, id: StationId, name: Option<String>) -> StationIdx {
        let index = StationIdx(self.stations.len());
        self.stations
            .push(Station::new(id, index, self.directed).with_name(name));

        // 重复编号不拒绝，按编号查找时命中最先插入的车站
        if self.by_id.contains_key(&id) {
            warn!(station = %id, "重复的车站编号");
        } else {
            self.by_id.insert(id, index);
        }

        trace!(station = %id, index = index.0, "添加车站");
        index
    }

    /// 通过编号获取车站
    pub fn get_station(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id).map(|idx| &self.stations[idx.0])
    }

    /// 通过编号获取车站下标
    pub fn station_index(&self, id: StationId) -> Option<StationIdx> {
        self.by_id.get(&id).copied()
    }

    /// 通过编号获取车站下标，不存在时报错
    pub fn require_station(&self, id: StationId) -> Result<StationIdx> {
        self.station_index(id).ok_or(Error::StationNotFound(id))
    }

    /// 通过下标获取车站
    pub fn station(&self, idx: StationIdx) -> &Station {
        &self.stations[idx.0]
    }

    pub(crate) fn station_mut(&mut self, idx: StationIdx) -> &mut Station {
        &mut self.stations[idx.0]
    }

    /// 所有车站（插入顺序）
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// 获取车站数量
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    // ==================== 线段操作 ====================

    /// 获取 u -> v 的线段
    pub fn get_edge(&self, u: StationIdx, v: StationIdx) -> Option<&Segment> {
        self.stations[u.0]
            .outgoing()
            .get(&v)
            .map(|seg| &self.segments[seg.0])
    }

    /// 按车站编号获取 u -> v 的线段
    pub fn get_edge_between(&self, u: StationId, v: StationId) -> Result<Option<&Segment>> {
        let u = self.require_station(u)?;
        let v = self.require_station(v)?;
        Ok(self.get_edge(u, v))
    }

    /// 添加线段
    pub fn insert_edge(
        &mut self,
        u: StationIdx,
        v: StationIdx,
        weight: SegmentWeight,
    ) -> Result<SegmentIdx> {
        if self.get_edge(u, v).is_some() {
            return Err(Error::DuplicateEdge {
                tail: self.stations[u.0].id(),
                head: self.stations[v.0].id(),
            });
        }

        let index = SegmentIdx(self.segments.len());
        self.segments.push(Segment::new(index, u, v, weight));
        self.stations[u.0].outgoing_mut().insert(v, index);
        self.stations[v.0].incoming_mut().insert(u, index);

        trace!(
            tail = %self.stations[u.0].id(),
            head = %self.stations[v.0].id(),
            %weight,
            "添加线段"
        );
        Ok(index)
    }

    /// 按车站编号和原始权重添加线段（`-1` 表示换乘）
    pub fn connect(&mut self, u: StationId, v: StationId, raw_weight: i64) -> Result<SegmentIdx> {
        let weight = SegmentWeight::from_raw(raw_weight)?;
        let u = self.require_station(u)?;
        let v = self.require_station(v)?;
        self.insert_edge(u, v, weight)
    }

    /// 给定线段的一个端点，返回另一个端点
    pub fn opposite(&self, v: StationIdx, segment: SegmentIdx) -> Result<StationIdx> {
        let (tail, head) = self.segments[segment.0].endpoints();
        if tail == v {
            Ok(head)
        } else if head == v {
            Ok(tail)
        } else {
            Err(Error::NotIncident {
                station: self.stations[v.0].id(),
                segment,
            })
        }
    }

    /// 通过下标获取线段
    pub fn segment(&self, idx: SegmentIdx) -> &Segment {
        &self.segments[idx.0]
    }

    /// 所有线段（创建顺序）
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 获取线段数量
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    // ==================== 邻居查询 ====================

    /// 出边表
    pub fn outgoing(&self, idx: StationIdx) -> &Adjacency {
        self.stations[idx.0].outgoing()
    }

    /// 入边表
    pub fn incoming(&self, idx: StationIdx) -> &Adjacency {
        self.stations[idx.0].incoming()
    }

    // ==================== 查询 ====================

    /// 同线车站（默认配置）
    pub fn get_stations_on_same_line(&self, station: StationId) -> Result<Vec<StationId>> {
        LineExplorer::new(self).stations_on_same_line(station)
    }

    /// 最短路径（默认配置）
    pub fn find_shortest_path(&self, source: StationId, destination: StationId) -> Result<Route> {
        PathFinder::new(self).shortest_path(source, destination)
    }

    /// 线路停运时的最短路径（默认配置，整线停运）
    pub fn find_shortest_path_with_line_down(
        &mut self,
        source: StationId,
        destination: StationId,
        down: StationId,
    ) -> Result<Route> {
        LineDownRouter::new(self).shortest_path(source, destination, down)
    }

    /// 从邻接表中摘除一条线段（线段对象本身保留）
    pub(crate) fn unlink(&mut self, segment: SegmentIdx) {
        let (tail, head) = self.segments[segment.0].endpoints();
        self.stations[tail.0].outgoing_mut().shift_remove(&head);
        self.stations[head.0].incoming_mut().shift_remove(&tail);
    }
}
