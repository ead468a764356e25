//! 车站定义
//!
//! 车站即图中的顶点：外部可见的整数编号 + 内部稠密下标 + 出/入邻接表

use crate::graph::segment::SegmentIdx;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 车站编号（由调用方提供，引擎不会重新分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl StationId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for StationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 车站在注册表中的内部下标（按插入顺序递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationIdx(pub usize);

impl StationIdx {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// 邻接表：相邻车站下标 -> 线段下标，保持插入顺序
pub type Adjacency = IndexMap<StationIdx, SegmentIdx>;

/// 车站
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// 车站编号
    id: StationId,
    /// 内部下标
    index: StationIdx,
    /// 站名（可选）
    name: Option<String>,
    /// 图是否有向；无向图中入边表与出边表是同一张表
    directed: bool,
    /// 出边
    outgoing: Adjacency,
    /// 入边（仅有向图使用）
    incoming: Adjacency,
}

impl Station {
    /// 创建新车站
    pub(crate) fn new(id: StationId, index: StationIdx, directed: bool) -> Self {
        Self {
            id,
            index,
            name: None,
            directed,
            outgoing: Adjacency::new(),
            incoming: Adjacency::new(),
        }
    }

    pub(crate) fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// 获取车站编号
    pub fn id(&self) -> StationId {
        self.id
    }

    /// 获取内部下标
    pub fn index(&self) -> StationIdx {
        self.index
    }

    /// 获取站名
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 出边表
    pub fn outgoing(&self) -> &Adjacency {
        &self.outgoing
    }

    /// 入边表
    pub fn incoming(&self) -> &Adjacency {
        if self.directed {
            &self.incoming
        } else {
            &self.outgoing
        }
    }

    pub(crate) fn outgoing_mut(&mut self) -> &mut Adjacency {
        &mut self.outgoing
    }

    pub(crate) fn incoming_mut(&mut self) -> &mut Adjacency {
        if self.directed {
            &mut self.incoming
        } else {
            &mut self.outgoing
        }
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// 入度
    pub fn in_degree(&self) -> usize {
        self.incoming().len()
    }

    /// 取出两张邻接表的原始内容（用于临时摘除后原样放回）
    pub(crate) fn snapshot(&self) -> (Adjacency, Adjacency) {
        (self.outgoing.clone(), self.incoming.clone())
    }

    pub(crate) fn restore(&mut self, (outgoing, incoming): (Adjacency, Adjacency)) {
        self.outgoing = outgoing;
        self.incoming = incoming;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_station_aliases_incoming() {
        let mut s = Station::new(StationId::new(7), StationIdx(0), false);
        s.outgoing_mut().insert(StationIdx(1), SegmentIdx(0));

        assert_eq!(s.incoming().get(&StationIdx(1)), Some(&SegmentIdx(0)));
        assert_eq!(s.in_degree(), 1);
        assert_eq!(s.out_degree(), 1);
    }

    #[test]
    fn test_directed_station_keeps_relations_apart() {
        let mut s = Station::new(StationId::new(7), StationIdx(0), true);
        s.outgoing_mut().insert(StationIdx(1), SegmentIdx(0));
        s.incoming_mut().insert(StationIdx(2), SegmentIdx(1));

        assert_eq!(s.outgoing().len(), 1);
        assert_eq!(s.incoming().get(&StationIdx(2)), Some(&SegmentIdx(1)));
        assert!(s.incoming().get(&StationIdx(1)).is_none());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut s = Station::new(StationId::new(1), StationIdx(0), true)
            .with_name(Some("Abbesses".to_string()));
        s.outgoing_mut().insert(StationIdx(3), SegmentIdx(4));
        let before = s.clone();
        let snap = s.snapshot();

        s.outgoing_mut().clear();
        s.restore(snap);

        assert_eq!(s, before);
        assert_eq!(s.name(), Some("Abbesses"));
    }
}
