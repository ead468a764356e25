//! 线段定义
//!
//! 线段即图中的边：(起点, 终点) + 行驶时间或换乘哨兵值

use crate::error::{Error, Result};
use crate::graph::station::StationIdx;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 换乘步行时间（秒），哨兵权重的线段在计算路径代价时使用该值
pub const WALKING_TIME: u64 = 90;

/// 线段在创建顺序中的下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentIdx(pub usize);

impl SegmentIdx {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SegmentIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 线段权重
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentWeight {
    /// 同一线路上的行驶时间（秒）
    Travel(u64),
    /// 无显式时间：不同线路之间的步行换乘
    Transfer,
}

impl SegmentWeight {
    /// 外部数据中表示换乘的哨兵值
    pub const SENTINEL: i64 = -1;

    /// 从原始整数解析，`-1` 表示换乘
    pub fn from_raw(raw: i64) -> Result<Self> {
        match raw {
            Self::SENTINEL => Ok(SegmentWeight::Transfer),
            w if w >= 0 => Ok(SegmentWeight::Travel(w as u64)),
            w => Err(Error::InvalidWeight(w)),
        }
    }

    /// 转回原始整数
    pub fn raw(&self) -> i64 {
        match self {
            SegmentWeight::Travel(w) => *w as i64,
            SegmentWeight::Transfer => Self::SENTINEL,
        }
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, SegmentWeight::Transfer)
    }

    /// 路径代价；换乘替换为 `walking_time`，存储的权重不变
    pub fn cost(&self, walking_time: u64) -> u64 {
        match self {
            SegmentWeight::Travel(w) => *w,
            SegmentWeight::Transfer => walking_time,
        }
    }
}

impl fmt::Display for SegmentWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentWeight::Travel(w) => write!(f, "{}s", w),
            SegmentWeight::Transfer => write!(f, "transfer"),
        }
    }
}

/// 线段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// 创建顺序下标
    index: SegmentIdx,
    /// 起点
    tail: StationIdx,
    /// 终点
    head: StationIdx,
    /// 权重
    weight: SegmentWeight,
}

impl Segment {
    pub(crate) fn new(
        index: SegmentIdx,
        tail: StationIdx,
        head: StationIdx,
        weight: SegmentWeight,
    ) -> Self {
        Self {
            index,
            tail,
            head,
            weight,
        }
    }

    /// 获取下标
    pub fn index(&self) -> SegmentIdx {
        self.index
    }

    /// 获取起点
    pub fn tail(&self) -> StationIdx {
        self.tail
    }

    /// 获取终点
    pub fn head(&self) -> StationIdx {
        self.head
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (StationIdx, StationIdx) {
        (self.tail, self.head)
    }

    /// 获取权重
    pub fn weight(&self) -> SegmentWeight {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_from_raw() {
        assert_eq!(SegmentWeight::from_raw(60).unwrap(), SegmentWeight::Travel(60));
        assert_eq!(SegmentWeight::from_raw(0).unwrap(), SegmentWeight::Travel(0));
        assert_eq!(SegmentWeight::from_raw(-1).unwrap(), SegmentWeight::Transfer);
        assert!(matches!(
            SegmentWeight::from_raw(-5),
            Err(Error::InvalidWeight(-5))
        ));
    }

    #[test]
    fn test_transfer_cost_substitution() {
        let transfer = SegmentWeight::Transfer;
        assert_eq!(transfer.cost(WALKING_TIME), 90);
        assert_eq!(transfer.raw(), -1);
        assert_eq!(SegmentWeight::Travel(41).cost(WALKING_TIME), 41);
    }
}
