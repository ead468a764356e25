//! 配置
//!
//! 图的构建模式与查询参数

use crate::graph::WALKING_TIME;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// 图构建配置，创建后固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// 是否有向
    pub directed: bool,
}

impl GraphConfig {
    pub fn directed() -> Self {
        Self { directed: true }
    }

    pub fn undirected() -> Self {
        Self { directed: false }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::directed()
    }
}

/// 线路停运时摘除哪些车站的线段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisruptionPolicy {
    /// 整条线路上的所有车站
    #[default]
    WholeLine,
    /// 仅指定的车站
    SingleStation,
}

impl FromStr for DisruptionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whole-line" | "line" => Ok(DisruptionPolicy::WholeLine),
            "single-station" | "station" => Ok(DisruptionPolicy::SingleStation),
            other => Err(format!("未知的停运策略: {}", other)),
        }
    }
}

impl fmt::Display for DisruptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisruptionPolicy::WholeLine => write!(f, "whole-line"),
            DisruptionPolicy::SingleStation => write!(f, "single-station"),
        }
    }
}

/// 查询配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// 换乘线段的替代代价（秒）
    pub walking_time: u64,
    /// 停运策略
    pub policy: DisruptionPolicy,
    /// 最短路径搜索的时限
    pub deadline: Option<Duration>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            walking_time: WALKING_TIME,
            policy: DisruptionPolicy::default(),
            deadline: None,
        }
    }
}

impl QueryConfig {
    /// 设置换乘代价
    pub fn with_walking_time(mut self, seconds: u64) -> Self {
        self.walking_time = seconds;
        self
    }

    /// 设置停运策略
    pub fn with_policy(mut self, policy: DisruptionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 设置搜索时限
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
