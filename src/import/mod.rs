//! 数据导入模块
//!
//! 读取地铁线网文本文件：
//!
//! ```text
//! 376 933            <- 车站数 线段数
//! 0000 Abbesses      <- 车站编号 站名
//! 0001 Alexandre Dumas
//! $                  <- 车站与线段的分隔
//! 0 238 41           <- 起点 终点 秒数（-1 表示步行换乘）
//! ```

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::{StationId, TransitGraph};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub stations: usize,
    pub segments: usize,
    pub duration_ms: u64,
}

/// 当前所在的文件区段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Stations,
    Segments,
}

/// 线网文件加载器
#[derive(Debug, Default, Clone)]
pub struct MetroLoader {
    config: GraphConfig,
}

impl MetroLoader {
    /// 创建加载器（默认有向图）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置图配置
    pub fn with_config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// 从文件加载
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<(TransitGraph, ImportStats)> {
        let file = File::open(path.as_ref())?;
        let loaded = self.load_reader(BufReader::new(file))?;
        info!(
            path = %path.as_ref().display(),
            stations = loaded.1.stations,
            segments = loaded.1.segments,
            "线网加载完成"
        );
        Ok(loaded)
    }

    /// 从字符串加载
    pub fn load_str(&self, text: &str) -> Result<(TransitGraph, ImportStats)> {
        self.load_reader(text.as_bytes())
    }

    /// 从任意行读取器加载
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<(TransitGraph, ImportStats)> {
        let start = Instant::now();
        let mut graph = TransitGraph::new(self.config);
        let mut stats = ImportStats::default();
        let mut section = Section::Header;
        let mut declared: Option<(usize, usize)> = None;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match section {
                Section::Header => {
                    declared = parse_header(line);
                    if declared.is_none() {
                        warn!(line = line_no, "无法解析文件头，已忽略");
                    }
                    section = Section::Stations;
                }
                Section::Stations if line == "$" => section = Section::Segments,
                Section::Stations => {
                    let (id, name) = parse_station(line, line_no)?;
                    match name {
                        Some(name) => graph.insert_named_station(id, name),
                        None => graph.insert_station(id),
                    };
                    stats.stations += 1;
                }
                Section::Segments => {
                    let (tail, head, weight) = parse_segment(line, line_no)?;
                    graph.connect(tail, head, weight)?;
                    stats.segments += 1;
                }
            }
        }

        if let Some((stations, segments)) = declared {
            if stations != stats.stations || segments != stats.segments {
                warn!(
                    declared_stations = stations,
                    declared_segments = segments,
                    stations = stats.stations,
                    segments = stats.segments,
                    "文件头声明的数量与实际不符"
                );
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok((graph, stats))
    }
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let stations = parts.next()?.parse().ok()?;
    let segments = parts.next()?.parse().ok()?;
    Some((stations, segments))
}

fn parse_station(line: &str, line_no: usize) -> Result<(StationId, Option<String>)> {
    let (id, name) = match line.split_once(char::is_whitespace) {
        Some((id, name)) => (id, Some(name.trim().to_string())),
        None => (line, None),
    };
    let id = parse_id(id, line_no)?;
    Ok((id, name.filter(|n| !n.is_empty())))
}

fn parse_segment(line: &str, line_no: usize) -> Result<(StationId, StationId, i64)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::ParseError {
            line: line_no,
            message: format!("线段应为 \"起点 终点 权重\"，实际为 {:?}", line),
        });
    }

    let tail = parse_id(parts[0], line_no)?;
    let head = parse_id(parts[1], line_no)?;
    let weight = parts[2].parse::<i64>().map_err(|e| Error::ParseError {
        line: line_no,
        message: format!("无效的权重 {:?}: {}", parts[2], e),
    })?;
    Ok((tail, head, weight))
}

fn parse_id(raw: &str, line_no: usize) -> Result<StationId> {
    raw.parse::<u32>()
        .map(StationId::new)
        .map_err(|e| Error::ParseError {
            line: line_no,
            message: format!("无效的车站编号 {:?}: {}", raw, e),
        })
}
