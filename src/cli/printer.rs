//! 结果打印器
//!
//! 提供纯文本表格和 JSON 两种输出

use crate::algorithm::Route;
use crate::error::Result;
use crate::graph::{StationId, TransitGraph};
use colored::Colorize;
use prettytable::{format, row, Table};
use serde_json::json;

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 文本模式
    Text,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer<'g> {
    graph: &'g TransitGraph,
    mode: PrintMode,
}

impl<'g> Printer<'g> {
    pub fn new(graph: &'g TransitGraph, mode: PrintMode) -> Self {
        Self { graph, mode }
    }

    /// 打印同线车站
    pub fn print_line(&self, station: StationId, line: &[StationId]) -> Result<String> {
        match self.mode {
            PrintMode::Json => Ok(serde_json::to_string_pretty(&json!({
                "station": station,
                "line": line,
            }))?),
            PrintMode::Text => Ok(format!(
                "{} {}\n",
                "Line:".bold(),
                self.join_stations(line)
            )),
        }
    }

    /// 打印路径
    pub fn print_route(&self, route: &Route) -> Result<String> {
        match self.mode {
            PrintMode::Json => Ok(serde_json::to_string_pretty(route)?),
            PrintMode::Text if route.is_empty() => Ok(format!("{}\n", "No path found".yellow())),
            PrintMode::Text => Ok(format!(
                "{} {}\n{} {}\n",
                "Time:".bold(),
                route.total_seconds,
                "Path:".bold(),
                self.join_stations(&route.stations)
            )),
        }
    }

    /// 打印全部车站
    pub fn print_stations(&self) -> Result<String> {
        if self.mode == PrintMode::Json {
            let rows: Vec<_> = self
                .graph
                .stations()
                .iter()
                .map(|s| {
                    json!({
                        "id": s.id(),
                        "name": s.name(),
                        "out_degree": s.out_degree(),
                        "in_degree": s.in_degree(),
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&rows)?);
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Index", "Station", "Name", "Out", "In"]);
        for s in self.graph.stations() {
            table.add_row(row![
                s.index().as_usize(),
                s.id(),
                s.name().unwrap_or("-"),
                s.out_degree(),
                s.in_degree()
            ]);
        }
        Ok(format!(
            "{}{} station(s)\n",
            table,
            self.graph.station_count()
        ))
    }

    /// 打印全部线段
    pub fn print_segments(&self) -> Result<String> {
        if self.mode == PrintMode::Json {
            let rows: Vec<_> = self
                .graph
                .segments()
                .iter()
                .map(|seg| {
                    json!({
                        "index": seg.index().as_usize(),
                        "tail": self.graph.station(seg.tail()).id(),
                        "head": self.graph.station(seg.head()).id(),
                        "weight": seg.weight().raw(),
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&rows)?);
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Index", "From", "To", "Weight"]);
        for seg in self.graph.segments() {
            table.add_row(row![
                seg.index().as_usize(),
                self.graph.station(seg.tail()).id(),
                self.graph.station(seg.head()).id(),
                seg.weight()
            ]);
        }
        Ok(format!(
            "{}{} segment(s)\n",
            table,
            self.graph.segment_count()
        ))
    }

    fn join_stations(&self, stations: &[StationId]) -> String {
        stations
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> TransitGraph {
        let mut graph = TransitGraph::directed();
        graph.insert_named_station(StationId::new(1), "Abbesses");
        graph.insert_station(StationId::new(2));
        graph
            .connect(StationId::new(1), StationId::new(2), -1)
            .unwrap();
        graph
    }

    #[test]
    fn test_print_route_text() {
        colored::control::set_override(false);
        let graph = create_test_graph();
        let printer = Printer::new(&graph, PrintMode::Text);

        let route = Route {
            stations: vec![StationId::new(1), StationId::new(2)],
            total_seconds: 90,
        };
        assert_eq!(printer.print_route(&route).unwrap(), "Time: 90\nPath: 1 2\n");
        assert_eq!(
            printer.print_route(&Route::unreachable()).unwrap(),
            "No path found\n"
        );
    }

    #[test]
    fn test_print_route_json() {
        let graph = create_test_graph();
        let printer = Printer::new(&graph, PrintMode::Json);

        let route = Route {
            stations: vec![StationId::new(1), StationId::new(2)],
            total_seconds: 90,
        };
        let value: serde_json::Value =
            serde_json::from_str(&printer.print_route(&route).unwrap()).unwrap();
        assert_eq!(value["stations"], json!([1, 2]));
        assert_eq!(value["total_seconds"], json!(90));
    }

    #[test]
    fn test_print_tables() {
        let graph = create_test_graph();
        let printer = Printer::new(&graph, PrintMode::Text);

        let stations = printer.print_stations().unwrap();
        assert!(stations.contains("Abbesses"));
        assert!(stations.ends_with("2 station(s)\n"));

        let segments = printer.print_segments().unwrap();
        assert!(segments.contains("transfer"));
        assert!(segments.ends_with("1 segment(s)\n"));

        let json = Printer::new(&graph, PrintMode::Json).print_segments().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["weight"], json!(-1));
    }
}
