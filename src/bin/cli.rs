//! MetroGraph 命令行工具
//!
//! 加载线网文件并执行同线车站 / 最短路径 / 线路停运查询

use anyhow::Context;
use clap::{Parser, Subcommand};
use metrograph::cli::{PrintMode, Printer};
use metrograph::config::{DisruptionPolicy, GraphConfig, QueryConfig};
use metrograph::graph::StationId;
use metrograph::{LineDownRouter, LineExplorer, MetroLoader, PathFinder, WALKING_TIME};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "metrograph")]
#[command(about = "地铁线网查询工具", version)]
struct Args {
    /// 线网文件
    #[arg(short, long, default_value = "metro.txt")]
    metro: PathBuf,

    /// 按无向图加载
    #[arg(long)]
    undirected: bool,

    /// 换乘步行时间（秒）
    #[arg(long, default_value_t = WALKING_TIME)]
    walking_time: u64,

    /// 停运策略: whole-line, single-station
    #[arg(long, default_value_t = DisruptionPolicy::WholeLine)]
    policy: DisruptionPolicy,

    /// 最短路径搜索时限（毫秒）
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 与 N1 同线的所有车站
    SameLine { n1: u32 },
    /// N1 到 N2 的最短路径
    Path { n1: u32, n2: u32 },
    /// N3 所在线路停运时 N1 到 N2 的最短路径
    LineDown { n1: u32, n2: u32, n3: u32 },
    /// 列出所有车站
    Stations,
    /// 列出所有线段
    Segments,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let graph_config = if args.undirected {
        GraphConfig::undirected()
    } else {
        GraphConfig::directed()
    };
    let mut query_config = QueryConfig::default()
        .with_walking_time(args.walking_time)
        .with_policy(args.policy);
    if let Some(ms) = args.deadline_ms {
        query_config = query_config.with_deadline(Duration::from_millis(ms));
    }

    let (mut graph, _stats) = MetroLoader::new()
        .with_config(graph_config)
        .load_file(&args.metro)
        .with_context(|| format!("无法加载线网文件 {}", args.metro.display()))?;

    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Text
    };

    let output = match args.command {
        Command::SameLine { n1 } => {
            let station = StationId::new(n1);
            let line = LineExplorer::new(&graph).stations_on_same_line(station)?;
            Printer::new(&graph, mode).print_line(station, &line)?
        }
        Command::Path { n1, n2 } => {
            let route = PathFinder::with_config(&graph, query_config)
                .shortest_path(StationId::new(n1), StationId::new(n2))?;
            Printer::new(&graph, mode).print_route(&route)?
        }
        Command::LineDown { n1, n2, n3 } => {
            let route = LineDownRouter::with_config(&mut graph, query_config).shortest_path(
                StationId::new(n1),
                StationId::new(n2),
                StationId::new(n3),
            )?;
            Printer::new(&graph, mode).print_route(&route)?
        }
        Command::Stations => Printer::new(&graph, mode).print_stations()?,
        Command::Segments => Printer::new(&graph, mode).print_segments()?,
    };

    print!("{}", output);
    Ok(())
}
