//! 图算法模块
//!
//! 包含同线车站查询、最短路径和线路停运模拟

mod line_down;
mod same_line;
mod shortest_path;

pub use line_down::{DetachGuard, LineDownRouter};
pub use same_line::LineExplorer;
pub use shortest_path::{PathFinder, Route};
