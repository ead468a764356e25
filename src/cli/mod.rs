//! CLI 模块

mod printer;

pub use printer::{PrintMode, Printer};
