//! # 数据模型模块
//!
//! 定义各子命令经校验后的参数集合。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: options, params

pub mod options;
pub mod params;

pub use options::{CnvOptions, StatOptions, TransOptions};
pub use params::{ParamRow, RunParams};
