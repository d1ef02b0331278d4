//! # 工具函数模块
//!
//! 提供美化输出、spinner、参数校验和运行记录等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `models/`, `runner/` 模块使用
//! - 子模块: output, progress, record, validate

pub mod output;
pub mod progress;
pub mod record;
pub mod validate;
