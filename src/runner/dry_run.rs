//! # dry-run 执行器
//!
//! 只打印命令行，不启动任何进程。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 创建
//! - 使用 `utils/output.rs`

use super::{Invocation, ScriptRunner};
use crate::error::Result;
use crate::utils::output;

/// 打印但不执行
#[derive(Debug)]
pub struct DryRunner;

impl ScriptRunner for DryRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        output::print_info(&format!("[DRY] {}", invocation.command_line()));
        Ok(())
    }
}
