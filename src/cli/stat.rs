//! # stat 子命令 CLI 定义
//!
//! SAM 比对文件转换为 valid pairs
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/stat.rs`

use clap::Args;
use std::path::PathBuf;

/// stat 子命令参数
#[derive(Args, Debug, Clone)]
pub struct StatArgs {
    /// SAM file with paired Hi-C alignments
    #[arg(long)]
    pub sam: PathBuf,

    /// Output directory (created if missing)
    #[arg(long)]
    pub outdir: PathBuf,

    /// Sample name used as prefix for output files
    #[arg(long)]
    pub name: String,
}
