//! # cnv 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cnv.rs`

use clap::Args;
use std::path::PathBuf;

/// cnv 子命令参数
#[derive(Args, Debug, Clone)]
pub struct CnvArgs {
    /// Case sample bin matrix
    #[arg(long)]
    pub case: PathBuf,

    /// Control sample bin matrix
    #[arg(long)]
    pub control: PathBuf,

    /// Output directory (created if missing)
    #[arg(long)]
    pub outdir: PathBuf,

    /// Bin size in base pairs
    #[arg(long)]
    pub binsize: u64,

    /// Sample name used as prefix for output files
    #[arg(long)]
    pub name: String,
}
