//! # trans 子命令 CLI 定义
//!
//! 染色体间/染色体内易位检测
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/trans.rs`

use clap::Args;
use std::path::PathBuf;

/// trans 子命令参数
#[derive(Args, Debug, Clone)]
pub struct TransArgs {
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

    /// Frame threshold for calling translocation candidates
    #[arg(long = "thr_frame", alias = "thr-frame")]
    pub thr_frame: f64,
}
