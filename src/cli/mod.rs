//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `stat`: SAM 比对结果转换为 valid pairs 并统计
//! - `cnv`: 拷贝数变异检测（尚未实现）
//! - `trans`: 染色体间/染色体内易位检测
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: stat, cnv, trans

pub mod cnv;
pub mod stat;
pub mod trans;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ExoC - 基于外显子捕获 Hi-C 的易位检测
#[derive(Parser, Debug)]
#[command(name = "exoc")]
#[command(author = "Evgeniy Mozheiko")]
#[command(version)]
#[command(about = "Translocation detection from exome capture Hi-C", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 所有子命令共享的运行参数
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// ExoC project root containing the bundled ExoC/ scripts
    #[arg(long, global = true, env = "EXOC_HOME")]
    pub home: Option<PathBuf>,

    /// R interpreter used for the translocation scripts
    #[arg(long, global = true, env = "EXOC_RSCRIPT", default_value = "Rscript")]
    pub rscript: String,

    /// Shell used for the bundled .sh scripts
    #[arg(long, global = true, env = "EXOC_SHELL", default_value = "bash")]
    pub shell: String,

    /// Print the commands that would run, without running them
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,

    /// Let scripts write to the terminal instead of <outdir>/logs/
    #[arg(long, global = true, default_value_t = false)]
    pub no_log: bool,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert SAM alignments to valid pairs and collect statistics
    Stat(stat::StatArgs),

    /// Call copy-number variation (not available yet)
    Cnv(cnv::CnvArgs),

    /// Detect inter- and intra-chromosomal translocations
    Trans(trans::TransArgs),
}
