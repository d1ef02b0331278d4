//! # cnv 命令实现
//!
//! CNV 检测模块尚未提供：校验参数后只打印提示，不启动任何外部脚本。
//!
//! ## 依赖关系
//! - 使用 `cli/cnv.rs` 定义的参数
//! - 使用 `models/options.rs`, `utils/output.rs`

use crate::cli::cnv::CnvArgs;
use crate::cli::GlobalArgs;
use crate::error::Result;
use crate::models::{CnvOptions, RunParams};
use crate::utils::output;

/// 执行 cnv 命令
pub fn execute(args: &CnvArgs, global: &GlobalArgs) -> Result<()> {
    output::print_header("ExoC cnv: copy-number variation");

    let opts = CnvOptions::validate(args, !global.dry_run)?;
    run_cnv(&opts);

    Ok(())
}

pub fn run_cnv(opts: &CnvOptions) {
    output::print_warning(&format!(
        "CNV module missing, nothing to run for sample '{}'",
        opts.name()
    ));
}
