//! # stat 命令实现
//!
//! 调用 `sam_to_valid_pairs.sh` 将 SAM 比对转换为 valid pairs。
//!
//! ## 依赖关系
//! - 使用 `cli/stat.rs` 定义的参数
//! - 使用 `models/options.rs`, `scripts/`, `runner/`

use super::{record_run, with_log};
use crate::cli::stat::StatArgs;
use crate::cli::GlobalArgs;
use crate::error::Result;
use crate::models::{RunParams, StatOptions};
use crate::runner::{Invocation, ScriptRunner};
use crate::scripts::{Script, ScriptLocator};
use crate::utils::output;

use std::path::Path;

/// 执行 stat 命令
pub fn execute(args: &StatArgs, global: &GlobalArgs, runner: &mut dyn ScriptRunner) -> Result<()> {
    output::print_header("ExoC stat: SAM -> valid pairs");

    let opts = StatOptions::validate(args, !global.dry_run)?;
    let locator = ScriptLocator::resolve(global.home.as_deref())?;

    run_stat(&opts, &locator, global, runner)
}

/// 运行转换脚本：`<shell> <script> <sam> <outdir> <name>`
pub fn run_stat(
    opts: &StatOptions,
    locator: &ScriptLocator,
    global: &GlobalArgs,
    runner: &mut dyn ScriptRunner,
) -> Result<()> {
    let script = locator.locate(Script::SamToValidPairs)?;
    record_run(opts, global)?;

    let invocation = with_log(stat_invocation(opts, &script, &global.shell), opts, global);
    runner.run(&invocation)?;

    output::print_done(&format!(
        "Done! Find your stat results from {}",
        opts.outdir().display()
    ));

    Ok(())
}

fn stat_invocation(opts: &StatOptions, script: &Path, shell: &str) -> Invocation {
    Invocation::new(Script::SamToValidPairs.step(), shell)
        .arg(script)
        .arg(opts.sam())
        .arg(opts.outdir())
        .arg(opts.name())
}
