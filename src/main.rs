//! # ExoC - 基于外显子捕获 Hi-C 的易位检测
//!
//! 命令行入口：校验参数，定位随包分发的脚本，并以子进程方式调用它们。
//! 统计与检测计算全部在外部 shell / R 脚本中完成。
//!
//! ## 子命令
//! - `stat`  - SAM 比对转换为 valid pairs (`sam_to_valid_pairs.sh`)
//! - `cnv`   - 拷贝数变异检测（尚未提供）
//! - `trans` - 易位检测 (`inter_trans.R`, `intra_trans.R`)
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── models/    (校验后的参数集合)
//!   │     ├── scripts/   (脚本资源定位)
//!   │     └── runner/    (子进程执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod runner;
mod scripts;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
