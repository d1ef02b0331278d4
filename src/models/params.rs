//! # 运行参数记录
//!
//! 参数以 `parameter/value` 行的形式展示为表格，并写入 `<outdir>/<name>.<command>.params.tsv`。
//!
//! ## 依赖关系
//! - 被 `models/options.rs`, `utils/record.rs` 使用
//! - 使用 `serde`, `tabled` 派生

use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

/// 单个参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ParamRow {
    #[tabled(rename = "Parameter")]
    pub parameter: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl ParamRow {
    pub fn new(parameter: &str, value: impl ToString) -> Self {
        Self {
            parameter: parameter.to_string(),
            value: value.to_string(),
        }
    }
}

/// 可记录的一次运行
pub trait RunParams {
    /// 子命令名
    fn command(&self) -> &'static str;
    /// 样本名
    fn name(&self) -> &str;
    /// 输出目录
    fn outdir(&self) -> &Path;
    /// 所有参数，按命令行顺序
    fn params(&self) -> Vec<ParamRow>;
}
