//! # 运行参数记录
//!
//! 运行前打印参数表，并写入 `<outdir>/<name>.<command>.params.tsv`，
//! 以及为每个脚本步骤分配日志文件路径。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/params.rs`
//! - 使用 `csv` 写入 TSV，`tabled` 打印表格

use crate::error::{ExocError, Result};
use crate::models::RunParams;

use std::path::{Path, PathBuf};
use tabled::Table;

/// 日志子目录
const LOG_DIR: &str = "logs";

/// 参数记录文件路径
pub fn params_path(run: &dyn RunParams) -> PathBuf {
    run.outdir()
        .join(format!("{}.{}.params.tsv", run.name(), run.command()))
}

/// 某个步骤的日志文件路径
pub fn log_path(outdir: &Path, name: &str, step: &str) -> PathBuf {
    outdir.join(LOG_DIR).join(format!("{}.{}.log", name, step))
}

/// 以表格形式打印参数
pub fn print_params(run: &dyn RunParams) {
    let table = Table::new(run.params());
    println!("{}\n", table);
}

/// 写出参数 TSV，返回文件路径
pub fn write_params(run: &dyn RunParams) -> Result<PathBuf> {
    let path = params_path(run);
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(&path)?;

    for row in run.params() {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| ExocError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParamRow;
    use std::fs;

    struct Fake {
        outdir: PathBuf,
    }

    impl RunParams for Fake {
        fn command(&self) -> &'static str {
            "trans"
        }
        fn name(&self) -> &str {
            "K562"
        }
        fn outdir(&self) -> &Path {
            &self.outdir
        }
        fn params(&self) -> Vec<ParamRow> {
            vec![
                ParamRow::new("binsize", 1_000_000),
                ParamRow::new("thr_frame", 0.5),
            ]
        }
    }

    #[test]
    fn test_write_params_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let run = Fake {
            outdir: dir.path().to_path_buf(),
        };

        let path = write_params(&run).unwrap();
        assert_eq!(path, dir.path().join("K562.trans.params.tsv"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "parameter\tvalue\nbinsize\t1000000\nthr_frame\t0.5\n");
    }

    #[test]
    fn test_log_path() {
        let p = log_path(Path::new("/data/out"), "K562", "inter_trans");
        assert_eq!(p, PathBuf::from("/data/out/logs/K562.inter_trans.log"));
    }
}
