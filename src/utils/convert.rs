use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use log::{error, info, warn};

use crate::config::ports::{AppConfig, ConversionPort};
use crate::models::conversion::{
    ConversionJob, ConversionOutcome, ConversionOutput, FailureKind, ProgressEvent,
};
use crate::utils::codec::{read_csv, write_parquet};
use crate::utils::scan::list_convertible;
use crate::utils::utils::create_progress_bar;

// 將 .csv 結尾替換為 .parquet，其餘檔名原樣保留
pub fn derive_output_name(file_name: &str) -> String {
    match file_name.strip_suffix(".csv") {
        Some(base) => format!("{}.parquet", base),
        None => format!("{}.parquet", file_name),
    }
}

// 依序轉換工作清單中的每個檔案；遇到第一個錯誤立即中止，
// 不重試、不清理已寫出的檔案。每完成一個檔案發出一次進度事件。
pub fn run(job: &ConversionJob, on_progress: &mut dyn FnMut(ProgressEvent)) -> ConversionOutcome {
    let start = Instant::now();
    let total = job.files.len();
    let mut completed = 0usize;

    for file_name in &job.files {
        let input_path = job.input_dir.join(file_name);
        let output_path = job.output_dir.join(derive_output_name(file_name));

        let mut df = match read_csv(&input_path) {
            Ok(df) => df,
            Err(e) => {
                error!("讀取檔案 {} 失敗：{}", input_path.display(), e);
                return ConversionOutcome::Failure {
                    failed_file: file_name.clone(),
                    kind: e.kind,
                    cause: e.message,
                };
            }
        };

        if let Err(e) = write_parquet(&mut df, &output_path) {
            error!("寫入檔案 {} 失敗：{}", output_path.display(), e);
            return ConversionOutcome::Failure {
                failed_file: file_name.clone(),
                kind: e.kind,
                cause: e.message,
            };
        }

        completed += 1;
        info!("已轉換：{} → {}", input_path.display(), output_path.display());
        on_progress(ProgressEvent {
            completed,
            total,
            elapsed_secs: start.elapsed().as_secs_f64(),
            current_file: file_name.clone(),
        });
    }

    ConversionOutcome::Success {
        total_converted: completed,
        elapsed_secs: start.elapsed().as_secs_f64(),
    }
}

// 腳本／CLI 模式的轉換適配器：掃描、建立輸出資料夾、同步執行整批轉換
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let input_dir = PathBuf::from(&config.input);
        let output_dir = PathBuf::from(&config.output);
        fs::create_dir_all(&output_dir)?;

        let files = list_convertible(&input_dir)?;
        if files.is_empty() {
            warn!("資料夾 {} 內找不到 CSV 檔案", input_dir.display());
            println!("找不到 CSV 檔案。");
            return Ok(ConversionOutput {
                output_dir: config.output,
                converted: 0,
                elapsed_secs: 0.0,
            });
        }

        let total = files.len();
        info!("正在處理 {} 個 CSV 檔案", total);

        let job = ConversionJob {
            input_dir,
            output_dir,
            files,
        };

        let pb = create_progress_bar(total as u64, config.no_progress);
        let outcome = run(&job, &mut |ev| {
            pb.set_message(format!("{}/{} 檔案已轉換：{}", ev.completed, ev.total, ev.current_file));
            pb.set_position(ev.completed as u64);
        });

        match outcome {
            ConversionOutcome::Success {
                total_converted,
                elapsed_secs,
            } => {
                pb.finish_with_message(format!(
                    "完成，共 {} 個檔案，耗時 {:.2} 秒",
                    total_converted, elapsed_secs
                ));
                Ok(ConversionOutput {
                    output_dir: config.output,
                    converted: total_converted,
                    elapsed_secs,
                })
            }
            ConversionOutcome::Failure {
                failed_file,
                kind,
                cause,
            } => {
                pb.abandon_with_message(format!("轉換 {} 失敗", failed_file));
                let error_kind = match kind {
                    FailureKind::Io => io::ErrorKind::Other,
                    FailureKind::Parse => io::ErrorKind::InvalidData,
                };
                Err(io::Error::new(
                    error_kind,
                    format!("轉換 {} 失敗：{}", failed_file, cause),
                ))
            }
        }
    }
}
