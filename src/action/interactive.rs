use dialoguer::{Confirm, Input, Select};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::conversion::{ConversionJob, ConversionOutcome, ProgressEvent};
use crate::utils::convert::run;
use crate::utils::preview::preview_head;
use crate::utils::scan::list_convertible;
use crate::utils::utils::{create_progress_bar, setup_logging};

// 互動模式：資料夾提示以 CLI 參數作為預設值，--no-progress 與 --log-level 照常生效。
// 取消執行時回傳 None。
pub fn process_interactive_mode(cli: Cli) -> io::Result<Option<String>> {
    setup_logging(&cli.log_level)?;
    println!("=== 歡迎使用互動模式 ===");
    let input = get_input_folder(&cli.input)?;

    let files = list_convertible(Path::new(&input))?;
    if files.is_empty() {
        println!("找不到 CSV 檔案。");
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("資料夾 '{}' 內沒有 CSV 檔案", input),
        ));
    }
    println!("資料夾內的 CSV 檔案：");
    for file in &files {
        println!("  {}", file);
    }

    preview_loop(&input, &files)?;

    let output = get_output_folder(&cli.output)?;
    let config_port: Box<dyn ConfigPort> = Box::new(InteractiveConfigAdapter::new(
        input,
        output,
        cli.no_progress,
        cli.log_level,
    ));
    let config = config_port.get_config()?;

    let start = Confirm::new()
        .with_prompt(format!("開始將 {} 個檔案轉換為 Parquet？", files.len()))
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("轉換確認失敗: {}", e)))?;
    if !start {
        println!("已取消轉換。");
        return Ok(None);
    }

    run_with_progress(config, files).map(Some)
}

pub fn get_input_folder(default: &str) -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入 CSV 資料夾路徑（例如：./data）")
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() {
                Ok(())
            } else {
                Err(format!("資料夾 '{}' 不存在", input))
            }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_folder(default: &str) -> io::Result<String> {
    Input::new()
        .with_prompt("輸入 Parquet 輸出資料夾（例如：./parquet）")
        .default(default.to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

// 重複提供預覽直到使用者不再需要；預覽失敗只顯示訊息，不中斷流程
fn preview_loop(input: &str, files: &[String]) -> io::Result<()> {
    loop {
        let wants_preview = Confirm::new()
            .with_prompt("是否預覽檔案內容？")
            .default(false)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預覽選項輸入失敗: {}", e)))?;
        if !wants_preview {
            return Ok(());
        }
        let index = Select::new()
            .with_prompt("選擇要預覽的檔案（使用方向鍵選擇，按 Enter 確認）")
            .items(files)
            .default(0)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("檔案選擇失敗: {}", e)))?;
        println!("{}", preview_head(&Path::new(input).join(&files[index])));
    }
}

// 轉換在工作執行緒上阻塞執行，進度事件經由通道送回；
// 進度條狀態只在呈現端這一側更新
fn run_with_progress(config: AppConfig, files: Vec<String>) -> io::Result<String> {
    fs::create_dir_all(&config.output)?;
    let total = files.len();
    let job = ConversionJob {
        input_dir: PathBuf::from(&config.input),
        output_dir: PathBuf::from(&config.output),
        files,
    };

    let (tx, rx) = mpsc::channel::<ProgressEvent>();
    let worker = thread::spawn(move || run(&job, &mut |ev| {
        let _ = tx.send(ev);
    }));

    let pb = create_progress_bar(total as u64, config.no_progress);
    for ev in rx {
        pb.set_position(ev.completed as u64);
        pb.set_message(format!(
            "{}/{} 檔案已轉換，耗時 {:.1} 秒",
            ev.completed, ev.total, ev.elapsed_secs
        ));
    }

    let outcome = worker
        .join()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "轉換執行緒異常結束"))?;

    match outcome {
        ConversionOutcome::Success {
            total_converted,
            elapsed_secs,
        } => {
            pb.finish_with_message(format!("完成！耗時 {:.2} 秒", elapsed_secs));
            println!(
                "全部 CSV 檔案已轉換至：{}\n共 {} 個檔案，總耗時：{:.2} 秒",
                config.output, total_converted, elapsed_secs
            );
            Ok(config.output)
        }
        ConversionOutcome::Failure {
            failed_file, cause, ..
        } => {
            pb.abandon_with_message(format!("轉換 {} 失敗", failed_file));
            // 已轉換完成的檔案保留在輸出資料夾，不回滾
            eprintln!("轉換 {} 失敗。\n\n{}", failed_file, cause);
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("轉換 {} 失敗：{}", failed_file, cause),
            ))
        }
    }
}

// 互動配置適配器：資料夾來自提示輸入，其餘選項沿用 CLI 旗標
pub struct InteractiveConfigAdapter {
    input: String,
    output: String,
    no_progress: bool,
    log_level: String,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: String, no_progress: bool, log_level: String) -> Self {
        InteractiveConfigAdapter {
            input,
            output,
            no_progress,
            log_level,
        }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            no_progress: self.no_progress,
            log_level: self.log_level.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_carries_cli_flags_into_config() {
        let adapter = InteractiveConfigAdapter::new(
            "in_dir".to_string(),
            "out_dir".to_string(),
            true,
            "warn".to_string(),
        );
        let config = adapter.get_config().unwrap();
        assert_eq!(config.input, "in_dir");
        assert_eq!(config.output, "out_dir");
        assert!(config.no_progress);
        assert_eq!(config.log_level, "warn");
    }
}
