use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone)]
#[command(
    name = "csv_to_parquet",
    about = "批次將資料夾內的 CSV 檔案轉換為 Parquet 格式",
    long_about = "一個將資料夾內所有 CSV 檔案轉換為 Parquet 的工具。\n不帶參數執行時使用預設路徑（./data → ./parquet），加上 --interactive 進入互動模式。\n使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    #[arg(default_value = "data")]
    pub input: String,
    #[arg(short, long, default_value = "parquet")]
    pub output: String,
    #[arg(long, default_value_t = false)]
    pub interactive: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input)
        ));
    }
    if !path.is_dir() {
        log::error!("輸入路徑不是資料夾：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("輸入路徑 '{}' 不是資料夾", input)
        ));
    }
    Ok(path)
}
