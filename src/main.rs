use std::io;

use csv_to_parquet::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    // 取消執行時不印出完成訊息
    if let Some(output_dir) = process_args(args)? {
        log::info!("程式執行完成，輸出目錄：{}", output_dir);
        println!("轉換完成！Parquet 檔案位於：{}", output_dir);
    }
    Ok(())
}
