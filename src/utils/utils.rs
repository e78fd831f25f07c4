use std::io;

use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 已初始化過時沿用既有設定
    let _ = env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init();
    Ok(())
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressBar {
    if no_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len} 已耗時: {elapsed_precise}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}
