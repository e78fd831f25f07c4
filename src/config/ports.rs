use std::io;

use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝一次執行所需的參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: String,
    pub output: String,
    pub no_progress: bool,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
