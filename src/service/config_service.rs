use std::io;

use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：腳本模式使用工作目錄下的 data → parquet
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl Default for DefaultConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: "data".to_string(),
            output: "parquet".to_string(),
            no_progress: false,
            log_level: "info".to_string(),
        })
    }
}
