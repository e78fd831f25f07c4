use std::io;

use clap::Parser;

use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_input_path, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::utils::setup_logging;

// 回傳 Some(輸出目錄) 表示完成了一次轉換；互動模式取消時回傳 None
pub fn process_args(args: Vec<String>) -> io::Result<Option<String>> {
    let cli = Cli::parse();
    if cli.interactive {
        return process_interactive_mode(cli);
    }
    process_cli_mode(cli, args.len() == 1).map(Some)
}

pub fn process_cli_mode(cli: Cli, is_default_config: bool) -> io::Result<String> {
    setup_logging(&cli.log_level)?;

    // 不帶參數時視為腳本模式，使用工作目錄下的預設路徑
    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供參數，使用預設路徑：data → parquet");
        Box::new(DefaultConfigAdapter::new())
    } else {
        Box::new(CliConfigAdapter::new(cli))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    log::info!("開始批次轉換，輸入資料夾：{}，輸出資料夾：{}", config.input, config.output);
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config)?;

    log::info!("共轉換 {} 個檔案，耗時 {:.2} 秒", output.converted, output.elapsed_secs);
    Ok(output.output_dir)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        // 驗證輸入資料夾
        validate_input_path(&self.cli.input)?;

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            no_progress: self.cli.no_progress,
            log_level: self.cli.log_level.clone(),
        })
    }
}
