use std::path::PathBuf;

// 一次批次轉換的工作描述，開始執行後不再變更
#[derive(Clone)]
pub struct ConversionJob {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<String>,
}

// 每轉換完一個檔案發出一次
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
    pub elapsed_secs: f64,
    pub current_file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Io,
    Parse,
}

// 每次執行恰好產生一個結果
#[derive(Debug)]
pub enum ConversionOutcome {
    Success {
        total_converted: usize,
        elapsed_secs: f64,
    },
    Failure {
        failed_file: String,
        kind: FailureKind,
        cause: String,
    },
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub output_dir: String,
    pub converted: usize,
    pub elapsed_secs: f64,
}
