use std::path::Path;

use crate::utils::codec::read_csv;

// 渲染檔案前 5 列作為預覽文字；讀取失敗時回傳錯誤訊息而非傳播，
// 預覽永遠不會中斷呼叫端
pub fn preview_head(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match read_csv(path) {
        Ok(df) => format!("'{}' 的預覽：\n\n{}", file_name, df.head(Some(5))),
        Err(e) => format!("無法載入預覽：\n{}", e),
    }
}
