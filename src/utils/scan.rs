use std::fs;
use std::io;
use std::path::Path;

// 列出資料夾內可轉換的 CSV 檔名，維持目錄列舉順序，不另行排序
pub fn list_convertible(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        // 副檔名比對區分大小寫
        if name.ends_with(".csv") {
            files.push(name);
        }
    }
    Ok(files)
}
