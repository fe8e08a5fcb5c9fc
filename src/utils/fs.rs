//! IO辅助：博文JSON文件的读写

use std::{fs, path::Path};

use serde_json::Value;

use crate::model::data_core::PatchError;

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, PatchError> {
    let content = fs::read_to_string(p)?;
    let v: Value = serde_json::from_str(&content)?;
    Ok(v)
}

/// 将JSON数据保存到文件（2空格缩进，非ASCII字符原样输出）
pub fn write_json_file(p: &Path, value: &Value) -> Result<(), PatchError> {
    let json_str = serde_json::to_string_pretty(value)?;
    fs::write(p, json_str)?;
    Ok(())
}
