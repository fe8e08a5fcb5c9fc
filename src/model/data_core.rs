//! PostStore：博文集合的加载、按 id 定位修补与回写

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::utils::fs::{read_json_file, write_json_file};

#[derive(Debug, Default)]
pub struct PostStore {
    pub source_path: Option<PathBuf>,
    pub dom: Option<Value>,
}

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("数据格式错误: {0}")]
    Schema(String),
    #[error("状态错误: {0}")]
    State(String),
}

impl PostStore {
    /// 加载博文JSON文件，顶层必须是博文数组
    pub fn load_file(&mut self, p: &Path) -> Result<(), PatchError> {
        let dom = read_json_file(p)?;
        if !dom.is_array() {
            return Err(PatchError::Schema("顶层必须是博文数组".into()));
        }
        self.source_path = Some(p.to_path_buf());
        self.dom = Some(dom);
        Ok(())
    }

    /// 已加载的博文数量
    pub fn post_count(&self) -> usize {
        self.dom
            .as_ref()
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// 按原始顺序扫描，将第一条 id 命中的博文 content 替换为 replacement。
    /// 命中返回 Some(标题)；无命中返回 None，集合保持原样。
    /// 扫描途经的元素必须是带 id 字段的对象；命中之后的元素不再检查。
    pub fn patch_content(
        &mut self,
        target_id: &str,
        replacement: &str,
    ) -> Result<Option<String>, PatchError> {
        let dom = self
            .dom
            .as_mut()
            .ok_or_else(|| PatchError::State("博文数据尚未加载".into()))?;
        let posts = dom
            .as_array_mut()
            .ok_or_else(|| PatchError::Schema("顶层必须是博文数组".into()))?;

        for post in posts.iter_mut() {
            let record = post
                .as_object_mut()
                .ok_or_else(|| PatchError::Schema("数组元素必须是博文对象".into()))?;
            let id = record
                .get("id")
                .ok_or_else(|| PatchError::Schema("博文缺少 id 字段".into()))?;
            // id 按字符串相等比较，数字 26 不等于 "26"
            if id.as_str() != Some(target_id) {
                continue;
            }

            let title = match record.get("title") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => return Err(PatchError::Schema("命中的博文缺少 title 字段".into())),
            };
            record.insert("content".to_string(), Value::String(replacement.to_string()));
            tracing::info!("已替换博文 content: id={}, title={}", target_id, title);
            return Ok(Some(title));
        }

        tracing::warn!("未找到 id={} 的博文，集合保持原样", target_id);
        Ok(None)
    }

    /// 将当前博文集合保存到指定路径
    pub fn save_to_file(&self, path: &Path) -> Result<(), PatchError> {
        let dom = self
            .dom
            .as_ref()
            .ok_or_else(|| PatchError::State("博文数据尚未加载".into()))?;
        write_json_file(path, dom)?;
        tracing::info!("博文文件已保存到: {}", path.display());
        Ok(())
    }

    /// 保存回加载时的原始文件路径
    pub fn save_to_original_file(&self) -> Result<(), PatchError> {
        let original_path = self
            .source_path
            .as_ref()
            .ok_or_else(|| PatchError::State("原始文件路径未设置".into()))?;
        self.save_to_file(original_path)
    }
}
