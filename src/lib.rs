//! 博文修复工具库
//!
//! 提供博文JSON文件加载、按 id 定位修补和回写功能

pub mod model;
pub mod utils;

// 重新导出主要类型
pub use model::data_core::{PatchError, PostStore};
