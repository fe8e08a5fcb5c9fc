//! 数据模型层：博文集合状态与固定修正内容

pub mod data_core;
pub mod fix_content;
