//! # VMAP / VAST 文档模型
//!
//! 字段与 XML 中的元素、属性一一对应；serde 派生只用于 JSON 投影，
//! XML 读写由 `vmap_processor` 完成。

mod vast;
mod vmap;

pub use vast::*;
pub use vmap::*;
