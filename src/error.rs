use thiserror::Error;
use vmap_core::VmapError;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("文档处理错误: {0}")]
    Vmap(#[from] VmapError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无法判断输入格式: {0}")]
    UnknownInputFormat(String),
}
