use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Vmap, VmapError};

/// 解析结果：文档本身和宽松模式下收集到的警告。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedVmapData {
    pub document: Vmap,
    /// 被忽略的字段及原因。
    pub warnings: Vec<String>,
}

/// 将文档投影为 JSON。时长和时间偏移以其文本形式输出。
pub fn to_json(document: &Vmap, pretty: bool) -> Result<String, VmapError> {
    let result = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    result.map_err(|e| VmapError::json_parse(e, "VMAP 文档序列化"))
}

/// 从 JSON 投影还原文档。
pub fn from_json(content: &str) -> Result<Vmap, VmapError> {
    let document: Vmap =
        serde_json::from_str(content).map_err(|e| VmapError::json_parse(e, "VMAP 文档"))?;
    debug!("从 JSON 读取了 {} 个插播点", document.ad_breaks.len());
    Ok(document)
}
