use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::VmapError;

/// 遇到无法解析的时长或时间偏移时的处理方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScalarErrorPolicy {
    /// 中止整个文档的解析。
    #[default]
    Strict,
    /// 记录一条警告，该字段保持默认值，继续解析。
    Lenient,
}

/// VMAP 解析选项
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct VmapParsingOptions {
    /// 标量解析失败时的处理方式。
    pub scalar_error_policy: ScalarErrorPolicy,
    /// 是否去除元素文本两端的空白（URL 常被换行和缩进包围）。
    pub trim_text: bool,
}

impl Default for VmapParsingOptions {
    fn default() -> Self {
        Self {
            scalar_error_policy: ScalarErrorPolicy::Strict,
            trim_text: true,
        }
    }
}

/// VMAP 生成选项
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct VmapGenerationOptions {
    /// 是否输出格式化（缩进）的 XML。
    pub format: bool,
    /// 格式化时每级缩进的空格数。
    pub indent_size: usize,
    /// 是否写入 `<?xml version="1.0" encoding="UTF-8"?>` 声明。
    pub xml_declaration: bool,
    /// 是否省略值为空的属性。
    pub omit_empty_attributes: bool,
}

impl Default for VmapGenerationOptions {
    fn default() -> Self {
        Self {
            format: false,
            indent_size: 2,
            xml_declaration: true,
            omit_empty_attributes: false,
        }
    }
}

macro_rules! impl_from_toml {
    ($($ty:ty),*) => {$(
        impl $ty {
            /// 从 TOML 文本加载选项，缺失的键使用默认值。
            pub fn from_toml_str(content: &str) -> Result<Self, VmapError> {
                Ok(toml::from_str(content)?)
            }
        }
    )*};
}

impl_from_toml!(VmapParsingOptions, VmapGenerationOptions);
