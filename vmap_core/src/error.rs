use std::{fmt, io};

use quick_xml::{
    Error as QuickXmlErrorMain, encoding::EncodingError,
    events::attributes::AttrError as QuickXmlAttrError,
};
use thiserror::Error;

/// 标量文本无法解析的具体原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// 时长中的分隔符数量不在允许范围内。
    SeparatorCount,
    /// 数字串无法表示为合法数值（溢出等）。
    DigitRun,
    /// `%` 结尾的百分比偏移无效。
    Percent,
    /// `#` 开头的位置偏移无效。
    Position,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::SeparatorCount => "分隔符数量无效",
            Self::DigitRun => "数字部分无效",
            Self::Percent => "百分比偏移无效",
            Self::Position => "位置偏移无效",
        };
        f.write_str(reason)
    }
}

/// 标量编解码器唯一的错误类型，总是携带原始文本。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("无效的格式 '{text}': {kind}")]
pub struct FormatError {
    /// 无法解析的原始文本。
    pub text: String,
    /// 失败原因。
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub(crate) fn new(text: &str, kind: FormatErrorKind) -> Self {
        Self {
            text: text.to_owned(),
            kind,
        }
    }
}

/// 定义 VMAP 文档解析、生成和转换过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum VmapError {
    /// XML 读写错误，通常来自 `quick-xml` 库。
    #[error("XML 错误: {0}")]
    Xml(#[from] QuickXmlErrorMain),
    /// XML 属性解析错误，通常来自 `quick-xml` 库。
    #[error("XML 属性错误: {0}")]
    Attribute(#[from] QuickXmlAttrError),
    /// XML 文本编码或解码错误。
    #[error("文本编码或解码错误: {0}")]
    Encoding(#[from] EncodingError),
    /// 时长或时间偏移等标量文本无效。
    #[error(transparent)]
    Format(#[from] FormatError),
    /// 整数属性解析错误。
    #[error("整数解析错误: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
    /// 从字节序列转换为 UTF-8 字符串失败。
    #[error("UTF-8 转换错误: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
    /// 文件读写等IO错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
    /// JSON 解析或序列化错误。
    #[error("处理 JSON 内容 {context} 失败: {source}")]
    JsonParse {
        /// 底层 `serde_json` 错误
        #[source]
        source: serde_json::Error,
        /// 有关错误发生位置的上下文信息。
        context: String,
    },
    /// 配置文件无法解析。
    #[error("配置解析错误: {0}")]
    Config(#[from] toml::de::Error),
    /// 文档结构不符合预期。
    #[error("文档结构无效: {0}")]
    InvalidDocument(String),
}

impl From<VmapError> for std::io::Error {
    fn from(err: VmapError) -> Self {
        Self::other(err)
    }
}

impl VmapError {
    /// 创建一个带有上下文的 `JsonParse` 错误。
    #[must_use]
    pub fn json_parse(source: serde_json::Error, context: impl Into<String>) -> Self {
        Self::JsonParse {
            source,
            context: context.into(),
        }
    }
}
