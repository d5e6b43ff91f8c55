//! # 标量编解码器
//!
//! VMAP 文档中有两种嵌入在 XML 属性或元素文本里的自定义标量：
//! 钟表式的 [`Duration`]（`HH:MM:SS[.mmm]`）和多态的 [`TimeOffset`]。
//! 两者都实现了 [`ScalarCodec`]，文档树的读写层只通过这个 trait 调用它们。

mod duration;
mod time_offset;

pub use duration::Duration;
pub use time_offset::{Anchor, OFFSET_END, OFFSET_START, TimeOffset};

use crate::FormatError;

/// 单个叶子文本值的解码/编码能力。
///
/// 实现必须是纯函数：不持有可变状态，也不做 I/O，可以在任意线程并发调用。
pub trait ScalarCodec: Sized {
    /// 从文本解析出值。
    fn decode(text: &str) -> Result<Self, FormatError>;

    /// 将值渲染为文本。
    fn encode(&self) -> String;
}

/// 以文本形式序列化任意 [`ScalarCodec`] 的 serde 适配器。
///
/// 用法：`#[serde(with = "vmap_core::codec::as_text")]`
pub mod as_text {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::ScalarCodec;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ScalarCodec,
        S: Serializer,
    {
        serializer.serialize_str(&value.encode())
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: ScalarCodec,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        T::decode(&text).map_err(D::Error::custom)
    }
}

/// [`as_text`] 的可选版本：`None` 与空字符串或 `null` 互相对应。
pub mod as_text_opt {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::ScalarCodec;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: ScalarCodec,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.encode()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: ScalarCodec,
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.is_empty() => T::decode(&text).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}
