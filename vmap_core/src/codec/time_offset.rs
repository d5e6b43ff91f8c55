//! # 广告插播点的时间偏移
//!
//! 文本形式有四种：时长（`00:10:00`）、命名锚点（`start` / `end`）、
//! 序号位置（`#3`）和百分比（`50%`）。

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{AsRefStr, EnumString};

use super::{Duration, ScalarCodec, as_text};
use crate::{FormatError, FormatErrorKind};

/// `start` 锚点对应的保留位置值。
pub const OFFSET_START: i8 = -1;
/// `end` 锚点对应的保留位置值。
pub const OFFSET_END: i8 = -2;

/// 保留的命名锚点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Anchor {
    /// 内容开头。
    Start,
    /// 内容结尾。
    End,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl Anchor {
    /// 该锚点的保留位置值。
    #[must_use]
    pub const fn sentinel_position(self) -> i8 {
        match self {
            Self::Start => OFFSET_START,
            Self::End => OFFSET_END,
        }
    }
}

/// 广告插播点在内容时间线上的位置，四种形式互斥。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeOffset {
    /// 绝对时间偏移。
    Duration(Duration),
    /// `start` 或 `end`。
    NamedAnchor(Anchor),
    /// 第 N 个插播位，`#N`。
    Position(i8),
    /// 相对于内容总时长的比例，`"50%"` 存为 `0.5`。
    Percent(f32),
}

impl TimeOffset {
    /// 按整数位置解释该偏移，锚点返回其保留值。
    #[must_use]
    pub const fn position(&self) -> Option<i8> {
        match self {
            Self::Position(p) => Some(*p),
            Self::NamedAnchor(anchor) => Some(anchor.sentinel_position()),
            _ => None,
        }
    }
}

impl From<Duration> for TimeOffset {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

impl From<Anchor> for TimeOffset {
    fn from(anchor: Anchor) -> Self {
        Self::NamedAnchor(anchor)
    }
}

fn parse_i8(digits: &str, text: &str, kind: FormatErrorKind) -> Result<i8, FormatError> {
    digits.parse::<i8>().map_err(|_| FormatError::new(text, kind))
}

impl ScalarCodec for TimeOffset {
    fn decode(text: &str) -> Result<Self, FormatError> {
        if let Ok(anchor) = text.parse::<Anchor>() {
            return Ok(Self::NamedAnchor(anchor));
        }
        if let Some(stripped) = text.strip_suffix('%') {
            let percent = parse_i8(stripped, text, FormatErrorKind::Percent)?;
            return Ok(Self::Percent(f32::from(percent) / 100.0));
        }
        if let Some(stripped) = text.strip_prefix('#') {
            return parse_i8(stripped, text, FormatErrorKind::Position).map(Self::Position);
        }
        Duration::decode(text).map(Self::Duration)
    }

    /// 锚点按保留位置值输出（`#-1` / `#-2`），不会输出 `start` / `end`。
    /// 零位置和零百分比输出为空文本。
    fn encode(&self) -> String {
        match *self {
            Self::Duration(d) => d.encode(),
            Self::NamedAnchor(anchor) => format!("#{}", anchor.sentinel_position()),
            Self::Position(0) => String::new(),
            Self::Position(p) => format!("#{p}"),
            Self::Percent(p) if p == 0.0 => String::new(),
            Self::Percent(p) => format!("{:.6}%", p * 100.0),
        }
    }
}

impl FromStr for TimeOffset {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl Serialize for TimeOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        as_text::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for TimeOffset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        as_text::deserialize(deserializer)
    }
}
