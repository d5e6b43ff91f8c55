//! # 钟表式时长 `HH:MM:SS[.mmm]`

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ScalarCodec, as_text};
use crate::{FormatError, FormatErrorKind};

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1000;

/// 一段经过的时间，以非负毫秒数存储。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(u64);

impl Duration {
    /// 零时长。
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<std::time::Duration> for Duration {
    /// 不足一毫秒的部分被截断。
    fn from(d: std::time::Duration) -> Self {
        Self(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl From<Duration> for std::time::Duration {
    fn from(d: Duration) -> Self {
        Self::from_millis(d.0)
    }
}

/// 解析状态机的当前字段。每遇到一个分隔符（`:` 或 `.`，不加区分）就前进到下一个字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl Field {
    const fn next(self) -> Option<Self> {
        match self {
            Self::Hours => Some(Self::Minutes),
            Self::Minutes => Some(Self::Seconds),
            Self::Seconds => Some(Self::Milliseconds),
            Self::Milliseconds => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Hours => 0,
            Self::Minutes => 1,
            Self::Seconds => 2,
            Self::Milliseconds => 3,
        }
    }
}

impl ScalarCodec for Duration {
    /// 解析 `HH:MM:SS[.mmm]`。
    ///
    /// 字段按位置对应 时、分、秒、毫秒；数字和分隔符以外的字符会被忽略，
    /// 空字段按 0 处理。至少需要两个分隔符，最多三个。
    fn decode(text: &str) -> Result<Self, FormatError> {
        let mut field = Field::Hours;
        let mut values = [0u64; 4];

        for &b in text.as_bytes() {
            match b {
                b':' | b'.' => {
                    field = field
                        .next()
                        .ok_or_else(|| FormatError::new(text, FormatErrorKind::SeparatorCount))?;
                }
                b'0'..=b'9' => {
                    let slot = &mut values[field.index()];
                    *slot = slot
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u64::from(b - b'0')))
                        .ok_or_else(|| FormatError::new(text, FormatErrorKind::DigitRun))?;
                }
                _ => {}
            }
        }

        if field < Field::Seconds {
            return Err(FormatError::new(text, FormatErrorKind::SeparatorCount));
        }

        let [hours, minutes, seconds, millis] = values;
        hours
            .checked_mul(MS_PER_HOUR)
            .and_then(|total| total.checked_add(minutes.checked_mul(MS_PER_MINUTE)?))
            .and_then(|total| total.checked_add(seconds.checked_mul(MS_PER_SECOND)?))
            .and_then(|total| total.checked_add(millis))
            .map(Self)
            .ok_or_else(|| FormatError::new(text, FormatErrorKind::DigitRun))
    }

    /// 渲染为 `HH:MM:SS`，毫秒不为 0 时追加 `.mmm`。小时数不会按 24 取模。
    fn encode(&self) -> String {
        if self.0 == 0 {
            return "00:00:00".to_owned();
        }

        let hours = self.0 / MS_PER_HOUR;
        let minutes = (self.0 / MS_PER_MINUTE) % 60;
        let seconds = (self.0 / MS_PER_SECOND) % 60;
        let millis = self.0 % MS_PER_SECOND;

        if millis > 0 {
            format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
        } else {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

impl FromStr for Duration {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        as_text::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        as_text::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode_ms(text: &str) -> u64 {
        Duration::decode(text).unwrap().as_millis()
    }

    #[test]
    fn test_decode_duration() {
        assert_eq!(decode_ms("00:00:00"), 0);
        assert_eq!(decode_ms("00:01:30.500"), 90_500);
        assert_eq!(decode_ms("1:2:3"), 3_723_000);
        assert_eq!(decode_ms("01:02:03.004"), 3_723_004);
        assert_eq!(decode_ms("90:00:00"), 324_000_000);
        // 毫秒字段按整数处理，不是小数
        assert_eq!(decode_ms("00:00:01.5"), 1005);
        // 分隔符字符不区分
        assert_eq!(decode_ms("1.2.3"), 3_723_000);
        assert_eq!(decode_ms("1:2:3:4"), 3_723_004);
        // 非数字字符被忽略
        assert_eq!(decode_ms(" 00:0a1:30 "), 90_000);
        // 空字段按 0 处理
        assert_eq!(decode_ms("::"), 0);
        assert_eq!(decode_ms("01::05."), 3_605_000);
        // 各字段不做进位限制
        assert_eq!(decode_ms("00:90:00"), 5_400_000);
    }

    #[test]
    fn test_decode_duration_errors() {
        for text in ["", "1", "90", "01:30", "1:2:3:4:5", "1.2.3.4.5", "abc"] {
            let err = Duration::decode(text).unwrap_err();
            assert_eq!(err.kind, FormatErrorKind::SeparatorCount, "{text}");
            assert_eq!(err.text, text);
        }

        let err = Duration::decode("99999999999999999999:00:00").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::DigitRun);

        let err = Duration::decode("18446744073709551:00:00").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::DigitRun);
    }

    #[test]
    fn test_encode_duration() {
        assert_eq!(Duration::ZERO.encode(), "00:00:00");
        assert_eq!(Duration::from_millis(90_500).encode(), "00:01:30.500");
        assert_eq!(Duration::from_millis(3_723_004).encode(), "01:02:03.004");
        assert_eq!(Duration::from_millis(3_723_000).encode(), "01:02:03");
        assert_eq!(Duration::from_millis(324_000_000).encode(), "90:00:00");
        assert_eq!(Duration::from_millis(360_000_000).encode(), "100:00:00");
        assert_eq!(Duration::from_millis(1).encode(), "00:00:00.001");
    }

    #[test]
    fn test_encode_normalizes() {
        assert_eq!(Duration::decode("1:2:3").unwrap().encode(), "01:02:03");
        assert_eq!(Duration::decode("01:02:03.004").unwrap().encode(), "01:02:03.004");
        assert_eq!(Duration::decode("00:00:05.000").unwrap().encode(), "00:00:05");
        assert_eq!(Duration::decode("00:90:00").unwrap().encode(), "01:30:00");
    }

    #[test]
    fn test_std_duration_conversion() {
        let d = Duration::from(std::time::Duration::from_micros(1_500_700));
        assert_eq!(d.as_millis(), 1500);
        assert_eq!(
            std::time::Duration::from(Duration::from_millis(2500)),
            std::time::Duration::from_millis(2500)
        );
    }

    #[test]
    fn test_from_str_and_display() {
        let d: Duration = "0:1:30.5".parse().unwrap();
        assert_eq!(d.as_millis(), 90_005);
        assert_eq!(d.to_string(), "00:01:30.005");
        assert!("12".parse::<Duration>().is_err());
    }

    proptest! {
        #[test]
        fn round_trip_after_normalization(ms in 0u64..=u64::MAX / 2) {
            let d = Duration::from_millis(ms);
            prop_assert_eq!(Duration::decode(&d.encode()), Ok(d));
        }

        #[test]
        fn encode_is_fixed_point_of_normalization(ms in 0u64..10_000_000_000) {
            let once = Duration::from_millis(ms).encode();
            let twice = Duration::decode(&once).map(|d| d.encode());
            prop_assert_eq!(twice, Ok(once));
        }
    }
}
