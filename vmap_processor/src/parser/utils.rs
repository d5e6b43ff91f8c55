//! # VMAP 解析器的工具函数
//!
//! 属性提取、标量解码（含宽松模式下的错误恢复）和 XML 实体解析。

use quick_xml::{Reader, events::BytesStart};
use tracing::warn;
use vmap_core::{ScalarCodec, ScalarErrorPolicy, VmapError, VmapParsingOptions};

/// 从给定的属性名列表中获取第一个找到的属性，并将其转换为目标类型。
///
/// # 参数
/// * `e` - `BytesStart` 事件，代表一个 XML 标签的开始。
/// * `reader` - XML 读取器，用于解码。
/// * `attr_names` - 所有要尝试的属性名（包括别名）。
/// * `processor` - 接收解码后的字符串值，返回 `Result<T, VmapError>`。
pub(super) fn get_attribute_with_aliases<T, F>(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_names: &[&[u8]],
    processor: F,
) -> Result<Option<T>, VmapError>
where
    F: Fn(&str) -> Result<T, VmapError>,
{
    let mut found_attr = None;
    for &name in attr_names {
        if let Some(attr) = e.try_get_attribute(name)? {
            found_attr = Some(attr);
            break;
        }
    }

    found_attr
        .map(|attr| {
            let decoded_value = attr.decode_and_unescape_value(reader.decoder())?;
            processor(&decoded_value)
        })
        .transpose()
}

/// 获取字符串类型的属性值，缺失时返回空字符串。
pub(super) fn get_string_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_names: &[&[u8]],
) -> Result<String, VmapError> {
    Ok(get_attribute_with_aliases(e, reader, attr_names, |s| Ok(s.to_owned()))?.unwrap_or_default())
}

/// 按解析策略处理一个字段的解码结果。
///
/// 宽松模式下，失败会被记录为警告并返回 `None`，字段保持默认值。
pub(super) fn apply_policy<T>(
    result: Result<T, VmapError>,
    field: &str,
    raw: &str,
    options: &VmapParsingOptions,
    warnings: &mut Vec<String>,
) -> Result<Option<T>, VmapError> {
    match (result, options.scalar_error_policy) {
        (Ok(value), _) => Ok(Some(value)),
        (Err(err), ScalarErrorPolicy::Strict) => Err(err),
        (Err(err), ScalarErrorPolicy::Lenient) => {
            let message = format!("{field} '{raw}' 解析失败 ({err})，该字段将被忽略。");
            warn!("{message}");
            warnings.push(message);
            Ok(None)
        }
    }
}

/// 获取并解码标量属性。属性缺失或为空时返回 `None`。
pub(super) fn get_scalar_attribute<T: ScalarCodec>(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
    options: &VmapParsingOptions,
    warnings: &mut Vec<String>,
) -> Result<Option<T>, VmapError> {
    let raw = get_string_attribute(e, reader, &[attr_name])?;
    if raw.is_empty() {
        return Ok(None);
    }
    let field = String::from_utf8_lossy(attr_name);
    apply_policy(T::decode(&raw).map_err(VmapError::from), &field, &raw, options, warnings)
}

/// 获取整数属性。属性缺失时为 0。
pub(super) fn get_int_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
    options: &VmapParsingOptions,
    warnings: &mut Vec<String>,
) -> Result<i64, VmapError> {
    let raw = get_string_attribute(e, reader, &[attr_name])?;
    if raw.is_empty() {
        return Ok(0);
    }
    let field = String::from_utf8_lossy(attr_name);
    let parsed = raw.trim().parse::<i64>().map_err(VmapError::from);
    Ok(apply_policy(parsed, &field, &raw, options, warnings)?.unwrap_or(0))
}

/// 解析 `&name;` 形式的实体引用，返回对应字符。无法识别时返回 `None`。
pub(super) fn resolve_entity(entity_name: &str) -> Option<char> {
    if let Some(num_str) = entity_name.strip_prefix('#') {
        let (radix, code_point_str) = num_str
            .strip_prefix('x')
            .map_or((10, num_str), |stripped| (16, stripped));
        return u32::from_str_radix(code_point_str, radix)
            .ok()
            .and_then(char::from_u32);
    }
    match entity_name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

/// 按选项处理元素文本。
pub(super) fn finish_text(text: String, options: &VmapParsingOptions) -> String {
    if options.trim_text {
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            text
        } else {
            trimmed.to_owned()
        }
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmap_core::{Duration, FormatErrorKind};

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("amp"), Some('&'));
        assert_eq!(resolve_entity("quot"), Some('"'));
        assert_eq!(resolve_entity("#38"), Some('&'));
        assert_eq!(resolve_entity("#x26"), Some('&'));
        assert_eq!(resolve_entity("#xZZ"), None);
        assert_eq!(resolve_entity("nbsp"), None);
    }

    #[test]
    fn test_finish_text() {
        let trimming = VmapParsingOptions::default();
        assert_eq!(finish_text("\n  http://a/b  \n".to_owned(), &trimming), "http://a/b");
        assert_eq!(finish_text("plain".to_owned(), &trimming), "plain");

        let raw = VmapParsingOptions {
            trim_text: false,
            ..Default::default()
        };
        assert_eq!(finish_text(" x ".to_owned(), &raw), " x ");
    }

    #[test]
    fn test_apply_policy() {
        let strict = VmapParsingOptions::default();
        let lenient = VmapParsingOptions {
            scalar_error_policy: ScalarErrorPolicy::Lenient,
            ..Default::default()
        };
        let mut warnings = Vec::new();

        let bad = || Duration::decode("7").map_err(VmapError::from);

        assert!(matches!(
            apply_policy(bad(), "Duration", "7", &strict, &mut warnings),
            Err(VmapError::Format(e)) if e.kind == FormatErrorKind::SeparatorCount
        ));
        assert!(warnings.is_empty());

        assert!(matches!(
            apply_policy(bad(), "Duration", "7", &lenient, &mut warnings),
            Ok(None)
        ));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'7'"));

        let good = Duration::decode("0:0:7").map_err(VmapError::from);
        assert_eq!(
            apply_policy(good, "Duration", "0:0:7", &strict, &mut warnings).unwrap(),
            Some(Duration::from_millis(7000))
        );
    }
}
