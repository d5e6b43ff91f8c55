//! # VMAP (Video Multiple Ad Playlist) 解析器
//!
//! 基于 `quick-xml` 事件流的解析器，把 VMAP 文档及其内嵌的 VAST 响应
//! 读入 `vmap_core` 的文档模型。元素按本地名匹配，`vmap:AdBreak` 与 `AdBreak` 等价。

mod constants;
mod handlers;
mod state;
mod utils;

use quick_xml::{Reader, events::Event};
use tracing::{debug, error, warn};

use self::state::VmapParserState;
use vmap_core::{ParsedVmapData, VmapError, VmapParsingOptions};

/// 解析 VMAP 文档。
///
/// # 参数
///
/// * `content` - VMAP 文档内容字符串。
/// * `options` - 解析选项，包含标量解析失败时的处理策略。
///
/// # 返回
///
/// * `Ok(ParsedVmapData)` - 解析得到的文档，以及宽松模式下收集的警告。
///
/// # Errors
///
/// * `VmapError::Xml` - 输入不是格式良好的 XML 时
/// * `VmapError::Format` - 严格模式下 `timeOffset` 或 `Duration` 无法解析时
/// * `VmapError::ParseInt` - 严格模式下整数属性无法解析时
/// * `VmapError::InvalidDocument` - 缺少 `VMAP` 根元素，或文档在元素内部意外结束时
pub fn parse_vmap(
    content: &str,
    options: &VmapParsingOptions,
) -> Result<ParsedVmapData, VmapError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().expand_empty_elements = true;

    let mut state = VmapParserState::default();
    let mut warnings: Vec<String> = Vec::new();
    let mut buf = Vec::new();

    loop {
        let event = match reader.read_event_into(&mut buf) {
            Ok(event) => event,
            Err(e) => {
                error!(
                    "VMAP 解析错误，位置 {}: {}。无法继续解析",
                    reader.error_position(),
                    e
                );
                return Err(VmapError::Xml(e));
            }
        };

        match &event {
            Event::Start(e) => {
                handlers::handle_start(e, &mut state, &reader, options, &mut warnings)?;
            }
            Event::End(_) => handlers::handle_end(&mut state, options, &mut warnings)?,
            Event::Text(e) => state.append_text(&e.xml_content()?),
            Event::CData(e) => state.append_text(&e.decode()?),
            Event::GeneralRef(e) => {
                let entity_name = std::str::from_utf8(e.as_ref()).map_err(|err| {
                    VmapError::InvalidDocument(format!("无法将实体名解码为UTF-8: {err}"))
                })?;
                if let Some(ch) = utils::resolve_entity(entity_name) {
                    state.append_char(ch);
                } else {
                    let message = format!("忽略了未知的XML实体 '&{entity_name};'");
                    warn!("{message}");
                    warnings.push(message);
                }
            }
            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    if let Some(tag) = state.current_tag() {
        return Err(VmapError::InvalidDocument(format!(
            "文档在 {tag:?} 元素内部意外结束"
        )));
    }

    let document = state
        .document
        .ok_or_else(|| VmapError::InvalidDocument("缺少 VMAP 根元素".to_owned()))?;

    debug!(
        "VMAP 解析完成：{} 个插播点，{} 条警告",
        document.ad_breaks.len(),
        warnings.len()
    );

    Ok(ParsedVmapData {
        document,
        warnings,
    })
}
