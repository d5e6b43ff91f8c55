//! # VMAP 解析器 - 事件处理器
//!
//! 开始标签负责创建节点并读取属性，结束标签负责填入文本并把节点挂到父节点上。

use quick_xml::{Reader, events::BytesStart};
use tracing::warn;
use vmap_core::{
    Ad, AdBreak, AdSource, ClickThrough, ClickTracking, Creative, CreativeParameter,
    CustomClick, Duration, Extension, Impression, InLine, Linear, MediaFile, ScalarCodec,
    TimeOffset, TrackingEvent, UniversalAdId, Vast, VastData, VastError, Vmap, VmapError,
    VmapParsingOptions,
};

use super::{
    constants::{
        ATTR_AD_ID, ATTR_BITRATE, ATTR_BREAK_ID, ATTR_BREAK_TYPE, ATTR_CODEC, ATTR_CREATIVE_ID,
        ATTR_DELIVERY, ATTR_EVENT, ATTR_HEIGHT, ATTR_ID, ATTR_ID_REGISTRY, ATTR_NAME,
        ATTR_SCHEMA_LOCATION, ATTR_SEQUENCE, ATTR_TIME_OFFSET, ATTR_TYPE, ATTR_VERSION,
        ATTR_VMAP, ATTR_WIDTH, ATTR_XMLNS_VMAP, ATTR_XMLNS_XSI, ATTR_XSI,
        ATTR_XSI_SCHEMA_LOCATION,
    },
    state::{PendingLeaf, Tag, VmapParserState},
    utils::{
        apply_policy, finish_text, get_int_attribute, get_scalar_attribute, get_string_attribute,
    },
};

/// 处理开始标签：识别元素、读取属性、创建节点，然后入栈。
pub(super) fn handle_start(
    e: &BytesStart,
    state: &mut VmapParserState,
    reader: &Reader<&[u8]>,
    options: &VmapParsingOptions,
    warnings: &mut Vec<String>,
) -> Result<(), VmapError> {
    let tag = Tag::resolve(state.current_tag(), e.local_name().as_ref());

    match tag {
        Tag::Vmap => {
            state.document = Some(Vmap {
                vmap: get_string_attribute(e, reader, &[ATTR_XMLNS_VMAP, ATTR_VMAP])?,
                version: get_string_attribute(e, reader, &[ATTR_VERSION])?,
                ..Default::default()
            });
        }
        Tag::AdBreak => {
            state.ad_break = Some(AdBreak {
                id: get_string_attribute(e, reader, &[ATTR_BREAK_ID])?,
                break_type: get_string_attribute(e, reader, &[ATTR_BREAK_TYPE])?,
                time_offset: get_scalar_attribute::<TimeOffset>(
                    e,
                    reader,
                    ATTR_TIME_OFFSET,
                    options,
                    warnings,
                )?,
                ..Default::default()
            });
        }
        Tag::AdSource => {
            if let Some(ad_break) = state.ad_break.as_mut() {
                ad_break.ad_source = Some(AdSource::default());
            }
        }
        Tag::VastAdData => {
            if let Some(source) = state.ad_break.as_mut().and_then(|b| b.ad_source.as_mut()) {
                source.vast_data = Some(VastData::default());
            }
        }
        Tag::Vast => {
            state.vast = Some(Vast {
                xsi: get_string_attribute(e, reader, &[ATTR_XMLNS_XSI, ATTR_XSI])?,
                no_namespace_schema_location: get_string_attribute(
                    e,
                    reader,
                    &[ATTR_XSI_SCHEMA_LOCATION, ATTR_SCHEMA_LOCATION],
                )?,
                version: get_string_attribute(e, reader, &[ATTR_VERSION])?,
                ..Default::default()
            });
        }
        Tag::Ad => {
            state.ad = Some(Ad {
                id: get_string_attribute(e, reader, &[ATTR_ID])?,
                sequence: get_int_attribute(e, reader, ATTR_SEQUENCE, options, warnings)?,
                in_line: None,
            });
        }
        Tag::InLine => state.in_line = Some(InLine::default()),
        Tag::Creative => {
            state.creative = Some(Creative {
                id: get_string_attribute(e, reader, &[ATTR_ID])?,
                ad_id: get_string_attribute(e, reader, &[ATTR_AD_ID])?,
                ..Default::default()
            });
        }
        Tag::Linear => state.linear = Some(Linear::default()),
        Tag::Extension => {
            state.extension = Some(Extension {
                extension_type: get_string_attribute(e, reader, &[ATTR_TYPE])?,
                ..Default::default()
            });
        }
        Tag::Tracking => {
            state.pending_leaf = Some(PendingLeaf::Tracking(TrackingEvent {
                event: get_string_attribute(e, reader, &[ATTR_EVENT])?,
                ..Default::default()
            }));
        }
        Tag::Impression => {
            state.pending_leaf = Some(PendingLeaf::Impression(Impression {
                id: get_string_attribute(e, reader, &[ATTR_ID])?,
                ..Default::default()
            }));
        }
        Tag::UniversalAdId => {
            state.pending_leaf = Some(PendingLeaf::UniversalAdId(UniversalAdId {
                id_registry: get_string_attribute(e, reader, &[ATTR_ID_REGISTRY])?,
                ..Default::default()
            }));
        }
        Tag::MediaFile => {
            state.pending_leaf = Some(PendingLeaf::MediaFile(MediaFile {
                bitrate: get_int_attribute(e, reader, ATTR_BITRATE, options, warnings)?,
                width: get_int_attribute(e, reader, ATTR_WIDTH, options, warnings)?,
                height: get_int_attribute(e, reader, ATTR_HEIGHT, options, warnings)?,
                delivery: get_string_attribute(e, reader, &[ATTR_DELIVERY])?,
                media_type: get_string_attribute(e, reader, &[ATTR_TYPE])?,
                codec: get_string_attribute(e, reader, &[ATTR_CODEC])?,
                ..Default::default()
            }));
        }
        Tag::ClickThrough => {
            state.pending_leaf = Some(PendingLeaf::ClickThrough(ClickThrough {
                id: get_string_attribute(e, reader, &[ATTR_ID])?,
                ..Default::default()
            }));
        }
        Tag::ClickTracking => {
            state.pending_leaf = Some(PendingLeaf::ClickTracking(ClickTracking {
                id: get_string_attribute(e, reader, &[ATTR_ID])?,
                ..Default::default()
            }));
        }
        Tag::CustomClick => {
            state.pending_leaf = Some(PendingLeaf::CustomClick(CustomClick {
                id: get_string_attribute(e, reader, &[ATTR_ID])?,
                ..Default::default()
            }));
        }
        Tag::CreativeParameter => {
            state.pending_leaf = Some(PendingLeaf::CreativeParameter(CreativeParameter {
                creative_id: get_string_attribute(e, reader, &[ATTR_CREATIVE_ID])?,
                name: get_string_attribute(e, reader, &[ATTR_NAME])?,
                creative_parameter_type: get_string_attribute(e, reader, &[ATTR_TYPE])?,
                ..Default::default()
            }));
        }
        // 包装元素和纯文本元素在开始标签处无需处理
        Tag::TrackingEvents
        | Tag::Creatives
        | Tag::Extensions
        | Tag::MediaFiles
        | Tag::VideoClicks
        | Tag::CreativeParameters
        | Tag::AdSystem
        | Tag::AdTitle
        | Tag::Duration
        | Tag::Error
        | Tag::Unknown => {}
    }

    state.push_element(tag);
    Ok(())
}

/// 处理结束标签：弹出元素，填入文本，把完成的节点挂到父节点上。
pub(super) fn handle_end(
    state: &mut VmapParserState,
    options: &VmapParsingOptions,
    warnings: &mut Vec<String>,
) -> Result<(), VmapError> {
    let Some((tag, raw_text)) = state.pop_element() else {
        return Ok(());
    };
    let text = finish_text(raw_text, options);

    match tag {
        Tag::Vmap => {
            if let Some(document) = state.document.as_mut() {
                document.text = text;
            }
        }
        Tag::AdBreak => {
            if let (Some(document), Some(ad_break)) = (state.document.as_mut(), state.ad_break.take())
            {
                document.ad_breaks.push(ad_break);
            }
        }
        Tag::Vast => {
            if let Some(mut vast) = state.vast.take() {
                vast.text = text;
                if let Some(data) = state
                    .ad_break
                    .as_mut()
                    .and_then(|b| b.ad_source.as_mut())
                    .and_then(|s| s.vast_data.as_mut())
                {
                    data.vast = Some(vast);
                }
            }
        }
        Tag::Ad => {
            if let (Some(vast), Some(ad)) = (state.vast.as_mut(), state.ad.take()) {
                vast.ad.push(ad);
            }
        }
        Tag::InLine => {
            if let Some(ad) = state.ad.as_mut() {
                ad.in_line = state.in_line.take();
            }
        }
        Tag::AdSystem => {
            if let Some(in_line) = state.in_line.as_mut() {
                in_line.ad_system = text;
            }
        }
        Tag::AdTitle => {
            if let Some(in_line) = state.in_line.as_mut() {
                in_line.ad_title = text;
            }
        }
        Tag::Error => {
            if let Some(in_line) = state.in_line.as_mut() {
                in_line.error = Some(VastError { value: text });
            }
        }
        Tag::Creative => {
            if let (Some(in_line), Some(creative)) = (state.in_line.as_mut(), state.creative.take()) {
                in_line.creatives.push(creative);
            }
        }
        Tag::Linear => {
            if let Some(creative) = state.creative.as_mut() {
                creative.linear = state.linear.take();
            }
        }
        Tag::Duration => {
            let duration = apply_policy(
                Duration::decode(&text).map_err(VmapError::from),
                "Duration",
                &text,
                options,
                warnings,
            )?;
            if let (Some(linear), Some(duration)) = (state.linear.as_mut(), duration) {
                linear.duration = duration;
            }
        }
        Tag::Extension => {
            if let (Some(in_line), Some(extension)) =
                (state.in_line.as_mut(), state.extension.take())
            {
                in_line.extensions.push(extension);
            }
        }
        Tag::Tracking
        | Tag::Impression
        | Tag::UniversalAdId
        | Tag::MediaFile
        | Tag::ClickThrough
        | Tag::ClickTracking
        | Tag::CustomClick
        | Tag::CreativeParameter => attach_leaf(state, text),
        Tag::AdSource
        | Tag::VastAdData
        | Tag::TrackingEvents
        | Tag::Creatives
        | Tag::Extensions
        | Tag::MediaFiles
        | Tag::VideoClicks
        | Tag::CreativeParameters
        | Tag::Unknown => {}
    }

    Ok(())
}

/// 将等待中的叶子元素填入文本并挂到所属节点。
fn attach_leaf(state: &mut VmapParserState, text: String) {
    let Some(leaf) = state.pending_leaf.take() else {
        return;
    };

    match leaf {
        PendingLeaf::Tracking(mut tracking) => {
            tracking.url = text;
            // 此时栈顶是 TrackingEvents，再往下一层决定归属
            let owner = state.element_stack.iter().rev().nth(1).copied();
            match owner {
                Some(Tag::Linear) => {
                    if let Some(linear) = state.linear.as_mut() {
                        linear.tracking_events.push(tracking);
                    }
                }
                Some(Tag::AdBreak) => {
                    if let Some(ad_break) = state.ad_break.as_mut() {
                        ad_break.tracking_events.push(tracking);
                    }
                }
                other => warn!("忽略了位于 {other:?} 下的 Tracking 元素"),
            }
        }
        PendingLeaf::Impression(mut impression) => {
            impression.url = text;
            if let Some(in_line) = state.in_line.as_mut() {
                in_line.impression.push(impression);
            }
        }
        PendingLeaf::UniversalAdId(mut universal_ad_id) => {
            universal_ad_id.id = text;
            if let Some(creative) = state.creative.as_mut() {
                creative.universal_ad_id = Some(universal_ad_id);
            }
        }
        PendingLeaf::MediaFile(mut media_file) => {
            media_file.text = text;
            if let Some(linear) = state.linear.as_mut() {
                linear.media_files.push(media_file);
            }
        }
        PendingLeaf::ClickThrough(mut click_through) => {
            click_through.url = text;
            if let Some(linear) = state.linear.as_mut() {
                linear.click_through = Some(click_through);
            }
        }
        PendingLeaf::ClickTracking(mut click_tracking) => {
            click_tracking.url = text;
            if let Some(linear) = state.linear.as_mut() {
                linear.click_tracking.push(click_tracking);
            }
        }
        PendingLeaf::CustomClick(mut custom_click) => {
            custom_click.url = text;
            if let Some(linear) = state.linear.as_mut() {
                linear.custom_click.push(custom_click);
            }
        }
        PendingLeaf::CreativeParameter(mut parameter) => {
            parameter.value = text;
            if let Some(extension) = state.extension.as_mut() {
                extension.creative_parameters.push(parameter);
            }
        }
    }
}
