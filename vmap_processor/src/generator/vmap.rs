//! # VMAP 生成器 - 插播点模块
//!
//! 负责 `<AdBreak>` 及其 `<AdSource>`、`<TrackingEvents>` 部分。

use std::io::Write;

use quick_xml::Writer;
use vmap_core::{AdBreak, AdSource, ScalarCodec, TrackingEvent, VmapError, VmapGenerationOptions};

use super::{
    utils::{VmapNaming, element_with_attributes, write_text_element},
    vast::write_vast,
};

pub(super) fn write_ad_break<W: Write>(
    writer: &mut Writer<W>,
    ad_break: &AdBreak,
    naming: VmapNaming,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    let time_offset = ad_break
        .time_offset
        .as_ref()
        .map(ScalarCodec::encode)
        .unwrap_or_default();

    let element = element_with_attributes(
        writer,
        naming.tag("AdBreak"),
        &[
            ("breakId", ad_break.id.as_str()),
            ("breakType", ad_break.break_type.as_str()),
            ("timeOffset", time_offset.as_str()),
        ],
        options,
    );

    if ad_break.ad_source.is_none() && ad_break.tracking_events.is_empty() {
        element.write_empty()?;
        return Ok(());
    }

    element.write_inner_content(|writer| {
        if let Some(ad_source) = &ad_break.ad_source {
            write_ad_source(writer, ad_source, naming, options)?;
        }
        write_tracking_events(
            writer,
            &ad_break.tracking_events,
            Some(naming),
            options,
        )?;
        Ok(())
    })?;
    Ok(())
}

fn write_ad_source<W: Write>(
    writer: &mut Writer<W>,
    ad_source: &AdSource,
    naming: VmapNaming,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    let source_element = writer.create_element(naming.tag("AdSource"));
    let Some(vast_data) = &ad_source.vast_data else {
        source_element.write_empty()?;
        return Ok(());
    };

    source_element.write_inner_content(|writer| {
        let data_element = writer.create_element(naming.tag("VASTAdData"));
        if let Some(vast) = &vast_data.vast {
            data_element.write_inner_content(|writer| {
                write_vast(writer, vast, options)?;
                Ok(())
            })?;
        } else {
            data_element.write_empty()?;
        }
        Ok(())
    })?;
    Ok(())
}

/// 写入 `<TrackingEvents>`。`naming` 为 `None` 时（VAST 内部）不加前缀。
/// 没有事件时什么也不写。
pub(super) fn write_tracking_events<W: Write>(
    writer: &mut Writer<W>,
    events: &[TrackingEvent],
    naming: Option<VmapNaming>,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    if events.is_empty() {
        return Ok(());
    }
    let naming = naming.unwrap_or(VmapNaming { prefixed: false });
    let tracking_tag = naming.tag("Tracking");

    writer
        .create_element(naming.tag("TrackingEvents"))
        .write_inner_content(|writer| {
            for event in events {
                write_text_element(
                    writer,
                    &tracking_tag,
                    &[("event", event.event.as_str())],
                    &event.url,
                    options,
                )?;
            }
            Ok(())
        })?;
    Ok(())
}
