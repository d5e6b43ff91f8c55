//! # VMAP 生成器 - 内嵌 VAST 模块

use std::io::Write;

use quick_xml::{
    Writer,
    events::{BytesText, Event},
};
use vmap_core::{
    Ad, Creative, Extension, InLine, Linear, ScalarCodec, Vast, VmapError, VmapGenerationOptions,
};

use super::{
    utils::{element_with_attributes, write_text_element},
    vmap::write_tracking_events,
};

pub(super) fn write_vast<W: Write>(
    writer: &mut Writer<W>,
    vast: &Vast,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    element_with_attributes(
        writer,
        "VAST".to_owned(),
        &[
            ("xmlns:xsi", vast.xsi.as_str()),
            (
                "xsi:noNamespaceSchemaLocation",
                vast.no_namespace_schema_location.as_str(),
            ),
            ("version", vast.version.as_str()),
        ],
        options,
    )
    .write_inner_content(|writer| {
        if !vast.text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(&vast.text)))?;
        }
        for ad in &vast.ad {
            write_ad(writer, ad, options)?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_ad<W: Write>(
    writer: &mut Writer<W>,
    ad: &Ad,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    let sequence = ad.sequence.to_string();
    let element = element_with_attributes(
        writer,
        "Ad".to_owned(),
        &[("id", ad.id.as_str()), ("sequence", sequence.as_str())],
        options,
    );

    match &ad.in_line {
        Some(in_line) => {
            element.write_inner_content(|writer| {
                write_in_line(writer, in_line, options)?;
                Ok(())
            })?;
        }
        None => {
            element.write_empty()?;
        }
    }
    Ok(())
}

fn write_in_line<W: Write>(
    writer: &mut Writer<W>,
    in_line: &InLine,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    writer
        .create_element("InLine")
        .write_inner_content(|writer| {
            write_text_element(writer, "AdSystem", &[], &in_line.ad_system, options)?;
            write_text_element(writer, "AdTitle", &[], &in_line.ad_title, options)?;
            for impression in &in_line.impression {
                write_text_element(
                    writer,
                    "Impression",
                    &[("id", impression.id.as_str())],
                    &impression.url,
                    options,
                )?;
            }
            if !in_line.creatives.is_empty() {
                writer
                    .create_element("Creatives")
                    .write_inner_content(|writer| {
                        for creative in &in_line.creatives {
                            write_creative(writer, creative, options)?;
                        }
                        Ok(())
                    })?;
            }
            if !in_line.extensions.is_empty() {
                writer
                    .create_element("Extensions")
                    .write_inner_content(|writer| {
                        for extension in &in_line.extensions {
                            write_extension(writer, extension, options)?;
                        }
                        Ok(())
                    })?;
            }
            if let Some(error) = &in_line.error {
                write_text_element(writer, "Error", &[], &error.value, options)?;
            }
            Ok(())
        })?;
    Ok(())
}

fn write_creative<W: Write>(
    writer: &mut Writer<W>,
    creative: &Creative,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    let element = element_with_attributes(
        writer,
        "Creative".to_owned(),
        &[
            ("id", creative.id.as_str()),
            ("adId", creative.ad_id.as_str()),
        ],
        options,
    );

    if creative.universal_ad_id.is_none() && creative.linear.is_none() {
        element.write_empty()?;
        return Ok(());
    }

    element.write_inner_content(|writer| {
        if let Some(universal_ad_id) = &creative.universal_ad_id {
            write_text_element(
                writer,
                "UniversalAdId",
                &[("idRegistry", universal_ad_id.id_registry.as_str())],
                &universal_ad_id.id,
                options,
            )?;
        }
        if let Some(linear) = &creative.linear {
            write_linear(writer, linear, options)?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_linear<W: Write>(
    writer: &mut Writer<W>,
    linear: &Linear,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    writer
        .create_element("Linear")
        .write_inner_content(|writer| {
            write_text_element(writer, "Duration", &[], &linear.duration.encode(), options)?;
            write_tracking_events(writer, &linear.tracking_events, None, options)?;

            if !linear.media_files.is_empty() {
                writer
                    .create_element("MediaFiles")
                    .write_inner_content(|writer| {
                        for media_file in &linear.media_files {
                            let bitrate = media_file.bitrate.to_string();
                            let width = media_file.width.to_string();
                            let height = media_file.height.to_string();
                            write_text_element(
                                writer,
                                "MediaFile",
                                &[
                                    ("bitrate", bitrate.as_str()),
                                    ("width", width.as_str()),
                                    ("height", height.as_str()),
                                    ("delivery", media_file.delivery.as_str()),
                                    ("type", media_file.media_type.as_str()),
                                    ("codec", media_file.codec.as_str()),
                                ],
                                &media_file.text,
                                options,
                            )?;
                        }
                        Ok(())
                    })?;
            }

            let has_clicks = linear.click_through.is_some()
                || !linear.click_tracking.is_empty()
                || !linear.custom_click.is_empty();
            if has_clicks {
                writer
                    .create_element("VideoClicks")
                    .write_inner_content(|writer| {
                        if let Some(click_through) = &linear.click_through {
                            write_text_element(
                                writer,
                                "ClickThrough",
                                &[("id", click_through.id.as_str())],
                                &click_through.url,
                                options,
                            )?;
                        }
                        for click in &linear.click_tracking {
                            write_text_element(
                                writer,
                                "ClickTracking",
                                &[("id", click.id.as_str())],
                                &click.url,
                                options,
                            )?;
                        }
                        for click in &linear.custom_click {
                            write_text_element(
                                writer,
                                "CustomClick",
                                &[("id", click.id.as_str())],
                                &click.url,
                                options,
                            )?;
                        }
                        Ok(())
                    })?;
            }
            Ok(())
        })?;
    Ok(())
}

fn write_extension<W: Write>(
    writer: &mut Writer<W>,
    extension: &Extension,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    let element = element_with_attributes(
        writer,
        "Extension".to_owned(),
        &[("type", extension.extension_type.as_str())],
        options,
    );

    if extension.creative_parameters.is_empty() {
        element.write_empty()?;
        return Ok(());
    }

    element.write_inner_content(|writer| {
        writer
            .create_element("CreativeParameters")
            .write_inner_content(|writer| {
                for parameter in &extension.creative_parameters {
                    write_text_element(
                        writer,
                        "CreativeParameter",
                        &[
                            ("creativeId", parameter.creative_id.as_str()),
                            ("name", parameter.name.as_str()),
                            ("type", parameter.creative_parameter_type.as_str()),
                        ],
                        &parameter.value,
                        options,
                    )?;
                }
                Ok(())
            })?;
        Ok(())
    })?;
    Ok(())
}
