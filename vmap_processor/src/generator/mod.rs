//! # VMAP 文档生成器
//!
//! 把 `vmap_core::Vmap` 写成 XML。时间偏移和时长通过 `ScalarCodec::encode` 渲染，
//! 因此 `start` / `end` 锚点会以 `#-1` / `#-2` 的形式写出。

mod utils;
mod vast;
mod vmap;

use std::io::Cursor;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesText, Event},
};
use tracing::debug;
use vmap_core::{Vmap, VmapError, VmapGenerationOptions};

use self::utils::{VmapNaming, element_with_attributes};

/// VMAP 生成的主入口函数。
///
/// # 参数
/// * `document` - 要写出的文档。
/// * `options` - 生成选项，控制缩进、XML 声明和空属性。
///
/// # 返回
///
/// * `Ok(String)` - 生成的 XML 字符串。
///
/// # Errors
///
/// 写入 XML 或把结果转换为字符串失败时返回 `VmapError`。
pub fn generate_vmap(document: &Vmap, options: &VmapGenerationOptions) -> Result<String, VmapError> {
    let mut buffer = Vec::new();

    let result = if options.format {
        let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', options.indent_size);
        generate_vmap_inner(&mut writer, document, options)
    } else {
        let mut writer = Writer::new(Cursor::new(&mut buffer));
        generate_vmap_inner(&mut writer, document, options)
    };

    result?;

    debug!("VMAP 生成完成：{} 个插播点", document.ad_breaks.len());
    String::from_utf8(buffer).map_err(VmapError::FromUtf8)
}

fn generate_vmap_inner<W: std::io::Write>(
    writer: &mut Writer<W>,
    document: &Vmap,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    // 文档声明了 vmap 命名空间时才能使用前缀
    let naming = VmapNaming {
        prefixed: !document.vmap.is_empty(),
    };
    let namespace_attr = if naming.prefixed { "xmlns:vmap" } else { "vmap" };

    let root = element_with_attributes(
        writer,
        naming.tag("VMAP"),
        &[
            (namespace_attr, document.vmap.as_str()),
            ("version", document.version.as_str()),
        ],
        options,
    );

    root.write_inner_content(|writer| {
        if !document.text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(&document.text)))?;
        }
        for ad_break in &document.ad_breaks {
            vmap::write_ad_break(writer, ad_break, naming, options)?;
        }
        Ok(())
    })?;

    Ok(())
}
