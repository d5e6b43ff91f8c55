//! # VMAP 生成器 - 工具函数模块

use std::io::Write;

use quick_xml::{Writer, events::BytesText, writer::ElementWriter};
use vmap_core::{VmapError, VmapGenerationOptions};

/// VMAP 层元素的命名。文档带有 vmap 命名空间时使用 `vmap:` 前缀。
#[derive(Debug, Clone, Copy)]
pub(super) struct VmapNaming {
    pub(super) prefixed: bool,
}

impl VmapNaming {
    pub(super) fn tag(self, local_name: &str) -> String {
        if self.prefixed {
            format!("vmap:{local_name}")
        } else {
            local_name.to_owned()
        }
    }
}

/// 创建元素并写入属性。设置了 `omit_empty_attributes` 时跳过空值。
pub(super) fn element_with_attributes<'a, W: Write>(
    writer: &'a mut Writer<W>,
    name: String,
    attributes: &[(&str, &str)],
    options: &VmapGenerationOptions,
) -> ElementWriter<'a, W> {
    let mut element = writer.create_element(name);
    for &(key, value) in attributes {
        if options.omit_empty_attributes && value.is_empty() {
            continue;
        }
        element = element.with_attribute((key, value));
    }
    element
}

/// 写入一个只包含文本的元素，如 `<AdSystem>text</AdSystem>`。
pub(super) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
    options: &VmapGenerationOptions,
) -> Result<(), VmapError> {
    element_with_attributes(writer, name.to_owned(), attributes, options)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
