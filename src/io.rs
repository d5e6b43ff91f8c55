use clap::ValueEnum;
use std::fs;
use std::path::Path;

use vmap_core::{VmapGenerationOptions, VmapParsingOptions, from_json, to_json};
use vmap_processor::{generate_vmap, parse_vmap};

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    Xml,
    Json,
}

impl DocumentFormat {
    /// 按扩展名判断格式，扩展名未知时看第一个非空白字符。
    pub fn detect(path: &Path, content: &str) -> Result<Self, ToolError> {
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match by_extension.as_deref() {
            Some("xml" | "vmap") => return Ok(Self::Xml),
            Some("json") => return Ok(Self::Json),
            _ => {}
        }

        match content.trim_start().chars().next() {
            Some('<') => Ok(Self::Xml),
            Some('{') => Ok(Self::Json),
            _ => Err(ToolError::UnknownInputFormat(path.display().to_string())),
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Xml => Self::Json,
            Self::Json => Self::Xml,
        }
    }
}

/// 转换结果：输出文本和解析时收集到的警告。
#[derive(Debug)]
pub struct ConversionOutput {
    pub content: String,
    pub warnings: Vec<String>,
}

pub fn convert(
    content: &str,
    from: DocumentFormat,
    to: DocumentFormat,
    parsing: &VmapParsingOptions,
    generation: &VmapGenerationOptions,
) -> Result<ConversionOutput, ToolError> {
    let (document, warnings) = match from {
        DocumentFormat::Xml => {
            let parsed = parse_vmap(content, parsing)?;
            (parsed.document, parsed.warnings)
        }
        DocumentFormat::Json => (from_json(content)?, Vec::new()),
    };
    log::info!(
        "读取了 {} 个插播点，{} 条警告",
        document.ad_breaks.len(),
        warnings.len()
    );

    let content = match to {
        DocumentFormat::Xml => generate_vmap(&document, generation)?,
        DocumentFormat::Json => to_json(&document, generation.format)?,
    };
    Ok(ConversionOutput { content, warnings })
}

pub fn read_input(path: &Path) -> Result<String, ToolError> {
    log::debug!("读取输入文件 {path:?}");
    Ok(fs::read_to_string(path)?)
}

/// 写入输出。没有指定路径时写到标准输出。
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), ToolError> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            log::info!("已写入 {path:?}");
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmap_core::ScalarErrorPolicy;

    const SAMPLE: &str = r#"<vmap:VMAP xmlns:vmap="http://www.iab.net/videosuite/vmap" version="1.0">
  <vmap:AdBreak timeOffset="00:00:15" breakType="linear" breakId="mid"/>
</vmap:VMAP>"#;

    #[test]
    fn test_detect_by_extension_then_content() {
        assert_eq!(
            DocumentFormat::detect(Path::new("a.XML"), "{").unwrap(),
            DocumentFormat::Xml
        );
        assert_eq!(
            DocumentFormat::detect(Path::new("a.json"), "<").unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::detect(Path::new("a.txt"), "\n  <VMAP/>").unwrap(),
            DocumentFormat::Xml
        );
        assert_eq!(
            DocumentFormat::detect(Path::new("noext"), " {}").unwrap(),
            DocumentFormat::Json
        );
        assert!(matches!(
            DocumentFormat::detect(Path::new("a.txt"), "VMAP"),
            Err(ToolError::UnknownInputFormat(_))
        ));
    }

    #[test]
    fn test_xml_to_json_and_back() {
        let parsing = VmapParsingOptions::default();
        let generation = VmapGenerationOptions {
            xml_declaration: false,
            ..Default::default()
        };

        let json = convert(SAMPLE, DocumentFormat::Xml, DocumentFormat::Json, &parsing, &generation)
            .unwrap();
        assert!(json.warnings.is_empty());
        assert!(json.content.contains(r#""timeOffset":"00:00:15""#));

        let xml = convert(
            &json.content,
            DocumentFormat::Json,
            DocumentFormat::Xml,
            &parsing,
            &generation,
        )
        .unwrap();
        assert!(xml.content.contains(r#"timeOffset="00:00:15""#));
        assert!(xml.content.starts_with("<vmap:VMAP"));
    }

    #[test]
    fn test_lenient_conversion_reports_warnings() {
        let parsing = VmapParsingOptions {
            scalar_error_policy: ScalarErrorPolicy::Lenient,
            ..Default::default()
        };
        let output = convert(
            r#"<VMAP><AdBreak timeOffset="soon"/></VMAP>"#,
            DocumentFormat::Xml,
            DocumentFormat::Json,
            &parsing,
            &VmapGenerationOptions::default(),
        )
        .unwrap();
        assert_eq!(output.warnings.len(), 1);

        let strict = convert(
            r#"<VMAP><AdBreak timeOffset="soon"/></VMAP>"#,
            DocumentFormat::Xml,
            DocumentFormat::Json,
            &VmapParsingOptions::default(),
            &VmapGenerationOptions::default(),
        );
        assert!(matches!(strict, Err(ToolError::Vmap(_))));
    }

    #[test]
    fn test_read_and_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xml");
        write_output(Some(&path), SAMPLE).unwrap();
        assert_eq!(read_input(&path).unwrap(), SAMPLE);
        assert!(matches!(
            read_input(&dir.path().join("missing.xml")),
            Err(ToolError::Io(_))
        ));
    }
}
