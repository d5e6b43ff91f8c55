mod app_settings;
mod error;
mod io;
mod logger;

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use app_settings::AppSettings;
use error::ToolError;
use io::DocumentFormat;
use vmap_core::{ScalarErrorPolicy, VmapGenerationOptions, VmapParsingOptions};

/// 在 XML 与 JSON 之间转换 VMAP 广告插播文档。
#[derive(Debug, Parser)]
#[command(name = "vmap_tool", version, about)]
struct Cli {
    /// 输入文件（XML 或 JSON，按扩展名或内容判断）。
    input: PathBuf,

    /// 输出格式，默认为输入格式的另一种。
    #[arg(long, value_enum)]
    to: Option<DocumentFormat>,

    /// 输出文件，缺省时写到标准输出。
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 无法解析的时长或时间偏移只记录警告。
    #[arg(long)]
    lenient: bool,

    /// 任何标量解析失败都中止转换，覆盖配置中的 `Lenient`。
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// 输出格式化的 XML / JSON。
    #[arg(long)]
    pretty: bool,

    /// 输出紧凑的 XML / JSON，覆盖配置中的 `Pretty`。
    #[arg(long, conflicts_with = "pretty")]
    no_pretty: bool,

    /// 解析与生成选项的 TOML 文件。
    #[arg(long, value_name = "TOML")]
    options: Option<PathBuf>,
}

fn load_options(
    cli: &Cli,
    settings: &AppSettings,
) -> Result<(VmapParsingOptions, VmapGenerationOptions), ToolError> {
    let (mut parsing, mut generation) = match &cli.options {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            (
                VmapParsingOptions::from_toml_str(&content)?,
                VmapGenerationOptions::from_toml_str(&content)?,
            )
        }
        None => Default::default(),
    };

    // 命令行 > 配置文件 > 选项文件
    if cli.strict {
        parsing.scalar_error_policy = ScalarErrorPolicy::Strict;
    } else if cli.lenient || settings.conversion.lenient {
        parsing.scalar_error_policy = ScalarErrorPolicy::Lenient;
    }
    if cli.no_pretty {
        generation.format = false;
    } else if cli.pretty || settings.conversion.pretty {
        generation.format = true;
    }
    Ok((parsing, generation))
}

fn run(cli: &Cli, settings: &AppSettings) -> Result<(), ToolError> {
    let (parsing, generation) = load_options(cli, settings)?;

    let content = io::read_input(&cli.input)?;
    let from = DocumentFormat::detect(&cli.input, &content)?;
    let to = cli.to.unwrap_or_else(|| from.other());
    log::info!("转换 {:?}: {from:?} -> {to:?}", cli.input);

    let output = io::convert(&content, from, to, &parsing, &generation)?;
    for warning in &output.warnings {
        log::warn!("{warning}");
    }
    io::write_output(cli.output.as_deref(), &output.content)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = AppSettings::load();
    logger::init_global_logger(&settings.log_settings);

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
