use directories::ProjectDirs;
use ini::Ini;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOGGING_SECTION: &str = "Logging";
const CONVERSION_SECTION: &str = "Conversion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub enable_file_log: bool,
    pub file_log_level: LevelFilter,
    pub console_log_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            enable_file_log: false,
            file_log_level: LevelFilter::Info,
            console_log_level: LevelFilter::Warn,
        }
    }
}

/// 转换的默认行为，可被命令行参数覆盖。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSettings {
    /// 标量解析失败时记录警告并继续，而不是中止。
    pub lenient: bool,
    /// 输出格式化的 XML / JSON。
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub log_settings: LogSettings,
    pub conversion: ConversionSettings,
}

fn get_or<T: FromStr>(conf: &Ini, section: &str, key: &str, default: T) -> T {
    conf.section(Some(section))
        .and_then(|s| s.get(key))
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

impl AppSettings {
    fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "VmapTool", "VmapTool") {
            let config_dir = proj_dirs.config_dir();
            if !config_dir.exists() {
                if let Err(e) = fs::create_dir_all(config_dir) {
                    log::error!("无法创建配置目录 {:?}: {}", config_dir, e);
                    return None;
                }
            }
            Some(config_dir.join("vmap_tool.ini"))
        } else {
            log::error!("无法获取项目配置目录路径。");
            None
        }
    }

    /// 从默认位置加载配置。文件不存在时写入一份默认配置。
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("无法确定配置文件路径。将使用运行时默认配置。");
            return AppSettings::default();
        };

        if !path.exists() {
            log::info!("配置文件 {:?} 未找到。将创建并使用默认配置。", path);
            let default_settings = AppSettings::default();
            if let Err(e) = default_settings.save_to(&path) {
                log::error!("无法保存初始默认配置文件到 {:?}: {}", path, e);
            }
            return default_settings;
        }

        Self::load_from(&path)
    }

    /// 从指定文件加载配置，缺失或无效的条目使用默认值。
    pub fn load_from(path: &Path) -> Self {
        match Ini::load_from_file(path) {
            Ok(conf) => {
                let defaults = AppSettings::default();
                let log_settings = LogSettings {
                    enable_file_log: get_or(
                        &conf,
                        LOGGING_SECTION,
                        "EnableFileLog",
                        defaults.log_settings.enable_file_log,
                    ),
                    file_log_level: conf
                        .section(Some(LOGGING_SECTION))
                        .and_then(|s| s.get("FileLogLevel"))
                        .and_then(|s| LevelFilter::from_str(s).ok())
                        .unwrap_or(defaults.log_settings.file_log_level),
                    console_log_level: conf
                        .section(Some(LOGGING_SECTION))
                        .and_then(|s| s.get("ConsoleLogLevel"))
                        .and_then(|s| LevelFilter::from_str(s).ok())
                        .unwrap_or(defaults.log_settings.console_log_level),
                };
                let conversion = ConversionSettings {
                    lenient: get_or(&conf, CONVERSION_SECTION, "Lenient", defaults.conversion.lenient),
                    pretty: get_or(&conf, CONVERSION_SECTION, "Pretty", defaults.conversion.pretty),
                };
                log::info!("从 {:?} 加载配置成功。", path);
                AppSettings {
                    log_settings,
                    conversion,
                }
            }
            Err(e) => {
                log::error!("加载配置文件 {:?} 失败: {}。将使用默认配置。", path, e);
                AppSettings::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        let mut conf = Ini::new();
        conf.with_section(Some(LOGGING_SECTION))
            .set(
                "EnableFileLog",
                self.log_settings.enable_file_log.to_string(),
            )
            .set("FileLogLevel", self.log_settings.file_log_level.to_string())
            .set(
                "ConsoleLogLevel",
                self.log_settings.console_log_level.to_string(),
            );
        conf.with_section(Some(CONVERSION_SECTION))
            .set("Lenient", self.conversion.lenient.to_string())
            .set("Pretty", self.conversion.pretty.to_string());

        conf.write_to_file(path)?;
        log::info!("配置已保存到 {:?}。", path);
        Ok(())
    }
}
