use chrono::Local;
use directories::ProjectDirs;
use fern::Dispatch;
use std::fs;
use std::path::PathBuf;

use crate::app_settings::LogSettings;

fn get_log_file_path() -> Result<PathBuf, String> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "VmapTool", "VmapTool") {
        let log_dir = proj_dirs.data_local_dir();
        if !log_dir.exists() {
            fs::create_dir_all(log_dir)
                .map_err(|e| format!("无法创建日志目录 {log_dir:?}: {e}"))?;
        }
        Ok(log_dir.join("vmap_tool.log"))
    } else {
        Err("无法获取项目日志目录".to_string())
    }
}

/// 初始化全局日志：控制台（stderr）输出，以及按设置启用的文件输出。
///
/// 库代码通过 `tracing` 记录的事件会经由其 `log` 特性转发到这里。
pub fn init_global_logger(settings: &LogSettings) {
    let console_dispatch = Dispatch::new()
        .level(settings.console_log_level)
        .chain(std::io::stderr());

    let mut final_dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(console_dispatch);

    if settings.enable_file_log {
        match get_log_file_path() {
            Ok(log_file_path) => match fern::log_file(&log_file_path) {
                Ok(log_file) => {
                    final_dispatch = final_dispatch.chain(
                        Dispatch::new()
                            .level(settings.file_log_level)
                            .chain(log_file),
                    );
                }
                Err(e) => {
                    eprintln!("无法打开日志文件 {log_file_path:?}: {e}。文件日志将被禁用。");
                }
            },
            Err(e) => eprintln!("{e}。文件日志将被禁用。"),
        }
    }

    if let Err(e) = final_dispatch.apply() {
        eprintln!("日志记录器初始化失败: {e}");
    } else {
        log::debug!("日志记录器已初始化。");
    }
}
