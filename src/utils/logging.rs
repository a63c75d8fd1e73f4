// 文件日志
//
// 图算法只通过 log 宏输出摘要（debug）和被拒绝的输入（warn），
// 日志写到哪里由宿主程序通过 `LogConfig` 决定。本模块不会被库自动调用。

use std::sync::Mutex;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::LogConfig;

/// 当前进程持有的 flexi_logger 句柄；`None` 表示未初始化或已关闭
static ACTIVE_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

fn file_spec(config: &LogConfig) -> FileSpec {
    FileSpec::default()
        .directory(&config.dir)
        .basename(&config.file)
}

/// 按 `LogConfig` 启动异步文件日志，超过 `max_file_size` 时按序号滚动，
/// 最多保留 `max_files` 个旧文件
///
/// 同一进程只能启动一次；已启动时返回错误。
///
/// ```no_run
/// use graphcore::config::Config;
/// use graphcore::utils::logging;
///
/// let config = Config::load("graphcore.toml").expect("配置加载失败");
/// logging::init(&config.log).expect("日志初始化失败");
/// // ... 构建图、运行算法 ...
/// logging::shutdown();
/// ```
pub fn init(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut active = ACTIVE_HANDLE
        .lock()
        .map_err(|_| "日志句柄锁已被污染")?;
    if active.is_some() {
        return Err("日志系统已经初始化".into());
    }

    let rotation = Criterion::Size(config.max_file_size);
    let handle = Logger::try_with_str(&config.level)?
        .log_to_file(file_spec(config))
        .rotate(rotation, Naming::Numbers, Cleanup::KeepLogFiles(config.max_files))
        .write_mode(WriteMode::Async)
        .append()
        .start()?;
    *active = Some(handle);

    log::info!(
        "图日志已启动: level={}, 目录={}, 文件={}",
        config.level,
        config.dir,
        config.file
    );
    Ok(())
}

/// 写出缓冲中的日志并停止写线程
///
/// 关闭后 log 宏变为空操作，之后的算法调用不会再尝试写文件。
pub fn shutdown() {
    let Ok(mut active) = ACTIVE_HANDLE.lock() else {
        return;
    };
    if let Some(handle) = active.take() {
        log::set_max_level(log::LevelFilter::Off);
        handle.flush();
        handle.shutdown();
    }
}

pub fn is_initialized() -> bool {
    ACTIVE_HANDLE
        .lock()
        .map(|active| active.is_some())
        .unwrap_or(false)
}
