// ==========================================
// 配送日期规划 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 加载错误 =====
    #[error("配置文件读取失败 (path={path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 取值错误 =====
    #[error("配置取值错误 (field={field}): {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
