// ==========================================
// 配送日期规划 - 配置层
// ==========================================
// 职责: 日历策略常量集中管理,支持 JSON 文件覆写
// ==========================================

pub mod delivery_policy;
pub mod error;

// 重导出核心配置
pub use delivery_policy::{DeliveryPolicy, POLICY_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
