// ==========================================
// 配送日期规划 - 配送策略配置
// ==========================================
// 职责: 集中管理日历策略常量(绿色日、窗口、外部下限、排序阈值、周末)
// 存储: JSON 文件(可选),缺省使用内置默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 环境变量: 显式指定策略文件路径
pub const POLICY_PATH_ENV: &str = "DELIVERY_POLICY_PATH";

const POLICY_DIR_NAME: &str = "delivery-date-planner";
const POLICY_FILE_NAME: &str = "policy.json";

/// 扫描窗口上限(天)
pub const MAX_WINDOW_DAYS: u32 = 366;

// ==========================================
// DeliveryPolicy - 配送策略
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryPolicy {
    /// 绿色配送星期(周日起算,默认周三)
    pub green_day_of_week: u32,

    /// 绿色配送日(每月几号)
    pub green_days_of_month: Vec<u32>,

    /// 扫描窗口天数(含第 0 天)
    pub window_days: u32,

    /// 外部商品最短提前天数
    pub external_min_lead_days: u32,

    /// 绿色优先排序阈值(天)
    pub near_green_threshold_days: i64,

    /// 一周最后一天(周日起算,默认周六)
    pub last_day_of_week: u32,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            green_day_of_week: 3,
            green_days_of_month: vec![5, 15, 25],
            window_days: 14,
            external_min_lead_days: 5,
            near_green_threshold_days: 3,
            last_day_of_week: 6,
        }
    }
}

impl DeliveryPolicy {
    /// 校验取值范围
    pub fn validate(&self) -> ConfigResult<()> {
        if self.green_day_of_week > 6 {
            return Err(ConfigError::InvalidValue {
                field: "green_day_of_week",
                message: format!("{} 不在 0..=6", self.green_day_of_week),
            });
        }

        if let Some(day) = self
            .green_days_of_month
            .iter()
            .find(|d| !(1..=31).contains(*d))
        {
            return Err(ConfigError::InvalidValue {
                field: "green_days_of_month",
                message: format!("{} 不在 1..=31", day),
            });
        }

        if self.window_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window_days",
                message: "扫描窗口必须至少 1 天".to_string(),
            });
        }

        if self.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "window_days",
                message: format!("{} 超过上限 {}", self.window_days, MAX_WINDOW_DAYS),
            });
        }

        if self.near_green_threshold_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "near_green_threshold_days",
                message: format!("{} 不能为负", self.near_green_threshold_days),
            });
        }

        if self.last_day_of_week > 6 {
            return Err(ConfigError::InvalidValue {
                field: "last_day_of_week",
                message: format!("{} 不在 0..=6", self.last_day_of_week),
            });
        }

        Ok(())
    }

    /// 从 JSON 字符串解析并校验(缺失字段取默认值)
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let policy: DeliveryPolicy = serde_json::from_str(raw)?;
        policy.validate()?;
        Ok(policy)
    }

    /// 从文件加载并校验
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let policy = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "已加载配送策略");
        Ok(policy)
    }

    /// 默认策略文件路径
    ///
    /// # 规则
    /// 1. 环境变量 `DELIVERY_POLICY_PATH`(非空)优先
    /// 2. 否则使用用户配置目录 `<config_dir>/delivery-date-planner/policy.json`
    /// 3. 无法获取配置目录时回退到当前目录 `./policy.json`
    pub fn default_policy_path() -> PathBuf {
        if let Ok(path) = std::env::var(POLICY_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        match dirs::config_dir() {
            Some(config_dir) => config_dir.join(POLICY_DIR_NAME).join(POLICY_FILE_NAME),
            None => PathBuf::from(".").join(POLICY_FILE_NAME),
        }
    }

    /// 加载指定路径的策略;文件不存在时返回默认策略
    pub fn load_or_default_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "策略文件不存在,使用默认策略");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// 加载默认路径的策略;文件不存在时返回默认策略
    pub fn load_or_default() -> ConfigResult<Self> {
        Self::load_or_default_from(&Self::default_policy_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        let policy = DeliveryPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.window_days, 14);
        assert_eq!(policy.external_min_lead_days, 5);
        assert_eq!(policy.near_green_threshold_days, 3);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let policy = DeliveryPolicy::from_json_str(r#"{"window_days": 7}"#).unwrap();
        assert_eq!(policy.window_days, 7);
        assert_eq!(policy.green_day_of_week, 3);
        assert_eq!(policy.green_days_of_month, vec![5, 15, 25]);
    }

    #[test]
    fn test_invalid_green_weekday_rejected() {
        let err = DeliveryPolicy::from_json_str(r#"{"green_day_of_week": 7}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "green_day_of_week",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_day_of_month_rejected() {
        let err = DeliveryPolicy::from_json_str(r#"{"green_days_of_month": [5, 32]}"#).unwrap_err();
        assert!(err.to_string().contains("green_days_of_month"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = DeliveryPolicy::from_json_str(r#"{"window_days": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "window_days", .. }));
    }

    #[test]
    fn test_oversized_window_rejected() {
        let err = DeliveryPolicy::from_json_str(r#"{"window_days": 4294967295}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "window_days", .. }));

        let policy = DeliveryPolicy::from_json_str(r#"{"window_days": 366}"#).unwrap();
        assert_eq!(policy.window_days, MAX_WINDOW_DAYS);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = DeliveryPolicy::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
