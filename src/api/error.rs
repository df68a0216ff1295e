// ==========================================
// 配送日期规划 - API层错误类型
// ==========================================
// 职责: 输入校验错误(扫描前快速失败)
// 注: 窗口内无可配送日不是错误,返回空列表
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum DeliveryError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("postal code required")]
    PostalCodeRequired,

    #[error("products required")]
    ProductsRequired,

    #[error("date required")]
    DateRequired,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DeliveryError {
    /// 稳定错误码
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryError::PostalCodeRequired => "POSTAL_CODE_REQUIRED",
            DeliveryError::ProductsRequired => "PRODUCTS_REQUIRED",
            DeliveryError::DateRequired => "DATE_REQUIRED",
            DeliveryError::InvalidDate(_) => "INVALID_DATE",
            DeliveryError::Config(_) => "INVALID_POLICY",
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, DeliveryError>;
