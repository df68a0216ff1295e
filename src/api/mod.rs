// ==========================================
// 配送日期规划 - API 层
// ==========================================
// 职责: 输入校验 + 对外入口
// ==========================================

pub mod delivery_api;
pub mod error;
pub mod validator;

// 重导出核心类型
pub use delivery_api::{
    available_delivery_dates, days_left_in_the_week, is_green_delivery, sort_delivery_dates,
    DeliveryDateApi, DeliveryDateRequest, PostalCodeInput,
};
pub use error::{ApiResult, DeliveryError};
pub use validator::RequestValidator;
