// ==========================================
// 配送日期规划 - 核心库
// ==========================================
// 系统定位: 纯同步计算(无持久化、无网络、无并发)
// 输入: 邮编 + 订单商品 + 请求日期
// 输出: 按绿色优先规则排序的可配送日期
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 配送规则
pub mod engine;

// 配置层 - 日历策略
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 对外入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DayEvaluation, DayVerdict, DeliveryDateCandidate, IneligibleReason, OrderRequest, Product,
    ProductType,
};

// 配置
pub use config::{ConfigError, DeliveryPolicy};

// 引擎
pub use engine::{
    DeliveryDateOrchestrator, DeliveryPrioritySorter, DeliveryWindowScanner, EligibilityCore,
    GreenDayClassifier,
};

// API
pub use api::{
    available_delivery_dates, days_left_in_the_week, is_green_delivery, sort_delivery_dates,
    ApiResult, DeliveryDateApi, DeliveryDateRequest, DeliveryError,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "配送日期规划";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
