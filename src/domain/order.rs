// ==========================================
// 配送日期规划 - 订单请求模型
// ==========================================
// 用途: 每次调用构造一次,已通过校验
// 红线: 邮编非空、商品非空、请求时间有效(由 api::validator 保证)
// ==========================================

use crate::domain::product::Product;
use chrono::{DateTime, NaiveDate, Utc};

// ==========================================
// OrderRequest - 已校验的订单请求
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub postal_code: String,        // 邮编
    pub products: Vec<Product>,     // 订单商品(按请求顺序)
    pub requested_at: DateTime<Utc>, // 请求起始时间(UTC)
}

impl OrderRequest {
    pub fn new(
        postal_code: impl Into<String>,
        products: Vec<Product>,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            products,
            requested_at,
        }
    }

    /// 请求时间对应的 UTC 日历日(窗口第 0 天)
    pub fn requested_date(&self) -> NaiveDate {
        self.requested_at.date_naive()
    }
}
