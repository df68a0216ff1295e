// ==========================================
// 配送日期规划 - 商品领域模型
// ==========================================
// 用途: 调用方持有,引擎层只读
// 对齐: 请求 JSON 使用 camelCase 字段名
// ==========================================

use crate::domain::types::ProductType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Product - 订单商品
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    // ===== 标识 =====
    #[serde(alias = "id")]
    pub product_id: u64, // 商品ID
    pub name: String, // 商品名称

    // ===== 配送约束 =====
    pub delivery_days: BTreeSet<u32>, // 可配送星期集合(0=周日..6=周六)
    #[serde(default)]
    pub product_type: ProductType, // 商品类型
    #[serde(default)]
    pub days_in_advance: u32, // 最短提前天数(缺省 0)
}

impl Product {
    /// 构造商品
    pub fn new(
        product_id: u64,
        name: impl Into<String>,
        delivery_days: impl IntoIterator<Item = u32>,
        product_type: ProductType,
        days_in_advance: u32,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            delivery_days: delivery_days.into_iter().collect(),
            product_type,
            days_in_advance,
        }
    }

    /// 该商品是否允许在指定星期配送
    pub fn delivers_on(&self, weekday_index: u32) -> bool {
        self.delivery_days.contains(&weekday_index)
    }
}
