// ==========================================
// 配送日期规划 - 领域类型定义
// ==========================================
// 职责: 封闭枚举（商品类型）与星期索引约定
// 约定: 星期索引以周日为 0,周六为 6
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 商品类型 (Product Type)
// ==========================================
// 序列化格式: lowercase (与请求 JSON 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Normal,    // 普通商品
    External,  // 外部供应商商品(受最短提前期下限约束)
    Temporary, // 临时商品(必须在下单当周内送达)
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Normal => write!(f, "normal"),
            ProductType::External => write!(f, "external"),
            ProductType::Temporary => write!(f, "temporary"),
        }
    }
}

impl Default for ProductType {
    fn default() -> Self {
        ProductType::Normal
    }
}

// ==========================================
// 星期索引常量 (周日起算)
// ==========================================
pub const SUNDAY: u32 = 0;
pub const MONDAY: u32 = 1;
pub const TUESDAY: u32 = 2;
pub const WEDNESDAY: u32 = 3;
pub const THURSDAY: u32 = 4;
pub const FRIDAY: u32 = 5;
pub const SATURDAY: u32 = 6;

/// 周一至周五
pub const WEEKDAYS: [u32; 5] = [MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY];

/// 全周
pub const ALL_DAYS: [u32; 7] = [SUNDAY, MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY];
