// ==========================================
// 配送日期规划 - 绿色配送日判定
// ==========================================
// 规则: 星期 = 绿色星期 或 日 ∈ 绿色日集合
// 红线: 纯函数,与商品无关
// ==========================================

use crate::config::DeliveryPolicy;
use crate::engine::EligibilityCore;
use chrono::{Datelike, NaiveDate};

pub struct GreenDayClassifier;

impl GreenDayClassifier {
    /// 判定日期是否为绿色配送日
    pub fn is_green_delivery(date: NaiveDate, policy: &DeliveryPolicy) -> bool {
        EligibilityCore::weekday_index(date) == policy.green_day_of_week
            || policy.green_days_of_month.contains(&date.day())
    }
}
