// ==========================================
// 配送日期规划 - Eligibility Core 纯函数库
// ==========================================
// 职责: 单日 × 单商品的可配送判定
// 红线: 无状态、无副作用、无 I/O 操作
// 红线: 所有拒绝必须输出 reason
// ==========================================

use crate::domain::evaluation::IneligibleReason;
use crate::domain::product::Product;
use crate::domain::types::ProductType;
use chrono::{Datelike, NaiveDate};

// ==========================================
// EligibilityCore - 纯函数工具类
// ==========================================
pub struct EligibilityCore;

impl EligibilityCore {
    /// 星期索引(周日=0 .. 周六=6)
    pub fn weekday_index(date: NaiveDate) -> u32 {
        date.weekday().num_days_from_sunday()
    }

    /// 计算本周剩余天数
    ///
    /// # 规则
    /// - days_left = last_day_of_week - weekday_index(date)
    /// - 周日起算,默认周六为最后一天: 周日 → 6 ... 周六 → 0
    /// - 若 last_day_of_week 早于 date 的星期,结果为负
    ///
    /// # 示例
    /// ```
    /// use delivery_date_planner::engine::EligibilityCore;
    /// let sunday = chrono::NaiveDate::from_ymd_opt(2023, 8, 20).unwrap();
    /// assert_eq!(EligibilityCore::days_left_in_week(sunday, 6), 6);
    /// ```
    pub fn days_left_in_week(date: NaiveDate, last_day_of_week: u32) -> i64 {
        i64::from(last_day_of_week) - i64::from(Self::weekday_index(date))
    }

    /// 判定单个商品在候选日是否可配送
    ///
    /// # 规则 (按顺序,命中即拒绝)
    /// 1. 候选日星期 ∉ delivery_days → WEEKDAY_NOT_ALLOWED
    /// 2. external 且 day_offset < external_min_lead_days → EXTERNAL_LEAD_FLOOR
    /// 3. temporary 且 day_offset > days_left_in_order_week → OUTSIDE_ORDER_WEEK
    /// 4. day_offset < days_in_advance → BELOW_LEAD_TIME
    ///
    /// # 参数
    /// - date: 候选日
    /// - day_offset: 候选日相对请求日的偏移(第 0 天起)
    /// - product: 商品
    /// - days_left_in_order_week: 请求日所在周的剩余天数(整单只算一次)
    /// - external_min_lead_days: 外部商品最短提前天数
    pub fn check_product(
        date: NaiveDate,
        day_offset: u32,
        product: &Product,
        days_left_in_order_week: i64,
        external_min_lead_days: u32,
    ) -> Result<(), IneligibleReason> {
        let weekday = Self::weekday_index(date);

        // 规则 1: 星期约束
        if !product.delivers_on(weekday) {
            return Err(IneligibleReason::WeekdayNotAllowed { weekday });
        }

        // 规则 2/3: 按商品类型
        match product.product_type {
            ProductType::External if day_offset < external_min_lead_days => {
                return Err(IneligibleReason::ExternalLeadFloor {
                    day_offset,
                    floor_days: external_min_lead_days,
                });
            }
            ProductType::Temporary if i64::from(day_offset) > days_left_in_order_week => {
                return Err(IneligibleReason::OutsideOrderWeek {
                    day_offset,
                    days_left_in_week: days_left_in_order_week,
                });
            }
            ProductType::Normal | ProductType::External | ProductType::Temporary => {}
        }

        // 规则 4: 商品自身提前期
        if day_offset < product.days_in_advance {
            return Err(IneligibleReason::BelowLeadTime {
                day_offset,
                days_in_advance: product.days_in_advance,
            });
        }

        Ok(())
    }

    /// 找出第一个在候选日不可配送的商品(短路)
    ///
    /// # 返回
    /// - None: 所有商品均可配送
    /// - Some((product, reason)): 第一个失败商品及原因
    pub fn first_failure<'a>(
        date: NaiveDate,
        day_offset: u32,
        products: &'a [Product],
        days_left_in_order_week: i64,
        external_min_lead_days: u32,
    ) -> Option<(&'a Product, IneligibleReason)> {
        products.iter().find_map(|product| {
            Self::check_product(
                date,
                day_offset,
                product,
                days_left_in_order_week,
                external_min_lead_days,
            )
            .err()
            .map(|reason| (product, reason))
        })
    }

    /// 候选日是否对所有商品均可配送
    pub fn is_day_eligible(
        date: NaiveDate,
        day_offset: u32,
        products: &[Product],
        days_left_in_order_week: i64,
        external_min_lead_days: u32,
    ) -> bool {
        Self::first_failure(
            date,
            day_offset,
            products,
            days_left_in_order_week,
            external_min_lead_days,
        )
        .is_none()
    }
}
