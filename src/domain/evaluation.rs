// ==========================================
// 配送日期规划 - 逐日判定结果
// ==========================================
// 红线: 所有拒绝必须输出 reason(可解释性)
// 用途: 窗口解释(explain_window)与调试日志
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// IneligibleReason - 不可配送原因
// ==========================================
// 判定顺序: 星期 → 外部商品下限 → 临时商品当周 → 商品提前期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IneligibleReason {
    /// 候选日的星期不在商品可配送集合内
    WeekdayNotAllowed { weekday: u32 },
    /// 外部商品未达到固定最短提前期
    ExternalLeadFloor { day_offset: u32, floor_days: u32 },
    /// 临时商品超出下单当周剩余天数
    OutsideOrderWeek { day_offset: u32, days_left_in_week: i64 },
    /// 未达到商品自身提前天数
    BelowLeadTime { day_offset: u32, days_in_advance: u32 },
}

impl IneligibleReason {
    /// 稳定原因码
    pub fn code(&self) -> &'static str {
        match self {
            IneligibleReason::WeekdayNotAllowed { .. } => "WEEKDAY_NOT_ALLOWED",
            IneligibleReason::ExternalLeadFloor { .. } => "EXTERNAL_LEAD_FLOOR",
            IneligibleReason::OutsideOrderWeek { .. } => "OUTSIDE_ORDER_WEEK",
            IneligibleReason::BelowLeadTime { .. } => "BELOW_LEAD_TIME",
        }
    }
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::WeekdayNotAllowed { weekday } => {
                write!(f, "{}: weekday={}", self.code(), weekday)
            }
            IneligibleReason::ExternalLeadFloor {
                day_offset,
                floor_days,
            } => write!(f, "{}: day_offset={} < {}", self.code(), day_offset, floor_days),
            IneligibleReason::OutsideOrderWeek {
                day_offset,
                days_left_in_week,
            } => write!(
                f,
                "{}: day_offset={} > {}",
                self.code(),
                day_offset,
                days_left_in_week
            ),
            IneligibleReason::BelowLeadTime {
                day_offset,
                days_in_advance,
            } => write!(
                f,
                "{}: day_offset={} < {}",
                self.code(),
                day_offset,
                days_in_advance
            ),
        }
    }
}

// ==========================================
// DayVerdict / DayEvaluation - 窗口内单日结论
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayVerdict {
    Eligible {
        is_green_delivery: bool,
    },
    Rejected {
        product_id: u64,
        product_name: String,
        reason: IneligibleReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvaluation {
    pub day_offset: u32,
    pub date: NaiveDate,
    pub verdict: DayVerdict,
}

impl DayEvaluation {
    pub fn is_eligible(&self) -> bool {
        matches!(self.verdict, DayVerdict::Eligible { .. })
    }
}
