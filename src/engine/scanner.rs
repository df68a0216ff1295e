// ==========================================
// 配送日期规划 - 窗口扫描引擎
// ==========================================
// 职责: 从请求日起逐日扫描固定窗口,判定整单可配送日
// 输入: 已校验的 OrderRequest
// 输出: 候选配送日(未排序) / 逐日判定结论
// ==========================================
// 红线: 本周剩余天数只按请求日计算一次,不随候选日重算
// ==========================================

use crate::config::DeliveryPolicy;
use crate::domain::candidate::DeliveryDateCandidate;
use crate::domain::evaluation::{DayEvaluation, DayVerdict};
use crate::domain::order::OrderRequest;
use crate::engine::{EligibilityCore, GreenDayClassifier};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::{debug, instrument, warn};

// ==========================================
// DeliveryWindowScanner - 窗口扫描引擎
// ==========================================
pub struct DeliveryWindowScanner {
    policy: DeliveryPolicy,
}

impl DeliveryWindowScanner {
    pub fn new(policy: DeliveryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DeliveryPolicy {
        &self.policy
    }

    /// 逐日判定窗口内每一天
    ///
    /// # 返回
    /// 每个窗口日一条 DayEvaluation(按偏移升序);
    /// 日历越界时提前结束,不 panic
    #[instrument(
        skip(self, order),
        fields(
            postal_code = %order.postal_code,
            product_count = order.products.len(),
            window_days = self.policy.window_days
        )
    )]
    pub fn evaluate_window(&self, order: &OrderRequest) -> Vec<DayEvaluation> {
        let start = order.requested_date();
        let days_left_in_order_week =
            EligibilityCore::days_left_in_week(start, self.policy.last_day_of_week);

        let mut evaluations = Vec::new();

        for day_offset in 0..self.policy.window_days {
            let Some(date) = start.checked_add_days(Days::new(u64::from(day_offset))) else {
                warn!(day_offset, "候选日超出日历范围,提前结束扫描");
                break;
            };

            let verdict = match EligibilityCore::first_failure(
                date,
                day_offset,
                &order.products,
                days_left_in_order_week,
                self.policy.external_min_lead_days,
            ) {
                Some((product, reason)) => {
                    debug!(
                        %date,
                        day_offset,
                        product_id = product.product_id,
                        %reason,
                        "候选日不可配送"
                    );
                    DayVerdict::Rejected {
                        product_id: product.product_id,
                        product_name: product.name.clone(),
                        reason,
                    }
                }
                None => DayVerdict::Eligible {
                    is_green_delivery: GreenDayClassifier::is_green_delivery(date, &self.policy),
                },
            };

            evaluations.push(DayEvaluation {
                day_offset,
                date,
                verdict,
            });
        }

        evaluations
    }

    /// 扫描窗口,产出候选配送日(按日期升序,未排序)
    pub fn scan(&self, order: &OrderRequest) -> Vec<DeliveryDateCandidate> {
        self.evaluate_window(order)
            .into_iter()
            .filter_map(|evaluation| match evaluation.verdict {
                DayVerdict::Eligible { is_green_delivery } => Some(DeliveryDateCandidate {
                    postal_code: order.postal_code.clone(),
                    delivery_date: midnight_utc(evaluation.date),
                    is_green_delivery,
                }),
                DayVerdict::Rejected { .. } => None,
            })
            .collect()
    }
}

/// 日历日 → 当日 UTC 零点
pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
