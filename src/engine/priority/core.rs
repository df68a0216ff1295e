use crate::config::DeliveryPolicy;
use crate::domain::candidate::DeliveryDateCandidate;
use chrono::NaiveDate;
use std::cmp::Ordering;

// ==========================================
// DeliveryPrioritySorter - 候选配送日排序引擎
// ==========================================
pub struct DeliveryPrioritySorter {
    near_green_threshold_days: i64,
}

impl DeliveryPrioritySorter {
    /// 构造函数
    ///
    /// # 参数
    /// - `near_green_threshold_days`: 绿色优先阈值(天)
    pub fn new(near_green_threshold_days: i64) -> Self {
        Self {
            near_green_threshold_days,
        }
    }

    pub fn from_policy(policy: &DeliveryPolicy) -> Self {
        Self::new(policy.near_green_threshold_days)
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序候选配送日(稳定排序)
    ///
    /// 排序键:
    /// 1) 近期绿色(绿色 且 距请求日 ≤ 阈值)优先
    /// 2) 日期升序
    ///
    /// # 参数
    /// - `candidates`: 待排序的候选配送日
    /// - `requested_date`: 请求日(UTC 日历日)
    pub fn sort(
        &self,
        mut candidates: Vec<DeliveryDateCandidate>,
        requested_date: NaiveDate,
    ) -> Vec<DeliveryDateCandidate> {
        candidates.sort_by(|a, b| self.compare(a, b, requested_date));
        candidates
    }

    /// 是否为近期绿色配送日
    pub fn is_near_green(
        &self,
        candidate: &DeliveryDateCandidate,
        requested_date: NaiveDate,
    ) -> bool {
        candidate.is_green_delivery
            && candidate.days_from(requested_date) <= self.near_green_threshold_days
    }

    // ==========================================
    // 比较方法
    // ==========================================

    /// 比较两个候选日的优先级
    ///
    /// # 返回
    /// Ordering::Less 表示 a 优先于 b
    pub fn compare(
        &self,
        a: &DeliveryDateCandidate,
        b: &DeliveryDateCandidate,
        requested_date: NaiveDate,
    ) -> Ordering {
        let a_near_green = self.is_near_green(a, requested_date);
        let b_near_green = self.is_near_green(b, requested_date);

        // 规则 1: a 近期绿色,b 不是 → a 优先
        if a_near_green && !b_near_green {
            return Ordering::Less;
        }

        // 规则 2: b 近期绿色,a 不是 → b 优先
        if b_near_green && !a_near_green {
            return Ordering::Greater;
        }

        // 规则 3: 按日期值升序(不比较序列化字符串)
        a.delivery_date.cmp(&b.delivery_date)
    }
}
