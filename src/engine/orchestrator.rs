// ==========================================
// 配送日期规划 - 引擎编排器
// ==========================================
// 用途: 协调 窗口扫描 → 排序 的执行顺序
// 红线: 单次确定性计算,无重试、无部分结果、无外部状态
// ==========================================

use crate::config::DeliveryPolicy;
use crate::domain::candidate::DeliveryDateCandidate;
use crate::domain::evaluation::DayEvaluation;
use crate::domain::order::OrderRequest;
use crate::engine::{DeliveryPrioritySorter, DeliveryWindowScanner};
use tracing::{info, instrument};

// ==========================================
// DeliveryDateOrchestrator - 引擎编排器
// ==========================================
pub struct DeliveryDateOrchestrator {
    scanner: DeliveryWindowScanner,
    sorter: DeliveryPrioritySorter,
}

impl DeliveryDateOrchestrator {
    pub fn new(policy: DeliveryPolicy) -> Self {
        let sorter = DeliveryPrioritySorter::from_policy(&policy);
        Self {
            scanner: DeliveryWindowScanner::new(policy),
            sorter,
        }
    }

    pub fn policy(&self) -> &DeliveryPolicy {
        self.scanner.policy()
    }

    /// 执行完整流程: 扫描 + 排序
    #[instrument(skip(self, order), fields(postal_code = %order.postal_code))]
    pub fn execute(&self, order: &OrderRequest) -> Vec<DeliveryDateCandidate> {
        // 步骤 1: 窗口扫描
        let candidates = self.scanner.scan(order);

        // 步骤 2: 排序
        let ranked = self.sorter.sort(candidates, order.requested_date());

        info!(
            eligible = ranked.len(),
            green = ranked.iter().filter(|c| c.is_green_delivery).count(),
            "可配送日计算完成"
        );

        ranked
    }

    /// 逐日解释窗口判定结果(不排序)
    pub fn explain(&self, order: &OrderRequest) -> Vec<DayEvaluation> {
        self.scanner.evaluate_window(order)
    }

    /// 对外部传入的候选日重新排序
    pub fn rank(
        &self,
        candidates: Vec<DeliveryDateCandidate>,
        requested_date: chrono::NaiveDate,
    ) -> Vec<DeliveryDateCandidate> {
        self.sorter.sort(candidates, requested_date)
    }
}
