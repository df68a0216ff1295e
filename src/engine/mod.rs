// ==========================================
// 配送日期规划 - 引擎层
// ==========================================
// 职责: 实现配送规则引擎
// 红线: 纯计算,无 I/O; 所有拒绝必须输出 reason
// ==========================================

pub mod eligibility_core;
pub mod green_day;
pub mod orchestrator;
pub mod priority;
pub mod scanner;

// 重导出核心引擎
pub use eligibility_core::EligibilityCore;
pub use green_day::GreenDayClassifier;
pub use orchestrator::DeliveryDateOrchestrator;
pub use priority::DeliveryPrioritySorter;
pub use scanner::DeliveryWindowScanner;
