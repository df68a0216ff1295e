// ==========================================
// 配送日期规划 - 领域模型层
// ==========================================
// 职责: 定义领域实体、封闭枚举、判定结果
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod candidate;
pub mod evaluation;
pub mod order;
pub mod product;
pub mod types;

// 重导出核心类型
pub use candidate::DeliveryDateCandidate;
pub use evaluation::{DayEvaluation, DayVerdict, IneligibleReason};
pub use order::OrderRequest;
pub use product::Product;
pub use types::ProductType;
