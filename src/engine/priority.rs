// ==========================================
// 配送日期规划 - 候选配送日排序引擎
// ==========================================
// 职责: 近期绿色配送日优先,其余按日期升序
// 输入: 窗口扫描产出的候选配送日
// 输出: 排序后的候选配送日
// ==========================================
// 注: 不是纯时间排序
// ==========================================

mod core;

#[cfg(test)]
mod tests;

pub use self::core::DeliveryPrioritySorter;
