use super::DeliveryPrioritySorter;
use crate::domain::candidate::DeliveryDateCandidate;
use chrono::{Duration, NaiveDate, TimeZone, Utc};

// ==========================================
// 测试辅助函数
// ==========================================

fn requested_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 8, 21).unwrap()
}

/// 创建距请求日 offset 天的候选日
fn create_candidate(offset: i64, is_green_delivery: bool) -> DeliveryDateCandidate {
    let base = Utc.with_ymd_and_hms(2023, 8, 21, 0, 0, 0).unwrap();
    DeliveryDateCandidate {
        postal_code: "14162".to_string(),
        delivery_date: base + Duration::days(offset),
        is_green_delivery,
    }
}

fn offsets(sorted: &[DeliveryDateCandidate]) -> Vec<i64> {
    sorted.iter().map(|c| c.days_from(requested_date())).collect()
}

// ==========================================
// 正常案例测试
// ==========================================

#[test]
fn test_scenario_01_near_green_first() {
    // 场景1: +2/+3 为近期绿色,排在 +1/+4 之前
    let sorter = DeliveryPrioritySorter::new(3);

    let candidates = vec![
        create_candidate(2, true),
        create_candidate(4, false),
        create_candidate(1, false),
        create_candidate(3, true),
    ];
    let sorted = sorter.sort(candidates, requested_date());

    assert_eq!(offsets(&sorted), vec![2, 3, 1, 4]);
}

#[test]
fn test_scenario_02_distant_green_not_promoted() {
    // 场景2: 绿色但超出阈值,按日期排序
    let sorter = DeliveryPrioritySorter::new(3);

    let candidates = vec![
        create_candidate(9, true),
        create_candidate(7, false),
        create_candidate(8, false),
    ];
    let sorted = sorter.sort(candidates, requested_date());

    assert_eq!(offsets(&sorted), vec![7, 8, 9]);
}

#[test]
fn test_scenario_03_threshold_is_inclusive() {
    // 场景3: 距离恰好等于阈值也优先
    let sorter = DeliveryPrioritySorter::new(3);

    let candidates = vec![create_candidate(0, false), create_candidate(3, true)];
    let sorted = sorter.sort(candidates, requested_date());

    assert_eq!(offsets(&sorted), vec![3, 0]);
}

#[test]
fn test_scenario_04_all_plain_is_chronological() {
    // 场景4: 无绿色候选 → 纯时间顺序
    let sorter = DeliveryPrioritySorter::new(3);

    let candidates = vec![
        create_candidate(5, false),
        create_candidate(0, false),
        create_candidate(12, false),
        create_candidate(2, false),
    ];
    let sorted = sorter.sort(candidates, requested_date());

    assert_eq!(offsets(&sorted), vec![0, 2, 5, 12]);
}

#[test]
fn test_scenario_05_mixed_near_and_distant_green() {
    // 场景5: 近期绿色在前,远期绿色与普通日按时间混排
    let sorter = DeliveryPrioritySorter::new(3);

    let candidates = vec![
        create_candidate(9, true),
        create_candidate(1, true),
        create_candidate(4, true),
        create_candidate(0, false),
        create_candidate(2, true),
    ];
    let sorted = sorter.sort(candidates, requested_date());

    assert_eq!(offsets(&sorted), vec![1, 2, 0, 4, 9]);
}

// ==========================================
// 边界案例测试
// ==========================================

#[test]
fn test_zero_threshold_only_promotes_same_day() {
    let sorter = DeliveryPrioritySorter::new(0);

    let candidates = vec![
        create_candidate(1, true),
        create_candidate(0, true),
        create_candidate(0, false),
    ];
    let sorted = sorter.sort(candidates, requested_date());

    // 同日两条: 绿色在前
    assert_eq!(offsets(&sorted), vec![0, 0, 1]);
    assert!(sorted[0].is_green_delivery);
    assert!(!sorted[1].is_green_delivery);
}

#[test]
fn test_empty_input() {
    let sorter = DeliveryPrioritySorter::new(3);
    assert!(sorter.sort(Vec::new(), requested_date()).is_empty());
}

#[test]
fn test_sort_is_deterministic() {
    let sorter = DeliveryPrioritySorter::new(3);
    let build = || {
        vec![
            create_candidate(6, true),
            create_candidate(2, false),
            create_candidate(3, true),
            create_candidate(1, true),
        ]
    };

    let first = sorter.sort(build(), requested_date());
    let second = sorter.sort(build(), requested_date());
    assert_eq!(first, second);
    assert_eq!(offsets(&first), vec![1, 3, 2, 6]);
}
