// ==========================================
// DeliveryPolicy 集成测试
// ==========================================
// 测试目标: 验证策略文件加载、默认回退、校验失败
// ==========================================

use delivery_date_planner::config::{ConfigError, DeliveryPolicy};
use delivery_date_planner::DeliveryDateApi;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn write_policy(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes()).expect("Failed to write policy");
    file
}

#[test]
fn test_load_policy_from_file() {
    let file = write_policy(
        r#"{
            "green_day_of_week": 5,
            "green_days_of_month": [1],
            "window_days": 10,
            "external_min_lead_days": 2,
            "near_green_threshold_days": 4,
            "last_day_of_week": 6
        }"#,
    );

    let policy = DeliveryPolicy::load_from_file(file.path()).expect("Should load policy");
    assert_eq!(policy.green_day_of_week, 5);
    assert_eq!(policy.green_days_of_month, vec![1]);
    assert_eq!(policy.window_days, 10);
    assert_eq!(policy.external_min_lead_days, 2);
    assert_eq!(policy.near_green_threshold_days, 4);
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.json");

    let policy = DeliveryPolicy::load_or_default_from(&path).expect("Should fall back");
    assert_eq!(policy, DeliveryPolicy::default());
}

#[test]
fn test_load_from_missing_file_is_read_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.json");

    let err = DeliveryPolicy::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_policy(r#"{"last_day_of_week": 9}"#);

    let err = DeliveryPolicy::load_or_default_from(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "last_day_of_week",
            ..
        }
    ));
}

#[test]
fn test_oversized_window_file_is_rejected() {
    let file = write_policy(r#"{"window_days": 4294967295}"#);

    let err = DeliveryPolicy::load_from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "window_days",
            ..
        }
    ));
}

#[test]
fn test_loaded_policy_drives_api() {
    // 绿色星期改为周一,阈值 0 → 周一当天排第一
    let file = write_policy(r#"{"green_day_of_week": 1, "green_days_of_month": [], "near_green_threshold_days": 0}"#);
    let policy = DeliveryPolicy::load_from_file(file.path()).unwrap();
    let api = DeliveryDateApi::with_policy(policy).unwrap();

    let products = vec![delivery_date_planner::Product::new(
        1,
        "Bread",
        [0, 1, 2, 3, 4, 5, 6],
        delivery_date_planner::ProductType::Normal,
        0,
    )];
    let result = api
        .available_delivery_dates("14162", &products, "2023-08-20")
        .unwrap();

    // 08-20 周日; 08-21 周一距离 1 天 > 0,不提前 → 纯时间顺序
    assert_eq!(result[0].delivery_day().to_string(), "2023-08-20");
    assert!(result[1].is_green_delivery);

    let result = api
        .available_delivery_dates("14162", &products, "2023-08-21")
        .unwrap();
    assert_eq!(result[0].delivery_day().to_string(), "2023-08-21");
    assert!(result[0].is_green_delivery);
}

#[test]
fn test_default_policy_path_honours_env() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("policy.json");

    std::env::set_var(delivery_date_planner::config::POLICY_PATH_ENV, &path);
    let resolved = DeliveryPolicy::default_policy_path();
    std::env::remove_var(delivery_date_planner::config::POLICY_PATH_ENV);

    assert_eq!(resolved, path);
}
