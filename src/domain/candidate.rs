// ==========================================
// 配送日期规划 - 候选配送日
// ==========================================
// 用途: 窗口扫描产出,创建后不可变,返回调用方
// 对齐: JSON 形状 {postalCode, deliveryDate, isGreenDelivery}
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DeliveryDateCandidate - 候选配送日
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDateCandidate {
    pub postal_code: String, // 邮编
    #[serde(with = "iso_millis")]
    pub delivery_date: DateTime<Utc>, // 配送日(UTC 零点)
    pub is_green_delivery: bool, // 绿色配送标记
}

impl DeliveryDateCandidate {
    /// 配送日的日历日期
    pub fn delivery_day(&self) -> NaiveDate {
        self.delivery_date.date_naive()
    }

    /// 相对请求日的整天距离(可为负)
    pub fn days_from(&self, requested_date: NaiveDate) -> i64 {
        self.delivery_day()
            .signed_duration_since(requested_date)
            .num_days()
    }
}

/// 毫秒精度的 UTC ISO-8601 序列化,例如 `2023-08-28T00:00:00.000Z`
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialized_shape() {
        let candidate = DeliveryDateCandidate {
            postal_code: "14162".to_string(),
            delivery_date: Utc.with_ymd_and_hms(2023, 8, 28, 0, 0, 0).unwrap(),
            is_green_delivery: false,
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["postalCode"], "14162");
        assert_eq!(json["deliveryDate"], "2023-08-28T00:00:00.000Z");
        assert_eq!(json["isGreenDelivery"], false);
    }

    #[test]
    fn test_days_from_requested_date() {
        let candidate = DeliveryDateCandidate {
            postal_code: "1000".to_string(),
            delivery_date: Utc.with_ymd_and_hms(2023, 8, 24, 0, 0, 0).unwrap(),
            is_green_delivery: true,
        };
        let requested = NaiveDate::from_ymd_opt(2023, 8, 21).unwrap();

        assert_eq!(candidate.days_from(requested), 3);
        assert_eq!(candidate.delivery_day(), NaiveDate::from_ymd_opt(2023, 8, 24).unwrap());
    }
}
