// ==========================================
// 配送日期规划 - 请求校验器
// ==========================================
// 职责: 扫描前快速失败,把原始输入转换为已校验的 OrderRequest
// 校验顺序: 邮编 → 商品 → 日期缺失 → 日期格式
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::warn;

use crate::api::error::{ApiResult, DeliveryError};
use crate::domain::order::OrderRequest;
use crate::domain::product::Product;
use crate::engine::scanner::midnight_utc;

/// 支持的无时区时间格式(按 UTC 解释)
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub struct RequestValidator;

impl RequestValidator {
    /// 校验邮编(缺失或空串即失败,原样保留)
    pub fn validate_postal_code(postal_code: Option<&str>) -> ApiResult<String> {
        match postal_code {
            Some(code) if !code.is_empty() => Ok(code.to_string()),
            _ => Err(DeliveryError::PostalCodeRequired),
        }
    }

    /// 校验商品列表(缺失或为空即失败)
    pub fn validate_products(products: Option<&[Product]>) -> ApiResult<Vec<Product>> {
        let products = match products {
            Some(list) if !list.is_empty() => list,
            _ => return Err(DeliveryError::ProductsRequired),
        };

        for product in products {
            if product.delivery_days.iter().any(|d| *d > 6) {
                warn!(
                    product_id = product.product_id,
                    "商品可配送星期包含 0..=6 以外的值,该值永远不会命中"
                );
            }
        }

        Ok(products.to_vec())
    }

    /// 解析请求日期
    ///
    /// # 支持格式
    /// - RFC 3339(任意时区,转换为 UTC)
    /// - `YYYY-MM-DDTHH:MM:SS[.fff]` / `YYYY-MM-DD HH:MM:SS[.fff]`(按 UTC)
    /// - `YYYY-MM-DD`(UTC 零点)
    pub fn parse_requested_date(requested_date: Option<&str>) -> ApiResult<DateTime<Utc>> {
        let raw = match requested_date.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(DeliveryError::DateRequired),
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(midnight_utc(date));
        }

        Err(DeliveryError::InvalidDate(raw.to_string()))
    }

    /// 组合校验,构造 OrderRequest
    pub fn build_order(
        postal_code: Option<&str>,
        products: Option<&[Product]>,
        requested_date: Option<&str>,
    ) -> ApiResult<OrderRequest> {
        let postal_code = Self::validate_postal_code(postal_code)?;
        let products = Self::validate_products(products)?;
        let requested_at = Self::parse_requested_date(requested_date)?;
        Ok(OrderRequest::new(postal_code, products, requested_at))
    }
}
