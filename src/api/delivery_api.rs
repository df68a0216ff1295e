// ==========================================
// 配送日期规划 - 可配送日期 API
// ==========================================
// 职责:
// - 校验输入(邮编/商品/日期),失败即返回,不做任何计算
// - 调用引擎编排器完成 扫描 → 排序
// - 提供绿色配送日、本周剩余天数等纯函数入口
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::error::ApiResult;
use crate::api::validator::RequestValidator;
use crate::config::DeliveryPolicy;
use crate::domain::candidate::DeliveryDateCandidate;
use crate::domain::evaluation::DayEvaluation;
use crate::domain::order::OrderRequest;
use crate::domain::product::Product;
use crate::engine::{DeliveryDateOrchestrator, EligibilityCore, GreenDayClassifier};

// ==========================================
// 请求 DTO
// ==========================================

/// 邮编输入(JSON 中可为字符串或任意数字)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostalCodeInput {
    Text(String),
    Number(serde_json::Number),
}

impl PostalCodeInput {
    /// 规范化为字符串; 数值 0 视为缺失
    ///
    /// 整数原样输出; 小数按最短形式输出(`14162.0` → `"14162"`)
    pub fn normalized(&self) -> Option<String> {
        match self {
            PostalCodeInput::Text(text) => Some(text.clone()),
            PostalCodeInput::Number(n) => {
                if let Some(v) = n.as_u64() {
                    (v != 0).then(|| v.to_string())
                } else if let Some(v) = n.as_i64() {
                    Some(v.to_string())
                } else {
                    n.as_f64().filter(|v| *v != 0.0).map(|v| v.to_string())
                }
            }
        }
    }
}

/// 原始请求(字段均可缺失,由校验器统一报错)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDateRequest {
    #[serde(default)]
    pub postal_code: Option<PostalCodeInput>,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default, alias = "providedDate")]
    pub requested_date: Option<String>,
}

impl DeliveryDateRequest {
    /// 转换为已校验的 OrderRequest
    pub fn validate(&self) -> ApiResult<OrderRequest> {
        let postal_code = self.postal_code.as_ref().and_then(PostalCodeInput::normalized);
        RequestValidator::build_order(
            postal_code.as_deref(),
            self.products.as_deref(),
            self.requested_date.as_deref(),
        )
    }
}

// ==========================================
// DeliveryDateApi - 可配送日期 API
// ==========================================
pub struct DeliveryDateApi {
    orchestrator: DeliveryDateOrchestrator,
}

impl DeliveryDateApi {
    /// 使用默认策略
    pub fn new() -> Self {
        Self {
            orchestrator: DeliveryDateOrchestrator::new(DeliveryPolicy::default()),
        }
    }

    /// 使用自定义策略(先校验)
    pub fn with_policy(policy: DeliveryPolicy) -> ApiResult<Self> {
        policy.validate()?;
        Ok(Self {
            orchestrator: DeliveryDateOrchestrator::new(policy),
        })
    }

    pub fn policy(&self) -> &DeliveryPolicy {
        self.orchestrator.policy()
    }

    // ==========================================
    // 可配送日期
    // ==========================================

    /// 计算可配送日期(请求日期为字符串)
    ///
    /// # 参数
    /// - postal_code: 邮编(空串视为缺失,原样写入候选日)
    /// - products: 订单商品(不可为空)
    /// - requested_date: 请求日期(空串视为缺失)
    ///
    /// # 返回
    /// 排序后的候选配送日; 无可配送日时返回空列表
    #[instrument(skip(self, products), fields(product_count = products.len()))]
    pub fn available_delivery_dates(
        &self,
        postal_code: &str,
        products: &[Product],
        requested_date: &str,
    ) -> ApiResult<Vec<DeliveryDateCandidate>> {
        let order =
            RequestValidator::build_order(Some(postal_code), Some(products), Some(requested_date))?;
        Ok(self.orchestrator.execute(&order))
    }

    /// 计算可配送日期(请求时间已是 UTC 时间)
    pub fn available_delivery_dates_at(
        &self,
        postal_code: &str,
        products: &[Product],
        requested_at: DateTime<Utc>,
    ) -> ApiResult<Vec<DeliveryDateCandidate>> {
        let postal_code = RequestValidator::validate_postal_code(Some(postal_code))?;
        let products = RequestValidator::validate_products(Some(products))?;
        let order = OrderRequest::new(postal_code, products, requested_at);
        Ok(self.orchestrator.execute(&order))
    }

    /// 处理原始请求 DTO
    pub fn handle_request(
        &self,
        request: &DeliveryDateRequest,
    ) -> ApiResult<Vec<DeliveryDateCandidate>> {
        let order = request.validate()?;
        Ok(self.orchestrator.execute(&order))
    }

    /// 逐日解释窗口判定结果
    pub fn explain_window(&self, request: &DeliveryDateRequest) -> ApiResult<Vec<DayEvaluation>> {
        let order = request.validate()?;
        Ok(self.orchestrator.explain(&order))
    }

    // ==========================================
    // 纯函数入口
    // ==========================================

    /// 对候选日重新排序
    pub fn sort_delivery_dates(
        &self,
        candidates: Vec<DeliveryDateCandidate>,
        requested_date: NaiveDate,
    ) -> Vec<DeliveryDateCandidate> {
        self.orchestrator.rank(candidates, requested_date)
    }

    pub fn is_green_delivery(&self, date: NaiveDate) -> bool {
        GreenDayClassifier::is_green_delivery(date, self.policy())
    }

    pub fn days_left_in_the_week(&self, date: NaiveDate) -> i64 {
        EligibilityCore::days_left_in_week(date, self.policy().last_day_of_week)
    }
}

impl Default for DeliveryDateApi {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 默认策略下的便捷函数
// ==========================================

/// 计算可配送日期(默认策略)
pub fn available_delivery_dates(
    postal_code: &str,
    products: &[Product],
    requested_date: &str,
) -> ApiResult<Vec<DeliveryDateCandidate>> {
    DeliveryDateApi::new().available_delivery_dates(postal_code, products, requested_date)
}

/// 是否为绿色配送日(默认策略)
pub fn is_green_delivery(date: NaiveDate) -> bool {
    GreenDayClassifier::is_green_delivery(date, &DeliveryPolicy::default())
}

/// 本周剩余天数(周日 6 .. 周六 0)
pub fn days_left_in_the_week(date: NaiveDate) -> i64 {
    EligibilityCore::days_left_in_week(date, DeliveryPolicy::default().last_day_of_week)
}

/// 候选日排序(默认策略)
pub fn sort_delivery_dates(
    candidates: Vec<DeliveryDateCandidate>,
    requested_date: NaiveDate,
) -> Vec<DeliveryDateCandidate> {
    DeliveryDateApi::new().sort_delivery_dates(candidates, requested_date)
}
