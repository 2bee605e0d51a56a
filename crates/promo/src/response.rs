//! JSON wire types for evaluation results.
//!
//! The engine's domain result converts into the response body shape the
//! checkout and cart endpoints embed directly: camelCase keys, an `isValid`
//! flag, and absent fields omitted rather than serialized as `null`.

use rust_decimal::Decimal;
use serde::Serialize;

use saltbox_core::PromoCode;

use crate::evaluator::{AppliedPromo, Evaluation};

/// Wire-facing evaluation result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Whether the code applies.
    pub is_valid: bool,

    /// Customer-facing rejection message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Total monetary discount, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,

    /// The code that was evaluated, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,

    /// The full promo record, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PromoCode>,

    /// Staff comp-code marker, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl From<Evaluation> for EvaluationResult {
    fn from(evaluation: Evaluation) -> Self {
        match evaluation {
            Evaluation::Applied(applied) => Self::from(applied),
            Evaluation::Rejected(rejection) => Self {
                is_valid: false,
                error: Some(rejection.to_string()),
                discount: None,
                promo_code: None,
                details: None,
                is_admin: None,
            },
        }
    }
}

impl From<AppliedPromo> for EvaluationResult {
    fn from(applied: AppliedPromo) -> Self {
        Self {
            is_valid: true,
            error: None,
            discount: Some(applied.discount),
            promo_code: Some(applied.promo.code.clone()),
            details: Some(applied.promo),
            is_admin: Some(applied.is_admin),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::rejection::Rejection;

    use super::*;

    fn applied(code: &str, discount: Decimal) -> AppliedPromo {
        AppliedPromo {
            discount,
            promo: PromoCode {
                code: code.to_string(),
                is_active: true,
                percentage_off: Decimal::from(10),
                is_bogo: false,
                bogo_buy_count: 0,
                bogo_get_count: 0,
                free_shipping: false,
                all_cart: true,
                eligible_product_slugs: Vec::new(),
                eligible_customer_ids: Vec::new(),
            },
            is_admin: false,
        }
    }

    #[test]
    fn test_valid_result_shape() {
        let result =
            EvaluationResult::from(Evaluation::Applied(applied("TEN", Decimal::from(25))));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["isValid"], serde_json::Value::Bool(true));
        assert_eq!(json["promoCode"], serde_json::Value::from("TEN"));
        assert_eq!(json["isAdmin"], serde_json::Value::Bool(false));
        assert_eq!(json["details"]["code"], serde_json::Value::from("TEN"));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_invalid_result_shape() {
        let result =
            EvaluationResult::from(Evaluation::Rejected(Rejection::InsufficientCartQuantity));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["isValid"], serde_json::Value::Bool(false));
        assert_eq!(json["error"], serde_json::Value::from("Not enough products in cart"));
        assert!(json.get("discount").is_none());
        assert!(json.get("promoCode").is_none());
        assert!(json.get("details").is_none());
        assert!(json.get("isAdmin").is_none());
    }
}
