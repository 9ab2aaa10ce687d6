use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Sale {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

// Request types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSaleRequest {
    pub product_id: i32,
    pub quantity: i32,
}

// Response types

#[derive(Debug, Serialize)]
pub struct AddSaleResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sale_request_uses_camel_case_fields() {
        let req: AddSaleRequest =
            serde_json::from_str(r#"{"productId":7,"quantity":2}"#).unwrap();

        assert_eq!(req.product_id, 7);
        assert_eq!(req.quantity, 2);
    }

    #[test]
    fn add_sale_response_serializes_success_flag() {
        let body = serde_json::to_value(AddSaleResponse { success: true }).unwrap();

        assert_eq!(body, serde_json::json!({ "success": true }));
    }
}
