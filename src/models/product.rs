use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// DB models

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_percentage: Decimal,
    pub rating: Decimal,
    pub stock: i32,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Request types

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub discount_percentage: Decimal,
    #[serde(default)]
    pub rating: Decimal,
    #[serde(default)]
    pub stock: i32,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.price < Decimal::ZERO {
            return Err("price must not be negative".to_string());
        }
        if self.discount_percentage < Decimal::ZERO
            || self.discount_percentage > Decimal::ONE_HUNDRED
        {
            return Err("discount_percentage must be between 0 and 100".to_string());
        }
        if self.stock < 0 {
            return Err("stock must not be negative".to_string());
        }
        Ok(())
    }
}

// Response types

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: Product,
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkInsertResponse {
    pub success: bool,
    pub product_ids: Vec<i32>,
}
