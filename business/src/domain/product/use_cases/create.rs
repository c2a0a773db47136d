use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub category_ids: Vec<i64>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
