use chrono::{DateTime, Utc};

use super::errors::ProductError;
use crate::domain::category::model::Category;

/// Longest accepted product name, in characters. Matches `tb_product.name`.
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub categories: Vec<Category>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        description: String,
        price: f64,
        img_url: Option<String>,
        date: DateTime<Utc>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            img_url,
            date,
            categories,
        }
    }
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub category_ids: Vec<i64>,
}

/// Validated product content without an identity. Used for both inserts
/// and full updates; the repository assigns or keeps the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub category_ids: Vec<i64>,
}

impl ProductDraft {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ProductError::NameTooLong);
        }

        if props.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }

        if props.price.is_nan() || props.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        let mut category_ids = props.category_ids;
        category_ids.sort_unstable();
        category_ids.dedup();

        Ok(Self {
            name: props.name,
            description: props.description,
            price: props.price,
            img_url: props.img_url.filter(|url| !url.trim().is_empty()),
            date: props.date,
            category_ids,
        })
    }
}
