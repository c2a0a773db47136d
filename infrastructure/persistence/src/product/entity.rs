use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self, categories: Vec<Category>) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.img_url,
            self.date,
            categories,
        )
    }
}

/// One row of the product/category join, carrying the category columns.
#[derive(Debug, FromRow)]
pub struct ProductCategoryEntity {
    pub product_id: i64,
    pub id: i64,
    pub name: String,
}

/// Groups join rows by product id, keeping row order within each product.
pub fn group_by_product(rows: Vec<ProductCategoryEntity>) -> HashMap<i64, Vec<Category>> {
    let mut grouped: HashMap<i64, Vec<Category>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.product_id)
            .or_default()
            .push(Category::new(row.id, row.name));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product_id: i64, id: i64, name: &str) -> ProductCategoryEntity {
        ProductCategoryEntity {
            product_id,
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn should_group_categories_by_product() {
        let grouped = group_by_product(vec![
            row(1, 2, "Electronics"),
            row(1, 3, "Computers"),
            row(4, 1, "Books"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped[&1],
            vec![Category::new(2, "Electronics"), Category::new(3, "Computers")]
        );
        assert_eq!(grouped[&4], vec![Category::new(1, "Books")]);
    }

    #[test]
    fn should_map_entity_into_domain_product() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: 1,
            name: "The Lord of the Rings".to_string(),
            description: "Fantasy novel".to_string(),
            price: 90.5,
            img_url: None,
            date: now,
        };

        let product = entity.into_domain(vec![Category::new(1, "Books")]);

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "The Lord of the Rings");
        assert_eq!(product.date, now);
        assert_eq!(product.categories.len(), 1);
    }
}
