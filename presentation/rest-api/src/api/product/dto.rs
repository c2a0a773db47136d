use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::category::model::Category;
use business::domain::product::model::Product;
use business::domain::shared::pagination::Page;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category identifier
    pub id: i64,
    /// Category name
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Reference to an existing category. Any other field sent along
/// (such as `name`) is ignored.
#[derive(Debug, Clone, Object)]
pub struct CategoryRef {
    /// Category identifier
    pub id: i64,
}

/// Body of create and update requests. An `id` field in the body is
/// ignored; the path or the database decides the identifier.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description (cannot be empty)
    pub description: String,
    /// Unit price (cannot be negative)
    pub price: f64,
    /// Image URL
    #[oai(skip_serializing_if_is_none)]
    pub img_url: Option<String>,
    /// Release date
    pub date: DateTime<Utc>,
    /// Categories the product belongs to
    #[oai(default)]
    pub categories: Vec<CategoryRef>,
}

impl ProductRequest {
    pub fn category_ids(&self) -> Vec<i64> {
        self.categories.iter().map(|c| c.id).collect()
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Image URL
    #[oai(skip_serializing_if_is_none)]
    pub img_url: Option<String>,
    /// Release date
    pub date: DateTime<Utc>,
    /// Categories the product belongs to
    pub categories: Vec<CategoryResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            img_url: product.img_url,
            date: product.date,
            categories: product.categories.into_iter().map(Into::into).collect(),
        }
    }
}

/// One page of products
#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    /// Products on this page
    pub content: Vec<ProductResponse>,
    /// Number of products across all pages
    pub total_elements: u64,
    /// Number of pages for the current page size
    pub total_pages: u64,
    /// Zero-based page number
    pub number: u32,
    /// Requested page size
    pub size: u32,
    /// Number of products on this page
    pub number_of_elements: u64,
    /// Whether this is the first page
    pub first: bool,
    /// Whether no page follows this one
    pub last: bool,
    /// Whether this page has no products
    pub empty: bool,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let number_of_elements = page.number_of_elements() as u64;
        let first = page.is_first();
        let last = page.is_last();
        let empty = page.is_empty();
        let page = page.map(ProductResponse::from);

        Self {
            content: page.content,
            total_elements: page.total_elements,
            total_pages,
            number: page.number,
            size: page.size,
            number_of_elements,
            first,
            last,
            empty,
        }
    }
}
