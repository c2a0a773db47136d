use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::{Product, ProductDraft};
use super::value_objects::ProductSort;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all_paged(
        &self,
        page: &PageRequest,
        sort: &ProductSort,
    ) -> Result<Page<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Stores a new product and returns it with its generated id.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    /// Replaces every field and category association of an existing product.
    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
