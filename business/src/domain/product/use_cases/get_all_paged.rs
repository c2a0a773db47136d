use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductSort;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct GetAllProductsPagedParams {
    pub page_request: PageRequest,
    pub sort: ProductSort,
}

#[async_trait]
pub trait GetAllProductsPagedUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllProductsPagedParams,
    ) -> Result<Page<Product>, ProductError>;
}
