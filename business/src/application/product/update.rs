use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let draft = ProductDraft::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            img_url: params.img_url,
            date: params.date,
            category_ids: params.category_ids,
        })?;

        let updated_product = self
            .repository
            .update(params.id, &draft)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                RepositoryError::IntegrityViolation => ProductError::UnknownCategory,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
