use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .find_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, mock_logger};
    use chrono::Utc;

    fn use_case_with(repository: MockProductRepo) -> GetProductByIdUseCaseImpl {
        GetProductByIdUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .returning(move |id| {
                Ok(Product::from_repository(
                    id,
                    "Phone".to_string(),
                    "Good phone".to_string(),
                    800.0,
                    None,
                    now,
                    vec![],
                ))
            });

        let result = use_case_with(mock_repo).execute(GetProductByIdParams { id: 1 }).await;

        let product = result.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Phone");
    }

    #[tokio::test]
    async fn should_return_error_when_product_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case_with(mock_repo).execute(GetProductByIdParams { id: 2 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_wrap_other_repository_errors() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case_with(mock_repo).execute(GetProductByIdParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
