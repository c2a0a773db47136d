use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all_paged::{
    GetAllProductsPagedParams, GetAllProductsPagedUseCase,
};
use crate::domain::shared::pagination::Page;

pub struct GetAllProductsPagedUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsPagedUseCase for GetAllProductsPagedUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductsPagedParams,
    ) -> Result<Page<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products page {} (size {}, sort {})",
            params.page_request.page(),
            params.page_request.size(),
            params.sort
        ));

        let page = self
            .repository
            .find_all_paged(&params.page_request, &params.sort)
            .await?;

        self.logger.info(&format!(
            "Found {} products of {} total",
            page.number_of_elements(),
            page.total_elements
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::Category;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::{ProductSort, ProductSortField};
    use crate::domain::shared::pagination::{PageRequest, SortDirection};
    use crate::test_support::{MockProductRepo, mock_logger};
    use chrono::Utc;

    fn use_case_with(repository: MockProductRepo) -> GetAllProductsPagedUseCaseImpl {
        GetAllProductsPagedUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_requested_page_when_products_exist() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_all_paged()
            .withf(|page, sort| {
                page.page() == 1
                    && page.size() == 2
                    && sort.field == ProductSortField::Price
                    && sort.direction == SortDirection::Desc
            })
            .returning(|page, _| {
                Ok(Page::new(
                    vec![Product::from_repository(
                        3,
                        "Macbook Pro".to_string(),
                        "Laptop".to_string(),
                        1250.0,
                        None,
                        Utc::now(),
                        vec![Category::new(2, "Electronics")],
                    )],
                    page,
                    3,
                ))
            });

        let result = use_case_with(mock_repo)
            .execute(GetAllProductsPagedParams {
                page_request: PageRequest::new(1, 2),
                sort: ProductSort::new(ProductSortField::Price, SortDirection::Desc),
            })
            .await;

        let page = result.unwrap();
        assert_eq!(page.number, 1);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.content[0].name, "Macbook Pro");
        assert!(page.is_last());
    }

    #[tokio::test]
    async fn should_propagate_repository_error_when_listing_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_all_paged()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let result = use_case_with(mock_repo)
            .execute(GetAllProductsPagedParams {
                page_request: PageRequest::new(0, 12),
                sort: ProductSort::default(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
