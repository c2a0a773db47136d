use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductSort;
use crate::domain::shared::pagination::{Page, PageRequest};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_all_paged(&self, page: &PageRequest, sort: &ProductSort) -> Result<Page<Product>, RepositoryError>;
        async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
        async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
        async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

/// Logger that accepts any call.
pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}
