use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductSort, ProductSortField};
use business::domain::shared::pagination::{Page, PageRequest, SortDirection};

use super::entity::{ProductCategoryEntity, ProductEntity, group_by_product};

const PRODUCT_COLUMNS: &str = "id, name, description, price, img_url, date";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn attach_categories(
        &self,
        entities: Vec<ProductEntity>,
    ) -> Result<Vec<Product>, RepositoryError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let rows = sqlx::query_as::<_, ProductCategoryEntity>(
            "SELECT pc.product_id, c.id, c.name FROM tb_product_category pc INNER JOIN tb_category c ON c.id = pc.category_id WHERE pc.product_id = ANY($1) ORDER BY c.id",
        )
        .bind(ids.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut categories = group_by_product(rows);
        Ok(entities
            .into_iter()
            .map(|e| {
                let product_categories = categories.remove(&e.id).unwrap_or_default();
                e.into_domain(product_categories)
            })
            .collect())
    }

    async fn replace_categories(
        tx: &mut Transaction<'_, Postgres>,
        product_id: i64,
        category_ids: &[i64],
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM tb_product_category WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        if category_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO tb_product_category (product_id, category_id) SELECT $1, UNNEST($2::BIGINT[])",
        )
        .bind(product_id)
        .bind(category_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all_paged(
        &self,
        page: &PageRequest,
        sort: &ProductSort,
    ) -> Result<Page<Product>, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_product")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let sql = format!(
            "SELECT {} FROM tb_product ORDER BY {} LIMIT $1 OFFSET $2",
            PRODUCT_COLUMNS,
            order_by_clause(sort)
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(i64::from(page.size()))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let products = self.attach_categories(entities).await?;
        Ok(Page::new(products, page, total.max(0) as u64))
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM tb_product WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        self.attach_categories(vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tb_product (name, description, price, img_url, date) VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(&draft.img_url)
        .bind(draft.date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        Self::replace_categories(&mut tx, id, &draft.category_ids).await?;
        tx.commit().await.map_err(map_sqlx_error)?;

        self.find_by_id(id).await
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(
            "UPDATE tb_product SET name = $2, description = $3, price = $4, img_url = $5, date = $6 WHERE id = $1",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(&draft.img_url)
        .bind(draft.date)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Self::replace_categories(&mut tx, id, &draft.category_ids).await?;
        tx.commit().await.map_err(map_sqlx_error)?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tb_product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Whitelisted ORDER BY clause. Ties are broken by id so paging is stable.
fn order_by_clause(sort: &ProductSort) -> String {
    let column = match sort.field {
        ProductSortField::Id => "id",
        ProductSortField::Name => "name",
        ProductSortField::Price => "price",
        ProductSortField::Date => "date",
    };
    let direction = match sort.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };

    if sort.field == ProductSortField::Id {
        format!("{} {}", column, direction)
    } else {
        format!("{} {}, id ASC", column, direction)
    }
}

fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => {
            RepositoryError::IntegrityViolation
        }
        _ => {
            tracing::error!("Database error: {error}");
            RepositoryError::DatabaseError
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    /// Constraint the server reports as violated.
    #[derive(Debug, Clone, Copy)]
    enum Violation {
        ForeignKey,
        Unique,
    }

    #[derive(Debug)]
    struct ServerError(Violation);

    impl fmt::Display for ServerError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "server rejected statement: {:?}", self.0)
        }
    }

    impl StdError for ServerError {}

    impl DatabaseError for ServerError {
        fn message(&self) -> &str {
            "server rejected statement"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            match self.0 {
                Violation::ForeignKey => Some(Cow::Borrowed("23503")),
                Violation::Unique => Some(Cow::Borrowed("23505")),
            }
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.0 {
                Violation::ForeignKey => ErrorKind::ForeignKeyViolation,
                Violation::Unique => ErrorKind::UniqueViolation,
            }
        }
    }

    fn server_error(violation: Violation) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ServerError(violation)))
    }

    #[test]
    fn should_order_by_id_only_when_sorting_by_id() {
        let clause = order_by_clause(&ProductSort::default());

        assert_eq!(clause, "id ASC");
    }

    #[test]
    fn should_break_ties_by_id_when_sorting_by_other_field() {
        let clause = order_by_clause(&ProductSort::new(
            ProductSortField::Price,
            SortDirection::Desc,
        ));

        assert_eq!(clause, "price DESC, id ASC");
    }

    #[test]
    fn should_map_row_not_found_to_not_found() {
        let error = map_sqlx_error(sqlx::Error::RowNotFound);

        assert!(matches!(error, RepositoryError::NotFound));
    }

    #[test]
    fn should_map_pool_errors_to_database_error() {
        let error = map_sqlx_error(sqlx::Error::PoolTimedOut);

        assert!(matches!(error, RepositoryError::DatabaseError));
    }

    #[test]
    fn should_map_foreign_key_violation_to_integrity_violation() {
        let error = map_sqlx_error(server_error(Violation::ForeignKey));

        assert!(matches!(error, RepositoryError::IntegrityViolation));
    }

    #[test]
    fn should_map_other_constraint_violations_to_database_error() {
        let error = map_sqlx_error(server_error(Violation::Unique));

        assert!(matches!(error, RepositoryError::DatabaseError));
    }
}
